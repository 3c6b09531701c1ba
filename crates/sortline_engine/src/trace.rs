//! Exported record of a finished run.
//!
//! A trace carries everything playback needs without the engine: the input,
//! the ledger, the final metrics and the ledger digest. Importing a trace
//! recomputes the digest, so an edited file is rejected before it is shown.

use crate::sorter::{Metrics, Sorter};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sortline_core::{CoreError, CoreResult, SortValue};
use sortline_ledger::{CanonicalDecode, CanonicalEncode, LedgerChain, Step, StepLedger};
use std::borrow::Cow;

/// Serializable snapshot of a sorted run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord<V> {
    /// Identifier the run was created from
    pub algorithm: String,
    /// Input as supplied
    pub original: Vec<V>,
    /// Final sequence
    pub output: Vec<V>,
    /// Every recorded step
    pub steps: StepLedger<V>,
    /// Final metrics
    pub metrics: Metrics,
    /// Hex BLAKE3 chain digest of `steps`
    pub digest: String,
}

impl<V: SortValue + Serialize> TraceRecord<V> {
    /// Capture a finished sorter
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the sorter has not been run
    pub fn from_sorter(sorter: &Sorter<V>) -> CoreResult<Self> {
        let output = sorter
            .output()
            .ok_or_else(|| CoreError::validation("sorter", "has not been run"))?;
        let steps = sorter.steps().clone();
        let digest = LedgerChain::from_ledger(&steps)?.digest().to_hex();
        Ok(Self {
            algorithm: sorter.name().to_string(),
            original: sorter.original().to_vec(),
            output: output.to_vec(),
            steps,
            metrics: sorter.metrics(),
            digest,
        })
    }

    /// Check the digest and that the last step shows the output
    ///
    /// # Errors
    ///
    /// Returns `DigestMismatch` for a tampered ledger, `Validation` for an
    /// inconsistent record
    pub fn verify(&self) -> CoreResult<()> {
        LedgerChain::from_ledger(&self.steps)?.verify(&self.digest)?;
        match self.steps.last() {
            Some(last) if last.array() == self.output.as_slice() => Ok(()),
            Some(_) => Err(CoreError::validation(
                "output",
                "differs from the final step",
            )),
            None => Err(CoreError::validation("steps", "ledger is empty")),
        }
    }

    /// Step at `index`, or the "Initial state" step when out of range
    #[must_use]
    pub fn state_at(&self, index: usize) -> Cow<'_, Step<V>> {
        match self.steps.get(index) {
            Some(step) => Cow::Borrowed(step),
            None => Cow::Owned(Step::initial(&self.original)),
        }
    }

    /// Final metrics prorated to playback position `index`
    #[must_use]
    pub fn estimated_metrics_at(&self, index: usize) -> Metrics {
        self.metrics.estimated_at(index, self.steps.len())
    }
}

impl<V: SortValue + Serialize + DeserializeOwned> TraceRecord<V> {
    /// Decode a trace and verify it
    ///
    /// # Errors
    ///
    /// Returns error on malformed JSON or a failed verification
    pub fn import(data: &[u8]) -> CoreResult<Self> {
        let trace = Self::decode(data)?;
        trace.verify()?;
        Ok(trace)
    }
}

impl<V: Serialize> CanonicalEncode for TraceRecord<V> {}
