//! Hash chain over a ledger for reproducibility checks.
//!
//! Link `i` is `link[i-1] || encode(step[i])`, seeded with the empty hash.
//! Two runs recorded the same trace exactly when their tips match.

use crate::encoding::CanonicalEncode;
use crate::ledger::StepLedger;
use serde::Serialize;
use sortline_core::{CoreError, CoreResult, Hash};

/// Per-step chained hashes of a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerChain {
    links: Vec<Hash>,
}

impl LedgerChain {
    /// Build the chain for a ledger
    ///
    /// # Errors
    ///
    /// Returns error if a step cannot be encoded
    pub fn from_ledger<V: Serialize>(ledger: &StepLedger<V>) -> CoreResult<Self> {
        let mut links = Vec::with_capacity(ledger.len());
        let mut prev = Hash::empty();
        for step in ledger {
            prev = prev.chain(&step.encode()?);
            links.push(prev);
        }
        Ok(Self { links })
    }

    /// Link hash after step `index`
    #[must_use]
    pub fn link(&self, index: usize) -> Option<Hash> {
        self.links.get(index).copied()
    }

    /// Digest of the whole ledger; the empty hash for an empty ledger
    #[must_use]
    pub fn digest(&self) -> Hash {
        self.links.last().copied().unwrap_or_default()
    }

    /// Number of links
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if chain is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Check the digest against a stored hex string
    ///
    /// # Errors
    ///
    /// Returns `DigestMismatch` if the digests differ or the hex is malformed
    pub fn verify(&self, expected_hex: &str) -> CoreResult<()> {
        let actual = self.digest();
        match Hash::from_hex(expected_hex) {
            Ok(expected) if expected == actual => Ok(()),
            _ => Err(CoreError::DigestMismatch {
                expected: expected_hex.to_string(),
                actual: actual.to_hex(),
            }),
        }
    }
}

/// Index of the first step at which two ledgers differ.
///
/// A ledger that is a strict prefix of the other diverges at its length.
/// Returns `None` when the ledgers are identical.
///
/// # Errors
///
/// Returns error if a step cannot be encoded
pub fn first_divergence<V: Serialize>(
    left: &StepLedger<V>,
    right: &StepLedger<V>,
) -> CoreResult<Option<usize>> {
    let left = LedgerChain::from_ledger(left)?;
    let right = LedgerChain::from_ledger(right)?;
    let shared = left.len().min(right.len());

    if let Some(index) = (0..shared).find(|&i| left.link(i) != right.link(i)) {
        return Ok(Some(index));
    }
    if left.len() != right.len() {
        return Ok(Some(shared));
    }
    Ok(None)
}
