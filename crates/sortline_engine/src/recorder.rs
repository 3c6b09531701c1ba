//! Instrumented operations shared by every algorithm.
//!
//! Algorithms never touch the ledger or the counters directly. Each
//! comparison goes through [`Recorder::compare`], each exchange through
//! [`Recorder::swap`] and each visible state through [`Recorder::record`].

use serde::{Deserialize, Serialize};
use sortline_core::SortValue;
use sortline_ledger::{Highlights, Step, StepLedger};

/// Explanation recorded for inputs of length 0 or 1
pub const ALREADY_SORTED: &str = "Array has 0 or 1 element. Already sorted!";

/// Operation counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Element comparisons, plus digit tallies for radix sort
    pub comparisons: u64,
    /// Exchanges, shifts and element writes
    pub swaps: u64,
}

/// Ledger plus counters for a single run
#[derive(Debug, Clone)]
pub struct Recorder<V> {
    ledger: StepLedger<V>,
    counters: Counters,
}

impl<V: SortValue> Recorder<V> {
    /// Fresh recorder with an empty ledger and zeroed counters
    #[must_use]
    pub fn new() -> Self {
        Self {
            ledger: StepLedger::new(),
            counters: Counters::default(),
        }
    }

    /// Counted comparison: true when `a` orders strictly after `b`
    pub fn compare(&mut self, a: V, b: V) -> bool {
        self.counters.comparisons += 1;
        a > b
    }

    /// Counted exchange of two positions. Swapping a slot with itself is a no-op.
    pub fn swap(&mut self, arr: &mut [V], i: usize, j: usize) {
        if i == j {
            return;
        }
        arr.swap(i, j);
        self.counters.swaps += 1;
    }

    /// Count one shift or write that is not a pairwise exchange
    pub fn count_move(&mut self) {
        self.counters.swaps += 1;
    }

    /// Count `n` element writes at once
    pub fn count_moves(&mut self, n: usize) {
        self.counters.swaps += n as u64;
    }

    /// Count a digit tally as a comparison
    pub fn count_probe(&mut self) {
        self.counters.comparisons += 1;
    }

    /// Append a snapshot of `arr`
    pub fn record(&mut self, arr: &[V], explanation: impl Into<String>, highlights: Highlights) {
        let step = Step::new(arr, explanation, highlights);
        debug_assert!(step.highlights_in_bounds(), "highlight index out of bounds");
        self.ledger.push(step);
    }

    /// Append a snapshot with no highlights
    pub fn note(&mut self, arr: &[V], explanation: impl Into<String>) {
        self.record(arr, explanation, Highlights::none());
    }

    /// Record the degenerate-input step and report whether the run is over
    pub fn short_circuit(&mut self, arr: &[V]) -> bool {
        if arr.len() > 1 {
            return false;
        }
        self.note(arr, ALREADY_SORTED);
        true
    }

    /// Current counters
    #[must_use]
    pub const fn counters(&self) -> Counters {
        self.counters
    }

    /// Steps recorded so far
    #[must_use]
    pub fn ledger(&self) -> &StepLedger<V> {
        &self.ledger
    }

    /// Number of steps recorded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    /// Check if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}

impl<V: SortValue> Default for Recorder<V> {
    fn default() -> Self {
        Self::new()
    }
}
