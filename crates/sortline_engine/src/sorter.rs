//! One sorting run over one input.
//!
//! A [`Sorter`] owns the unmodified input, executes eagerly on the first
//! call to [`Sorter::sort`] and then serves its ledger for playback. It is
//! never reset; a new run means a new sorter.

use crate::algorithm::Algorithm;
use crate::algorithms;
use crate::config::SortConfig;
use crate::recorder::{Counters, Recorder};
use serde::{Deserialize, Serialize};
use sortline_core::{Duration, SortValue, Timestamp};
use sortline_ledger::{Step, StepLedger};
use std::borrow::Cow;
use tracing::debug;

/// Sole step recorded by a catalog entry without an implementation
pub const NOT_IMPLEMENTED: &str = "This algorithm is not implemented yet.";

/// Aggregate figures for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Counted comparisons
    pub comparisons: u64,
    /// Counted exchanges and moves
    pub swaps: u64,
    /// Wall time between start and end of the run
    pub elapsed: Duration,
}

impl Metrics {
    /// Linear share of these figures, `progress` clamped to `[0, 1]`
    #[must_use]
    pub fn scaled(&self, progress: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            comparisons: (self.comparisons as f64 * progress) as u64,
            swaps: (self.swaps as f64 * progress) as u64,
            elapsed: self.elapsed.scaled(progress),
        }
    }

    /// Estimate at playback position `index` of `total` steps: scaled by
    /// `min(1, index / total)`, or unscaled for an empty ledger
    #[must_use]
    pub fn estimated_at(&self, index: usize, total: usize) -> Self {
        if total == 0 {
            return *self;
        }
        self.scaled(index as f64 / total as f64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Strategy {
    Run(Algorithm),
    Placeholder { name: String },
}

/// A single instrumented run
#[derive(Debug, Clone)]
pub struct Sorter<V> {
    original: Vec<V>,
    strategy: Strategy,
    config: SortConfig,
    recorder: Recorder<V>,
    started_at: Option<Timestamp>,
    finished_at: Option<Timestamp>,
    output: Option<Vec<V>>,
}

impl<V: SortValue> Sorter<V> {
    pub(crate) fn new(input: &[V], strategy: Strategy, config: SortConfig) -> Self {
        Self {
            original: input.to_vec(),
            strategy,
            config,
            recorder: Recorder::new(),
            started_at: None,
            finished_at: None,
            output: None,
        }
    }

    /// Run the algorithm to completion and return the final sequence.
    ///
    /// The first call does all the work. Later calls return the same
    /// output without recording anything.
    pub fn sort(&mut self) -> &[V] {
        if self.output.is_none() {
            self.started_at = Some(Timestamp::now());
            debug!(algorithm = %self.name(), len = self.original.len(), "sort started");

            let output = match &self.strategy {
                Strategy::Run(algorithm) => algorithms::run(
                    *algorithm,
                    &mut self.recorder,
                    self.original.clone(),
                    &self.config,
                ),
                Strategy::Placeholder { .. } => {
                    self.recorder.note(&self.original, NOT_IMPLEMENTED);
                    self.original.clone()
                }
            };

            self.finished_at = Some(Timestamp::now());
            let counters = self.recorder.counters();
            debug!(
                algorithm = %self.name(),
                steps = self.recorder.len(),
                comparisons = counters.comparisons,
                swaps = counters.swaps,
                "sort finished"
            );
            self.output = Some(output);
        }
        self.output.as_deref().unwrap_or_default()
    }

    /// Recorded steps in execution order; empty before [`Sorter::sort`]
    #[must_use]
    pub fn steps(&self) -> &StepLedger<V> {
        self.recorder.ledger()
    }

    /// Step at `index`, or the synthetic "Initial state" step when out of range
    #[must_use]
    pub fn state_at(&self, index: usize) -> Cow<'_, Step<V>> {
        match self.steps().get(index) {
            Some(step) => Cow::Borrowed(step),
            None => Cow::Owned(Step::initial(&self.original)),
        }
    }

    /// Counters and elapsed time; a run still in progress measures up to now
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        let now = Timestamp::now();
        let start = self.started_at.unwrap_or(now);
        let end = self.finished_at.unwrap_or(now);
        let Counters { comparisons, swaps } = self.recorder.counters();
        Metrics {
            comparisons,
            swaps,
            elapsed: end.duration_since(&start),
        }
    }

    /// Final metrics prorated to playback position `index`
    #[must_use]
    pub fn estimated_metrics_at(&self, index: usize) -> Metrics {
        self.metrics().estimated_at(index, self.steps().len())
    }

    /// Identifier this sorter was created from
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.strategy {
            Strategy::Run(algorithm) => algorithm.name(),
            Strategy::Placeholder { name } => name,
        }
    }

    /// The algorithm, unless this is a placeholder
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self.strategy {
            Strategy::Run(algorithm) => Some(algorithm),
            Strategy::Placeholder { .. } => None,
        }
    }

    /// True for a catalog entry without an implementation
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.strategy, Strategy::Placeholder { .. })
    }

    /// The input exactly as supplied
    #[must_use]
    pub fn original(&self) -> &[V] {
        &self.original
    }

    /// Final sequence, once sorted
    #[must_use]
    pub fn output(&self) -> Option<&[V]> {
        self.output.as_deref()
    }

    /// Raw counters
    #[must_use]
    pub fn counters(&self) -> Counters {
        self.recorder.counters()
    }

    /// When the run started and finished
    #[must_use]
    pub fn timestamps(&self) -> (Option<Timestamp>, Option<Timestamp>) {
        (self.started_at, self.finished_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorter(algorithm: Algorithm, input: &[i64]) -> Sorter<i64> {
        Sorter::new(input, Strategy::Run(algorithm), SortConfig::default())
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut s = sorter(Algorithm::Bubble, &[3, 1, 2]);
        assert_eq!(s.sort(), &[1, 2, 3]);
        let steps = s.steps().len();
        let counters = s.counters();
        assert_eq!(s.sort(), &[1, 2, 3]);
        assert_eq!(s.steps().len(), steps);
        assert_eq!(s.counters(), counters);
    }

    #[test]
    fn test_original_is_preserved() {
        let mut s = sorter(Algorithm::Quick, &[3, 1, 2]);
        s.sort();
        assert_eq!(s.original(), &[3, 1, 2]);
        assert_eq!(s.output(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_state_at_out_of_range() {
        let mut s = sorter(Algorithm::Merge, &[2, 1]);
        s.sort();
        let state = s.state_at(10_000);
        assert_eq!(state.explanation(), "Initial state");
        assert_eq!(state.array(), &[2, 1]);
        assert!(state.highlights().is_empty());
        assert!(matches!(s.state_at(0), Cow::Borrowed(_)));
    }

    #[test]
    fn test_state_at_before_sort() {
        let s = sorter(Algorithm::Heap, &[4, 2]);
        assert!(s.steps().is_empty());
        assert_eq!(s.state_at(0).explanation(), "Initial state");
    }

    #[test]
    fn test_timestamps_ordered() {
        let mut s = sorter(Algorithm::Shell, &[5, 4, 3, 2, 1]);
        assert_eq!(s.timestamps(), (None, None));
        s.sort();
        let (start, end) = s.timestamps();
        assert!(start.unwrap() <= end.unwrap());
    }

    #[test]
    fn test_metrics_match_counters() {
        let mut s = sorter(Algorithm::Bubble, &[3, 1, 2]);
        s.sort();
        let metrics = s.metrics();
        assert_eq!(metrics.comparisons, 3);
        assert_eq!(metrics.swaps, 2);
        assert_eq!(s.metrics().elapsed, metrics.elapsed);
    }

    #[test]
    fn test_estimated_metrics() {
        let mut s = sorter(Algorithm::Bubble, &[3, 1, 2]);
        s.sort();
        let total = s.steps().len();
        assert_eq!(s.estimated_metrics_at(0).comparisons, 0);
        assert_eq!(s.estimated_metrics_at(total).comparisons, 3);
        assert_eq!(s.estimated_metrics_at(total * 4).swaps, 2);
        let half = s.estimated_metrics_at(total / 2);
        assert!(half.comparisons <= 3);
    }

    #[test]
    fn test_placeholder_records_one_step() {
        let mut s = Sorter::new(
            &[3i64, 1, 2],
            Strategy::Placeholder {
                name: "Bubble Sort".to_string(),
            },
            SortConfig::default(),
        );
        assert_eq!(s.sort(), &[3, 1, 2]);
        assert_eq!(s.steps().len(), 1);
        assert_eq!(s.steps()[0].explanation(), NOT_IMPLEMENTED);
        assert!(s.is_placeholder());
        assert_eq!(s.algorithm(), None);
        assert_eq!(s.name(), "Bubble Sort");
    }

    #[test]
    fn test_metrics_scaled_clamps() {
        let m = Metrics {
            comparisons: 10,
            swaps: 4,
            elapsed: Duration::from_millis(1000),
        };
        assert_eq!(m.scaled(0.5).comparisons, 5);
        assert_eq!(m.scaled(2.0).comparisons, 10);
        assert_eq!(m.scaled(-1.0).swaps, 0);
    }

    #[test]
    fn test_estimated_at_uses_index_over_total() {
        let m = Metrics {
            comparisons: 3,
            swaps: 2,
            elapsed: Duration::zero(),
        };
        assert_eq!(m.estimated_at(8, 9).comparisons, 2);
        assert_eq!(m.estimated_at(9, 9).comparisons, 3);
        assert_eq!(m.estimated_at(0, 0), m);
    }
}
