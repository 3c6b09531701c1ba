//! The fifteen instrumented algorithms.
//!
//! Every algorithm takes ownership of a working copy of the input, records
//! through the shared [`Recorder`] and hands back the final sequence. The
//! first step is always the algorithm's start banner and the last step's
//! state is always the returned sequence.

mod bogo;
mod bubble;
mod bucket;
mod cocktail;
mod comb;
mod counting;
mod heap;
mod insertion;
mod intro;
mod merge;
mod pigeonhole;
mod quick;
mod radix;
mod selection;
mod shell;

use crate::algorithm::Algorithm;
use crate::config::SortConfig;
use crate::recorder::Recorder;
use sortline_core::SortValue;

/// Run `algorithm` over `arr`, recording into `rec`
pub(crate) fn run<V: SortValue>(
    algorithm: Algorithm,
    rec: &mut Recorder<V>,
    arr: Vec<V>,
    config: &SortConfig,
) -> Vec<V> {
    match algorithm {
        Algorithm::Bubble => bubble::sort(rec, arr),
        Algorithm::Insertion => insertion::sort(rec, arr),
        Algorithm::Selection => selection::sort(rec, arr),
        Algorithm::Merge => merge::sort(rec, arr),
        Algorithm::Quick => quick::sort(rec, arr),
        Algorithm::Heap => heap::sort(rec, arr),
        Algorithm::Shell => shell::sort(rec, arr),
        Algorithm::Counting => counting::sort(rec, arr),
        Algorithm::Radix => radix::sort(rec, arr),
        Algorithm::Bucket => bucket::sort(rec, arr),
        Algorithm::Pigeonhole => pigeonhole::sort(rec, arr, config),
        Algorithm::Cocktail => cocktail::sort(rec, arr),
        Algorithm::Comb => comb::sort(rec, arr, config),
        Algorithm::Intro => intro::sort(rec, arr, config),
        Algorithm::Bogo => bogo::sort(rec, arr, config),
    }
}

/// Render values the way explanations quote them: `[1, 2, 3]`
pub(crate) fn list<V: SortValue>(values: &[V]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for the per-algorithm tests.

    use super::*;
    use sortline_ledger::Step;
    use std::cmp::Ordering;
    use std::fmt;

    /// Integer key carrying its input position, ordered by key alone
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Tagged {
        pub key: i64,
        pub tag: u32,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    impl fmt::Display for Tagged {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.key)
        }
    }

    impl SortValue for Tagged {
        fn to_key(&self) -> i64 {
            self.key
        }

        fn to_real(&self) -> f64 {
            self.key as f64
        }

        fn negated(&self) -> Self {
            Self {
                key: -self.key,
                tag: self.tag,
            }
        }
    }

    /// Tag each key with its input position
    pub fn tagged(keys: &[i64]) -> Vec<Tagged> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Tagged {
                key,
                tag: tag as u32,
            })
            .collect()
    }

    /// Equal keys appear in ascending tag order
    pub fn is_stable(out: &[Tagged]) -> bool {
        out.windows(2)
            .all(|w| w[0].key < w[1].key || (w[0].key == w[1].key && w[0].tag < w[1].tag))
    }

    /// Run with the default configuration
    pub fn run_default<V: SortValue>(algorithm: Algorithm, input: &[V]) -> (Vec<V>, Recorder<V>) {
        let mut rec = Recorder::new();
        let out = run(algorithm, &mut rec, input.to_vec(), &SortConfig::default());
        (out, rec)
    }

    /// Sorted copy used as the oracle
    pub fn oracle(input: &[i64]) -> Vec<i64> {
        let mut expected = input.to_vec();
        expected.sort_unstable();
        expected
    }

    /// Structural checks every ledger must pass
    pub fn assert_ledger_shape<V: SortValue>(algorithm: Algorithm, rec: &Recorder<V>, out: &[V]) {
        let ledger = rec.ledger();
        let first = ledger.first().map(Step::explanation).unwrap_or_default();
        assert!(
            first.starts_with("Start"),
            "{algorithm}: first step was {first:?}"
        );
        let last = ledger.last().expect("ledger is never empty");
        assert_eq!(last.array(), out, "{algorithm}: last state differs from output");
        assert!(ledger.iter().all(Step::highlights_in_bounds));
    }
}
