//! Bogo sort: shuffle until sorted, up to a fixed attempt cap.
//!
//! Shuffles come from a seeded ChaCha stream so a run is reproducible.

use crate::config::SortConfig;
use crate::recorder::Recorder;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use sortline_core::SortValue;
use sortline_ledger::Highlights;
use tracing::{debug, warn};

pub(crate) fn sort<V: SortValue>(
    rec: &mut Recorder<V>,
    mut arr: Vec<V>,
    config: &SortConfig,
) -> Vec<V> {
    rec.note(&arr, "Start Bogo Sort (Random Shuffle Until Sorted)");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    if n > config.bogo_size_warning {
        debug!(n, "bogo sort on a large input");
        rec.note(
            &arr,
            format!(
                "Bogo Sort is EXTREMELY SLOW for n > {}! Consider using a real sorting algorithm instead.",
                config.bogo_size_warning
            ),
        );
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.bogo_seed);
    let mut attempts: u64 = 0;
    let mut sorted = is_sorted(rec, &arr);
    while !sorted {
        if attempts >= config.bogo_max_attempts {
            warn!(attempts, "bogo sort gave up");
            rec.note(
                &arr,
                format!(
                    "Gave up after {attempts} attempts! Array may never sort randomly."
                ),
            );
            break;
        }
        attempts += 1;
        arr.shuffle(&mut rng);
        rec.count_moves(n);
        if attempts <= 10 || attempts % 100 == 0 {
            rec.record(
                &arr,
                format!("Attempt {attempts}: Random shuffle"),
                Highlights::none().comparing(0..n),
            );
        }
        sorted = is_sorted(rec, &arr);
    }

    if sorted {
        rec.note(&arr, format!("Bogo Sort completed in {attempts} attempts!"));
    } else {
        rec.note(&arr, "Bogo Sort failed to sort within attempt limit.");
    }
    arr
}

/// Ascending check; stops at the first inversion
fn is_sorted<V: SortValue>(rec: &mut Recorder<V>, arr: &[V]) -> bool {
    arr.windows(2).all(|pair| !rec.compare(pair[0], pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::algorithms::testing::run_default;

    #[test]
    fn test_bogo_single_element() {
        let (out, rec) = run_default(Algorithm::Bogo, &[1i64]);
        assert_eq!(out, vec![1]);
        assert_eq!(rec.len(), 2);
        assert!(rec.ledger()[0].explanation().starts_with("Start"));
        assert_eq!(rec.counters().swaps, 0);
        assert_eq!(rec.counters().comparisons, 0);
    }

    #[test]
    fn test_bogo_already_sorted_needs_no_shuffle() {
        let (_, rec) = run_default(Algorithm::Bogo, &[1i64, 2, 3]);
        assert_eq!(rec.counters().swaps, 0);
        assert_eq!(rec.counters().comparisons, 2);
        assert_eq!(rec.ledger().last().unwrap().explanation(), "Bogo Sort completed in 0 attempts!");
    }

    #[test]
    fn test_bogo_is_reproducible() {
        let (a, rec_a) = run_default(Algorithm::Bogo, &[3i64, 1, 2, 0]);
        let (b, rec_b) = run_default(Algorithm::Bogo, &[3i64, 1, 2, 0]);
        assert_eq!(a, b);
        assert_eq!(rec_a.ledger(), rec_b.ledger());
    }

    #[test]
    fn test_bogo_gives_up_at_cap() {
        let config = SortConfig {
            bogo_max_attempts: 1,
            ..SortConfig::default()
        };
        let input: Vec<i64> = (0..9).rev().collect();
        let mut rec = Recorder::new();
        let out = sort(&mut rec, input, &config);
        let texts: Vec<_> = rec.ledger().explanations().collect();
        assert!(texts.contains(&"Gave up after 1 attempts! Array may never sort randomly."));
        assert_eq!(texts[texts.len() - 1], "Bogo Sort failed to sort within attempt limit.");
        assert!(texts[1].starts_with("Bogo Sort is EXTREMELY SLOW"));
        assert_eq!(rec.counters().swaps, 9);
        assert_eq!(rec.ledger().last().unwrap().array(), out.as_slice());
    }
}
