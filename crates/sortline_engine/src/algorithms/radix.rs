//! LSD radix sort, base 10.
//!
//! Negative keys are sorted by magnitude on their own and prepended in
//! reverse. The negative run is reversed before and after so ties keep
//! their input order.

use super::list;
use crate::recorder::Recorder;
use sortline_core::SortValue;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Radix Sort (LSD)");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let (negatives, non_negatives): (Vec<V>, Vec<V>) =
        arr.iter().copied().partition(|v| v.to_key() < 0);

    let mut sorted = Vec::with_capacity(arr.len());
    if !negatives.is_empty() {
        rec.note(
            &arr,
            format!(
                "Separating {} negative numbers for special handling",
                negatives.len()
            ),
        );
        let magnitudes: Vec<V> = negatives.iter().rev().map(SortValue::negated).collect();
        let by_magnitude = sort_non_negative(rec, magnitudes);
        sorted.extend(by_magnitude.iter().rev().map(SortValue::negated));
    }
    sorted.extend(sort_non_negative(rec, non_negatives));

    rec.note(&sorted, "Radix Sort completed!");
    sorted
}

fn digit<V: SortValue>(value: &V, place: u64) -> usize {
    ((value.to_key().unsigned_abs() / place) % 10) as usize
}

fn sort_non_negative<V: SortValue>(rec: &mut Recorder<V>, mut current: Vec<V>) -> Vec<V> {
    let Some(max) = current.iter().map(|v| v.to_key().unsigned_abs()).max() else {
        return current;
    };

    let mut place: u64 = 1;
    while max / place > 0 {
        rec.note(
            &current,
            format!("Sorting by digit at place {place} (units=1, tens=10, etc.)"),
        );
        current = sort_by_digit(rec, &current, place);
        rec.note(
            &current,
            format!("After sorting by digit {place}: {}", list(&current)),
        );
        match place.checked_mul(10) {
            Some(next) => place = next,
            None => break,
        }
    }
    current
}

/// Stable counting pass on one decimal digit
fn sort_by_digit<V: SortValue>(rec: &mut Recorder<V>, arr: &[V], place: u64) -> Vec<V> {
    let digits: Vec<usize> = arr.iter().map(|v| digit(v, place)).collect();

    let mut count = [0usize; 10];
    for &d in &digits {
        count[d] += 1;
        rec.count_probe();
    }
    for i in 1..10 {
        count[i] += count[i - 1];
    }

    let mut output = vec![V::default(); arr.len()];
    for (value, &d) in arr.iter().zip(&digits).rev() {
        count[d] -= 1;
        output[count[d]] = *value;
        rec.count_move();
    }
    output
}

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::algorithms::testing::{is_stable, run_default, tagged};

    #[test]
    fn test_radix_digit_passes() {
        let (out, rec) = run_default(Algorithm::Radix, &[170i64, 45, 75, 90, 802, 24, 2, 66]);
        assert_eq!(out, vec![2, 24, 45, 66, 75, 90, 170, 802]);
        let passes = rec
            .ledger()
            .explanations()
            .filter(|t| t.starts_with("Sorting by digit"))
            .count();
        assert_eq!(passes, 3);
        // every pass tallies and places all eight values
        assert_eq!(rec.counters().comparisons, 24);
        assert_eq!(rec.counters().swaps, 24);
    }

    #[test]
    fn test_radix_mixed_signs() {
        let (out, rec) = run_default(Algorithm::Radix, &[3i64, -12, 0, -5, 7, -12]);
        assert_eq!(out, vec![-12, -12, -5, 0, 3, 7]);
        assert!(
            rec.ledger()
                .explanations()
                .any(|t| t == "Separating 3 negative numbers for special handling")
        );
    }

    #[test]
    fn test_radix_negative_ties_stay_in_order() {
        let input = tagged(&[-3, -1, -3, -1, 2, -3]);
        let (out, _) = run_default(Algorithm::Radix, &input);
        assert!(is_stable(&out));
    }

    #[test]
    fn test_radix_all_zero() {
        let (out, rec) = run_default(Algorithm::Radix, &[0i64, 0, 0]);
        assert_eq!(out, vec![0, 0, 0]);
        assert_eq!(rec.counters().comparisons, 0);
    }
}
