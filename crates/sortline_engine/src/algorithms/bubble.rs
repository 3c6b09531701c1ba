//! Bubble sort with early exit on a clean pass.

use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, mut arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Bubble Sort");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            rec.record(
                &arr,
                format!("Comparing {} and {}", arr[j], arr[j + 1]),
                Highlights::none().comparing([j, j + 1]),
            );
            if rec.compare(arr[j], arr[j + 1]) {
                rec.swap(&mut arr, j, j + 1);
                swapped = true;
                rec.record(
                    &arr,
                    format!("Swapped {} and {}", arr[j], arr[j + 1]),
                    Highlights::none().swapping([j, j + 1]),
                );
            }
        }
        rec.record(
            &arr,
            format!(
                "Pass {} complete. Largest {} elements are sorted.",
                pass + 1,
                pass + 1
            ),
            Highlights::none().sorted(n - pass - 1..n),
        );
        if !swapped {
            break;
        }
    }

    rec.note(&arr, "Bubble Sort completed!");
    arr
}

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::algorithms::testing::run_default;
    use sortline_ledger::HighlightRole;

    #[test]
    fn test_bubble_scenario() {
        let (out, rec) = run_default(Algorithm::Bubble, &[5i64, 3, 4, 1, 2]);
        assert_eq!(out, vec![1, 2, 3, 4, 5]);

        let texts: Vec<_> = rec.ledger().explanations().collect();
        assert!(texts[0].starts_with("Start"));
        assert!(texts[texts.len() - 2].starts_with("Pass "));
        assert!(texts[texts.len() - 2].contains("complete"));
        assert_eq!(texts[texts.len() - 1], "Bubble Sort completed!");
    }

    #[test]
    fn test_bubble_counters() {
        let (out, rec) = run_default(Algorithm::Bubble, &[3i64, 1, 2]);
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(rec.counters().comparisons, 3);
        assert_eq!(rec.counters().swaps, 2);
        assert_eq!(rec.len(), 9);
    }

    #[test]
    fn test_bubble_sorted_input_single_pass() {
        let (_, rec) = run_default(Algorithm::Bubble, &[1i64, 2, 3, 4]);
        assert_eq!(rec.counters().comparisons, 3);
        assert_eq!(rec.counters().swaps, 0);
        let pass = &rec.ledger()[rec.len() - 2];
        assert_eq!(pass.explanation(), "Pass 1 complete. Largest 1 elements are sorted.");
        assert!(pass.highlights().contains(HighlightRole::Sorted, 3));
    }

    #[test]
    fn test_bubble_swap_step_shows_new_state() {
        let (_, rec) = run_default(Algorithm::Bubble, &[2i64, 1]);
        let swap = rec
            .ledger()
            .iter()
            .find(|s| s.explanation().starts_with("Swapped"))
            .unwrap();
        assert_eq!(swap.array(), &[1, 2]);
        assert_eq!(swap.explanation(), "Swapped 1 and 2");
    }
}
