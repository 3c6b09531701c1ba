//! Cocktail shaker sort: alternating forward and backward bubble passes.

use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, mut arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Cocktail Sort (Bidirectional Bubble)");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    let mut start = 0;
    let mut end = n - 1;
    let mut pass = 0;
    let mut swapped = true;

    while swapped && start < end {
        swapped = false;
        pass += 1;

        rec.record(
            &arr,
            format!("Pass {pass}a: Forward pass [{start}:{}]", end + 1),
            Highlights::none().comparing(start..=end),
        );
        for i in start..end {
            swapped |= bubble_pair(rec, &mut arr, i);
        }
        if !swapped {
            break;
        }
        end -= 1;
        rec.record(
            &arr,
            format!(
                "Pass {pass}a complete. Largest element {} is sorted.",
                arr[end + 1]
            ),
            Highlights::none().sorted(end + 1..n),
        );

        rec.record(
            &arr,
            format!("Pass {pass}b: Backward pass [{start}:{}]", end + 1),
            Highlights::none().comparing(start..=end),
        );
        for i in (start + 1..=end).rev() {
            swapped |= bubble_pair(rec, &mut arr, i - 1);
        }
        start += 1;
        rec.record(
            &arr,
            format!(
                "Pass {pass}b complete. Smallest element {} is sorted.",
                arr[start - 1]
            ),
            Highlights::none().sorted((0..start).chain(end + 1..n)),
        );
    }

    rec.note(&arr, "Cocktail Sort completed!");
    arr
}

/// Compare `arr[i]` with `arr[i + 1]` and exchange them if out of order
fn bubble_pair<V: SortValue>(rec: &mut Recorder<V>, arr: &mut [V], i: usize) -> bool {
    rec.record(
        arr,
        format!("Comparing {} and {}", arr[i], arr[i + 1]),
        Highlights::none().comparing([i, i + 1]),
    );
    if !rec.compare(arr[i], arr[i + 1]) {
        return false;
    }
    rec.swap(arr, i, i + 1);
    rec.record(
        arr,
        format!("Swapped {} and {}", arr[i], arr[i + 1]),
        Highlights::none().swapping([i, i + 1]),
    );
    true
}
