//! Iterative quick sort with Lomuto partitioning.

use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, mut arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Quick Sort (Iterative)");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let mut placed = Vec::new();
    let mut stack = vec![(0, arr.len() - 1)];
    while let Some((low, high)) = stack.pop() {
        if low >= high {
            continue;
        }
        rec.record(
            &arr,
            format!("Partitioning subarray [{low}:{}]", high + 1),
            Highlights::none().comparing(low..=high),
        );
        let pivot = partition(rec, &mut arr, low, high);
        rec.record(
            &arr,
            format!("Pivot {} placed at index {pivot}", arr[pivot]),
            Highlights::none()
                .swapping([pivot])
                .comparing(low..=high),
        );
        placed.push(pivot);

        stack.push((pivot + 1, high));
        if pivot > low {
            stack.push((low, pivot - 1));
        }
        rec.record(
            &arr,
            format!(
                "Subarray [{low}:{}] partitioned. Pivot {} is sorted.",
                high + 1,
                arr[pivot]
            ),
            Highlights::none().sorted(placed.iter().copied()),
        );
    }

    rec.note(&arr, "Quick Sort completed!");
    arr
}

/// Lomuto partition of `arr[low..=high]` around its last element.
///
/// Returns the pivot's final index. Everything left of it is `<=` the pivot.
pub(crate) fn partition<V: SortValue>(
    rec: &mut Recorder<V>,
    arr: &mut [V],
    low: usize,
    high: usize,
) -> usize {
    let pivot = arr[high];
    let mut store = low;
    for j in low..high {
        rec.record(
            arr,
            format!("Comparing {} with pivot {pivot}", arr[j]),
            Highlights::none().comparing([j, high]),
        );
        if rec.compare(arr[j], pivot) {
            continue;
        }
        if store != j {
            rec.swap(arr, store, j);
            rec.record(
                arr,
                format!("Swapped {} and {}", arr[store], arr[j]),
                Highlights::none().swapping([store, j]),
            );
        }
        store += 1;
    }
    rec.swap(arr, store, high);
    store
}
