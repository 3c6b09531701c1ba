//! Insertion sort, plus the range variant IntroSort finishes small ranges with.

use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, mut arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Insertion Sort");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let high = arr.len() - 1;
    insert_range(rec, &mut arr, 0, high);

    rec.note(&arr, "Insertion Sort completed!");
    arr
}

/// Insertion-sort `arr[low..=high]` in place. Each shift counts as a swap.
pub(crate) fn insert_range<V: SortValue>(
    rec: &mut Recorder<V>,
    arr: &mut [V],
    low: usize,
    high: usize,
) {
    for i in low + 1..=high {
        let key = arr[i];
        rec.record(
            arr,
            format!("Inserting {key} into sorted subarray [{low}:{i}]"),
            Highlights::none().comparing([i]).sorted(low..i),
        );

        let mut hole = i;
        while hole > low {
            rec.record(
                arr,
                format!("Comparing {key} with {}", arr[hole - 1]),
                Highlights::none().comparing([hole - 1, i]),
            );
            if !rec.compare(arr[hole - 1], key) {
                break;
            }
            arr[hole] = arr[hole - 1];
            rec.count_move();
            hole -= 1;
            rec.record(
                arr,
                format!("Shifted {} right", arr[hole + 1]),
                Highlights::none().swapping([hole, hole + 1]),
            );
        }

        arr[hole] = key;
        rec.record(
            arr,
            format!("Inserted {key} at position {hole}"),
            Highlights::none().sorted(low..=i),
        );
    }
}
