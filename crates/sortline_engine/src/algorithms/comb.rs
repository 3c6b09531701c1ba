//! Comb sort with a shrinking gap.

use crate::config::SortConfig;
use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(
    rec: &mut Recorder<V>,
    mut arr: Vec<V>,
    config: &SortConfig,
) -> Vec<V> {
    rec.note(&arr, "Start Comb Sort");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    let mut gap = n;
    let mut swapped = true;
    let mut pass = 0;

    while gap > 1 || swapped {
        gap = ((gap as f64 / config.comb_shrink_factor) as usize).max(1);
        swapped = false;
        pass += 1;

        rec.record(
            &arr,
            format!("Pass {pass}: Gap = {gap}"),
            Highlights::none().comparing(0..n - gap),
        );
        for i in 0..n - gap {
            rec.record(
                &arr,
                format!("Comparing {} and {} (gap={gap})", arr[i], arr[i + gap]),
                Highlights::none().comparing([i, i + gap]),
            );
            if rec.compare(arr[i], arr[i + gap]) {
                rec.swap(&mut arr, i, i + gap);
                swapped = true;
                rec.record(
                    &arr,
                    format!("Swapped {} and {}", arr[i], arr[i + gap]),
                    Highlights::none().swapping([i, i + gap]),
                );
            }
        }

        if gap == 1 && !swapped {
            rec.note(&arr, "No swaps with gap=1. Array is sorted.");
        }
    }

    rec.note(&arr, "Comb Sort completed!");
    arr
}
