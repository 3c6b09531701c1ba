//! IntroSort: quick sort that falls back to heap sort past a depth limit and
//! finishes small ranges with insertion sort.

use super::{heap, insertion, quick};
use crate::config::SortConfig;
use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;
use tracing::debug;

pub(crate) fn sort<V: SortValue>(
    rec: &mut Recorder<V>,
    mut arr: Vec<V>,
    config: &SortConfig,
) -> Vec<V> {
    rec.note(&arr, "Start IntroSort (Hybrid: Quick + Heap + Insertion)");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    let max_depth = 2 * n.ilog2() as usize;
    let mut finished: Vec<usize> = Vec::new();
    let mut stack = vec![(0, n - 1, 0)];

    while let Some((low, high, depth)) = stack.pop() {
        let size = (high + 1).saturating_sub(low);
        if size <= 1 {
            continue;
        }

        if size <= config.intro_insertion_threshold {
            insertion::insert_range(rec, &mut arr, low, high);
            finished.extend(low..=high);
            rec.record(
                &arr,
                format!("Used Insertion Sort on small subarray [{low}:{}]", high + 1),
                Highlights::none().sorted(finished.iter().copied()),
            );
            continue;
        }

        if depth > max_depth {
            debug!(low, high, depth, "introsort depth limit exceeded");
            heap::sort_range(rec, &mut arr, low, high);
            finished.extend(low..=high);
            rec.record(
                &arr,
                format!("Depth limit exceeded. Used Heap Sort on [{low}:{}]", high + 1),
                Highlights::none().sorted(finished.iter().copied()),
            );
            continue;
        }

        rec.record(
            &arr,
            format!(
                "Quick Sort partition on [{low}:{}] (depth {depth}/{max_depth})",
                high + 1
            ),
            Highlights::none().comparing(low..=high),
        );
        let pivot = quick::partition(rec, &mut arr, low, high);
        finished.push(pivot);
        rec.record(
            &arr,
            format!("Pivot {} placed at index {pivot}", arr[pivot]),
            Highlights::none()
                .swapping([pivot])
                .sorted(finished.iter().copied()),
        );

        stack.push((pivot + 1, high, depth + 1));
        if pivot > low {
            stack.push((low, pivot - 1, depth + 1));
        }
    }

    rec.note(&arr, "IntroSort completed!");
    arr
}
