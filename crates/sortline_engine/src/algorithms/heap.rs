//! Heap sort over a max heap, usable on a whole array or a sub-range.

use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, mut arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Heap Sort");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let high = arr.len() - 1;
    sort_range(rec, &mut arr, 0, high);

    rec.note(&arr, "Heap Sort completed!");
    arr
}

/// Heap-sort `arr[low..=high]` in place; the heap root sits at `low`
pub(crate) fn sort_range<V: SortValue>(
    rec: &mut Recorder<V>,
    arr: &mut [V],
    low: usize,
    high: usize,
) {
    let len = high - low + 1;

    rec.note(arr, "Building max heap...");
    for root in (low..low + len / 2).rev() {
        sift_down(rec, arr, low, high + 1, root);
    }
    rec.note(arr, "Max heap built. Starting extraction...");

    for end in (low + 1..=high).rev() {
        if arr[low] != arr[end] {
            rec.swap(arr, low, end);
            rec.record(
                arr,
                format!("Moved max {} to position {end}", arr[end]),
                Highlights::none().swapping([low, end]).sorted(end..=high),
            );
        } else {
            rec.record(
                arr,
                format!("{} is already in correct position.", arr[end]),
                Highlights::none().sorted(end..=high),
            );
        }
        sift_down(rec, arr, low, end, low);
    }
}

/// Restore the heap property below `root` for the heap `arr[low..end]`
fn sift_down<V: SortValue>(
    rec: &mut Recorder<V>,
    arr: &mut [V],
    low: usize,
    end: usize,
    root: usize,
) {
    let left = low + 2 * (root - low) + 1;
    let right = left + 1;
    let subtree: Vec<usize> = [root, left, right]
        .into_iter()
        .filter(|&i| i == root || i < end)
        .collect();

    rec.record(
        arr,
        format!("Heapifying subtree rooted at {root} (value {})", arr[root]),
        Highlights::none().comparing(subtree.iter().copied()),
    );

    let mut largest = root;
    if left < end && rec.compare(arr[left], arr[largest]) {
        largest = left;
    }
    if right < end && rec.compare(arr[right], arr[largest]) {
        largest = right;
    }

    if largest == root {
        rec.record(
            arr,
            format!("Subtree rooted at {root} is already a max heap"),
            Highlights::none().comparing(subtree),
        );
        return;
    }

    rec.swap(arr, root, largest);
    rec.record(
        arr,
        format!("Swapped {} and {} in heap", arr[root], arr[largest]),
        Highlights::none()
            .swapping([root, largest])
            .comparing(subtree),
    );
    sift_down(rec, arr, low, end, largest);
}
