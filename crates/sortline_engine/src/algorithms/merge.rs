//! Bottom-up merge sort with a single reusable scratch buffer.

use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, mut arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Merge Sort (Bottom-Up)");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    let mut scratch = arr.clone();
    let mut width = 1;
    while width < n {
        let mut left = 0;
        while left < n - 1 {
            let mid = (left + width - 1).min(n - 1);
            let right = (left + 2 * width - 1).min(n - 1);
            if mid < right {
                rec.record(
                    &arr,
                    format!(
                        "Merging subarrays [{left}:{}] and [{}:{}]",
                        mid + 1,
                        mid + 1,
                        right + 1
                    ),
                    Highlights::none().comparing(left..=right),
                );
                merge(rec, &mut arr, &mut scratch, left, mid, right);
                rec.record(
                    &arr,
                    format!("Merged into sorted subarray [{left}:{}]", right + 1),
                    Highlights::none().sorted(left..=right),
                );
            }
            left += 2 * width;
        }
        width *= 2;
    }

    rec.note(&arr, "Merge Sort completed!");
    arr
}

/// Merge `arr[left..=mid]` and `arr[mid+1..=right]`. Ties take the left run.
fn merge<V: SortValue>(
    rec: &mut Recorder<V>,
    arr: &mut [V],
    scratch: &mut [V],
    left: usize,
    mid: usize,
    right: usize,
) {
    scratch[left..=right].copy_from_slice(&arr[left..=right]);

    let (mut i, mut j) = (left, mid + 1);
    for slot in left..=right {
        let take_left = if i > mid {
            false
        } else if j > right {
            true
        } else {
            !rec.compare(scratch[i], scratch[j])
        };
        if take_left {
            arr[slot] = scratch[i];
            i += 1;
        } else {
            arr[slot] = scratch[j];
            j += 1;
        }
        rec.count_move();
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::algorithms::testing::run_default;

    #[test]
    fn test_merge_counts_every_write() {
        let (out, rec) = run_default(Algorithm::Merge, &[4i64, 3, 2, 1]);
        assert_eq!(out, vec![1, 2, 3, 4]);
        // widths 1 and 2 each write all four slots
        assert_eq!(rec.counters().swaps, 8);
    }

    #[test]
    fn test_merge_odd_tail_waits_for_partner() {
        let (_, rec) = run_default(Algorithm::Merge, &[3i64, 2, 1]);
        let texts: Vec<_> = rec.ledger().explanations().collect();
        assert_eq!(
            texts,
            vec![
                "Start Merge Sort (Bottom-Up)",
                "Merging subarrays [0:1] and [1:2]",
                "Merged into sorted subarray [0:2]",
                "Merging subarrays [0:2] and [2:3]",
                "Merged into sorted subarray [0:3]",
                "Merge Sort completed!",
            ]
        );
    }
}
