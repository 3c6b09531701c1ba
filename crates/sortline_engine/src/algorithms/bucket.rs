//! Bucket sort: n buckets over the normalized value range.

use super::list;
use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Bucket Sort");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    let (min, max) = arr
        .iter()
        .map(SortValue::to_real)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
    let span = if max > min { max - min } else { 1.0 };
    rec.note(
        &arr,
        format!("Input range: [{min:.2}, {max:.2}] → Normalizing to [0, 1)"),
    );

    let mut buckets: Vec<Vec<V>> = vec![Vec::new(); n];
    rec.note(&arr, format!("Created {n} empty buckets"));
    for (i, value) in arr.iter().enumerate() {
        let normalized = (value.to_real() - min) / span;
        let idx = ((normalized * n as f64) as usize).min(n - 1);
        buckets[idx].push(*value);
        rec.record(
            &arr,
            format!("Distributed {:.2} into bucket {idx}", value.to_real()),
            Highlights::none().comparing([i]),
        );
    }

    let summary: Vec<String> = buckets
        .iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(i, bucket)| format!("Bucket {i}: {} items", bucket.len()))
        .collect();
    rec.note(&arr, format!("Bucket distribution:\n{}", summary.join("\n")));

    let mut sorted: Vec<V> = Vec::with_capacity(n);
    for i in 0..n {
        let bucket = std::mem::take(&mut buckets[i]);
        let pending = || buckets[i + 1..].iter().flatten().copied();

        if bucket.is_empty() {
            let state: Vec<V> = sorted.iter().copied().chain(pending()).collect();
            rec.note(&state, format!("Bucket {i} is empty"));
            continue;
        }

        let start = sorted.len();
        let state: Vec<V> = sorted
            .iter()
            .chain(&bucket)
            .copied()
            .chain(pending())
            .collect();
        rec.record(
            &state,
            format!("Sorting bucket {i} with {} elements", bucket.len()),
            Highlights::none().comparing(start..start + bucket.len()),
        );

        let bucket = insertion_sort_bucket(rec, bucket);
        sorted.extend_from_slice(&bucket);
        let state: Vec<V> = sorted.iter().copied().chain(pending()).collect();
        rec.record(
            &state,
            format!("Bucket {i} sorted: {}", list(&bucket)),
            Highlights::none().sorted(start..sorted.len()),
        );
    }

    rec.note(&sorted, "Bucket Sort completed!");
    sorted
}

/// Unrecorded insertion sort; shifts and the final placement count as moves
fn insertion_sort_bucket<V: SortValue>(rec: &mut Recorder<V>, mut bucket: Vec<V>) -> Vec<V> {
    for i in 1..bucket.len() {
        let key = bucket[i];
        let mut hole = i;
        while hole > 0 && rec.compare(bucket[hole - 1], key) {
            bucket[hole] = bucket[hole - 1];
            hole -= 1;
            rec.count_move();
        }
        bucket[hole] = key;
        rec.count_move();
    }
    bucket
}
