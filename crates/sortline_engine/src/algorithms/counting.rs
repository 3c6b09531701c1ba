//! Counting sort over integer keys, shifting negative inputs first.
//!
//! Key arithmetic runs in `i128`, so any pair of `i64` keys has a
//! representable range. Very wide ranges count occupied keys only.

use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;
use std::collections::BTreeMap;
use tracing::debug;

/// Widest key range that still gets a dense count array
const DENSE_RANGE_LIMIT: i128 = 1 << 16;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Counting Sort");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    let (min, max) = key_bounds(&arr);
    let shift = if min < 0 {
        rec.note(
            &arr,
            format!("Counting Sort requires non-negative integers. Found min={min}."),
        );
        let shift = -min;
        rec.note(
            &arr,
            format!("Shifted all values by +{shift} to make them non-negative."),
        );
        shift
    } else {
        0
    };

    // Keys are indexed relative to the minimum; elements are never rewritten.
    let low = min.max(0);
    let high = max + shift;
    let k = high - low + 1;
    rec.note(&arr, format!("Input range: [{low}, {high}] → k = {k}"));
    let dense = k <= DENSE_RANGE_LIMIT;
    if !dense {
        debug!(k = %k, n, "counting range too wide for a dense count array");
        rec.note(
            &arr,
            format!("Range k = {k} is too wide for a count array; counting occupied keys only."),
        );
    }

    let slot = |value: &V| i128::from(value.to_key()) - min;
    let mut count: BTreeMap<i128, usize> = BTreeMap::new();
    rec.note(&arr, "Counting frequencies of each element...");
    for (i, value) in arr.iter().enumerate() {
        let idx = slot(value);
        *count.entry(idx).or_default() += 1;
        rec.record(
            &arr,
            format!("Counted {value} (index {idx} in count array)"),
            Highlights::none().comparing([i]),
        );
    }
    if dense {
        let frequencies: Vec<usize> = (0..k)
            .map(|idx| count.get(&idx).copied().unwrap_or(0))
            .collect();
        rec.note(&arr, format!("Frequency array: {frequencies:?}"));
    } else {
        let occupied: Vec<String> = count.iter().map(|(idx, c)| format!("{idx}: {c}")).collect();
        rec.note(&arr, format!("Frequency array (occupied): {{{}}}", occupied.join(", ")));
    }

    rec.note(&arr, "Computing cumulative counts (positions)...");
    let mut running = 0usize;
    let mut positions: BTreeMap<i128, usize> = BTreeMap::new();
    if dense {
        for idx in 0..k {
            running += count.get(&idx).copied().unwrap_or(0);
            if idx > 0 {
                rec.note(&arr, format!("Cumulative count at index {idx}: {running}"));
            }
            if count.contains_key(&idx) {
                positions.insert(idx, running);
            }
        }
    } else {
        for (&idx, &c) in &count {
            running += c;
            positions.insert(idx, running);
            rec.note(&arr, format!("Cumulative count at index {idx}: {running}"));
        }
    }

    let mut output = vec![V::default(); n];
    rec.note(&arr, "Building output array from back to front (for stability)...");
    for value in arr.iter().rev() {
        let Some(end) = positions.get_mut(&slot(value)) else {
            continue;
        };
        *end -= 1;
        let pos = *end;
        output[pos] = *value;
        rec.record(
            &output,
            format!("Placed {value} at position {pos}"),
            Highlights::none().swapping([pos]),
        );
    }

    if shift > 0 {
        rec.note(&output, format!("Shifted values back by -{shift}"));
    }

    rec.note(&output, "Counting Sort completed!");
    output
}

fn key_bounds<V: SortValue>(arr: &[V]) -> (i128, i128) {
    arr.iter()
        .map(|v| i128::from(v.to_key()))
        .fold((i128::MAX, i128::MIN), |(lo, hi), key| (lo.min(key), hi.max(key)))
}
