//! Pigeonhole sort: one hole per key in the input range.
//!
//! Only occupied holes are materialized, so a sparse wide range costs
//! memory proportional to n rather than to the range.

use super::list;
use crate::config::SortConfig;
use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;
use std::collections::BTreeMap;
use tracing::debug;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, arr: Vec<V>, config: &SortConfig) -> Vec<V> {
    rec.note(&arr, "Start Pigeonhole Sort");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    let (min, max) = arr
        .iter()
        .map(SortValue::to_key)
        .fold((i64::MAX, i64::MIN), |(lo, hi), key| (lo.min(key), hi.max(key)));
    let range = i128::from(max) - i128::from(min) + 1;
    rec.note(
        &arr,
        format!("Input range: [{min}, {max}] → Range size = {range}, Array size = {n}"),
    );

    let limit = (n as i128).saturating_mul(config.pigeonhole_range_warning_factor as i128);
    if range > limit {
        debug!(range = %range, n, "pigeonhole range is sparse");
        rec.note(
            &arr,
            format!("Pigeonhole Sort is inefficient when range ({range}) >> n ({n})."),
        );
    }

    let mut holes: BTreeMap<i128, Vec<V>> = BTreeMap::new();
    rec.note(&arr, format!("Created {range} pigeonholes"));
    for (i, value) in arr.iter().enumerate() {
        let idx = i128::from(value.to_key()) - i128::from(min);
        holes.entry(idx).or_default().push(*value);
        rec.record(
            &arr,
            format!("Placed {value} in pigeonhole {idx}"),
            Highlights::none().comparing([i]),
        );
    }

    let holes: Vec<(i128, Vec<V>)> = holes.into_iter().collect();
    let mut sorted: Vec<V> = Vec::with_capacity(n);
    for (pos, (idx, hole)) in holes.iter().enumerate() {
        let start = sorted.len();
        let state: Vec<V> = sorted
            .iter()
            .chain(hole)
            .chain(holes[pos + 1..].iter().flat_map(|(_, rest)| rest))
            .copied()
            .collect();
        rec.record(
            &state,
            format!(
                "Emptying pigeonhole {idx} (value {}): {}",
                i128::from(min) + idx,
                list(hole)
            ),
            Highlights::none().sorted(start..start + hole.len()),
        );
        sorted.extend_from_slice(hole);
    }

    rec.note(&sorted, "Pigeonhole Sort completed!");
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::algorithms::testing::run_default;

    #[test]
    fn test_pigeonhole_messages() {
        let (out, rec) = run_default(Algorithm::Pigeonhole, &[8i64, 3, 2, 7, 4, 6, 8]);
        assert_eq!(out, vec![2, 3, 4, 6, 7, 8, 8]);
        let texts: Vec<_> = rec.ledger().explanations().collect();
        assert!(texts.contains(&"Input range: [2, 8] → Range size = 7, Array size = 7"));
        assert!(texts.contains(&"Created 7 pigeonholes"));
        assert!(texts.contains(&"Emptying pigeonhole 6 (value 8): [8, 8]"));
        assert!(!texts.iter().any(|t| t.contains("inefficient")));
    }

    #[test]
    fn test_pigeonhole_sparse_range_warns() {
        let (out, rec) = run_default(Algorithm::Pigeonhole, &[1_000_000i64, -1_000_000, 0]);
        assert_eq!(out, vec![-1_000_000, 0, 1_000_000]);
        assert!(
            rec.ledger()
                .explanations()
                .any(|t| t == "Pigeonhole Sort is inefficient when range (2000001) >> n (3).")
        );
    }

    #[test]
    fn test_pigeonhole_warning_factor_is_configurable() {
        let config = SortConfig {
            pigeonhole_range_warning_factor: 1,
            ..SortConfig::default()
        };
        let mut rec = Recorder::new();
        sort(&mut rec, vec![0i64, 5], &config);
        assert!(rec.ledger().explanations().any(|t| t.contains("inefficient")));
    }
}
