//! Recorded steps and their highlight roles.
//!
//! A step is a snapshot: the sequence as it looked at one moment, a line of
//! explanation, and which indices to highlight. Steps own a copy of the
//! sequence, so mutating the live working array afterwards can never reach
//! back into a step that was already recorded.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Why an index is highlighted in a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightRole {
    /// Elements being compared (or inspected)
    Comparing,
    /// Elements just exchanged or written
    Swapping,
    /// Elements known to be in their final position
    Sorted,
}

impl HighlightRole {
    /// All roles, in display priority order
    pub const ALL: [HighlightRole; 3] = [Self::Comparing, Self::Swapping, Self::Sorted];

    /// Lowercase role name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comparing => "comparing",
            Self::Swapping => "swapping",
            Self::Sorted => "sorted",
        }
    }
}

/// Role → indices mapping for one step.
///
/// A role with no indices is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Highlights(BTreeMap<HighlightRole, BTreeSet<usize>>);

impl Highlights {
    /// No highlighted indices
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Add indices under a role
    #[must_use]
    pub fn with(mut self, role: HighlightRole, indices: impl IntoIterator<Item = usize>) -> Self {
        let set: BTreeSet<usize> = indices.into_iter().collect();
        if !set.is_empty() {
            self.0.entry(role).or_default().extend(set);
        }
        self
    }

    /// Add `comparing` indices
    #[must_use]
    pub fn comparing(self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.with(HighlightRole::Comparing, indices)
    }

    /// Add `swapping` indices
    #[must_use]
    pub fn swapping(self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.with(HighlightRole::Swapping, indices)
    }

    /// Add `sorted` indices
    #[must_use]
    pub fn sorted(self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.with(HighlightRole::Sorted, indices)
    }

    /// Indices carrying a role, if any
    #[must_use]
    pub fn get(&self, role: HighlightRole) -> Option<&BTreeSet<usize>> {
        self.0.get(&role)
    }

    /// Check whether an index carries a role
    #[must_use]
    pub fn contains(&self, role: HighlightRole, index: usize) -> bool {
        self.0.get(&role).is_some_and(|set| set.contains(&index))
    }

    /// Highest-priority role of an index (comparing, then swapping, then sorted)
    #[must_use]
    pub fn role_of(&self, index: usize) -> Option<HighlightRole> {
        HighlightRole::ALL
            .into_iter()
            .find(|role| self.contains(*role, index))
    }

    /// Roles present in this step
    pub fn roles(&self) -> impl Iterator<Item = HighlightRole> + '_ {
        self.0.keys().copied()
    }

    /// Largest highlighted index across all roles
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.0.values().filter_map(|set| set.last().copied()).max()
    }

    /// True when no role is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One immutable recorded snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<V> {
    array: Vec<V>,
    explanation: String,
    #[serde(default, skip_serializing_if = "Highlights::is_empty")]
    highlights: Highlights,
}

impl<V: Clone> Step<V> {
    /// Create a step from a copy of `array`
    #[must_use]
    pub fn new(array: &[V], explanation: impl Into<String>, highlights: Highlights) -> Self {
        Self {
            array: array.to_vec(),
            explanation: explanation.into(),
            highlights,
        }
    }

    /// The synthetic "Initial state" step shown for out-of-range seeks
    #[must_use]
    pub fn initial(original: &[V]) -> Self {
        Self::new(original, "Initial state", Highlights::none())
    }
}

impl<V> Step<V> {
    /// Sequence state at this step
    #[must_use]
    pub fn array(&self) -> &[V] {
        &self.array
    }

    /// What just happened
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Highlighted indices by role
    #[must_use]
    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    /// Every highlighted index is a valid position in this step's array
    #[must_use]
    pub fn highlights_in_bounds(&self) -> bool {
        self.highlights
            .max_index()
            .is_none_or(|max| max < self.array.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights_builder() {
        let h = Highlights::none().comparing([0, 1]).sorted(3..5);
        assert!(h.contains(HighlightRole::Comparing, 1));
        assert!(h.contains(HighlightRole::Sorted, 4));
        assert!(!h.contains(HighlightRole::Swapping, 0));
        assert_eq!(h.roles().collect::<Vec<_>>(), vec![
            HighlightRole::Comparing,
            HighlightRole::Sorted
        ]);
        assert_eq!(h.max_index(), Some(4));
    }

    #[test]
    fn test_empty_role_is_absent() {
        let h = Highlights::none().comparing(Vec::new());
        assert!(h.is_empty());
        assert!(h.get(HighlightRole::Comparing).is_none());
    }

    #[test]
    fn test_role_priority() {
        let h = Highlights::none().sorted([2]).swapping([2]).comparing([1]);
        assert_eq!(h.role_of(2), Some(HighlightRole::Swapping));
        assert_eq!(h.role_of(1), Some(HighlightRole::Comparing));
        assert_eq!(h.role_of(0), None);
    }

    #[test]
    fn test_step_copies_array() {
        let mut live = vec![3, 1, 2];
        let step = Step::new(&live, "Start", Highlights::none());
        live.swap(0, 1);
        assert_eq!(step.array(), &[3, 1, 2]);
    }

    #[test]
    fn test_step_initial() {
        let step = Step::initial(&[1.5, 0.5]);
        assert_eq!(step.explanation(), "Initial state");
        assert!(step.highlights().is_empty());
        assert_eq!(step.array(), &[1.5, 0.5]);
    }

    #[test]
    fn test_highlights_in_bounds() {
        let ok = Step::new(&[1, 2], "ok", Highlights::none().comparing([0, 1]));
        let bad = Step::new(&[1, 2], "bad", Highlights::none().comparing([2]));
        assert!(ok.highlights_in_bounds());
        assert!(!bad.highlights_in_bounds());
    }

    #[test]
    fn test_step_json_shape() {
        let step = Step::new(&[2, 1], "Swapped 2 and 1", Highlights::none().swapping([0, 1]));
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["array"], serde_json::json!([2, 1]));
        assert_eq!(json["highlights"]["swapping"], serde_json::json!([0, 1]));

        let plain = Step::new(&[1], "Start", Highlights::none());
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("highlights").is_none());
    }
}
