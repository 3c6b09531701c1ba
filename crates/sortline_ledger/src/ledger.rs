//! Append-only step ledger.
//!
//! Insertion order is execution order. The ledger only grows while a run is
//! recording and is read-only once the run hands it out.

use crate::step::Step;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ordered log of recorded steps for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLedger<V> {
    steps: Vec<Step<V>>,
}

impl<V> StepLedger<V> {
    /// Create a new empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Rebuild a ledger from decoded steps
    #[must_use]
    pub fn from_steps(steps: Vec<Step<V>>) -> Self {
        Self { steps }
    }

    /// Append a step, returning its index
    pub fn push(&mut self, step: Step<V>) -> usize {
        self.steps.push(step);
        self.steps.len() - 1
    }

    /// Step at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step<V>> {
        self.steps.get(index)
    }

    /// First recorded step
    #[must_use]
    pub fn first(&self) -> Option<&Step<V>> {
        self.steps.first()
    }

    /// Most recent step
    #[must_use]
    pub fn last(&self) -> Option<&Step<V>> {
        self.steps.last()
    }

    /// Number of steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the ledger is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps in order
    #[must_use]
    pub fn as_slice(&self) -> &[Step<V>] {
        &self.steps
    }

    /// Iterate steps in order
    pub fn iter(&self) -> std::slice::Iter<'_, Step<V>> {
        self.steps.iter()
    }

    /// Explanations in order
    pub fn explanations(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(Step::explanation)
    }

    /// Consume into the underlying steps
    #[must_use]
    pub fn into_steps(self) -> Vec<Step<V>> {
        self.steps
    }
}

impl<V> Default for StepLedger<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<usize> for StepLedger<V> {
    type Output = Step<V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a, V> IntoIterator for &'a StepLedger<V> {
    type Item = &'a Step<V>;
    type IntoIter = std::slice::Iter<'a, Step<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
