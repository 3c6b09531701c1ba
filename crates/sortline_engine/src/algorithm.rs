//! Algorithm identifiers and catalog metadata.

use serde::{Deserialize, Serialize};
use sortline_core::CoreError;
use std::fmt;
use std::str::FromStr;

/// The fifteen catalog algorithms, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Shell,
    Counting,
    Radix,
    Bucket,
    Pigeonhole,
    Cocktail,
    Comb,
    Intro,
    Bogo,
}

impl Algorithm {
    /// Every algorithm in catalog order
    pub const ALL: [Algorithm; 15] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
        Algorithm::Pigeonhole,
        Algorithm::Cocktail,
        Algorithm::Comb,
        Algorithm::Intro,
        Algorithm::Bogo,
    ];

    /// Display name, which is also the factory identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Bucket => "Bucket Sort",
            Algorithm::Pigeonhole => "Pigeonhole Sort",
            Algorithm::Cocktail => "Cocktail Sort",
            Algorithm::Comb => "Comb Sort",
            Algorithm::Intro => "IntroSort",
            Algorithm::Bogo => "Bogo Sort",
        }
    }

    /// Reference card shown by `list`
    #[must_use]
    pub const fn info(self) -> AlgorithmInfo {
        use Category::*;
        let (category, time, space, stable, description) = match self {
            Algorithm::Bubble => (
                BasicComparison,
                "O(n²)",
                "O(1)",
                true,
                "Repeatedly compares adjacent elements and swaps them if in wrong order.",
            ),
            Algorithm::Insertion => (
                BasicComparison,
                "O(n²)",
                "O(1)",
                true,
                "Builds sorted array one element at a time by inserting each element in correct position.",
            ),
            Algorithm::Selection => (
                BasicComparison,
                "O(n²)",
                "O(1)",
                false,
                "Selects minimum element from unsorted portion and swaps it to front.",
            ),
            Algorithm::Merge => (
                DivideAndConquer,
                "O(n log n)",
                "O(n)",
                true,
                "Merges sorted runs of doubling width until one run remains.",
            ),
            Algorithm::Quick => (
                DivideAndConquer,
                "O(n log n) avg",
                "O(log n)",
                false,
                "Partitions array around pivot, then sorts the sub-arrays.",
            ),
            Algorithm::Heap => (
                EfficientComparison,
                "O(n log n)",
                "O(1)",
                false,
                "Converts array to max heap, then repeatedly extracts maximum element.",
            ),
            Algorithm::Shell => (
                EfficientComparison,
                "O(n log²n)",
                "O(1)",
                false,
                "Generalization of insertion sort using gap sequences to move elements farther.",
            ),
            Algorithm::Counting => (
                NonComparison,
                "O(n + k)",
                "O(k)",
                true,
                "Counts occurrences of each element, then places them by cumulative position.",
            ),
            Algorithm::Radix => (
                NonComparison,
                "O(d·n)",
                "O(n + k)",
                true,
                "Sorts numbers digit by digit using counting sort as subroutine.",
            ),
            Algorithm::Bucket => (
                NonComparison,
                "O(n) avg",
                "O(n)",
                true,
                "Distributes elements into buckets, sorts each bucket, then concatenates.",
            ),
            Algorithm::Pigeonhole => (
                NonComparison,
                "O(n + k)",
                "O(n + k)",
                true,
                "Places elements into pigeonholes based on value, then empties holes in order.",
            ),
            Algorithm::Cocktail => (
                BasicComparison,
                "O(n²)",
                "O(1)",
                true,
                "Bidirectional bubble sort that bubbles in both directions alternately.",
            ),
            Algorithm::Comb => (
                EfficientComparison,
                "O(n log n) avg",
                "O(1)",
                false,
                "Improvement over bubble sort using shrinking gap (factor 1.3).",
            ),
            Algorithm::Intro => (
                HybridAdvanced,
                "O(n log n)",
                "O(log n)",
                false,
                "Hybrid: starts with quicksort, switches to heapsort if depth limit exceeded.",
            ),
            Algorithm::Bogo => (
                Randomized,
                "O(n × n!)",
                "O(1)",
                false,
                "Randomly shuffles until array happens to be sorted. Never use in practice!",
            ),
        };
        AlgorithmInfo {
            category,
            time,
            space,
            stable,
            description,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| CoreError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Catalog grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Category {
    BasicComparison,
    DivideAndConquer,
    EfficientComparison,
    NonComparison,
    HybridAdvanced,
    Randomized,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::BasicComparison => "Basic Comparison Sort",
            Category::DivideAndConquer => "Efficient Divide & Conquer",
            Category::EfficientComparison => "Efficient Comparison Sort",
            Category::NonComparison => "Non-Comparison Sort",
            Category::HybridAdvanced => "Hybrid Advanced Sort",
            Category::Randomized => "Joke/Randomized Sort",
        };
        f.write_str(label)
    }
}

/// Static facts about an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    /// Catalog grouping
    pub category: Category,
    /// Time complexity
    pub time: &'static str,
    /// Auxiliary space
    pub space: &'static str,
    /// Whether equal elements keep their input order
    pub stable: bool,
    /// One-line summary
    pub description: &'static str,
}
