//! Engine tuning knobs.
//!
//! The defaults are the documented algorithm policies. The public factory
//! always runs with the defaults; other values only reach a run through an
//! explicitly configured [`crate::SorterRegistry`].

use serde::{Deserialize, Serialize};
use sortline_core::{CoreError, CoreResult};

/// Sort engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Shuffle attempts before bogo sort gives up
    pub bogo_max_attempts: u64,
    /// Seed for bogo sort's shuffles
    pub bogo_seed: u64,
    /// Input size above which bogo sort records a warning
    pub bogo_size_warning: usize,
    /// IntroSort switches to insertion sort at or below this range size
    pub intro_insertion_threshold: usize,
    /// Comb sort gap shrink factor
    pub comb_shrink_factor: f64,
    /// Pigeonhole sort warns when its range exceeds this multiple of n
    pub pigeonhole_range_warning_factor: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            bogo_max_attempts: 10_000,
            bogo_seed: 42,
            bogo_size_warning: 8,
            intro_insertion_threshold: 16,
            comb_shrink_factor: 1.3,
            pigeonhole_range_warning_factor: 10,
        }
    }
}

impl SortConfig {
    /// Check that every knob is usable
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first bad field
    pub fn validate(&self) -> CoreResult<()> {
        if self.bogo_max_attempts == 0 {
            return Err(CoreError::validation(
                "bogo_max_attempts",
                "must be at least 1",
            ));
        }
        if self.intro_insertion_threshold == 0 {
            return Err(CoreError::validation(
                "intro_insertion_threshold",
                "must be at least 1",
            ));
        }
        if self.comb_shrink_factor.is_nan() || self.comb_shrink_factor <= 1.0 {
            return Err(CoreError::validation(
                "comb_shrink_factor",
                "must be greater than 1.0",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    ///
    /// # Errors
    ///
    /// Returns error on malformed JSON or an invalid value
    pub fn from_json(text: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
