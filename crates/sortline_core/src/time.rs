//! Time types for SORTLINE.
//!
//! Wall clock time only feeds the elapsed-time metric of a run. Nothing in a
//! recorded ledger depends on it.

use serde::{Deserialize, Serialize};

/// Wall clock timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch
    pub seconds: u64,
    /// Sub-second part
    pub nanos: u32,
}

impl Timestamp {
    /// Maximum nanoseconds per second
    pub const NANOS_PER_SEC: u32 = 1_000_000_000;

    /// Create a new timestamp
    #[must_use]
    pub fn new(seconds: u64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Get current timestamp
    #[must_use]
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        // A clock set before the epoch reads as the epoch.
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            seconds: duration.as_secs(),
            nanos: duration.subsec_nanos(),
        }
    }

    /// Convert to milliseconds
    #[must_use]
    pub const fn as_millis(&self) -> u128 {
        self.seconds as u128 * 1_000 + self.nanos as u128 / 1_000_000
    }

    /// Get duration since another timestamp, saturating at zero
    #[must_use]
    pub fn duration_since(&self, earlier: &Timestamp) -> Duration {
        if self < earlier {
            return Duration::zero();
        }

        let mut seconds = self.seconds - earlier.seconds;
        let mut nanos = self.nanos as i64 - earlier.nanos as i64;

        if nanos < 0 {
            seconds = seconds.saturating_sub(1);
            nanos += Self::NANOS_PER_SEC as i64;
        }

        Duration {
            seconds,
            nanos: nanos as u32,
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}

/// A duration between timestamps
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Duration {
    /// Whole seconds
    pub seconds: u64,
    /// Sub-second part
    pub nanos: u32,
}

impl Duration {
    /// Create a new duration
    #[must_use]
    pub const fn new(seconds: u64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Zero duration
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            seconds: 0,
            nanos: 0,
        }
    }

    /// Duration from milliseconds
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            seconds: millis / 1_000,
            nanos: ((millis % 1_000) * 1_000_000) as u32,
        }
    }

    /// Duration from fractional seconds; negative and NaN inputs give zero
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_nan() || secs <= 0.0 {
            return Self::zero();
        }
        let seconds = secs.trunc() as u64;
        let nanos = ((secs - secs.trunc()) * Timestamp::NANOS_PER_SEC as f64) as u32;
        Self {
            seconds,
            nanos: nanos.min(Timestamp::NANOS_PER_SEC - 1),
        }
    }

    /// Get total milliseconds
    #[must_use]
    pub fn as_millis(&self) -> u128 {
        self.seconds as u128 * 1_000 + self.nanos as u128 / 1_000_000
    }

    /// Get total seconds as a float
    #[must_use]
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.nanos as f64 / Timestamp::NANOS_PER_SEC as f64
    }

    /// Scale by a factor in `[0, 1]`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_secs_f64(self.as_secs_f64() * factor.clamp(0.0, 1.0))
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}s", self.as_secs_f64())
    }
}

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        std::time::Duration::new(value.seconds, value.nanos)
    }
}
