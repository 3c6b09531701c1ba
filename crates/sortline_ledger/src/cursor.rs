//! Cursor for navigating a recorded ledger.
//!
//! The position is the index of the next step to show, so it ranges over
//! `0..=len`. Moving the cursor never touches the ledger it points into.

use serde::{Deserialize, Serialize};
use sortline_core::Duration;

/// Direction of the last cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the last step
    Forward,
    /// Toward the first step
    Backward,
}

/// Playback position over a ledger of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    len: usize,
    direction: Direction,
}

impl Cursor {
    /// Cursor at the start of a ledger with `len` steps
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            position: 0,
            len,
            direction: Direction::Forward,
        }
    }

    /// Return the index to show and move past it, or `None` at the end
    pub fn step_forward(&mut self) -> Option<usize> {
        self.direction = Direction::Forward;
        if self.position >= self.len {
            return None;
        }
        let shown = self.position;
        self.position += 1;
        Some(shown)
    }

    /// Move back one step and return the index to show, or `None` at the start
    pub fn step_backward(&mut self) -> Option<usize> {
        self.direction = Direction::Backward;
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.position)
    }

    /// Move one step in `direction`
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Forward => self.step_forward(),
            Direction::Backward => self.step_backward(),
        }
    }

    /// Jump to a position, clamped to the end
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.len);
    }

    /// Index of the next step to show
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Length of the ledger this cursor walks
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True for a cursor over an empty ledger
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Direction of the last movement
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Every step has been shown
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.position >= self.len
    }

    /// Fraction of the ledger already shown, in `[0, 1]`
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            return 1.0;
        }
        (self.position as f64 / self.len as f64).min(1.0)
    }
}

/// Auto-play speed on a 1..=100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaybackSpeed(u8);

impl PlaybackSpeed {
    /// Slowest setting
    pub const MIN: u8 = 1;
    /// Fastest setting
    pub const MAX: u8 = 100;
    /// Shortest frame delay in milliseconds
    pub const MIN_DELAY_MS: u64 = 10;

    /// Create a speed, clamped into range
    #[must_use]
    pub fn new(speed: u8) -> Self {
        Self(speed.clamp(Self::MIN, Self::MAX))
    }

    /// Raw setting
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Delay between frames: `max(10, 200 - 2 * speed)` milliseconds
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        let delay = 200u64.saturating_sub(2 * u64::from(self.0));
        Duration::from_millis(delay.max(Self::MIN_DELAY_MS))
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new(3);
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.is_finished());
    }

    #[test]
    fn test_cursor_step_forward_to_end() {
        let mut cursor = Cursor::new(2);
        assert_eq!(cursor.step_forward(), Some(0));
        assert_eq!(cursor.step_forward(), Some(1));
        assert_eq!(cursor.step_forward(), None);
        assert!(cursor.is_finished());
    }

    #[test]
    fn test_cursor_step_backward() {
        let mut cursor = Cursor::new(3);
        cursor.seek(2);
        assert_eq!(cursor.step_backward(), Some(1));
        assert_eq!(cursor.step_backward(), Some(0));
        assert_eq!(cursor.step_backward(), None);
        assert_eq!(cursor.direction(), Direction::Backward);
    }

    #[test]
    fn test_cursor_seek_clamps() {
        let mut cursor = Cursor::new(5);
        cursor.seek(100);
        assert_eq!(cursor.position(), 5);
        assert!(cursor.is_finished());
    }

    #[test]
    fn test_cursor_step_follows_direction() {
        let mut cursor = Cursor::new(3);
        cursor.seek(3);
        assert_eq!(cursor.step(Direction::Backward), Some(2));
        assert_eq!(cursor.direction(), Direction::Backward);
        assert_eq!(cursor.step(Direction::Forward), Some(2));
        assert_eq!(cursor.direction(), Direction::Forward);
        assert_eq!(cursor.step(Direction::Forward), None);
    }

    #[test]
    fn test_cursor_progress() {
        let mut cursor = Cursor::new(4);
        assert_eq!(cursor.progress(), 0.0);
        cursor.seek(2);
        assert_eq!(cursor.progress(), 0.5);
        assert_eq!(Cursor::new(0).progress(), 1.0);
    }

    #[test]
    fn test_playback_speed_delay() {
        assert_eq!(PlaybackSpeed::new(1).frame_delay(), Duration::from_millis(198));
        assert_eq!(PlaybackSpeed::default().frame_delay(), Duration::from_millis(100));
        assert_eq!(PlaybackSpeed::new(95).frame_delay(), Duration::from_millis(10));
        assert_eq!(PlaybackSpeed::new(100).frame_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_playback_speed_clamps() {
        assert_eq!(PlaybackSpeed::new(0).get(), 1);
        assert_eq!(PlaybackSpeed::new(250).get(), 100);
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_in_bounds(len in 0usize..50, moves in prop::collection::vec(0u8..4, 0..100)) {
            let mut cursor = Cursor::new(len);
            for m in moves {
                match m {
                    0 => { let _ = cursor.step_forward(); }
                    1 => { let _ = cursor.step_backward(); }
                    2 => cursor.seek(len / 2),
                    _ => cursor.seek(0),
                }
                prop_assert!(cursor.position() <= len);
                prop_assert!((0.0..=1.0).contains(&cursor.progress()));
            }
        }

        #[test]
        fn prop_forward_then_backward_visits_same_steps(len in 1usize..30) {
            let mut cursor = Cursor::new(len);
            let forward: Vec<usize> = std::iter::from_fn(|| cursor.step_forward()).collect();
            let mut backward: Vec<usize> = std::iter::from_fn(|| cursor.step_backward()).collect();
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }
    }
}
