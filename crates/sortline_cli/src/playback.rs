//! Timed auto-play over a recorded trace.
//!
//! Playback only reads the trace. Interrupting it with Ctrl-C stops the
//! ticker and leaves the recorded steps as they were.

use crate::render;
use color_eyre::Result;
use serde::Serialize;
use sortline_core::SortValue;
use sortline_engine::TraceRecord;
use sortline_ledger::{Cursor, Direction, PlaybackSpeed};
use tokio::time::{self, MissedTickBehavior};

/// How an auto-play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Every remaining step was shown
    Finished,
    /// Stopped by the user before reaching this step
    Interrupted {
        /// Next step that would have been shown
        at: usize,
    },
}

/// Everything drawn for step `index`
pub fn frame<V: SortValue + Serialize>(trace: &TraceRecord<V>, index: usize) -> Vec<String> {
    let total = trace.steps.len();
    let step = trace.state_at(index);

    let mut lines = vec![format!("{}  step {}/{}", trace.algorithm, index + 1, total)];
    lines.push(String::new());
    lines.extend(render::bars(&step));
    lines.push(String::new());
    lines.push(step.explanation().to_string());
    lines.push(String::new());
    lines.push(render::metrics(&trace.estimated_metrics_at(index), true));
    lines
}

/// Show steps starting at `from`, one per tick, in `direction` until the
/// ledger runs out or Ctrl-C
pub async fn play<V, F>(
    trace: &TraceRecord<V>,
    speed: PlaybackSpeed,
    from: usize,
    direction: Direction,
    mut draw: F,
) -> Result<PlayOutcome>
where
    V: SortValue + Serialize,
    F: FnMut(&[String]) -> Result<()>,
{
    let mut cursor = Cursor::new(trace.steps.len());
    match direction {
        Direction::Forward => cursor.seek(from),
        Direction::Backward => cursor.seek(from.saturating_add(1)),
    }

    let mut ticker = time::interval(speed.frame_delay().into());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = &mut interrupt => {
                tracing::info!(at = cursor.position(), "playback interrupted");
                return Ok(PlayOutcome::Interrupted { at: cursor.position() });
            }
            _ = ticker.tick() => {
                let Some(index) = cursor.step(direction) else {
                    return Ok(PlayOutcome::Finished);
                };
                draw(&frame(trace, index))?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use sortline_engine::get_sorter;

    fn trace(input: &[i64]) -> TraceRecord<i64> {
        let mut sorter = get_sorter("Bubble Sort", input).unwrap();
        sorter.sort();
        TraceRecord::from_sorter(&sorter).unwrap()
    }

    #[test]
    fn test_frame_layout() {
        let trace = trace(&[3, 1, 2]);
        let lines = frame(&trace, 0);
        assert_eq!(lines[0], "Bubble Sort  step 1/9");
        assert_eq!(strip_ansi_codes(&lines[2]).matches('█').count(), render::BAR_WIDTH);
        assert!(lines.iter().any(|l| l == "Start Bubble Sort"));
    }

    #[test]
    fn test_frame_metrics_prorated_by_index() {
        let trace = trace(&[3, 1, 2]);
        let first = frame(&trace, 0);
        assert!(first.last().unwrap().starts_with("Comparisons: 0\nSwaps: 0"));
        let last = frame(&trace, 8);
        assert!(last.last().unwrap().starts_with("Comparisons: 2\nSwaps: 1"));
    }

    #[tokio::test]
    async fn test_play_draws_remaining_steps() {
        let trace = trace(&[2, 1]);
        let mut frames = Vec::new();
        let outcome = play(&trace, PlaybackSpeed::new(100), 1, Direction::Forward, |lines| {
            frames.push(lines.to_vec());
            Ok(())
        })
        .await
        .unwrap();
        assert_eq!(outcome, PlayOutcome::Finished);
        assert_eq!(frames.len(), trace.steps.len() - 1);
        assert!(frames.last().unwrap().iter().any(|l| l == "Bubble Sort completed!"));
    }

    #[tokio::test]
    async fn test_play_from_end_draws_nothing() {
        let trace = trace(&[2, 1]);
        let mut drawn = 0;
        let outcome = play(&trace, PlaybackSpeed::default(), usize::MAX, Direction::Forward, |_| {
            drawn += 1;
            Ok(())
        })
        .await
        .unwrap();
        assert_eq!(outcome, PlayOutcome::Finished);
        assert_eq!(drawn, 0);
    }

    #[tokio::test]
    async fn test_play_reverse_walks_back_to_start() {
        let trace = trace(&[3, 1, 2]);
        let mut headers = Vec::new();
        let outcome = play(
            &trace,
            PlaybackSpeed::new(100),
            usize::MAX,
            Direction::Backward,
            |lines| {
                headers.push(lines[0].clone());
                Ok(())
            },
        )
        .await
        .unwrap();
        assert_eq!(outcome, PlayOutcome::Finished);
        assert_eq!(headers.len(), 9);
        assert_eq!(headers[0], "Bubble Sort  step 9/9");
        assert_eq!(headers[8], "Bubble Sort  step 1/9");
    }

    #[tokio::test]
    async fn test_play_reverse_from_index() {
        let trace = trace(&[3, 1, 2]);
        let mut shown = 0;
        play(&trace, PlaybackSpeed::new(100), 2, Direction::Backward, |lines| {
            shown += 1;
            assert!(lines[0].ends_with(&format!("step {}/9", 4 - shown)));
            Ok(())
        })
        .await
        .unwrap();
        assert_eq!(shown, 3);
    }
}
