//! Scoreboard: maps a `core::RollLog` into scorecard text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use cli_bowling_core::{scoring, Frame, RollLog};
use cli_bowling_types::{FrameOutcome, FRAME_COUNT, LAST_FRAME, PIN_COUNT};

/// Width of a frame cell for frames 1-9 (two marks).
const CELL_W: usize = 5;
/// Width of the tenth-frame cell (three marks).
const LAST_CELL_W: usize = 7;

/// Text scorecard renderer.
///
/// Produces a boxed card with three content lines: frame numbers, per-roll
/// marks, and cumulative scores. Cumulative cells stay blank while a frame's
/// bonus rolls are pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard;

impl Scoreboard {
    /// Render the scorecard for `log` as recorded so far.
    pub fn render_lines(&self, log: &RollLog) -> Vec<String> {
        let mut header = String::new();
        let mut marks = String::new();
        let mut totals = String::new();

        for index in 0..FRAME_COUNT {
            let width = if index == LAST_FRAME { LAST_CELL_W } else { CELL_W };
            let frame = log.frame(index);

            header.push('|');
            header.push_str(&center(&(index + 1).to_string(), width));

            marks.push('|');
            marks.push_str(&center(&frame_marks(frame), width));

            totals.push('|');
            let cell = scoring::running_score_after_frame(log, index)
                .map(|score| score.to_string())
                .unwrap_or_default();
            totals.push_str(&center(&cell, width));
        }

        for line in [&mut header, &mut marks, &mut totals] {
            line.push('|');
        }

        let rule = "-".repeat(header.chars().count());
        vec![rule.clone(), header, marks, totals, rule]
    }
}

/// Scorecard marks for one frame: `X` strike, `/` spare, `-` gutter,
/// digits otherwise.
pub fn frame_marks(frame: &Frame) -> String {
    let mut marks = String::new();
    for index in 0..frame.roll_count() {
        if index > 0 {
            marks.push(' ');
        }
        marks.push(roll_mark(frame, index));
    }
    marks
}

fn roll_mark(frame: &Frame, index: usize) -> char {
    match frame.roll_outcome(index) {
        FrameOutcome::Strike => 'X',
        FrameOutcome::Spare => '/',
        FrameOutcome::Open => match frame.roll(index) {
            Some(0) => '-',
            // A flat-cap bonus roll that cleared a partial rack.
            Some(PIN_COUNT) => 'X',
            Some(pins) => char::from(b'0' + pins),
            None => ' ',
        },
    }
}

fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}
