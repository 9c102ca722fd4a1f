//! RollLog - the append-only record of a single game's rolls.
//!
//! All rule validation happens at insertion time, so a stored log never
//! violates a frame invariant. The log does no I/O; the console collaborator
//! asks [`RollLog::next_roll`] what to prompt for and feeds the answer back
//! through [`RollLog::append_roll`].

use cli_bowling_types::{NextRoll, RollPlacement, FRAME_COUNT, LAST_FRAME, PIN_COUNT};

use crate::error::GameError;
use crate::frame::Frame;

/// Ordered record of one game's rolls, grouped into ten frames.
///
/// Created empty, mutated only by appending a validated roll, complete once
/// the tenth frame closes. One game owns one log exclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollLog {
    frames: [Frame; FRAME_COUNT],
    /// Index of the open frame; `FRAME_COUNT` once the game is complete.
    current: usize,
}

impl RollLog {
    /// Create an empty log positioned at the first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// All ten frames in order. Frames not reached yet are empty.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// A single frame by zero-based index.
    ///
    /// Panics if `index >= FRAME_COUNT`.
    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index]
    }

    /// Zero-based index of the open frame, `None` once the game is complete.
    pub fn current_frame(&self) -> Option<usize> {
        (self.current < FRAME_COUNT).then_some(self.current)
    }

    /// True once the tenth frame has closed.
    pub fn is_complete(&self) -> bool {
        self.current == FRAME_COUNT
    }

    /// Describe the next legal roll: where it lands and its maximum pins.
    ///
    /// This is how the core tells the prompt what the legal range is; the
    /// same bound is enforced again by [`append_roll`](Self::append_roll).
    pub fn next_roll(&self) -> Option<NextRoll> {
        let frame_index = self.current_frame()?;
        let frame = &self.frames[frame_index];
        let roll = frame.roll_count();

        let max_pins = match frame.roll(0) {
            // Fresh rack at the frame start.
            None => PIN_COUNT,
            Some(first) if frame_index == LAST_FRAME => match roll {
                // Second roll re-racks after a strike; the bonus roll
                // always starts from a full rack.
                1 if first < PIN_COUNT => PIN_COUNT - first,
                _ => PIN_COUNT,
            },
            Some(first) => PIN_COUNT - first,
        };

        Some(NextRoll {
            frame: frame_index,
            roll,
            max_pins,
        })
    }

    /// Record a roll in the current open frame.
    ///
    /// Returns where the roll was recorded; the cursor advances to the next
    /// frame when the current one closes. Every violation is an explicit
    /// error and leaves the log unchanged.
    pub fn append_roll(&mut self, pins: u8) -> Result<RollPlacement, GameError> {
        let Some(next) = self.next_roll() else {
            return Err(GameError::GameAlreadyComplete);
        };

        if pins > PIN_COUNT {
            return Err(GameError::InvalidPinCount { pins });
        }

        if pins > next.max_pins {
            // Only reachable when a standing first roll caps the rack.
            let first = self.frames[next.frame].roll(0).unwrap_or(0);
            return Err(GameError::InvalidFrameTotal {
                first,
                second: pins,
            });
        }

        let is_last = next.frame == LAST_FRAME;
        let frame = &mut self.frames[next.frame];
        frame.push(pins);
        if frame.is_closed(is_last) {
            self.current += 1;
        }

        Ok(RollPlacement {
            frame: next.frame,
            roll: next.roll,
        })
    }
}
