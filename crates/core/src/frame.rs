//! Frame storage - the 1-3 rolls recorded at one of the ten frame positions.

use arrayvec::ArrayVec;
use cli_bowling_types::{FrameOutcome, MAX_FRAME_ROLLS, MAX_LAST_FRAME_ROLLS, PIN_COUNT};

/// Rolls recorded for a single frame.
///
/// Storage is bounded at three rolls (the tenth frame's maximum). Whether a
/// frame is allowed to grow past two rolls depends on its position, which the
/// owning log supplies through `is_last`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    rolls: ArrayVec<u8, MAX_LAST_FRAME_ROLLS>,
}

impl Frame {
    /// The recorded rolls, in order.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// A single roll by index, `None` if not recorded yet.
    pub fn roll(&self, index: usize) -> Option<u8> {
        self.rolls.get(index).copied()
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Sum of all recorded rolls.
    pub fn pin_sum(&self) -> u32 {
        self.rolls.iter().copied().map(u32::from).sum()
    }

    /// All ten pins on the first roll.
    pub fn is_strike(&self) -> bool {
        self.roll(0) == Some(PIN_COUNT)
    }

    /// All ten pins across the first two rolls, first roll standing short.
    pub fn is_spare(&self) -> bool {
        match (self.roll(0), self.roll(1)) {
            (Some(first), Some(second)) => first < PIN_COUNT && first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// How the frame resolved, judged from its first two rolls.
    pub fn outcome(&self) -> FrameOutcome {
        if self.is_strike() {
            FrameOutcome::Strike
        } else if self.is_spare() {
            FrameOutcome::Spare
        } else {
            FrameOutcome::Open
        }
    }

    /// How the rack stood for the roll at `index`: a strike on a fresh rack,
    /// a spare that cleared a standing one, or neither.
    ///
    /// The rack is fresh at the frame start, after a strike, and after a
    /// completed spare (tenth-frame bonus rolls start over).
    ///
    /// Panics if no roll is recorded at `index`.
    pub fn roll_outcome(&self, index: usize) -> FrameOutcome {
        let pins = self.rolls[index];
        let fresh_rack = index == 0
            || self.rolls[index - 1] == PIN_COUNT
            || (index >= 2
                && self.rolls[index - 2] < PIN_COUNT
                && self.rolls[index - 2] + self.rolls[index - 1] == PIN_COUNT);

        if fresh_rack {
            if pins == PIN_COUNT {
                FrameOutcome::Strike
            } else {
                FrameOutcome::Open
            }
        } else if self.rolls[index - 1] + pins == PIN_COUNT {
            FrameOutcome::Spare
        } else {
            FrameOutcome::Open
        }
    }

    /// Whether the tenth frame owes a bonus roll after its first two rolls.
    pub fn needs_bonus_roll(&self) -> bool {
        self.outcome() != FrameOutcome::Open
    }

    /// The single authoritative closed-state predicate.
    ///
    /// Frames 1-9 close on a strike or after two rolls; the tenth closes
    /// after two rolls unless they earned a bonus roll, then after three.
    pub fn is_closed(&self, is_last: bool) -> bool {
        if is_last {
            match self.roll_count() {
                count if count < MAX_FRAME_ROLLS => false,
                MAX_FRAME_ROLLS => !self.needs_bonus_roll(),
                _ => true,
            }
        } else {
            self.is_strike() || self.roll_count() >= MAX_FRAME_ROLLS
        }
    }

    pub(crate) fn push(&mut self, pins: u8) {
        self.rolls.push(pins);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(rolls: &[u8]) -> Frame {
        let mut frame = Frame::default();
        for &pins in rolls {
            frame.push(pins);
        }
        frame
    }

    #[test]
    fn test_strike_detection() {
        assert!(frame_with(&[10]).is_strike());
        assert!(!frame_with(&[9, 1]).is_strike());
        assert!(!frame_with(&[]).is_strike());
    }

    #[test]
    fn test_spare_detection() {
        assert!(frame_with(&[9, 1]).is_spare());
        assert!(frame_with(&[0, 10]).is_spare());
        assert!(!frame_with(&[10]).is_spare());
        assert!(!frame_with(&[4, 5]).is_spare());
        assert!(!frame_with(&[4]).is_spare());
    }

    #[test]
    fn test_outcome() {
        assert_eq!(frame_with(&[10]).outcome(), FrameOutcome::Strike);
        assert_eq!(frame_with(&[9, 1]).outcome(), FrameOutcome::Spare);
        assert_eq!(frame_with(&[3, 4]).outcome(), FrameOutcome::Open);
        assert_eq!(frame_with(&[]).outcome(), FrameOutcome::Open);
    }

    #[test]
    fn test_regular_frame_closing() {
        assert!(!frame_with(&[]).is_closed(false));
        assert!(!frame_with(&[4]).is_closed(false));
        assert!(frame_with(&[4, 5]).is_closed(false));
        assert!(frame_with(&[10]).is_closed(false));
    }

    #[test]
    fn test_last_frame_closing() {
        assert!(!frame_with(&[10]).is_closed(true));
        assert!(!frame_with(&[10, 10]).is_closed(true));
        assert!(frame_with(&[10, 10, 10]).is_closed(true));
        assert!(!frame_with(&[4, 6]).is_closed(true));
        assert!(frame_with(&[4, 6, 2]).is_closed(true));
        assert!(frame_with(&[4, 5]).is_closed(true));
    }

    #[test]
    fn test_pin_sum() {
        assert_eq!(frame_with(&[]).pin_sum(), 0);
        assert_eq!(frame_with(&[10, 9, 1]).pin_sum(), 20);
    }

    #[test]
    fn test_roll_outcome_tracks_rack_resets() {
        let tenth = frame_with(&[4, 6, 10]);
        assert_eq!(tenth.roll_outcome(1), FrameOutcome::Spare);
        assert_eq!(tenth.roll_outcome(2), FrameOutcome::Strike);

        let tenth = frame_with(&[10, 4, 6]);
        assert_eq!(tenth.roll_outcome(0), FrameOutcome::Strike);
        assert_eq!(tenth.roll_outcome(1), FrameOutcome::Open);
        assert_eq!(tenth.roll_outcome(2), FrameOutcome::Spare);

        // A third roll on a fresh rack is not a spare mark.
        let tenth = frame_with(&[5, 5, 5]);
        assert_eq!(tenth.roll_outcome(2), FrameOutcome::Open);
    }
}
