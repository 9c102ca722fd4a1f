//! Game errors - the closed set of rule violations the core can report.
//!
//! Every kind is locally recoverable by the caller (re-prompt and retry).
//! The core signals violations through these values only: no clamping, no
//! default substitution, no printing, no process exit.

use thiserror::Error;

/// Rule violations reported by [`RollLog`](crate::RollLog) and the scoring
/// functions.
///
/// Callers pattern-match on the variant to pick a recovery; the rendered
/// message is suitable for showing to the player as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Roll value above ten pins (below zero is unrepresentable).
    #[error("invalid pin count: {pins} (a roll knocks down 0 to 10 pins)")]
    InvalidPinCount { pins: u8 },

    /// Second roll would push a non-strike frame's total above ten pins.
    #[error("invalid frame total: {first} + {second} knocks down more than 10 pins")]
    InvalidFrameTotal { first: u8, second: u8 },

    /// Append attempted after the tenth frame closed.
    #[error("the game is complete; no further rolls can be recorded")]
    GameAlreadyComplete,

    /// Total score requested before all ten frames closed.
    #[error("the game is not complete; the total score is not yet determined")]
    IncompleteGame,

    /// Score requested for a frame whose determining rolls are still owed.
    /// Mid-game this means "not yet determinable", not a player mistake.
    #[error("frame {} is still waiting on bonus rolls", .frame + 1)]
    BonusRollsPending { frame: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = GameError::InvalidPinCount { pins: 11 };
        assert!(err.to_string().contains("11"));

        let err = GameError::InvalidFrameTotal { first: 7, second: 6 };
        assert!(err.to_string().contains("7 + 6"));
    }

    #[test]
    fn test_pending_message_uses_frame_numbers() {
        let err = GameError::BonusRollsPending { frame: 0 };
        assert_eq!(err.to_string(), "frame 1 is still waiting on bonus rolls");
    }
}
