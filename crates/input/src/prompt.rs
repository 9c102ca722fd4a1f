//! Prompt text for the next legal roll.

use cli_bowling_types::{NextRoll, MAX_FRAME_ROLLS};

/// Build the prompt for a roll, carrying the context-appropriate maximum.
///
/// The tenth frame's third roll is labeled as the bonus roll it is.
pub fn roll_prompt(next: &NextRoll) -> String {
    if next.roll >= MAX_FRAME_ROLLS {
        format!(
            "Frame {} - bonus roll (0-{}): ",
            next.frame + 1,
            next.max_pins
        )
    } else {
        format!(
            "Frame {} - roll {} (0-{}): ",
            next.frame + 1,
            next.roll + 1,
            next.max_pins
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli_bowling_types::PIN_COUNT;

    #[test]
    fn test_prompt_carries_the_roll_position() {
        let next = NextRoll {
            frame: 0,
            roll: 0,
            max_pins: PIN_COUNT,
        };
        assert_eq!(roll_prompt(&next), "Frame 1 - roll 1 (0-10): ");
    }

    #[test]
    fn test_prompt_carries_the_capped_maximum() {
        let next = NextRoll {
            frame: 2,
            roll: 1,
            max_pins: 4,
        };
        assert_eq!(roll_prompt(&next), "Frame 3 - roll 2 (0-4): ");
    }

    #[test]
    fn test_bonus_roll_is_labeled() {
        let next = NextRoll {
            frame: 9,
            roll: 2,
            max_pins: PIN_COUNT,
        };
        assert_eq!(roll_prompt(&next), "Frame 10 - bonus roll (0-10): ");
    }
}
