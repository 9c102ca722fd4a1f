//! Scoring module - frame grouping and bonus rules for a recorded game.
//!
//! All functions are pure over the frame array: frame `i`'s score depends on
//! frames `i..=i+2` only, so results do not depend on traversal order and
//! [`total_score`] is idempotent on the same log.

use cli_bowling_types::{LAST_FRAME, PIN_COUNT};

use crate::error::GameError;
use crate::roll_log::RollLog;

/// Rolls recorded after frame `index`, flattened across frame boundaries.
///
/// Bonus rolls do not respect frame edges: a strike chain reads its second
/// bonus roll from the frame after next, or from the tenth frame's second
/// roll when the chain ends there.
fn rolls_after(log: &RollLog, index: usize) -> impl Iterator<Item = u8> + '_ {
    log.frames()[index + 1..]
        .iter()
        .flat_map(|frame| frame.rolls().iter().copied())
}

/// Bonus for a strike: the next two rolls, `None` while they are pending.
fn strike_bonus(log: &RollLog, index: usize) -> Option<u32> {
    let mut bonus = rolls_after(log, index);
    Some(u32::from(bonus.next()?) + u32::from(bonus.next()?))
}

/// Bonus for a spare: the next roll, `None` while it is pending.
fn spare_bonus(log: &RollLog, index: usize) -> Option<u32> {
    rolls_after(log, index).next().map(u32::from)
}

/// Score of the frame at `index`, bonuses included.
///
/// Fails with [`GameError::BonusRollsPending`] while the frame is still open
/// or its bonus rolls have not been entered yet.
///
/// Panics if `index >= FRAME_COUNT`.
pub fn frame_score(log: &RollLog, index: usize) -> Result<u32, GameError> {
    let frame = log.frame(index);
    let pending = GameError::BonusRollsPending { frame: index };

    if index == LAST_FRAME {
        // No lookahead: the tenth frame's bonus rolls live inside it.
        return if frame.is_closed(true) {
            Ok(frame.pin_sum())
        } else {
            Err(pending)
        };
    }

    if frame.is_strike() {
        let bonus = strike_bonus(log, index).ok_or(pending)?;
        Ok(u32::from(PIN_COUNT) + bonus)
    } else if frame.is_spare() {
        let bonus = spare_bonus(log, index).ok_or(pending)?;
        Ok(u32::from(PIN_COUNT) + bonus)
    } else if frame.is_closed(false) {
        Ok(frame.pin_sum())
    } else {
        Err(pending)
    }
}

/// Total score of a completed game.
///
/// Fails with [`GameError::IncompleteGame`] until all ten frames have
/// closed; for a complete log every bonus roll exists, so the per-frame
/// scores below cannot be pending.
pub fn total_score(log: &RollLog) -> Result<u32, GameError> {
    if !log.is_complete() {
        return Err(GameError::IncompleteGame);
    }
    running_score_after_frame(log, LAST_FRAME)
}

/// Cumulative score through `frame_index`, inclusive.
///
/// Fails with [`GameError::BonusRollsPending`] if any frame in range cannot
/// be scored yet; used for progressive display while a game is in flight.
///
/// Panics if `frame_index >= FRAME_COUNT`.
pub fn running_score_after_frame(log: &RollLog, frame_index: usize) -> Result<u32, GameError> {
    (0..=frame_index).try_fold(0, |total, index| Ok(total + frame_score(log, index)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_from(rolls: &[u8]) -> RollLog {
        let mut log = RollLog::new();
        for &pins in rolls {
            log.append_roll(pins).expect("legal roll");
        }
        log
    }

    #[test]
    fn test_strike_bonus_flattens_frames() {
        // Strike followed by a strike: the second bonus roll comes from two
        // frames ahead.
        let log = log_from(&[10, 10, 4]);
        assert_eq!(strike_bonus(&log, 0), Some(14));
        assert_eq!(strike_bonus(&log, 1), None);
    }

    #[test]
    fn test_spare_bonus_is_next_roll() {
        let log = log_from(&[5, 5, 3]);
        assert_eq!(spare_bonus(&log, 0), Some(3));
        assert_eq!(spare_bonus(&log, 1), None);
    }

    #[test]
    fn test_open_frame_scores_its_pins() {
        let log = log_from(&[3, 4]);
        assert_eq!(frame_score(&log, 0), Ok(7));
    }

    #[test]
    fn test_unfinished_frame_is_pending() {
        let log = log_from(&[3]);
        assert_eq!(
            frame_score(&log, 0),
            Err(GameError::BonusRollsPending { frame: 0 })
        );
        assert_eq!(
            frame_score(&log, 1),
            Err(GameError::BonusRollsPending { frame: 1 })
        );
    }

    #[test]
    fn test_tenth_frame_scores_all_its_rolls() {
        let mut log = log_from(&[0; 18]);
        for pins in [10, 10, 10] {
            log.append_roll(pins).expect("legal roll");
        }
        assert_eq!(frame_score(&log, LAST_FRAME), Ok(30));
    }
}
