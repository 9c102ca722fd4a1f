//! Interactive bowling runner (default binary).
//!
//! This is the primary gameplay entrypoint. It owns the prompt/re-prompt
//! loop; rule validation and scoring stay inside the core crate, which only
//! ever sees integers.

use anyhow::Result;

use cli_bowling::core::{scoring, GameError, RollLog};
use cli_bowling::input::{parse_confirm, parse_roll, roll_prompt};
use cli_bowling::term::Console;
use cli_bowling::types::{NextRoll, PIN_COUNT};

fn main() -> Result<()> {
    let mut console = Console::new();
    console.banner()?;

    if !confirm_start(&mut console)? {
        console.info("Game exited by user.")?;
        return Ok(());
    }

    let result = run(&mut console);

    // Keep the window open even after a failed game.
    let _ = console.pause_for_exit();
    result
}

fn confirm_start(console: &mut Console) -> Result<bool> {
    loop {
        let line = console.read_line("Start the game? (y/n): ")?;
        match parse_confirm(&line) {
            Some(answer) => return Ok(answer),
            None => console.warn("Please answer y or n.")?,
        }
    }
}

fn run(console: &mut Console) -> Result<()> {
    let mut log = RollLog::new();

    while let Some(next) = log.next_roll() {
        if next.roll == 1 && next.max_pins < PIN_COUNT {
            console.info(&format!("Remaining pins: {}", next.max_pins))?;
        }

        record_roll(console, &mut log, &next)?;

        // Show progress whenever a frame closes with its score already
        // determined; pending bonus rolls keep it quiet.
        if log.current_frame() != Some(next.frame) {
            if let Ok(score) = scoring::running_score_after_frame(&log, next.frame) {
                console.info(&format!("Score through frame {}: {score}", next.frame + 1))?;
            }
        }
    }

    console.info("")?;
    console.print_scoreboard(&log)?;
    let total = scoring::total_score(&log)?;
    console.total(total)?;
    Ok(())
}

/// Prompt until one legal roll has been recorded.
fn record_roll(console: &mut Console, log: &mut RollLog, next: &NextRoll) -> Result<()> {
    loop {
        let line = console.read_line(&roll_prompt(next))?;

        let Some(pins) = parse_roll(&line) else {
            console.warn("Invalid input. Please enter a number.")?;
            continue;
        };

        match log.append_roll(pins) {
            Ok(placement) => {
                let outcome = log.frame(placement.frame).roll_outcome(placement.roll);
                console.announce(outcome)?;
                return Ok(());
            }
            Err(err @ (GameError::InvalidPinCount { .. } | GameError::InvalidFrameTotal { .. })) => {
                console.warn(&err.to_string())?;
            }
            // State errors are not retryable; surface them.
            Err(err) => return Err(err.into()),
        }
    }
}
