//! Score-card printer (secondary binary).
//!
//! Scores a finished game from roll values given as arguments and prints the
//! scorecard. Useful for checking a paper card without replaying the game:
//!
//! ```text
//! score-card 10 7 3 9 0 10 0 8 8 2 0 6 10 10 10 8 1
//! ```

use anyhow::{bail, Context, Result};

use cli_bowling::core::{scoring, RollLog};
use cli_bowling::input::parse_roll;
use cli_bowling::term::Console;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        bail!("usage: score-card <pins> <pins> ... (one value per roll)");
    }

    let mut log = RollLog::new();
    for (position, arg) in args.iter().enumerate() {
        let pins = parse_roll(arg)
            .with_context(|| format!("roll {}: `{arg}` is not a pin count", position + 1))?;
        log.append_roll(pins)
            .with_context(|| format!("roll {}: `{arg}` was rejected", position + 1))?;
    }

    let total = scoring::total_score(&log).context("the rolls do not finish a game")?;

    let mut console = Console::new();
    console.print_scoreboard(&log)?;
    console.total(total)?;
    Ok(())
}
