//! Console: prompts, styled messages, and score display on stdout.
//!
//! The only place in the application that touches stdin/stdout. Output is
//! queued through crossterm commands and flushed once per call.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use cli_bowling_core::RollLog;
use cli_bowling_types::FrameOutcome;

use crate::scoreboard::Scoreboard;

pub struct Console {
    stdout: io::Stdout,
    scoreboard: Scoreboard,
}

impl Console {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            scoreboard: Scoreboard::default(),
        }
    }

    /// Game banner shown once at startup.
    pub fn banner(&mut self) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        self.stdout.queue(Print("!!! Welcome to the Bowling Game !!!\n"))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Plain informational line.
    pub fn info(&mut self, message: &str) -> Result<()> {
        self.stdout.queue(Print(message))?;
        self.stdout.queue(Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Warning line for recoverable input problems.
    pub fn warn(&mut self, message: &str) -> Result<()> {
        self.stdout.queue(SetForegroundColor(Color::Yellow))?;
        self.stdout.queue(Print(message))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Call out a strike or spare; open rolls stay quiet.
    pub fn announce(&mut self, outcome: FrameOutcome) -> Result<()> {
        let (color, line) = match outcome {
            FrameOutcome::Strike => (Color::Cyan, "Strike!"),
            FrameOutcome::Spare => (Color::Green, "Spare!"),
            FrameOutcome::Open => return Ok(()),
        };
        self.stdout.queue(SetForegroundColor(color))?;
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        self.stdout.queue(Print(line))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Print the scorecard for the log as recorded so far.
    pub fn print_scoreboard(&mut self, log: &RollLog) -> Result<()> {
        for line in self.scoreboard.render_lines(log) {
            self.stdout.queue(Print(line))?;
            self.stdout.queue(Print("\n"))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    /// Print the final total.
    pub fn total(&mut self, score: u32) -> Result<()> {
        self.stdout.queue(Print("\nTotal Score: "))?;
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        self.stdout.queue(Print(score.to_string()))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Show `prompt` and read one line of input.
    ///
    /// A closed stdin is reported as an error rather than spinning the
    /// caller's retry loop on empty reads.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.stdout.queue(Print(prompt))?;
        self.stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            bail!("input stream closed before the game finished");
        }
        Ok(line)
    }

    /// Block until the player presses enter.
    pub fn pause_for_exit(&mut self) -> Result<()> {
        self.stdout.queue(Print("\nPress Enter to exit..."))?;
        self.stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
