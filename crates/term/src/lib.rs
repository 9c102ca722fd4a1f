//! Terminal presentation module.
//!
//! A small, game-oriented console layer: a pure scoreboard view over the
//! recorded log plus a stdout console for prompts and styled messages.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep everything that formats text pure and unit-tested
//! - Confine stdin/stdout handling to one place

pub mod console;
pub mod scoreboard;

pub use cli_bowling_core as core;
pub use cli_bowling_types as types;

pub use console::Console;
pub use scoreboard::{frame_marks, Scoreboard};
