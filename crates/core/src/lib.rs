//! Core scoring logic module - pure, deterministic, and testable
//!
//! This module contains all the bowling rules: roll validation, frame
//! grouping, and score computation. It has **zero dependencies** on UI or
//! I/O, making it:
//!
//! - **Deterministic**: the same roll sequence always produces the same log
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: usable from any front end (console, tests, batch tools)
//!
//! # Module Structure
//!
//! - [`frame`]: per-frame roll storage with strike/spare predicates and the
//!   closed-state rule
//! - [`roll_log`]: append-only record of a game with insertion-time
//!   validation
//! - [`scoring`]: total and running scores with cross-frame bonus lookahead
//! - [`error`]: the closed set of rule violations callers match on
//!
//! # Game Rules
//!
//! Standard ten-pin scoring:
//!
//! - **Strike**: all ten pins on a frame's first roll; scores 10 plus the
//!   next two rolls, taken across frame boundaries
//! - **Spare**: all ten pins across a frame's first two rolls; scores 10
//!   plus the next roll
//! - **Tenth frame**: a strike or spare earns a bonus roll (three rolls
//!   total); the frame scores the sum of its own rolls with no lookahead
//!
//! # Example
//!
//! ```
//! use cli_bowling_core::{scoring, RollLog};
//!
//! let mut log = RollLog::new();
//! for _ in 0..12 {
//!     log.append_roll(10).expect("strikes are legal");
//! }
//!
//! assert!(log.is_complete());
//! assert_eq!(scoring::total_score(&log), Ok(300));
//! ```

pub mod error;
pub mod frame;
pub mod roll_log;
pub mod scoring;

pub use cli_bowling_types as types;

// Re-export commonly used items for convenience
pub use error::GameError;
pub use frame::Frame;
pub use roll_log::RollLog;
pub use scoring::{frame_score, running_score_after_frame, total_score};
