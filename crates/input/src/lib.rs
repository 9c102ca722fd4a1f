//! Console input module (collaborator-facing).
//!
//! This module is intentionally independent of any terminal backend. It turns
//! raw input lines into integers the core can validate and builds the prompt
//! text for the next legal roll. The re-prompt/retry loop itself belongs to
//! the caller; nothing here performs I/O.

pub mod parse;
pub mod prompt;

pub use cli_bowling_types as types;

pub use parse::{parse_confirm, parse_roll};
pub use prompt::roll_prompt;
