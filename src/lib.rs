//! CLI bowling (workspace facade crate).
//!
//! This package keeps the `cli_bowling::{core,input,term,types}` public API
//! in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use cli_bowling_core as core;
pub use cli_bowling_input as input;
pub use cli_bowling_term as term;
pub use cli_bowling_types as types;
