//! User interfaces
//!
//! - `cli`: one-shot commands
//! - `tui`: interactive terminal UI

pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
