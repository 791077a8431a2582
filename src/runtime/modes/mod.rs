//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one command, then exit)
//! - TUI mode (Terminal UI)
//!
//! The mode selection is based on the parsed subcommand and feature flags.

pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;

pub use cli::run_cli;
#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;
use crate::system::RunMode;

/// Mode detection result
#[derive(Debug)]
pub enum Mode {
    Cli(Commands),
    #[cfg(feature = "tui")]
    Tui,
    /// No subcommand and no TUI compiled in.
    Help,
}

impl Mode {
    /// Run mode for logging and the panic hook.
    pub fn run_mode(&self) -> RunMode {
        match self {
            #[cfg(feature = "tui")]
            Mode::Tui => RunMode::Tui,
            _ => RunMode::Cli,
        }
    }
}

/// Detect which mode to run
///
/// # Mode Detection Logic
/// 1. `tui` subcommand, or no subcommand with the TUI feature -> TUI mode
/// 2. Any other subcommand -> CLI mode
/// 3. Otherwise -> print help
pub fn detect_mode(command: Option<Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        Some(Commands::Tui) | None => Mode::Tui,
        Some(cmd) => Mode::Cli(cmd),
        #[cfg(not(feature = "tui"))]
        None => Mode::Help,
    }
}
