//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use std::sync::Arc;

use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Run TUI mode
///
/// This function:
/// 1. Validates the configuration
/// 2. Delegates to the actual TUI implementation
pub async fn run_tui(config: Arc<StaticConfig>) -> color_eyre::Result<()> {
    lifetime::startup::cli_tui_pre_startup(&config)?;
    crate::interfaces::tui::run_tui(config).await
}
