//! CLI mode
//!
//! Runs a single command and returns.

use std::sync::Arc;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime;

/// Run CLI mode
///
/// This function:
/// 1. Validates the configuration (skipped for `config generate`, which
///    must work with a broken config)
/// 2. Delegates to the actual CLI implementation
pub async fn run_cli(config: Arc<StaticConfig>, cmd: Commands) -> Result<(), CliError> {
    if !matches!(cmd, Commands::Config { .. }) {
        lifetime::startup::cli_tui_pre_startup(&config).map_err(CliError::init)?;
    }
    crate::interfaces::cli::run_cli_command(config, cmd).await
}
