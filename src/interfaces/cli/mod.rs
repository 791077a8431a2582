//! CLI interface module
//!
//! This module provides command-line interface functionality for linkfront.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use tracing::error;

use crate::cli::{AdminCommands, Commands, ConfigCommands, ThemeCommands};
use crate::client::ServiceContext;
use crate::config::StaticConfig;
use crate::errors::LinkfrontError;
use crate::services::messages;
use commands::{admin, auth, config_management, navigation, shorten, theme};

#[derive(Debug)]
pub enum CliError {
    /// Hostname or session could not be set up; the flow never started.
    InitError(String),
    /// Bad input, caught before any request.
    InputError(String),
    /// The action ran and failed (the message is the user-facing notice).
    CommandError(String),
}

impl CliError {
    /// Failure while preparing a flow.
    ///
    /// Only the generic message is shown, details go to the log.
    pub fn init(err: LinkfrontError) -> Self {
        error!("Initialization failed: {}", err);
        CliError::InitError(messages::INIT_FAILED.to_string())
    }

    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::InitError(msg) => format!("Initialization error: {}", msg),
            CliError::InputError(msg) => format!("Input error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::InitError(msg) => {
                format!("{} {}", "Initialization error:".red().bold(), msg.white())
            }
            CliError::InputError(msg) => {
                format!("{} {}", "Input error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkfrontError> for CliError {
    fn from(err: LinkfrontError) -> Self {
        match err {
            LinkfrontError::Validation(msg) => CliError::InputError(msg),
            other => CliError::CommandError(other.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
///
/// The context is lazy, so offline commands (`theme`, `qr`, `config`) never
/// touch the network.
pub async fn run_cli_command(config: Arc<StaticConfig>, cmd: Commands) -> Result<(), CliError> {
    let ctx = ServiceContext::new(config);
    run_with_context(&ctx, cmd).await
}

/// Run a command against an existing context.
pub async fn run_with_context(ctx: &ServiceContext, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Resolve { path } => navigation::resolve(ctx, &path).await,
        Commands::Hostname => navigation::hostname(ctx).await,
        Commands::Status => navigation::backend_status(ctx).await,

        Commands::Shorten {
            url,
            copy,
            svg,
            no_qr,
        } => shorten::shorten(ctx, url, copy, svg, no_qr).await,
        Commands::Qr { url, copy, svg } => shorten::original_qr(ctx, url, copy, svg),

        Commands::Login { username, password } => auth::login(ctx, username, password).await,
        Commands::Logout => auth::logout(ctx).await,
        Commands::ChangePass { password } => auth::change_pass(ctx, password).await,

        Commands::Admin { action } => match action {
            AdminCommands::List => admin::list_records(ctx).await,
            AdminCommands::Delete { target } => admin::delete_record(ctx, &target).await,
            AdminCommands::Purge => admin::purge_records(ctx).await,
        },

        Commands::Theme { action } => match action {
            ThemeCommands::Show => theme::show(ctx),
            ThemeCommands::Toggle => theme::toggle(ctx),
            ThemeCommands::Dark => theme::set(ctx, crate::services::Theme::Dark),
            ThemeCommands::Light => theme::set(ctx, crate::services::Theme::Light),
        },

        Commands::Config { action } => {
            let ConfigCommands::Generate { output_path, force } = action;
            config_management::config_generate(output_path, force).await
        }

        // TUI 由 runtime::modes 启动，命令执行器不处理
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::InputError(
            "The TUI cannot run as a command, start it with `linkfront tui`".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_error_hides_details() {
        let err = CliError::init(LinkfrontError::config_missing(
            "Hostname not found in configuration",
        ));
        assert_eq!(
            err.to_string(),
            "Initialization error: An error occurred during initialization. Please try again."
        );
    }

    #[cfg(feature = "tui")]
    #[tokio::test]
    async fn test_tui_command_is_rejected() {
        use crate::client::testing::FakeTransport;
        use crate::storage::MemorySettingsStore;

        let fake = FakeTransport::arc();
        let ctx = ServiceContext::with_transport(
            Arc::new(StaticConfig::default()),
            MemorySettingsStore::arc(),
            fake.clone(),
        );
        let err = run_with_context(&ctx, Commands::Tui).await.unwrap_err();
        assert!(matches!(err, CliError::InputError(_)));
        assert!(fake.requests().is_empty());
    }

    #[test]
    fn test_validation_maps_to_input_error() {
        let err: CliError = LinkfrontError::validation("bad url").into();
        assert!(matches!(err, CliError::InputError(ref m) if m == "bad url"));
    }
}
