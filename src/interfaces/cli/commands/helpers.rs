//! Shared printing and prompting for CLI commands

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::client::ServiceContext;
use crate::interfaces::cli::CliError;
use crate::services::{Navigation, Notice, NoticeLevel, Outcome};

pub(super) fn print_notice(notice: &Notice) {
    let icon = match notice.level {
        NoticeLevel::Info => "ℹ".bold().blue(),
        NoticeLevel::Success => "✓".bold().green(),
        NoticeLevel::Warning => "⚠".bold().yellow(),
        NoticeLevel::Error => "✗".bold().red(),
    };
    println!("{} {}", icon, notice.text);
}

/// `→ <url>`; `Reload` prints nothing, the caller refreshes itself.
pub(super) fn print_navigation(navigation: &Navigation, hostname: &str) {
    if let Some(href) = navigation.href(hostname) {
        println!("{} {}", "→".bold().cyan(), href.blue().underline());
    }
}

/// Print an outcome. An error notice becomes the command's error instead.
pub(super) async fn finish(ctx: &ServiceContext, outcome: Outcome) -> Result<(), CliError> {
    if let Some(notice) = &outcome.notice {
        if notice.is_error() {
            return Err(CliError::CommandError(notice.text.clone()));
        }
        print_notice(notice);
    }
    if let Some(navigation) = &outcome.navigation {
        let hostname = ctx.hostname().await.map_err(CliError::init)?;
        print_navigation(navigation, hostname);
    }
    Ok(())
}

pub(super) fn prompt_line(prompt: &str) -> Result<String, CliError> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| CliError::InputError(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CliError::InputError(format!("Failed to read from stdin: {}", e)))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub(super) fn prompt_password(prompt: &str) -> Result<String, CliError> {
    rpassword::prompt_password(prompt)
        .map_err(|e| CliError::InputError(format!("Failed to read password: {}", e)))
}
