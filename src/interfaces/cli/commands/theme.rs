//! Theme commands

use colored::Colorize;

use crate::client::ServiceContext;
use crate::interfaces::cli::CliError;
use crate::services::{Theme, ViewContext};

pub fn show(ctx: &ServiceContext) -> Result<(), CliError> {
    print_theme(ctx.theme().load());
    Ok(())
}

/// The CLI never keeps a QR code on screen, so the toggle is never blocked.
pub fn toggle(ctx: &ServiceContext) -> Result<(), CliError> {
    let theme = ctx.theme().toggle(ViewContext::default())?;
    print_theme(theme);
    Ok(())
}

pub fn set(ctx: &ServiceContext, theme: Theme) -> Result<(), CliError> {
    let theme = ctx.theme().set(theme)?;
    print_theme(theme);
    Ok(())
}

fn print_theme(theme: Theme) {
    println!("{} {} theme", theme.icon().bold(), theme.as_ref().cyan());
}
