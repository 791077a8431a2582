//! Path resolution, hostname and backend status

use colored::Colorize;

use super::helpers::print_navigation;
use crate::client::{Reply, ServiceContext};
use crate::interfaces::cli::CliError;
use crate::services::{RedirectOutcome, RedirectPlan, messages, plan};

/// Show where a front-end path leads.
pub async fn resolve(ctx: &ServiceContext, path: &str) -> Result<(), CliError> {
    let plan = plan(path);
    match &plan {
        RedirectPlan::Stay => {
            println!("{} Home page, nothing to resolve", "ℹ".bold().blue());
            return Ok(());
        }
        RedirectPlan::Lookup(_) => println!("{}", messages::REDIRECTING.dimmed()),
        RedirectPlan::Static(_) => {}
    }

    let resolver = ctx.redirect_resolver().await.map_err(CliError::init)?;
    let hostname = ctx.hostname().await.map_err(CliError::init)?;
    match resolver.resolve(plan).await {
        RedirectOutcome::Stay => {
            println!("{} Home page, nothing to resolve", "ℹ".bold().blue());
        }
        RedirectOutcome::Navigate(navigation) => print_navigation(&navigation, hostname),
    }
    Ok(())
}

pub async fn hostname(ctx: &ServiceContext) -> Result<(), CliError> {
    let hostname = ctx.hostname().await.map_err(CliError::init)?;
    println!("{}", hostname);
    Ok(())
}

/// Display backend health
pub async fn backend_status(ctx: &ServiceContext) -> Result<(), CliError> {
    let client = ctx.api_client().await.map_err(CliError::init)?;

    match client.backend_status().await? {
        Reply::Accepted(message) => {
            println!("{}", "Backend Status".bold().green());
            println!("  {}:  {}", "Hostname".cyan(), client.hostname());
            println!("  {}:    {}", "Status".cyan(), "up".green());
            if !message.is_empty() {
                println!("  {}:   {}", "Message".cyan(), message.dimmed());
            }
            println!(
                "  {}:   {}",
                "Session".cyan(),
                if ctx.has_session() {
                    "stored".green()
                } else {
                    "none".yellow()
                }
            );
            Ok(())
        }
        Reply::Rejected(message) => Err(CliError::CommandError(format!(
            "Backend reported a problem: {}",
            message.unwrap_or_else(|| "no message".to_string())
        ))),
    }
}
