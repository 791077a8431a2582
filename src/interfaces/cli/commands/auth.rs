//! Login, logout and password change commands

use colored::Colorize;

use super::helpers::{finish, print_navigation, prompt_line, prompt_password};
use crate::client::ServiceContext;
use crate::interfaces::cli::CliError;
use crate::services::{Navigation, StaticPage};

pub async fn login(
    ctx: &ServiceContext,
    username: Option<String>,
    password: Option<String>,
) -> Result<(), CliError> {
    let username = match username {
        Some(u) => u,
        None => prompt_line("Username: ")?,
    };
    let password = match password {
        Some(p) => p,
        None => prompt_password("Password: ")?,
    };

    let service = ctx.auth_service().await.map_err(CliError::init)?;
    let outcome = service.login(&username, &password).await;
    if outcome.navigation == Some(Navigation::Page(StaticPage::Admin)) {
        println!(
            "{} Logged in as {}",
            "✓".bold().green(),
            username.trim().cyan()
        );
    }
    finish(ctx, outcome).await
}

pub async fn logout(ctx: &ServiceContext) -> Result<(), CliError> {
    let service = ctx.auth_service().await.map_err(CliError::init)?;
    let outcome = service.logout().await;
    if outcome.navigation.is_some() {
        println!("{} Logged out", "✓".bold().green());
    } else {
        println!(
            "{} Logout request did not reach the backend",
            "ℹ".bold().blue()
        );
    }
    finish(ctx, outcome).await
}

/// Interactive input asks twice; `--password` is used for both fields.
pub async fn change_pass(ctx: &ServiceContext, password: Option<String>) -> Result<(), CliError> {
    let service = ctx.auth_service().await.map_err(CliError::init)?;
    if let Some(navigation) = service.require_admin().await.map_err(CliError::init)? {
        let hostname = ctx.hostname().await.map_err(CliError::init)?;
        print_navigation(&navigation, hostname);
        return Err(CliError::CommandError(
            "Not logged in as admin, run `linkfront login` first".to_string(),
        ));
    }

    let (new_pass, confirm) = match password {
        Some(p) => (p.clone(), p),
        None => (
            prompt_password("New password: ")?,
            prompt_password("Confirm password: ")?,
        ),
    };

    let outcome = service.change_password(&new_pass, &confirm).await;
    finish(ctx, outcome).await
}
