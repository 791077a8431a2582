//! Record management commands

use colored::Colorize;

use super::helpers::{print_navigation, print_notice};
use crate::client::ServiceContext;
use crate::interfaces::cli::CliError;
use crate::services::{AdminPage, Navigation, RecordsView};

pub async fn list_records(ctx: &ServiceContext) -> Result<(), CliError> {
    let service = ctx.admin_service().await.map_err(CliError::init)?;
    let page = service.load().await.map_err(CliError::init)?;
    let hostname = ctx.hostname().await.map_err(CliError::init)?;
    render_page(&page, hostname)
}

/// Delete by short key or short URL, then show what is left.
pub async fn delete_record(ctx: &ServiceContext, target: &str) -> Result<(), CliError> {
    let service = ctx.admin_service().await.map_err(CliError::init)?;
    let Some(report) = service.delete_by_search(target).await else {
        return Err(CliError::InputError("Nothing to delete".to_string()));
    };

    if let Some(notice) = &report.outcome.notice {
        print_notice(notice);
    }
    if report.deleted
        && let Some(AdminPage::Ready(view)) = &report.refreshed
    {
        println!(
            "{} {} records left",
            "ℹ".bold().blue(),
            view.records().len().to_string().green()
        );
    }
    if let Some(navigation) = &report.outcome.navigation {
        let hostname = ctx.hostname().await.map_err(CliError::init)?;
        print_navigation(navigation, hostname);
    }

    if report.deleted {
        Ok(())
    } else {
        Err(CliError::CommandError(format!(
            "Record '{}' was not deleted",
            target.trim()
        )))
    }
}

pub async fn purge_records(ctx: &ServiceContext) -> Result<(), CliError> {
    let service = ctx.admin_service().await.map_err(CliError::init)?;
    let outcome = service.purge_all().await;
    if outcome.is_error() {
        let text = outcome.notice.map(|n| n.text).unwrap_or_default();
        return Err(CliError::CommandError(text));
    }

    if let Some(notice) = &outcome.notice {
        print_notice(notice);
    }
    if outcome.navigation == Some(Navigation::Reload) {
        let hostname = ctx.hostname().await.map_err(CliError::init)?;
        render_page(&service.refresh().await, hostname)?;
    }
    Ok(())
}

fn render_page(page: &AdminPage, hostname: &str) -> Result<(), CliError> {
    match page {
        AdminPage::NeedsLogin => {
            if let Some(navigation) = page.navigation() {
                print_navigation(&navigation, hostname);
            }
            Err(CliError::CommandError(
                "Not logged in as admin, run `linkfront login` first".to_string(),
            ))
        }
        AdminPage::Unavailable(notice) => Err(CliError::CommandError(notice.text.clone())),
        AdminPage::Ready(view) => {
            print_records(view, hostname);
            Ok(())
        }
    }
}

fn print_records(view: &RecordsView, hostname: &str) {
    match view {
        RecordsView::Empty => {
            println!("{} {}", "ℹ".bold().blue(), RecordsView::EMPTY_MESSAGE);
        }
        RecordsView::Grid(records) => {
            println!("{}", "Record list:".bold().green());
            println!();
            for record in records {
                println!(
                    "  {} -> {} {}",
                    record.short_key.cyan(),
                    record.original_url.blue().underline(),
                    format!("({}/{})", hostname, record.short_key).dimmed()
                );
            }
            println!();
            println!(
                "{} Total {} records",
                "ℹ".bold().blue(),
                records.len().to_string().green()
            );
        }
    }
}
