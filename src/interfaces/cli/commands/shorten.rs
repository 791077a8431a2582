//! Shorten and QR commands

use colored::Colorize;
use tracing::warn;

use super::helpers::print_notice;
use crate::client::ServiceContext;
use crate::interfaces::cli::CliError;
use crate::services::{ResultCard, ShortenOutcome, check_input};
use crate::utils::clipboard::copy_text;

/// Create a short link and print its card.
pub async fn shorten(
    ctx: &ServiceContext,
    url: String,
    copy: bool,
    svg: Option<String>,
    no_qr: bool,
) -> Result<(), CliError> {
    // 空格等问题在请求 conf.yaml 之前就拒绝
    if let Err(outcome) = check_input(&url) {
        return report_early(outcome);
    }

    let service = ctx.shorten_service().await.map_err(CliError::init)?;
    let mut input = url;
    match service.shorten(&mut input).await {
        ShortenOutcome::Rendered(card) => render_card(ctx, &card, copy, svg.as_deref(), !no_qr),
        ShortenOutcome::Rejected(notice) => Err(CliError::CommandError(notice.text)),
        ShortenOutcome::Ignored => report_early(ShortenOutcome::Ignored),
    }
}

/// QR code of the URL itself. Works offline.
pub fn original_qr(
    ctx: &ServiceContext,
    url: String,
    copy: bool,
    svg: Option<String>,
) -> Result<(), CliError> {
    let mut input = url;
    match crate::services::original_qr(&mut input) {
        ShortenOutcome::Rendered(card) => render_card(ctx, &card, copy, svg.as_deref(), true),
        other => report_early(other),
    }
}

fn report_early(outcome: ShortenOutcome) -> Result<(), CliError> {
    match outcome {
        ShortenOutcome::Ignored => {
            println!("{} Nothing to do, the URL is empty", "ℹ".bold().blue());
            Ok(())
        }
        ShortenOutcome::Rejected(notice) => Err(CliError::InputError(notice.text)),
        ShortenOutcome::Rendered(_) => Ok(()),
    }
}

fn render_card(
    ctx: &ServiceContext,
    card: &ResultCard,
    copy: bool,
    svg: Option<&str>,
    show_qr: bool,
) -> Result<(), CliError> {
    let theme = ctx.theme().load();
    let renderer = ctx.qr_renderer();

    if let Some(warning) = card.warning() {
        println!("{} {}", "⚠".bold().yellow(), warning.yellow().bold());
    }
    println!(
        "  {}:  {}",
        "Original".cyan(),
        card.original_url.blue().underline()
    );
    if let Some(short_url) = &card.short_url {
        println!("  {}: {}", "Shortened".cyan(), short_url.green().underline());
    }

    if show_qr {
        println!();
        println!("{}", renderer.render_terminal(&card.qr_data, theme)?);
        println!();
    }

    if let Some(path) = svg {
        let rendered = renderer.write_svg(path, &card.qr_data, card.qr_size, theme)?;
        println!(
            "{} QR code ({}x{}{}) written to {}",
            "✓".bold().green(),
            card.qr_size,
            card.qr_size,
            if rendered.with_logo { ", with logo" } else { "" },
            path.blue()
        );
    }

    if copy {
        // 复制失败不影响命令结果
        match copy_text(&card.copy_text) {
            Ok(message) => println!("{} {}", "✓".bold().green(), message),
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                print_notice(&crate::services::Notice::warning(e.format_simple()));
            }
        }
    }

    Ok(())
}
