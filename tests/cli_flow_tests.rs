//! CLI commands run against an in-process backend

mod common;

use common::{ADMIN_PASS, ADMIN_USER, MockBackend};
use linkfront::cli::{AdminCommands, Commands, ThemeCommands};
use linkfront::interfaces::cli::{CliError, run_with_context};
use linkfront::services::Theme;

#[actix_rt::test]
async fn test_hostname_and_status() {
    let backend = MockBackend::start();
    let dir = tempfile::tempdir().unwrap();
    let ctx = backend.context(&dir);

    assert!(run_with_context(&ctx, Commands::Hostname).await.is_ok());
    assert!(run_with_context(&ctx, Commands::Status).await.is_ok());
}

#[actix_rt::test]
async fn test_admin_list_requires_login() {
    let backend = MockBackend::start();
    let dir = tempfile::tempdir().unwrap();
    let ctx = backend.context(&dir);

    let err = run_with_context(
        &ctx,
        Commands::Admin {
            action: AdminCommands::List,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));
}

#[actix_rt::test]
async fn test_shorten_login_delete() {
    let backend = MockBackend::start();
    let dir = tempfile::tempdir().unwrap();
    let ctx = backend.context(&dir);

    run_with_context(
        &ctx,
        Commands::Shorten {
            url: "example.com".to_string(),
            copy: false,
            svg: None,
            no_qr: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(backend.record_count(), 1);

    run_with_context(
        &ctx,
        Commands::Login {
            username: Some(ADMIN_USER.to_string()),
            password: Some(ADMIN_PASS.to_string()),
        },
    )
    .await
    .unwrap();

    run_with_context(
        &ctx,
        Commands::Admin {
            action: AdminCommands::List,
        },
    )
    .await
    .unwrap();

    let missing = run_with_context(
        &ctx,
        Commands::Admin {
            action: AdminCommands::Delete {
                target: "k9".to_string(),
            },
        },
    )
    .await;
    assert!(missing.is_err());

    run_with_context(
        &ctx,
        Commands::Admin {
            action: AdminCommands::Delete {
                target: format!("{}/k1", backend.url()),
            },
        },
    )
    .await
    .unwrap();
    assert_eq!(backend.record_count(), 0);
}

#[actix_rt::test]
async fn test_shorten_rejects_spaces() {
    let backend = MockBackend::start();
    let dir = tempfile::tempdir().unwrap();
    let ctx = backend.context(&dir);

    let err = run_with_context(
        &ctx,
        Commands::Shorten {
            url: "a b".to_string(),
            copy: false,
            svg: None,
            no_qr: true,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::InputError(_)));
    assert_eq!(backend.record_count(), 0);
}

#[actix_rt::test]
async fn test_qr_writes_svg_offline() {
    let backend = MockBackend::start();
    let dir = tempfile::tempdir().unwrap();
    let ctx = backend.context(&dir);
    let svg = dir.path().join("qr.svg");

    run_with_context(
        &ctx,
        Commands::Qr {
            url: "example.com".to_string(),
            copy: false,
            svg: Some(svg.to_string_lossy().into_owned()),
        },
    )
    .await
    .unwrap();

    let content = std::fs::read_to_string(&svg).unwrap();
    assert!(content.contains("<svg"));
}

#[actix_rt::test]
async fn test_theme_commands() {
    let backend = MockBackend::start();
    let dir = tempfile::tempdir().unwrap();
    let ctx = backend.context(&dir);

    let theme = |action| Commands::Theme { action };
    run_with_context(&ctx, theme(ThemeCommands::Dark)).await.unwrap();
    assert_eq!(ctx.theme().load(), Theme::Dark);
    run_with_context(&ctx, theme(ThemeCommands::Toggle)).await.unwrap();
    assert_eq!(ctx.theme().load(), Theme::Light);
    run_with_context(&ctx, theme(ThemeCommands::Show)).await.unwrap();
}
