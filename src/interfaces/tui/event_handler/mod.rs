//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - home_screen: Home
//! - admin_screen: Admin
//! - form_screens: Login, ChangePass, Resolve
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::{KeyEvent, KeyEventKind};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod admin_screen;
mod form_screens;
mod home_screen;
mod misc_screens;

use admin_screen::*;
use form_screens::*;
use home_screen::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
///
/// Returns `true` when the application should exit.
pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    // Windows 下会同时收到 Press 与 Release
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    match app.current_screen {
        CurrentScreen::Home => handle_home_screen(app, key).await,
        CurrentScreen::Admin => handle_admin_screen(app, key).await,
        CurrentScreen::Login => handle_login_screen(app, key).await,
        CurrentScreen::ChangePass => handle_change_pass_screen(app, key).await,
        CurrentScreen::Resolve => handle_resolve_screen(app, key),
        CurrentScreen::Help => handle_help_screen(app, key),
        CurrentScreen::Exiting => handle_exiting_screen(app, key),
    }
}
