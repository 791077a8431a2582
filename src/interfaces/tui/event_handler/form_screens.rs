//! Event handlers for form screens
//!
//! Handles: Login, ChangePass, Resolve

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_tab_navigation, handle_text_input,
};

/// Handle login screen input
pub async fn handle_login_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_login().await,
        KeyCode::Esc => {
            app.clear_notice();
            app.show_home();
        }
        KeyCode::Tab | KeyCode::BackTab => handle_tab_navigation(app),
        KeyCode::Char(c) => handle_text_input(app, c),
        KeyCode::Backspace => handle_backspace(app),
        _ => {}
    }
    Ok(false)
}

/// Handle change password screen input
pub async fn handle_change_pass_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_change_pass().await,
        KeyCode::Esc => {
            app.clear_notice();
            if app.records.is_some() {
                app.switch_to(CurrentScreen::Admin);
            } else {
                app.show_home();
            }
        }
        KeyCode::Tab | KeyCode::BackTab => handle_tab_navigation(app),
        KeyCode::Char(c) => handle_text_input(app, c),
        KeyCode::Backspace => handle_backspace(app),
        _ => {}
    }
    Ok(false)
}

/// Handle the path popup
pub fn handle_resolve_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Enter => app.start_redirect(),
        KeyCode::Esc => {
            app.path_input.clear();
            app.close_popup();
        }
        KeyCode::Char(c) => handle_text_input(app, c),
        KeyCode::Backspace => handle_backspace(app),
        _ => {}
    }
    Ok(false)
}
