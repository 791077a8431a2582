//! Event handlers for Help and Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::App;

/// Any key closes help.
pub fn handle_help_screen(app: &mut App, _key: KeyEvent) -> std::io::Result<bool> {
    app.close_popup();
    Ok(false)
}

/// Handle exit confirmation
pub fn handle_exiting_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_popup(),
        _ => {}
    }
    Ok(false)
}
