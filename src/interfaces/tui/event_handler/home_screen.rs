//! Home screen: URL input and result card
//!
//! Plain characters go to the input, actions use Ctrl chords.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{handle_backspace, handle_text_input};

pub async fn handle_home_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Ok(true),
            KeyCode::Char('o') => app.original_qr(),
            KeyCode::Char('y') => app.copy_result(),
            KeyCode::Char('t') => app.toggle_theme(),
            KeyCode::Char('a') => app.open_admin().await,
            KeyCode::Char('l') => app.show_login(),
            KeyCode::Char('g') => {
                app.path_input.clear();
                app.open_popup(CurrentScreen::Resolve);
            }
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Enter => app.shorten().await,
        KeyCode::F(1) => app.open_popup(CurrentScreen::Help),
        KeyCode::Esc => {
            if app.card.is_some() {
                app.close_card();
            } else {
                app.open_popup(CurrentScreen::Exiting);
            }
        }
        KeyCode::Char(c) => handle_text_input(app, c),
        KeyCode::Backspace => handle_backspace(app),
        _ => {}
    }
    Ok(false)
}
