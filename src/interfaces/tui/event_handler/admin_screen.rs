//! Event handlers for the admin record list

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{handle_backspace, handle_text_input};

pub async fn handle_admin_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    if app.search_focused {
        return handle_search_input(app, key).await;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.delete_selected().await,
        KeyCode::Char('/') => {
            // 列表为空时搜索框禁用
            if app.records.as_ref().is_some_and(|view| view.search_enabled()) {
                app.search_focused = true;
            }
        }
        KeyCode::Char('p') | KeyCode::Char('P') => app.purge().await,
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh_records().await,
        KeyCode::Char('c') | KeyCode::Char('C') => app.open_change_pass().await,
        KeyCode::Char('o') | KeyCode::Char('O') => app.logout().await,
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('?') | KeyCode::F(1) => app.open_popup(CurrentScreen::Help),
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Esc => app.show_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.open_popup(CurrentScreen::Exiting),
        _ => {}
    }
    Ok(false)
}

async fn handle_search_input(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Enter => app.delete_by_search().await,
        KeyCode::Esc => app.search_focused = false,
        KeyCode::Char(c) => handle_text_input(app, c),
        KeyCode::Backspace => handle_backspace(app),
        _ => {}
    }
    Ok(false)
}
