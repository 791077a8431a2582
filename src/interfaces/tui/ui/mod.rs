// UI submodules
mod admin;
mod common;
mod exiting;
mod forms;
mod help;
mod home;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use admin::draw_admin_screen;
pub use exiting::draw_exiting_screen;
pub use forms::{draw_change_pass_screen, draw_login_screen, draw_resolve_screen};
pub use help::draw_help_screen;
pub use home::draw_home_screen;

use super::app::{App, CurrentScreen};
use super::constants::base_style;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    // 主题底色
    frame.render_widget(Block::default().style(base_style(app.theme)), frame.area());

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // 弹窗下方保留底层屏幕
    match app.base_screen {
        CurrentScreen::Admin => draw_admin_screen(frame, app, main_chunks[1]),
        CurrentScreen::Login => {
            draw_home_screen(frame, app, main_chunks[1]);
            draw_login_screen(frame, app, main_chunks[1]);
        }
        CurrentScreen::ChangePass => {
            draw_admin_screen(frame, app, main_chunks[1]);
            draw_change_pass_screen(frame, app, main_chunks[1]);
        }
        _ => draw_home_screen(frame, app, main_chunks[1]),
    }

    match app.current_screen {
        CurrentScreen::Resolve => draw_resolve_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, app, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, main_chunks[1]),
        _ => {}
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
