//! Login, change password and path popups

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, LoginField, PasswordField};
use crate::interfaces::tui::constants::{base_style, colors, popup, text_color};

fn hint(text: &str) -> Paragraph<'_> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(text, Style::default().fg(colors::MUTED))),
    ])
}

pub fn draw_login_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Admin Login", popup::LOGIN)
        .background(base_style(app.theme))
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Hint
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Min(1),    // Footer
        ])
        .split(inner_area);

    frame.render_widget(hint("Use [Tab] to switch fields."), chunks[0]);

    let color = text_color(app.theme);
    InputField::new("Username", &app.username_input)
        .active(app.login_field == LoginField::Username)
        .text_color(color)
        .render(frame, chunks[1]);
    InputField::new("Password", &app.password_input)
        .active(app.login_field == LoginField::Password)
        .masked()
        .text_color(color)
        .render(frame, chunks[2]);

    frame.render_widget(hint("Press [Enter] to log in, [Esc] to go back"), chunks[3]);
}

pub fn draw_change_pass_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Change Password", popup::CHANGE_PASS)
        .theme_color(Color::Red)
        .background(base_style(app.theme))
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner_area);

    frame.render_widget(hint("Both fields must match."), chunks[0]);

    let color = text_color(app.theme);
    InputField::new("New Password", &app.new_pass_input)
        .active(app.password_field == PasswordField::Password)
        .masked()
        .text_color(color)
        .render(frame, chunks[1]);
    InputField::new("Confirm Password", &app.confirm_input)
        .active(app.password_field == PasswordField::Confirm)
        .masked()
        .text_color(color)
        .render(frame, chunks[2]);

    frame.render_widget(hint("Press [Enter] to save, [Esc] to cancel"), chunks[3]);
}

pub fn draw_resolve_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Go to Path", popup::RESOLVE)
        .theme_color(colors::SUCCESS)
        .background(base_style(app.theme))
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner_area);

    InputField::new("Path", &app.path_input)
        .active(true)
        .placeholder("/abc123 or /admin/")
        .text_color(text_color(app.theme))
        .render(frame, chunks[0]);

    frame.render_widget(hint("A short key is looked up on the backend"), chunks[1]);
}
