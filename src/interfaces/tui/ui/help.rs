use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{base_style, colors, popup, text_color};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "HOME",
        &[
            ("Enter", "Shorten the URL"),
            ("Ctrl+O", "QR code of the URL itself"),
            ("Ctrl+Y", "Copy the result"),
            ("Ctrl+G", "Open a path (/key, /admin/, ...)"),
            ("Ctrl+A", "Admin page"),
            ("Ctrl+L", "Log in"),
            ("Ctrl+T", "Toggle dark mode"),
            ("Esc", "Close the result, then quit"),
        ],
    ),
    (
        "ADMIN",
        &[
            ("j/k, Up/Down", "Navigate records"),
            ("g/G, PgUp/PgDn", "Jump and scroll"),
            ("d", "Delete the selected record"),
            ("/", "Delete by URL or short key"),
            ("p", "Purge every record"),
            ("r", "Refresh"),
            ("c", "Change password"),
            ("o", "Log out"),
            ("t", "Toggle dark mode"),
            ("h, Esc", "Back home"),
        ],
    ),
    (
        "FORMS",
        &[
            ("Tab", "Switch field"),
            ("Enter", "Submit"),
            ("Esc", "Cancel"),
        ],
    ),
];

pub fn draw_help_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .background(base_style(app.theme))
        .render(frame, area);

    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            *title,
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(colors::PRIMARY)),
                Span::styled(*desc, Style::default().fg(text_color(app.theme))),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner_area);
}
