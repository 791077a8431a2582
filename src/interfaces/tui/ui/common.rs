use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{colors, text_color};
use crate::services::NoticeLevel;

/// Draw title bar with hostname and theme
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let site = app
        .ctx
        .config()
        .site
        .hostname
        .clone()
        .unwrap_or_else(|| app.ctx.config().site.url.clone());

    let title_text = Line::from(vec![
        Span::styled("Linkfront", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(format!("{} ", site), Style::default().fg(colors::WARNING)),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("{} {}", app.theme.icon(), app.theme),
            Style::default().fg(text_color(app.theme)),
        ),
    ]);

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar from the current notice
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = match &app.notice {
        Some(notice) => {
            let style = match notice.level {
                NoticeLevel::Info => Style::default().fg(Color::Black).bg(colors::PRIMARY),
                NoticeLevel::Success => Style::default().fg(Color::Black).bg(colors::SUCCESS),
                NoticeLevel::Warning => Style::default().fg(Color::Black).bg(colors::WARNING),
                NoticeLevel::Error => Style::default().fg(Color::White).bg(colors::ERROR),
            };
            (
                format!("[{}] {}", notice.level, notice.text),
                style.bold(),
            )
        }
        None => ("Ready".to_string(), Style::default().fg(colors::PRIMARY)),
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

fn shortcuts(app: &App) -> Vec<(&'static str, &'static str, Color)> {
    match app.current_screen {
        CurrentScreen::Home => vec![
            ("Enter", "Shorten", colors::SUCCESS),
            ("^O", "QR", colors::PRIMARY),
            ("^Y", "Copy", colors::PRIMARY),
            ("^G", "Go to path", colors::PRIMARY),
            ("^A", "Admin", Color::Magenta),
            ("^T", "Theme", colors::WARNING),
            ("F1", "Help", Color::Blue),
            ("Esc", "Close/Quit", colors::ERROR),
        ],
        CurrentScreen::Admin if app.search_focused => vec![
            ("Enter", "Delete", colors::ERROR),
            ("Esc", "Leave search", colors::MUTED),
        ],
        CurrentScreen::Admin => vec![
            ("j/k", "Navigate", colors::PRIMARY),
            ("d", "Delete", colors::ERROR),
            ("/", "Search", colors::PRIMARY),
            ("p", "Purge", colors::ERROR),
            ("r", "Refresh", colors::PRIMARY),
            ("c", "Password", colors::WARNING),
            ("o", "Logout", Color::Magenta),
            ("h", "Home", colors::PRIMARY),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Login | CurrentScreen::ChangePass => vec![
            ("Tab", "Switch Field", colors::PRIMARY),
            ("Enter", "Submit", colors::SUCCESS),
            ("Esc", "Back", colors::ERROR),
        ],
        CurrentScreen::Resolve => vec![
            ("Enter", "Go", colors::SUCCESS),
            ("Esc", "Cancel", colors::ERROR),
        ],
        CurrentScreen::Exiting => {
            vec![("y", "Yes", colors::SUCCESS), ("n", "No", colors::ERROR)]
        }
        CurrentScreen::Help => vec![("any key", "Close", colors::ERROR)],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(text_color(app.theme)),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
