use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::widgets::InputField;
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{colors, text_color};
use crate::services::{CardKind, ResultCard};

pub fn draw_home_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    InputField::new("URL", &app.url_input)
        .active(app.current_screen == CurrentScreen::Home)
        .placeholder("Enter to shorten, Ctrl+O for a QR code")
        .text_color(text_color(app.theme))
        .render(frame, chunks[0]);

    if let Some(card) = &app.card {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);
        draw_card(frame, app, card, content[0]);
        draw_qr(frame, app, content[1]);
    } else if let Some(target) = &app.redirect_target {
        draw_redirect_target(frame, app, target, chunks[1]);
    } else {
        draw_welcome(frame, app, chunks[1]);
    }
}

fn label(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default()
            .fg(colors::MUTED)
            .add_modifier(Modifier::BOLD),
    )
}

fn draw_card(frame: &mut Frame, app: &App, card: &ResultCard, area: Rect) {
    let text_style = Style::default().fg(text_color(app.theme));
    let title = match card.kind {
        CardKind::Shortened => "Shortened URL",
        CardKind::Original => "Original URL",
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            label("Original:  "),
            Span::styled(card.original_url.as_str(), text_style),
        ]),
    ];
    if let Some(short_url) = &card.short_url {
        lines.push(Line::from(vec![
            label("Shortened: "),
            Span::styled(
                short_url.as_str(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    if let Some(warning) = card.warning() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            warning,
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[^Y]", Style::default().fg(colors::SUCCESS).bold()),
        Span::styled(" copy  ", text_style),
        Span::styled("[Esc]", Style::default().fg(colors::ERROR).bold()),
        Span::styled(" close", text_style),
    ]));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .title_style(Style::default().fg(colors::PRIMARY).bold()),
        );
    frame.render_widget(paragraph, area);
}

fn draw_qr(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("QR Code");

    let Some(qr_text) = &app.qr_text else {
        let paragraph = Paragraph::new("QR code unavailable")
            .style(Style::default().fg(colors::MUTED))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    // 使用配置的 QR 颜色，非 hex 时退回黑白
    let palette = app.ctx.qr_renderer().palette(app.theme);
    let fg = palette
        .dot_rgb()
        .map_or(Color::Black, |(r, g, b)| Color::Rgb(r, g, b));
    let bg = palette
        .background_rgb()
        .map_or(Color::White, |(r, g, b)| Color::Rgb(r, g, b));

    let lines: Vec<Line> = qr_text
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(fg).bg(bg))))
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_redirect_target(frame: &mut Frame, app: &App, target: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(label("Short link resolves to")),
        Line::from(""),
        Line::from(Span::styled(
            target,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[^Y] copy",
            Style::default().fg(text_color(app.theme)),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Redirect"),
        );
    frame.render_widget(paragraph, area);
}

fn draw_welcome(frame: &mut Frame, app: &App, area: Rect) {
    let muted = Style::default().fg(colors::MUTED);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Paste a URL and press Enter",
            Style::default()
                .fg(text_color(app.theme))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "URLs without a scheme get https:// in front",
            muted,
        )),
        Line::from(Span::styled("Press [F1] for all shortcuts", muted)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(muted),
    );
    frame.render_widget(paragraph, area);
}
