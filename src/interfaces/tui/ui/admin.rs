use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use super::widgets::InputField;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors, text_color};
use crate::services::RecordsView;

/// 按字符截断，避免切断多字节字符
fn truncate(url: &str) -> String {
    if url.chars().count() > URL_TRUNCATE_LENGTH {
        let head: String = url.chars().take(URL_TRUNCATE_LENGTH).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}

pub fn draw_admin_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let search_enabled = app
        .records
        .as_ref()
        .is_some_and(RecordsView::search_enabled);
    InputField::new("Delete by URL or key", &app.search_input)
        .active(app.search_focused)
        .disabled(!search_enabled)
        .placeholder("press / to type")
        .text_color(text_color(app.theme))
        .render(frame, chunks[0]);

    match app.records.as_ref().map(RecordsView::search_enabled) {
        Some(true) => draw_records_table(frame, app, chunks[1]),
        Some(false) => draw_message(frame, RecordsView::EMPTY_MESSAGE, Color::Gray, chunks[1]),
        None => draw_message(frame, "Records unavailable", colors::ERROR, chunks[1]),
    }
}

fn draw_message(frame: &mut Frame, message: &str, color: Color, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors::MUTED)),
            Span::styled(
                "[r]",
                Style::default()
                    .fg(colors::WARNING)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to refresh", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED))
                .title("Records")
                .title_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_records_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(view) = &app.records else {
        return;
    };
    let hostname = app
        .ctx
        .config()
        .site
        .hostname
        .clone()
        .unwrap_or_default();

    let header = Row::new(vec![
        Span::styled(
            "Short key",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Original URL",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = view
        .records()
        .iter()
        .map(|record| {
            Row::new(vec![
                Span::styled(
                    record.short_key.clone(),
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(truncate(&record.original_url), Style::default().fg(Color::Blue)),
            ])
        })
        .collect();

    let title = if hostname.is_empty() {
        format!("Records ({})", rows.len())
    } else {
        format!("Records ({}) | {}/<key>", rows.len(), hostname)
    };

    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(20)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .title_style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▶ ")
        .column_spacing(1);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
