//! 通用输入框组件
//!
//! 支持激活高亮、密码遮蔽和禁用状态

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Password", &app.password_input)
///     .active(true)
///     .masked()
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    placeholder: Option<&'a str>,
    masked: bool,
    disabled: bool,
    text_color: Color,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            masked: false,
            disabled: false,
            text_color: Color::White,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 密码遮蔽
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// 禁用时不接受输入
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    fn display_title(&self) -> String {
        let mut title = self.title.to_string();
        if self.value.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            title = format!("{} ({})", self.title, placeholder);
        }
        if self.disabled {
            title.push_str(" [disabled]");
        }
        title
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            Style::default().fg(colors::MUTED)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(self.text_color)
        }
    }

    fn display_value(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else if self.is_active {
            format!("{}_", self.value)
        } else {
            self.value.to_string()
        }
    }

    /// `area` 高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.display_value())
            .style(Style::default().fg(self.text_color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.display_title())
                    .border_style(self.border_style()),
            );
        frame.render_widget(input, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_title() {
        let field = InputField::new("URL", "").placeholder("Enter to shorten");
        assert_eq!(field.display_title(), "URL (Enter to shorten)");

        let field = InputField::new("URL", "a.com").placeholder("Enter to shorten");
        assert_eq!(field.display_title(), "URL");

        let field = InputField::new("Search", "").disabled(true);
        assert!(field.display_title().ends_with("[disabled]"));
    }

    #[test]
    fn test_input_field_masked_counts_chars() {
        let field = InputField::new("Password", "pässword").masked().active(true);
        assert_eq!(field.display_value(), "********");
    }

    #[test]
    fn test_active_field_shows_cursor() {
        let field = InputField::new("URL", "a.com").active(true);
        assert_eq!(field.display_value(), "a.com_");
    }
}
