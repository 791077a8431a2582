//! TUI 常量定义

use ratatui::style::{Color, Style};

use crate::services::Theme;

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    pub const LOGIN: PopupSize = PopupSize::new(60, 55);
    pub const CHANGE_PASS: PopupSize = PopupSize::new(60, 55);
    pub const RESOLVE: PopupSize = PopupSize::new(70, 35);
    pub const HELP: PopupSize = PopupSize::new(80, 85);
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;

    /// 暗色主题背景/前景
    pub const DARK_BG: Color = Color::Rgb(31, 31, 31);
    pub const DARK_FG: Color = Color::Rgb(230, 230, 230);
}

/// Base style painted under every frame.
pub fn base_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default(),
        Theme::Dark => Style::default().fg(colors::DARK_FG).bg(colors::DARK_BG),
    }
}

/// Plain text colour for the theme.
pub fn text_color(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::White,
        Theme::Dark => colors::DARK_FG,
    }
}
