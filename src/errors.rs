use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkfrontError {
    ConfigMissing(String),
    Configuration(String),
    Transport(String),
    Schema(String),
    Validation(String),
    Storage(String),
    Serialization(String),
    Qr(String),
    Clipboard(String),
}

impl LinkfrontError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkfrontError::ConfigMissing(_) => "E001",
            LinkfrontError::Configuration(_) => "E002",
            LinkfrontError::Transport(_) => "E003",
            LinkfrontError::Schema(_) => "E004",
            LinkfrontError::Validation(_) => "E005",
            LinkfrontError::Storage(_) => "E006",
            LinkfrontError::Serialization(_) => "E007",
            LinkfrontError::Qr(_) => "E008",
            LinkfrontError::Clipboard(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkfrontError::ConfigMissing(_) => "Site Configuration Missing",
            LinkfrontError::Configuration(_) => "Configuration Error",
            LinkfrontError::Transport(_) => "Network Error",
            LinkfrontError::Schema(_) => "Unexpected Response",
            LinkfrontError::Validation(_) => "Validation Error",
            LinkfrontError::Storage(_) => "Settings Storage Error",
            LinkfrontError::Serialization(_) => "Serialization Error",
            LinkfrontError::Qr(_) => "QR Code Error",
            LinkfrontError::Clipboard(_) => "Clipboard Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkfrontError::ConfigMissing(msg) => msg,
            LinkfrontError::Configuration(msg) => msg,
            LinkfrontError::Transport(msg) => msg,
            LinkfrontError::Schema(msg) => msg,
            LinkfrontError::Validation(msg) => msg,
            LinkfrontError::Storage(msg) => msg,
            LinkfrontError::Serialization(msg) => msg,
            LinkfrontError::Qr(msg) => msg,
            LinkfrontError::Clipboard(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI/TUI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// Whether the failure happened before or during the HTTP exchange
    /// (as opposed to a well-formed response the backend rejected).
    pub fn is_network(&self) -> bool {
        matches!(self, LinkfrontError::Transport(_))
    }
}

impl fmt::Display for LinkfrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkfrontError {}

// 便捷的构造函数
impl LinkfrontError {
    pub fn config_missing<T: Into<String>>(msg: T) -> Self {
        LinkfrontError::ConfigMissing(msg.into())
    }

    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        LinkfrontError::Configuration(msg.into())
    }

    pub fn transport<T: Into<String>>(msg: T) -> Self {
        LinkfrontError::Transport(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        LinkfrontError::Schema(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkfrontError::Validation(msg.into())
    }

    pub fn storage<T: Into<String>>(msg: T) -> Self {
        LinkfrontError::Storage(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkfrontError::Serialization(msg.into())
    }

    pub fn qr<T: Into<String>>(msg: T) -> Self {
        LinkfrontError::Qr(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        LinkfrontError::Clipboard(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for LinkfrontError {
    fn from(err: std::io::Error) -> Self {
        LinkfrontError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LinkfrontError {
    fn from(err: serde_json::Error) -> Self {
        LinkfrontError::Serialization(err.to_string())
    }
}

impl From<ureq::Error> for LinkfrontError {
    fn from(err: ureq::Error) -> Self {
        LinkfrontError::Transport(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkfrontError {
    fn from(err: toml::ser::Error) -> Self {
        LinkfrontError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LinkfrontError {
    fn from(err: config::ConfigError) -> Self {
        LinkfrontError::Configuration(err.to_string())
    }
}

impl From<url::ParseError> for LinkfrontError {
    fn from(err: url::ParseError) -> Self {
        LinkfrontError::Configuration(err.to_string())
    }
}

impl From<qrcode::types::QrError> for LinkfrontError {
    fn from(err: qrcode::types::QrError) -> Self {
        LinkfrontError::Qr(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkfrontError>;
