//! Outcome values returned by the flows
//!
//! Flows never navigate or alert on their own. They return a `Notice` to show
//! and/or a `Navigation` to apply; the CLI or TUI applies both once.

use std::fmt;

use strum::Display;

use super::redirect::StaticPage;

/// Where the caller should go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// `/`
    Home,
    /// One of the static pages, e.g. `/login/`.
    Page(StaticPage),
    /// An absolute URL outside the front end (resolved short link).
    External(String),
    /// Reload the current view from the server.
    Reload,
}

impl Navigation {
    /// Absolute target URL. `None` for `Reload`.
    pub fn href(&self, hostname: &str) -> Option<String> {
        match self {
            Navigation::Home => Some(format!("{}/", hostname)),
            Navigation::Page(page) => Some(page.url(hostname)),
            Navigation::External(url) => Some(url.clone()),
            Navigation::Reload => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A message for the user (the browser's `alert`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of a user action: an optional notice, then an optional navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Option<Notice>,
    pub navigation: Option<Navigation>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            navigation: None,
        }
    }

    pub fn navigate(navigation: Navigation) -> Self {
        Self {
            notice: None,
            navigation: Some(navigation),
        }
    }

    pub fn then(mut self, navigation: Navigation) -> Self {
        self.navigation = Some(navigation);
        self
    }

    pub fn is_error(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_error)
    }
}
