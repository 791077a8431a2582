//! Light/dark theme preference
//!
//! Stored as `darkmode = "active"` in the settings store; absent means light.

use std::sync::Arc;

use strum::{AsRefStr, Display};
use tracing::{debug, warn};

use crate::errors::Result;
use crate::storage::SettingsStore;

/// 设置存储中的主题键
pub const DARKMODE_KEY: &str = "darkmode";
pub const DARKMODE_ACTIVE: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Icon of the theme switch in this state.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Where the toggle was pressed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewContext {
    pub on_home: bool,
    pub qr_displayed: bool,
}

impl ViewContext {
    /// Toggling is blocked on the home view while a QR code is shown.
    pub fn toggle_blocked(&self) -> bool {
        self.on_home && self.qr_displayed
    }
}

#[derive(Clone)]
pub struct ThemeController {
    store: Arc<dyn SettingsStore>,
}

impl ThemeController {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Theme recorded in the store.
    pub fn load(&self) -> Theme {
        match self.store.get(DARKMODE_KEY).as_deref() {
            Some(DARKMODE_ACTIVE) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn enable_dark(&self) -> Result<Theme> {
        self.store.set(DARKMODE_KEY, DARKMODE_ACTIVE)?;
        debug!("Dark mode enabled");
        Ok(Theme::Dark)
    }

    pub fn disable_dark(&self) -> Result<Theme> {
        self.store.remove(DARKMODE_KEY)?;
        debug!("Dark mode disabled");
        Ok(Theme::Light)
    }

    pub fn set(&self, theme: Theme) -> Result<Theme> {
        match theme {
            Theme::Dark => self.enable_dark(),
            Theme::Light => self.disable_dark(),
        }
    }

    /// Flip the stored theme unless `view` blocks it; returns the theme now
    /// in effect.
    pub fn toggle(&self, view: ViewContext) -> Result<Theme> {
        let current = self.load();
        if view.toggle_blocked() {
            debug!("Theme toggle ignored while a QR code is displayed");
            return Ok(current);
        }
        match current {
            Theme::Light => self.enable_dark(),
            Theme::Dark => self.disable_dark(),
        }
    }

    /// Like `toggle`, logging a storage failure and keeping the old theme.
    pub fn toggle_or_keep(&self, view: ViewContext) -> Theme {
        self.toggle(view).unwrap_or_else(|e| {
            warn!("Failed to store theme preference: {}", e);
            self.load()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileSettingsStore, MemorySettingsStore};

    #[test]
    fn test_default_is_light() {
        let controller = ThemeController::new(MemorySettingsStore::arc());
        assert_eq!(controller.load(), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_and_persists_flag() {
        let store = MemorySettingsStore::arc();
        let controller = ThemeController::new(store.clone());

        assert_eq!(controller.toggle(ViewContext::default()).unwrap(), Theme::Dark);
        assert_eq!(store.get(DARKMODE_KEY).as_deref(), Some("active"));

        assert_eq!(controller.toggle(ViewContext::default()).unwrap(), Theme::Light);
        assert_eq!(store.get(DARKMODE_KEY), None);
    }

    #[test]
    fn test_toggle_blocked_on_home_with_qr() {
        let controller = ThemeController::new(MemorySettingsStore::arc());
        let blocked = ViewContext {
            on_home: true,
            qr_displayed: true,
        };
        assert_eq!(controller.toggle(blocked).unwrap(), Theme::Light);
        assert_eq!(controller.load(), Theme::Light);

        // 其他页面或没有二维码时正常切换
        let elsewhere = ViewContext {
            on_home: false,
            qr_displayed: true,
        };
        assert_eq!(controller.toggle(elsewhere).unwrap(), Theme::Dark);
        let home_without_qr = ViewContext {
            on_home: true,
            qr_displayed: false,
        };
        assert_eq!(controller.toggle(home_without_qr).unwrap(), Theme::Light);
    }

    #[test]
    fn test_dark_mode_survives_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        {
            let controller = ThemeController::new(FileSettingsStore::arc(&path));
            controller.enable_dark().unwrap();
        }
        let reloaded = ThemeController::new(FileSettingsStore::arc(&path));
        assert_eq!(reloaded.load(), Theme::Dark);
        assert_eq!(reloaded.load().icon(), Theme::Dark.icon());
    }

    #[test]
    fn test_toggle_or_keep_keeps_theme_when_store_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let controller =
            ThemeController::new(FileSettingsStore::arc(blocker.join("state.json")));

        assert!(controller.toggle(ViewContext::default()).is_err());
        assert_eq!(controller.toggle_or_keep(ViewContext::default()), Theme::Light);
        assert_eq!(controller.load(), Theme::Light);
    }

    #[test]
    fn test_unknown_flag_value_is_light() {
        let store = MemorySettingsStore::arc();
        store.set(DARKMODE_KEY, "null").unwrap();
        assert_eq!(ThemeController::new(store).load(), Theme::Light);
    }
}
