//! App state definition and basic state management

use ratatui::widgets::TableState;
use tracing::error;

use crate::client::ServiceContext;
use crate::errors::LinkfrontError;
use crate::services::{
    Notice, RecordsView, RedirectPlan, ResultCard, Theme, ViewContext, messages,
};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Home,
    Admin,
    Login,
    ChangePass,
    /// Path input popup over the home view.
    Resolve,
    Help,
    Exiting,
}

impl CurrentScreen {
    /// Popups keep the screen underneath visible.
    pub fn is_popup(&self) -> bool {
        matches!(
            self,
            CurrentScreen::Resolve | CurrentScreen::Help | CurrentScreen::Exiting
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Password,
    Confirm,
}

pub struct App {
    pub ctx: ServiceContext,
    pub current_screen: CurrentScreen,
    /// Screen shown under a popup, restored when it closes.
    pub base_screen: CurrentScreen,
    pub theme: Theme,
    pub notice: Option<Notice>,

    // Home
    pub url_input: String,
    pub card: Option<ResultCard>,
    pub qr_text: Option<String>,
    pub redirect_target: Option<String>,

    // Resolve
    pub path_input: String,
    pub pending_redirect: Option<RedirectPlan>,

    // Admin
    pub records: Option<RecordsView>,
    pub selected_index: usize,
    pub table_state: TableState,
    pub search_input: String,
    pub search_focused: bool,

    // Login
    pub username_input: String,
    pub password_input: String,
    pub login_field: LoginField,

    // Change password
    pub new_pass_input: String,
    pub confirm_input: String,
    pub password_field: PasswordField,
}

impl App {
    pub fn new(ctx: ServiceContext) -> Self {
        // 启动时恢复保存的主题
        let theme = ctx.theme().load();

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            ctx,
            current_screen: CurrentScreen::Home,
            base_screen: CurrentScreen::Home,
            theme,
            notice: None,
            url_input: String::new(),
            card: None,
            qr_text: None,
            redirect_target: None,
            path_input: String::new(),
            pending_redirect: None,
            records: None,
            selected_index: 0,
            table_state,
            search_input: String::new(),
            search_focused: false,
            username_input: String::new(),
            password_input: String::new(),
            login_field: LoginField::Username,
            new_pass_input: String::new(),
            confirm_input: String::new(),
            password_field: PasswordField::Password,
        }
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::success(message));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::error(message));
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// A flow could not start (hostname, session check).
    pub fn init_failed(&mut self, err: LinkfrontError) {
        error!("Initialization failed: {}", err);
        self.set_error(messages::INIT_FAILED);
    }

    /// Where a theme toggle is pressed from.
    pub fn view_context(&self) -> ViewContext {
        ViewContext {
            on_home: self.base_screen == CurrentScreen::Home,
            qr_displayed: self.card.is_some(),
        }
    }

    pub fn open_popup(&mut self, screen: CurrentScreen) {
        if !self.current_screen.is_popup() {
            self.base_screen = self.current_screen;
        }
        self.current_screen = screen;
    }

    pub fn close_popup(&mut self) {
        self.current_screen = self.base_screen;
    }

    /// Switch to a full screen.
    pub fn switch_to(&mut self, screen: CurrentScreen) {
        self.current_screen = screen;
        self.base_screen = screen;
    }

    pub fn show_home(&mut self) {
        self.switch_to(CurrentScreen::Home);
    }

    pub fn record_count(&self) -> usize {
        self.records.as_ref().map_or(0, |view| view.records().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::FakeTransport;
    use crate::interfaces::tui::app::test_app;

    #[test]
    fn test_popup_restores_base_screen() {
        let mut app = test_app(&FakeTransport::arc());
        app.switch_to(CurrentScreen::Admin);
        app.open_popup(CurrentScreen::Help);
        app.open_popup(CurrentScreen::Exiting);
        assert_eq!(app.base_screen, CurrentScreen::Admin);
        app.close_popup();
        assert_eq!(app.current_screen, CurrentScreen::Admin);
    }

    #[test]
    fn test_view_context_follows_card() {
        let mut app = test_app(&FakeTransport::arc());
        assert!(!app.view_context().toggle_blocked());
        app.url_input = "example.com".to_string();
        app.original_qr();
        assert!(app.view_context().toggle_blocked());
        app.switch_to(CurrentScreen::Admin);
        assert!(!app.view_context().toggle_blocked());
    }
}
