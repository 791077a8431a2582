//! Applying navigation and moving through the record list

use super::state::{App, CurrentScreen};
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;
use crate::services::{
    Navigation, Notice, Outcome, RedirectOutcome, RedirectPlan, StaticPage, messages, plan,
};

impl App {
    /// Show the notice, then navigate.
    pub async fn apply_outcome(&mut self, outcome: Outcome) {
        if let Some(notice) = outcome.notice {
            self.set_notice(notice);
        }
        if let Some(navigation) = outcome.navigation {
            self.navigate(navigation).await;
        }
    }

    pub async fn navigate(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Home => self.show_home(),
            Navigation::Page(StaticPage::Admin) => self.open_admin().await,
            Navigation::Page(StaticPage::Login) => self.show_login(),
            Navigation::Page(StaticPage::Logout) => self.logout().await,
            Navigation::Page(StaticPage::ChangePass) => self.open_change_pass().await,
            Navigation::External(url) => {
                self.show_home();
                self.close_card();
                self.set_notice(Notice::info(format!("Redirect to {}", url)));
                self.redirect_target = Some(url);
            }
            Navigation::Reload => {
                if self.base_screen == CurrentScreen::Admin {
                    self.refresh_records().await;
                }
            }
        }
    }

    /// Enter in the path popup. A lookup is deferred so "Redirecting..."
    /// is drawn before the request.
    pub fn start_redirect(&mut self) {
        let path = self.path_input.trim().to_string();
        self.path_input.clear();
        self.close_popup();
        let plan = plan(&path);
        if let RedirectPlan::Lookup(_) = &plan {
            self.set_notice(Notice::info(messages::REDIRECTING));
        }
        self.pending_redirect = Some(plan);
    }

    pub async fn finish_redirect(&mut self) {
        let Some(plan) = self.pending_redirect.take() else {
            return;
        };
        let resolver = match self.ctx.redirect_resolver().await {
            Ok(resolver) => resolver,
            Err(e) => return self.init_failed(e),
        };
        match resolver.resolve(plan).await {
            RedirectOutcome::Stay => {
                self.clear_notice();
                self.show_home();
            }
            RedirectOutcome::Navigate(Navigation::Home) => {
                self.clear_notice();
                self.show_home();
            }
            RedirectOutcome::Navigate(navigation) => self.navigate(navigation).await,
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.table_state.select(Some(self.selected_index));
    }

    pub fn move_selection_down(&mut self) {
        let max_index = self.record_count().saturating_sub(1);
        if self.selected_index < max_index {
            self.selected_index += 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.table_state.select(Some(0));
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.record_count().saturating_sub(1);
        self.table_state.select(Some(self.selected_index));
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.table_state.select(Some(self.selected_index));
    }

    pub fn page_down(&mut self) {
        let max_index = self.record_count().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.table_state.select(Some(self.selected_index));
    }

    /// Keep the selection inside the list after a refresh.
    pub(super) fn clamp_selection(&mut self) {
        let max_index = self.record_count().saturating_sub(1);
        self.selected_index = self.selected_index.min(max_index);
        self.table_state.select(Some(self.selected_index));
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::FakeTransport;
    use crate::interfaces::tui::app::{CurrentScreen, test_app};
    use crate::services::{Notice, RedirectPlan};

    #[tokio::test]
    async fn test_lookup_shows_placeholder_then_target() {
        let fake = FakeTransport::arc();
        fake.push_ok(r#"{"status": true, "data": {"original_url": "https://a.com"}}"#);
        let mut app = test_app(&fake);
        app.path_input = "/xy1".to_string();

        app.start_redirect();
        assert_eq!(app.notice, Some(Notice::info("Redirecting...")));
        assert_eq!(app.pending_redirect, Some(RedirectPlan::Lookup("xy1".into())));
        assert!(fake.requests().is_empty());

        app.finish_redirect().await;
        assert_eq!(app.redirect_target.as_deref(), Some("https://a.com"));
        assert_eq!(fake.paths(), vec!["/api/v1/search_record"]);
    }

    #[tokio::test]
    async fn test_failed_lookup_goes_home() {
        let fake = FakeTransport::arc();
        fake.push_ok(r#"{"status": false, "data": null}"#);
        let mut app = test_app(&fake);
        app.path_input = "/nope".to_string();
        app.start_redirect();
        app.finish_redirect().await;
        assert_eq!(app.current_screen, CurrentScreen::Home);
        assert!(app.redirect_target.is_none());
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn test_static_path_opens_login() {
        let fake = FakeTransport::arc();
        let mut app = test_app(&fake);
        app.path_input = "/login/".to_string();
        app.start_redirect();
        app.finish_redirect().await;
        assert_eq!(app.current_screen, CurrentScreen::Login);
        assert!(fake.requests().is_empty());
    }
}
