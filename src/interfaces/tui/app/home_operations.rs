//! Home view: shorten, original QR, copy, theme

use tracing::warn;

use super::state::App;
use crate::services::{Notice, ResultCard, ShortenOutcome, check_input, original_qr};
use crate::utils::clipboard::copy_text;

impl App {
    pub async fn shorten(&mut self) {
        // 先做本地校验，避免无效输入触发网络请求
        if let Err(outcome) = check_input(&self.url_input) {
            self.apply_shorten(outcome);
            return;
        }
        let service = match self.ctx.shorten_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        let outcome = service.shorten(&mut self.url_input).await;
        self.apply_shorten(outcome);
    }

    pub fn original_qr(&mut self) {
        let outcome = original_qr(&mut self.url_input);
        self.apply_shorten(outcome);
    }

    fn apply_shorten(&mut self, outcome: ShortenOutcome) {
        match outcome {
            ShortenOutcome::Ignored => {}
            ShortenOutcome::Rejected(notice) => self.set_notice(notice),
            ShortenOutcome::Rendered(card) => self.show_card(card),
        }
    }

    fn show_card(&mut self, card: ResultCard) {
        self.notice = card.warning().map(Notice::warning);
        self.qr_text = match self.ctx.qr_renderer().render_text(&card.qr_data) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("QR code generation failed: {}", e);
                self.set_error(e.format_simple());
                None
            }
        };
        self.redirect_target = None;
        self.card = Some(card);
    }

    pub fn close_card(&mut self) {
        self.card = None;
        self.qr_text = None;
    }

    /// Best effort; a failure is shown, never retried.
    pub fn copy_result(&mut self) {
        let Some(text) = self
            .card
            .as_ref()
            .map(|card| card.copy_text.clone())
            .or_else(|| self.redirect_target.clone())
        else {
            return;
        };
        match copy_text(&text) {
            Ok(message) => self.set_status(message),
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                self.set_notice(Notice::warning(e.format_simple()));
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        let view = self.view_context();
        if view.toggle_blocked() {
            self.set_notice(Notice::info("Close the QR code to switch theme"));
            return;
        }
        self.theme = self.ctx.theme().toggle_or_keep(view);
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::FakeTransport;
    use crate::interfaces::tui::app::test_app;
    use crate::services::{CardKind, Notice, Theme};

    #[tokio::test]
    async fn test_shorten_with_space_makes_no_request() {
        let fake = FakeTransport::arc();
        let mut app = test_app(&fake);
        app.url_input = "https://a.com/x y".to_string();
        app.shorten().await;
        assert_eq!(
            app.notice,
            Some(Notice::error("URL should not contain spaces."))
        );
        assert!(fake.requests().is_empty());
        assert!(app.card.is_none());
    }

    #[tokio::test]
    async fn test_shorten_renders_card_and_clears_input() {
        let fake = FakeTransport::arc();
        fake.push_ok(r#"{"status": true, "data": {"shortened_key": "xy1"}}"#);
        let mut app = test_app(&fake);
        app.url_input = "a.com".to_string();
        app.shorten().await;

        let card = app.card.as_ref().unwrap();
        assert_eq!(card.kind, CardKind::Shortened);
        assert_eq!(card.short_url.as_deref(), Some("https://s.example.com/xy1"));
        assert_eq!(card.original_url, "https://a.com");
        assert!(app.url_input.is_empty());
        assert!(app.qr_text.is_some());
    }

    #[tokio::test]
    async fn test_missing_key_renders_nothing() {
        let fake = FakeTransport::arc();
        fake.push_ok(r#"{"status": true, "data": {"shortened_key": ""}}"#);
        let mut app = test_app(&fake);
        app.url_input = "a.com".to_string();
        app.shorten().await;
        assert!(app.card.is_none());
        assert_eq!(
            app.notice,
            Some(Notice::error("Failed to shorten the URL. Please try again."))
        );
    }

    #[test]
    fn test_theme_toggle_blocked_while_qr_shown() {
        let mut app = test_app(&FakeTransport::arc());
        app.url_input = "a.com".to_string();
        app.original_qr();
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);

        app.close_card();
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.ctx.theme().load(), Theme::Dark);
    }

    #[test]
    fn test_non_ascii_warning() {
        let mut app = test_app(&FakeTransport::arc());
        app.url_input = "例え.jp".to_string();
        app.original_qr();
        assert_eq!(
            app.notice,
            Some(Notice::warning(
                "WARNING!!! Your URL contains non-ASCII characters. Please be careful!"
            ))
        );
    }
}
