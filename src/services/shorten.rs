//! Home page flows: shorten a URL or preview the original URL's QR code.

use tracing::{info, instrument, warn};

use super::messages;
use super::outcome::Notice;
use super::qr::{ORIGINAL_QR_SIZE, SHORT_QR_SIZE};
use crate::client::{ApiClient, Reply};
use crate::utils::{contains_non_ascii, normalize_scheme};

/// The URL input field.
///
/// The shorten flow reads it twice, before and after the network call, and
/// clears it once a result is rendered.
pub trait InputSource {
    fn read(&self) -> String;

    fn clear(&mut self);
}

impl InputSource for String {
    fn read(&self) -> String {
        self.clone()
    }

    fn clear(&mut self) {
        String::clear(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Shortened,
    Original,
}

/// What the home view renders after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub kind: CardKind,
    /// Normalised original URL.
    pub original_url: String,
    /// `<hostname>/<key>` for shortened cards.
    pub short_url: Option<String>,
    /// Text the copy action puts on the clipboard.
    pub copy_text: String,
    /// Data encoded in the QR code.
    pub qr_data: String,
    /// QR side in pixels.
    pub qr_size: u32,
    /// The original URL contains non-ASCII characters.
    pub non_ascii_warning: bool,
}

impl ResultCard {
    fn shortened(original_url: String, short_url: String) -> Self {
        Self {
            kind: CardKind::Shortened,
            non_ascii_warning: contains_non_ascii(&original_url),
            original_url,
            copy_text: short_url.clone(),
            qr_data: short_url.clone(),
            short_url: Some(short_url),
            qr_size: SHORT_QR_SIZE,
        }
    }

    fn original(original_url: String) -> Self {
        Self {
            kind: CardKind::Original,
            non_ascii_warning: contains_non_ascii(&original_url),
            copy_text: original_url.clone(),
            qr_data: original_url.clone(),
            original_url,
            short_url: None,
            qr_size: ORIGINAL_QR_SIZE,
        }
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.non_ascii_warning.then_some(messages::NON_ASCII_WARNING)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// Empty input, nothing happens.
    Ignored,
    /// Show the notice, render nothing.
    Rejected(Notice),
    Rendered(ResultCard),
}

/// Trimmed input, or the outcome that ends the flow early.
///
/// Runs before any request is made.
pub fn check_input<I: InputSource + ?Sized>(input: &I) -> Result<String, ShortenOutcome> {
    let url = input.read().trim().to_string();
    if url.is_empty() {
        return Err(ShortenOutcome::Ignored);
    }
    if url.contains(' ') {
        return Err(ShortenOutcome::Rejected(Notice::error(
            messages::URL_HAS_SPACES,
        )));
    }
    Ok(url)
}

pub struct ShortenService {
    client: ApiClient,
}

impl ShortenService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a short link for the input and build its result card.
    #[instrument(skip_all)]
    pub async fn shorten<I: InputSource + ?Sized>(&self, input: &mut I) -> ShortenOutcome {
        let url = match check_input(input) {
            Ok(url) => url,
            Err(outcome) => return outcome,
        };

        let short_url = match self.client.create_record(&url).await {
            Ok(Reply::Accepted(key)) => format!("{}/{}", self.client.hostname(), key),
            Ok(Reply::Rejected(message)) => {
                warn!(
                    "Backend refused to shorten {}: {}",
                    url,
                    message.unwrap_or_default()
                );
                return ShortenOutcome::Rejected(Notice::error(messages::SHORTEN_FAILED));
            }
            Err(e) => {
                warn!("Error creating shortened URL: {}", e);
                return ShortenOutcome::Rejected(Notice::error(messages::SHORTEN_ERROR));
            }
        };

        // 输入框可能在请求期间被修改
        let current = input.read().trim().to_string();
        if current.is_empty() {
            return ShortenOutcome::Ignored;
        }
        let original_url = normalize_scheme(&current);
        input.clear();

        info!("Shortened {} -> {}", original_url, short_url);
        ShortenOutcome::Rendered(ResultCard::shortened(original_url, short_url))
    }
}

/// QR card for the original URL. No network call.
pub fn original_qr<I: InputSource + ?Sized>(input: &mut I) -> ShortenOutcome {
    let url = match check_input(input) {
        Ok(url) => url,
        Err(outcome) => return outcome,
    };
    let original_url = normalize_scheme(&url);
    input.clear();
    ShortenOutcome::Rendered(ResultCard::original(original_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::FakeTransport;
    use std::sync::Arc;

    fn service(fake: &Arc<FakeTransport>) -> ShortenService {
        ShortenService::new(ApiClient::new(fake.clone(), "https://s.example.com"))
    }

    #[tokio::test]
    async fn test_shorten_renders_card() {
        let fake = FakeTransport::arc();
        fake.push_ok(r#"{"status": true, "data": {"shortened_key": "xy1"}}"#);
        let mut input = "  example.com/page ".to_string();

        let outcome = service(&fake).shorten(&mut input).await;
        let ShortenOutcome::Rendered(card) = outcome else {
            panic!("expected a card, got {:?}", outcome);
        };
        assert_eq!(card.kind, CardKind::Shortened);
        assert_eq!(card.original_url, "https://example.com/page");
        assert_eq!(card.short_url.as_deref(), Some("https://s.example.com/xy1"));
        assert_eq!(card.copy_text, "https://s.example.com/xy1");
        assert_eq!(card.qr_data, "https://s.example.com/xy1");
        assert_eq!(card.qr_size, 400);
        assert!(card.warning().is_none());
        assert!(input.is_empty());

        // 提交的是去除空白后的原始输入
        assert_eq!(
            fake.requests()[0].form,
            Some(vec![("url".into(), "example.com/page".into())])
        );
    }

    #[tokio::test]
    async fn test_space_rejected_before_network() {
        let fake = FakeTransport::arc();
        let mut input = "https://a.com/x y".to_string();
        let outcome = service(&fake).shorten(&mut input).await;
        assert_eq!(
            outcome,
            ShortenOutcome::Rejected(Notice::error("URL should not contain spaces."))
        );
        assert!(fake.requests().is_empty());
        assert_eq!(input, "https://a.com/x y");
    }

    #[tokio::test]
    async fn test_empty_input_is_noop() {
        let fake = FakeTransport::arc();
        let mut input = "   ".to_string();
        assert_eq!(service(&fake).shorten(&mut input).await, ShortenOutcome::Ignored);
        assert!(fake.requests().is_empty());
    }

    #[tokio::test]
    async fn test_missing_or_empty_key_is_failure() {
        for body in [
            r#"{"status": true, "data": {"shortened_key": ""}}"#,
            r#"{"status": true, "data": null}"#,
            r#"{"status": false, "message": "Invalid URL", "data": null}"#,
        ] {
            let fake = FakeTransport::arc();
            fake.push_ok(body);
            let mut input = "https://a.com".to_string();
            let outcome = service(&fake).shorten(&mut input).await;
            assert_eq!(
                outcome,
                ShortenOutcome::Rejected(Notice::error(
                    "Failed to shorten the URL. Please try again."
                ))
            );
            // 失败时不清空输入
            assert_eq!(input, "https://a.com");
        }
    }

    #[tokio::test]
    async fn test_transport_error_alerts() {
        let fake = FakeTransport::arc();
        fake.push_err("refused");
        let mut input = "https://a.com".to_string();
        let outcome = service(&fake).shorten(&mut input).await;
        assert_eq!(
            outcome,
            ShortenOutcome::Rejected(Notice::error(
                "An error occurred while creating the shortened URL. Please try again."
            ))
        );
    }

    /// Input that is emptied while the request is in flight.
    struct ClearedDuringRequest {
        reads: std::cell::Cell<usize>,
    }

    impl InputSource for ClearedDuringRequest {
        fn read(&self) -> String {
            let n = self.reads.get();
            self.reads.set(n + 1);
            if n == 0 { "a.com".into() } else { String::new() }
        }

        fn clear(&mut self) {}
    }

    #[tokio::test]
    async fn test_input_emptied_during_request_renders_nothing() {
        let fake = FakeTransport::arc();
        fake.push_ok(r#"{"status": true, "data": {"shortened_key": "k"}}"#);
        let mut input = ClearedDuringRequest {
            reads: std::cell::Cell::new(0),
        };
        assert_eq!(service(&fake).shorten(&mut input).await, ShortenOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_non_ascii_warns_without_blocking() {
        let fake = FakeTransport::arc();
        fake.push_ok(r#"{"status": true, "data": {"shortened_key": "k"}}"#);
        let mut input = "https://例子.com".to_string();
        let ShortenOutcome::Rendered(card) = service(&fake).shorten(&mut input).await else {
            panic!("expected a card");
        };
        assert_eq!(
            card.warning(),
            Some("WARNING!!! Your URL contains non-ASCII characters. Please be careful!")
        );
    }

    #[test]
    fn test_original_qr() {
        let mut input = "http://example.com".to_string();
        let ShortenOutcome::Rendered(card) = original_qr(&mut input) else {
            panic!("expected a card");
        };
        assert_eq!(card.kind, CardKind::Original);
        assert_eq!(card.qr_data, "http://example.com");
        assert_eq!(card.copy_text, "http://example.com");
        assert_eq!(card.qr_size, 2400);
        assert!(card.short_url.is_none());
        assert!(input.is_empty());

        let mut spaced = "a b".to_string();
        assert!(matches!(
            original_qr(&mut spaced),
            ShortenOutcome::Rejected(_)
        ));
    }
}
