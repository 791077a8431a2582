//! Path based redirect resolution
//!
//! `plan` inspects a path without touching the network; `RedirectResolver`
//! carries out a `Lookup` plan. Neither navigates, the caller does.

use strum::{AsRefStr, EnumIter, IntoEnumIterator};
use tracing::{debug, instrument, warn};

use super::outcome::Navigation;
use crate::client::{ApiClient, Reply};

/// Front-end pages that are not short keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StaticPage {
    Admin,
    Login,
    Logout,
    ChangePass,
}

impl StaticPage {
    /// `/admin`, `/login`, ...
    pub fn path(&self) -> String {
        format!("/{}", self.as_ref())
    }

    /// Page URL with the trailing slash, e.g. `<hostname>/login/`.
    pub fn url(&self, hostname: &str) -> String {
        format!("{}{}/", hostname, self.path())
    }

    /// Matches `/admin` and `/admin/`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.strip_suffix('/').unwrap_or(path);
        StaticPage::iter().find(|page| page.path() == path)
    }
}

/// What to do for a path, decided before any request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectPlan {
    /// Home page, render normally.
    Stay,
    Static(StaticPage),
    /// Look the short key up; show "Redirecting..." meanwhile.
    Lookup(String),
}

/// Final result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    Stay,
    Navigate(Navigation),
}

/// Decide what a path means.
pub fn plan(path: &str) -> RedirectPlan {
    if path.is_empty() || path == "/" {
        return RedirectPlan::Stay;
    }
    if let Some(page) = StaticPage::from_path(path) {
        return RedirectPlan::Static(page);
    }
    let short_key = path.strip_prefix('/').unwrap_or(path);
    RedirectPlan::Lookup(short_key.to_string())
}

pub struct RedirectResolver {
    client: ApiClient,
}

impl RedirectResolver {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Resolve a path end to end.
    pub async fn resolve_path(&self, path: &str) -> RedirectOutcome {
        self.resolve(plan(path)).await
    }

    /// Carry out a plan. Issues at most one `search_record` request.
    ///
    /// Any lookup failure, whether a rejection, a transport error or a body
    /// that does not match the schema, sends the user home.
    #[instrument(skip(self))]
    pub async fn resolve(&self, plan: RedirectPlan) -> RedirectOutcome {
        match plan {
            RedirectPlan::Stay => RedirectOutcome::Stay,
            RedirectPlan::Static(page) => RedirectOutcome::Navigate(Navigation::Page(page)),
            RedirectPlan::Lookup(short_key) => match self.client.search_record(&short_key).await {
                Ok(Reply::Accepted(original_url)) => {
                    debug!("Short key {} -> {}", short_key, original_url);
                    RedirectOutcome::Navigate(Navigation::External(original_url))
                }
                Ok(Reply::Rejected(message)) => {
                    debug!(
                        "Short key {} not found: {}",
                        short_key,
                        message.unwrap_or_default()
                    );
                    RedirectOutcome::Navigate(Navigation::Home)
                }
                Err(e) => {
                    warn!("Redirection error for {}: {}", short_key, e);
                    RedirectOutcome::Navigate(Navigation::Home)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::FakeTransport;

    fn resolver(fake: &std::sync::Arc<FakeTransport>) -> RedirectResolver {
        RedirectResolver::new(ApiClient::new(fake.clone(), "https://s.example.com"))
    }

    #[test]
    fn test_plan_home() {
        assert_eq!(plan("/"), RedirectPlan::Stay);
        assert_eq!(plan(""), RedirectPlan::Stay);
    }

    #[test]
    fn test_plan_static_pages() {
        assert_eq!(plan("/admin"), RedirectPlan::Static(StaticPage::Admin));
        assert_eq!(plan("/login"), RedirectPlan::Static(StaticPage::Login));
        assert_eq!(plan("/logout/"), RedirectPlan::Static(StaticPage::Logout));
        assert_eq!(
            plan("/change_pass"),
            RedirectPlan::Static(StaticPage::ChangePass)
        );
    }

    #[test]
    fn test_plan_lookup_strips_leading_slash_only() {
        assert_eq!(plan("/xy1"), RedirectPlan::Lookup("xy1".into()));
        assert_eq!(plan("/admin2"), RedirectPlan::Lookup("admin2".into()));
        assert_eq!(plan("//x"), RedirectPlan::Lookup("/x".into()));
    }

    #[test]
    fn test_static_page_url() {
        assert_eq!(
            StaticPage::Admin.url("https://s.example.com"),
            "https://s.example.com/admin/"
        );
    }

    #[tokio::test]
    async fn test_static_pages_issue_no_request() {
        let fake = FakeTransport::arc();
        let outcome = resolver(&fake).resolve_path("/login").await;
        assert_eq!(
            outcome,
            RedirectOutcome::Navigate(Navigation::Page(StaticPage::Login))
        );
        assert!(fake.requests().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_issues_exactly_one_search() {
        for path in ["/abc", "/Admin", "/a/b", "/%E4%BD%A0"] {
            let fake = FakeTransport::arc();
            fake.push_ok(r#"{"status": true, "data": {"original_url": "https://a.com"}}"#);

            let outcome = resolver(&fake).resolve_path(path).await;
            assert_eq!(
                outcome,
                RedirectOutcome::Navigate(Navigation::External("https://a.com".into()))
            );

            let sent = fake.requests();
            assert_eq!(sent.len(), 1, "path {}", path);
            assert_eq!(sent[0].url, "https://s.example.com/api/v1/search_record");
            assert_eq!(sent[0].query, vec![("short_key".into(), path[1..].to_string())]);
        }
    }

    #[tokio::test]
    async fn test_lookup_failures_go_home() {
        let fake = FakeTransport::arc();
        fake.push_ok(r#"{"status": false, "message": "Record not found"}"#);
        fake.push_err("connection reset");
        fake.push_ok("garbage");

        let resolver = resolver(&fake);
        for _ in 0..3 {
            assert_eq!(
                resolver.resolve_path("/nope").await,
                RedirectOutcome::Navigate(Navigation::Home)
            );
        }
        assert_eq!(fake.requests().len(), 3);
    }
}
