//! Session cookie jar
//!
//! Keeps the backend's cookies between requests the way a browser would for
//! `credentials: 'include'`, and mirrors them into the settings store so a
//! login survives across CLI invocations.

use std::collections::BTreeMap;
use std::sync::Arc;

use cookie::Cookie;
use cookie::time::{Duration, OffsetDateTime};
use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::storage::SettingsStore;

/// 设置存储中保存 cookie 的键
pub const COOKIE_SETTINGS_KEY: &str = "session_cookies";

pub struct CookieJar {
    cookies: Mutex<BTreeMap<String, String>>,
    store: Option<Arc<dyn SettingsStore>>,
}

impl CookieJar {
    /// In-memory jar.
    pub fn new() -> Self {
        Self {
            cookies: Mutex::new(BTreeMap::new()),
            store: None,
        }
    }

    /// Jar restored from and mirrored to `store`.
    pub fn persistent(store: Arc<dyn SettingsStore>) -> Self {
        let cookies = store
            .get(COOKIE_SETTINGS_KEY)
            .and_then(|raw| match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => Some(map),
                Err(e) => {
                    warn!("Discarding unreadable stored cookies: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        Self {
            cookies: Mutex::new(cookies),
            store: Some(store),
        }
    }

    /// Value for the `Cookie` request header.
    pub fn header_value(&self) -> Option<String> {
        let cookies = self.cookies.lock();
        if cookies.is_empty() {
            return None;
        }
        Some(
            cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Apply one `Set-Cookie` header.
    pub fn apply_set_cookie(&self, header: &str) {
        let Some((name, value, expired)) = parse_set_cookie(header) else {
            trace!("Ignoring malformed Set-Cookie header");
            return;
        };

        let mut cookies = self.cookies.lock();
        let changed = if expired || value.is_empty() {
            cookies.remove(&name).is_some()
        } else {
            cookies.insert(name, value.clone()).as_deref() != Some(value.as_str())
        };

        if changed {
            self.persist(&cookies);
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies.lock().get(name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.lock().is_empty()
    }

    pub fn clear(&self) {
        let mut cookies = self.cookies.lock();
        if !cookies.is_empty() {
            cookies.clear();
            self.persist(&cookies);
        }
    }

    fn persist(&self, cookies: &BTreeMap<String, String>) {
        let Some(store) = &self.store else {
            return;
        };
        let result = if cookies.is_empty() {
            store.remove(COOKIE_SETTINGS_KEY)
        } else {
            serde_json::to_string(cookies)
                .map_err(Into::into)
                .and_then(|raw| store.set(COOKIE_SETTINGS_KEY, &raw))
        };
        if let Err(e) = result {
            warn!("Failed to persist session cookies: {}", e);
        }
    }
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a `Set-Cookie` header into `(name, value, expired)`.
///
/// `Max-Age` wins over `Expires`; either one in the past deletes the cookie.
fn parse_set_cookie(header: &str) -> Option<(String, String, bool)> {
    let cookie = Cookie::parse(header).ok()?;
    let expired = match cookie.max_age() {
        Some(age) => age <= Duration::ZERO,
        None => cookie
            .expires_datetime()
            .is_some_and(|at| at <= OffsetDateTime::now_utc()),
    };
    Some((
        cookie.name().to_string(),
        cookie.value_trimmed().to_string(),
        expired,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySettingsStore;

    #[test]
    fn test_parse_set_cookie() {
        let parsed =
            parse_set_cookie("session=abc123; path=/; Max-Age=1800; httponly; samesite=lax");
        assert_eq!(
            parsed,
            Some(("session".to_string(), "abc123".to_string(), false))
        );
    }

    #[test]
    fn test_parse_set_cookie_expired() {
        let parsed = parse_set_cookie(
            "session=null; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; httponly",
        );
        assert_eq!(parsed.map(|p| p.2), Some(true));

        let parsed = parse_set_cookie("session=x; Max-Age=0");
        assert_eq!(parsed.map(|p| p.2), Some(true));
    }

    #[test]
    fn test_parse_set_cookie_any_past_date_expires() {
        let parsed =
            parse_set_cookie("session=gone; Expires=Wed, 21 Oct 2015 07:28:00 GMT; path=/");
        assert_eq!(parsed.map(|p| p.2), Some(true));

        let parsed = parse_set_cookie("session=x; Expires=Fri, 01 Jan 2100 00:00:00 GMT");
        assert_eq!(parsed.map(|p| p.2), Some(false));

        // Max-Age 优先于 Expires
        let parsed =
            parse_set_cookie("session=x; Max-Age=600; Expires=Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(parsed.map(|p| p.2), Some(false));
    }

    #[test]
    fn test_parse_set_cookie_malformed() {
        assert_eq!(parse_set_cookie("garbage"), None);
        assert_eq!(parse_set_cookie("=value"), None);
    }

    #[test]
    fn test_jar_header_value() {
        let jar = CookieJar::new();
        assert_eq!(jar.header_value(), None);
        jar.apply_set_cookie("session=abc; path=/");
        jar.apply_set_cookie("theme=x");
        assert_eq!(jar.header_value().as_deref(), Some("session=abc; theme=x"));
    }

    #[test]
    fn test_jar_removes_expired_cookie() {
        let jar = CookieJar::new();
        jar.apply_set_cookie("session=abc; path=/");
        jar.apply_set_cookie("session=null; expires=Thu, 01 Jan 1970 00:00:00 GMT");
        assert!(jar.is_empty());

        jar.apply_set_cookie("session=abc; path=/");
        jar.apply_set_cookie("session=gone; Expires=Wed, 21 Oct 2015 07:28:00 GMT; path=/");
        assert!(jar.is_empty());
    }

    #[test]
    fn test_expired_cookie_is_removed_from_store() {
        let store = MemorySettingsStore::arc();
        let jar = CookieJar::persistent(store.clone());
        jar.apply_set_cookie("session=abc; path=/");
        assert!(store.get(COOKIE_SETTINGS_KEY).is_some());

        jar.apply_set_cookie("session=gone; Expires=Wed, 21 Oct 2015 07:28:00 GMT; path=/");
        assert_eq!(store.get(COOKIE_SETTINGS_KEY), None);
    }

    #[test]
    fn test_persistent_jar_survives_reload() {
        let store = MemorySettingsStore::arc();
        {
            let jar = CookieJar::persistent(store.clone());
            jar.apply_set_cookie("session=abc; path=/; Max-Age=1800");
        }
        let jar = CookieJar::persistent(store.clone());
        assert_eq!(jar.get("session").as_deref(), Some("abc"));

        jar.clear();
        assert_eq!(store.get(COOKIE_SETTINGS_KEY), None);
    }
}
