//! URL 处理工具
//!
//! Small string helpers used by the home and admin flows.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("scheme pattern is valid"));

/// Prefix `https://` unless the URL already starts with `http://` or
/// `https://` (case-sensitive, like the browser check it mirrors).
pub fn normalize_scheme(url: &str) -> String {
    if SCHEME_PREFIX.is_match(url) {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// 是否包含非 ASCII 字符
pub fn contains_non_ascii(url: &str) -> bool {
    !url.is_ascii()
}

/// Strip the configured hostname from the start of `url`.
///
/// The hostname's own scheme is dropped first, then matched literally and
/// case-insensitively, optionally preceded by `http://` or `https://`.
/// Anything else is returned unchanged.
///
/// ```
/// use linkfront::utils::url::remove_base_url_if_exist;
/// let host = "https://s.example.com";
/// assert_eq!(remove_base_url_if_exist(host, "HTTP://S.Example.com/abc"), "/abc");
/// assert_eq!(remove_base_url_if_exist(host, "abc"), "abc");
/// ```
pub fn remove_base_url_if_exist(hostname: &str, url: &str) -> String {
    let host = SCHEME_PREFIX.replace(hostname, "");
    let pattern = format!(r"(?i)^(?:https?://)?{}", regex::escape(&host));
    match Regex::new(&pattern) {
        Ok(re) => re.replace(url, "").into_owned(),
        Err(e) => {
            warn!("Cannot build hostname pattern for {}: {}", hostname, e);
            url.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "https://s.example.com";

    #[test]
    fn test_remove_base_url_exact_prefix() {
        assert_eq!(remove_base_url_if_exist(HOST, "https://s.example.com/abc"), "/abc");
    }

    #[test]
    fn test_remove_base_url_scheme_variants() {
        assert_eq!(remove_base_url_if_exist(HOST, "http://s.example.com/abc"), "/abc");
        assert_eq!(remove_base_url_if_exist(HOST, "s.example.com/abc"), "/abc");
        assert_eq!(
            remove_base_url_if_exist("http://s.example.com", "https://s.example.com/abc"),
            "/abc"
        );
    }

    #[test]
    fn test_remove_base_url_case_insensitive() {
        assert_eq!(remove_base_url_if_exist(HOST, "HTTPS://S.EXAMPLE.COM/abc"), "/abc");
    }

    #[test]
    fn test_remove_base_url_unrelated_passthrough() {
        assert_eq!(remove_base_url_if_exist(HOST, "abc"), "abc");
        assert_eq!(
            remove_base_url_if_exist(HOST, "https://other.com/s.example.com"),
            "https://other.com/s.example.com"
        );
        // 点号按字面匹配
        assert_eq!(
            remove_base_url_if_exist(HOST, "https://sXexample.com/abc"),
            "https://sXexample.com/abc"
        );
    }

    #[test]
    fn test_remove_base_url_with_port() {
        assert_eq!(
            remove_base_url_if_exist("http://localhost:8000", "localhost:8000/k1"),
            "/k1"
        );
    }

    #[test]
    fn test_normalize_scheme() {
        assert_eq!(normalize_scheme("example.com"), "https://example.com");
        assert_eq!(normalize_scheme("http://example.com"), "http://example.com");
        assert_eq!(normalize_scheme("https://example.com"), "https://example.com");
        // 大写协议不被识别
        assert_eq!(normalize_scheme("HTTP://example.com"), "https://HTTP://example.com");
    }

    #[test]
    fn test_contains_non_ascii() {
        assert!(contains_non_ascii("https://例子.com"));
        assert!(!contains_non_ascii("https://example.com"));
    }
}
