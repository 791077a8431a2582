//! HTTP transport abstraction
//!
//! `ApiClient` builds `ApiRequest` values and hands them to a `Transport`.
//! The production transport is `UreqTransport`; tests plug in their own.

use async_trait::async_trait;
use strum::{AsRefStr, Display};

use crate::errors::Result;

/// HTTP methods used by the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A fully described outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    /// `application/x-www-form-urlencoded` body, if any.
    pub form: Option<Vec<(String, String)>>,
    /// Send the session cookie / bearer token.
    pub credentials: bool,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            query: Vec::new(),
            form: None,
            credentials: false,
        }
    }

    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            ..Self::get(url)
        }
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn form_field(mut self, key: &str, value: &str) -> Self {
        self.form
            .get_or_insert_with(Vec::new)
            .push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_credentials(mut self, credentials: bool) -> Self {
        self.credentials = credentials;
        self
    }

    /// URL including the encoded query string.
    pub fn full_url(&self) -> Result<String> {
        if self.query.is_empty() {
            return Ok(self.url.clone());
        }
        let mut url = url::Url::parse(&self.url)?;
        url.query_pairs_mut()
            .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        Ok(url.into())
    }

    /// Encoded form body, if the request carries one.
    pub fn encoded_form(&self) -> Option<String> {
        self.form.as_ref().map(|fields| {
            url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .finish()
        })
    }
}

/// Raw response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the backend.
///
/// An `Err` means no HTTP response was obtained (connection refused, DNS,
/// TLS, timeout). Any HTTP status, including 4xx/5xx, is an `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;

    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_encodes_query() {
        let req = ApiRequest::get("http://h/api/v1/search_record").query("short_key", "a b&c");
        assert_eq!(
            req.full_url().unwrap(),
            "http://h/api/v1/search_record?short_key=a+b%26c"
        );
    }

    #[test]
    fn test_full_url_without_query_is_untouched() {
        let req = ApiRequest::get("http://h/conf.yaml");
        assert_eq!(req.full_url().unwrap(), "http://h/conf.yaml");
    }

    #[test]
    fn test_encoded_form() {
        let req = ApiRequest::new(Method::Post, "http://h/api/v1/login")
            .form_field("username", "admin")
            .form_field("password", "p@ss word");
        assert_eq!(
            req.encoded_form().as_deref(),
            Some("username=admin&password=p%40ss+word")
        );
        assert_eq!(ApiRequest::get("http://h").encoded_form(), None);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert_eq!(Method::Get.as_ref(), "GET");
    }

    #[test]
    fn test_is_success() {
        assert!(ApiResponse::ok("{}").is_success());
        assert!(!ApiResponse::new(401, "").is_success());
    }
}
