//! Hostname resolution
//!
//! The site publishes `/conf.yaml` with a `hostname: "<base url>"` line. The
//! value is the base for every API call and the prefix of short links.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, info};

use crate::client::{ApiRequest, Transport};
use crate::config::StaticConfig;
use crate::errors::{LinkfrontError, Result};

/// 站点配置文档路径
pub const CONF_DOCUMENT: &str = "/conf.yaml";

static HOSTNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"hostname:\s*"(.*)""#).expect("hostname pattern is valid"));

/// Extract the hostname from the configuration document text.
pub fn parse_hostname(text: &str) -> Result<String> {
    HOSTNAME_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| normalize_hostname(m.as_str()))
        .ok_or_else(|| LinkfrontError::config_missing("Hostname not found in configuration"))
}

/// Trim whitespace and one trailing `/`.
fn normalize_hostname(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
}

pub struct HostnameResolver {
    transport: Arc<dyn Transport>,
    site_url: String,
    hostname_override: Option<String>,
}

impl HostnameResolver {
    pub fn new(
        transport: Arc<dyn Transport>,
        site_url: impl Into<String>,
        hostname_override: Option<String>,
    ) -> Self {
        Self {
            transport,
            site_url: site_url.into(),
            hostname_override,
        }
    }

    pub fn from_config(config: &StaticConfig, transport: Arc<dyn Transport>) -> Self {
        Self::new(
            transport,
            config.site.url.clone(),
            config.site.hostname.clone(),
        )
    }

    fn document_url(&self) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), CONF_DOCUMENT)
    }

    /// Resolve the hostname, from the override or the site's document.
    pub async fn resolve(&self) -> Result<String> {
        if let Some(hostname) = &self.hostname_override {
            debug!("Using configured hostname override");
            return Ok(normalize_hostname(hostname));
        }

        let url = self.document_url();
        let response = self.transport.send(ApiRequest::get(&url)).await?;
        if !response.is_success() {
            debug!("{} answered HTTP {}", url, response.status);
        }
        let hostname = parse_hostname(&response.body)?;
        info!("Resolved hostname {} from {}", hostname, url);
        Ok(hostname)
    }
}
