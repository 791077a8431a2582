//! ureq based transport
//!
//! ureq is a blocking client; every request runs inside `spawn_blocking`
//! so the async flows above never stall the runtime.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;

use super::cookies::CookieJar;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::config::StaticConfig;
use crate::errors::{LinkfrontError, Result};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Production transport.
///
/// Cookies are handled by `CookieJar` rather than ureq so they can be
/// persisted between runs.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
    cookies: Arc<CookieJar>,
    bearer_token: Option<String>,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(
        timeout: Option<Duration>,
        cookies: Arc<CookieJar>,
        bearer_token: Option<String>,
        user_agent: String,
    ) -> Self {
        // 非 2xx 响应同样需要读取 JSON 内容
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .into();

        Self {
            agent,
            cookies,
            bearer_token: bearer_token.filter(|t| !t.is_empty()),
            user_agent,
        }
    }

    pub fn from_config(config: &StaticConfig, cookies: Arc<CookieJar>) -> Self {
        Self::new(
            config.http.timeout_secs.map(Duration::from_secs),
            cookies,
            config.api.bearer_token.clone(),
            config.http.user_agent.clone(),
        )
    }

    pub fn cookies(&self) -> &Arc<CookieJar> {
        &self.cookies
    }

    fn headers(&self, request: &ApiRequest) -> Vec<(&'static str, String)> {
        let mut headers = vec![("User-Agent", self.user_agent.clone())];
        if request.credentials {
            if let Some(cookie) = self.cookies.header_value() {
                headers.push(("Cookie", cookie));
            }
            if let Some(token) = &self.bearer_token {
                headers.push(("Authorization", format!("Bearer {}", token)));
            }
        }
        headers
    }

    fn send_sync(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = request.full_url()?;
        let headers = self.headers(&request);
        let form = request.encoded_form();
        trace!("{} {}", request.method, url);

        let result = match request.method {
            Method::Get => {
                let mut builder = self.agent.get(&url);
                for (name, value) in &headers {
                    builder = builder.header(*name, value.as_str());
                }
                builder.call()
            }
            Method::Post => {
                let mut builder = self.agent.post(&url);
                for (name, value) in &headers {
                    builder = builder.header(*name, value.as_str());
                }
                match form {
                    Some(body) => builder.header("Content-Type", FORM_CONTENT_TYPE).send(body),
                    None => builder.send_empty(),
                }
            }
            Method::Delete => match form {
                Some(body) => {
                    let mut builder = self.agent.delete(&url).force_send_body();
                    for (name, value) in &headers {
                        builder = builder.header(*name, value.as_str());
                    }
                    builder.header("Content-Type", FORM_CONTENT_TYPE).send(body)
                }
                None => {
                    let mut builder = self.agent.delete(&url);
                    for (name, value) in &headers {
                        builder = builder.header(*name, value.as_str());
                    }
                    builder.call()
                }
            },
        };

        let mut response = result.map_err(|e| {
            warn!("{} {} failed: {}", request.method, url, e);
            LinkfrontError::transport(format!("{} {}: {}", request.method, url, e))
        })?;

        for value in response.headers().get_all("set-cookie") {
            match value.to_str() {
                Ok(raw) => self.cookies.apply_set_cookie(raw),
                Err(_) => trace!("Skipping non-ASCII Set-Cookie header"),
            }
        }

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(|e| {
            LinkfrontError::transport(format!("Failed to read body from {}: {}", url, e))
        })?;
        debug!("{} {} -> {} ({} bytes)", request.method, url, status, body.len());

        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let transport = self.clone();
        tokio::task::spawn_blocking(move || transport.send_sync(request))
            .await
            .map_err(|e| LinkfrontError::transport(format!("HTTP worker failed: {}", e)))?
    }

    fn name(&self) -> &'static str {
        "ureq"
    }
}
