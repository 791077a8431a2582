//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::errors::{LinkfrontError, Result};

/// Replays queued responses in order and records every request.
///
/// Running out of scripted responses yields a transport error, so an
/// unexpected extra request shows up as a failing flow.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, response: ApiResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    pub fn push_ok(&self, body: &str) {
        self.push(ApiResponse::ok(body));
    }

    pub fn push_err(&self, message: &str) {
        self.responses
            .lock()
            .push_back(Err(LinkfrontError::transport(message)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// Paths of the requests sent so far, hostname stripped.
    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|r| match url::Url::parse(&r.url) {
                Ok(url) => url.path().to_string(),
                Err(_) => r.url.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(LinkfrontError::transport("no scripted response left")))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
