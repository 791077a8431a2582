//! Typed backend client
//!
//! One method per endpoint. A backend `status: false` is a `Reply::Rejected`
//! value, never an error; errors are reserved for transport failures and
//! bodies that do not match the schema.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::endpoints::Endpoint;
use super::schema::{
    self, Envelope, Record, RecordsData, SearchData, ShortenedData, StatusResponse,
};
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::errors::{LinkfrontError, Result};

/// Outcome of a call the backend understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Accepted(T),
    /// `status: false`, with the backend's message if it sent one.
    Rejected(Option<String>),
}

impl<T> Reply<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Reply::Accepted(_))
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Reply::Accepted(value) => Some(value),
            Reply::Rejected(_) => None,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    hostname: String,
}

impl ApiClient {
    /// `hostname` is the resolved base URL without a trailing slash.
    pub fn new(transport: Arc<dyn Transport>, hostname: impl Into<String>) -> Self {
        let hostname = hostname.into();
        debug!(
            "ApiClient created for {} via {} transport",
            hostname,
            transport.name()
        );
        Self {
            transport,
            hostname,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    fn request(&self, endpoint: Endpoint) -> ApiRequest {
        ApiRequest::new(
            endpoint.method(),
            format!("{}{}", self.hostname, endpoint.path()),
        )
        .with_credentials(endpoint.needs_credentials())
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: ApiRequest,
    ) -> Result<Envelope<T>> {
        let response = self.transport.send(request).await?;
        schema::parse(endpoint, &response)
    }

    async fn call_status(&self, endpoint: Endpoint, request: ApiRequest) -> Result<Reply<()>> {
        let envelope: StatusResponse = self.call(endpoint, request).await?;
        Ok(if envelope.status {
            Reply::Accepted(())
        } else {
            Reply::Rejected(envelope.message)
        })
    }

    /// `true` when the current session (or bearer token) is an admin.
    pub async fn admin_check(&self) -> Result<bool> {
        let envelope: StatusResponse = self
            .call(Endpoint::AdminCheck, self.request(Endpoint::AdminCheck))
            .await?;
        Ok(envelope.status)
    }

    pub async fn get_all_records(&self) -> Result<Reply<Vec<Record>>> {
        let envelope: Envelope<RecordsData> = self
            .call(Endpoint::GetAllRecords, self.request(Endpoint::GetAllRecords))
            .await?;
        if !envelope.status {
            return Ok(Reply::Rejected(envelope.message));
        }
        let data = envelope.data.ok_or_else(|| {
            LinkfrontError::schema(format!(
                "{}: status true without data",
                Endpoint::GetAllRecords.path()
            ))
        })?;
        Ok(Reply::Accepted(data.into_records()?))
    }

    pub async fn purge_all_records(&self) -> Result<Reply<()>> {
        self.call_status(
            Endpoint::PurgeAllRecords,
            self.request(Endpoint::PurgeAllRecords),
        )
        .await
    }

    /// Delete by original URL or short key, whichever the backend matches.
    pub async fn delete_record(&self, url: &str) -> Result<Reply<()>> {
        let request = self.request(Endpoint::DeleteRecord).form_field("url", url);
        self.call_status(Endpoint::DeleteRecord, request).await
    }

    /// Resolve a short key to its original URL.
    pub async fn search_record(&self, short_key: &str) -> Result<Reply<String>> {
        let request = self
            .request(Endpoint::SearchRecord)
            .query("short_key", short_key);
        let envelope: Envelope<SearchData> = self.call(Endpoint::SearchRecord, request).await?;
        if !envelope.status {
            return Ok(Reply::Rejected(envelope.message));
        }
        envelope
            .data
            .map(|d| Reply::Accepted(d.original_url))
            .ok_or_else(|| {
                LinkfrontError::schema(format!(
                    "{}: status true without data",
                    Endpoint::SearchRecord.path()
                ))
            })
    }

    /// Create a short key for `url`.
    ///
    /// A missing or empty `shortened_key` counts as a rejection even when
    /// the backend reports success.
    pub async fn create_record(&self, url: &str) -> Result<Reply<String>> {
        let request = self.request(Endpoint::CreateRecord).form_field("url", url);
        let envelope: Envelope<ShortenedData> = self.call(Endpoint::CreateRecord, request).await?;
        let key = envelope
            .data
            .and_then(|d| d.shortened_key)
            .filter(|k| !k.is_empty());
        Ok(match key {
            Some(key) if envelope.status => Reply::Accepted(key),
            _ => Reply::Rejected(envelope.message),
        })
    }

    /// Submit credentials. A non-2xx response is a transport error.
    pub async fn login(&self, username: &str, password: &str) -> Result<Reply<()>> {
        let request = self
            .request(Endpoint::Login)
            .form_field("username", username)
            .form_field("password", password);
        let response = self.transport.send(request).await?;
        ensure_success(Endpoint::Login, &response)?;
        let envelope: StatusResponse = schema::parse(Endpoint::Login, &response)?;
        if envelope.status {
            info!("Logged in as {}", username);
            Ok(Reply::Accepted(()))
        } else {
            Ok(Reply::Rejected(envelope.message))
        }
    }

    /// End the session. The body is not inspected.
    pub async fn logout(&self) -> Result<()> {
        let response = self.transport.send(self.request(Endpoint::Logout)).await?;
        debug!("Logout answered with HTTP {}", response.status);
        Ok(())
    }

    pub async fn change_pass(&self, new_pass: &str) -> Result<Reply<()>> {
        let request = self
            .request(Endpoint::ChangePass)
            .form_field("new_pass", new_pass);
        self.call_status(Endpoint::ChangePass, request).await
    }

    /// Backend health message, e.g. "It's alive!".
    pub async fn backend_status(&self) -> Result<Reply<String>> {
        let envelope: StatusResponse = self
            .call(Endpoint::Status, self.request(Endpoint::Status))
            .await?;
        Ok(if envelope.status {
            Reply::Accepted(envelope.message.unwrap_or_default())
        } else {
            Reply::Rejected(envelope.message)
        })
    }
}

fn ensure_success(endpoint: Endpoint, response: &ApiResponse) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(LinkfrontError::transport(format!(
            "{} returned HTTP {}",
            endpoint.path(),
            response.status
        )))
    }
}
