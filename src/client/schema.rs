//! Response schema per endpoint
//!
//! Every backend reply is `{status, message, data}`. Bodies are parsed into
//! these types and anything that does not fit is a `Schema` error naming the
//! endpoint, instead of a silently missing field.

use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::{Map, Value};

use super::endpoints::Endpoint;
use super::transport::ApiResponse;
use crate::errors::{LinkfrontError, Result};

/// Common `{status, message, data}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<D> {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<D>,
}

/// Envelope whose `data` is not inspected.
pub type StatusResponse = Envelope<IgnoredAny>;

/// `create_record` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenedData {
    #[serde(default)]
    pub shortened_key: Option<String>,
}

/// `search_record` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    pub original_url: String,
}

/// `get_all_records` payload: `{records: {original_url: short_key}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsData {
    pub records: Map<String, Value>,
}

/// A shortened-URL record as the admin view shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub original_url: String,
    pub short_key: String,
}

impl RecordsData {
    /// Flatten into records, keeping the server's order.
    pub fn into_records(self) -> Result<Vec<Record>> {
        self.records
            .into_iter()
            .map(|(original_url, value)| match value {
                Value::String(short_key) => Ok(Record {
                    original_url,
                    short_key,
                }),
                other => Err(LinkfrontError::schema(format!(
                    "{}: short key for '{}' is not a string: {}",
                    Endpoint::GetAllRecords.path(),
                    original_url,
                    other
                ))),
            })
            .collect()
    }
}

/// Parse a response body for `endpoint`.
pub fn parse<T: DeserializeOwned>(endpoint: Endpoint, response: &ApiResponse) -> Result<T> {
    serde_json::from_str(&response.body).map_err(|e| {
        LinkfrontError::schema(format!(
            "{} (HTTP {}): {}",
            endpoint.path(),
            response.status,
            e
        ))
    })
}
