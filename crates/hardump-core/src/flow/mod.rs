//! Completed request/response flows as handed over by the host proxy.
//!
//! The host parses HTTP; these types are the normalized boundary the
//! recorder consumes. Headers, query pairs and both cookie shapes are
//! resolved here so the formatters never inspect host-specific structures.
//! All types deserialize from the JSON-lines capture format used by the
//! replay host.

mod cookies;
mod headers;

pub use cookies::{CookieAttrs, SetCookie};
pub use headers::Headers;

use serde::{Deserialize, Deserializer, Serialize};

/// One completed exchange: request fully sent and response fully received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flow {
    pub request: FlowRequest,
    pub response: FlowResponse,
}

/// Client request side of a flow. Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowRequest {
    pub timestamp_start: f64,
    #[serde(default)]
    pub timestamp_end: Option<f64>,
    pub method: String,
    pub url: String,
    pub http_version: String,
    #[serde(default)]
    pub headers: Headers,
    /// Query parameters in URL order.
    #[serde(default)]
    pub query: Vec<(String, String)>,
    /// `(name, value)` pairs from the Cookie header, in order.
    #[serde(default)]
    pub cookies: Vec<(String, String)>,
    #[serde(default, deserialize_with = "deserialize_body")]
    pub content: Vec<u8>,
}

/// Server response side of a flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowResponse {
    #[serde(default)]
    pub timestamp_start: Option<f64>,
    #[serde(default)]
    pub timestamp_end: Option<f64>,
    pub status_code: u16,
    #[serde(default)]
    pub reason: String,
    pub http_version: String,
    #[serde(default)]
    pub headers: Headers,
    /// `(name, cookie)` pairs from Set-Cookie headers, in order.
    #[serde(default)]
    pub cookies: Vec<(String, SetCookie)>,
    #[serde(default, deserialize_with = "deserialize_body")]
    pub content: Vec<u8>,
}

impl FlowRequest {
    pub fn new(
        timestamp_start: f64,
        method: impl Into<String>,
        url: impl Into<String>,
        http_version: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_start,
            timestamp_end: None,
            method: method.into(),
            url: url.into(),
            http_version: http_version.into(),
            headers: Headers::new(),
            query: Vec::new(),
            cookies: Vec::new(),
            content: Vec::new(),
        }
    }
}

impl FlowResponse {
    pub fn new(status_code: u16, reason: impl Into<String>, http_version: impl Into<String>) -> Self {
        Self {
            timestamp_start: None,
            timestamp_end: None,
            status_code,
            reason: reason.into(),
            http_version: http_version.into(),
            headers: Headers::new(),
            cookies: Vec::new(),
            content: Vec::new(),
        }
    }
}

/// Bodies arrive either as UTF-8 text or as a raw byte array.
fn deserialize_body<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Body {
        Text(String),
        Bytes(Vec<u8>),
    }

    Ok(match Body::deserialize(deserializer)? {
        Body::Text(s) => s.into_bytes(),
        Body::Bytes(b) => b,
    })
}
