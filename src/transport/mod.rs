//! Fetch-style HTTP transport.
//!
//! [`Transport`] is the seam between the job query client and the network:
//! production code uses [`HttpTransport`], tests substitute a stub.

mod abort;
mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub use abort::{AbortController, AbortSignal};
pub use http::HttpTransport;

/// Error raised by a transport before a response was received
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request aborted")]
    Aborted,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Request options, mirroring the `init` argument of `fetch`
#[derive(Debug, Clone, Default)]
pub struct FetchRequest {
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub signal: Option<AbortSignal>,
}

impl FetchRequest {
    /// POST with a JSON body
    pub fn post_json(body: Vec<u8>) -> Self {
        Self {
            method: "POST".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
            signal: None,
        }
    }

    pub fn with_signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A received response. Any status code counts as a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` to `path` (absolute path plus optional query string).
    ///
    /// Must fail with [`TransportError::Aborted`] when the request's signal
    /// fires before a response arrives.
    async fn fetch(&self, path: &str, request: FetchRequest)
        -> Result<FetchResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_json_sets_content_type() {
        let request = FetchRequest::post_json(b"{}".to_vec());
        assert_eq!(request.method, "POST");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body.as_deref(), Some(&b"{}"[..]));
        assert!(request.signal.is_none());
    }

    #[test]
    fn response_json_reports_parse_errors() {
        let response = FetchResponse::new(200, "<html>");
        assert!(response.json::<serde_json::Value>().is_err());
    }
}
