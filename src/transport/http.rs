//! [`Transport`] over a blocking `ureq` agent.

use async_trait::async_trait;
use std::io::Read;
use std::time::{Duration, Instant};

use super::{FetchRequest, FetchResponse, Transport, TransportError};
use crate::config::ServerSettings;

const AUTH_HEADER: &str = "Authorization";

/// HTTP transport resolving request paths against a base URL
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    token: Option<String>,
    agent: ureq::Agent,
}

impl HttpTransport {
    /// Create a transport with the default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        let defaults = ServerSettings::default();
        Self::with_timeouts(
            base_url,
            Duration::from_millis(defaults.connect_timeout_ms),
            Duration::from_millis(defaults.read_timeout_ms),
        )
    }

    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(connect_timeout)
            .timeout_read(read_timeout)
            .build();

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            agent,
        }
    }

    /// Create a transport from the `[server]` config section
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self::with_timeouts(
            settings.url.clone(),
            Duration::from_millis(settings.connect_timeout_ms),
            Duration::from_millis(settings.read_timeout_ms),
        )
        .with_token(settings.token.clone())
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn with_auth(mut req: ureq::Request, token: Option<&str>) -> ureq::Request {
    if let Some(token) = token {
        req = req.set(AUTH_HEADER, &format!("Bearer {token}"));
    }
    req
}

fn send_blocking(
    agent: &ureq::Agent,
    url: &str,
    token: Option<&str>,
    request: &FetchRequest,
) -> Result<FetchResponse, TransportError> {
    let mut req = agent.request(&request.method, url);
    for (name, value) in &request.headers {
        req = req.set(name, value);
    }
    req = with_auth(req, token);

    let result = match &request.body {
        Some(body) => req.send_bytes(body),
        None => req.call(),
    };

    // Like fetch, an error status is still a response
    let response = match result {
        Ok(resp) => resp,
        Err(ureq::Error::Status(_, resp)) => resp,
        Err(e) => return Err(TransportError::Network(e.to_string())),
    };

    let status = response.status();
    let mut body = Vec::new();
    response.into_reader().read_to_end(&mut body)?;
    Ok(FetchResponse { status, body })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(
        &self,
        path: &str,
        request: FetchRequest,
    ) -> Result<FetchResponse, TransportError> {
        let signal = request.signal.clone();
        if signal.as_ref().is_some_and(|s| s.is_aborted()) {
            return Err(TransportError::Aborted);
        }

        let url = self.url_for(path);
        tracing::debug!(
            "{} {} ({} bytes)",
            request.method,
            url,
            request.body.as_ref().map_or(0, Vec::len)
        );

        let agent = self.agent.clone();
        let token = self.token.clone();
        let started = Instant::now();
        let call = tokio::task::spawn_blocking(move || {
            send_blocking(&agent, &url, token.as_deref(), &request)
        });

        // An aborted call leaves the blocking request to finish on its own
        let result = match signal {
            Some(signal) => {
                tokio::select! {
                    biased;
                    _ = signal.aborted() => Err(TransportError::Aborted),
                    joined = call => joined?,
                }
            }
            None => call.await?,
        };

        match &result {
            Ok(response) => tracing::debug!(
                "Response: status={} bytes={} duration_ms={}",
                response.status,
                response.body.len(),
                started.elapsed().as_millis()
            ),
            Err(TransportError::Aborted) => {
                tracing::debug!("Request aborted after {} ms", started.elapsed().as_millis())
            }
            Err(e) => tracing::warn!("Request to {} failed: {}", path, e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::AbortController;

    #[test]
    fn joins_base_url_and_path() {
        let transport = HttpTransport::new("http://localhost:10000/");
        assert_eq!(transport.base_url(), "http://localhost:10000");
        assert_eq!(
            transport.url_for("/api/v1/jobs?backend=jsonb"),
            "http://localhost:10000/api/v1/jobs?backend=jsonb"
        );
        assert_eq!(
            transport.url_for("api/v1/jobs"),
            "http://localhost:10000/api/v1/jobs"
        );
    }

    #[test]
    fn blank_token_is_ignored() {
        let transport = HttpTransport::new("http://localhost").with_token(Some("  ".into()));
        assert!(transport.token.is_none());

        let transport = HttpTransport::new("http://localhost").with_token(Some("abc".into()));
        assert_eq!(transport.token.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn pre_aborted_signal_fails_without_connecting() {
        let controller = AbortController::new();
        controller.abort();

        // Port 9 (discard) is never contacted because the signal is checked first
        let transport = HttpTransport::new("http://127.0.0.1:9");
        let request = FetchRequest::post_json(b"{}".to_vec()).with_signal(Some(controller.signal()));

        let err = transport.fetch("/api/v1/jobs", request).await.unwrap_err();
        assert!(matches!(err, TransportError::Aborted));
    }
}
