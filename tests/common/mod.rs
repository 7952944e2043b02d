//! Shared test utilities: a local HTTP server standing in for the Lookout API

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Response, Server};

/// A request as seen by the fake server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Serves canned responses on 127.0.0.1 until idle for a few seconds
pub struct FakeLookout {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeLookout {
    pub fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO)
    }

    /// Like `start`, but waits `delay` before answering each request
    pub fn start_with_delay(status: u16, body: &str, delay: Duration) -> Self {
        let server = Server::http("127.0.0.1:0").expect("Failed to bind fake server");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("Fake server is not listening on TCP");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let body = body.to_string();
        thread::spawn(move || {
            while let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(5)) {
                let mut request_body = String::new();
                let _ = request.as_reader().read_to_string(&mut request_body);

                let header = |name: &str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
                        .map(|h| h.value.as_str().to_string())
                };
                let entry = RecordedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    content_type: header("Content-Type"),
                    authorization: header("Authorization"),
                    body: request_body,
                };
                recorded.lock().unwrap().push(entry);

                thread::sleep(delay);
                let content_type = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("valid header");
                let response = Response::from_string(body.clone())
                    .with_status_code(status)
                    .with_header(content_type);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

/// A localhost URL nothing is listening on
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}
