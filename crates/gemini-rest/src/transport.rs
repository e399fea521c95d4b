//! HTTP transport abstraction
//!
//! This module provides a trait-based abstraction over the HTTP request
//! cycle, enabling unit testing of the dispatch logic without real network
//! calls. The dispatcher takes a [`Transport`] as an explicit constructor
//! argument; [`HttpTransport`] is the documented default implementation and
//! [`MockTransport`] records requests and replays canned responses.
//!
//! Timeouts live here, not in the dispatcher: the client performs one
//! build-sign-dispatch cycle per call and owns no retry or cancellation
//! policy.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("request timeout after {0:?}")]
    Timeout(Duration),

    /// Request could not be built or the response body could not be read
    #[error("request failed: {0}")]
    Request(String),
}

/// HTTP method of an abstract request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// An abstract HTTP request handed to the transport
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Create a GET request with no headers and no body
    pub fn get(uri: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            uri: uri.into(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Create a POST request with no headers and no body
    pub fn post(uri: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            uri: uri.into(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Append a header (builder style)
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value by name, case-insensitively
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An abstract HTTP response returned by the transport
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Gemini signals success with status 200 and a JSON body; anything else
    /// carries an error payload
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Trait for HTTP transport abstraction
///
/// This is the only external collaborator the dispatcher requires. Transport
/// implementations must be safe for concurrent use; the dispatcher shares
/// them behind an `Arc` and holds no per-request transport state.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the response, or fail with a
    /// transport-level error.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by `reqwest`
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport with a 30 second timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gemini-rest/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, timeout }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = request.method.as_str(), uri = %request.uri))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.uri),
            Method::Post => self.client.post(&request.uri),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(self.timeout)
            } else {
                TransportError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?
            .to_vec();

        debug!(status, len = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

/// Mock transport for testing
///
/// Records every sent request and replays a queue of canned responses. When
/// the queue is empty, `send` returns an empty `200 {}` so tests that only
/// inspect the outgoing request need no setup.
#[derive(Default)]
pub struct MockTransport {
    inner: parking_lot::Mutex<MockInner>,
}

#[derive(Default)]
struct MockInner {
    requests: Vec<HttpRequest>,
    responses: VecDeque<Result<HttpResponse, TransportError>>,
}

impl MockTransport {
    /// Create a new mock transport with an empty response queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.inner
            .lock()
            .responses
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a transport-level failure
    pub fn push_error(&self, error: TransportError) {
        self.inner.lock().responses.push_back(Err(error));
    }

    /// Get a copy of the requests sent so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().requests.clone()
    }

    /// Drain the recorded requests
    pub fn take_requests(&self) -> Vec<HttpRequest> {
        std::mem::take(&mut self.inner.lock().requests)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut inner = self.inner.lock();
        inner.requests.push(request);
        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "{}")))
    }
}
