//! Request dispatcher for the Gemini REST API
//!
//! [`GeminiClient`] orchestrates the request pipeline: it builds a bare URI
//! (public) or a signed [`Payload`] (private), attaches the required headers,
//! hands the request to the transport, and interprets the response. All
//! failures surface as [`GeminiError`]; nothing is retried internally.

use gemini_auth::{Credentials, Payload};
use gemini_types::{GeminiError, GeminiResult};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::transport::{HttpRequest, HttpTransport, Transport};

/// Production API origin
pub const PRODUCTION_URL: &str = "https://api.gemini.com";

/// Sandbox API origin, for testing with exchange-issued sandbox keys
pub const SANDBOX_URL: &str = "https://api.sandbox.gemini.com";

/// API version prefix shared by every endpoint path
const API_VERSION: &str = "v1";

/// Client for the Gemini REST API
///
/// Credentials are immutable after construction. The client holds no mutable
/// state of its own: each call builds, signs, and dispatches a fresh request,
/// so concurrent calls from multiple tasks are safe as long as the transport
/// is.
///
/// # Example
///
/// ```no_run
/// use gemini_auth::Credentials;
/// use gemini_rest::GeminiClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GeminiClient::new(Credentials::from_env()?);
///
///     let symbols = client.symbols().await?;
///     println!("{symbols}");
///
///     Ok(())
/// }
/// ```
pub struct GeminiClient {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl GeminiClient {
    /// Create a client against the production API with the default
    /// [`HttpTransport`].
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(credentials, Arc::new(HttpTransport::new()))
    }

    /// Create a client with an injected transport.
    ///
    /// This is the seam tests use to swap in a
    /// [`MockTransport`](crate::transport::MockTransport).
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
            base_url: PRODUCTION_URL.to_string(),
        }
    }

    /// Override the API origin, e.g. with [`SANDBOX_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The API origin this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send an unauthenticated GET request to a public endpoint.
    ///
    /// `path` is the endpoint below the version prefix (surrounding slashes
    /// are trimmed); `query` is appended URL-encoded when non-empty.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn public_request(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> GeminiResult<Value> {
        let mut uri = self.versioned_uri(path);
        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(query)
                .expect("string pairs cannot fail to URL-encode");
            uri = format!("{uri}?{encoded}");
        }

        debug!(%uri, "sending public request");
        self.send(HttpRequest::get(uri)).await
    }

    /// Send an authenticated POST request to a private endpoint.
    ///
    /// A [`Payload`] is built from the versioned endpoint and `data`, then
    /// base64-encoded and signed. Per the exchange's convention the HTTP body
    /// is empty; the payload and its signature travel in headers.
    #[instrument(skip(self, data), fields(path = %path))]
    pub async fn private_request(
        &self,
        path: &str,
        data: Map<String, Value>,
    ) -> GeminiResult<Value> {
        let trimmed = path.trim_matches('/');
        let payload = Payload::new(format!("/{API_VERSION}/{trimmed}"), data);
        let encoded = payload.encode();
        let signature = self.credentials.sign(&payload);

        let request = HttpRequest::post(self.versioned_uri(trimmed))
            .header("Content-Type", "text/plain")
            .header("Content-Length", "0")
            .header("X-GEMINI-APIKEY", self.credentials.api_key())
            .header("X-GEMINI-PAYLOAD", encoded)
            .header("X-GEMINI-SIGNATURE", signature)
            .header("Cache-Control", "no-cache");

        debug!(nonce = payload.nonce(), "sending private request");
        self.send(request).await
    }

    fn versioned_uri(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_VERSION, path.trim_matches('/'))
    }

    /// Dispatch a built request and interpret the response.
    async fn send(&self, request: HttpRequest) -> GeminiResult<Value> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(GeminiError::transport)?;

        if response.is_success() {
            Ok(decode_success_body(&response.body))
        } else {
            warn!(status = response.status, "Gemini API returned an error");
            Err(GeminiError::from_error_body(&response.body))
        }
    }
}

/// Decode a 200 body as JSON.
///
/// Anything that is not an object or array (malformed or empty body) degrades
/// to an empty object; callers should not crash on an unexpectedly empty
/// success body.
fn decode_success_body(body: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => value,
        _ => Value::Object(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_success_body_passes_objects_and_arrays() {
        assert_eq!(
            decode_success_body(br#"{"order_id":"22333"}"#),
            json!({"order_id": "22333"})
        );
        assert_eq!(
            decode_success_body(br#"["btcusd","ethbtc"]"#),
            json!(["btcusd", "ethbtc"])
        );
    }

    #[test]
    fn test_decode_success_body_degrades_to_empty_object() {
        assert_eq!(decode_success_body(b""), json!({}));
        assert_eq!(decode_success_body(b"not json"), json!({}));
        // A bare scalar is not a result mapping either
        assert_eq!(decode_success_body(b"42"), json!({}));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GeminiClient::new(Credentials::new("k", "s"))
            .with_base_url("https://api.sandbox.gemini.com/");
        assert_eq!(client.base_url(), "https://api.sandbox.gemini.com");
        assert_eq!(
            client.versioned_uri("/order/new/"),
            "https://api.sandbox.gemini.com/v1/order/new"
        );
    }
}
