//! Authenticated request payload
//!
//! A [`Payload`] models the body of a private Gemini request: the versioned
//! endpoint path, the caller-supplied parameters, and a nonce captured at
//! construction time. It is immutable once built and produces the canonical
//! serialized forms the signature is computed over.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// An authenticated request payload
///
/// Created per private request and discarded after dispatch. The nonce is
/// generated exactly once at construction and never mutated afterward.
#[derive(Debug, Clone)]
pub struct Payload {
    /// Versioned API path, e.g. `/v1/order/status`
    endpoint: String,
    /// Caller-supplied request parameters
    data: Map<String, Value>,
    /// Replay-prevention counter, wall-clock seconds rounded to nearest
    nonce: u64,
}

impl Payload {
    /// Create a payload for the given endpoint and request data.
    ///
    /// `endpoint` must be the versioned API path (non-empty, e.g.
    /// `/v1/order/new`); `data` may be empty. The nonce is captured from the
    /// current time, rounded to the nearest second.
    ///
    /// Nonces must be increasing per API key. Second granularity matches what
    /// the exchange verifies, but two payloads built within the same second
    /// share a nonce and the second request will be rejected with
    /// `InvalidNonce`; retry policy is the caller's concern.
    pub fn new(endpoint: impl Into<String>, data: Map<String, Value>) -> Self {
        Self::with_nonce(endpoint, data, Self::generate_nonce())
    }

    /// Create a payload with an explicit nonce.
    ///
    /// Useful for deterministic signing tests; the immutability contract is
    /// the same as [`Payload::new`].
    pub fn with_nonce(endpoint: impl Into<String>, data: Map<String, Value>, nonce: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            data,
            nonce,
        }
    }

    fn generate_nonce() -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch");
        now.as_secs_f64().round() as u64
    }

    /// The nonce generated for this payload
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// The versioned endpoint path
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The canonical mapping that gets serialized and signed.
    ///
    /// Merges `data` with the `request` and `nonce` keys. The literal
    /// endpoint and nonce values win if the caller supplied same-named keys;
    /// anything else would let request data forge the signed path.
    pub fn to_canonical_map(&self) -> Map<String, Value> {
        let mut map = self.data.clone();
        map.insert("request".to_string(), Value::from(self.endpoint.clone()));
        map.insert("nonce".to_string(), Value::from(self.nonce));
        map
    }

    /// Deterministic JSON serialization of the canonical mapping.
    ///
    /// serde_json emits compact JSON with sorted keys and does not escape
    /// forward slashes; an escaped `\/` in the endpoint path would produce a
    /// different base64 form and break server-side signature verification.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_canonical_map())
            .expect("JSON object with string keys cannot fail to serialize")
    }

    /// Base64 encoding of the canonical JSON, the `X-GEMINI-PAYLOAD` value
    pub fn encode(&self) -> String {
        BASE64.encode(self.to_json().as_bytes())
    }
}
