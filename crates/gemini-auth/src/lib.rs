//! Payload construction and request signing for the Gemini API
//!
//! Gemini authenticates private REST requests by sending the request body in
//! headers: the payload (endpoint, caller data, and a nonce) is serialized to
//! JSON, base64-encoded into `X-GEMINI-PAYLOAD`, and an HMAC-SHA384 digest of
//! that base64 string goes into `X-GEMINI-SIGNATURE`.
//!
//! # Example
//!
//! ```
//! use gemini_auth::{signature, Payload};
//! use serde_json::{json, Map};
//!
//! let mut data = Map::new();
//! data.insert("order_id".into(), json!(18834));
//!
//! let payload = Payload::new("/v1/order/status", data);
//! let digest = signature::generate(&payload, "my-api-secret");
//! assert_eq!(digest.len(), 96); // SHA-384, lowercase hex
//! ```

mod credentials;
mod error;
mod payload;
pub mod signature;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use payload::Payload;
