//! API credentials
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via the Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! The secret is used only as the HMAC key; it is never transmitted.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthError, AuthResult};
use crate::payload::Payload;
use crate::signature;

/// API credentials for authenticated requests
///
/// Immutable for the lifetime of the client instance.
pub struct Credentials {
    /// API key, sent verbatim in the `X-GEMINI-APIKEY` header
    api_key: String,
    /// API secret (zeroized on drop), HMAC key only
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Create credentials from environment variables.
    ///
    /// Reads `GEMINI_API_KEY` and `GEMINI_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("GEMINI_API_KEY".to_string()))?;
        let api_secret = std::env::var("GEMINI_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("GEMINI_API_SECRET".to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a payload with this secret.
    ///
    /// Returns the lowercase hex HMAC-SHA384 digest for the
    /// `X-GEMINI-SIGNATURE` header.
    pub fn sign(&self, payload: &Payload) -> String {
        signature::generate(payload, self.api_secret.expose_secret())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretString with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key_prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{key_prefix}..."))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("mykey", "1234abcd");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("1234abcd"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_debug_handles_multibyte_keys() {
        // Truncation must respect char boundaries, not byte offsets
        let creds = Credentials::new("ключ-доступа", "secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("ключ-дос..."));

        let short = Credentials::new("héllo", "secret");
        assert!(format!("{:?}", short).contains("héllo..."));
    }

    #[test]
    fn test_sign_matches_signature_generate() {
        let creds = Credentials::new("mykey", "1234abcd");
        let mut data = Map::new();
        data.insert("order_id".to_string(), json!(18834));
        let payload = Payload::with_nonce("/v1/order/status", data, 123456);

        assert_eq!(creds.sign(&payload), signature::generate(&payload, "1234abcd"));
    }

    #[test]
    fn test_clone_preserves_signing_behavior() {
        let creds = Credentials::new("mykey", "1234abcd");
        let cloned = creds.clone();
        let payload = Payload::with_nonce("/v1/heartbeat", Map::new(), 42);

        assert_eq!(creds.sign(&payload), cloned.sign(&payload));
        assert_eq!(cloned.api_key(), "mykey");
    }
}
