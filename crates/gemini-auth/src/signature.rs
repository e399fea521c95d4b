//! Request signature generation
//!
//! Gemini verifies private requests with an HMAC-SHA384 digest computed over
//! the base64-encoded payload, keyed by the API secret's raw bytes. The
//! digest travels as lowercase hex in the `X-GEMINI-SIGNATURE` header.
//!
//! The digest is over the *base64* form, not the raw JSON; signing the JSON
//! directly produces a digest the server will reject.

use hmac::{Hmac, Mac};
use sha2::Sha384;

use crate::payload::Payload;

type HmacSha384 = Hmac<Sha384>;

/// Generate the signature for a payload.
///
/// Pure and deterministic: the same payload and secret always produce the
/// same digest.
pub fn generate(payload: &Payload, secret: &str) -> String {
    let mut mac = HmacSha384::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.encode().as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn fixture_payload() -> Payload {
        let mut data = Map::new();
        data.insert("order_id".to_string(), json!(18834));
        Payload::with_nonce("/v1/order/status", data, 123456)
    }

    #[test]
    fn test_known_vector() {
        // HMAC-SHA384("1234abcd", base64(canonical JSON)), computed
        // independently
        let digest = generate(&fixture_payload(), "1234abcd");
        assert_eq!(
            digest,
            "0fd48e070b0c1ade60330dd1ed0a751239c048e8cbf6c3ebc1af5d73117a691e5f73e9c4fbcef2355d5303c8a6721fb0"
        );
    }

    #[test]
    fn test_empty_data_vector() {
        let payload = Payload::with_nonce("/v1/heartbeat", Map::new(), 1_500_000_000);
        assert_eq!(
            generate(&payload, "topsecret"),
            "d0e9d627c79a3c746727846b656627bea8aa4ef2ac448dff25f5aecd25fd20b834b87dc0557258e907d6b7c9cf1d7914"
        );
    }

    #[test]
    fn test_deterministic() {
        let payload = fixture_payload();
        assert_eq!(generate(&payload, "1234abcd"), generate(&payload, "1234abcd"));
    }

    #[test]
    fn test_secret_changes_digest() {
        let payload = fixture_payload();
        assert_ne!(generate(&payload, "1234abcd"), generate(&payload, "1234abce"));
    }

    #[test]
    fn test_payload_changes_digest() {
        let a = fixture_payload();
        let b = Payload::with_nonce("/v1/order/status", Map::new(), 123456);
        assert_ne!(generate(&a, "1234abcd"), generate(&b, "1234abcd"));
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = generate(&fixture_payload(), "1234abcd");
        assert_eq!(digest.len(), 96);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
