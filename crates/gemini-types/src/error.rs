//! Error types for the Gemini client

use serde::Deserialize;
use thiserror::Error;

use crate::reason::ApiReason;

/// Decoded body of a non-200 Gemini response
///
/// Every field defaults so that partial or malformed error bodies still
/// decode; classification then falls through to the unknown-error kind.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Always the literal `"error"` on failure responses
    #[serde(default)]
    pub result: String,
    /// The exchange's reason code, e.g. `"AuctionNotOpen"`
    #[serde(default)]
    pub reason: String,
    /// Human-readable description of the failure
    #[serde(default)]
    pub message: String,
}

/// Main error type for Gemini client operations
#[derive(Error, Debug)]
pub enum GeminiError {
    /// A transport-level failure (connection refused, timeout, TLS, ...).
    ///
    /// Callers see one stable error surface regardless of the transport
    /// implementation; the underlying cause is preserved as `source` context
    /// only.
    #[error("error communicating with the Gemini API")]
    Transport {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The API rejected the request with a recognized reason code.
    ///
    /// Displays the server's message verbatim.
    #[error("{message}")]
    Api {
        /// The parsed reason code
        reason: ApiReason,
        /// The server's message, verbatim
        message: String,
    },

    /// The API rejected the request with a reason code not in the table,
    /// or with a malformed error body.
    #[error("[{reason}] {message}")]
    UnknownApi { reason: String, message: String },
}

impl GeminiError {
    /// Wrap a transport-level failure.
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport {
            source: Box::new(source),
        }
    }

    /// Classify a decoded error body into a typed error.
    pub fn from_error_response(response: ErrorResponse) -> Self {
        match ApiReason::from_code(&response.reason) {
            Some(reason) => Self::Api {
                reason,
                message: response.message,
            },
            None => Self::UnknownApi {
                reason: response.reason,
                message: response.message,
            },
        }
    }

    /// Classify the raw body of a non-200 response.
    ///
    /// A body that does not decode as an [`ErrorResponse`] degrades to the
    /// unknown-error kind with empty reason and message.
    pub fn from_error_body(body: &[u8]) -> Self {
        let response = serde_json::from_slice::<ErrorResponse>(body).unwrap_or_default();
        Self::from_error_response(response)
    }

    /// The recognized reason code, if any
    pub fn reason_code(&self) -> Option<ApiReason> {
        match self {
            Self::Api { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Check if this is a rate limit rejection
    pub fn is_rate_limit(&self) -> bool {
        self.reason_code().is_some_and(|r| r.is_rate_limit())
    }
}

/// Result type for Gemini client operations
pub type GeminiResult<T> = Result<T, GeminiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_reason_maps_to_typed_error() {
        let body = br#"{"result":"error","reason":"AuctionNotOpen","message":"no auction open"}"#;
        let err = GeminiError::from_error_body(body);

        match err {
            GeminiError::Api { reason, ref message } => {
                assert_eq!(reason, ApiReason::AuctionNotOpen);
                assert_eq!(message, "no auction open");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
        // Display is the server message verbatim
        assert_eq!(err.to_string(), "no auction open");
    }

    #[test]
    fn test_unknown_reason_formats_reason_and_message() {
        let body =
            br#"{"result":"error","reason":"Bad Request","message":"Supplied parameter is not a valid option"}"#;
        let err = GeminiError::from_error_body(body);

        assert!(matches!(err, GeminiError::UnknownApi { .. }));
        assert_eq!(
            err.to_string(),
            "[Bad Request] Supplied parameter is not a valid option"
        );
    }

    #[test]
    fn test_malformed_error_body_degrades_to_unknown() {
        let err = GeminiError::from_error_body(b"not json at all");
        assert!(matches!(err, GeminiError::UnknownApi { .. }));
        assert_eq!(err.reason_code(), None);
    }

    #[test]
    fn test_partial_error_body_decodes_with_defaults() {
        let body = br#"{"reason":"RateLimit"}"#;
        let err = GeminiError::from_error_body(body);
        assert_eq!(err.reason_code(), Some(ApiReason::RateLimit));
        assert!(err.is_rate_limit());
    }

    #[test]
    fn test_transport_error_preserves_cause_as_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = GeminiError::transport(cause);

        assert_eq!(err.to_string(), "error communicating with the Gemini API");
        let source = std::error::Error::source(&err).expect("source preserved");
        assert!(source.to_string().contains("refused"));
    }
}
