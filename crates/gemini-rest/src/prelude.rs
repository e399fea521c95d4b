//! Re-exports for convenience
//!
//! Import everything you need with:
//! ```
//! use gemini_rest::prelude::*;
//! ```

// Client
pub use crate::client::{GeminiClient, PRODUCTION_URL, SANDBOX_URL};

// Transport abstraction
pub use crate::transport::{
    HttpRequest, HttpResponse, HttpTransport, Method, MockTransport, Transport, TransportError,
};

// Auth types
pub use gemini_auth::{signature, Credentials, Payload};

// Error taxonomy
pub use gemini_types::{ApiReason, ErrorResponse, GeminiError, GeminiResult};
