//! Shared types for the Gemini REST API
//!
//! This crate provides the error taxonomy used across the Gemini client.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`GeminiError`] - The single error surface of the client
//! - [`ApiReason`] - Closed mapping of the exchange's documented reason codes
//! - [`ErrorResponse`] - Wire model of a non-200 response body

pub mod error;
pub mod reason;

// Re-export commonly used types
pub use error::*;
pub use reason::*;
