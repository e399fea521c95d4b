//! Client for the Gemini cryptocurrency exchange REST API
//!
//! This crate provides typed access to Gemini's public market-data endpoints
//! and authenticated private trading endpoints. Private requests follow
//! Gemini's header-based convention: the request body is serialized, base64
//! encoded into `X-GEMINI-PAYLOAD`, signed with HMAC-SHA384 into
//! `X-GEMINI-SIGNATURE`, and the HTTP body is left empty.
//!
//! # Quick Start
//!
//! ```no_run
//! use gemini_rest::prelude::*;
//! use serde_json::{json, Map};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new(Credentials::from_env()?);
//!
//!     // Public market data
//!     let book = client.current_order_book("btcusd", &[("limit_bids", "10")]).await?;
//!     println!("{book}");
//!
//!     // Private trading
//!     let mut order = Map::new();
//!     order.insert("symbol".into(), json!("ethusd"));
//!     order.insert("amount".into(), json!("100.00"));
//!     order.insert("price".into(), json!("2500.00"));
//!     order.insert("side".into(), json!("buy"));
//!     order.insert("type".into(), json!("exchange limit"));
//!
//!     match client.new_order(order).await {
//!         Ok(result) => println!("placed: {result}"),
//!         Err(GeminiError::Api { reason, message }) => {
//!             eprintln!("rejected ({reason}): {message}")
//!         }
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **Pluggable transport**: the dispatcher takes a [`Transport`]
//!   implementation as a constructor argument; [`MockTransport`] records
//!   requests and replays canned responses for tests
//! - **Typed errors**: every documented reason code maps to a
//!   [`GeminiError::Api`] variant carrying the server's message; unknown
//!   codes fall back to a `[{reason}] {message}` description
//! - **Secret hygiene**: the API secret is zeroized on drop and never logged

pub mod client;
pub mod prelude;
pub mod private;
pub mod public;
pub mod transport;

// Re-export main types
pub use client::{GeminiClient, PRODUCTION_URL, SANDBOX_URL};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, MockTransport, Transport, TransportError};

// Re-export commonly used types from dependencies
pub use gemini_auth::{AuthError, Credentials, Payload};
pub use gemini_types::{ApiReason, ErrorResponse, GeminiError, GeminiResult};
