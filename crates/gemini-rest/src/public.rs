//! Public market-data endpoints
//!
//! Thin adapters: each method maps to an endpoint path and forwards its
//! arguments to [`GeminiClient::public_request`]. No authentication headers
//! are attached.

use gemini_types::GeminiResult;
use serde_json::Value;

use crate::client::GeminiClient;

impl GeminiClient {
    /// Retrieve all available symbols for trading.
    pub async fn symbols(&self) -> GeminiResult<Value> {
        self.public_request("symbols", &[]).await
    }

    /// Retrieve information about recent trading activity for the symbol.
    pub async fn ticker(&self, symbol: &str) -> GeminiResult<Value> {
        self.public_request(&format!("pubticker/{symbol}"), &[]).await
    }

    /// Return the current order book as two arrays, one of bids and one of
    /// asks.
    pub async fn current_order_book(
        &self,
        symbol: &str,
        query: &[(&str, &str)],
    ) -> GeminiResult<Value> {
        self.public_request(&format!("book/{symbol}"), query).await
    }

    /// Return the trades that have executed since the specified timestamp.
    ///
    /// Timestamps are either seconds or milliseconds since the epoch.
    pub async fn trade_history(
        &self,
        symbol: &str,
        query: &[(&str, &str)],
    ) -> GeminiResult<Value> {
        self.public_request(&format!("trades/{symbol}"), query).await
    }

    /// Return current auction information for the symbol.
    pub async fn current_auction(&self, symbol: &str) -> GeminiResult<Value> {
        self.public_request(&format!("auction/{symbol}"), &[]).await
    }

    /// Return the auction events since the specified timestamp, optionally
    /// including publications of indicative prices.
    pub async fn auction_history(
        &self,
        symbol: &str,
        query: &[(&str, &str)],
    ) -> GeminiResult<Value> {
        self.public_request(&format!("auction/{symbol}/history"), query)
            .await
    }
}
