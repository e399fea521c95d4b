//! Private trading endpoints
//!
//! Thin adapters: each method maps to an endpoint path and forwards its
//! arguments to [`GeminiClient::private_request`], which handles payload
//! construction and signing.

use gemini_types::GeminiResult;
use serde_json::{Map, Value};

use crate::client::GeminiClient;

impl GeminiClient {
    /// Create a new order.
    pub async fn new_order(&self, params: Map<String, Value>) -> GeminiResult<Value> {
        self.private_request("order/new", params).await
    }

    /// Cancel an order.
    pub async fn cancel_order(&self, params: Map<String, Value>) -> GeminiResult<Value> {
        self.private_request("order/cancel", params).await
    }

    /// Cancel all orders opened by this session.
    pub async fn cancel_session_orders(&self) -> GeminiResult<Value> {
        self.private_request("order/cancel/session", Map::new()).await
    }

    /// Cancel all outstanding orders created by all sessions owned by this
    /// account, including interactive orders placed through the UI.
    pub async fn cancel_all_active_orders(&self) -> GeminiResult<Value> {
        self.private_request("order/cancel/all", Map::new()).await
    }

    /// Get the status of an order.
    pub async fn order_status(&self, params: Map<String, Value>) -> GeminiResult<Value> {
        self.private_request("order/status", params).await
    }

    /// Get active orders.
    pub async fn active_orders(&self) -> GeminiResult<Value> {
        self.private_request("orders", Map::new()).await
    }

    /// Get past trades.
    pub async fn past_trades(&self, params: Map<String, Value>) -> GeminiResult<Value> {
        self.private_request("mytrades", params).await
    }

    /// Get trade volume for the past 30 days.
    pub async fn trade_volume(&self) -> GeminiResult<Value> {
        self.private_request("tradevolume", Map::new()).await
    }

    /// Show the available balances in the supported currencies.
    pub async fn available_balances(&self) -> GeminiResult<Value> {
        self.private_request("balances", Map::new()).await
    }

    /// Create a new cryptocurrency deposit address with an optional label.
    pub async fn new_deposit_address(
        &self,
        currency: &str,
        params: Map<String, Value>,
    ) -> GeminiResult<Value> {
        self.private_request(&format!("deposit/{currency}/newAddress"), params)
            .await
    }

    /// Withdraw crypto funds to a whitelisted address.
    pub async fn withdraw(
        &self,
        currency: &str,
        params: Map<String, Value>,
    ) -> GeminiResult<Value> {
        self.private_request(&format!("withdraw/{currency}"), params).await
    }

    /// Prevent a session from timing out and canceling orders if the
    /// require-heartbeat flag has been set.
    ///
    /// Only needed when no other private request has been made recently; the
    /// arrival of any message resets the heartbeat timer.
    pub async fn heartbeat(&self) -> GeminiResult<Value> {
        self.private_request("heartbeat", Map::new()).await
    }
}
