//! Simple example: fetch public market data
//!
//! Run with: cargo run --example symbols

use gemini_rest::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Public endpoints need no credentials
    let client = GeminiClient::new(Credentials::new("", ""));

    println!("Fetching symbols from {}...", client.base_url());
    let symbols = client.symbols().await?;
    println!("{symbols}");

    if let Some(symbol) = symbols.as_array().and_then(|s| s.first()).and_then(|s| s.as_str()) {
        let ticker = client.ticker(symbol).await?;
        println!("\n{symbol} ticker: {ticker}");
    }

    Ok(())
}
