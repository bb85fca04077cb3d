/*
[INPUT]:  API key and optional `--sandbox` flag on the command line
[OUTPUT]: Market data (id map, info, listings, quotes)
[POS]:    Examples - cryptocurrency market data queries
[UPDATE]: When adding new cryptocurrency endpoints
*/

use coinmarketcap_api::*;
use tracing_subscriber::EnvFilter;

/// Example: Query cryptocurrency market data
///
/// Usage: cargo run --example market_data_example -- <API_KEY> [--sandbox]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== CoinMarketCap Market Data Example ===\n");

    let mut args = std::env::args().skip(1);
    let Some(api_key) = args.next() else {
        eprintln!("Usage: market_data_example <API_KEY> [--sandbox]");
        return;
    };
    let sandbox = args.any(|arg| arg == "--sandbox");

    let client = match CoinMarketCapClient::new(&api_key, sandbox) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created against {}\n", client.base_url());

    let crypto = client.cryptocurrency();

    println!("Querying id map for BTC, ETH...");
    let idmap = IdMapRequest {
        symbol: Some(vec!["BTC", "ETH"].into()),
        ..Default::default()
    };
    match crypto.idmap(&idmap).await {
        Ok(body) => println!("✓ Id map: {}", body["data"]),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying info for bitcoin...");
    let info = InfoRequest {
        slug: Some("bitcoin".into()),
        ..Default::default()
    };
    match crypto.info(&info).await {
        Ok(body) => println!("✓ Info: {}", body["data"]),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nListing top 5 by price...");
    let listings = ListingsRequest {
        limit: Some(5),
        sort_by: SortField::Price,
        sort_dir: SortDir::Desc,
        ..Default::default()
    };
    match crypto.list(&listings).await {
        Ok(body) => println!("✓ Listings: {}", body["data"]),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying quotes for BTC in USD, EUR...");
    let quotes = QuotesRequest {
        symbol: Some("BTC".into()),
        convert: Some(["USD", "EUR"].into()),
        ..Default::default()
    };
    match crypto.quotes(&quotes).await {
        Ok(body) => println!("✓ Quotes: {}", body["data"]),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.credit_count() {
        Some(credits) => println!("\n✓ Credits used by last call: {}", credits),
        None => println!("\n✗ No response received"),
    }
}
