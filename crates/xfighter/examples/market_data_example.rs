/*
[INPUT]:  Venue and symbol (defaults to the TESTEX/FOOBAR practice pair)
[OUTPUT]: Heartbeat, stock list, quote and orderbook printed to stdout
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use xfighter::*;

/// Example: Query market data for a venue.
///
/// Reads `XFIGHTER_API_KEY` / `XFIGHTER_BASE_URL` from the environment.
#[tokio::main]
async fn main() {
    println!("=== Xfighter Market Data Example ===\n");

    let client = match XfighterClient::with_config(ClientConfig::from_env()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let venue = "TESTEX";
    let symbol = "FOOBAR";

    match client.heartbeat().await {
        Ok(up) => println!("API up: {}", up),
        Err(e) => println!("✗ Heartbeat error: {}", e),
    }

    match client.venue_heartbeat(venue).await {
        Ok(up) => println!("{} up: {}", venue, up),
        Err(e) => println!("✗ Venue heartbeat error: {}", e),
    }

    println!("\nListing stocks on {}...", venue);
    match client.stocks(venue).await {
        Ok(symbols) => println!("✓ Stocks: {:?}", symbols.symbols),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying quote for {}...", symbol);
    match client.quote(venue, symbol).await {
        Ok(quote) => println!("✓ Quote: {:?} (spread {:?})", quote, quote.spread()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying orderbook for {}...", symbol);
    match client.orderbook(venue, symbol).await {
        Ok(book) => println!(
            "✓ Orderbook: {} bids, {} asks",
            book.bids.len(),
            book.asks.len()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }
}
