/*
[INPUT]:  API key and trading account from the environment
[OUTPUT]: Order placement, status and cancellation results
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use xfighter::*;

/// Example: place a limit order, check it, then cancel it.
///
/// Requires `XFIGHTER_API_KEY` and `XFIGHTER_ACCOUNT`.
#[tokio::main]
async fn main() {
    println!("=== Xfighter Trading Example ===\n");

    let Ok(account) = std::env::var("XFIGHTER_ACCOUNT") else {
        eprintln!("Set XFIGHTER_ACCOUNT to your trading account");
        return;
    };

    let client = match XfighterClient::with_config(ClientConfig::from_env()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let order = match client
        .buy(&account, "TESTEX", "FOOBAR", 100, 10, OrderType::Limit)
        .await
    {
        Ok(order) => order,
        Err(e) => {
            eprintln!("✗ Buy failed ({:?}): {}", e.kind(), e);
            return;
        }
    };
    println!("✓ Placed order {} at {} dollars", order.id, order.price_dollars());

    match client.refresh_order(&order).await {
        Ok(current) => println!("✓ Status: {:?}, filled {}", current.status(), current.total_filled),
        Err(e) => println!("✗ Status error: {}", e),
    }

    match client.cancel(&order).await {
        Ok(cancelled) => println!("✓ Cancelled, final status {:?}", cancelled.status()),
        Err(e) => println!("✗ Cancel error: {}", e),
    }
}
