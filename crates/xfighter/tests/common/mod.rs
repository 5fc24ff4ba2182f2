/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for xfighter tests

use serde_json::{Value, json};
use wiremock::MockServer;
use xfighter::{ClientConfig, XfighterClient};

pub const TEST_API_KEY: &str = "0123456789abcdef";
#[allow(dead_code)]
pub const TEST_ACCOUNT: &str = "EXB123456";
#[allow(dead_code)]
pub const TEST_VENUE: &str = "TESTEX";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the test API key
pub fn client_for(server: &MockServer) -> XfighterClient {
    XfighterClient::with_config_and_base_url(ClientConfig::new(TEST_API_KEY), &server.uri())
        .expect("client init")
}

/// Order payload as the service returns it, with the given id and shape
#[allow(dead_code)]
pub fn order_payload(id: u64, symbol: &str, qty: u64, price: u64, order_type: &str) -> Value {
    json!({
        "ok": true,
        "symbol": symbol,
        "venue": TEST_VENUE,
        "direction": "buy",
        "originalQty": qty,
        "qty": qty,
        "price": price,
        "orderType": order_type,
        "id": id,
        "account": TEST_ACCOUNT,
        "ts": "2015-07-05T22:16:18+00:00",
        "fills": [],
        "totalFilled": 0,
        "open": true
    })
}
