/*
[INPUT]:  Venue, symbol and order id (or a previously fetched Order)
[OUTPUT]: Current or cancelled order state
[POS]:    HTTP layer - per-order endpoints (require API key)
[UPDATE]: When order status or cancel endpoints change
*/

use reqwest::Method;
use tracing::info;

use crate::http::decode::EXPECT_OK;
use crate::http::{Result, XfighterClient};
use crate::types::Order;

impl XfighterClient {
    /// Fetch the current state of an order
    ///
    /// GET /venues/{venue}/stocks/{symbol}/orders/{id}
    pub async fn order_status(&self, venue: &str, symbol: &str, id: u64) -> Result<Order> {
        let id = id.to_string();
        self.fetch(Method::GET, &order_segments(venue, symbol, &id), &[])
            .await
    }

    /// Cancel an order; the response is the order in its final state
    ///
    /// DELETE /venues/{venue}/stocks/{symbol}/orders/{id}
    pub async fn cancel_order(&self, venue: &str, symbol: &str, id: u64) -> Result<Order> {
        let id = id.to_string();
        let builder =
            self.request_builder(Method::DELETE, &order_segments(venue, symbol, &id), &[])?;
        let order: Order = self.send_json(builder, EXPECT_OK).await?;
        info!(
            id = order.id,
            venue = %order.venue,
            symbol = %order.symbol,
            total_filled = order.total_filled,
            "order cancelled"
        );
        Ok(order)
    }

    /// Re-fetch an order previously returned by the service
    pub async fn refresh_order(&self, order: &Order) -> Result<Order> {
        self.order_status(&order.venue, &order.symbol, order.id).await
    }

    /// Cancel an order previously returned by the service
    pub async fn cancel(&self, order: &Order) -> Result<Order> {
        self.cancel_order(&order.venue, &order.symbol, order.id).await
    }
}

fn order_segments<'a>(venue: &'a str, symbol: &'a str, id: &'a str) -> [&'a str; 6] {
    ["venues", venue, "stocks", symbol, "orders", id]
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, XfighterClient};
    use crate::types::OrderStatus;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> XfighterClient {
        XfighterClient::with_config_and_base_url(ClientConfig::new("test-key"), &server.uri())
            .expect("client init")
    }

    fn order_body(open: bool, total_filled: u64) -> Value {
        let outstanding = if open { 100 - total_filled } else { 0 };
        json!({
            "ok": true,
            "symbol": "FOOBAR",
            "venue": "TESTEX",
            "direction": "buy",
            "originalQty": 100,
            "qty": outstanding,
            "price": 5100,
            "orderType": "limit",
            "id": 42,
            "account": "EXB123456",
            "ts": "2015-07-05T22:16:18+00:00",
            "fills": [],
            "totalFilled": total_filled,
            "open": open
        })
    }

    #[tokio::test]
    async fn test_order_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/venues/TESTEX/stocks/FOOBAR/orders/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(order_body(true, 0)))
            .expect(1)
            .mount(&server)
            .await;

        let order = client_for(&server)
            .order_status("TESTEX", "FOOBAR", 42)
            .await
            .expect("order_status failed");

        assert_eq!(order.id, 42);
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[tokio::test]
    async fn test_cancel_via_existing_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/venues/TESTEX/stocks/FOOBAR/orders/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(order_body(true, 30)))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/venues/TESTEX/stocks/FOOBAR/orders/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(order_body(false, 30)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let order = client
            .order_status("TESTEX", "FOOBAR", 42)
            .await
            .expect("order_status failed");
        let refreshed = client.refresh_order(&order).await.expect("refresh failed");
        let cancelled = client.cancel(&refreshed).await.expect("cancel failed");

        assert_eq!(refreshed, order);
        assert!(!cancelled.open);
        assert_eq!(cancelled.status(), OrderStatus::Cancelled);
    }
}
