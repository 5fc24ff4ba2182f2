/*
[INPUT]:  Venue, symbol and order parameters
[OUTPUT]: Stock listings, quotes and freshly placed orders
[POS]:    HTTP layer - stock endpoints (quote is public, orders need the API key)
[UPDATE]: When stock endpoints or the order body change
*/

use reqwest::Method;
use tracing::info;

use crate::http::decode::EXPECT_OK;
use crate::http::{Result, XfighterClient};
use crate::types::{Direction, NewOrderRequest, Order, OrderType, Quote, Symbols};

impl XfighterClient {
    /// List the stocks traded on a venue
    ///
    /// GET /venues/{venue}/stocks
    pub async fn stocks(&self, venue: &str) -> Result<Symbols> {
        self.fetch(Method::GET, &["venues", venue, "stocks"], &[])
            .await
    }

    /// Current quote for a stock
    ///
    /// GET /venues/{venue}/stocks/{symbol}/quote
    pub async fn quote(&self, venue: &str, symbol: &str) -> Result<Quote> {
        self.fetch(Method::GET, &["venues", venue, "stocks", symbol, "quote"], &[])
            .await
    }

    /// Place a buy order. `price` is in cents.
    pub async fn buy(
        &self,
        account: &str,
        venue: &str,
        symbol: &str,
        price: u64,
        qty: u64,
        order_type: OrderType,
    ) -> Result<Order> {
        self.place_order(NewOrderRequest {
            account: account.to_string(),
            venue: venue.to_string(),
            stock: symbol.to_string(),
            price,
            qty,
            direction: Direction::Buy,
            order_type,
        })
        .await
    }

    /// Place a sell order. `price` is in cents.
    pub async fn sell(
        &self,
        account: &str,
        venue: &str,
        symbol: &str,
        price: u64,
        qty: u64,
        order_type: OrderType,
    ) -> Result<Order> {
        self.place_order(NewOrderRequest {
            account: account.to_string(),
            venue: venue.to_string(),
            stock: symbol.to_string(),
            price,
            qty,
            direction: Direction::Sell,
            order_type,
        })
        .await
    }

    /// Submit an order
    ///
    /// POST /venues/{venue}/stocks/{stock}/orders
    pub async fn place_order(&self, req: NewOrderRequest) -> Result<Order> {
        let segments = ["venues", req.venue.as_str(), "stocks", req.stock.as_str(), "orders"];
        let builder = self.request_builder(Method::POST, &segments, &[])?.json(&req);
        let order: Order = self.send_json(builder, EXPECT_OK).await?;
        info!(
            id = order.id,
            venue = %order.venue,
            symbol = %order.symbol,
            direction = %order.direction,
            order_type = %order.order_type,
            qty = order.original_qty,
            price = order.price,
            "order placed"
        );
        Ok(order)
    }
}
