/*
[INPUT]:  Venue and symbol
[OUTPUT]: Orderbook snapshot (bids and asks)
[POS]:    HTTP layer - orderbook endpoint (no auth required)
[UPDATE]: When the orderbook endpoint or entry format changes
*/

use reqwest::Method;

use crate::http::{Result, XfighterClient};
use crate::types::Orderbook;

impl XfighterClient {
    /// Snapshot of the orderbook for a stock
    ///
    /// GET /venues/{venue}/stocks/{symbol}
    pub async fn orderbook(&self, venue: &str, symbol: &str) -> Result<Orderbook> {
        self.fetch(Method::GET, &["venues", venue, "stocks", symbol], &[])
            .await
    }
}
