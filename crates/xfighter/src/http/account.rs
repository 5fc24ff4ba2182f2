/*
[INPUT]:  Venue, trading account and optional symbol
[OUTPUT]: Account status (all orders placed by the account)
[POS]:    HTTP layer - account endpoints (require API key)
[UPDATE]: When account endpoints change
*/

use reqwest::Method;

use crate::http::{Result, XfighterClient};
use crate::types::AccountStatus;

impl XfighterClient {
    /// All orders an account has placed on a venue
    ///
    /// GET /venues/{venue}/accounts/{account}/orders
    pub async fn account_orders(&self, venue: &str, account: &str) -> Result<AccountStatus> {
        self.fetch(Method::GET, &["venues", venue, "accounts", account, "orders"], &[])
            .await
    }

    /// Orders an account has placed on a venue for one stock
    ///
    /// GET /venues/{venue}/accounts/{account}/stocks/{symbol}/orders
    pub async fn account_stock_orders(
        &self,
        venue: &str,
        account: &str,
        symbol: &str,
    ) -> Result<AccountStatus> {
        let segments = ["venues", venue, "accounts", account, "stocks", symbol, "orders"];
        self.fetch(Method::GET, &segments, &[]).await
    }
}
