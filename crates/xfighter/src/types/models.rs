/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Direction, OrderStatus, OrderType};

/// Convert an integer cent amount, as the service quotes prices, into dollars.
pub fn cents_to_dollars(cents: u64) -> Decimal {
    Decimal::from(cents) / Decimal::ONE_HUNDRED
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub price: u64,
    pub qty: u64,
    pub ts: DateTime<Utc>,
}

impl Fill {
    pub fn price_dollars(&self) -> Decimal {
        cents_to_dollars(self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub account: String,
    pub venue: String,
    pub symbol: String,
    pub direction: Direction,
    pub order_type: OrderType,
    pub original_qty: u64,
    /// Quantity still outstanding on the book.
    pub qty: u64,
    pub price: u64,
    pub open: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub fills: Vec<Fill>,
    #[serde(default)]
    pub total_filled: u64,
    pub ts: DateTime<Utc>,
}

impl Order {
    /// Open while the service reports it open; once closed, filled only if
    /// the whole original quantity traded, otherwise cancelled.
    pub fn status(&self) -> OrderStatus {
        if self.open {
            OrderStatus::Open
        } else if self.total_filled >= self.original_qty {
            OrderStatus::Filled
        } else {
            OrderStatus::Cancelled
        }
    }

    pub fn price_dollars(&self) -> Decimal {
        cents_to_dollars(self.price)
    }

    /// Quantity-weighted average fill price in cents, `None` before any fill.
    pub fn average_fill_price(&self) -> Option<Decimal> {
        let filled: u64 = self.fills.iter().map(|fill| fill.qty).sum();
        if filled == 0 {
            return None;
        }
        let notional: Decimal = self
            .fills
            .iter()
            .map(|fill| Decimal::from(fill.price) * Decimal::from(fill.qty))
            .sum();
        Some(notional / Decimal::from(filled))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<u64>,
    #[serde(default)]
    pub bid_size: u64,
    #[serde(default)]
    pub ask_size: u64,
    #[serde(default)]
    pub bid_depth: u64,
    #[serde(default)]
    pub ask_depth: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_trade: Option<DateTime<Utc>>,
    pub quote_time: DateTime<Utc>,
}

impl Quote {
    /// Ask minus bid in cents when both sides are quoted.
    pub fn spread(&self) -> Option<u64> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookEntry {
    pub price: u64,
    pub qty: u64,
    pub is_buy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orderbook {
    pub symbol: String,
    pub venue: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub bids: Vec<OrderbookEntry>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub asks: Vec<OrderbookEntry>,
    pub ts: DateTime<Utc>,
}

impl Orderbook {
    pub fn best_bid(&self) -> Option<&OrderbookEntry> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&OrderbookEntry> {
        self.asks.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub venue: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub orders: Vec<Order>,
}

impl AccountStatus {
    pub fn open_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|order| order.open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub symbols: Vec<SymbolInfo>,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};

    pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
