use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Typed errors for the types subsystem
#[derive(Error, Debug)]
pub enum TypesError {
    #[error("Invalid pair: {0}")]
    InvalidPair(String),
    #[error("Invalid decimal value: {0}")]
    InvalidDecimal(#[from] rust_decimal::Error),
}

/// A traded market identified by quote and base currency symbols.
///
/// The canonical display form is `quote-base`, lowercase. Venue-specific
/// delimiter/ordering conventions live in the venue modules, never here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub quote: String,
    pub base: String,
}

impl Pair {
    pub fn new(quote: impl Into<String>, base: impl Into<String>) -> Result<Self, TypesError> {
        let quote = quote.into().to_lowercase();
        let base = base.into().to_lowercase();

        if quote.is_empty() || base.is_empty() {
            return Err(TypesError::InvalidPair(
                "Quote and base symbols cannot be empty".to_string(),
            ));
        }

        Ok(Self { quote, base })
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.quote, self.base)
    }
}

/// Simple current market status report, normalized to lowercase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub bid: Decimal,
    pub ask: Decimal,
    pub last: Decimal,
}

/// A single executed trade, normalized across venues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub timestamp: NaiveDateTime,
    /// True when the taker sold into the book.
    pub is_sale: bool,
    pub rate: Decimal,
    pub amount: Decimal,
    pub trade_id: u64,
}

/// One price level of an order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookLevel {
    pub price: Decimal,
    pub quantity: Decimal,
}

/// Normalized order book. `bids[0]` and `asks[0]` are the levels closest to
/// the spread; venue-provided ordering is preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<OrderBookLevel>,
    pub asks: Vec<OrderBookLevel>,
}

/// Aggregate book depth: total bid value and total ask quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDepth {
    pub bids: Decimal,
    pub asks: Decimal,
}

/// 24h market statistics, normalized to lowercase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub high: Decimal,
    pub low: Decimal,
    pub volume: Decimal,
    pub last: Decimal,
    pub base_volume: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    pub open_buy_orders: u64,
    pub open_sell_orders: u64,
    pub prev_day: Decimal,
}

/// A non-zero account balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub currency: String,
    pub balance: Decimal,
    pub available: Decimal,
    pub pending: Decimal,
}

/// An order resting on the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub order_id: String,
    pub pair: String,
    pub is_sale: bool,
    pub rate: Decimal,
    pub amount: Decimal,
    pub amount_remaining: Decimal,
}

/// A single historical or open order looked up by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub order_id: String,
    pub pair: String,
    pub order_type: String,
    pub rate: Decimal,
    pub amount: Decimal,
    pub amount_remaining: Decimal,
    pub is_open: bool,
}

/// Receipt for a newly placed limit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
}

/// Outcome of one cancellation within `cancel_all_orders`. The sweep is not
/// atomic; callers get a per-order record instead of an aborted run.
#[derive(Debug)]
pub struct CancelOutcome {
    pub order_id: String,
    pub result: Result<(), crate::core::errors::ExchangeError>,
}

/// Deposit address for a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositAddress {
    pub currency: String,
    pub address: String,
}

/// A completed or pending withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalRecord {
    pub withdrawal_id: String,
    pub currency: String,
    pub amount: Decimal,
    pub address: String,
}

/// A completed or pending deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRecord {
    pub deposit_id: u64,
    pub currency: String,
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_display_is_quote_base_lowercase() {
        let pair = Pair::new("ETH", "BTC").unwrap();
        assert_eq!(pair.to_string(), "eth-btc");
    }

    #[test]
    fn test_pair_rejects_empty_symbols() {
        assert!(Pair::new("", "btc").is_err());
        assert!(Pair::new("eth", "").is_err());
    }
}
