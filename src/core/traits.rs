use crate::core::{
    errors::ExchangeError,
    types::{
        Balance, CancelOutcome, DepositAddress, DepositRecord, MarketDepth, MarketSummary,
        OpenOrder, OrderBook, OrderInfo, OrderReceipt, Pair, Ticker, Trade, WithdrawalRecord,
    },
};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Public (unauthenticated) market-data operations, normalized shapes.
#[async_trait]
pub trait MarketDataSource {
    /// Get all traded pairs, in the canonical quote-base convention
    async fn get_markets(&self) -> Result<Vec<Pair>, ExchangeError>;

    /// Get a simple current market status report
    async fn get_ticker(&self, pair: &str) -> Result<Ticker, ExchangeError>;

    /// Get the last `depth` trades for a pair
    async fn get_trade_history(&self, pair: &str, depth: u32) -> Result<Vec<Trade>, ExchangeError>;

    /// Get the order book, first level closest to the spread
    async fn get_order_book(&self, pair: &str, depth: u32) -> Result<OrderBook, ExchangeError>;

    /// Get 24h market statistics
    async fn get_market_summary(&self, pair: &str) -> Result<MarketSummary, ExchangeError>;

    /// Get aggregate book depth (total bid value, total ask quantity)
    async fn get_market_depth(&self, pair: &str) -> Result<MarketDepth, ExchangeError>;

    /// Get the difference between the best ask and the best bid
    async fn get_market_spread(&self, pair: &str) -> Result<Decimal, ExchangeError>;
}

/// Order placement and cancellation (authenticated).
#[async_trait]
pub trait OrderPlacer {
    /// Place a limit buy order
    async fn buy_limit(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<OrderReceipt, ExchangeError>;

    /// Place a limit sell order
    async fn sell_limit(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<OrderReceipt, ExchangeError>;

    /// Cancel a single order by id
    async fn cancel_order(&self, order_id: &str) -> Result<(), ExchangeError>;

    /// Cancel every open order, one request per order. Not atomic: a failure
    /// partway through leaves the remainder open, so each order's outcome is
    /// reported individually.
    async fn cancel_all_orders(&self) -> Result<Vec<CancelOutcome>, ExchangeError>;

    /// Get open orders, optionally filtered to one market
    async fn get_open_orders(&self, pair: Option<&str>) -> Result<Vec<OpenOrder>, ExchangeError>;
}

/// Account state and funding operations (authenticated).
#[async_trait]
pub trait AccountInfo {
    /// Get all balances with a strictly positive amount
    async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError>;

    /// Retrieve or generate a deposit address for a currency
    async fn get_deposit_address(&self, currency: &str) -> Result<DepositAddress, ExchangeError>;

    /// Withdraw an amount of a currency to an address
    async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<OrderReceipt, ExchangeError>;

    /// Look up a single order by id
    async fn get_order(&self, order_id: &str) -> Result<OrderInfo, ExchangeError>;

    /// Get order history
    async fn get_order_history(&self) -> Result<Vec<OrderInfo>, ExchangeError>;

    /// Get withdrawal history, optionally for one currency
    async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<WithdrawalRecord>, ExchangeError>;

    /// Get deposit history, optionally for one currency
    async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<DepositRecord>, ExchangeError>;
}

/// Composite trait for when the full venue surface is needed at once.
#[async_trait]
pub trait VenueConnector: MarketDataSource + OrderPlacer + AccountInfo {}
