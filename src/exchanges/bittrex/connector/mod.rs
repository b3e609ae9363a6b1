use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, MarketDataSource, OrderPlacer, VenueConnector};
use crate::core::types::{
    Balance, CancelOutcome, DepositAddress, DepositRecord, MarketDepth, MarketSummary, OpenOrder,
    OrderBook, OrderInfo, OrderReceipt, Pair, Ticker, Trade, WithdrawalRecord,
};
use async_trait::async_trait;
use rust_decimal::Decimal;

pub mod account;
pub mod market_data;
pub mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;

/// Bittrex connector that composes all sub-trait implementations
pub struct BittrexConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub trading: Trading<R>,
    pub account: Account<R>,
}

impl<R: RestClient + Clone + Send + Sync> BittrexConnector<R> {
    pub fn new_with_rest(rest: R) -> Self {
        Self {
            market: MarketData::new(rest.clone()),
            trading: Trading::new(rest.clone()),
            account: Account::new(rest),
        }
    }
}

// Implement traits for the connector by delegating to sub-components
#[async_trait]
impl<R: RestClient + Clone + Send + Sync + 'static> MarketDataSource for BittrexConnector<R> {
    async fn get_markets(&self) -> Result<Vec<Pair>, ExchangeError> {
        self.market.get_markets().await
    }

    async fn get_ticker(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        self.market.get_ticker(pair).await
    }

    async fn get_trade_history(&self, pair: &str, depth: u32) -> Result<Vec<Trade>, ExchangeError> {
        self.market.get_trade_history(pair, depth).await
    }

    async fn get_order_book(&self, pair: &str, depth: u32) -> Result<OrderBook, ExchangeError> {
        self.market.get_order_book(pair, depth).await
    }

    async fn get_market_summary(&self, pair: &str) -> Result<MarketSummary, ExchangeError> {
        self.market.get_market_summary(pair).await
    }

    async fn get_market_depth(&self, pair: &str) -> Result<MarketDepth, ExchangeError> {
        self.market.get_market_depth(pair).await
    }

    async fn get_market_spread(&self, pair: &str) -> Result<Decimal, ExchangeError> {
        self.market.get_market_spread(pair).await
    }
}

#[async_trait]
impl<R: RestClient + Clone + Send + Sync + 'static> OrderPlacer for BittrexConnector<R> {
    async fn buy_limit(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<OrderReceipt, ExchangeError> {
        self.trading.buy_limit(pair, rate, amount).await
    }

    async fn sell_limit(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<OrderReceipt, ExchangeError> {
        self.trading.sell_limit(pair, rate, amount).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<(), ExchangeError> {
        self.trading.cancel_order(order_id).await
    }

    async fn cancel_all_orders(&self) -> Result<Vec<CancelOutcome>, ExchangeError> {
        self.trading.cancel_all_orders().await
    }

    async fn get_open_orders(&self, pair: Option<&str>) -> Result<Vec<OpenOrder>, ExchangeError> {
        self.trading.get_open_orders(pair).await
    }
}

#[async_trait]
impl<R: RestClient + Clone + Send + Sync + 'static> AccountInfo for BittrexConnector<R> {
    async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        self.account.get_balances().await
    }

    async fn get_deposit_address(&self, currency: &str) -> Result<DepositAddress, ExchangeError> {
        self.account.get_deposit_address(currency).await
    }

    async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<OrderReceipt, ExchangeError> {
        self.account.withdraw(currency, amount, address).await
    }

    async fn get_order(&self, order_id: &str) -> Result<OrderInfo, ExchangeError> {
        self.account.get_order(order_id).await
    }

    async fn get_order_history(&self) -> Result<Vec<OrderInfo>, ExchangeError> {
        self.account.get_order_history().await
    }

    async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<WithdrawalRecord>, ExchangeError> {
        self.account.get_withdrawal_history(currency).await
    }

    async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<DepositRecord>, ExchangeError> {
        self.account.get_deposit_history(currency).await
    }
}

#[async_trait]
impl<R: RestClient + Clone + Send + Sync + 'static> VenueConnector for BittrexConnector<R> {}
