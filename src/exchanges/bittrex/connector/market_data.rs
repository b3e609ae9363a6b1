use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::MarketDataSource;
use crate::core::types::{MarketDepth, MarketSummary, OrderBook, Pair, Ticker, Trade};
use crate::exchanges::bittrex::conversions::{
    convert_market_summary, convert_markets, convert_order_book, convert_ticker,
    convert_trade_history,
};
use crate::exchanges::bittrex::pair::{format_pair_normalized, BASE_CURRENCIES};
use crate::exchanges::bittrex::rest::{BittrexRestClient, MAX_ORDER_BOOK_DEPTH};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Market data operations for Bittrex
pub struct MarketData<R: RestClient> {
    rest: BittrexRestClient<R>,
}

impl<R: RestClient> MarketData<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: BittrexRestClient::new(rest),
        }
    }

    /// Check that the compiled-in base currency set still matches what the
    /// venue reports. A mismatch means this client is stale and pair
    /// validation can no longer be trusted.
    pub async fn verify_base_currencies(&self) -> Result<(), ExchangeError> {
        let markets = self.get_markets().await?;

        let mut actual: Vec<String> = markets.into_iter().map(|pair| pair.base).collect();
        actual.sort();
        actual.dedup();

        let mut hardcoded: Vec<String> = BASE_CURRENCIES.iter().map(ToString::to_string).collect();
        hardcoded.sort();

        if actual == hardcoded {
            Ok(())
        } else {
            Err(ExchangeError::OutdatedBaseCurrencies { actual, hardcoded })
        }
    }

    /// 24h volume as (base volume, quote volume).
    pub async fn get_market_volume(&self, pair: &str) -> Result<(Decimal, Decimal), ExchangeError> {
        let summary = self.get_market_summary(pair).await?;
        Ok((summary.base_volume, summary.volume))
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for MarketData<R> {
    async fn get_markets(&self) -> Result<Vec<Pair>, ExchangeError> {
        let markets = self.rest.get_markets().await?;
        convert_markets(&markets)
    }

    async fn get_ticker(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        let market = format_pair_normalized(pair)?;
        let ticker = self.rest.get_ticker(&market).await?;
        Ok(convert_ticker(&ticker))
    }

    async fn get_trade_history(&self, pair: &str, depth: u32) -> Result<Vec<Trade>, ExchangeError> {
        let market = format_pair_normalized(pair)?;
        let trades = self.rest.get_market_history(&market, depth).await?;
        convert_trade_history(&trades)
    }

    async fn get_order_book(&self, pair: &str, depth: u32) -> Result<OrderBook, ExchangeError> {
        let market = format_pair_normalized(pair)?;
        let book = self.rest.get_order_book(&market, depth).await?;
        Ok(convert_order_book(&book))
    }

    async fn get_market_summary(&self, pair: &str) -> Result<MarketSummary, ExchangeError> {
        let market = format_pair_normalized(pair)?;
        let summary = self.rest.get_market_summary(&market).await?;
        Ok(convert_market_summary(&summary))
    }

    async fn get_market_depth(&self, pair: &str) -> Result<MarketDepth, ExchangeError> {
        let book = self.get_order_book(pair, MAX_ORDER_BOOK_DEPTH).await?;

        Ok(MarketDepth {
            bids: book
                .bids
                .iter()
                .map(|level| level.quantity * level.price)
                .sum(),
            asks: book.asks.iter().map(|level| level.quantity).sum(),
        })
    }

    async fn get_market_spread(&self, pair: &str) -> Result<Decimal, ExchangeError> {
        let summary = self.get_market_summary(pair).await?;
        Ok(summary.ask - summary.bid)
    }
}
