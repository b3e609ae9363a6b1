use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::bittrex::types::{
    ApiEnvelope, BittrexAddress, BittrexBalance, BittrexDeposit, BittrexHistoricalOrder,
    BittrexMarket, BittrexMarketSummary, BittrexOpenOrder, BittrexOrder, BittrexOrderBook,
    BittrexTicker, BittrexTrade, BittrexUuid, BittrexWithdrawal,
};
use rust_decimal::Decimal;

/// The venue caps trade history at the last 200 trades.
pub const MAX_HISTORY_DEPTH: u32 = 200;

/// The venue caps order book queries at 50 levels per side.
pub const MAX_ORDER_BOOK_DEPTH: u32 = 50;

/// Thin typed wrapper around `RestClient` for the Bittrex v1.1 API.
///
/// Every call checks the response envelope before surfacing `result`; market
/// names are expected in the venue's own `base-quote` form (callers go
/// through the pair formatter first).
pub struct BittrexRestClient<R: RestClient> {
    client: R,
}

impl<R: RestClient> BittrexRestClient<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    /// Get all supported markets
    pub async fn get_markets(&self) -> Result<Vec<BittrexMarket>, ExchangeError> {
        let envelope: ApiEnvelope<Vec<BittrexMarket>> =
            self.client.get_json("/public/getmarkets", &[], false).await?;
        envelope.into_result()
    }

    /// Get summaries of all active markets
    pub async fn get_market_summaries(&self) -> Result<Vec<BittrexMarketSummary>, ExchangeError> {
        let envelope: ApiEnvelope<Vec<BittrexMarketSummary>> = self
            .client
            .get_json("/public/getmarketsummaries", &[], false)
            .await?;
        envelope.into_result()
    }

    /// Get the current ticker for a market
    pub async fn get_ticker(&self, market: &str) -> Result<BittrexTicker, ExchangeError> {
        let envelope: ApiEnvelope<BittrexTicker> = self
            .client
            .get_json("/public/getticker", &[("market", market)], false)
            .await?;
        envelope.into_result()
    }

    /// Get the last `depth` trades for a market
    pub async fn get_market_history(
        &self,
        market: &str,
        depth: u32,
    ) -> Result<Vec<BittrexTrade>, ExchangeError> {
        if depth > MAX_HISTORY_DEPTH {
            return Err(ExchangeError::InvalidParameters(format!(
                "Bittrex API allows maximum history of last {} trades, requested {}",
                MAX_HISTORY_DEPTH, depth
            )));
        }

        let envelope: ApiEnvelope<Vec<BittrexTrade>> = self
            .client
            .get_json("/public/getmarkethistory", &[("market", market)], false)
            .await?;

        let mut trades = envelope.into_result()?;
        let skip = trades.len().saturating_sub(depth as usize);
        Ok(trades.split_off(skip))
    }

    /// Get both sides of the order book for a market
    pub async fn get_order_book(
        &self,
        market: &str,
        depth: u32,
    ) -> Result<BittrexOrderBook, ExchangeError> {
        if depth > MAX_ORDER_BOOK_DEPTH {
            return Err(ExchangeError::InvalidParameters(format!(
                "Bittrex API allows maximum depth of last {} offers, requested {}",
                MAX_ORDER_BOOK_DEPTH, depth
            )));
        }

        let depth = depth.to_string();
        let params = [("market", market), ("type", "both"), ("depth", &depth)];
        let envelope: ApiEnvelope<BittrexOrderBook> = self
            .client
            .get_json("/public/getorderbook", &params, false)
            .await?;
        envelope.into_result()
    }

    /// Get basic 24h statistics for one market
    pub async fn get_market_summary(
        &self,
        market: &str,
    ) -> Result<BittrexMarketSummary, ExchangeError> {
        let envelope: ApiEnvelope<Vec<BittrexMarketSummary>> = self
            .client
            .get_json("/public/getmarketsummary", &[("market", market)], false)
            .await?;

        // The venue wraps the single summary in a one-element array.
        envelope.into_result()?.into_iter().next().ok_or_else(|| {
            ExchangeError::DeserializationError(format!(
                "Empty market summary for '{}'",
                market
            ))
        })
    }

    /// Place a limit buy order (requires authentication)
    pub async fn buy_limit(
        &self,
        market: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<BittrexUuid, ExchangeError> {
        let rate = rate.to_string();
        let amount = amount.to_string();
        let params = [("market", market), ("quantity", &amount), ("rate", &rate)];
        let envelope: ApiEnvelope<BittrexUuid> = self
            .client
            .get_json("/market/buylimit", &params, true)
            .await?;
        envelope.into_result()
    }

    /// Place a limit sell order (requires authentication)
    pub async fn sell_limit(
        &self,
        market: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<BittrexUuid, ExchangeError> {
        let rate = rate.to_string();
        let amount = amount.to_string();
        let params = [("market", market), ("quantity", &amount), ("rate", &rate)];
        let envelope: ApiEnvelope<BittrexUuid> = self
            .client
            .get_json("/market/selllimit", &params, true)
            .await?;
        envelope.into_result()
    }

    /// Cancel an order by uuid (requires authentication)
    pub async fn cancel(&self, order_id: &str) -> Result<(), ExchangeError> {
        let envelope: ApiEnvelope<Option<serde_json::Value>> = self
            .client
            .get_json("/market/cancel", &[("uuid", order_id)], true)
            .await?;
        envelope.ok()
    }

    /// Get open orders, for one market or all of them (requires authentication)
    pub async fn get_open_orders(
        &self,
        market: Option<&str>,
    ) -> Result<Vec<BittrexOpenOrder>, ExchangeError> {
        let params: Vec<(&str, &str)> = match market {
            Some(market) => vec![("market", market)],
            None => Vec::new(),
        };

        let envelope: ApiEnvelope<Vec<BittrexOpenOrder>> = self
            .client
            .get_json("/market/getopenorders", &params, true)
            .await?;
        envelope.into_result()
    }

    /// Get all account balances (requires authentication)
    pub async fn get_balances(&self) -> Result<Vec<BittrexBalance>, ExchangeError> {
        let envelope: ApiEnvelope<Vec<BittrexBalance>> = self
            .client
            .get_json("/account/getbalances", &[], true)
            .await?;
        envelope.into_result()
    }

    /// Retrieve or generate a deposit address (requires authentication).
    /// A freshly requested address may not exist yet; the venue then fails
    /// the envelope and a second call returns the generated address.
    pub async fn get_deposit_address(
        &self,
        currency: &str,
    ) -> Result<BittrexAddress, ExchangeError> {
        let envelope: ApiEnvelope<BittrexAddress> = self
            .client
            .get_json("/account/getdepositaddress", &[("currency", currency)], true)
            .await?;
        envelope.into_result()
    }

    /// Withdraw funds (requires authentication)
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<BittrexUuid, ExchangeError> {
        let amount = amount.to_string();
        let params = [
            ("currency", currency),
            ("quantity", amount.as_str()),
            ("address", address),
        ];
        let envelope: ApiEnvelope<BittrexUuid> = self
            .client
            .get_json("/account/withdraw", &params, true)
            .await?;
        envelope.into_result()
    }

    /// Look up a single order by uuid (requires authentication)
    pub async fn get_order(&self, order_id: &str) -> Result<BittrexOrder, ExchangeError> {
        let envelope: ApiEnvelope<BittrexOrder> = self
            .client
            .get_json("/account/getorder", &[("uuid", order_id)], true)
            .await?;
        envelope.into_result()
    }

    /// Get order history (requires authentication)
    pub async fn get_order_history(&self) -> Result<Vec<BittrexHistoricalOrder>, ExchangeError> {
        let envelope: ApiEnvelope<Vec<BittrexHistoricalOrder>> = self
            .client
            .get_json("/account/getorderhistory", &[], true)
            .await?;
        envelope.into_result()
    }

    /// Get withdrawal history (requires authentication)
    pub async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<BittrexWithdrawal>, ExchangeError> {
        let params: Vec<(&str, &str)> = match currency {
            Some(currency) => vec![("currency", currency)],
            None => Vec::new(),
        };

        let envelope: ApiEnvelope<Vec<BittrexWithdrawal>> = self
            .client
            .get_json("/account/getwithdrawalhistory", &params, true)
            .await?;
        envelope.into_result()
    }

    /// Get deposit history (requires authentication)
    pub async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<BittrexDeposit>, ExchangeError> {
        let params: Vec<(&str, &str)> = match currency {
            Some(currency) => vec![("currency", currency)],
            None => Vec::new(),
        };

        let envelope: ApiEnvelope<Vec<BittrexDeposit>> = self
            .client
            .get_json("/account/getdeposithistory", &params, true)
            .await?;
        envelope.into_result()
    }
}
