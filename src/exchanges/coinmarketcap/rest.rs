use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::coinmarketcap::types::{CmcGlobal, CmcTicker};

/// Thin typed wrapper around `RestClient` for the CoinMarketCap v1 API.
///
/// Public-only: no envelope, no authentication, no nonce. Currency names
/// (not symbols) address the ticker endpoint.
pub struct CoinMarketCap<R: RestClient> {
    client: R,
}

impl<R: RestClient> CoinMarketCap<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    /// Get the ticker for `currency`, optionally converting prices into
    /// `convert_currency`.
    pub async fn get_ticker(
        &self,
        currency: &str,
        convert_currency: Option<&str>,
    ) -> Result<CmcTicker, ExchangeError> {
        let endpoint = format!("/ticker/{}/", currency.to_lowercase());

        let convert = convert_currency.map(str::to_uppercase);
        let params: Vec<(&str, &str)> = match convert.as_deref() {
            Some(convert) => vec![("convert", convert)],
            None => Vec::new(),
        };

        // The aggregator wraps the single listing in a one-element array.
        let listings: Vec<CmcTicker> = self.client.get_json(&endpoint, &params, false).await?;
        listings.into_iter().next().ok_or_else(|| {
            ExchangeError::DeserializationError(format!("No listing returned for '{}'", currency))
        })
    }

    /// Get global market statistics, optionally converted into
    /// `convert_currency`.
    pub async fn get_global(
        &self,
        convert_currency: Option<&str>,
    ) -> Result<CmcGlobal, ExchangeError> {
        let convert = convert_currency.map(str::to_uppercase);
        let params: Vec<(&str, &str)> = match convert.as_deref() {
            Some(convert) => vec![("convert", convert)],
            None => Vec::new(),
        };

        self.client.get_json("/global/", &params, false).await
    }
}
