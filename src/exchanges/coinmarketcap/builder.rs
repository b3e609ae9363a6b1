use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::coinmarketcap::rest::CoinMarketCap;

/// Production API endpoint for the v1 REST API.
pub const COINMARKETCAP_API_URL: &str = "https://api.coinmarketcap.com/v1";

/// Create a CoinMarketCap client from a configuration. Credentials are
/// ignored; only the base URL, timeouts and proxy settings apply.
pub fn build_client(
    config: &ExchangeConfig,
) -> Result<CoinMarketCap<ReqwestRest>, ExchangeError> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| COINMARKETCAP_API_URL.to_string());

    let mut rest_config = RestClientConfig::new(base_url, "coinmarketcap".to_string())
        .with_timeout(config.connect_timeout_secs, config.timeout_secs);

    if let Some(proxy) = &config.proxy {
        rest_config = rest_config.with_proxy(proxy.clone());
    }

    let rest = RestClientBuilder::new(rest_config).build()?;
    Ok(CoinMarketCap::new(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_without_credentials() {
        let config = ExchangeConfig::read_only();
        assert!(build_client(&config).is_ok());
    }
}
