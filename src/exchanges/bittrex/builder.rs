use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::bittrex::connector::BittrexConnector;
use crate::exchanges::bittrex::signer::BittrexSigner;
use std::sync::Arc;

/// Production API endpoint for the v1.1 REST API.
pub const BITTREX_API_URL: &str = "https://bittrex.com/api/v1.1";

/// Create a Bittrex connector from a configuration.
///
/// Public endpoints work without credentials; the signer is attached only
/// when the config carries both an API key and a secret.
pub fn build_connector(
    config: &ExchangeConfig,
) -> Result<BittrexConnector<ReqwestRest>, ExchangeError> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| BITTREX_API_URL.to_string());

    let mut rest_config = RestClientConfig::new(base_url, "bittrex".to_string())
        .with_timeout(config.connect_timeout_secs, config.timeout_secs);

    if let Some(proxy) = &config.proxy {
        rest_config = rest_config.with_proxy(proxy.clone());
    }

    let mut rest_builder = RestClientBuilder::new(rest_config);

    if config.has_credentials() {
        let signer = Arc::new(BittrexSigner::new(
            config.api_key().to_string(),
            config.secret_key().to_string(),
        )?);
        rest_builder = rest_builder.with_signer(signer);
    }

    let rest = rest_builder.build()?;
    Ok(BittrexConnector::new_with_rest(rest))
}
