use crate::core::config::ConfigError;
use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::Signer;
use async_trait::async_trait;
use reqwest::{Client, Proxy, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{instrument, trace};

/// REST client trait for making HTTP requests
///
/// The venue wire contract is GET-only: even private trading calls are GET
/// requests carrying their arguments in the query string. Implementations
/// handle signing when `authenticated` is set.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a GET request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `query_params` - Query parameters as key-value pairs
    /// * `authenticated` - Whether to sign the request
    ///
    /// # Returns
    /// The response body as a JSON value
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError>;

    /// Make a GET request with strongly-typed response
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<T, ExchangeError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Venue name for logging and tracing
    pub venue_name: String,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Response timeout in seconds
    pub timeout_secs: u64,
    /// User agent string to include in requests
    pub user_agent: String,
    /// Optional forward proxy URL (https scheme only)
    pub proxy: Option<String>,
}

impl RestClientConfig {
    pub fn new(base_url: String, venue_name: String) -> Self {
        Self {
            base_url,
            venue_name,
            connect_timeout_secs: crate::core::config::DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: crate::core::config::DEFAULT_TIMEOUT_SECS,
            user_agent: "coinwrap/0.1".to_string(),
            proxy: None,
        }
    }

    /// Set the two-part timeout (connect, response), in seconds.
    pub const fn with_timeout(mut self, connect_secs: u64, timeout_secs: u64) -> Self {
        self.connect_timeout_secs = connect_secs;
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Route requests through a forward proxy
    pub fn with_proxy(mut self, proxy: String) -> Self {
        self.proxy = Some(proxy);
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(self.config.connect_timeout_secs))
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .user_agent(&self.config.user_agent);

        if let Some(proxy_url) = &self.config.proxy {
            // Proxying is restricted to encrypted transport endpoints.
            if !proxy_url.starts_with("https://") {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Only https proxies are supported, got '{}'",
                    proxy_url
                ))
                .into());
            }
            let proxy = Proxy::https(proxy_url).map_err(|e| {
                ExchangeError::ConfigError(ConfigError::InvalidConfiguration(format!(
                    "Invalid proxy URL: {}",
                    e
                )))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            ExchangeError::ConfigError(ConfigError::InvalidConfiguration(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Build the full URL for an endpoint
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    /// Encode parameters into a query string, preserving caller order.
    ///
    /// The same string is fed to the signer and transmitted on the wire, so
    /// it must be produced exactly once.
    pub(crate) fn create_query_string(params: &[(&str, &str)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Handle the response and extract JSON
    #[instrument(skip(self, response), fields(venue = %self.config.venue_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            ExchangeError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            serde_json::from_str(&response_text).map_err(|e| {
                ExchangeError::DeserializationError(format!("Failed to parse JSON response: {}", e))
            })
        } else {
            Err(ExchangeError::HttpError {
                status: status.as_u16(),
                body: response_text,
            })
        }
    }

    #[instrument(skip(self, query_params), fields(venue = %self.config.venue_name, endpoint = %endpoint))]
    async fn make_request(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let url = self.build_url(endpoint);

        let request = if authenticated {
            let signer = self.signer.as_ref().ok_or_else(|| {
                ExchangeError::AuthError(
                    "Authentication required but no signer provided".to_string(),
                )
            })?;

            let query_string = Self::create_query_string(query_params);
            let (headers, signed_query) = signer.sign_request(&url, &query_string)?;

            // The signed query string goes out verbatim; re-encoding it here
            // would invalidate the signature.
            let full_url = if signed_query.is_empty() {
                url
            } else {
                format!("{}?{}", url, signed_query)
            };

            let mut request = self.client.get(&full_url);
            for (key, value) in headers {
                request = request.header(&key, &value);
            }
            request
        } else {
            let mut request = self.client.get(&url);
            for (key, value) in query_params {
                request = request.query(&[(key, value)]);
            }
            request
        };

        let response = request
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(format!("Request failed: {}", e)))?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, query_params), fields(venue = %self.config.venue_name, endpoint = %endpoint, param_count = query_params.len()))]
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        self.make_request(endpoint, query_params, authenticated)
            .await
    }

    #[instrument(skip(self, query_params), fields(venue = %self.config.venue_name, endpoint = %endpoint, param_count = query_params.len()))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<T, ExchangeError> {
        self.make_request(endpoint, query_params, authenticated)
            .await
            .and_then(|value| {
                serde_json::from_value(value).map_err(|e| {
                    ExchangeError::DeserializationError(format!(
                        "Failed to deserialize JSON: {}",
                        e
                    ))
                })
            })
    }
}
