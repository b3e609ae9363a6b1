use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// Default connect timeout in seconds, matching the venue wrappers' historic
/// `(8, 15)` two-part timeout.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 8;
/// Default response timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub api_key: Secret<String>,
    pub secret_key: Secret<String>,
    pub base_url: Option<String>,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Response (read) timeout in seconds.
    pub timeout_secs: u64,
    /// Optional forward proxy. Only `https` scheme proxies are accepted.
    pub proxy: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 6)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("connect_timeout_secs", &self.connect_timeout_secs)?;
        state.serialize_field("timeout_secs", &self.timeout_secs)?;
        state.serialize_field("proxy", &self.proxy)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            api_key: String,
            secret_key: String,
            base_url: Option<String>,
            #[serde(default = "default_connect_timeout")]
            connect_timeout_secs: u64,
            #[serde(default = "default_timeout")]
            timeout_secs: u64,
            proxy: Option<String>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            api_key: Secret::new(helper.api_key),
            secret_key: Secret::new(helper.secret_key),
            base_url: helper.base_url,
            connect_timeout_secs: helper.connect_timeout_secs,
            timeout_secs: helper.timeout_secs,
            proxy: helper.proxy,
        })
    }
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ExchangeConfig {
    /// Create a new configuration with API credentials
    #[must_use]
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
            base_url: None,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
        }
    }

    /// Create configuration for read-only operations (market data only).
    /// This doesn't require API credentials for public endpoints.
    #[must_use]
    pub fn read_only() -> Self {
        Self::new(String::new(), String::new())
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{EXCHANGE}_API_KEY` (e.g., `BITTREX_API_KEY`)
    /// - `{EXCHANGE}_SECRET_KEY` (e.g., `BITTREX_SECRET_KEY`)
    /// - `{EXCHANGE}_BASE_URL` (optional)
    /// - `{EXCHANGE}_PROXY` (optional, https only)
    pub fn from_env(exchange_prefix: &str) -> Result<Self, ConfigError> {
        let api_key_var = format!("{}_API_KEY", exchange_prefix.to_uppercase());
        let secret_key_var = format!("{}_SECRET_KEY", exchange_prefix.to_uppercase());
        let base_url_var = format!("{}_BASE_URL", exchange_prefix.to_uppercase());
        let proxy_var = format!("{}_PROXY", exchange_prefix.to_uppercase());

        let api_key = env::var(&api_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_key_var))?;

        let secret_key = env::var(&secret_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_key_var))?;

        let base_url = env::var(&base_url_var).ok();
        let proxy = env::var(&proxy_var).ok();

        let mut config = Self::new(api_key, secret_key);
        config.base_url = base_url;
        if let Some(proxy) = proxy {
            config = config.proxy(proxy)?;
        }
        Ok(config)
    }

    /// Create configuration from a .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(exchange_prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(exchange_prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(
        exchange_prefix: &str,
        env_file_path: &str,
    ) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // .env file doesn't exist, continue with system env vars
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(exchange_prefix)
    }

    /// Check if this configuration has valid credentials for authenticated operations
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set the two-part timeout (connect, response), in seconds.
    #[must_use]
    pub const fn timeout(mut self, connect_secs: u64, timeout_secs: u64) -> Self {
        self.connect_timeout_secs = connect_secs;
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set a forward proxy. Only encrypted (`https`) proxy endpoints are
    /// accepted; anything else is rejected at configuration time.
    pub fn proxy(mut self, proxy: String) -> Result<Self, ConfigError> {
        if !proxy.starts_with("https://") {
            return Err(ConfigError::InvalidConfiguration(format!(
                "Only https proxies are supported, got '{}'",
                proxy
            )));
        }
        self.proxy = Some(proxy);
        Ok(self)
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get secret key (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let config = ExchangeConfig::read_only();
        assert_eq!(config.connect_timeout_secs, 8);
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn test_rejects_plaintext_proxy() {
        let result = ExchangeConfig::read_only().proxy("http://proxy.local:8080".to_string());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_accepts_https_proxy() {
        let config = ExchangeConfig::read_only()
            .proxy("https://proxy.local:8080".to_string())
            .unwrap();
        assert_eq!(config.proxy.as_deref(), Some("https://proxy.local:8080"));
    }

    #[test]
    fn test_has_credentials() {
        assert!(!ExchangeConfig::read_only().has_credentials());
        assert!(ExchangeConfig::new("key".to_string(), "secret".to_string()).has_credentials());
    }

    #[test]
    fn test_serialize_redacts_secrets() {
        let config = ExchangeConfig::new("my-api-key".to_string(), "s3cr3t-value".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("my-api-key"));
        assert!(!json.contains("s3cr3t-value"));
        assert!(json.contains("[REDACTED]"));
    }
}
