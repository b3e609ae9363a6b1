use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The venue answered with a well-formed envelope but `success` was false.
    #[error("API error: {message}")]
    ApiError { message: String },

    /// Non-2xx HTTP status from the venue. Propagated, never swallowed.
    #[error("HTTP error: {status} - {body}")]
    HttpError { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid pair delimiter: {0}")]
    InvalidDelimiter(String),

    #[error("Invalid base currency: {0}")]
    InvalidBaseCurrency(String),

    /// The venue's live market list no longer matches the compiled-in base
    /// currency set. Carries both sets for diagnosis.
    #[error("Outdated base currencies: venue reports {actual:?}, hardcoded {hardcoded:?}")]
    OutdatedBaseCurrencies {
        actual: Vec<String>,
        hardcoded: Vec<String>,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Other error: {0}")]
    Other(String),
}
