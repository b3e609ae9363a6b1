use crate::core::errors::ExchangeError;
use crate::core::types::Pair;

/// Delimiter the venue uses inside market names.
pub const DELIMITER: char = '-';

/// Generic placeholder delimiter accepted from callers.
pub const GENERIC_DELIMITER: char = '_';

/// Base markets this client assumes the venue supports. Validated against
/// the live market list by `MarketData::verify_base_currencies`.
pub const BASE_CURRENCIES: [&str; 3] = ["btc", "eth", "usdt"];

/// Format a pair string the way the remote API expects it.
///
/// Accepts either the venue delimiter or the generic `_` placeholder and
/// normalizes to the venue's lowercase, `-`-joined form. Pure and idempotent.
pub fn format_pair(pair: &str) -> String {
    pair.replace(GENERIC_DELIMITER, "-").to_lowercase()
}

/// Format a canonical `quote-base` pair into the venue's market name.
///
/// The venue orders its market names base-first, so the two symbols are
/// swapped after validation. Fails before any network call when the
/// delimiter is missing or the base currency is not a known base market.
pub fn format_pair_normalized(pair: &str) -> Result<String, ExchangeError> {
    let pair = pair.to_lowercase();

    let Some((quote, base)) = pair.split_once(DELIMITER) else {
        return Err(ExchangeError::InvalidDelimiter(format!(
            "Agreed upon delimiter is '{}', got '{}'",
            DELIMITER, pair
        )));
    };

    if !BASE_CURRENCIES.contains(&base) {
        return Err(ExchangeError::InvalidBaseCurrency(format!(
            "Expected input is quote-base, you have provided '{}'",
            pair
        )));
    }

    Ok(format!("{}{}{}", base, DELIMITER, quote))
}

/// Parse a venue market name (`base-quote`) into a canonical `Pair`.
pub fn parse_market_name(market: &str) -> Result<Pair, ExchangeError> {
    let Some((base, quote)) = market.split_once(DELIMITER) else {
        return Err(ExchangeError::InvalidDelimiter(format!(
            "Market name '{}' is missing the '{}' delimiter",
            market, DELIMITER
        )));
    };

    Pair::new(quote, base).map_err(|e| ExchangeError::DeserializationError(e.to_string()))
}
