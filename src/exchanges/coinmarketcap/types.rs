use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// One listing from the v1 ticker endpoint.
///
/// The aggregator serializes numbers as strings and may return null for any
/// of them. Converted-currency fields (`price_eur`, ...) have dynamic names
/// and land in `converted`.
#[derive(Debug, Clone, Deserialize)]
pub struct CmcTicker {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: String,
    pub price_usd: Option<Decimal>,
    pub price_btc: Option<Decimal>,
    #[serde(rename = "24h_volume_usd")]
    pub volume_24h_usd: Option<Decimal>,
    pub market_cap_usd: Option<Decimal>,
    pub available_supply: Option<Decimal>,
    pub total_supply: Option<Decimal>,
    pub max_supply: Option<Decimal>,
    pub percent_change_1h: Option<Decimal>,
    pub percent_change_24h: Option<Decimal>,
    pub percent_change_7d: Option<Decimal>,
    pub last_updated: Option<String>,
    #[serde(flatten)]
    pub converted: HashMap<String, Option<serde_json::Value>>,
}

/// Aggregate market statistics from the v1 global endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CmcGlobal {
    pub total_market_cap_usd: Option<Decimal>,
    #[serde(rename = "total_24h_volume_usd")]
    pub total_volume_24h_usd: Option<Decimal>,
    pub bitcoin_percentage_of_market_cap: Option<Decimal>,
    pub active_currencies: Option<u64>,
    pub active_assets: Option<u64>,
    pub active_markets: Option<u64>,
    #[serde(flatten)]
    pub converted: HashMap<String, Option<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_deserializes_string_numbers() {
        let ticker: CmcTicker = serde_json::from_str(
            r#"{
                "id": "bitcoin",
                "name": "Bitcoin",
                "symbol": "BTC",
                "rank": "1",
                "price_usd": "573.137",
                "price_btc": "1.0",
                "24h_volume_usd": "72855700.0",
                "market_cap_usd": "9080883500.0",
                "available_supply": "15844176.0",
                "total_supply": "15844176.0",
                "max_supply": "21000000.0",
                "percent_change_1h": "0.04",
                "percent_change_24h": "-0.3",
                "percent_change_7d": "-0.57",
                "last_updated": "1472762067"
            }"#,
        )
        .unwrap();

        assert_eq!(ticker.id, "bitcoin");
        assert_eq!(ticker.price_usd.unwrap().to_string(), "573.137");
        assert_eq!(ticker.volume_24h_usd.unwrap().to_string(), "72855700.0");
    }

    #[test]
    fn test_ticker_captures_converted_fields() {
        let ticker: CmcTicker = serde_json::from_str(
            r#"{
                "id": "bitcoin", "name": "Bitcoin", "symbol": "BTC", "rank": "1",
                "price_usd": "573.137", "price_btc": "1.0",
                "24h_volume_usd": null, "market_cap_usd": null,
                "available_supply": null, "total_supply": null, "max_supply": null,
                "percent_change_1h": null, "percent_change_24h": null,
                "percent_change_7d": null, "last_updated": null,
                "price_eur": "512.33", "24h_volume_eur": "65123000.0"
            }"#,
        )
        .unwrap();

        assert!(ticker.converted.contains_key("price_eur"));
        assert!(ticker.converted.contains_key("24h_volume_eur"));
    }

    #[test]
    fn test_global_deserializes_numeric_fields() {
        let global: CmcGlobal = serde_json::from_str(
            r#"{
                "total_market_cap_usd": 201241796675,
                "total_24h_volume_usd": 4548680009,
                "bitcoin_percentage_of_market_cap": 62.54,
                "active_currencies": 896,
                "active_assets": 360,
                "active_markets": 6439
            }"#,
        )
        .unwrap();

        assert_eq!(global.active_markets, Some(6439));
        assert!(global.total_market_cap_usd.is_some());
    }
}
