use crate::core::errors::ExchangeError;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Response envelope shared by every v1.1 endpoint.
///
/// The venue always answers 200 with `success`, `message` and `result`; the
/// envelope must be checked before `result` is touched.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub result: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Extract the payload, enforcing the wire contract.
    ///
    /// A success envelope without a payload is treated as a deserialization
    /// failure rather than silently returning nothing.
    pub fn into_result(self) -> Result<T, ExchangeError> {
        if self.success {
            self.result.ok_or_else(|| {
                ExchangeError::DeserializationError(
                    "Envelope signaled success but carried no result".to_string(),
                )
            })
        } else {
            Err(ExchangeError::ApiError {
                message: self.message,
            })
        }
    }

    /// Check the envelope for endpoints whose `result` is null on success.
    pub fn ok(self) -> Result<(), ExchangeError> {
        if self.success {
            Ok(())
        } else {
            Err(ExchangeError::ApiError {
                message: self.message,
            })
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexMarket {
    pub market_currency: String,
    pub base_currency: String,
    pub market_name: String,
    pub is_active: bool,
    pub min_trade_size: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexTicker {
    pub bid: Decimal,
    pub ask: Decimal,
    pub last: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BittrexTrade {
    #[serde(rename = "Id")]
    pub id: u64,
    #[serde(rename = "TimeStamp")]
    pub time_stamp: String,
    #[serde(rename = "Quantity")]
    pub quantity: Decimal,
    #[serde(rename = "Price")]
    pub price: Decimal,
    #[serde(rename = "Total")]
    pub total: Option<Decimal>,
    #[serde(rename = "FillType")]
    pub fill_type: Option<String>,
    #[serde(rename = "OrderType")]
    pub order_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexOrderBookEntry {
    pub quantity: Decimal,
    pub rate: Decimal,
}

/// Order book as the venue returns it: `buy` levels highest-bid-first,
/// `sell` levels lowest-ask-first.
#[derive(Debug, Clone, Deserialize)]
pub struct BittrexOrderBook {
    #[serde(default)]
    pub buy: Vec<BittrexOrderBookEntry>,
    #[serde(default)]
    pub sell: Vec<BittrexOrderBookEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BittrexMarketSummary {
    #[serde(rename = "MarketName")]
    pub market_name: String,
    #[serde(rename = "High")]
    pub high: Decimal,
    #[serde(rename = "Low")]
    pub low: Decimal,
    #[serde(rename = "Volume")]
    pub volume: Decimal,
    #[serde(rename = "Last")]
    pub last: Decimal,
    #[serde(rename = "BaseVolume")]
    pub base_volume: Decimal,
    #[serde(rename = "TimeStamp")]
    pub time_stamp: String,
    #[serde(rename = "Bid")]
    pub bid: Decimal,
    #[serde(rename = "Ask")]
    pub ask: Decimal,
    #[serde(rename = "OpenBuyOrders")]
    pub open_buy_orders: u64,
    #[serde(rename = "OpenSellOrders")]
    pub open_sell_orders: u64,
    #[serde(rename = "PrevDay")]
    pub prev_day: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexBalance {
    pub currency: String,
    pub balance: Decimal,
    pub available: Decimal,
    pub pending: Decimal,
    pub crypto_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexOpenOrder {
    pub order_uuid: String,
    pub exchange: String,
    pub order_type: String,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub limit: Decimal,
}

/// Single order looked up by uuid; the venue names the side field `Type`
/// here instead of `OrderType`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexOrder {
    pub order_uuid: String,
    pub exchange: String,
    #[serde(rename = "Type")]
    pub order_type: String,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub limit: Decimal,
    pub is_open: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexHistoricalOrder {
    pub order_uuid: String,
    pub exchange: String,
    pub order_type: String,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub limit: Decimal,
}

/// Receipt from order placement, cancellation and withdrawal endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct BittrexUuid {
    pub uuid: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexAddress {
    pub currency: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexWithdrawal {
    pub payment_uuid: String,
    pub currency: String,
    pub amount: Decimal,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexDeposit {
    pub id: u64,
    pub currency: String,
    pub amount: Decimal,
}
