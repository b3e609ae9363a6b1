use crate::core::errors::ExchangeError;
use crate::core::types::{
    Balance, DepositAddress, DepositRecord, MarketSummary, OpenOrder, OrderBook, OrderBookLevel,
    OrderInfo, Pair, Ticker, Trade, WithdrawalRecord,
};
use crate::exchanges::bittrex::pair::parse_market_name;
use crate::exchanges::bittrex::types::{
    BittrexAddress, BittrexBalance, BittrexDeposit, BittrexHistoricalOrder, BittrexMarket,
    BittrexMarketSummary, BittrexOpenOrder, BittrexOrder, BittrexOrderBook, BittrexTicker,
    BittrexTrade, BittrexWithdrawal,
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Classify a venue trade-direction value as sell-side.
pub fn is_sale(order_type: &str) -> bool {
    order_type.to_uppercase().contains("SELL")
}

/// Parse the venue's ISO timestamp.
///
/// The venue emits sub-second precision only when it is nonzero, so the
/// millisecond format is tried first with a second-precision fallback.
pub fn parse_timestamp(ts: &str) -> Result<NaiveDateTime, ExchangeError> {
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| {
            ExchangeError::DeserializationError(format!("Unparseable timestamp '{}': {}", ts, e))
        })
}

/// Normalize the ticker's capitalized fields to the lowercase convention.
pub fn convert_ticker(ticker: &BittrexTicker) -> Ticker {
    Ticker {
        bid: ticker.bid,
        ask: ticker.ask,
        last: ticker.last,
    }
}

pub fn convert_trade(trade: &BittrexTrade) -> Result<Trade, ExchangeError> {
    Ok(Trade {
        timestamp: parse_timestamp(&trade.time_stamp)?,
        is_sale: is_sale(&trade.order_type),
        rate: trade.price,
        amount: trade.quantity,
        trade_id: trade.id,
    })
}

pub fn convert_trade_history(trades: &[BittrexTrade]) -> Result<Vec<Trade>, ExchangeError> {
    trades.iter().map(convert_trade).collect()
}

/// Map the venue book to `[price, quantity]` levels.
///
/// Venue ordering is preserved as-is: the venue already returns both sides
/// closest-to-spread first, and re-sorting direction differs by venue.
pub fn convert_order_book(book: &BittrexOrderBook) -> OrderBook {
    let level = |entry: &crate::exchanges::bittrex::types::BittrexOrderBookEntry| OrderBookLevel {
        price: entry.rate,
        quantity: entry.quantity,
    };

    OrderBook {
        bids: book.buy.iter().map(level).collect(),
        asks: book.sell.iter().map(level).collect(),
    }
}

/// Invert venue `base-quote` market names into canonical quote-base pairs.
pub fn convert_markets(markets: &[BittrexMarket]) -> Result<Vec<Pair>, ExchangeError> {
    markets
        .iter()
        .map(|market| parse_market_name(&market.market_name.to_lowercase()))
        .collect()
}

/// Keep only entries with a strictly positive balance.
pub fn convert_balances(balances: Vec<BittrexBalance>) -> Vec<Balance> {
    balances
        .into_iter()
        .filter(|balance| balance.balance > Decimal::ZERO)
        .map(|balance| Balance {
            currency: balance.currency,
            balance: balance.balance,
            available: balance.available,
            pending: balance.pending,
        })
        .collect()
}

pub fn convert_market_summary(summary: &BittrexMarketSummary) -> MarketSummary {
    MarketSummary {
        high: summary.high,
        low: summary.low,
        volume: summary.volume,
        last: summary.last,
        base_volume: summary.base_volume,
        bid: summary.bid,
        ask: summary.ask,
        open_buy_orders: summary.open_buy_orders,
        open_sell_orders: summary.open_sell_orders,
        prev_day: summary.prev_day,
    }
}

pub fn convert_open_order(order: &BittrexOpenOrder) -> OpenOrder {
    OpenOrder {
        order_id: order.order_uuid.clone(),
        pair: order.exchange.to_lowercase(),
        is_sale: is_sale(&order.order_type),
        rate: order.limit,
        amount: order.quantity,
        amount_remaining: order.quantity_remaining,
    }
}

pub fn convert_order(order: &BittrexOrder) -> OrderInfo {
    OrderInfo {
        order_id: order.order_uuid.clone(),
        pair: order.exchange.to_lowercase(),
        order_type: order.order_type.clone(),
        rate: order.limit,
        amount: order.quantity,
        amount_remaining: order.quantity_remaining,
        is_open: order.is_open,
    }
}

pub fn convert_historical_order(order: &BittrexHistoricalOrder) -> OrderInfo {
    OrderInfo {
        order_id: order.order_uuid.clone(),
        pair: order.exchange.to_lowercase(),
        order_type: order.order_type.clone(),
        rate: order.limit,
        amount: order.quantity,
        amount_remaining: order.quantity_remaining,
        is_open: false,
    }
}

pub fn convert_deposit_address(address: &BittrexAddress) -> DepositAddress {
    DepositAddress {
        currency: address.currency.clone(),
        address: address.address.clone(),
    }
}

pub fn convert_withdrawal(withdrawal: &BittrexWithdrawal) -> WithdrawalRecord {
    WithdrawalRecord {
        withdrawal_id: withdrawal.payment_uuid.clone(),
        currency: withdrawal.currency.clone(),
        amount: withdrawal.amount,
        address: withdrawal.address.clone(),
    }
}

pub fn convert_deposit(deposit: &BittrexDeposit) -> DepositRecord {
    DepositRecord {
        deposit_id: deposit.id,
        currency: deposit.currency.clone(),
        amount: deposit.amount,
    }
}
