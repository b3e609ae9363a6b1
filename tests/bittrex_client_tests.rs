mod support;

use coinwrap::core::errors::ExchangeError;
use coinwrap::core::traits::{AccountInfo, MarketDataSource, OrderPlacer};
use coinwrap::exchanges::bittrex::connector::{Account, MarketData, Trading};
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use support::MockRest;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[tokio::test]
async fn test_trade_history_depth_cap_rejected_before_any_request() {
    init_tracing();
    let rest = MockRest::new();
    let market = MarketData::new(rest.clone());

    let result = market.get_trade_history("eth-btc", 300).await;

    assert!(matches!(result, Err(ExchangeError::InvalidParameters(_))));
    assert!(rest.calls().is_empty(), "no network call may be attempted");
}

#[tokio::test]
async fn test_order_book_depth_cap_rejected_before_any_request() {
    let rest = MockRest::new();
    let market = MarketData::new(rest.clone());

    let result = market.get_order_book("eth-btc", 51).await;

    assert!(matches!(result, Err(ExchangeError::InvalidParameters(_))));
    assert!(rest.calls().is_empty());
}

#[tokio::test]
async fn test_invalid_pair_rejected_before_any_request() {
    let rest = MockRest::new();
    let market = MarketData::new(rest.clone());

    assert!(matches!(
        market.get_ticker("ethbtc").await,
        Err(ExchangeError::InvalidDelimiter(_))
    ));
    assert!(matches!(
        market.get_ticker("eth-doge").await,
        Err(ExchangeError::InvalidBaseCurrency(_))
    ));
    assert!(rest.calls().is_empty());
}

#[tokio::test]
async fn test_get_ticker_normalizes_fields() -> anyhow::Result<()> {
    let rest = MockRest::new().respond(
        "/public/getticker?market=btc-eth",
        json!({"success": true, "message": "", "result": {"Bid": 0.012, "Ask": 0.013, "Last": 0.0125}}),
    );
    let market = MarketData::new(rest);

    // canonical quote-base input is re-ordered to the venue's base-quote
    let ticker = market.get_ticker("eth-btc").await?;

    assert_eq!(ticker.bid, Decimal::from_str("0.012")?);
    assert_eq!(ticker.ask, Decimal::from_str("0.013")?);
    assert_eq!(ticker.last, Decimal::from_str("0.0125")?);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_ticker_requests_share_client() -> anyhow::Result<()> {
    let rest = MockRest::new().respond(
        "/public/getticker?market=btc-eth",
        json!({"success": true, "message": "", "result": {"Bid": 0.012, "Ask": 0.013, "Last": 0.0125}}),
    );
    let market = MarketData::new(rest.clone());

    let tickers =
        futures::future::try_join_all((0..4).map(|_| market.get_ticker("eth-btc"))).await?;

    assert_eq!(tickers.len(), 4);
    assert_eq!(rest.calls().len(), 4);
    Ok(())
}

#[tokio::test]
async fn test_get_trade_history_normalizes_and_truncates() -> anyhow::Result<()> {
    let rest = MockRest::new().respond(
        "/public/getmarkethistory?market=btc-eth",
        json!({"success": true, "message": "", "result": [
            {"Id": 41, "TimeStamp": "2021-01-01T00:00:00", "Quantity": 1.0,
             "Price": 0.011, "OrderType": "SELL"},
            {"Id": 42, "TimeStamp": "2021-01-01T00:00:00.500", "Quantity": 2.0,
             "Price": 1.0, "OrderType": "BUY"}
        ]}),
    );
    let market = MarketData::new(rest);

    let trades = market.get_trade_history("eth-btc", 1).await?;

    // depth 1 keeps only the most recent (last) venue entry
    assert_eq!(trades.len(), 1);
    let trade = &trades[0];
    assert_eq!(trade.trade_id, 42);
    assert!(!trade.is_sale);
    assert_eq!(trade.rate, Decimal::from_str("1.0")?);
    assert_eq!(trade.amount, Decimal::from_str("2.0")?);
    Ok(())
}

#[tokio::test]
async fn test_get_order_book_preserves_ordering() -> anyhow::Result<()> {
    let rest = MockRest::new().respond(
        "/public/getorderbook?market=btc-eth&type=both&depth=2",
        json!({"success": true, "message": "", "result": {
            "buy": [{"Rate": 0.012, "Quantity": 10.0}, {"Rate": 0.011, "Quantity": 5.0}],
            "sell": [{"Rate": 0.013, "Quantity": 3.0}, {"Rate": 0.014, "Quantity": 7.0}]
        }}),
    );
    let market = MarketData::new(rest);

    let book = market.get_order_book("eth-btc", 2).await?;

    assert_eq!(book.bids[0].price, Decimal::from_str("0.012")?);
    assert_eq!(book.asks[0].price, Decimal::from_str("0.013")?);
    assert_eq!(book.asks[1].quantity, Decimal::from_str("7.0")?);
    Ok(())
}

#[tokio::test]
async fn test_get_markets_inverts_to_quote_base() -> anyhow::Result<()> {
    let rest = MockRest::new().respond(
        "/public/getmarkets",
        json!({"success": true, "message": "", "result": [
            {"MarketCurrency": "ETH", "BaseCurrency": "BTC", "MarketName": "BTC-ETH",
             "IsActive": true, "MinTradeSize": 0.001},
            {"MarketCurrency": "XRP", "BaseCurrency": "USDT", "MarketName": "USDT-XRP",
             "IsActive": true, "MinTradeSize": 1.0}
        ]}),
    );
    let market = MarketData::new(rest);

    let pairs = market.get_markets().await?;

    assert_eq!(pairs[0].to_string(), "eth-btc");
    assert_eq!(pairs[1].to_string(), "xrp-usdt");
    Ok(())
}

#[tokio::test]
async fn test_verify_base_currencies_detects_drift() {
    let rest = MockRest::new().respond(
        "/public/getmarkets",
        json!({"success": true, "message": "", "result": [
            {"MarketCurrency": "ETH", "BaseCurrency": "BTC", "MarketName": "BTC-ETH",
             "IsActive": true, "MinTradeSize": 0.001},
            {"MarketCurrency": "XRP", "BaseCurrency": "USD", "MarketName": "USD-XRP",
             "IsActive": true, "MinTradeSize": 1.0}
        ]}),
    );
    let market = MarketData::new(rest);

    match market.verify_base_currencies().await {
        Err(ExchangeError::OutdatedBaseCurrencies { actual, hardcoded }) => {
            assert_eq!(actual, vec!["btc".to_string(), "usd".to_string()]);
            assert_eq!(
                hardcoded,
                vec!["btc".to_string(), "eth".to_string(), "usdt".to_string()]
            );
        }
        other => panic!("expected OutdatedBaseCurrencies, got {:?}", other),
    }
}

#[tokio::test]
async fn test_envelope_failure_surfaces_venue_message() {
    let rest = MockRest::new().respond(
        "/public/getticker?market=btc-eth",
        json!({"success": false, "message": "INVALID_MARKET", "result": null}),
    );
    let market = MarketData::new(rest);

    match market.get_ticker("eth-btc").await {
        Err(ExchangeError::ApiError { message }) => assert_eq!(message, "INVALID_MARKET"),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_market_depth_sums_book_sides() -> anyhow::Result<()> {
    let rest = MockRest::new().respond(
        "/public/getorderbook?market=btc-eth&type=both&depth=50",
        json!({"success": true, "message": "", "result": {
            "buy": [{"Rate": 2.0, "Quantity": 3.0}, {"Rate": 1.0, "Quantity": 4.0}],
            "sell": [{"Rate": 5.0, "Quantity": 6.0}]
        }}),
    );
    let market = MarketData::new(rest);

    let depth = market.get_market_depth("eth-btc").await?;

    // bids: 2*3 + 1*4 = 10 (base value), asks: 6 (quantity)
    assert_eq!(depth.bids, Decimal::from(10));
    assert_eq!(depth.asks, Decimal::from(6));
    Ok(())
}

#[tokio::test]
async fn test_buy_limit_returns_order_receipt() -> anyhow::Result<()> {
    let rest = MockRest::new().respond(
        "/market/buylimit?market=btc-eth&quantity=2&rate=0.01",
        json!({"success": true, "message": "", "result": {"uuid": "614c34e4-8d71"}}),
    );
    let trading = Trading::new(rest);

    let receipt = trading
        .buy_limit(
            "eth-btc",
            Decimal::from_str("0.01")?,
            Decimal::from_str("2")?,
        )
        .await?;

    assert_eq!(receipt.order_id, "614c34e4-8d71");
    Ok(())
}

#[tokio::test]
async fn test_cancel_all_orders_reports_per_order_outcomes() -> anyhow::Result<()> {
    let rest = MockRest::new()
        .respond(
            "/market/getopenorders",
            json!({"success": true, "message": "", "result": [
                {"OrderUuid": "aaa", "Exchange": "BTC-ETH", "OrderType": "LIMIT_SELL",
                 "Quantity": 1.0, "QuantityRemaining": 1.0, "Limit": 0.02},
                {"OrderUuid": "bbb", "Exchange": "BTC-ETH", "OrderType": "LIMIT_BUY",
                 "Quantity": 2.0, "QuantityRemaining": 0.5, "Limit": 0.01}
            ]}),
        )
        .respond(
            "/market/cancel?uuid=aaa",
            json!({"success": true, "message": "", "result": null}),
        )
        .respond(
            "/market/cancel?uuid=bbb",
            json!({"success": false, "message": "ORDER_NOT_OPEN", "result": null}),
        );
    let trading = Trading::new(rest);

    let outcomes = trading.cancel_all_orders().await?;

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].order_id, "aaa");
    assert!(outcomes[0].result.is_ok());
    assert_eq!(outcomes[1].order_id, "bbb");
    assert!(matches!(
        outcomes[1].result,
        Err(ExchangeError::ApiError { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_get_balances_filters_zero_entries() -> anyhow::Result<()> {
    let rest = MockRest::new().respond(
        "/account/getbalances",
        json!({"success": true, "message": "", "result": [
            {"Currency": "BTC", "Balance": 0, "Available": 0, "Pending": 0,
             "CryptoAddress": null},
            {"Currency": "ETH", "Balance": 1.5, "Available": 1.0, "Pending": 0.5,
             "CryptoAddress": "0xabc"}
        ]}),
    );
    let account = Account::new(rest);

    let balances = account.get_balances().await?;

    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].currency, "ETH");
    Ok(())
}

#[tokio::test]
async fn test_get_deposit_address_uppercases_currency() -> anyhow::Result<()> {
    let rest = MockRest::new().respond(
        "/account/getdepositaddress?currency=BTC",
        json!({"success": true, "message": "", "result":
            {"Currency": "BTC", "Address": "1BQLNJtMDKmMZ4PyqVFfRuBNvoGhjigBKF"}}),
    );
    let account = Account::new(rest.clone());

    let address = account.get_deposit_address("btc").await?;

    assert_eq!(address.currency, "BTC");
    assert_eq!(address.address, "1BQLNJtMDKmMZ4PyqVFfRuBNvoGhjigBKF");
    assert_eq!(rest.calls(), vec!["/account/getdepositaddress?currency=BTC"]);
    Ok(())
}
