use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::OrderPlacer;
use crate::core::types::{CancelOutcome, OpenOrder, OrderReceipt};
use crate::exchanges::bittrex::conversions::convert_open_order;
use crate::exchanges::bittrex::pair::format_pair_normalized;
use crate::exchanges::bittrex::rest::BittrexRestClient;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trading operations for Bittrex
pub struct Trading<R: RestClient> {
    rest: BittrexRestClient<R>,
}

impl<R: RestClient> Trading<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: BittrexRestClient::new(rest),
        }
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for Trading<R> {
    async fn buy_limit(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<OrderReceipt, ExchangeError> {
        let market = format_pair_normalized(pair)?;
        let receipt = self.rest.buy_limit(&market, rate, amount).await?;
        Ok(OrderReceipt {
            order_id: receipt.uuid,
        })
    }

    async fn sell_limit(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<OrderReceipt, ExchangeError> {
        let market = format_pair_normalized(pair)?;
        let receipt = self.rest.sell_limit(&market, rate, amount).await?;
        Ok(OrderReceipt {
            order_id: receipt.uuid,
        })
    }

    async fn cancel_order(&self, order_id: &str) -> Result<(), ExchangeError> {
        self.rest.cancel(order_id).await
    }

    async fn cancel_all_orders(&self) -> Result<Vec<CancelOutcome>, ExchangeError> {
        let orders = self.get_open_orders(None).await?;

        // One request per order; a failure does not stop the sweep.
        let mut outcomes = Vec::with_capacity(orders.len());
        for order in orders {
            let result = self.rest.cancel(&order.order_id).await;
            outcomes.push(CancelOutcome {
                order_id: order.order_id,
                result,
            });
        }

        Ok(outcomes)
    }

    async fn get_open_orders(&self, pair: Option<&str>) -> Result<Vec<OpenOrder>, ExchangeError> {
        let market = pair.map(format_pair_normalized).transpose()?;
        let orders = self.rest.get_open_orders(market.as_deref()).await?;
        Ok(orders.iter().map(convert_open_order).collect())
    }
}
