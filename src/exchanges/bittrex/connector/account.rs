use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::AccountInfo;
use crate::core::types::{
    Balance, DepositAddress, DepositRecord, OrderInfo, OrderReceipt, WithdrawalRecord,
};
use crate::exchanges::bittrex::conversions::{
    convert_balances, convert_deposit, convert_deposit_address, convert_historical_order,
    convert_order, convert_withdrawal,
};
use crate::exchanges::bittrex::rest::BittrexRestClient;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Account operations for Bittrex
pub struct Account<R: RestClient> {
    rest: BittrexRestClient<R>,
}

impl<R: RestClient> Account<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: BittrexRestClient::new(rest),
        }
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        let balances = self.rest.get_balances().await?;
        Ok(convert_balances(balances))
    }

    async fn get_deposit_address(&self, currency: &str) -> Result<DepositAddress, ExchangeError> {
        let address = self
            .rest
            .get_deposit_address(&currency.to_uppercase())
            .await?;
        Ok(convert_deposit_address(&address))
    }

    async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<OrderReceipt, ExchangeError> {
        let receipt = self
            .rest
            .withdraw(&currency.to_uppercase(), amount, address)
            .await?;
        Ok(OrderReceipt {
            order_id: receipt.uuid,
        })
    }

    async fn get_order(&self, order_id: &str) -> Result<OrderInfo, ExchangeError> {
        let order = self.rest.get_order(order_id).await?;
        Ok(convert_order(&order))
    }

    async fn get_order_history(&self) -> Result<Vec<OrderInfo>, ExchangeError> {
        let orders = self.rest.get_order_history().await?;
        Ok(orders.iter().map(convert_historical_order).collect())
    }

    async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<WithdrawalRecord>, ExchangeError> {
        let currency = currency.map(str::to_uppercase);
        let withdrawals = self
            .rest
            .get_withdrawal_history(currency.as_deref())
            .await?;
        Ok(withdrawals.iter().map(convert_withdrawal).collect())
    }

    async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<DepositRecord>, ExchangeError> {
        let currency = currency.map(str::to_uppercase);
        let deposits = self.rest.get_deposit_history(currency.as_deref()).await?;
        Ok(deposits.iter().map(convert_deposit).collect())
    }
}
