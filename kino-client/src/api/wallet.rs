//! Wallet endpoints

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use shared::models::{BalanceResponse, BalanceTransaction, BalanceUpdate, WalletHistory};

use super::Api;
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> Api<H> {
    pub async fn wallet_balance(&self) -> ClientResult<Decimal> {
        let balance: BalanceResponse = self.http.get("/wallet/balance").await?;
        Ok(balance.amount())
    }

    pub async fn wallet_history(&self) -> ClientResult<Vec<BalanceTransaction>> {
        let history: WalletHistory = self.http.get("/wallet/history").await?;
        Ok(history.into_entries())
    }

    pub async fn topup(&self, update: &BalanceUpdate) -> ClientResult<()> {
        let _: IgnoredAny = self.http.post("/wallet/topup", update).await?;
        Ok(())
    }

    pub async fn withdraw(&self, update: &BalanceUpdate) -> ClientResult<()> {
        let _: IgnoredAny = self.http.post("/wallet/withdraw", update).await?;
        Ok(())
    }
}
