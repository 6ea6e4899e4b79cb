//! Payment endpoints

use shared::models::{AutoRenewStatus, AutoRenewUpdate, Payment, PaymentCreate, RefundRequest};

use super::Api;
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> Api<H> {
    /// The viewer's payments
    pub async fn list_payments(&self) -> ClientResult<Vec<Payment>> {
        self.http.get("/payments/").await
    }

    pub async fn create_payment(&self, payment: &PaymentCreate) -> ClientResult<Payment> {
        self.http.post("/payments/", payment).await
    }

    pub async fn refund_payment(
        &self,
        payment_id: i64,
        refund: &RefundRequest,
    ) -> ClientResult<Payment> {
        self.http
            .post(&format!("/payments/{payment_id}/refund"), refund)
            .await
    }

    pub async fn set_auto_renew(
        &self,
        subscription_id: i64,
        enable: bool,
    ) -> ClientResult<AutoRenewStatus> {
        self.http
            .patch(
                &format!("/payments/subscriptions/{subscription_id}/auto-renew"),
                &AutoRenewUpdate { enable },
            )
            .await
    }
}
