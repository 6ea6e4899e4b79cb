//! Payments, refunds and auto-renew

use shared::models::{PaymentCreate, PaymentMethod, RefundRequest};

use super::*;
use crate::view::render::render_payments;
use crate::view::state::{PayForm, RefundForm};

impl<H: HttpClient, S: TokenStore> ViewController<H, S> {
    pub async fn load_payment_history(&mut self) {
        if self.session.role().is_none() {
            return;
        }
        match self.api.list_payments().await {
            Ok(payments) => self.view.payment_history = render_payments(&payments),
            Err(e) => self.surface(&e),
        }
    }

    /// Submit the pay form, then refresh balance and payment history
    pub async fn submit_payment(&mut self) -> ClientResult<()> {
        if let Err(e) = self.require_section(Section::PayForm) {
            return self.fail(e);
        }
        let payment = match payment_from_form(&self.view.forms.pay) {
            Ok(payment) => payment,
            Err(e) => return self.fail(e),
        };

        match self.api.create_payment(&payment).await {
            Ok(created) => {
                tracing::info!(
                    payment_id = created.id,
                    subscription_id = payment.subscription_id,
                    method = %payment.payment_method,
                    "Payment created"
                );
                self.view.forms.pay = PayForm::default();
                self.view.info("Payment successful");
                self.load_wallet().await;
                self.load_payment_history().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Submit the refund form, then refresh balance and payment history
    pub async fn submit_refund(&mut self) -> ClientResult<()> {
        if let Err(e) = self.require_section(Section::PaymentHistory) {
            return self.fail(e);
        }
        let form = &self.view.forms.refund;
        let parsed = parse_id(&form.payment_id, "Payment id").and_then(|payment_id| {
            let reason = optional_text(&form.reason).ok_or_else(|| {
                ClientError::Validation("Refund reason is required".to_string())
            })?;
            Ok((payment_id, RefundRequest { reason }))
        });
        let (payment_id, refund) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => return self.fail(e),
        };

        match self.api.refund_payment(payment_id, &refund).await {
            Ok(_) => {
                tracing::info!(payment_id, "Payment refunded");
                self.view.forms.refund = RefundForm::default();
                self.view.info("Refund successful");
                self.load_wallet().await;
                self.load_payment_history().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Toggle auto-renew on one of the viewer's subscriptions
    pub async fn set_auto_renew(&mut self, subscription_id: i64, enable: bool) -> ClientResult<()> {
        if let Err(e) = self.require_user() {
            return self.fail(e);
        }
        match self.api.set_auto_renew(subscription_id, enable).await {
            Ok(status) => {
                tracing::info!(subscription_id, auto_renew = status.auto_renew, "Auto-renew changed");
                self.view.info(if status.auto_renew {
                    "Auto-renew enabled"
                } else {
                    "Auto-renew disabled"
                });
                self.load_user_subscriptions().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }
}

fn payment_from_form(form: &PayForm) -> ClientResult<PaymentCreate> {
    let subscription_id = parse_id(&form.subscription_id, "Subscription id")?;
    let amount = parse_amount(&form.amount, "Amount")?;
    let payment_method = form
        .payment_method
        .parse::<PaymentMethod>()
        .map_err(|e| ClientError::Validation(e.to_string()))?;
    Ok(PaymentCreate {
        subscription_id,
        amount,
        payment_method,
    })
}
