//! Wallet balance, history, top-up and withdraw

use shared::models::BalanceUpdate;

use super::*;
use crate::view::render::{format_money, render_wallet_history, CURRENCY};
use crate::view::state::WalletForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalletOp {
    Topup,
    Withdraw,
}

impl<H: HttpClient, S: TokenStore> ViewController<H, S> {
    /// Redraw balance, then history
    pub async fn load_wallet(&mut self) {
        if self.session.role().is_none() {
            return;
        }

        match self.api.wallet_balance().await {
            Ok(balance) => {
                self.view.balance = Some(format!("{}{CURRENCY}", format_money(balance)));
            }
            Err(e) => self.surface(&e),
        }

        match self.api.wallet_history().await {
            Ok(entries) => self.view.wallet_history = render_wallet_history(&entries),
            Err(e) => self.surface(&e),
        }
    }

    pub async fn submit_topup(&mut self) -> ClientResult<()> {
        self.submit_wallet(WalletOp::Topup).await
    }

    pub async fn submit_withdraw(&mut self) -> ClientResult<()> {
        self.submit_wallet(WalletOp::Withdraw).await
    }

    /// On failure the form keeps what the user typed
    async fn submit_wallet(&mut self, op: WalletOp) -> ClientResult<()> {
        if let Err(e) = self.require_section(Section::WalletSection) {
            return self.fail(e);
        }
        let form = match op {
            WalletOp::Topup => &self.view.forms.topup,
            WalletOp::Withdraw => &self.view.forms.withdraw,
        };
        let update = match parse_amount(&form.amount, "Amount") {
            Ok(amount) => BalanceUpdate {
                amount,
                description: optional_text(&form.description),
            },
            Err(e) => return self.fail(e),
        };

        let result = match op {
            WalletOp::Topup => self.api.topup(&update).await,
            WalletOp::Withdraw => self.api.withdraw(&update).await,
        };
        match result {
            Ok(()) => {
                tracing::info!(op = ?op, amount = %update.amount, "Wallet updated");
                let (form, message) = match op {
                    WalletOp::Topup => (&mut self.view.forms.topup, "Balance topped up"),
                    WalletOp::Withdraw => (&mut self.view.forms.withdraw, "Funds withdrawn"),
                };
                *form = WalletForm::default();
                self.view.info(message);
                self.load_wallet().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }
}
