//! ViewController - session, API and page state in one place
//!
//! Loaders (`load_*`) fetch one resource and redraw its part of the page;
//! failures become notices. Action handlers (`submit_*` and the catalog
//! actions) perform one mutation, refresh what it touched, and return the
//! error as well as surfacing it.
//!
//! Every method takes `&mut self`, so session and view writes never overlap.

mod auth;
mod catalog;
mod notifications;
mod payments;
mod requests;
mod wallet;

pub use auth::{LOGIN_FAILED, REGISTERED};

use std::str::FromStr;

use rust_decimal::Decimal;
use shared::models::Role;

use crate::api::Api;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, NetworkHttpClient};
use crate::session::{FileTokenStore, Session, TokenStore};
use crate::view::{CatalogAction, Prompter, Section, ViewState};

/// Page controller
pub struct ViewController<H = NetworkHttpClient, S = FileTokenStore> {
    api: Api<H>,
    session: Session<S>,
    view: ViewState,
}

impl ViewController {
    /// Network client and file token store, both from `config`
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        Ok(Self::new(
            Api::new(http, config.backend),
            FileTokenStore::new(&config.token_file),
        ))
    }
}

impl<H: HttpClient, S: TokenStore> ViewController<H, S> {
    pub fn new(api: Api<H>, store: S) -> Self {
        Self {
            api,
            session: Session::new(store),
            view: ViewState::signed_out(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable page state, for front ends filling in form fields
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn api(&self) -> &Api<H> {
        &self.api
    }

    /// Start-up: restore a stored token and validate it against the profile
    /// endpoint.
    ///
    /// A rejected token is cleared. A token that could not be checked
    /// because the server was unreachable is kept for the next start.
    pub async fn bootstrap(&mut self) {
        self.view = ViewState::signed_out();
        self.api.set_token(None);

        let token = match self.session.restore() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored token");
                self.view.error(ClientError::from(e).user_message());
                None
            }
        };
        let Some(token) = token else {
            tracing::debug!("No stored token, showing login");
            return;
        };

        self.api.set_token(Some(token));
        match self.api.me().await {
            Ok(user) => {
                tracing::info!(username = %user.username, role = ?user.role, "Session restored");
                self.session.set_user(user);
                self.render_signed_in().await;
            }
            Err(e) if e.is_rejection() => {
                tracing::info!(error = %e, "Stored token rejected, clearing it");
                self.drop_session();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not validate stored token");
                self.api.set_token(None);
                self.view.login_error = Some(e.user_message());
            }
        }
    }

    /// Post-login page: shared sections plus exactly one role branch
    pub async fn render_signed_in(&mut self) {
        let Some(user) = self.session.user() else {
            return;
        };
        let role = user.role;
        let username = user.username.clone();
        self.view.show_signed_in(role, &username);

        self.load_subscriptions().await;
        self.load_user_subscriptions().await;

        match role {
            Role::Admin => {
                self.load_subscription_requests().await;
            }
            Role::Regular => {
                self.load_wallet().await;
                self.load_payment_history().await;
                self.load_notifications().await;
            }
        }
    }

    /// Press a catalog button. Only buttons the rendered item offers are
    /// accepted.
    pub async fn activate(
        &mut self,
        subscription_id: i64,
        action: CatalogAction,
        prompter: &mut dyn Prompter,
    ) -> ClientResult<()> {
        let offered = self
            .view
            .catalog_item(subscription_id)
            .is_some_and(|item| item.offers(action));
        if !offered {
            return self.fail(ClientError::Validation(format!(
                "\"{}\" is not available for subscription #{subscription_id}",
                action.label()
            )));
        }

        tracing::debug!(subscription_id, ?action, "Catalog action");
        match action {
            CatalogAction::Edit => self.edit_subscription(subscription_id, prompter).await,
            CatalogAction::Delete => self.delete_subscription(subscription_id, prompter).await,
            CatalogAction::AssignToSelf => self.assign_subscription(subscription_id).await,
            CatalogAction::RequestAccess => self.request_access(subscription_id).await,
            CatalogAction::Pay => self.select_for_payment(subscription_id),
        }
    }

    /// Role of the logged-in user, or `NotAuthenticated`
    fn require_user(&self) -> ClientResult<Role> {
        self.session.role().ok_or(ClientError::NotAuthenticated)
    }

    /// Logged in, and `section` is part of the current page
    fn require_section(&self, section: Section) -> ClientResult<Role> {
        let role = self.require_user()?;
        if !self.view.is_visible(section) {
            return Err(ClientError::Validation(format!(
                "{section:?} is not available on this page"
            )));
        }
        Ok(role)
    }

    /// Forget token and user and reset the page
    fn drop_session(&mut self) {
        if let Err(e) = self.session.end() {
            tracing::warn!(error = %e, "Failed to clear stored token");
        }
        self.api.set_token(None);
        self.view = ViewState::signed_out();
    }

    /// Show a failure to the user
    fn surface(&mut self, err: &ClientError) {
        tracing::warn!(error = %err, "Request failed");
        self.view.error(err.user_message());
    }

    fn fail<T>(&mut self, err: ClientError) -> ClientResult<T> {
        self.surface(&err);
        Err(err)
    }
}

/// Positive decimal from a form field
pub(crate) fn parse_amount(raw: &str, field: &str) -> ClientResult<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ClientError::Validation(format!("{field} is required")));
    }
    let value = Decimal::from_str(raw)
        .map_err(|_| ClientError::Validation(format!("{field} must be a number")))?;
    if value <= Decimal::ZERO {
        return Err(ClientError::Validation(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(value)
}

/// Record id from a form field
pub(crate) fn parse_id(raw: &str, field: &str) -> ClientResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ClientError::Validation(format!("{field} is required")));
    }
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ClientError::Validation(format!("{field} must be a positive whole number")))
}

/// Duration in days from a form field or prompt
pub(crate) fn parse_days(raw: &str) -> ClientResult<i32> {
    let raw = raw.trim();
    raw.parse::<i32>()
        .ok()
        .filter(|days| *days > 0)
        .ok_or_else(|| {
            ClientError::Validation("Duration must be a positive number of days".to_string())
        })
}

/// Trimmed text, `None` when blank
pub(crate) fn optional_text(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}
