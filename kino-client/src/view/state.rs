//! View state
//!
//! Everything a front end needs to draw the page: which sections are
//! visible, the rendered lists, the form fields and pending notices.
//! Form fields hold raw user input as typed; handlers parse them on submit.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use shared::models::{PaymentMethod, Role};

use super::capability::{self, CatalogAction};

/// Toggleable page region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    LoginForm,
    RegisterForm,
    LogoutButton,
    AdminPanel,
    RequestQueue,
    WalletSection,
    PaymentHistory,
    PayForm,
    Subscriptions,
    ActiveSubscriptions,
    Notifications,
}

/// Message for the user. `Error` notices carry the server detail verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// One rendered catalog entry with its buttons
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub subscription_id: i64,
    pub price: Decimal,
    pub label: String,
    pub actions: Vec<CatalogAction>,
}

impl CatalogItem {
    pub fn offers(&self, action: CatalogAction) -> bool {
        self.actions.contains(&action)
    }
}

/// One pending request with approve/reject controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRow {
    pub request_id: i64,
    pub label: String,
}

/// Admin request queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestQueueView {
    #[default]
    NotLoaded,
    /// The server returned no requests at all
    Empty,
    /// Requests exist, none of them pending
    NoPending,
    Pending(Vec<RequestRow>),
}

impl RequestQueueView {
    pub const EMPTY_TEXT: &'static str = "No requests";
    pub const NO_PENDING_TEXT: &'static str = "No new requests";

    /// Placeholder list item for the two empty states
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(Self::EMPTY_TEXT),
            Self::NoPending => Some(Self::NO_PENDING_TEXT),
            Self::NotLoaded | Self::Pending(_) => None,
        }
    }

    pub fn rows(&self) -> &[RequestRow] {
        match self {
            Self::Pending(rows) => rows,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    pub notification_id: i64,
    pub is_read: bool,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Top-up and withdraw share the same fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletForm {
    pub amount: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayForm {
    pub subscription_id: String,
    pub amount: String,
    pub payment_method: String,
}

impl Default for PayForm {
    fn default() -> Self {
        Self {
            subscription_id: String::new(),
            amount: String::new(),
            payment_method: PaymentMethod::default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundForm {
    pub payment_id: String,
    pub reason: String,
}

/// Admin panel form for new catalog entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionForm {
    pub name: String,
    pub price: String,
    pub duration_days: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    pub login: LoginForm,
    pub register: RegisterForm,
    pub topup: WalletForm,
    pub withdraw: WalletForm,
    pub pay: PayForm,
    pub refund: RefundForm,
    pub create_subscription: SubscriptionForm,
}

/// Whole-page state
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    visible: BTreeSet<Section>,
    pub user_name: Option<String>,
    pub catalog: Vec<CatalogItem>,
    pub active_subscriptions: Vec<String>,
    pub balance: Option<String>,
    pub wallet_history: Vec<String>,
    pub payment_history: Vec<String>,
    pub requests: RequestQueueView,
    pub notifications: Vec<NotificationItem>,
    pub forms: Forms,
    /// Inline slot under the login form
    pub login_error: Option<String>,
    notices: Vec<Notice>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::signed_out()
    }
}

impl ViewState {
    /// Fresh logged-out page: login and register forms only
    pub fn signed_out() -> Self {
        Self {
            visible: capability::signed_out_sections(),
            user_name: None,
            catalog: Vec::new(),
            active_subscriptions: Vec::new(),
            balance: None,
            wallet_history: Vec::new(),
            payment_history: Vec::new(),
            requests: RequestQueueView::NotLoaded,
            notifications: Vec::new(),
            forms: Forms::default(),
            login_error: None,
            notices: Vec::new(),
        }
    }

    /// Switch to the signed-in layout for `role`
    pub fn show_signed_in(&mut self, role: Role, user_name: &str) {
        self.visible = capability::signed_in_sections(role);
        self.user_name = Some(user_name.to_string());
        self.login_error = None;
        self.forms.login = LoginForm::default();
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.contains(&section)
    }

    pub fn show(&mut self, section: Section) {
        self.visible.insert(section);
    }

    pub fn hide(&mut self, section: Section) {
        self.visible.remove(&section);
    }

    pub fn visible_sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.visible.iter().copied()
    }

    pub fn catalog_item(&self, subscription_id: i64) -> Option<&CatalogItem> {
        self.catalog
            .iter()
            .find(|item| item.subscription_id == subscription_id)
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.notify(Notice::Info(text.into()));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notify(Notice::Error(text.into()));
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hand pending notices to the front end
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
