//! Payment Model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Supported payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Debit the wallet balance
    #[default]
    Balance,
    Card,
    Yoomoney,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Balance, Self::Card, Self::Yoomoney];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Card => "card",
            Self::Yoomoney => "yoomoney",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPaymentMethod(wanted.to_string()))
    }
}

/// Payment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub subscription_id: i64,
    pub amount: Decimal,
    /// Kept as the raw server string, new methods must still render
    pub payment_method: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_refunded: bool,
    #[serde(default)]
    pub refund_reason: Option<String>,
}

/// Submit payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub subscription_id: i64,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
}

/// Refund payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    pub reason: String,
}
