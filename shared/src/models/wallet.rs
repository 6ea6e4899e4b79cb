//! Wallet Model

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance endpoint response: a bare number or `{"balance": n}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BalanceResponse {
    Plain(Decimal),
    Wrapped { balance: Decimal },
}

impl BalanceResponse {
    pub fn amount(self) -> Decimal {
        match self {
            Self::Plain(amount) | Self::Wrapped { balance: amount } => amount,
        }
    }
}

/// Balance transaction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Topup,
    Withdraw,
    #[serde(other)]
    Other,
}

/// Wallet history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// History endpoint response.
///
/// Servers without a transaction table answer with a placeholder object
/// instead of a list; that is treated as an empty history. A list with an
/// entry that does not decode is an error, not an empty history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WalletHistory {
    Entries(Vec<BalanceTransaction>),
    Unavailable(serde_json::Map<String, serde_json::Value>),
}

impl WalletHistory {
    pub fn into_entries(self) -> Vec<BalanceTransaction> {
        match self {
            Self::Entries(entries) => entries,
            Self::Unavailable(_) => Vec::new(),
        }
    }
}

/// Top-up / withdraw payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceUpdate {
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
