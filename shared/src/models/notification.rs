//! Notification Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// User notification (payment, refund, subscription events)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
