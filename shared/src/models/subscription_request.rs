//! Subscription Request Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// A regular user's ask for admin-granted access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub id: i64,
    pub user_id: i64,
    pub subscription_id: i64,
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl SubscriptionRequest {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

/// Create request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRequestCreate {
    pub subscription_id: i64,
}
