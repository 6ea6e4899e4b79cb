//! User Subscription Model (ownership record)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SubscriptionSummary;

/// Link between the viewer and a catalog subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSubscription {
    #[serde(default)]
    pub id: Option<i64>,
    pub subscription_id: i64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub subscription: Option<SubscriptionSummary>,
}

/// Assign ownership payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSubscriptionCreate {
    pub subscription_id: i64,
    pub auto_renew: bool,
}

/// Auto-renew toggle payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoRenewUpdate {
    pub enable: bool,
}

/// Auto-renew toggle response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoRenewStatus {
    pub subscription_id: i64,
    pub auto_renew: bool,
}
