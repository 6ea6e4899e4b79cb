//! Subscription Model (catalog item)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub duration_days: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create subscription payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionCreate {
    pub name: String,
    pub price: Decimal,
    pub duration_days: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update subscription payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i32>,
}

/// Subscription fields nested inside an ownership record.
///
/// Only the fields the client displays; everything is optional since the
/// nested object is not guaranteed to be present or complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_catalog_entry_integer_price() {
        let sub: Subscription = serde_json::from_str(
            r#"{"id":1,"name":"Basic","price":299,"duration_days":30}"#,
        )
        .unwrap();
        assert_eq!(sub.price, Decimal::from(299));
        assert!(sub.is_active);
        assert!(sub.description.is_none());
    }

    #[test]
    fn test_update_skips_missing_fields() {
        let update = SubscriptionUpdate {
            name: Some("Gold".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({"name": "Gold"}));
    }

    #[test]
    fn test_create_price_serializes_as_number() {
        let create = SubscriptionCreate {
            name: "Gold".into(),
            price: Decimal::from_str("499.90").unwrap(),
            duration_days: 90,
            description: None,
        };
        let value = serde_json::to_value(&create).unwrap();
        let price = value["price"].as_f64().unwrap();
        assert!((price - 499.9).abs() < 1e-9);
        assert!(value.get("description").is_none());
    }
}
