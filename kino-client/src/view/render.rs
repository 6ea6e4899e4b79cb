//! Pure renderers: records in, view descriptions out

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use shared::models::{
    BalanceTransaction, Notification, Payment, Subscription, SubscriptionRequest,
    TransactionType, UserSubscription,
};

use super::capability::Viewer;
use super::state::{CatalogItem, NotificationItem, RequestQueueView, RequestRow};

pub const CURRENCY: &str = "₽";

pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

fn format_timestamp(at: Option<NaiveDateTime>) -> Option<String> {
    at.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
}

/// Catalog items with the buttons the capability table grants `viewer`
pub fn render_catalog(subscriptions: &[Subscription], viewer: &Viewer) -> Vec<CatalogItem> {
    subscriptions
        .iter()
        .map(|sub| CatalogItem {
            subscription_id: sub.id,
            price: sub.price,
            label: format!(
                "{} - {}{} for {} days",
                sub.name,
                format_money(sub.price),
                CURRENCY,
                sub.duration_days
            ),
            actions: viewer.actions_for(sub.id).to_vec(),
        })
        .collect()
}

/// Active ownership records only
pub fn render_active_subscriptions(records: &[UserSubscription]) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.is_active)
        .map(|r| {
            let name = r
                .subscription
                .as_ref()
                .and_then(|s| s.name.as_deref())
                .filter(|n| !n.is_empty())
                .unwrap_or("Untitled");
            let until = r
                .end_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "∞".to_string());
            let mut line = format!("Subscription: {name}, until {until}");
            if r.auto_renew {
                line.push_str(" (auto-renew)");
            }
            line
        })
        .collect()
}

pub fn render_wallet_history(entries: &[BalanceTransaction]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let sign = match entry.kind {
                TransactionType::Topup => "+",
                TransactionType::Withdraw => "-",
                TransactionType::Other => "~",
            };
            let mut line = format!(
                "{sign} {}{CURRENCY} - {}",
                format_money(entry.amount),
                entry.description.as_deref().unwrap_or("")
            );
            if let Some(at) = format_timestamp(entry.created_at) {
                line.push_str(&format!(" ({at})"));
            }
            line
        })
        .collect()
}

pub fn render_payments(payments: &[Payment]) -> Vec<String> {
    payments
        .iter()
        .map(|p| {
            let mut line = format!(
                "id:{}: {}{CURRENCY} for subscription #{}, method: {}, status: {}",
                p.id,
                format_money(p.amount),
                p.subscription_id,
                p.payment_method,
                p.status
            );
            if let Some(reason) = p.refund_reason.as_deref().filter(|_| p.is_refunded) {
                line.push_str(&format!(", refund reason: {reason}"));
            }
            line
        })
        .collect()
}

/// Admin queue. The server may send every status; only pending requests
/// get controls.
pub fn render_request_queue(requests: &[SubscriptionRequest]) -> RequestQueueView {
    if requests.is_empty() {
        return RequestQueueView::Empty;
    }
    let rows: Vec<RequestRow> = requests
        .iter()
        .filter(|r| r.is_pending())
        .map(|r| RequestRow {
            request_id: r.id,
            label: format!(
                "User #{} requested subscription #{}",
                r.user_id, r.subscription_id
            ),
        })
        .collect();
    if rows.is_empty() {
        RequestQueueView::NoPending
    } else {
        RequestQueueView::Pending(rows)
    }
}

pub fn render_notifications(notifications: &[Notification]) -> Vec<NotificationItem> {
    notifications
        .iter()
        .map(|n| {
            let marker = if n.is_read { "" } else { "[new] " };
            let mut label = format!("{marker}{}", n.message);
            if let Some(at) = format_timestamp(n.created_at) {
                label.push_str(&format!(" ({at})"));
            }
            NotificationItem {
                notification_id: n.id,
                is_read: n.is_read,
                label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::capability::{CatalogAction, OwnershipIndex};
    use shared::models::{RequestStatus, SubscriptionSummary};
    use std::str::FromStr;

    fn sub(id: i64, name: &str, price: &str) -> Subscription {
        Subscription {
            id,
            name: name.into(),
            price: Decimal::from_str(price).unwrap(),
            duration_days: 30,
            description: None,
            is_active: true,
        }
    }

    fn owned(subscription_id: i64, is_active: bool) -> UserSubscription {
        UserSubscription {
            id: None,
            subscription_id,
            is_active,
            start_date: None,
            end_date: None,
            auto_renew: false,
            subscription: None,
        }
    }

    fn request(id: i64, status: RequestStatus) -> SubscriptionRequest {
        SubscriptionRequest {
            id,
            user_id: 10 + id,
            subscription_id: 100 + id,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_catalog_label_and_admin_buttons() {
        let items = render_catalog(&[sub(1, "Basic", "299")], &Viewer::Admin);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Basic - 299.00₽ for 30 days");
        assert_eq!(
            items[0].actions,
            vec![
                CatalogAction::Edit,
                CatalogAction::Delete,
                CatalogAction::AssignToSelf
            ]
        );
    }

    #[test]
    fn test_catalog_regular_viewer() {
        let subs = [sub(1, "A", "1"), sub(2, "B", "2"), sub(3, "C", "3")];
        let viewer = Viewer::Regular(OwnershipIndex::from_records(&[
            owned(2, false),
            owned(3, true),
        ]));
        let items = render_catalog(&subs, &viewer);

        assert_eq!(items[0].actions, vec![CatalogAction::RequestAccess]);
        assert_eq!(items[1].actions, vec![CatalogAction::Pay]);
        assert!(items[2].actions.is_empty());
    }

    #[test]
    fn test_active_subscriptions_filter_and_fallbacks() {
        let mut named = owned(1, true);
        named.subscription = Some(SubscriptionSummary {
            id: Some(1),
            name: Some("Cinema+".into()),
        });
        named.end_date = chrono::NaiveDate::from_ymd_opt(2025, 6, 1);
        let lines = render_active_subscriptions(&[named, owned(2, false), owned(3, true)]);

        assert_eq!(
            lines,
            vec![
                "Subscription: Cinema+, until 2025-06-01".to_string(),
                "Subscription: Untitled, until ∞".to_string(),
            ]
        );
    }

    #[test]
    fn test_request_queue_states() {
        assert_eq!(render_request_queue(&[]), RequestQueueView::Empty);
        assert_eq!(
            render_request_queue(&[request(1, RequestStatus::Approved)]),
            RequestQueueView::NoPending
        );

        let view = render_request_queue(&[
            request(1, RequestStatus::Rejected),
            request(7, RequestStatus::Pending),
        ]);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].request_id, 7);
        assert_eq!(view.rows()[0].label, "User #17 requested subscription #107");
    }

    #[test]
    fn test_wallet_history_lines() {
        let entries = [
            BalanceTransaction {
                kind: TransactionType::Topup,
                amount: Decimal::from(50),
                description: Some("gift".into()),
                created_at: NaiveDateTime::parse_from_str(
                    "2025-02-01 09:30:00",
                    "%Y-%m-%d %H:%M:%S",
                )
                .ok(),
            },
            BalanceTransaction {
                kind: TransactionType::Withdraw,
                amount: Decimal::from_str("19.9").unwrap(),
                description: None,
                created_at: None,
            },
        ];
        assert_eq!(
            render_wallet_history(&entries),
            vec![
                "+ 50.00₽ - gift (2025-02-01 09:30)".to_string(),
                "- 19.90₽ - ".to_string(),
            ]
        );
    }

    #[test]
    fn test_payment_line_with_refund() {
        let payment = Payment {
            id: 3,
            subscription_id: 2,
            amount: Decimal::from(199),
            payment_method: "balance".into(),
            status: "refunded".into(),
            created_at: None,
            is_refunded: true,
            refund_reason: Some("changed my mind".into()),
        };
        assert_eq!(
            render_payments(&[payment]),
            vec![
                "id:3: 199.00₽ for subscription #2, method: balance, status: refunded, refund reason: changed my mind"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_notifications_mark_unread() {
        let items = render_notifications(&[
            Notification {
                id: 1,
                message: "Paid 199₽".into(),
                kind: Some("payment".into()),
                is_read: false,
                created_at: None,
            },
            Notification {
                id: 2,
                message: "Refunded".into(),
                kind: None,
                is_read: true,
                created_at: None,
            },
        ]);
        assert_eq!(items[0].label, "[new] Paid 199₽");
        assert_eq!(items[1].label, "Refunded");
    }
}
