//! Plain-text drawing of the page model

use std::fmt::Write;

use kino_client::view::CatalogAction;
use kino_client::{Notice, Section, ViewState};

pub fn notice(notice: &Notice) -> String {
    match notice {
        Notice::Info(text) => format!("✅ {text}"),
        Notice::Error(text) => format!("❌ {text}"),
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {title} ==");
}

fn list(out: &mut String, lines: &[String], empty: &str) {
    if lines.is_empty() {
        let _ = writeln!(out, "  ({empty})");
    }
    for line in lines {
        let _ = writeln!(out, "  {line}");
    }
}

fn buttons(actions: &[CatalogAction]) -> String {
    if actions.is_empty() {
        return String::new();
    }
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
    format!("  [{}]", labels.join("] ["))
}

/// Every visible section, in page order
pub fn page(view: &ViewState) -> String {
    let mut out = String::new();

    if view.is_visible(Section::LoginForm) {
        heading(&mut out, "Welcome");
        out.push_str("  Not logged in. Use \"login\" or \"register\".\n");
        if let Some(error) = &view.login_error {
            let _ = writeln!(out, "  ❌ {error}");
        }
    }
    if let Some(name) = view.user_name.as_deref().filter(|_| view.is_visible(Section::LogoutButton)) {
        let _ = writeln!(out, "\nLogged in as {name} (\"logout\" to sign out)");
    }

    if view.is_visible(Section::Subscriptions) {
        heading(&mut out, "Subscriptions");
        if view.catalog.is_empty() {
            out.push_str("  (no subscriptions)\n");
        }
        for item in &view.catalog {
            let _ = writeln!(
                out,
                "  #{} {}{}",
                item.subscription_id,
                item.label,
                buttons(&item.actions)
            );
        }
    }
    if view.is_visible(Section::ActiveSubscriptions) {
        heading(&mut out, "My subscriptions");
        list(&mut out, &view.active_subscriptions, "none active");
    }

    if view.is_visible(Section::AdminPanel) {
        heading(&mut out, "Admin");
        out.push_str("  create | edit <id> | delete <id> | assign <id>\n");
    }
    if view.is_visible(Section::RequestQueue) {
        heading(&mut out, "Subscription requests");
        if let Some(placeholder) = view.requests.placeholder() {
            let _ = writeln!(out, "  {placeholder}");
        }
        for row in view.requests.rows() {
            let _ = writeln!(out, "  #{} {}  [approve] [reject]", row.request_id, row.label);
        }
    }

    if view.is_visible(Section::WalletSection) {
        heading(&mut out, "Wallet");
        let _ = writeln!(out, "  Balance: {}", view.balance.as_deref().unwrap_or("-"));
        list(&mut out, &view.wallet_history, "no transactions");
    }
    if view.is_visible(Section::PaymentHistory) {
        heading(&mut out, "Payments");
        list(&mut out, &view.payment_history, "no payments");
    }
    if view.is_visible(Section::PayForm) && !view.forms.pay.subscription_id.is_empty() {
        let _ = writeln!(
            out,
            "\n  Ready to pay for #{}: {} (\"pay\" to confirm)",
            view.forms.pay.subscription_id, view.forms.pay.amount
        );
    }
    if view.is_visible(Section::Notifications) {
        heading(&mut out, "Notifications");
        if view.notifications.is_empty() {
            out.push_str("  (nothing new)\n");
        }
        for item in &view.notifications {
            let _ = writeln!(out, "  #{} {}", item.notification_id, item.label);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kino_client::models::Role;
    use kino_client::view::CatalogItem;
    use kino_client::view::RequestQueueView;

    #[test]
    fn test_signed_out_page() {
        let mut view = ViewState::signed_out();
        view.login_error = Some("Invalid username or password".into());
        let text = page(&view);
        assert!(text.contains("Not logged in"));
        assert!(text.contains("❌ Invalid username or password"));
        assert!(!text.contains("Wallet"));
    }

    #[test]
    fn test_admin_page_shows_queue_placeholder() {
        let mut view = ViewState::signed_out();
        view.show_signed_in(Role::Admin, "root");
        view.requests = RequestQueueView::NoPending;
        view.catalog.push(CatalogItem {
            subscription_id: 1,
            price: 199.into(),
            label: "Basic - 199.00₽ for 30 days".into(),
            actions: vec![CatalogAction::Edit, CatalogAction::Delete],
        });

        let text = page(&view);
        assert!(text.contains("Logged in as root"));
        assert!(text.contains("#1 Basic - 199.00₽ for 30 days  [Edit] [Delete]"));
        assert!(text.contains("No new requests"));
        assert!(!text.contains("== Wallet =="));
    }

    #[test]
    fn test_notice_markers() {
        assert_eq!(notice(&Notice::Info("Saved".into())), "✅ Saved");
        assert_eq!(notice(&Notice::Error("Nope".into())), "❌ Nope");
    }
}
