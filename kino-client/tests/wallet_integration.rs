// kino-client/tests/wallet_integration.rs
// Wallet, payment, refund and auto-renew flows for a regular user

use httpmock::Method::{PATCH, POST};
use httpmock::MockServer;
use kino_client::ClientError;
use serde_json::json;

mod support;
use support::*;

#[tokio::test]
async fn test_topup_clears_form_and_refreshes_balance_once() {
    let server = MockServer::start_async().await;
    mock_profile(&server, regular_profile()).await;
    let page = mock_regular_page(&server).await;
    let topup = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/wallet/topup")
                .header("Authorization", BEARER)
                .body_contains("\"amount\":50")
                .body_contains("\"description\":\"gift\"");
            then.status(200).json_body(json!({"balance": 200.0}));
        })
        .await;

    let mut ctl = signed_in(&server).await;
    let balance_before = page.balance.hits_async().await;
    ctl.view_mut().forms.topup.amount = "50".into();
    ctl.view_mut().forms.topup.description = "gift".into();

    ctl.submit_topup().await.unwrap();

    topup.assert_hits_async(1).await;
    assert_eq!(page.balance.hits_async().await, balance_before + 1);
    assert!(ctl.view().forms.topup.amount.is_empty());
    assert!(ctl.view().forms.topup.description.is_empty());
    assert!(ctl.view().notices().iter().all(|n| !n.is_error()));
}

#[tokio::test]
async fn test_withdraw_rejection_keeps_form() {
    let server = MockServer::start_async().await;
    mock_profile(&server, regular_profile()).await;
    let page = mock_regular_page(&server).await;
    let withdraw = server
        .mock_async(|when, then| {
            when.method(POST).path("/wallet/withdraw");
            then.status(400)
                .json_body(json!({"detail": "insufficient funds"}));
        })
        .await;

    let mut ctl = signed_in(&server).await;
    let balance_before = page.balance.hits_async().await;
    ctl.view_mut().forms.withdraw.amount = "1000".into();

    let err = ctl.submit_withdraw().await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 400, .. }));
    withdraw.assert_hits_async(1).await;
    assert_eq!(ctl.view().forms.withdraw.amount, "1000");
    let last = ctl.view().notices().last().unwrap();
    assert!(last.is_error());
    assert_eq!(last.text(), "insufficient funds");
    assert_eq!(page.balance.hits_async().await, balance_before);
}

#[tokio::test]
async fn test_invalid_amount_sends_nothing() {
    let server = MockServer::start_async().await;
    mock_profile(&server, regular_profile()).await;
    let _page = mock_regular_page(&server).await;
    let topup = server
        .mock_async(|when, then| {
            when.method(POST).path("/wallet/topup");
            then.status(200);
        })
        .await;

    let mut ctl = signed_in(&server).await;
    for amount in ["", "abc", "-5", "0"] {
        ctl.view_mut().forms.topup.amount = amount.into();
        let err = ctl.submit_topup().await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)), "{amount:?}");
        assert_eq!(ctl.view().forms.topup.amount, amount);
    }

    topup.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_validation_errors_join_fastapi_messages() {
    let server = MockServer::start_async().await;
    mock_profile(&server, regular_profile()).await;
    let _page = mock_regular_page(&server).await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/wallet/topup");
            then.status(422).json_body(json!({"detail": [
                {"loc": ["body", "amount"], "msg": "value is not a valid decimal", "type": "type_error"},
                {"loc": ["body", "description"], "msg": "too long", "type": "value_error"}
            ]}));
        })
        .await;

    let mut ctl = signed_in(&server).await;
    ctl.view_mut().forms.topup.amount = "10".into();
    assert!(ctl.submit_topup().await.is_err());

    assert_eq!(
        ctl.view().notices().last().unwrap().text(),
        "value is not a valid decimal; too long"
    );
}

#[tokio::test]
async fn test_payment_clears_form_and_refreshes() {
    let server = MockServer::start_async().await;
    mock_profile(&server, regular_profile()).await;
    let page = mock_regular_page(&server).await;
    let pay = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/payments/")
                .body_contains("\"subscription_id\":2")
                .body_contains("\"payment_method\":\"card\"");
            then.status(200).json_body(json!({
                "id": 30, "subscription_id": 2, "amount": 499.0, "payment_method": "card",
                "status": "completed", "created_at": "2025-03-01T12:00:00", "is_refunded": false
            }));
        })
        .await;

    let mut ctl = signed_in(&server).await;
    let balance_before = page.balance.hits_async().await;
    let payments_before = page.payments.hits_async().await;
    let form = &mut ctl.view_mut().forms.pay;
    form.subscription_id = "2".into();
    form.amount = "499".into();
    form.payment_method = "card".into();

    ctl.submit_payment().await.unwrap();

    pay.assert_hits_async(1).await;
    assert_eq!(page.balance.hits_async().await, balance_before + 1);
    assert_eq!(page.payments.hits_async().await, payments_before + 1);
    assert!(ctl.view().forms.pay.subscription_id.is_empty());
    assert_eq!(ctl.view().forms.pay.payment_method, "balance");
}

#[tokio::test]
async fn test_payment_rejection_shows_detail() {
    let server = MockServer::start_async().await;
    mock_profile(&server, regular_profile()).await;
    let _page = mock_regular_page(&server).await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/payments/");
            then.status(400).json_body(json!({"detail": "Insufficient balance"}));
        })
        .await;

    let mut ctl = signed_in(&server).await;
    ctl.view_mut().forms.pay.subscription_id = "2".into();
    ctl.view_mut().forms.pay.amount = "499".into();

    assert!(ctl.submit_payment().await.is_err());
    assert_eq!(ctl.view().notices().last().unwrap().text(), "Insufficient balance");
    assert_eq!(ctl.view().forms.pay.amount, "499");
}

#[tokio::test]
async fn test_refund_flow() {
    let server = MockServer::start_async().await;
    mock_profile(&server, regular_profile()).await;
    let page = mock_regular_page(&server).await;
    let refund = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/payments/30/refund")
                .body_contains("\"reason\":\"duplicate charge\"");
            then.status(200).json_body(json!({
                "id": 30, "subscription_id": 2, "amount": 499.0, "payment_method": "card",
                "status": "refunded", "is_refunded": true, "refund_reason": "duplicate charge"
            }));
        })
        .await;

    let mut ctl = signed_in(&server).await;
    ctl.view_mut().forms.refund.payment_id = "30".into();
    assert!(ctl.submit_refund().await.is_err());
    refund.assert_hits_async(0).await;

    let balance_before = page.balance.hits_async().await;
    ctl.view_mut().forms.refund.reason = "duplicate charge".into();
    ctl.submit_refund().await.unwrap();

    refund.assert_hits_async(1).await;
    assert_eq!(page.balance.hits_async().await, balance_before + 1);
    assert!(ctl.view().forms.refund.payment_id.is_empty());
}

#[tokio::test]
async fn test_auto_renew_reloads_active_list() {
    let server = MockServer::start_async().await;
    mock_profile(&server, regular_profile()).await;
    let page = mock_regular_page(&server).await;
    let toggle = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/payments/subscriptions/3/auto-renew")
                .body_contains("\"enable\":false");
            then.status(200)
                .json_body(json!({"subscription_id": 3, "auto_renew": false}));
        })
        .await;

    let mut ctl = signed_in(&server).await;
    let ownership_before = page.ownership.hits_async().await;

    ctl.set_auto_renew(3, false).await.unwrap();

    toggle.assert_hits_async(1).await;
    assert_eq!(page.ownership.hits_async().await, ownership_before + 1);
    assert_eq!(
        ctl.view().notices().last().unwrap().text(),
        "Auto-renew disabled"
    );
}

#[tokio::test]
async fn test_malformed_history_is_reported() {
    let server = MockServer::start_async().await;
    mock_profile(&server, regular_profile()).await;
    let _catalog = mock_catalog(&server).await;
    let _ownership = mock_json(&server, "/user-subscriptions/me", ownership()).await;
    let _balance = mock_json(&server, "/wallet/balance", json!(150.0)).await;
    let history = mock_json(
        &server,
        "/wallet/history",
        json!([
            {"type": "topup", "amount": 50.0},
            {"type": "withdraw", "amount": "abc"}
        ]),
    )
    .await;
    let _payments = mock_json(&server, "/payments/", json!([])).await;
    let _notifications = mock_json(&server, "/notifications/", json!([])).await;

    let ctl = signed_in(&server).await;

    history.assert_hits_async(1).await;
    assert!(ctl.view().wallet_history.is_empty());
    assert!(
        ctl.view()
            .notices()
            .iter()
            .any(|n| n.is_error() && n.text() == "Unexpected response from the server")
    );
}
