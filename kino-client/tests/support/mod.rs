// kino-client/tests/support/mod.rs
// Mock KinoSub backend helpers

#![allow(dead_code)]

use httpmock::Method::GET;
use httpmock::{Mock, MockServer};
use kino_client::{
    Api, Backend, ClientConfig, MemoryTokenStore, NetworkHttpClient, ViewController,
};
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";
pub const BEARER: &str = "Bearer test-token";

pub type TestController = ViewController<NetworkHttpClient, MemoryTokenStore>;

pub fn controller(server: &MockServer, store: MemoryTokenStore) -> TestController {
    controller_with_backend(server, store, Backend::KinoSub)
}

pub fn controller_with_backend(
    server: &MockServer,
    store: MemoryTokenStore,
    backend: Backend,
) -> TestController {
    let config = ClientConfig::new(server.base_url())
        .unwrap()
        .with_backend(backend)
        .with_timeout(5);
    let http = NetworkHttpClient::new(&config).unwrap();
    ViewController::new(Api::new(http, backend), store)
}

pub fn admin_profile() -> Value {
    json!({"id": 1, "username": "root", "email": "root@kino.test", "role": "admin", "balance": 0})
}

pub fn regular_profile() -> Value {
    json!({"id": 2, "username": "alice", "email": "alice@kino.test", "role": "user", "balance": 150})
}

pub fn catalog() -> Value {
    json!([
        {"id": 1, "name": "Basic", "price": 199.0, "duration_days": 30, "description": null, "is_active": true},
        {"id": 2, "name": "Premium", "price": 499.0, "duration_days": 30, "description": "4K", "is_active": true},
        {"id": 3, "name": "Family", "price": 799.0, "duration_days": 90, "description": null, "is_active": true}
    ])
}

/// Owns #2 (inactive) and #3 (active); #1 is unowned
pub fn ownership() -> Value {
    json!([
        {"id": 10, "subscription_id": 2, "is_active": false, "end_date": "2025-01-01", "auto_renew": false,
         "subscription": {"id": 2, "name": "Premium"}},
        {"id": 11, "subscription_id": 3, "is_active": true, "end_date": "2026-12-31", "auto_renew": true,
         "subscription": {"id": 3, "name": "Family"}}
    ])
}

pub async fn mock_json<'a>(server: &'a MockServer, path: &str, body: Value) -> Mock<'a> {
    let path = path.to_string();
    server
        .mock_async(move |when, then| {
            when.method(GET).path(path);
            then.status(200).json_body(body);
        })
        .await
}

pub async fn mock_profile<'a>(server: &'a MockServer, profile: Value) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/auth/me").header("Authorization", BEARER);
            then.status(200).json_body(profile);
        })
        .await
}

pub async fn mock_catalog(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/subscriptions/")
                .query_param("active_only", "true");
            then.status(200).json_body(catalog());
        })
        .await
}

/// Every read a regular user's page makes after login
pub struct RegularPage<'a> {
    pub catalog: Mock<'a>,
    pub ownership: Mock<'a>,
    pub balance: Mock<'a>,
    pub history: Mock<'a>,
    pub payments: Mock<'a>,
    pub notifications: Mock<'a>,
}

pub async fn mock_regular_page(server: &MockServer) -> RegularPage<'_> {
    RegularPage {
        catalog: mock_catalog(server).await,
        ownership: mock_json(server, "/user-subscriptions/me", ownership()).await,
        balance: mock_json(server, "/wallet/balance", json!(150.0)).await,
        history: mock_json(
            server,
            "/wallet/history",
            json!([{"type": "topup", "amount": 150.0, "description": "first", "created_at": "2025-02-01T09:30:00"}]),
        )
        .await,
        payments: mock_json(server, "/payments/", json!([])).await,
        notifications: mock_json(
            server,
            "/notifications/",
            json!([{"id": 5, "message": "Welcome", "type": "info", "is_read": false, "created_at": null}]),
        )
        .await,
    }
}

/// Every read an admin's page makes after login, except the request queue
pub struct AdminPage<'a> {
    pub catalog: Mock<'a>,
    pub ownership: Mock<'a>,
}

pub async fn mock_admin_page(server: &MockServer) -> AdminPage<'_> {
    AdminPage {
        catalog: mock_catalog(server).await,
        ownership: mock_json(server, "/user-subscriptions/me", json!([])).await,
    }
}

/// Controller restored from a stored token whose profile is already mocked
pub async fn signed_in(server: &MockServer) -> TestController {
    let mut ctl = controller(server, MemoryTokenStore::with_token(TOKEN));
    ctl.bootstrap().await;
    assert!(ctl.session().is_authenticated());
    ctl
}
