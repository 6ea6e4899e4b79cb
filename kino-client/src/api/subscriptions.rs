//! Catalog and ownership endpoints

use serde::de::IgnoredAny;
use shared::models::{
    Subscription, SubscriptionCreate, SubscriptionUpdate, UserSubscription,
    UserSubscriptionCreate,
};

use super::Api;
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> Api<H> {
    /// Active catalog, requested without credentials
    pub async fn list_subscriptions(&self) -> ClientResult<Vec<Subscription>> {
        self.http
            .get_anonymous("/subscriptions/?active_only=true")
            .await
    }

    pub async fn create_subscription(
        &self,
        subscription: &SubscriptionCreate,
    ) -> ClientResult<Subscription> {
        self.http.post("/subscriptions/", subscription).await
    }

    pub async fn update_subscription(
        &self,
        id: i64,
        update: &SubscriptionUpdate,
    ) -> ClientResult<Subscription> {
        self.http.put(&format!("/subscriptions/{id}"), update).await
    }

    pub async fn delete_subscription(&self, id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("/subscriptions/{id}")).await?;
        Ok(())
    }

    /// The viewer's ownership records
    pub async fn my_subscriptions(&self) -> ClientResult<Vec<UserSubscription>> {
        self.http.get("/user-subscriptions/me").await
    }

    pub async fn assign_subscription(
        &self,
        assignment: &UserSubscriptionCreate,
    ) -> ClientResult<()> {
        let _: IgnoredAny = self.http.post("/user-subscriptions/", assignment).await?;
        Ok(())
    }
}
