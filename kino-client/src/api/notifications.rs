//! Notification endpoints

use serde::de::IgnoredAny;
use shared::models::Notification;

use super::Api;
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> Api<H> {
    pub async fn list_notifications(&self) -> ClientResult<Vec<Notification>> {
        self.http.get("/notifications/").await
    }

    pub async fn mark_notification_read(&self, notification_id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self
            .http
            .patch_empty(&format!("/notifications/{notification_id}/read"))
            .await?;
        Ok(())
    }
}
