//! Subscription request endpoints

use serde::de::IgnoredAny;
use shared::models::{SubscriptionRequest, SubscriptionRequestCreate};

use super::Api;
use crate::ClientResult;
use crate::http::HttpClient;

/// Admin decision on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDecision {
    Approve,
    Reject,
}

impl RequestDecision {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

impl<H: HttpClient> Api<H> {
    pub async fn create_request(&self, subscription_id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self
            .http
            .post(
                "/subscription-requests/",
                &SubscriptionRequestCreate { subscription_id },
            )
            .await?;
        Ok(())
    }

    /// Every request the admin can see, in any status
    pub async fn list_requests(&self) -> ClientResult<Vec<SubscriptionRequest>> {
        self.http.get("/subscription-requests/admin").await
    }

    pub async fn decide_request(
        &self,
        request_id: i64,
        decision: RequestDecision,
    ) -> ClientResult<()> {
        let path = format!(
            "/subscription-requests/admin/{request_id}/{}",
            decision.path_segment()
        );
        let _: IgnoredAny = self.http.patch_empty(&path).await?;
        Ok(())
    }
}
