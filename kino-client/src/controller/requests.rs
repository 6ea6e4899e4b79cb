//! Subscription request workflow

use super::*;
use crate::api::RequestDecision;
use crate::view::render::render_request_queue;

impl<H: HttpClient, S: TokenStore> ViewController<H, S> {
    /// Ask an admin for access to a subscription
    pub async fn request_access(&mut self, subscription_id: i64) -> ClientResult<()> {
        if let Err(e) = self.require_user() {
            return self.fail(e);
        }
        match self.api.create_request(subscription_id).await {
            Ok(()) => {
                tracing::info!(subscription_id, "Access requested");
                self.view.info("Request sent, waiting for admin approval");
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Redraw the admin queue with pending requests only
    pub async fn load_subscription_requests(&mut self) {
        if self.session.role().is_none() {
            return;
        }
        match self.api.list_requests().await {
            Ok(requests) => {
                tracing::debug!(count = requests.len(), "Request queue loaded");
                self.view.requests = render_request_queue(&requests);
            }
            Err(e) => self.surface(&e),
        }
    }

    pub async fn approve_request(&mut self, request_id: i64) -> ClientResult<()> {
        self.decide_request(request_id, RequestDecision::Approve)
            .await
    }

    pub async fn reject_request(&mut self, request_id: i64) -> ClientResult<()> {
        self.decide_request(request_id, RequestDecision::Reject).await
    }

    /// Send the decision; on success the queue is fetched once more
    async fn decide_request(
        &mut self,
        request_id: i64,
        decision: RequestDecision,
    ) -> ClientResult<()> {
        if let Err(e) = self.require_section(Section::RequestQueue) {
            return self.fail(e);
        }
        match self.api.decide_request(request_id, decision).await {
            Ok(()) => {
                tracing::info!(request_id, ?decision, "Request decided");
                self.view.info(match decision {
                    RequestDecision::Approve => format!("Request #{request_id} approved"),
                    RequestDecision::Reject => format!("Request #{request_id} rejected"),
                });
                self.load_subscription_requests().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }
}
