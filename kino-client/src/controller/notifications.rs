//! Notifications

use super::*;
use crate::view::render::render_notifications;

impl<H: HttpClient, S: TokenStore> ViewController<H, S> {
    pub async fn load_notifications(&mut self) {
        if self.session.role().is_none() {
            return;
        }
        match self.api.list_notifications().await {
            Ok(notifications) => self.view.notifications = render_notifications(&notifications),
            Err(e) => self.surface(&e),
        }
    }

    pub async fn mark_notification_read(&mut self, notification_id: i64) -> ClientResult<()> {
        if let Err(e) = self.require_section(Section::Notifications) {
            return self.fail(e);
        }
        match self.api.mark_notification_read(notification_id).await {
            Ok(()) => {
                tracing::debug!(notification_id, "Notification marked read");
                self.load_notifications().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }
}
