//! Catalog loading and admin catalog mutation

use shared::models::{SubscriptionCreate, SubscriptionUpdate, UserSubscriptionCreate};

use super::*;
use crate::view::render::{render_active_subscriptions, render_catalog};
use crate::view::state::{Section, SubscriptionForm};
use crate::view::{OwnershipIndex, Viewer};

impl<H: HttpClient, S: TokenStore> ViewController<H, S> {
    /// Redraw the catalog.
    ///
    /// A regular viewer's ownership records are fetched alongside the
    /// catalog; if either request fails no item is shown, so no button is
    /// ever decided without ownership data.
    pub async fn load_subscriptions(&mut self) {
        let Some(role) = self.session.role() else {
            return;
        };

        let fetched = match role {
            Role::Admin => self
                .api
                .list_subscriptions()
                .await
                .map(|subscriptions| (subscriptions, Viewer::Admin)),
            Role::Regular => {
                let (catalog, owned) =
                    tokio::join!(self.api.list_subscriptions(), self.api.my_subscriptions());
                match (catalog, owned) {
                    (Ok(subscriptions), Ok(owned)) => Ok((
                        subscriptions,
                        Viewer::Regular(OwnershipIndex::from_records(&owned)),
                    )),
                    (Err(e), _) | (_, Err(e)) => Err(e),
                }
            }
        };

        match fetched {
            Ok((subscriptions, viewer)) => {
                tracing::debug!(count = subscriptions.len(), "Catalog loaded");
                self.view.catalog = render_catalog(&subscriptions, &viewer);
            }
            Err(e) => {
                self.view.catalog.clear();
                self.surface(&e);
            }
        }
    }

    /// Redraw the viewer's active subscription list
    pub async fn load_user_subscriptions(&mut self) {
        if self.session.role().is_none() {
            return;
        }
        match self.api.my_subscriptions().await {
            Ok(records) => {
                self.view.active_subscriptions = render_active_subscriptions(&records);
                self.view.show(Section::ActiveSubscriptions);
            }
            Err(e) => self.surface(&e),
        }
    }

    /// Prompt for new name, price and duration, then update the entry.
    /// Nothing is sent unless all three are present and well-formed.
    pub async fn edit_subscription(
        &mut self,
        subscription_id: i64,
        prompter: &mut dyn Prompter,
    ) -> ClientResult<()> {
        if let Err(e) = self.require_user() {
            return self.fail(e);
        }

        let name = prompter.prompt("New name");
        let price = prompter.prompt("New price");
        let days = prompter.prompt("New duration (days)");
        let update = match edit_from_answers(name, price, days) {
            Ok(update) => update,
            Err(e) => return self.fail(e),
        };

        match self.api.update_subscription(subscription_id, &update).await {
            Ok(updated) => {
                tracing::info!(subscription_id, name = %updated.name, "Subscription updated");
                self.view.info("Subscription updated");
                self.render_signed_in().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Delete a catalog entry after confirmation
    pub async fn delete_subscription(
        &mut self,
        subscription_id: i64,
        prompter: &mut dyn Prompter,
    ) -> ClientResult<()> {
        if let Err(e) = self.require_user() {
            return self.fail(e);
        }
        if !prompter.confirm(&format!("Delete subscription #{subscription_id}?")) {
            tracing::debug!(subscription_id, "Delete cancelled");
            return Ok(());
        }

        match self.api.delete_subscription(subscription_id).await {
            Ok(()) => {
                tracing::info!(subscription_id, "Subscription deleted");
                self.view.info("Subscription deleted");
                self.render_signed_in().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Give the current user the subscription, without auto-renew
    pub async fn assign_subscription(&mut self, subscription_id: i64) -> ClientResult<()> {
        if let Err(e) = self.require_user() {
            return self.fail(e);
        }
        let assignment = UserSubscriptionCreate {
            subscription_id,
            auto_renew: false,
        };
        match self.api.assign_subscription(&assignment).await {
            Ok(()) => {
                tracing::info!(subscription_id, "Subscription assigned to self");
                self.view.info("Subscription assigned");
                self.load_user_subscriptions().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Submit the admin panel's create form
    pub async fn create_subscription(&mut self) -> ClientResult<()> {
        if let Err(e) = self.require_section(Section::AdminPanel) {
            return self.fail(e);
        }
        let subscription = match create_from_form(&self.view.forms.create_subscription) {
            Ok(subscription) => subscription,
            Err(e) => return self.fail(e),
        };

        match self.api.create_subscription(&subscription).await {
            Ok(created) => {
                tracing::info!(subscription_id = created.id, name = %created.name, "Subscription created");
                self.view.forms.create_subscription = SubscriptionForm::default();
                self.view.info(format!("Subscription \"{}\" created", created.name));
                self.load_subscriptions().await;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Pre-fill the pay form with a catalog item's id and price
    pub fn select_for_payment(&mut self, subscription_id: i64) -> ClientResult<()> {
        let Some(price) = self
            .view
            .catalog_item(subscription_id)
            .map(|item| item.price)
        else {
            return self.fail(ClientError::Validation(format!(
                "Subscription #{subscription_id} is not in the catalog"
            )));
        };
        let form = &mut self.view.forms.pay;
        form.subscription_id = subscription_id.to_string();
        form.amount = price.normalize().to_string();
        Ok(())
    }
}

fn edit_from_answers(
    name: Option<String>,
    price: Option<String>,
    days: Option<String>,
) -> ClientResult<SubscriptionUpdate> {
    let required = |answer: Option<String>| answer.as_deref().and_then(optional_text);
    let (Some(name), Some(price), Some(days)) = (required(name), required(price), required(days))
    else {
        return Err(ClientError::Validation("All fields are required".to_string()));
    };

    Ok(SubscriptionUpdate {
        name: Some(name),
        price: Some(parse_amount(&price, "Price")?),
        duration_days: Some(parse_days(&days)?),
    })
}

fn create_from_form(form: &SubscriptionForm) -> ClientResult<SubscriptionCreate> {
    let name = optional_text(&form.name)
        .ok_or_else(|| ClientError::Validation("Name is required".to_string()))?;
    Ok(SubscriptionCreate {
        name,
        price: parse_amount(&form.price, "Price")?,
        duration_days: parse_days(&form.duration_days)?,
        description: optional_text(&form.description),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_edit_requires_every_answer() {
        for (name, price, days) in [
            (None, some("10"), some("30")),
            (some("Gold"), some(""), some("30")),
            (some("Gold"), some("10"), None),
        ] {
            let err = edit_from_answers(name, price, days).unwrap_err();
            assert_eq!(err.user_message(), "All fields are required");
        }
    }

    #[test]
    fn test_edit_rejects_malformed_numbers() {
        assert!(edit_from_answers(some("Gold"), some("ten"), some("30")).is_err());
        assert!(edit_from_answers(some("Gold"), some("10"), some("a month")).is_err());

        let update = edit_from_answers(some(" Gold "), some("499.90"), some("30")).unwrap();
        assert_eq!(update.name.as_deref(), Some("Gold"));
        assert_eq!(update.duration_days, Some(30));
    }

    #[test]
    fn test_create_from_form() {
        let form = SubscriptionForm {
            name: "Family".into(),
            price: "799".into(),
            duration_days: "90".into(),
            description: " ".into(),
        };
        let created = create_from_form(&form).unwrap();
        assert_eq!(created.price, Decimal::from(799));
        assert_eq!(created.duration_days, 90);
        assert!(created.description.is_none());

        let empty = SubscriptionForm::default();
        assert_eq!(
            create_from_form(&empty).unwrap_err().user_message(),
            "Name is required"
        );
    }
}
