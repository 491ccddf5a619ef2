use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::error::PubSubError;
use crate::subscriptions::delete_subscriptions::DeleteSubscriptions;
use crate::validatable::Validatable;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct DeleteSubscriptionsCmd {
    delete_subscriptions: DeleteSubscriptions,
}

impl DeleteSubscriptionsCmd {
    pub fn new(subscription_ids: Vec<String>) -> Self {
        Self {
            delete_subscriptions: DeleteSubscriptions { subscription_ids },
        }
    }
}

#[async_trait]
impl CliCommand for DeleteSubscriptionsCmd {
    fn explain(&self) -> String {
        format!("delete subscriptions: {}", self.delete_subscriptions)
    }

    fn validate(&self) -> Result<(), PubSubError> {
        self.delete_subscriptions.validate()
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        for subscription_id in &self.delete_subscriptions.subscription_ids {
            client
                .delete_subscription(subscription_id)
                .await
                .with_context(|| format!("Problem deleting subscription: {subscription_id}"))?;

            event!(target: PRINT_TARGET, Level::INFO, "Subscription deleted: {subscription_id}");
        }

        Ok(())
    }
}
