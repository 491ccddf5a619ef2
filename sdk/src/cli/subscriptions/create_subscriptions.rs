use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::error::PubSubError;
use crate::subscriptions::create_subscriptions::CreateSubscriptions;
use crate::utils::ack_deadline::AckDeadline;
use crate::validatable::Validatable;
use anyhow::Context;
use async_trait::async_trait;
use core::fmt;
use tracing::{event, Level};

pub struct CreateSubscriptionsCmd {
    create_subscriptions: CreateSubscriptions,
}

impl CreateSubscriptionsCmd {
    pub fn new(topic_id: String, subscription_ids: Vec<String>, ack_deadline: AckDeadline) -> Self {
        Self {
            create_subscriptions: CreateSubscriptions {
                topic_id,
                subscription_ids,
                ack_deadline,
            },
        }
    }
}

#[async_trait]
impl CliCommand for CreateSubscriptionsCmd {
    fn explain(&self) -> String {
        format!("{}", self)
    }

    fn validate(&self) -> Result<(), PubSubError> {
        self.create_subscriptions.validate()
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let topic_id = &self.create_subscriptions.topic_id;
        let ack_deadline = self.create_subscriptions.ack_deadline;

        for subscription_id in &self.create_subscriptions.subscription_ids {
            let subscription = client
                .create_subscription(subscription_id, topic_id, ack_deadline)
                .await
                .with_context(|| {
                    format!(
                        "Problem creating subscription: {subscription_id} for topic: {topic_id}"
                    )
                })?;

            event!(target: PRINT_TARGET, Level::INFO,
                "Subscription created: {}, topic: {}, ack deadline: {}s",
                subscription.name,
                subscription.topic,
                subscription.ack_deadline_seconds,
            );
        }

        Ok(())
    }
}

impl fmt::Display for CreateSubscriptionsCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscription_ids = self.create_subscriptions.subscription_ids.join(", ");
        let topic_id = &self.create_subscriptions.topic_id;
        let ack_deadline = &self.create_subscriptions.ack_deadline;

        write!(
            f,
            "create subscriptions: {subscription_ids} for topic: {topic_id} with ack deadline: {ack_deadline}",
        )
    }
}
