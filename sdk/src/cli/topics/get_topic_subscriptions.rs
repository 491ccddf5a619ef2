use crate::cli::list_output::{new_table, ListOutput};
use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::error::PubSubError;
use crate::models::topic::short_name;
use crate::topics::get_topic_subscriptions::GetTopicSubscriptions;
use crate::validatable::Validatable;
use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use tracing::{event, Level};

pub struct GetTopicSubscriptionsCmd {
    get_topic_subscriptions: GetTopicSubscriptions,
    output: ListOutput,
}

impl GetTopicSubscriptionsCmd {
    pub fn new(topic_id: String, output: ListOutput) -> Self {
        Self {
            get_topic_subscriptions: GetTopicSubscriptions { topic_id },
            output,
        }
    }
}

#[async_trait]
impl CliCommand for GetTopicSubscriptionsCmd {
    fn explain(&self) -> String {
        format!(
            "list subscriptions of topic: {} in {} mode",
            self.get_topic_subscriptions,
            self.output.as_str()
        )
    }

    fn validate(&self) -> Result<(), PubSubError> {
        self.get_topic_subscriptions.validate()
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let topic_id = &self.get_topic_subscriptions.topic_id;
        let mut subscriptions = client.get_topic_subscriptions(topic_id);

        match self.output {
            ListOutput::List => {
                while let Some(subscription) = subscriptions.try_next().await.with_context(|| {
                    format!("Problem getting list of subscriptions of topic: {topic_id}")
                })? {
                    event!(target: PRINT_TARGET, Level::INFO, "{subscription}");
                }
            }
            ListOutput::Table => {
                let subscriptions: Vec<String> =
                    subscriptions.try_collect().await.with_context(|| {
                        format!("Problem getting list of subscriptions of topic: {topic_id}")
                    })?;

                if subscriptions.is_empty() {
                    event!(target: PRINT_TARGET, Level::INFO, "No subscriptions found!");
                    return Ok(());
                }

                let mut table = new_table(vec!["ID", "Name"]);
                subscriptions.iter().for_each(|subscription| {
                    table.add_row(vec![
                        short_name(subscription).to_string(),
                        subscription.clone(),
                    ]);
                });

                event!(target: PRINT_TARGET, Level::INFO, "{table}");
            }
        }

        Ok(())
    }
}
