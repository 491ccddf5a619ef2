use crate::cli::list_output::{new_table, ListOutput};
use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::models::subscription::Subscription;
use crate::subscriptions::get_subscriptions::GetSubscriptions;
use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use tracing::{event, Level};

pub struct GetSubscriptionsCmd {
    _get_subscriptions: GetSubscriptions,
    output: ListOutput,
}

impl GetSubscriptionsCmd {
    pub fn new(output: ListOutput) -> Self {
        GetSubscriptionsCmd {
            _get_subscriptions: GetSubscriptions {},
            output,
        }
    }
}

#[async_trait]
impl CliCommand for GetSubscriptionsCmd {
    fn explain(&self) -> String {
        format!("list subscriptions in {} mode", self.output.as_str())
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let mut subscriptions = client.get_subscriptions();

        match self.output {
            ListOutput::List => {
                while let Some(subscription) = subscriptions
                    .try_next()
                    .await
                    .with_context(|| String::from("Problem getting list of subscriptions"))?
                {
                    event!(target: PRINT_TARGET, Level::INFO, "{}", subscription.name);
                }
            }
            ListOutput::Table => {
                let subscriptions: Vec<Subscription> = subscriptions
                    .try_collect()
                    .await
                    .with_context(|| String::from("Problem getting list of subscriptions"))?;

                if subscriptions.is_empty() {
                    event!(target: PRINT_TARGET, Level::INFO, "No subscriptions found!");
                    return Ok(());
                }

                let mut table = new_table(vec!["ID", "Topic", "Ack deadline (s)", "Name"]);
                subscriptions.iter().for_each(|subscription| {
                    table.add_row(vec![
                        subscription.id().to_string(),
                        subscription.topic_id().to_string(),
                        format!("{}", subscription.ack_deadline_seconds),
                        subscription.name.clone(),
                    ]);
                });

                event!(target: PRINT_TARGET, Level::INFO, "{table}");
            }
        }

        Ok(())
    }
}
