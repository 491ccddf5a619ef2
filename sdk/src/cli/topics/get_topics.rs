use crate::cli::list_output::{new_table, ListOutput};
use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::models::topic::Topic;
use crate::topics::get_topics::GetTopics;
use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use tracing::{event, Level};

pub struct GetTopicsCmd {
    _get_topics: GetTopics,
    output: ListOutput,
}

impl GetTopicsCmd {
    pub fn new(output: ListOutput) -> Self {
        GetTopicsCmd {
            _get_topics: GetTopics {},
            output,
        }
    }
}

#[async_trait]
impl CliCommand for GetTopicsCmd {
    fn explain(&self) -> String {
        format!("list topics in {} mode", self.output.as_str())
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let mut topics = client.get_topics();

        match self.output {
            ListOutput::List => {
                while let Some(topic) = topics
                    .try_next()
                    .await
                    .with_context(|| String::from("Problem getting list of topics"))?
                {
                    event!(target: PRINT_TARGET, Level::INFO, "{}", topic.name);
                }
            }
            ListOutput::Table => {
                let topics: Vec<Topic> = topics
                    .try_collect()
                    .await
                    .with_context(|| String::from("Problem getting list of topics"))?;

                if topics.is_empty() {
                    event!(target: PRINT_TARGET, Level::INFO, "No topics found!");
                    return Ok(());
                }

                let mut table = new_table(vec!["ID", "Name", "Labels"]);
                topics.iter().for_each(|topic| {
                    table.add_row(vec![
                        topic.id().to_string(),
                        topic.name.clone(),
                        topic
                            .labels
                            .iter()
                            .map(|(key, value)| format!("{key}={value}"))
                            .collect::<Vec<_>>()
                            .join(", "),
                    ]);
                });

                event!(target: PRINT_TARGET, Level::INFO, "{table}");
            }
        }

        Ok(())
    }
}
