use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::error::PubSubError;
use crate::topics::delete_topics::DeleteTopics;
use crate::validatable::Validatable;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct DeleteTopicsCmd {
    delete_topics: DeleteTopics,
}

impl DeleteTopicsCmd {
    pub fn new(topic_ids: Vec<String>) -> Self {
        Self {
            delete_topics: DeleteTopics { topic_ids },
        }
    }
}

#[async_trait]
impl CliCommand for DeleteTopicsCmd {
    fn explain(&self) -> String {
        format!("delete topics: {}", self.delete_topics)
    }

    fn validate(&self) -> Result<(), PubSubError> {
        self.delete_topics.validate()
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        for topic_id in &self.delete_topics.topic_ids {
            client
                .delete_topic(topic_id)
                .await
                .with_context(|| format!("Problem deleting topic: {topic_id}"))?;

            event!(target: PRINT_TARGET, Level::INFO, "Topic deleted: {topic_id}");
        }

        Ok(())
    }
}
