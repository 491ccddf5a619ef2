use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::error::PubSubError;
use crate::topics::create_topics::CreateTopics;
use crate::validatable::Validatable;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct CreateTopicsCmd {
    create_topics: CreateTopics,
}

impl CreateTopicsCmd {
    pub fn new(topic_ids: Vec<String>) -> Self {
        Self {
            create_topics: CreateTopics { topic_ids },
        }
    }
}

#[async_trait]
impl CliCommand for CreateTopicsCmd {
    fn explain(&self) -> String {
        format!("create topics: {}", self.create_topics)
    }

    fn validate(&self) -> Result<(), PubSubError> {
        self.create_topics.validate()
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        for topic_id in &self.create_topics.topic_ids {
            let topic = client
                .create_topic(topic_id)
                .await
                .with_context(|| format!("Problem creating topic: {topic_id}"))?;

            event!(target: PRINT_TARGET, Level::INFO, "Topic created: {}", topic.name);
        }

        Ok(())
    }
}
