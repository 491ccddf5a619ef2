use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::error::PubSubError;
use crate::messages::publish_message::PublishMessage;
use crate::models::message::PubSubMessage;
use crate::validatable::Validatable;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct PublishMessageCmd {
    publish_message: PublishMessage,
}

impl PublishMessageCmd {
    pub fn new(topic_id: String, message: String, attributes: Vec<(String, String)>) -> Self {
        let mut message = PubSubMessage::new(message);
        message.attributes.extend(attributes);
        Self {
            publish_message: PublishMessage { topic_id, message },
        }
    }
}

#[async_trait]
impl CliCommand for PublishMessageCmd {
    fn explain(&self) -> String {
        format!(
            "publish message to topic: {}",
            self.publish_message.topic_id
        )
    }

    fn validate(&self) -> Result<(), PubSubError> {
        self.publish_message.validate()
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let topic_id = &self.publish_message.topic_id;
        let message_id = client
            .publish_message(topic_id, &self.publish_message.message)
            .await
            .with_context(|| format!("Problem publishing message to topic: {topic_id}"))?;

        event!(target: PRINT_TARGET, Level::INFO, "Published a message; msg ID: {message_id}");

        Ok(())
    }
}
