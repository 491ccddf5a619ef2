use crate::error::PubSubError;
use crate::models::message::PubSubMessage;
use crate::topics::validate_topic_id;
use crate::validatable::Validatable;
use std::fmt::Display;

/// `PublishMessage` command is used to publish a single message to a topic.
/// It has additional payload:
/// - `topic_id` - the topic to publish to.
/// - `message` - the message to publish.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishMessage {
    /// The topic, short id or fully-qualified name.
    pub topic_id: String,
    /// The message to publish.
    pub message: PubSubMessage,
}

impl Validatable<PubSubError> for PublishMessage {
    fn validate(&self) -> Result<(), PubSubError> {
        validate_topic_id(&self.topic_id)
    }
}

impl Display for PublishMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{} bytes", self.topic_id, self.message.data.len())
    }
}
