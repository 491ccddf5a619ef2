use crate::error::PubSubError;
use crate::topics::validate_topic_id;
use crate::validatable::Validatable;
use std::fmt::Display;

/// `GetTopicSubscriptions` command is used to list the subscriptions attached to a topic.
/// It has additional payload:
/// - `topic_id` - the topic whose subscriptions are listed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GetTopicSubscriptions {
    /// The topic, short id or fully-qualified name.
    pub topic_id: String,
}

impl Validatable<PubSubError> for GetTopicSubscriptions {
    fn validate(&self) -> Result<(), PubSubError> {
        validate_topic_id(&self.topic_id)
    }
}

impl Display for GetTopicSubscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.topic_id)
    }
}
