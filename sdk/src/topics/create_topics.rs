use crate::error::PubSubError;
use crate::topics::validate_topic_ids;
use crate::validatable::Validatable;
use std::fmt::Display;

/// `CreateTopics` command is used to create one or more topics.
/// It has additional payload:
/// - `topic_ids` - the topics to create, short ids or fully-qualified names.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CreateTopics {
    /// The topics to create, in the order they are requested.
    pub topic_ids: Vec<String>,
}

impl Validatable<PubSubError> for CreateTopics {
    fn validate(&self) -> Result<(), PubSubError> {
        validate_topic_ids(&self.topic_ids)
    }
}

impl Display for CreateTopics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.topic_ids.join(", "))
    }
}
