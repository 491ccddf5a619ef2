use crate::error::PubSubError;
use crate::subscriptions::validate_subscription_ids;
use crate::topics::validate_topic_id;
use crate::utils::ack_deadline::AckDeadline;
use crate::validatable::Validatable;
use std::fmt::Display;

/// `CreateSubscriptions` command is used to create one or more subscriptions bound to a topic.
/// It has additional payload:
/// - `topic_id` - the topic every subscription is attached to.
/// - `subscription_ids` - the subscriptions to create.
/// - `ack_deadline` - the acknowledgment deadline set on every subscription.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CreateSubscriptions {
    /// The topic, short id or fully-qualified name.
    pub topic_id: String,
    /// The subscriptions to create, in the order they are requested.
    pub subscription_ids: Vec<String>,
    /// The acknowledgment deadline, 20 seconds unless overridden.
    pub ack_deadline: AckDeadline,
}

impl Validatable<PubSubError> for CreateSubscriptions {
    fn validate(&self) -> Result<(), PubSubError> {
        validate_subscription_ids(&self.subscription_ids)?;
        validate_topic_id(&self.topic_id)
    }
}

impl Display for CreateSubscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.subscription_ids.join(", "),
            self.topic_id,
            self.ack_deadline
        )
    }
}
