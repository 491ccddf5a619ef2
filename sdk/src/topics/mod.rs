pub mod create_topics;
pub mod delete_topics;
pub mod get_topic_subscriptions;
pub mod get_topics;

use crate::error::PubSubError;
use crate::models::resource_name::{ResourceKind, ResourceName};

pub(crate) fn validate_topic_ids(topic_ids: &[String]) -> Result<(), PubSubError> {
    if topic_ids.is_empty() {
        return Err(PubSubError::TopicNotSpecified);
    }

    for topic_id in topic_ids {
        validate_topic_id(topic_id)?;
    }

    Ok(())
}

pub(crate) fn validate_topic_id(topic_id: &str) -> Result<(), PubSubError> {
    ResourceName::validate(ResourceKind::Topic, topic_id)
}
