pub mod create_subscriptions;
pub mod delete_subscriptions;
pub mod get_subscriptions;

use crate::error::PubSubError;
use crate::models::resource_name::{ResourceKind, ResourceName};

pub(crate) fn validate_subscription_ids(subscription_ids: &[String]) -> Result<(), PubSubError> {
    if subscription_ids.is_empty() {
        return Err(PubSubError::SubscriptionNotSpecified);
    }

    subscription_ids.iter().try_for_each(|subscription_id| {
        ResourceName::validate(ResourceKind::Subscription, subscription_id)
    })
}
