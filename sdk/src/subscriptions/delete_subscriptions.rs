use crate::error::PubSubError;
use crate::subscriptions::validate_subscription_ids;
use crate::validatable::Validatable;
use std::fmt::Display;

/// `DeleteSubscriptions` command is used to delete one or more subscriptions.
/// It has additional payload:
/// - `subscription_ids` - the subscriptions to delete.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeleteSubscriptions {
    /// The subscriptions to delete, in the order they are requested.
    pub subscription_ids: Vec<String>,
}

impl Validatable<PubSubError> for DeleteSubscriptions {
    fn validate(&self) -> Result<(), PubSubError> {
        validate_subscription_ids(&self.subscription_ids)
    }
}

impl Display for DeleteSubscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.subscription_ids.join(", "))
    }
}
