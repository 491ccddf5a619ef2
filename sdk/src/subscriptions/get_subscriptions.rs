/// `GetSubscriptions` command is used to list all subscriptions of the project.
/// It has no additional payload.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GetSubscriptions {}
