pub mod create_subscriptions;
pub mod delete_subscriptions;
pub mod get_subscriptions;
