pub mod create_topics;
pub mod delete_topics;
pub mod get_topic_subscriptions;
pub mod get_topics;
