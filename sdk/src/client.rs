use crate::error::PubSubError;
use crate::models::message::PubSubMessage;
use crate::models::subscription::Subscription;
use crate::models::topic::Topic;
use crate::utils::ack_deadline::AckDeadline;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// The client trait which is the main interface to the messaging service.
/// It consists of multiple modules, each of which is responsible for a specific set of commands.
/// Every listing method returns a stream which ends (yields `None`) once the service
/// reports that there are no more results; failures are yielded as `Err` items.
#[async_trait]
pub trait Client: TopicClient + SubscriptionClient + MessageClient + Sync + Send {
    /// Prepare the client for sending requests.
    async fn connect(&self) -> Result<(), PubSubError>;
    /// Release any resources held by the client.
    async fn disconnect(&self) -> Result<(), PubSubError>;
}

/// This trait defines the methods to interact with the topic module.
#[async_trait]
pub trait TopicClient {
    /// Create a new topic with the given ID or fully-qualified name.
    async fn create_topic(&self, topic_id: &str) -> Result<Topic, PubSubError>;
    /// Delete the topic with the given ID or fully-qualified name.
    async fn delete_topic(&self, topic_id: &str) -> Result<(), PubSubError>;
    /// Stream all topics of the project, page by page.
    fn get_topics(&self) -> BoxStream<'_, Result<Topic, PubSubError>>;
    /// Stream the fully-qualified names of the subscriptions attached to the topic.
    fn get_topic_subscriptions(&self, topic_id: &str) -> BoxStream<'_, Result<String, PubSubError>>;
}

/// This trait defines the methods to interact with the subscription module.
#[async_trait]
pub trait SubscriptionClient {
    /// Create a new subscription attached to the given topic.
    async fn create_subscription(
        &self,
        subscription_id: &str,
        topic_id: &str,
        ack_deadline: AckDeadline,
    ) -> Result<Subscription, PubSubError>;
    /// Delete the subscription with the given ID or fully-qualified name.
    async fn delete_subscription(&self, subscription_id: &str) -> Result<(), PubSubError>;
    /// Stream all subscriptions of the project, page by page.
    fn get_subscriptions(&self) -> BoxStream<'_, Result<Subscription, PubSubError>>;
}

/// This trait defines the methods to interact with the messaging module.
#[async_trait]
pub trait MessageClient {
    /// Publish a single message and wait for the identifier assigned by the service.
    async fn publish_message(
        &self,
        topic_id: &str,
        message: &PubSubMessage,
    ) -> Result<String, PubSubError>;
}
