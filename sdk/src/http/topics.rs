use crate::client::TopicClient;
use crate::error::PubSubError;
use crate::http::client::{get_collection_path, get_details_path, HttpClient};
use crate::http::paging::{paginate, Page};
use crate::models::resource_name::{ResourceKind, ResourceName};
use crate::models::topic::Topic;
use async_trait::async_trait;
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListTopicsResponse {
    #[serde(default)]
    topics: Vec<Topic>,
    next_page_token: Option<String>,
}

impl Page for ListTopicsResponse {
    type Item = Topic;

    fn into_parts(self) -> (Vec<Topic>, Option<String>) {
        (self.topics, self.next_page_token)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListTopicSubscriptionsResponse {
    #[serde(default)]
    subscriptions: Vec<String>,
    next_page_token: Option<String>,
}

impl Page for ListTopicSubscriptionsResponse {
    type Item = String;

    fn into_parts(self) -> (Vec<String>, Option<String>) {
        (self.subscriptions, self.next_page_token)
    }
}

#[async_trait]
impl TopicClient for HttpClient {
    async fn create_topic(&self, topic_id: &str) -> Result<Topic, PubSubError> {
        let name = ResourceName::topic(self.project_id(), topic_id)?;
        let response = self
            .put(&get_details_path(&name), &serde_json::json!({}))
            .await?;
        let topic = response.json().await?;
        Ok(topic)
    }

    async fn delete_topic(&self, topic_id: &str) -> Result<(), PubSubError> {
        let name = ResourceName::topic(self.project_id(), topic_id)?;
        self.delete(&get_details_path(&name)).await?;
        Ok(())
    }

    fn get_topics(&self) -> BoxStream<'_, Result<Topic, PubSubError>> {
        let path = get_collection_path(self.project_id(), ResourceKind::Topic);
        paginate(move |page_token| self.get_page::<ListTopicsResponse>(path.clone(), page_token))
    }

    fn get_topic_subscriptions(&self, topic_id: &str) -> BoxStream<'_, Result<String, PubSubError>> {
        let name = match ResourceName::topic(self.project_id(), topic_id) {
            Ok(name) => name,
            Err(error) => return stream::once(async move { Err(error) }).boxed(),
        };
        let mut path = get_details_path(&name);
        path.push(ResourceKind::Subscription.collection().to_string());
        paginate(move |page_token| {
            self.get_page::<ListTopicSubscriptionsResponse>(path.clone(), page_token)
        })
    }
}
