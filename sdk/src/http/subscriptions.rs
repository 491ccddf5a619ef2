use crate::client::SubscriptionClient;
use crate::error::PubSubError;
use crate::http::client::{get_collection_path, get_details_path, HttpClient};
use crate::http::paging::{paginate, Page};
use crate::models::resource_name::{ResourceKind, ResourceName};
use crate::models::subscription::Subscription;
use crate::utils::ack_deadline::AckDeadline;
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSubscriptionRequest {
    topic: String,
    ack_deadline_seconds: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListSubscriptionsResponse {
    #[serde(default)]
    subscriptions: Vec<Subscription>,
    next_page_token: Option<String>,
}

impl Page for ListSubscriptionsResponse {
    type Item = Subscription;

    fn into_parts(self) -> (Vec<Subscription>, Option<String>) {
        (self.subscriptions, self.next_page_token)
    }
}

#[async_trait]
impl SubscriptionClient for HttpClient {
    async fn create_subscription(
        &self,
        subscription_id: &str,
        topic_id: &str,
        ack_deadline: AckDeadline,
    ) -> Result<Subscription, PubSubError> {
        let name = ResourceName::subscription(self.project_id(), subscription_id)?;
        let topic = ResourceName::topic(self.project_id(), topic_id)?;
        let request = CreateSubscriptionRequest {
            topic: topic.to_string(),
            ack_deadline_seconds: ack_deadline.as_secs(),
        };
        let response = self.put(&get_details_path(&name), &request).await?;
        let subscription = response.json().await?;
        Ok(subscription)
    }

    async fn delete_subscription(&self, subscription_id: &str) -> Result<(), PubSubError> {
        let name = ResourceName::subscription(self.project_id(), subscription_id)?;
        self.delete(&get_details_path(&name)).await?;
        Ok(())
    }

    fn get_subscriptions(&self) -> BoxStream<'_, Result<Subscription, PubSubError>> {
        let path = get_collection_path(self.project_id(), ResourceKind::Subscription);
        paginate(move |page_token| {
            self.get_page::<ListSubscriptionsResponse>(path.clone(), page_token)
        })
    }
}
