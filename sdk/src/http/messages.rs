use crate::client::MessageClient;
use crate::error::PubSubError;
use crate::http::client::{get_action_path, HttpClient};
use crate::models::message::PubSubMessage;
use crate::models::resource_name::ResourceName;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct PublishRequest<'a> {
    messages: &'a [PubSubMessage],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublishResponse {
    #[serde(default)]
    message_ids: Vec<String>,
}

#[async_trait]
impl MessageClient for HttpClient {
    async fn publish_message(
        &self,
        topic_id: &str,
        message: &PubSubMessage,
    ) -> Result<String, PubSubError> {
        let name = ResourceName::topic(self.project_id(), topic_id)?;
        let request = PublishRequest {
            messages: std::slice::from_ref(message),
        };
        let response = self
            .post(&get_action_path(&name, "publish"), &request)
            .await?;
        let published: PublishResponse = response.json().await?;
        published
            .message_ids
            .into_iter()
            .next()
            .ok_or(PubSubError::EmptyResponse)
    }
}
