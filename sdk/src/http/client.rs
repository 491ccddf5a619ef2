use crate::client::Client;
use crate::error::PubSubError;
use crate::http::config::HttpClientConfig;
use crate::models::resource_name::{is_valid_project, ResourceKind, ResourceName, PROJECTS};
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace};

pub(crate) const API_VERSION: &str = "v1";
const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
const NOT_FOUND: &str = "NOT_FOUND";

/// REST client for a Cloud Pub/Sub compatible service (or its emulator).
#[derive(Debug)]
pub struct HttpClient {
    pub api_url: Url,
    project_id: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

#[async_trait]
impl Client for HttpClient {
    async fn connect(&self) -> Result<(), PubSubError> {
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), PubSubError> {
        Ok(())
    }
}

impl HttpClient {
    pub fn new(api_url: &str, project_id: &str) -> Result<Self, PubSubError> {
        Self::create(Arc::new(HttpClientConfig {
            api_url: api_url.to_string(),
            project_id: project_id.to_string(),
        }))
    }

    pub fn create(config: Arc<HttpClientConfig>) -> Result<Self, PubSubError> {
        if !is_valid_project(&config.project_id) {
            return Err(PubSubError::InvalidConfiguration);
        }

        let api_url = Url::parse(&config.api_url).map_err(|_| PubSubError::CannotParseUrl)?;
        if api_url.cannot_be_a_base() {
            return Err(PubSubError::CannotParseUrl);
        }

        Ok(Self {
            api_url,
            project_id: config.project_id.clone(),
            client: reqwest::Client::new(),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub async fn get_with_query<T: Serialize + ?Sized>(
        &self,
        path: &[String],
        query: &T,
    ) -> Result<Response, PubSubError> {
        let url = self.get_url(path)?;
        trace!("Sending GET request with query to: {url}");
        let response = self.client.get(url).query(query).send().await?;
        Self::handle_response(response).await
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &[String],
        payload: &T,
    ) -> Result<Response, PubSubError> {
        let url = self.get_url(path)?;
        trace!("Sending POST request to: {url}");
        let response = self.client.post(url).json(payload).send().await?;
        Self::handle_response(response).await
    }

    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path: &[String],
        payload: &T,
    ) -> Result<Response, PubSubError> {
        let url = self.get_url(path)?;
        trace!("Sending PUT request to: {url}");
        let response = self.client.put(url).json(payload).send().await?;
        Self::handle_response(response).await
    }

    pub async fn delete(&self, path: &[String]) -> Result<Response, PubSubError> {
        let url = self.get_url(path)?;
        trace!("Sending DELETE request to: {url}");
        let response = self.client.delete(url).send().await?;
        Self::handle_response(response).await
    }

    /// Append the path segments to the API URL, each one percent-encoded,
    /// so `?`, `#` and `/` inside a segment never change the target.
    pub fn get_url(&self, path: &[String]) -> Result<Url, PubSubError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| PubSubError::CannotParseUrl)?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    /// Fetch a single page of a listing, `page_token` is `None` for the first page.
    pub(crate) async fn get_page<P: DeserializeOwned>(
        &self,
        path: Vec<String>,
        page_token: Option<String>,
    ) -> Result<P, PubSubError> {
        let response = self
            .get_with_query(&path, &PageQuery { page_token })
            .await?;
        let page = response.json().await?;
        Ok(page)
    }

    async fn handle_response(response: Response) -> Result<Response, PubSubError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("Received error response with status: {status}, body: {body}");
        let (status_name, message) = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => (error.error.status, error.error.message),
            Err(_) => (String::new(), body),
        };

        Err(match (status.as_u16(), status_name.as_str()) {
            (409, _) | (_, ALREADY_EXISTS) => PubSubError::AlreadyExists(message),
            (404, _) | (_, NOT_FOUND) => PubSubError::NotFound(message),
            (code, _) => PubSubError::HttpResponseError(code, message),
        })
    }
}

/// `v1/projects/{project}/{collection}/{id}`
pub(crate) fn get_details_path(name: &ResourceName) -> Vec<String> {
    std::iter::once(API_VERSION)
        .chain(name.path_segments())
        .map(str::to_string)
        .collect()
}

/// `v1/projects/{project}/{collection}/{id}:{action}`, e.g. `:publish`.
pub(crate) fn get_action_path(name: &ResourceName, action: &str) -> Vec<String> {
    let mut path = get_details_path(name);
    if let Some(id) = path.last_mut() {
        id.push(':');
        id.push_str(action);
    }
    path
}

/// `v1/projects/{project}/{collection}`
pub(crate) fn get_collection_path(project_id: &str, kind: ResourceKind) -> Vec<String> {
    [API_VERSION, PROJECTS, project_id, kind.collection()]
        .map(str::to_string)
        .into()
}
