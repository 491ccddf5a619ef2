use crate::args::Args;
use crate::client::Client;
use crate::client_error::ClientError;
use crate::http::client::HttpClient;
use crate::http::config::HttpClientConfig;
use std::sync::Arc;
use tracing::debug;

/// Configuration for the `ClientProvider`.
/// It consists of the following fields:
/// - `http`: the configuration for the HTTP (REST) transport.
#[derive(Debug, Default)]
pub struct ClientProviderConfig {
    /// The configuration for the HTTP transport.
    pub http: Arc<HttpClientConfig>,
}

impl ClientProviderConfig {
    /// Create a new `ClientProviderConfig` from the provided `Args`.
    pub fn from_args(args: Args) -> Result<Self, ClientError> {
        if args.project.trim().is_empty() {
            return Err(ClientError::InvalidConfiguration(
                "project must not be empty".to_string(),
            ));
        }

        Ok(Self {
            http: Arc::new(HttpClientConfig {
                api_url: args.get_api_url(),
                project_id: args.project,
            }),
        })
    }
}

/// Create a connected `Client` based on the provided configuration.
pub async fn get_client(config: Arc<ClientProviderConfig>) -> Result<Box<dyn Client>, ClientError> {
    debug!(
        "Creating HTTP client for project: {}, API URL: {}",
        config.http.project_id, config.http.api_url
    );
    let client = HttpClient::create(config.http.clone())?;
    client.connect().await?;
    Ok(Box::new(client))
}
