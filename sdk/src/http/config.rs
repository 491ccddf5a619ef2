pub const DEFAULT_EMULATOR_HOST: &str = "localhost:8085";
pub const DEFAULT_API_URL: &str = "http://localhost:8085";
pub const DEFAULT_PROJECT_ID: &str = "foobar";

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// The base URL of the REST API, e.g. the emulator `http://localhost:8085`.
    pub api_url: String,
    /// The project owning the topics and subscriptions.
    pub project_id: String,
}

impl Default for HttpClientConfig {
    fn default() -> HttpClientConfig {
        HttpClientConfig {
            api_url: DEFAULT_API_URL.to_string(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
        }
    }
}
