use crate::http::config::{DEFAULT_EMULATOR_HOST, DEFAULT_PROJECT_ID};
use clap::Parser;

/// The arguments used by the `ClientProviderConfig` to create a client.
/// Every option can also be provided through its environment variable,
/// the command line value takes precedence.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The project owning the topics and subscriptions
    #[arg(long, env = "PUBSUB_PROJECT_ID", default_value = DEFAULT_PROJECT_ID)]
    pub project: String,

    /// The emulator host and port, used when no API URL is given
    #[arg(long, env = "PUBSUB_EMULATOR_HOST", default_value = DEFAULT_EMULATOR_HOST)]
    pub emulator_host: String,

    /// The optional base URL of the REST API, overrides the emulator host
    ///
    /// [example: http://localhost:8085]
    #[arg(long, env = "PUBSUB_API_URL")]
    pub api_url: Option<String>,
}

impl Default for Args {
    fn default() -> Args {
        Args {
            project: DEFAULT_PROJECT_ID.to_string(),
            emulator_host: DEFAULT_EMULATOR_HOST.to_string(),
            api_url: None,
        }
    }
}

impl Args {
    /// The base URL requests are sent to.
    pub fn get_api_url(&self) -> String {
        match &self.api_url {
            Some(api_url) => api_url.clone(),
            None if self.emulator_host.contains("://") => self.emulator_host.clone(),
            None => format!("http://{}", self.emulator_host),
        }
    }
}
