use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum PubSubCmdError {
    #[error(transparent)]
    PubSubClient(#[from] pubsub_sdk::client_error::ClientError),

    #[error(transparent)]
    PubSub(#[from] pubsub_sdk::error::PubSubError),

    #[error(transparent)]
    CommandError(#[from] anyhow::Error),

    #[error("Cannot open debug log file {}: {source}", .path.display())]
    DebugLogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot install logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),
}
