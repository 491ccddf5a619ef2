use crate::error::PubSubError;
use thiserror::Error;

/// The error type for the client provider.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration is invalid and no client can be created from it.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// SDK error.
    #[error(transparent)]
    SdkError(#[from] PubSubError),
}
