use thiserror::Error;

#[derive(Debug, Error)]
pub enum PubSubError {
    #[error("TOPIC: Must be specified.")]
    TopicNotSpecified,
    #[error("SUBSCRIPTION: Must be specified.")]
    SubscriptionNotSpecified,
    #[error("Invalid resource name: {0}")]
    InvalidResourceName(String),
    #[error("Invalid acknowledgment deadline: {0}")]
    InvalidAckDeadline(String),
    #[error("Invalid configuration")]
    InvalidConfiguration,
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("Empty response")]
    EmptyResponse,
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("HTTP response error, status: {0}, message: {1}")]
    HttpResponseError(u16, String),
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
