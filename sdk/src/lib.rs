pub mod args;
#[cfg(feature = "pubsub-cli")]
pub mod cli;
pub mod cli_command;
pub mod client;
pub mod client_error;
pub mod client_provider;
pub mod error;
pub mod http;
pub mod messages;
pub mod models;
pub mod subscriptions;
pub mod topics;
pub mod utils;
pub mod validatable;
