use crate::client::Client;
use crate::error::PubSubError;
use anyhow::{Error, Result};
use async_trait::async_trait;

pub static PRINT_TARGET: &str = "pubsub::cli::output";

#[async_trait]
pub trait CliCommand {
    fn explain(&self) -> String;
    /// Checks the arguments locally, before any request is sent to the service.
    fn validate(&self) -> Result<(), PubSubError> {
        Ok(())
    }
    async fn execute_cmd(&mut self, client: &dyn Client) -> Result<(), Error>;
}
