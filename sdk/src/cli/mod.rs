pub mod list_output;
pub mod message;
pub mod subscriptions;
pub mod topics;
