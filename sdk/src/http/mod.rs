pub mod client;
pub mod config;
pub mod messages;
pub(crate) mod paging;
pub mod subscriptions;
pub mod topics;
