mod common;
mod subscriptions;
