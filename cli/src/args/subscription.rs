use crate::args::common::ListMode;
use clap::{Args, Subcommand};
use pubsub_sdk::utils::ack_deadline::AckDeadline;

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum SubscriptionAction {
    /// Create one or more subscriptions attached to the given topic
    ///
    /// Subscriptions are created in the given order, each with the same
    /// acknowledgment deadline (20 seconds unless overridden). The first
    /// failure stops the remaining ones.
    ///
    /// Examples
    ///  pubsubctl subscriptions create billing --topic orders
    ///  pubsubctl subscriptions create billing audit --topic orders --ack-deadline 1m
    #[clap(verbatim_doc_comment, visible_alias = "c")]
    Create(SubscriptionCreateArgs),
    /// Delete one or more subscriptions
    ///
    /// Examples
    ///  pubsubctl subscriptions delete billing
    ///  pubsubctl subscriptions delete billing audit
    #[clap(verbatim_doc_comment, visible_alias = "d")]
    Delete(SubscriptionDeleteArgs),
    /// List all subscriptions of the project
    ///
    /// Examples
    ///  pubsubctl subscriptions list
    ///  pubsubctl subscriptions list --list-mode table
    #[clap(verbatim_doc_comment, visible_alias = "l")]
    List(SubscriptionListArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct SubscriptionCreateArgs {
    /// Subscriptions to create
    #[arg(value_name = "SUBSCRIPTION")]
    pub(crate) subscription_ids: Vec<String>,

    /// Topic the subscriptions are attached to
    #[arg(short, long, value_name = "TOPIC")]
    pub(crate) topic: String,

    /// Acknowledgment deadline in human-readable format like 20s or 1m 30s
    ///
    /// Must be between 10s and 10min.
    #[arg(short, long, default_value_t = AckDeadline::default(), verbatim_doc_comment)]
    pub(crate) ack_deadline: AckDeadline,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct SubscriptionDeleteArgs {
    /// Subscriptions to delete
    #[arg(value_name = "SUBSCRIPTION")]
    pub(crate) subscription_ids: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct SubscriptionListArgs {
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::List)]
    pub(crate) list_mode: ListMode,
}
