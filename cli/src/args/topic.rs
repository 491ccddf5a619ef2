use crate::args::common::ListMode;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum TopicAction {
    /// Create one or more topics
    ///
    /// Topic can be specified as a topic ID or a fully-qualified name
    /// (projects/PROJECT/topics/TOPIC). Topics are created in the given
    /// order and the first failure stops the remaining ones.
    ///
    /// Examples
    ///  pubsubctl topics create demo-topic
    ///  pubsubctl topics create orders payments audit
    #[clap(verbatim_doc_comment, visible_alias = "c")]
    Create(TopicCreateArgs),
    /// Delete one or more topics
    ///
    /// Topics are deleted in the given order and the first failure stops
    /// the remaining ones.
    ///
    /// Examples
    ///  pubsubctl topics delete demo-topic
    ///  pubsubctl topics delete orders payments
    #[clap(verbatim_doc_comment, visible_alias = "d")]
    Delete(TopicDeleteArgs),
    /// List all topics of the project
    ///
    /// Examples
    ///  pubsubctl topics list
    ///  pubsubctl topics list --list-mode table
    #[clap(verbatim_doc_comment, visible_alias = "l")]
    List(TopicListArgs),
    /// List the subscriptions attached to a topic
    ///
    /// Examples
    ///  pubsubctl topics list-subscriptions orders
    #[clap(verbatim_doc_comment)]
    ListSubscriptions(TopicListSubscriptionsArgs),
    /// Publish a message to the given topic and print its message ID
    ///
    /// Examples
    ///  pubsubctl topics publish orders --message "hello world"
    ///  pubsubctl topics publish orders --message "{}" --attribute origin=cli
    #[clap(verbatim_doc_comment, visible_alias = "p")]
    Publish(TopicPublishArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicCreateArgs {
    /// Topics to create
    #[arg(value_name = "TOPIC")]
    pub(crate) topic_ids: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicDeleteArgs {
    /// Topics to delete
    #[arg(value_name = "TOPIC")]
    pub(crate) topic_ids: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicListArgs {
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::List)]
    pub(crate) list_mode: ListMode,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicListSubscriptionsArgs {
    /// Topic to list subscriptions of
    #[arg(value_name = "TOPIC")]
    pub(crate) topic_id: Option<String>,

    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::List)]
    pub(crate) list_mode: ListMode,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicPublishArgs {
    /// Topic to publish the message to
    #[arg(value_name = "TOPIC")]
    pub(crate) topic_id: Option<String>,

    /// The body of the message to publish to the given topic
    #[arg(short, long, value_name = "MESSAGE")]
    pub(crate) message: String,

    /// Message attribute in the key=value format, can be repeated
    #[arg(short, long = "attribute", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub(crate) attributes: Vec<(String, String)>,
}

fn parse_key_val(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("invalid KEY=VALUE: no `=` or empty key found in `{input}`")),
    }
}
