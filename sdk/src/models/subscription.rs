use crate::models::topic::short_name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `Subscription` is a named, durable attachment to a single topic.
/// It consists of the following fields:
/// - `name`: the fully-qualified name, `projects/{project}/subscriptions/{subscription}`.
/// - `topic`: the fully-qualified name of the topic it is attached to.
/// - `ack_deadline_seconds`: the acknowledgment deadline configured on the service.
/// - `labels`: the optional labels attached to the subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// The fully-qualified name of the subscription.
    pub name: String,
    /// The fully-qualified name of the topic.
    pub topic: String,
    /// The acknowledgment deadline in seconds.
    #[serde(default)]
    pub ack_deadline_seconds: u32,
    /// The labels attached to the subscription.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl Subscription {
    pub fn id(&self) -> &str {
        short_name(&self.name)
    }

    pub fn topic_id(&self) -> &str {
        short_name(&self.topic)
    }
}
