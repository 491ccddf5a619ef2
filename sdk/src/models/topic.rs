use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `Topic` is a named channel to which messages are published.
/// It consists of the following fields:
/// - `name`: the fully-qualified name, `projects/{project}/topics/{topic}`.
/// - `labels`: the optional labels attached to the topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// The fully-qualified name of the topic.
    pub name: String,
    /// The labels attached to the topic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl Topic {
    /// The last segment of the name, e.g. `demo-topic`.
    pub fn id(&self) -> &str {
        short_name(&self.name)
    }
}

pub(crate) fn short_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
