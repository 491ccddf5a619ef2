use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::serde_as;
use std::collections::BTreeMap;

/// `PubSubMessage` is the message published to a topic.
/// The payload is opaque bytes, base64 encoded on the wire.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubSubMessage {
    /// The message payload.
    #[serde_as(as = "Base64")]
    pub data: Vec<u8>,
    /// Optional key/value attributes sent along with the payload.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl PubSubMessage {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            attributes: BTreeMap::new(),
        }
    }
}
