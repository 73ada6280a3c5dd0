//! Published-message payload.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Payload of a message-published event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePublishedData {
    /// The published message.
    pub message: PubsubMessage,
    /// Subscription the message was delivered on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

/// A published message. The body travels base64-encoded on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PubsubMessage {
    /// Broker-assigned message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Base64-encoded message body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Producer-set attributes.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl PubsubMessage {
    /// Decode the message body as UTF-8 text.
    ///
    /// Returns `None` when the body is absent, empty, not valid base64, or
    /// not valid UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let data = self.data.as_deref()?;
        if data.is_empty() {
            return None;
        }
        let bytes = BASE64.decode(data).ok()?;
        String::from_utf8(bytes).ok().filter(|s| !s.is_empty())
    }

    /// Build a message with a text body (encodes to base64).
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            message_id: None,
            data: Some(BASE64.encode(text)),
            attributes: HashMap::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
