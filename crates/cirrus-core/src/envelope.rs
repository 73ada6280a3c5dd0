//! The [`CloudEvent`] struct — the event envelope delivered to functions.
//!
//! Envelopes carry delivery metadata (`id`, `type`, `source`, `time`) at the
//! top level and a `data` payload stored as opaque [`serde_json::Value`].
//! This matches the CloudEvents 1.0 JSON format exactly for wire
//! compatibility: lowercase attribute names, optional attributes omitted
//! when unset.
//!
//! Typed access to the payload is opt-in — the envelope never interprets
//! `data` itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The spec version stamped on envelopes built by this crate.
pub const SPEC_VERSION: &str = "1.0";

/// An event envelope.
///
/// Required attributes (`id`, `type`, `source`, `specversion`) are always
/// present; everything else is optional and skipped on the wire when unset.
/// The payload is opaque `serde_json::Value` — deserialization into a typed
/// payload happens at the dispatch boundary, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloudEvent {
    /// Producer-assigned event ID, unique per source.
    pub id: String,
    /// Event type discriminator (URI-like, e.g.
    /// `google.cloud.pubsub.topic.v1.messagePublished`).
    #[serde(rename = "type")]
    pub event_type: String,
    /// URI reference identifying the event producer.
    pub source: String,
    /// CloudEvents spec version (`"1.0"`).
    pub specversion: String,
    /// Subject of the event within the source (e.g. an object name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// When the occurrence happened (RFC 3339 on the wire).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// URI of the schema the payload adheres to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataschema: Option<String>,
    /// Content type of `data` (e.g. `application/json`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacontenttype: Option<String>,
    /// Event payload (opaque JSON). Absent for untyped events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CloudEvent {
    /// Create an envelope with the required attributes and no payload.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        event_type: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            event_type: event_type.into(),
            source: source.into(),
            specversion: SPEC_VERSION.to_owned(),
            subject: None,
            time: None,
            dataschema: None,
            datacontenttype: None,
            data: None,
        }
    }

    /// Create an envelope with a generated ID (UUID v7, time-ordered) and
    /// the current time.
    ///
    /// For in-process producers and test fixtures; events arriving over the
    /// wire carry their producer's ID.
    #[must_use]
    pub fn generated(event_type: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::now_v7().to_string(), event_type, source).with_time(Utc::now())
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the occurrence time.
    #[must_use]
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the payload content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.datacontenttype = Some(content_type.into());
        self
    }

    /// Set the payload schema URI.
    #[must_use]
    pub fn with_dataschema(mut self, dataschema: impl Into<String>) -> Self {
        self.dataschema = Some(dataschema.into());
        self
    }

    /// Whether the envelope carries a payload.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_sets_required_attributes() {
        let e = CloudEvent::new("ev-1", "com.example.test", "//test/source");
        assert_eq!(e.id, "ev-1");
        assert_eq!(e.event_type, "com.example.test");
        assert_eq!(e.source, "//test/source");
        assert_eq!(e.specversion, "1.0");
        assert!(!e.has_data());
    }

    #[test]
    fn generated_ids_are_unique_uuids() {
        let a = CloudEvent::generated("t", "s");
        let b = CloudEvent::generated("t", "s");
        assert_ne!(a.id, b.id);
        assert!(uuid::Uuid::parse_str(&a.id).is_ok());
        assert!(a.time.is_some());
    }

    #[test]
    fn wire_format_uses_lowercase_attribute_names() {
        let e = CloudEvent::new("ev-1", "com.example.test", "//test/source")
            .with_content_type("application/json")
            .with_data(json!({"x": 1}));
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["id"], "ev-1");
        assert_eq!(json["type"], "com.example.test");
        assert_eq!(json["source"], "//test/source");
        assert_eq!(json["specversion"], "1.0");
        assert_eq!(json["datacontenttype"], "application/json");
        assert_eq!(json["data"]["x"], 1);
    }

    #[test]
    fn unset_optional_attributes_are_omitted() {
        let e = CloudEvent::new("ev-1", "t", "s");
        let json = serde_json::to_value(&e).unwrap();
        assert!(json.get("subject").is_none());
        assert!(json.get("time").is_none());
        assert!(json.get("dataschema").is_none());
        assert!(json.get("datacontenttype").is_none());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn time_is_rfc3339_on_the_wire() {
        let t: DateTime<Utc> = "2024-05-01T12:30:00Z".parse().unwrap();
        let e = CloudEvent::new("ev-1", "t", "s").with_time(t);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["time"], "2024-05-01T12:30:00Z");
    }

    #[test]
    fn serde_roundtrip() {
        let e = CloudEvent::new("ev-2", "com.example.roundtrip", "//src")
            .with_subject("objects/a.txt")
            .with_dataschema("https://example.com/schema")
            .with_data(json!({"bucket": "b", "name": "a.txt"}));
        let json = serde_json::to_string(&e).unwrap();
        let back: CloudEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn deserialize_from_producer_json() {
        let raw = r#"{
            "id": "1234",
            "type": "google.cloud.storage.object.v1.finalized",
            "source": "//storage.googleapis.com/projects/_/buckets/my-bucket",
            "specversion": "1.0",
            "subject": "objects/file.txt",
            "data": {"bucket": "my-bucket", "name": "file.txt"}
        }"#;
        let e: CloudEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(e.id, "1234");
        assert_eq!(e.event_type, "google.cloud.storage.object.v1.finalized");
        assert_eq!(e.subject.as_deref(), Some("objects/file.txt"));
        assert_eq!(e.data.unwrap()["name"], "file.txt");
    }

    #[test]
    fn missing_required_attribute_fails_deserialization() {
        let raw = r#"{"id": "1", "source": "//s", "specversion": "1.0"}"#;
        let result = serde_json::from_str::<CloudEvent>(raw);
        assert!(result.is_err());
    }
}
