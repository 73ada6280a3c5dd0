//! Event type string constants.
//!
//! These are the `type` attribute values the samples are deployed against.
//! Functions are not dispatched by type — the host delivers every event to
//! the configured target — but the constants keep tests and deployment
//! wiring free of typo'd literals.

/// A storage object finished uploading.
pub const STORAGE_OBJECT_FINALIZED: &str = "google.cloud.storage.object.v1.finalized";

/// A message was published to a topic.
pub const MESSAGE_PUBLISHED: &str = "google.cloud.pubsub.topic.v1.messagePublished";

/// An audit log entry was written.
pub const AUDIT_LOG_WRITTEN: &str = "google.cloud.audit.log.v1.written";
