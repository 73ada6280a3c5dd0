//! Storage object change payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload of a storage object change event.
///
/// Mirrors the producer wire format: camelCase names, timestamps in
/// RFC 3339. Only the fields the samples consume are modeled; unknown
/// fields are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageObjectData {
    /// Bucket the object lives in.
    pub bucket: String,
    /// Object name within the bucket.
    pub name: String,
    /// Content generation (changes on every overwrite).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,
    /// Metadata generation (changes on every metadata update).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metageneration: Option<i64>,
    /// When the object was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    /// When the object was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
