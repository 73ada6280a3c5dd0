//! Storage resource-name parsing.
//!
//! Audit log entries refer to storage objects by full resource name:
//!
//! ```text
//! projects/_/buckets/<bucket>/objects/<object>
//! ```
//!
//! The bucket is the fourth path segment and the object name starts at the
//! sixth. Object names may themselves contain `/`, so everything after the
//! `objects` segment belongs to the object.

use cirrus_core::{FunctionError, Result};

/// A storage object reference extracted from a resource name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageResource {
    /// Bucket name.
    pub bucket: String,
    /// Object name (may contain `/`).
    pub object: String,
}

/// Parse a full storage resource name into bucket + object.
///
/// A name with fewer than six segments, or whose collection segments are not
/// `buckets` and `objects`, fails with [`FunctionError::PayloadShape`] —
/// never an index panic.
pub fn parse_storage_resource(name: &str) -> Result<StorageResource> {
    let segments: Vec<&str> = name.split('/').collect();
    if segments.len() < 6 {
        return Err(FunctionError::payload_shape(format!(
            "resource name has {} segments, expected at least 6: {name:?}",
            segments.len()
        )));
    }
    if segments[2] != "buckets" || segments[4] != "objects" {
        return Err(FunctionError::payload_shape(format!(
            "resource name is not a storage object path: {name:?}"
        )));
    }
    if segments[3].is_empty() || segments[5].is_empty() {
        return Err(FunctionError::payload_shape(format!(
            "resource name has an empty bucket or object segment: {name:?}"
        )));
    }
    Ok(StorageResource {
        bucket: segments[3].to_owned(),
        object: segments[5..].join("/"),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
