//! Audit log entry payload.

use serde::{Deserialize, Serialize};

/// Payload of an audit-log-written event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryData {
    /// The audit log entry body.
    pub proto_payload: AuditLogEntry,
}

/// The audit log entry: which service, which method, which resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// Service that produced the entry (e.g. `storage.googleapis.com`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Method that was audited (e.g. `storage.objects.create`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    /// Full resource name the entry refers to
    /// (e.g. `projects/_/buckets/my-bucket/objects/file.txt`).
    pub resource_name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
