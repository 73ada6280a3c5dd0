//! # cirrus-events
//!
//! Typed payload definitions for the event kinds the Cirrus samples react to.
//!
//! - [`kinds`]: event type string constants
//! - [`payloads`]: typed payload structs ([`StorageObjectData`],
//!   [`MessagePublishedData`], [`LogEntryData`])
//! - [`resource`]: storage resource-name parsing
//!
//! Payload structs mirror the producer wire format (camelCase field names,
//! optional fields omitted). Deserialization into these types happens at the
//! dispatch boundary — see `cirrus-runtime`.

#![deny(unsafe_code)]

pub mod kinds;
pub mod payloads;
pub mod resource;

pub use payloads::{AuditLogEntry, LogEntryData, MessagePublishedData, PubsubMessage, StorageObjectData};
pub use resource::{StorageResource, parse_storage_resource};
