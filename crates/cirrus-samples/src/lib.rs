//! # cirrus-samples
//!
//! Sample functions demonstrating the Cirrus contract. Each sample is a few
//! lines: extract fields from a typed event payload, write them to the log,
//! return. The samples are independent and stateless — no orchestration, no
//! retries, no shared state.
//!
//! | target | trigger | payload |
//! |--------|---------|---------|
//! | `hello-http` | plain HTTP request | — |
//! | `hello-storage` | storage object change | [`StorageObjectData`] |
//! | `hello-pubsub` | published message | [`MessagePublishedData`] |
//! | `hello-pubsub-details` | published message | [`MessagePublishedData`] |
//! | `hello-audit` | audit log entry | [`LogEntryData`] |
//! | `hello-untyped` | any event | none |
//!
//! [`StorageObjectData`]: cirrus_events::StorageObjectData
//! [`MessagePublishedData`]: cirrus_events::MessagePublishedData
//! [`LogEntryData`]: cirrus_events::LogEntryData

#![deny(unsafe_code)]

pub mod hello_audit;
pub mod hello_http;
pub mod hello_pubsub;
pub mod hello_pubsub_details;
pub mod hello_storage;
pub mod hello_untyped;

use cirrus_runtime::{FunctionRegistry, Typed};

/// Build a registry with every event-function sample registered.
///
/// `hello-http` is not an event function and is wired separately — see the
/// host binary.
#[must_use]
pub fn sample_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    registry.register("hello-storage", Typed::new(hello_storage::HelloStorage));
    registry.register("hello-pubsub", Typed::new(hello_pubsub::HelloPubsub));
    registry.register(
        "hello-pubsub-details",
        Typed::new(hello_pubsub_details::HelloPubsubDetails),
    );
    registry.register("hello-audit", Typed::new(hello_audit::HelloAudit));
    registry.register("hello-untyped", hello_untyped::HelloUntyped);
    registry
}
