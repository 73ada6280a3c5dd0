//! # cirrus-core
//!
//! Foundation types for the Cirrus event-function framework.
//!
//! This crate provides the shared vocabulary the other Cirrus crates depend on:
//!
//! - **Envelope**: [`CloudEvent`] — the metadata wrapper delivered with every
//!   event, independent of its payload
//! - **Errors**: [`FunctionError`] hierarchy via `thiserror`
//! - **Logging**: [`logging::init_subscriber`] for `tracing` setup
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other cirrus crates.

#![deny(unsafe_code)]

pub mod envelope;
pub mod errors;
pub mod logging;

pub use envelope::CloudEvent;
pub use errors::{FunctionError, Result};
