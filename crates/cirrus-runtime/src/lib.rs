//! # cirrus-runtime
//!
//! The event handler contract and the host-side invocation path.
//!
//! - [`CloudEventFunction`] / [`TypedCloudEventFunction`]: the traits user
//!   logic implements (one struct per function)
//! - [`Typed`]: adapter that decodes the envelope payload into a typed
//!   struct before the handler body runs
//! - [`Invoker`]: delivers exactly one event to a function, racing the
//!   handler against cancellation and a wall-clock budget
//! - [`FunctionRegistry`]: maps deployment target names to functions

#![deny(unsafe_code)]

pub mod function;
pub mod invoker;
pub mod registry;

pub use function::{CloudEventFunction, Typed, TypedCloudEventFunction};
pub use invoker::Invoker;
pub use registry::FunctionRegistry;
