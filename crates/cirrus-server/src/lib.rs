//! # cirrus-server
//!
//! The hosting layer: receives CloudEvents over HTTP and delivers them to a
//! function via the `cirrus-runtime` invoker.
//!
//! - [`codec`]: both CloudEvents HTTP bindings (binary and structured) →
//!   envelope
//! - [`server::FunctionServer`]: the axum app — event intake, health,
//!   metrics, graceful shutdown
//! - [`http_function::HttpFunction`]: the HTTP-triggered function variant
//! - [`shutdown::ShutdownCoordinator`]: root cancellation token + per-
//!   invocation child tokens
//!
//! The server reports outcomes; it never redelivers. A bad event gets a 400
//! (redelivery cannot help), a failed invocation gets a 500 (the platform
//! may redeliver), and an invocation cut short by shutdown gets a 503.

#![deny(unsafe_code)]

pub mod codec;
pub mod config;
pub mod health;
pub mod http_function;
pub mod metrics;
pub mod server;
pub mod shutdown;

pub use config::{ConfigError, ServerConfig};
pub use http_function::HttpFunction;
pub use server::{FunctionServer, FunctionTarget};
pub use shutdown::ShutdownCoordinator;
