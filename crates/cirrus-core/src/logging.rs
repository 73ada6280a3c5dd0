//! Structured logging with `tracing`.
//!
//! Per-invocation context (event ID, event type, target) is propagated via
//! tracing spans; functions log plain messages with structured fields and
//! inherit the span context from the invoker.

/// Initialize the global tracing subscriber with stderr output.
///
/// Call once at process startup. Subsequent calls are no-ops.
///
/// # Arguments
///
/// * `level` - Minimum log level to display when `RUST_LOG` is unset.
pub fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init is a no-op if a subscriber is already set
    let _ = subscriber.try_init();
}
