//! Single-event dispatch with cancellation and a wall-clock budget.

use std::sync::Arc;
use std::time::Duration;

use cirrus_core::{CloudEvent, FunctionError, Result};
use metrics::{counter, histogram};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::function::CloudEventFunction;

/// Default wall-clock budget for a single invocation.
const DEFAULT_INVOCATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Invocations slower than this are logged at warn level.
const SLOW_INVOCATION: Duration = Duration::from_secs(5);

/// Delivers events to a function, one invocation per event.
///
/// The invoker is the host-side half of the contract: it guarantees exactly
/// one `handle` call per delivered event, refuses already-cancelled tokens
/// up front, races the handler against the cancellation signal so shutdown
/// aborts in-flight work at its next suspension point, and enforces a
/// wall-clock budget. It never retries — redelivery is the platform's job.
pub struct Invoker {
    function: Arc<dyn CloudEventFunction>,
    timeout: Duration,
}

impl Invoker {
    /// Create an invoker with the default invocation timeout.
    pub fn new(function: Arc<dyn CloudEventFunction>) -> Self {
        Self {
            function,
            timeout: DEFAULT_INVOCATION_TIMEOUT,
        }
    }

    /// Override the invocation timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deliver one event.
    pub async fn invoke(&self, event: CloudEvent, cancel: CancellationToken) -> Result<()> {
        let event_id = event.id.clone();
        let event_type = event.event_type.clone();
        counter!("function_invocations_total", "type" => event_type.clone()).increment(1);

        if cancel.is_cancelled() {
            counter!("function_invocation_errors_total", "type" => event_type.clone(), "category" => "cancelled")
                .increment(1);
            return Err(FunctionError::Cancelled);
        }

        let start = std::time::Instant::now();
        let result = tokio::select! {
            () = cancel.cancelled() => Err(FunctionError::Cancelled),
            res = tokio::time::timeout(self.timeout, self.function.handle(event, cancel.clone())) => {
                match res {
                    Ok(r) => r,
                    Err(_elapsed) => Err(FunctionError::Timeout(self.timeout)),
                }
            }
        };

        let duration = start.elapsed();
        histogram!("function_invocation_duration_seconds", "type" => event_type.clone())
            .record(duration.as_secs_f64());

        match &result {
            Ok(()) => {
                tracing::debug!(
                    event_id = %event_id,
                    event_type = %event_type,
                    duration_ms = duration.as_millis() as u64,
                    "function completed"
                );
            }
            Err(err) => {
                counter!("function_invocation_errors_total", "type" => event_type.clone(), "category" => err.category().to_owned())
                    .increment(1);
                tracing::error!(
                    event_id = %event_id,
                    event_type = %event_type,
                    category = err.category(),
                    error = %err,
                    "function failed"
                );
            }
        }

        if duration >= SLOW_INVOCATION {
            warn!(
                event_id = %event_id,
                event_type = %event_type,
                duration_secs = duration.as_secs_f64(),
                "slow function invocation"
            );
        }

        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
