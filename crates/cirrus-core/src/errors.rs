//! Function error types.

use std::time::Duration;

/// Errors a function invocation can surface to the host.
///
/// The host never retries internally; it maps these onto its own delivery
/// policy (an HTTP host maps them to status codes).
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    /// The event payload was malformed or missing an expected field.
    ///
    /// The event itself is bad — redelivering it cannot help.
    #[error("payload shape error: {0}")]
    PayloadShape(String),

    /// The invocation was aborted by the host's cancellation signal.
    #[error("invocation cancelled")]
    Cancelled,

    /// The invocation exceeded the host's wall-clock budget.
    #[error("invocation timed out after {0:?}")]
    Timeout(Duration),

    /// Implementation-defined handler failure.
    #[error("handler error: {0}")]
    Handler(String),
}

impl FunctionError {
    /// Shorthand for a payload shape error.
    pub fn payload_shape(message: impl Into<String>) -> Self {
        Self::PayloadShape(message.into())
    }

    /// Shorthand for a handler failure.
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler(message.into())
    }

    /// Error category string for log and metric labels.
    pub fn category(&self) -> &str {
        match self {
            Self::PayloadShape(_) => "payload_shape",
            Self::Cancelled => "cancelled",
            Self::Timeout(_) => "timeout",
            Self::Handler(_) => "handler",
        }
    }

    /// Whether redelivering the same event could succeed.
    ///
    /// A malformed payload fails the same way every time; everything else
    /// is a property of this invocation, not of the event.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::PayloadShape(_) => false,
            Self::Cancelled | Self::Timeout(_) | Self::Handler(_) => true,
        }
    }
}

/// Result type for function invocations.
pub type Result<T> = std::result::Result<T, FunctionError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
