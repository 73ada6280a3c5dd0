//! Shutdown coordination via `CancellationToken`.
//!
//! The coordinator owns the root token. Each invocation gets a child token,
//! so signalling shutdown cancels every in-flight invocation at once while
//! letting individual invocations be cancelled without touching the rest.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Coordinates shutdown between the listener and in-flight invocations.
pub struct ShutdownCoordinator {
    root: CancellationToken,
}

impl ShutdownCoordinator {
    /// Create a new coordinator.
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
        }
    }

    /// Get a clone of the root token (for the listener's graceful shutdown).
    pub fn token(&self) -> CancellationToken {
        self.root.clone()
    }

    /// Mint a child token for one invocation.
    ///
    /// Cancelled when shutdown is signalled; cancelling it does not affect
    /// other invocations.
    pub fn invocation_token(&self) -> CancellationToken {
        self.root.child_token()
    }

    /// Signal shutdown.
    pub fn signal(&self) {
        self.root.cancel();
    }

    /// Whether shutdown has been signalled.
    pub fn is_signalled(&self) -> bool {
        self.root.is_cancelled()
    }

    /// Signal shutdown and wait up to `timeout` for the given tasks to drain.
    pub async fn drain(&self, handles: Vec<JoinHandle<()>>, timeout: Duration) {
        self.signal();
        info!(
            task_count = handles.len(),
            timeout_secs = timeout.as_secs(),
            "draining in-flight work"
        );

        let all = futures::future::join_all(handles);
        if tokio::time::timeout(timeout, all).await.is_err() {
            warn!("drain timed out after {timeout:?}, some invocations may still be running");
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_not_signalled() {
        let coord = ShutdownCoordinator::new();
        assert!(!coord.is_signalled());
    }

    #[test]
    fn signal_sets_flag() {
        let coord = ShutdownCoordinator::new();
        coord.signal();
        assert!(coord.is_signalled());
    }

    #[test]
    fn signal_cancels_invocation_tokens() {
        let coord = ShutdownCoordinator::new();
        let t1 = coord.invocation_token();
        let t2 = coord.invocation_token();
        coord.signal();
        assert!(t1.is_cancelled());
        assert!(t2.is_cancelled());
    }

    #[test]
    fn cancelling_one_invocation_leaves_others_alone() {
        let coord = ShutdownCoordinator::new();
        let t1 = coord.invocation_token();
        let t2 = coord.invocation_token();
        t1.cancel();
        assert!(t1.is_cancelled());
        assert!(!t2.is_cancelled());
        assert!(!coord.is_signalled());
    }

    #[test]
    fn repeated_signal_is_idempotent() {
        let coord = ShutdownCoordinator::new();
        coord.signal();
        coord.signal();
        assert!(coord.is_signalled());
    }

    #[tokio::test]
    async fn invocation_token_future_resolves_on_signal() {
        let coord = ShutdownCoordinator::new();
        let token = coord.invocation_token();

        let waiter = tokio::spawn(async move {
            token.cancelled().await;
            true
        });

        coord.signal();
        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn drain_awaits_cooperative_tasks() {
        let coord = ShutdownCoordinator::new();
        let token = coord.invocation_token();

        let handle = tokio::spawn(async move {
            token.cancelled().await;
        });

        coord.drain(vec![handle], Duration::from_secs(5)).await;
        assert!(coord.is_signalled());
    }

    #[tokio::test]
    async fn drain_times_out_on_stuck_tasks() {
        let coord = ShutdownCoordinator::new();

        // A task that ignores cancellation
        let handle = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(300)).await;
        });

        coord.drain(vec![handle], Duration::from_millis(50)).await;
        assert!(coord.is_signalled());
    }
}
