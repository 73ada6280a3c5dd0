//! Prometheus metrics recorder and `/metrics` endpoint handler.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Install the Prometheus metrics recorder (global).
///
/// Returns the `PrometheusHandle` used to render the `/metrics` endpoint.
/// Must be called once at startup before any metrics are recorded.
pub fn install_recorder() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install metrics recorder");
    info!("prometheus metrics recorder installed");
    handle
}

/// Render Prometheus text format from the installed recorder.
pub fn render(handle: &PrometheusHandle) -> String {
    handle.render()
}

// Metric name constants to avoid typos across crates.

/// Function invocations total (counter, labels: type).
pub const FUNCTION_INVOCATIONS_TOTAL: &str = "function_invocations_total";
/// Function invocation errors total (counter, labels: type, category).
pub const FUNCTION_INVOCATION_ERRORS_TOTAL: &str = "function_invocation_errors_total";
/// Function invocation duration seconds (histogram, labels: type).
pub const FUNCTION_INVOCATION_DURATION_SECONDS: &str = "function_invocation_duration_seconds";
/// Events rejected at the codec before dispatch (counter, labels: reason).
pub const EVENTS_REJECTED_TOTAL: &str = "events_rejected_total";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_and_render() {
        // Build a recorder + handle (no global install to avoid test conflicts).
        let handle = PrometheusBuilder::new().build_recorder().handle();

        // Should produce valid (possibly empty) Prometheus text.
        let output = handle.render();
        assert!(output.is_empty() || output.contains('#') || output.contains('\n'));
    }

    #[test]
    fn metric_constants_are_snake_case() {
        let names = [
            FUNCTION_INVOCATIONS_TOTAL,
            FUNCTION_INVOCATION_ERRORS_TOTAL,
            FUNCTION_INVOCATION_DURATION_SECONDS,
            EVENTS_REJECTED_TOTAL,
        ];
        for name in names {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "not snake_case: {name}"
            );
        }
    }
}
