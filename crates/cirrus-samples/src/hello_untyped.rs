//! Untyped sample: log the envelope, ignore any payload.

use async_trait::async_trait;
use cirrus_core::{CloudEvent, Result};
use cirrus_runtime::CloudEventFunction;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Logs event ID and type; the payload, if any, is left opaque.
pub struct HelloUntyped;

#[async_trait]
impl CloudEventFunction for HelloUntyped {
    async fn handle(&self, event: CloudEvent, _cancel: CancellationToken) -> Result<()> {
        info!(event_id = %event.id, event_type = %event.event_type, "event received");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn handles_an_event_without_payload() {
        let f = HelloUntyped;
        let event = CloudEvent::generated("com.example.anything", "//anywhere");
        f.handle(event, CancellationToken::new()).await.unwrap();
    }

    #[tokio::test]
    async fn payload_is_ignored_not_decoded() {
        let f = HelloUntyped;
        // Any shape goes — the function never looks at data
        let event = CloudEvent::generated("com.example.anything", "//anywhere")
            .with_data(json!([1, "mixed", {"deep": true}]));
        f.handle(event, CancellationToken::new()).await.unwrap();
    }
}
