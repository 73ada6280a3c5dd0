//! Pub/sub-triggered sample: log the full field inventory.

use async_trait::async_trait;
use cirrus_core::{CloudEvent, Result};
use cirrus_events::MessagePublishedData;
use cirrus_runtime::TypedCloudEventFunction;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Logs every field of both the message payload and the envelope.
pub struct HelloPubsubDetails;

#[async_trait]
impl TypedCloudEventFunction for HelloPubsubDetails {
    type Data = MessagePublishedData;

    async fn handle(
        &self,
        event: CloudEvent,
        data: MessagePublishedData,
        _cancel: CancellationToken,
    ) -> Result<()> {
        let text = data.message.text();
        info!(
            message_id = data.message.message_id.as_deref(),
            text = text.as_deref(),
            subscription = data.subscription.as_deref(),
            "message published data"
        );
        let time = event.time.map(|t| t.to_rfc3339());
        info!(
            id = %event.id,
            source = %event.source,
            event_type = %event.event_type,
            subject = event.subject.as_deref(),
            dataschema = event.dataschema.as_deref(),
            datacontenttype = event.datacontenttype.as_deref(),
            time = time.as_deref(),
            specversion = %event.specversion,
            "cloud event information"
        );
        Ok(())
    }
}
