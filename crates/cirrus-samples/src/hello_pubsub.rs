//! Pub/sub-triggered sample: greet the message body.

use async_trait::async_trait;
use cirrus_core::{CloudEvent, Result};
use cirrus_events::MessagePublishedData;
use cirrus_runtime::TypedCloudEventFunction;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Derive the greeting name from a published message.
///
/// Empty or absent text body defaults to `"world"`; otherwise the name is
/// the text body exactly.
#[must_use]
pub fn greeting_name(data: &MessagePublishedData) -> String {
    data.message.text().unwrap_or_else(|| "world".to_owned())
}

/// Logs a greeting derived from the message text.
pub struct HelloPubsub;

#[async_trait]
impl TypedCloudEventFunction for HelloPubsub {
    type Data = MessagePublishedData;

    async fn handle(
        &self,
        _event: CloudEvent,
        data: MessagePublishedData,
        _cancel: CancellationToken,
    ) -> Result<()> {
        let name = greeting_name(&data);
        info!("Hello {name}");
        Ok(())
    }
}
