//! Storage-triggered sample: log the changed object.

use async_trait::async_trait;
use cirrus_core::{CloudEvent, Result};
use cirrus_events::StorageObjectData;
use cirrus_runtime::TypedCloudEventFunction;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Logs the envelope and the changed object's fields.
pub struct HelloStorage;

#[async_trait]
impl TypedCloudEventFunction for HelloStorage {
    type Data = StorageObjectData;

    async fn handle(
        &self,
        event: CloudEvent,
        data: StorageObjectData,
        _cancel: CancellationToken,
    ) -> Result<()> {
        info!(event_id = %event.id, event_type = %event.event_type, "event received");
        let created = data.time_created.map(|t| t.to_rfc3339());
        let updated = data.updated.map(|t| t.to_rfc3339());
        info!(
            bucket = %data.bucket,
            object = %data.name,
            metageneration = data.metageneration,
            created = created.as_deref(),
            updated = updated.as_deref(),
            "storage object changed"
        );
        Ok(())
    }
}
