//! Audit-log-triggered sample: log the storage object the entry refers to.

use async_trait::async_trait;
use cirrus_core::{CloudEvent, Result};
use cirrus_events::{LogEntryData, parse_storage_resource};
use cirrus_runtime::TypedCloudEventFunction;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Parses the audited resource name and logs bucket + object.
///
/// A malformed resource name fails the invocation with a payload shape
/// error rather than producing partial output.
pub struct HelloAudit;

#[async_trait]
impl TypedCloudEventFunction for HelloAudit {
    type Data = LogEntryData;

    async fn handle(
        &self,
        event: CloudEvent,
        data: LogEntryData,
        _cancel: CancellationToken,
    ) -> Result<()> {
        info!(event_id = %event.id, event_type = %event.event_type, "event received");
        let resource = parse_storage_resource(&data.proto_payload.resource_name)?;
        info!(bucket = %resource.bucket, object = %resource.object, "audited storage object");
        Ok(())
    }
}
