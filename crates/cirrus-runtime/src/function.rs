//! The function traits and the typed-payload adapter.

use async_trait::async_trait;
use cirrus_core::{CloudEvent, FunctionError, Result};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// A function invoked once per delivered event.
///
/// The host awaits completion; there is no return value beyond
/// success/failure (events are fire-and-forget from the host's view).
/// The cancellation token is signalled on host shutdown — observe it at
/// natural suspension points and abort promptly.
#[async_trait]
pub trait CloudEventFunction: Send + Sync {
    /// Consume one event.
    async fn handle(&self, event: CloudEvent, cancel: CancellationToken) -> Result<()>;
}

/// A function whose payload is decoded into a typed struct before the body
/// runs.
///
/// The associated `Data` type determines how the envelope's `data` attribute
/// is deserialized. Deploy the function against a trigger whose payload
/// matches — a function expecting a storage payload will reject pub/sub
/// events with a payload shape error.
#[async_trait]
pub trait TypedCloudEventFunction: Send + Sync {
    /// The payload type this function consumes.
    type Data: DeserializeOwned + Send;

    /// Consume one event and its decoded payload.
    async fn handle(
        &self,
        event: CloudEvent,
        data: Self::Data,
        cancel: CancellationToken,
    ) -> Result<()>;
}

/// Adapter presenting a [`TypedCloudEventFunction`] as a
/// [`CloudEventFunction`].
///
/// Decoding happens here, before the handler body: a missing payload or a
/// serde failure is a [`FunctionError::PayloadShape`] and the body never
/// sees a half-decoded event.
pub struct Typed<F> {
    inner: F,
}

impl<F> Typed<F> {
    /// Wrap a typed function.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<F> CloudEventFunction for Typed<F>
where
    F: TypedCloudEventFunction,
{
    async fn handle(&self, event: CloudEvent, cancel: CancellationToken) -> Result<()> {
        let Some(raw) = event.data.clone() else {
            return Err(FunctionError::payload_shape(format!(
                "event {} ({}) has no data payload",
                event.id, event.event_type
            )));
        };
        let data: F::Data = serde_json::from_value(raw).map_err(|e| {
            FunctionError::payload_shape(format!(
                "failed to decode payload of event {} ({}): {e}",
                event.id, event.event_type
            ))
        })?;
        self.inner.handle(event, data, cancel).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Greeting {
        name: String,
    }

    /// Records the decoded payloads it sees.
    struct RecordingFunction {
        seen: Mutex<Vec<Greeting>>,
    }

    impl RecordingFunction {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TypedCloudEventFunction for RecordingFunction {
        type Data = Greeting;

        async fn handle(
            &self,
            _event: CloudEvent,
            data: Greeting,
            _cancel: CancellationToken,
        ) -> Result<()> {
            self.seen.lock().unwrap().push(data);
            Ok(())
        }
    }

    fn event_with(data: serde_json::Value) -> CloudEvent {
        CloudEvent::new("ev-1", "com.example.greeting", "//test").with_data(data)
    }

    #[tokio::test]
    async fn typed_adapter_decodes_payload() {
        let f = Typed::new(RecordingFunction::new());
        f.handle(event_with(json!({"name": "alice"})), CancellationToken::new())
            .await
            .unwrap();
        let seen = f.inner.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name, "alice");
    }

    #[tokio::test]
    async fn missing_payload_is_payload_shape_error() {
        let f = Typed::new(RecordingFunction::new());
        let event = CloudEvent::new("ev-1", "com.example.greeting", "//test");
        let err = f.handle(event, CancellationToken::new()).await.unwrap_err();
        assert_matches!(err, FunctionError::PayloadShape(_));
        assert!(f.inner.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn wrong_payload_shape_is_payload_shape_error() {
        let f = Typed::new(RecordingFunction::new());
        let err = f
            .handle(event_with(json!({"nome": "alice"})), CancellationToken::new())
            .await
            .unwrap_err();
        assert_matches!(err, FunctionError::PayloadShape(_));
        assert!(f.inner.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn error_message_names_the_event() {
        let f = Typed::new(RecordingFunction::new());
        let err = f
            .handle(event_with(json!(42)), CancellationToken::new())
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ev-1"));
        assert!(msg.contains("com.example.greeting"));
    }

    #[tokio::test]
    async fn two_invocations_are_independent() {
        let f = Typed::new(RecordingFunction::new());
        let event = event_with(json!({"name": "bob"}));
        f.handle(event.clone(), CancellationToken::new())
            .await
            .unwrap();
        f.handle(event, CancellationToken::new()).await.unwrap();
        let seen = f.inner.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
    }

    #[tokio::test]
    async fn decodes_real_payload_types() {
        struct StorageFn;

        #[async_trait]
        impl TypedCloudEventFunction for StorageFn {
            type Data = cirrus_events::StorageObjectData;

            async fn handle(
                &self,
                _event: CloudEvent,
                data: Self::Data,
                _cancel: CancellationToken,
            ) -> Result<()> {
                assert_eq!(data.bucket, "b");
                Ok(())
            }
        }

        let f = Typed::new(StorageFn);
        f.handle(
            event_with(json!({"bucket": "b", "name": "n"})),
            CancellationToken::new(),
        )
        .await
        .unwrap();
    }
}
