//! CloudEvents HTTP bindings → envelope.
//!
//! Two wire modes, per the CloudEvents HTTP protocol binding:
//!
//! - **binary mode**: envelope attributes travel as `ce-*` headers and the
//!   request body is the payload;
//! - **structured mode**: the whole envelope travels as the request body
//!   with `Content-Type: application/cloudevents+json`.
//!
//! Both decode to the same [`CloudEvent`]; intake failures are
//! [`CodecError`] and map to a 400 — a request the producer must fix.

use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use cirrus_core::CloudEvent;
use serde_json::Value;

/// Content type marking structured mode.
pub const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents+json";

/// Errors decoding an HTTP request into an envelope.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A required envelope attribute was absent.
    #[error("missing required attribute: {0}")]
    MissingAttribute(&'static str),

    /// An attribute was present but unusable.
    #[error("invalid attribute {name}: {message}")]
    InvalidAttribute {
        /// Attribute name.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// The event (or its JSON payload) did not parse.
    #[error("invalid event JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A non-JSON payload body was not valid UTF-8.
    #[error("payload body is not valid UTF-8")]
    BodyNotUtf8,
}

impl CodecError {
    /// Rejection reason for metric labels.
    pub fn reason(&self) -> &str {
        match self {
            Self::MissingAttribute(_) => "missing_attribute",
            Self::InvalidAttribute { .. } => "invalid_attribute",
            Self::InvalidJson(_) => "invalid_json",
            Self::BodyNotUtf8 => "body_not_utf8",
        }
    }
}

/// Decode an HTTP request into an envelope, picking the mode from the
/// content type.
pub fn decode_event(headers: &HeaderMap, body: &Bytes) -> Result<CloudEvent, CodecError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with(STRUCTURED_CONTENT_TYPE) {
        decode_structured(body)
    } else {
        decode_binary(headers, body, content_type)
    }
}

/// Structured mode: the body is the whole envelope.
fn decode_structured(body: &Bytes) -> Result<CloudEvent, CodecError> {
    let event: CloudEvent = serde_json::from_slice(body)?;
    Ok(event)
}

/// Binary mode: `ce-*` headers carry the attributes, the body is the payload.
fn decode_binary(
    headers: &HeaderMap,
    body: &Bytes,
    content_type: &str,
) -> Result<CloudEvent, CodecError> {
    let id = required_header(headers, "ce-id")?;
    let event_type = required_header(headers, "ce-type")?;
    let source = required_header(headers, "ce-source")?;
    let specversion =
        optional_header(headers, "ce-specversion")?.unwrap_or_else(|| "1.0".to_owned());

    let time = match optional_header(headers, "ce-time")? {
        Some(raw) => Some(parse_time(&raw)?),
        None => None,
    };

    let data = decode_body(body, content_type)?;

    Ok(CloudEvent {
        id,
        event_type,
        source,
        specversion,
        subject: optional_header(headers, "ce-subject")?,
        time,
        dataschema: optional_header(headers, "ce-dataschema")?,
        datacontenttype: (!content_type.is_empty()).then(|| content_type.to_owned()),
        data,
    })
}

/// Decode the binary-mode body into a payload value.
///
/// JSON content types must parse; anything else is kept as a UTF-8 string.
/// An empty body means no payload.
fn decode_body(body: &Bytes, content_type: &str) -> Result<Option<Value>, CodecError> {
    if body.is_empty() {
        return Ok(None);
    }
    if content_type.contains("json") || content_type.is_empty() {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Some(value))
    } else {
        let text = std::str::from_utf8(body).map_err(|_| CodecError::BodyNotUtf8)?;
        Ok(Some(Value::String(text.to_owned())))
    }
}

fn required_header(headers: &HeaderMap, name: &'static str) -> Result<String, CodecError> {
    optional_header(headers, name)?.ok_or(CodecError::MissingAttribute(name))
}

fn optional_header(headers: &HeaderMap, name: &'static str) -> Result<Option<String>, CodecError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|s| Some(s.to_owned()))
            .map_err(|_| CodecError::InvalidAttribute {
                name,
                message: "not valid ASCII".into(),
            }),
    }
}

fn parse_time(raw: &str) -> Result<DateTime<Utc>, CodecError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| CodecError::InvalidAttribute {
            name: "ce-time",
            message: e.to_string(),
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
