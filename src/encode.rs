// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

//! Resource stream encoder.
//!
//! Turns raw flight output (a YAML or JSON sequence of manifests) into
//! line-delimited JSON on the given sink, preserving document order. Failure
//! is fatal and immediate: decode errors emit nothing, and a sink error
//! aborts mid-stream without retracting records already written.

use serde_json::Value;
use std::io::Write;
use thiserror::Error;

/// Errors from decoding flight output or writing the resource stream.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The flight output is not a well-formed sequence of documents.
    #[error("failed to unmarshal executed flight data: {0}")]
    Malformed(#[from] serde_yaml::Error),

    /// A resource could not be serialized to the sink.
    #[error("failed to encode resource: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The sink itself failed.
    #[error("failed to write resource stream: {0}")]
    Sink(#[from] std::io::Error),
}

/// Decode `data` as an ordered sequence of resource documents and emit each
/// as one JSON line on `out`.
///
/// Documents are not validated beyond being structured values; `kind` and the
/// resource name are read only for debug narration and may be absent. Blank
/// flight output is zero resources, not an error.
pub fn encode_resources<W: Write>(out: &mut W, data: &[u8]) -> Result<(), EncodeError> {
    tracing::debug!("encoding resources");

    if data.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!(resources = 0, "flight produced no output");
        return Ok(());
    }

    // A bare `null` document (what a flight emits for an empty resource
    // list) decodes to None: zero resources, not a malformed stream.
    let resources: Vec<Value> =
        serde_yaml::from_slice::<Option<Vec<Value>>>(data)?.unwrap_or_default();

    for resource in &resources {
        let (kind, name) = identity(resource);
        tracing::debug!(kind, name, "encoding resource");

        serde_json::to_writer(&mut *out, resource)?;
        out.write_all(b"\n")?;
    }

    tracing::debug!(resources = resources.len(), "resources encoded");

    Ok(())
}

/// Best-effort identity of a resource document for narration only.
///
/// `kind` is read at the document root; the name comes from `metadata.name`
/// with a fallback to a root-level `name` field.
fn identity(resource: &Value) -> (&str, &str) {
    let kind = resource.get("kind").and_then(Value::as_str).unwrap_or("");
    let name = resource
        .pointer("/metadata/name")
        .and_then(Value::as_str)
        .or_else(|| resource.get("name").and_then(Value::as_str))
        .unwrap_or("");
    (kind, name)
}
