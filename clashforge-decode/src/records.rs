//! Structured node-record batches.
//!
//! The input is a YAML sequence of maps, each carrying at minimum
//! `name`, `type`, `server` and `port` plus the protocol-specific fields.
//! Required-key and protocol checks run against the raw mapping first so
//! the errors name the record, then the typed deserialization of the
//! tagged option set validates the rest.

use crate::b64::decode_forgiving_utf8;
use crate::error::{DecodeError, DecodeResult};
use crate::repair::repair_indentation;
use clashforge_types::{Node, Protocol};
use serde_yaml::Value;
use std::borrow::Cow;
use tracing::debug;

const REQUIRED_FIELDS: [&str; 4] = ["name", "type", "server", "port"];

/// Decodes a YAML batch of structured node records.
///
/// When the first parse fails, one indentation repair pass is attempted;
/// if the repaired text still does not parse, the ORIGINAL error is
/// surfaced, not the repair's.
pub fn decode_records(text: &str) -> DecodeResult<Vec<Node>> {
    let value: Value = match serde_yaml::from_str(text) {
        Ok(value) => value,
        Err(original) => match repair_indentation(text) {
            Some(repaired) => match serde_yaml::from_str(&repaired) {
                Ok(value) => {
                    debug!("indentation repair produced parseable YAML");
                    value
                }
                Err(_) => return Err(DecodeError::Yaml(original)),
            },
            None => return Err(DecodeError::Yaml(original)),
        },
    };

    let entries = value.as_sequence().ok_or(DecodeError::NotASequence)?;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_record(index, entry))
        .collect()
}

fn decode_record(index: usize, entry: &Value) -> DecodeResult<Node> {
    if entry.as_mapping().is_none() {
        return Err(DecodeError::NotAMapping(index));
    }

    for field in REQUIRED_FIELDS {
        if entry.get(field).is_none() {
            return Err(DecodeError::MissingField { index, field });
        }
    }

    let tag = entry.get("type").and_then(Value::as_str).unwrap_or_default();
    if Protocol::from_tag(tag).is_none() {
        return Err(DecodeError::UnsupportedProtocol(tag.to_string()));
    }

    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("?")
        .to_string();

    let node: Node = serde_yaml::from_value(entry.clone()).map_err(|source| {
        DecodeError::Record {
            index,
            name: name.clone(),
            source,
        }
    })?;

    if node.port == 0 {
        return Err(DecodeError::InvalidPort { index, name });
    }
    Ok(node)
}

/// Unwraps a base64-encoded subscription payload.
///
/// Subscription endpoints hand back either plain YAML or the same YAML
/// base64-encoded; callers feed the result to [`decode_records`] either
/// way. Input that is not base64 text comes back unchanged.
#[must_use]
pub fn unwrap_base64(text: &str) -> Cow<'_, str> {
    match decode_forgiving_utf8(text.trim()) {
        Some(decoded) => {
            debug!("subscription payload was base64-wrapped");
            Cow::Owned(decoded)
        }
        None => Cow::Borrowed(text),
    }
}
