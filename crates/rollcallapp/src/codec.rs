//! # Record Codec
//!
//! Converts between domain records and their persisted JSON text, and decodes
//! raw tag reads into a [`TagPayload`].
//!
//! Two decoding policies live here:
//!
//! - **Tags are strict.** A read must carry exactly one record whose bytes are a
//!   JSON object with a string `userId` and a boolean `admin`. Anything else is a
//!   [`DecodeError`] and the caller treats the scan as an invalid tag.
//! - **Ledger lists are best-effort.** [`decode_list`] drops individual records
//!   that fail to decode and keeps the rest in order. Text that is not a JSON
//!   array at all decodes as an empty list.
//!
//! Encoding is total for well-typed records.

use crate::error::DecodeError;
use crate::model::TagPayload;
use crate::tag::TagRead;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Decodes a tag read that must contain exactly one record.
pub fn decode_tag(read: &TagRead) -> Result<TagPayload, DecodeError> {
    match read.records.as_slice() {
        [record] => decode_tag_bytes(record),
        records => Err(DecodeError::RecordCount(records.len())),
    }
}

/// Decodes a single record's bytes. Extra fields are ignored.
pub fn decode_tag_bytes(bytes: &[u8]) -> Result<TagPayload, DecodeError> {
    let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::NotUtf8)?;
    let value: Value = serde_json::from_str(text.trim())?;
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let user_id = object
        .get("userId")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingField("userId"))?;
    if user_id.is_empty() {
        return Err(DecodeError::EmptyUserId);
    }
    let is_admin = object
        .get("admin")
        .and_then(Value::as_bool)
        .ok_or(DecodeError::MissingField("admin"))?;

    Ok(TagPayload::new(user_id, is_admin))
}

/// Encodes records as a JSON array of objects.
pub fn encode_list<T: Serialize>(records: &[T]) -> String {
    // Plain structs of strings and integers always serialize.
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a JSON array, dropping elements that do not decode as `T`.
///
/// Elements stored as JSON strings holding an object are unwrapped first.
pub fn decode_list<T: DeserializeOwned>(text: &str) -> Vec<T> {
    let elements: Vec<Value> = match serde_json::from_str(text) {
        Ok(elements) => elements,
        Err(e) => {
            debug!(error = %e, "ledger slot is not a JSON array, treating as empty");
            return Vec::new();
        }
    };

    elements
        .into_iter()
        .filter_map(|element| match decode_record::<T>(element) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "dropping malformed ledger record");
                None
            }
        })
        .collect()
}

fn decode_record<T: DeserializeOwned>(element: Value) -> Result<T, DecodeError> {
    let element = match element {
        Value::String(inner) => serde_json::from_str(&inner)?,
        other => other,
    };
    if !element.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    Ok(serde_json::from_value(element)?)
}
