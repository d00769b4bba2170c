//! Typed decoding of raw JSON payloads.
//!
//! The remote schema evolves independently of this client: deployments add
//! optional fields over time and different versions emit slightly different
//! shapes for the same entity. The decode contract is therefore permissive on
//! input shape and lossless on capture:
//!
//! - recognized fields are assigned, recursing into nested records and
//!   sequences element-wise;
//! - missing optional fields read as absent (or an empty sequence/map), never
//!   as an error;
//! - keys outside a record's schema land in that record's `extra` map and
//!   survive re-encoding unchanged;
//! - decoding fails only when a required field is missing or a value's shape
//!   is fundamentally incompatible with its declared type.
//!
//! The per-record schema descriptor is the record's `Deserialize` impl; the
//! functions here are the single entry point every endpoint routes through,
//! mapping failures into [`Error::Decode`] with the entity name attached.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{Error, ErrorContext, Result};

/// Decode one JSON value into a typed record.
///
/// `what` names the target entity ("model", "chat completion", ...) and is
/// carried into the error context on failure.
pub fn from_value<T: DeserializeOwned>(what: &'static str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        Error::decode_with_context(
            format!("cannot decode {}: {}", what, e),
            ErrorContext::new().with_source("decoder"),
        )
    })
}

/// Decode a bare JSON array into a sequence of typed records.
pub fn list_from_value<T: DeserializeOwned>(what: &'static str, value: Value) -> Result<Vec<T>> {
    match value {
        Value::Array(items) => items.into_iter().map(|v| from_value(what, v)).collect(),
        other => Err(Error::decode_with_context(
            format!("expected a JSON array of {} entries, got {}", what, json_kind(&other)),
            ErrorContext::new().with_source("decoder"),
        )),
    }
}

/// Re-encode a typed record, reproducing captured unrecognized fields.
pub fn to_value<T: Serialize>(record: &T) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Inner {
        label: String,
        #[serde(flatten)]
        extra: HashMap<String, Value>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nested: Option<Inner>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tags: Vec<String>,
        #[serde(flatten)]
        extra: HashMap<String, Value>,
    }

    #[test]
    fn decode_is_idempotent() {
        let payload = json!({"id": "r1", "tags": ["a"], "surprise": 7});
        let first: Record = from_value("record", payload.clone()).unwrap();
        let second: Record = from_value("record", payload).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_fields_round_trip() {
        let payload = json!({
            "id": "r1",
            "nested": {"label": "x", "weight": 0.5},
            "added_in_v2": {"deep": [1, 2, 3]}
        });
        let record: Record = from_value("record", payload.clone()).unwrap();
        assert_eq!(record.extra["added_in_v2"], json!({"deep": [1, 2, 3]}));
        assert_eq!(record.nested.as_ref().unwrap().extra["weight"], json!(0.5));

        let encoded = to_value(&record).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn missing_optionals_read_as_absent() {
        let record: Record = from_value("record", json!({"id": "r1"})).unwrap();
        assert_eq!(record.nested, None);
        assert!(record.tags.is_empty());
        assert!(record.extra.is_empty());
    }

    #[test]
    fn null_optional_nested_record_is_absent() {
        let record: Record = from_value("record", json!({"id": "r1", "nested": null})).unwrap();
        assert_eq!(record.nested, None);
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let err = from_value::<Record>("record", json!({"tags": []})).unwrap_err();
        match err {
            Error::Decode { message, .. } => assert!(message.contains("record")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn incompatible_shape_is_a_decode_error() {
        let result = from_value::<Record>("record", json!({"id": {"not": "a string"}}));
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn list_rejects_non_arrays() {
        let err = list_from_value::<Record>("record", json!({"id": "r1"})).unwrap_err();
        match err {
            Error::Decode { message, .. } => assert!(message.contains("expected a JSON array")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn list_decodes_element_wise() {
        let records: Vec<Record> =
            list_from_value("record", json!([{"id": "a"}, {"id": "b", "v": 1}])).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].extra["v"], json!(1));
    }
}
