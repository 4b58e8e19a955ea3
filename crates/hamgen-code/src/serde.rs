use std::collections::BTreeMap;
use std::iter::FromIterator;

use hamgen_core::{ErrorInfo, HamgenError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

fn serde_error(code: &str, err: impl ToString) -> HamgenError {
    HamgenError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with sorted keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, HamgenError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-serialize", err))?;
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonicalize(value))
        .map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Serializes a value into pretty JSON with sorted keys.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, HamgenError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-serialize", err))?;
    serde_json::to_string_pretty(&canonicalize(value)).map_err(|err| serde_error("json-write", err))
}

/// Deserializes a value from JSON text.
pub fn from_json_str<T: DeserializeOwned>(data: &str) -> Result<T, HamgenError> {
    serde_json::from_str(data).map_err(|err| serde_error("json-deserialize", err))
}
