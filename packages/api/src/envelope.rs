//! # Response envelope normalization
//!
//! The backend has no consistent envelope. Depending on the endpoint a
//! successful body is a bare array, `{ "data": [...] }`, `{ "results": [...] }`,
//! a bare object, or `{ "data": {...} }`; errors may be `{ success, message }`,
//! `{ error }`, or plain text. These helpers absorb all of that so endpoint
//! adapters only describe their record type.
//!
//! | Function | Accepts | Yields |
//! |----------|---------|--------|
//! | [`failure_message`] | any JSON | the first string among `message`, `error`, `msg` |
//! | [`reported_failure`] | any JSON | `Some(message)` when the body says `success: false` |
//! | [`collection`] | array / `{data: []}` / `{results: []}` | the array; anything else is empty |
//! | [`record`] | object / `{data: {}}` | the object |
//! | [`records`] / [`single`] | as above | typed records via `serde` |

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, FALLBACK_MESSAGE};

const MESSAGE_FIELDS: [&str; 3] = ["message", "error", "msg"];

/// Human readable message carried by an error body, if any.
pub fn failure_message(body: &Value) -> Option<String> {
    MESSAGE_FIELDS.iter().find_map(|field| {
        body.get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    })
}

/// `Some(message)` when a body reports `success: false`.
///
/// `success` given as the string `"false"` counts too.
pub fn reported_failure(body: &Value) -> Option<String> {
    let failed = match body.get("success") {
        Some(Value::Bool(ok)) => !ok,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("false"),
        _ => false,
    };
    failed.then(|| failure_message(body).unwrap_or_else(|| FALLBACK_MESSAGE.to_string()))
}

/// The list inside a collection response, in server order.
pub fn collection(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for field in ["data", "results"] {
                if let Some(Value::Array(items)) = map.remove(field) {
                    return items;
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// The object inside a single-record response.
pub fn record(body: Value) -> Result<Value, ApiError> {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner @ Value::Object(_)) => Ok(inner),
            Some(other) => {
                map.insert("data".to_string(), other);
                Ok(Value::Object(map))
            }
            None => Ok(Value::Object(map)),
        },
        other => Err(ApiError::Parse(format!("expected an object, got {}", kind_of(&other)))),
    }
}

/// Decode a collection response into typed records.
///
/// The whole response is rejected if any item fails to decode.
pub fn records<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    collection(body)
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ApiError::from))
        .collect()
}

/// Decode a single-record response.
pub fn single<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(record(body)?)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
