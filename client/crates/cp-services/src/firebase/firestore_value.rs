//! Conversion between plain JSON documents and Firestore's typed REST value
//! encoding (`{"stringValue": "..."}`, `{"integerValue": "42"}`, ...).
//!
//! Timestamps round-trip as RFC 3339 strings; the repository layer stores
//! them as strings so the mapping stays lossless.

use crate::{Document, ServiceError, ServiceResult};

use serde_json::{Map, Value, json};

/// Encode a plain document into a Firestore `fields` map.
pub fn encode_fields(document: &Document) -> Map<String, Value> {
    document
        .iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect()
}

pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else if let Some(u) = n.as_u64() {
                json!({ "integerValue": u.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

/// Decode a Firestore `fields` map into a plain document.
pub fn decode_fields(fields: &Map<String, Value>) -> ServiceResult<Document> {
    fields
        .iter()
        .map(|(key, value)| {
            decode_value(value)
                .map(|decoded| (key.clone(), decoded))
                .map_err(|e| ServiceError::decode(format!("field '{key}': {}", e.message())))
        })
        .collect()
}

pub fn decode_value(value: &Value) -> ServiceResult<Value> {
    let Some(object) = value.as_object() else {
        return Err(ServiceError::decode("expected a typed value object"));
    };
    let Some((kind, inner)) = object.iter().next() else {
        return Err(ServiceError::decode("empty typed value"));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| ServiceError::decode("booleanValue is not a boolean")),
        "integerValue" => decode_integer(inner),
        "doubleValue" => match inner {
            Value::Number(_) => Ok(inner.clone()),
            // NaN and Infinity arrive as strings and have no JSON form
            Value::String(_) => Ok(Value::Null),
            _ => Err(ServiceError::decode("doubleValue is not a number")),
        },
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| ServiceError::decode(format!("{kind} is not a string"))),
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = match inner.get("values") {
                None => Vec::new(),
                Some(Value::Array(items)) => items
                    .iter()
                    .map(decode_value)
                    .collect::<ServiceResult<Vec<_>>>()?,
                Some(_) => return Err(ServiceError::decode("arrayValue.values is not an array")),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields") {
            None => Ok(Value::Object(Map::new())),
            Some(Value::Object(fields)) => decode_fields(fields).map(Value::Object),
            Some(_) => Err(ServiceError::decode("mapValue.fields is not an object")),
        },
        other => Err(ServiceError::decode(format!("unknown value type '{other}'"))),
    }
}

fn decode_integer(inner: &Value) -> ServiceResult<Value> {
    match inner {
        Value::String(s) => s
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| ServiceError::decode(format!("integerValue '{s}' is not an integer"))),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(inner.clone()),
        _ => Err(ServiceError::decode("integerValue is not an integer")),
    }
}
