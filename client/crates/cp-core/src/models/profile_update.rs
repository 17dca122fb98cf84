use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Partial profile change. Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
}

impl ProfileUpdate {
    /// Document holding the changed fields plus a fresh `updatedAt`.
    pub fn to_document(&self, updated_at: DateTime<Utc>) -> serde_json::Result<Map<String, Value>> {
        let mut document = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        document.insert("updatedAt".to_string(), serde_json::to_value(updated_at)?);
        Ok(document)
    }
}
