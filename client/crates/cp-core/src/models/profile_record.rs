//! University profile stored as one document per identity.

use crate::Registration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile document as persisted in the `users` collection.
///
/// A merge-write against a missing document creates a partial record, so
/// everything except the text fields is optional when reading back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub degree_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileRecord {
    /// Initial record written right after account creation.
    pub fn new(registration: &Registration, now: DateTime<Utc>) -> Self {
        Self {
            name: registration.name.clone(),
            degree_title: registration.degree_title.clone(),
            graduation_year: Some(registration.graduation_year),
            email: Some(registration.email.clone()),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Decode a schemaless document into a profile.
    pub fn from_document(document: Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(document))
    }

    /// Encode as a schemaless document.
    pub fn to_document(&self) -> serde_json::Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// Stored email, or the identity's email when the document lacks one.
    pub fn email_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.email.as_deref().unwrap_or(fallback)
    }
}
