use crate::firebase::FirebaseAuth;
use crate::firebase::firestore_value::{decode_fields, encode_fields};
use crate::firebase::rest::execute;
use crate::{Document, DocumentStore, ServiceError, ServiceResult, WriteMode};

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{Map, Value, json};

/// Cloud Firestore REST client for the `(default)` database.
///
/// Requests are authorised with the ID token of the user signed in through
/// the shared [`FirebaseAuth`].
pub struct Firestore {
    http: Client,
    base_url: String,
    project_id: String,
    auth: Arc<FirebaseAuth>,
}

impl Firestore {
    pub fn new(http: Client, base_url: &str, project_id: &str, auth: Arc<FirebaseAuth>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            auth,
        }
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url,
            self.project_id,
            urlencoding::encode(collection),
            urlencoding::encode(id)
        )
    }
}

/// One `updateMask.fieldPaths` pair per field; non-identifier names are
/// backtick-quoted.
fn update_mask(fields: &Document) -> Vec<(&'static str, String)> {
    fields
        .keys()
        .map(|key| {
            let simple = key
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            let path = if simple {
                key.clone()
            } else {
                format!("`{}`", key.replace('\\', "\\\\").replace('`', "\\`"))
            };
            ("updateMask.fieldPaths", path)
        })
        .collect()
}

#[async_trait]
impl DocumentStore for Firestore {
    async fn write(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
        mode: WriteMode,
    ) -> ServiceResult<()> {
        // Without a mask the PATCH would replace the whole document.
        if mode == WriteMode::Merge && fields.is_empty() {
            debug!("Skipping empty merge into {collection}/{id}");
            return Ok(());
        }

        let token = self.auth.id_token().await?;
        let url = self.document_url(collection, id);

        debug!("Firestore write {collection}/{id} ({mode:?})");

        let mut req = self.http.patch(&url).bearer_auth(token);
        if mode == WriteMode::Merge {
            req = req.query(&update_mask(&fields));
        }

        let body = json!({ "fields": encode_fields(&fields) });
        execute(req.json(&body)).await?;
        Ok(())
    }

    async fn read(&self, collection: &str, id: &str) -> ServiceResult<Option<Document>> {
        let token = self.auth.id_token().await?;
        let url = self.document_url(collection, id);

        debug!("Firestore read {collection}/{id}");

        let body = match execute(self.http.get(&url).bearer_auth(token)).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        match body.get("fields") {
            None => Ok(Some(Map::new())),
            Some(Value::Object(fields)) => decode_fields(fields).map(Some),
            Some(_) => Err(ServiceError::decode("document fields is not an object")),
        }
    }
}
