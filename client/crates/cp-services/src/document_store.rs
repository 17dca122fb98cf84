use crate::ServiceResult;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Schemaless document body.
pub type Document = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the whole document, creating it if needed.
    Create,
    /// Overwrite only the given top-level fields. A missing document is
    /// created holding just those fields.
    Merge,
}

/// Per-id document storage grouped in collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn write(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
        mode: WriteMode,
    ) -> ServiceResult<()>;

    /// `Ok(None)` when the document does not exist.
    async fn read(&self, collection: &str, id: &str) -> ServiceResult<Option<Document>>;
}
