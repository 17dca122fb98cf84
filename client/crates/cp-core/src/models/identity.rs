use serde::{Deserialize, Serialize};

/// Snapshot of an authenticated account as issued by the identity service.
///
/// The id is opaque and stable; the client never mutates either field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}
