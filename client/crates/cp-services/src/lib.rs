//! Capabilities the client consumes from its backend-as-a-service and the
//! thin repository layered on top of them.
//!
//! - [`IdentityService`] / [`DocumentStore`]: the two external capabilities
//! - [`firebase`]: REST implementations against Firebase Auth and Firestore
//! - [`memory`]: process-local implementations for offline runs and tests
//! - [`ProfileRepository`]: create/authenticate/sign-out/read/update with a
//!   uniform `Result` shape

pub mod document_store;
pub mod error;
pub mod firebase;
pub mod identity_broadcaster;
pub mod identity_service;
pub mod memory;
pub mod profile_repository;
pub mod repository_error;

pub use document_store::{Document, DocumentStore, WriteMode};
pub use error::{Result as ServiceResult, ServiceError};
pub use firebase::{FirebaseApp, FirebaseAuth, Firestore};
pub use identity_broadcaster::IdentityBroadcaster;
pub use identity_service::{IdentityService, IdentityWatch};
pub use memory::{MemoryDocumentStore, MemoryIdentityService};
pub use profile_repository::{PROFILE_COLLECTION, ProfileRepository};
pub use repository_error::{RepositoryError, Result as RepositoryResult};
