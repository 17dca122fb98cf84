//! Process-local backends. Used for `backend = "memory"` and as test
//! doubles; they reproduce the externally visible behaviour of the hosted
//! services (auto sign-in on account creation, merge-creates-on-missing).

mod document_store;
mod identity_service;

pub use document_store::MemoryDocumentStore;
pub use identity_service::MemoryIdentityService;
