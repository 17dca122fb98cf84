use crate::error::Result as AppErrorResult;

use cp_config::{Backend, Config};
use cp_services::{FirebaseApp, MemoryDocumentStore, MemoryIdentityService, ProfileRepository};

use std::sync::Arc;

use log::{info, warn};

/// Build the repository for the configured backend.
pub fn build_repository(config: &Config) -> AppErrorResult<ProfileRepository> {
    match config.app.backend {
        Backend::Firebase => {
            let app = FirebaseApp::new(&config.firebase)?;
            info!("Using Firebase backend");
            Ok(ProfileRepository::new(app.auth(), app.firestore()))
        }
        Backend::Memory => {
            warn!("Using in-memory backend: accounts and profiles are lost on exit");
            Ok(ProfileRepository::new(
                Arc::new(MemoryIdentityService::new()),
                Arc::new(MemoryDocumentStore::new()),
            ))
        }
    }
}
