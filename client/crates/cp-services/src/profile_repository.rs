use crate::{
    DocumentStore, IdentityService, RepositoryError, RepositoryResult, ServiceError, WriteMode,
};

use cp_core::{Identity, ProfileRecord, ProfileUpdate, Registration};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};

/// Collection holding one profile document per identity id.
pub const PROFILE_COLLECTION: &str = "users";

/// Account and profile operations on top of the two backend capabilities.
///
/// Every call is a single attempt: nothing is retried, queued or
/// deduplicated, and the two writes of [`create`](Self::create) are not
/// rolled back when the second one fails.
#[derive(Clone)]
pub struct ProfileRepository {
    identity: Arc<dyn IdentityService>,
    store: Arc<dyn DocumentStore>,
}

impl ProfileRepository {
    pub fn new(identity: Arc<dyn IdentityService>, store: Arc<dyn DocumentStore>) -> Self {
        Self { identity, store }
    }

    pub fn identity_service(&self) -> Arc<dyn IdentityService> {
        Arc::clone(&self.identity)
    }

    /// Create the account, then write its initial profile.
    ///
    /// A failed profile write leaves the account in place without a
    /// document; a later [`update`](Self::update) creates one.
    pub async fn create(&self, registration: &Registration) -> RepositoryResult<Identity> {
        let identity = self
            .identity
            .create_account(&registration.email, &registration.password)
            .await
            .map_err(RepositoryError::identity_creation)?;

        let record = ProfileRecord::new(registration, Utc::now());
        let document = record
            .to_document()
            .map_err(|e| RepositoryError::profile_write(&identity.id, ServiceError::from(e)))?;

        if let Err(e) = self
            .store
            .write(PROFILE_COLLECTION, &identity.id, document, WriteMode::Create)
            .await
        {
            warn!(
                "Account {} created but its profile was not written: {}",
                identity.id,
                e.message()
            );
            return Err(RepositoryError::profile_write(&identity.id, e));
        }

        info!("Registered {}", identity.id);
        Ok(identity)
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> RepositoryResult<Identity> {
        self.identity
            .authenticate(email, password)
            .await
            .map_err(RepositoryError::authentication)
    }

    /// Ask the identity service to sign out. Session state follows from the
    /// resulting change notification, not from this call.
    pub async fn terminate_session(&self) -> RepositoryResult<()> {
        self.identity
            .sign_out()
            .await
            .map_err(RepositoryError::sign_out)
    }

    /// `Ok(None)` when no profile document exists for `id`.
    pub async fn read(&self, id: &str) -> RepositoryResult<Option<ProfileRecord>> {
        let document = self
            .store
            .read(PROFILE_COLLECTION, id)
            .await
            .map_err(|e| RepositoryError::profile_read(id, e))?;

        let Some(document) = document else {
            debug!("No profile document for {id}");
            return Ok(None);
        };

        ProfileRecord::from_document(document)
            .map(Some)
            .map_err(|e| RepositoryError::profile_read(id, ServiceError::from(e)))
    }

    /// Merge the given fields and a fresh `updatedAt` into the profile,
    /// creating the document if it does not exist.
    pub async fn update(&self, id: &str, update: &ProfileUpdate) -> RepositoryResult<()> {
        let document = update
            .to_document(Utc::now())
            .map_err(|e| RepositoryError::profile_write(id, ServiceError::from(e)))?;

        self.store
            .write(PROFILE_COLLECTION, id, document, WriteMode::Merge)
            .await
            .map_err(|e| RepositoryError::profile_write(id, e))?;

        debug!("Updated profile {id}");
        Ok(())
    }
}
