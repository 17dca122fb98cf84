use crate::{IdentityBroadcaster, IdentityService, IdentityWatch, ServiceError, ServiceResult};

use cp_core::Identity;

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use log::{debug, info};
use uuid::Uuid;

const MIN_PASSWORD_LENGTH: usize = 6;

struct MemoryAccount {
    id: String,
    password: String,
}

/// Identity service holding accounts in a map keyed by email.
///
/// Error messages mirror the hosted service's codes so that screens render
/// the same text regardless of backend.
pub struct MemoryIdentityService {
    accounts: Mutex<HashMap<String, MemoryAccount>>,
    broadcaster: IdentityBroadcaster,
    available: AtomicBool,
}

impl MemoryIdentityService {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            broadcaster: IdentityBroadcaster::new(),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the service being unreachable (`false`) or back (`true`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.broadcaster.subscriber_count()
    }

    pub fn account_exists(&self, email: &str) -> bool {
        self.lock_accounts().contains_key(&email.to_lowercase())
    }

    fn check_available(&self) -> ServiceResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ServiceError::unavailable("NETWORK_REQUEST_FAILED"))
        }
    }

    fn lock_accounts(&self) -> std::sync::MutexGuard<'_, HashMap<String, MemoryAccount>> {
        // A poisoned map is still structurally valid.
        self.accounts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryIdentityService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityService for MemoryIdentityService {
    async fn create_account(&self, email: &str, password: &str) -> ServiceResult<Identity> {
        self.check_available()?;

        let key = email.trim().to_lowercase();
        if !key.contains('@') {
            return Err(ServiceError::api("INVALID_ARGUMENT", "INVALID_EMAIL"));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ServiceError::api(
                "INVALID_ARGUMENT",
                "WEAK_PASSWORD : Password should be at least 6 characters",
            ));
        }

        let identity = {
            let mut accounts = self.lock_accounts();
            if accounts.contains_key(&key) {
                return Err(ServiceError::api("INVALID_ARGUMENT", "EMAIL_EXISTS"));
            }

            let id = Uuid::new_v4().simple().to_string();
            accounts.insert(
                key.clone(),
                MemoryAccount {
                    id: id.clone(),
                    password: password.to_string(),
                },
            );
            Identity::new(id, key)
        };

        info!("Created in-memory account {}", identity.id);
        self.broadcaster.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<Identity> {
        self.check_available()?;

        let key = email.trim().to_lowercase();
        let identity = {
            let accounts = self.lock_accounts();
            match accounts.get(&key) {
                Some(account) if account.password == password => {
                    Identity::new(account.id.clone(), key)
                }
                _ => {
                    return Err(ServiceError::api(
                        "INVALID_ARGUMENT",
                        "INVALID_LOGIN_CREDENTIALS",
                    ));
                }
            }
        };

        debug!("In-memory sign-in for {}", identity.id);
        self.broadcaster.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> ServiceResult<()> {
        self.check_available()?;
        self.broadcaster.publish(None);
        Ok(())
    }

    fn subscribe(&self) -> IdentityWatch {
        self.broadcaster.subscribe()
    }

    fn current_identity(&self) -> Option<Identity> {
        self.broadcaster.current()
    }
}
