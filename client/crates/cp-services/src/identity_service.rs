use crate::ServiceResult;

use cp_core::Identity;

use async_trait::async_trait;
use tokio::sync::watch;

/// Subscription to identity changes.
///
/// The value present at subscription time is the first notification;
/// every later sign-in or sign-out marks the receiver as changed. Dropping
/// the receiver unsubscribes.
pub type IdentityWatch = watch::Receiver<Option<Identity>>;

/// Account creation, authentication and change notification.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Create an account. On success the new account is also signed in.
    async fn create_account(&self, email: &str, password: &str) -> ServiceResult<Identity>;

    async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<Identity>;

    async fn sign_out(&self) -> ServiceResult<()>;

    fn subscribe(&self) -> IdentityWatch;

    fn current_identity(&self) -> Option<Identity>;
}
