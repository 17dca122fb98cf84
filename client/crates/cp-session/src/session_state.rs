use cp_core::Identity;

use tokio::sync::watch;

/// Authentication state observed by the navigation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// `true` until the minimum display delay after the first identity
    /// notification has elapsed. Never goes back to `true`.
    pub resolving: bool,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            identity: None,
            resolving: true,
        }
    }
}

/// Read handle on the session; every change is pushed to all receivers.
pub type SessionWatch = watch::Receiver<SessionState>;
