use crate::IdentityWatch;

use cp_core::Identity;

use tokio::sync::watch;

/// Publishes the signed-in identity to every [`IdentityWatch`].
///
/// Shared by the identity service implementations so that all of them
/// notify the same way: one notification per actual change.
#[derive(Debug)]
pub struct IdentityBroadcaster {
    tx: watch::Sender<Option<Identity>>,
}

impl IdentityBroadcaster {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    /// Store the identity; subscribers are woken only when it differs from
    /// the current one.
    pub fn publish(&self, identity: Option<Identity>) {
        self.tx.send_if_modified(|current| {
            if *current == identity {
                false
            } else {
                *current = identity;
                true
            }
        });
    }

    pub fn subscribe(&self) -> IdentityWatch {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Option<Identity> {
        self.tx.borrow().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for IdentityBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
