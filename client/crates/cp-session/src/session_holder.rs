use crate::{SessionState, SessionWatch};

use cp_core::Identity;
use cp_services::{IdentityService, IdentityWatch};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Owns the single identity subscription and publishes [`SessionState`].
///
/// The subscription lives in one spawned task, which is the only writer of
/// the state. Dropping the holder aborts the task, releasing the
/// subscription and any pending delay.
pub struct SessionHolder {
    state: Arc<watch::Sender<SessionState>>,
    task: Option<JoinHandle<()>>,
}

impl SessionHolder {
    /// Subscribe to `identity_service` and start tracking the session.
    ///
    /// `min_resolve_delay` is how long `resolving` stays `true` after the
    /// first notification; zero resolves on that notification.
    pub fn start(identity_service: Arc<dyn IdentityService>, min_resolve_delay: Duration) -> Self {
        let (tx, _) = watch::channel(SessionState::default());
        let state = Arc::new(tx);

        let identities = identity_service.subscribe();
        let task = tokio::spawn(track_session(
            identities,
            Arc::clone(&state),
            min_resolve_delay,
        ));

        Self {
            state,
            task: Some(task),
        }
    }

    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> SessionWatch {
        self.state.subscribe()
    }

    /// Stop tracking and wait for the task to finish.
    pub async fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // Cancellation is the expected outcome
            let _ = task.await;
            debug!("Session holder stopped");
        }
    }
}

impl Drop for SessionHolder {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn track_session(
    mut identities: IdentityWatch,
    state: Arc<watch::Sender<SessionState>>,
    min_resolve_delay: Duration,
) {
    // The value present at subscription time is the first notification.
    let first = identities.borrow_and_update().clone();
    set_identity(&state, first);

    let mut resolved = false;
    if min_resolve_delay.is_zero() {
        resolve(&state);
        resolved = true;
    }

    let delay = tokio::time::sleep(min_resolve_delay);
    tokio::pin!(delay);
    let mut stream_open = true;

    loop {
        tokio::select! {
            _ = &mut delay, if !resolved => {
                resolve(&state);
                resolved = true;
            }
            changed = identities.changed(), if stream_open => match changed {
                Ok(()) => {
                    let identity = identities.borrow_and_update().clone();
                    set_identity(&state, identity);
                }
                Err(_) => {
                    debug!("Identity stream closed");
                    stream_open = false;
                }
            },
            else => break,
        }
    }
}

fn set_identity(state: &watch::Sender<SessionState>, identity: Option<Identity>) {
    state.send_if_modified(|current| {
        if current.identity == identity {
            return false;
        }
        match &identity {
            Some(identity) => info!("Session signed in as {}", identity.id),
            None => info!("Session signed out"),
        }
        current.identity = identity;
        true
    });
}

fn resolve(state: &watch::Sender<SessionState>) {
    state.send_if_modified(|current| {
        if !current.resolving {
            return false;
        }
        current.resolving = false;
        debug!("Session resolved");
        true
    });
}
