//! Repository calls requested by screens, run off the input loop.

use cp_core::{Identity, ProfileRecord, ProfileUpdate, Registration};
use cp_services::{ProfileRepository, RepositoryResult};

use std::fmt;

use log::debug;

/// Identifies one mounted screen instance. Outcomes carrying an older id
/// belong to a screen that is gone.
pub type MountId = u64;

#[derive(Clone, PartialEq, Eq)]
pub enum Effect {
    Authenticate { email: String, password: String },
    Register(Registration),
    ReadProfile { identity_id: String },
    UpdateProfile { identity_id: String, update: ProfileUpdate },
    TerminateSession,
}

impl Effect {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Authenticate { .. } => "authenticate",
            Self::Register(_) => "register",
            Self::ReadProfile { .. } => "read_profile",
            Self::UpdateProfile { .. } => "update_profile",
            Self::TerminateSession => "terminate_session",
        }
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticate { email, .. } => f
                .debug_struct("Authenticate")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::Register(registration) => f.debug_tuple("Register").field(registration).finish(),
            Self::ReadProfile { identity_id } => f
                .debug_struct("ReadProfile")
                .field("identity_id", identity_id)
                .finish(),
            Self::UpdateProfile {
                identity_id,
                update,
            } => f
                .debug_struct("UpdateProfile")
                .field("identity_id", identity_id)
                .field("update", update)
                .finish(),
            Self::TerminateSession => f.write_str("TerminateSession"),
        }
    }
}

#[derive(Debug)]
pub enum EffectOutcome {
    Authenticated(RepositoryResult<Identity>),
    Registered(RepositoryResult<Identity>),
    ProfileLoaded(RepositoryResult<Option<ProfileRecord>>),
    ProfileSaved(RepositoryResult<()>),
    SessionTerminated(RepositoryResult<()>),
}

#[derive(Debug)]
pub struct TaggedOutcome {
    pub mount_id: MountId,
    pub outcome: EffectOutcome,
}

pub async fn run_effect(repository: &ProfileRepository, effect: Effect) -> EffectOutcome {
    debug!("Running {}", effect.name());

    match effect {
        Effect::Authenticate { email, password } => {
            EffectOutcome::Authenticated(repository.authenticate(&email, &password).await)
        }
        Effect::Register(registration) => {
            EffectOutcome::Registered(repository.create(&registration).await)
        }
        Effect::ReadProfile { identity_id } => {
            EffectOutcome::ProfileLoaded(repository.read(&identity_id).await)
        }
        Effect::UpdateProfile {
            identity_id,
            update,
        } => EffectOutcome::ProfileSaved(repository.update(&identity_id, &update).await),
        Effect::TerminateSession => {
            EffectOutcome::SessionTerminated(repository.terminate_session().await)
        }
    }
}
