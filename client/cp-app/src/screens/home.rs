use crate::screens::{Alert, Navigation, Phase, ScreenResponse, busy, unavailable};
use crate::{Command, Effect, EffectOutcome};

use cp_core::{Identity, ProfileRecord};
use cp_session::Route;

const NOT_AVAILABLE: &str = "not available";

#[derive(Debug)]
pub struct HomeScreen {
    identity: Identity,
    profile: Option<ProfileRecord>,
    loading: bool,
    phase: Phase,
}

impl HomeScreen {
    /// Mounting loads the signed-in user's profile.
    pub fn mount(identity: Identity) -> (Self, ScreenResponse) {
        let effect = Effect::ReadProfile {
            identity_id: identity.id.clone(),
        };
        let screen = Self {
            identity,
            profile: None,
            loading: true,
            phase: Phase::Editing,
        };
        (screen, ScreenResponse::effect(effect))
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The account created on the Register screen finished writing its
    /// profile after this screen mounted, so the mount-time read may have
    /// missed it. Confirm the registration and read again.
    pub fn registration_completed(&mut self) -> ScreenResponse {
        self.loading = true;
        ScreenResponse::effect(Effect::ReadProfile {
            identity_id: self.identity.id.clone(),
        })
        .with_alert(Alert::new(
            "Registration successful",
            "Your account has been created",
        ))
    }

    pub fn profile(&self) -> Option<&ProfileRecord> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn handle(&mut self, command: Command) -> ScreenResponse {
        match command {
            Command::Edit => ScreenResponse::navigate(Navigation::To(Route::EditProfile {
                profile: self.profile.clone(),
            })),
            Command::Logout => {
                if self.phase == Phase::Submitting {
                    return busy();
                }
                self.phase = Phase::Submitting;
                ScreenResponse::effect(Effect::TerminateSession)
            }
            other => unavailable(&other),
        }
    }

    pub fn complete(&mut self, outcome: EffectOutcome) -> ScreenResponse {
        match outcome {
            EffectOutcome::ProfileLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(profile) => {
                        self.profile = profile;
                        ScreenResponse::none()
                    }
                    Err(e) => ScreenResponse::alert(Alert::error(format!(
                        "Could not load your profile: {}",
                        e.message()
                    ))),
                }
            }
            // Success is observed through the session, which swaps the screens.
            EffectOutcome::SessionTerminated(Ok(())) => {
                self.phase = Phase::Done;
                ScreenResponse::none()
            }
            EffectOutcome::SessionTerminated(Err(e)) => {
                self.phase = Phase::Editing;
                ScreenResponse::alert(Alert::error(format!(
                    "Could not sign out: {}",
                    e.message()
                )))
            }
            _ => ScreenResponse::none(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("== Profile ==\n");
        if self.loading {
            out.push_str("  Loading...\n");
            return out;
        }

        let profile = self.profile.as_ref();
        let text = |value: Option<&str>| match value {
            Some(v) if !v.trim().is_empty() => v.to_string(),
            _ => NOT_AVAILABLE.to_string(),
        };

        out.push_str(&format!(
            "  name     {}\n",
            text(profile.map(|p| p.name.as_str()))
        ));
        out.push_str(&format!(
            "  email    {}\n",
            profile
                .map(|p| p.email_or(&self.identity.email))
                .unwrap_or(self.identity.email.as_str())
        ));
        out.push_str(&format!(
            "  degree   {}\n",
            text(profile.map(|p| p.degree_title.as_str()))
        ));
        out.push_str(&format!(
            "  year     {}\n",
            profile
                .and_then(|p| p.graduation_year)
                .map(|y| y.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        ));

        match self.phase {
            Phase::Submitting => out.push_str("  Signing out...\n"),
            _ => out.push_str("  [edit] edit profile   [logout] sign out\n"),
        }
        out
    }
}
