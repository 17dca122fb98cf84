use crate::screens::{
    Alert, Navigation, Phase, ScreenResponse, busy, not_on_form, render_fields, unavailable,
};
use crate::{Command, Effect, EffectOutcome};

use cp_core::LoginForm;
use cp_session::Route;

use log::debug;

#[derive(Debug, Default)]
pub struct LoginScreen {
    form: LoginForm,
    phase: Phase,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn handle(&mut self, command: Command) -> ScreenResponse {
        match command {
            Command::Set { field, value } => {
                if self.form.set(field, &value) {
                    ScreenResponse::none()
                } else {
                    not_on_form(field)
                }
            }
            Command::Submit => self.submit(),
            Command::Register => ScreenResponse::navigate(Navigation::To(Route::Register)),
            Command::Back => ScreenResponse::navigate(Navigation::Back),
            other => unavailable(&other),
        }
    }

    fn submit(&mut self) -> ScreenResponse {
        if self.phase == Phase::Submitting {
            return busy();
        }

        match self.form.validate() {
            Ok(credentials) => {
                self.phase = Phase::Submitting;
                ScreenResponse::effect(Effect::Authenticate {
                    email: credentials.email,
                    password: credentials.password,
                })
            }
            Err(e) => ScreenResponse::alert(Alert::error(e.to_string())),
        }
    }

    /// A successful sign-in needs no navigation: the gate switches graphs
    /// when the new identity arrives.
    pub fn complete(&mut self, outcome: EffectOutcome) -> ScreenResponse {
        match outcome {
            EffectOutcome::Authenticated(Ok(identity)) => {
                debug!("Signed in as {}", identity.id);
                self.phase = Phase::Done;
                ScreenResponse::none()
            }
            EffectOutcome::Authenticated(Err(e)) => {
                self.phase = Phase::Editing;
                ScreenResponse::alert(Alert::new(
                    "Sign-in error",
                    format!("Login failed: {}", e.message()),
                ))
            }
            _ => ScreenResponse::none(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("== Sign in ==\n");
        render_fields(&mut out, LoginForm::FIELDS, |f| self.form.get(f));
        match self.phase {
            Phase::Submitting => out.push_str("  Signing in...\n"),
            _ => out.push_str("  [submit] sign in   [register] create an account\n"),
        }
        out
    }
}
