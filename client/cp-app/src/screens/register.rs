use crate::screens::{
    Alert, Navigation, Phase, ScreenResponse, busy, not_on_form, render_fields, unavailable,
};
use crate::{Command, Effect, EffectOutcome};

use cp_core::RegistrationForm;
use cp_session::Route;

#[derive(Debug)]
pub struct RegisterScreen {
    form: RegistrationForm,
    phase: Phase,
    current_year: i32,
}

impl RegisterScreen {
    pub fn new(current_year: i32) -> Self {
        Self {
            form: RegistrationForm::default(),
            phase: Phase::Editing,
            current_year,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
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
            Command::Login | Command::Back => {
                ScreenResponse::navigate(Navigation::To(Route::Login))
            }
            other => unavailable(&other),
        }
    }

    fn submit(&mut self) -> ScreenResponse {
        if self.phase == Phase::Submitting {
            return busy();
        }

        match self.form.validate(self.current_year) {
            Ok(registration) => {
                self.phase = Phase::Submitting;
                ScreenResponse::effect(Effect::Register(registration))
            }
            Err(e) => ScreenResponse::alert(Alert::error(e.to_string())),
        }
    }

    pub fn complete(&mut self, outcome: EffectOutcome) -> ScreenResponse {
        match outcome {
            EffectOutcome::Registered(Ok(_)) => {
                self.phase = Phase::Done;
                ScreenResponse::alert(Alert::new(
                    "Registration successful",
                    "Your account has been created",
                ))
                .with_navigation(Navigation::To(Route::Login))
            }
            EffectOutcome::Registered(Err(e)) => {
                self.phase = Phase::Editing;
                ScreenResponse::alert(Alert::error(format!(
                    "Registration failed: {}",
                    e.message()
                )))
            }
            _ => ScreenResponse::none(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("== Create account ==\n");
        render_fields(&mut out, RegistrationForm::FIELDS, |f| self.form.get(f));
        match self.phase {
            Phase::Submitting => out.push_str("  Creating account...\n"),
            _ => out.push_str("  [submit] register   [login] I already have an account\n"),
        }
        out
    }
}
