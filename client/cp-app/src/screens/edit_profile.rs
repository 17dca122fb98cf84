use crate::screens::{
    Alert, Navigation, Phase, ScreenResponse, busy, not_on_form, render_fields, unavailable,
};
use crate::{Command, Effect, EffectOutcome};

use cp_core::{Identity, ProfileForm, ProfileRecord};

#[derive(Debug)]
pub struct EditProfileScreen {
    identity: Identity,
    loaded: Option<ProfileRecord>,
    form: ProfileForm,
    loading: bool,
    phase: Phase,
    current_year: i32,
}

impl EditProfileScreen {
    /// Populate from the profile handed over by Home, or load it when
    /// none was passed. Both paths end in the same form state.
    pub fn mount(
        identity: Identity,
        profile: Option<ProfileRecord>,
        current_year: i32,
    ) -> (Self, ScreenResponse) {
        let mut screen = Self {
            identity,
            loaded: None,
            form: ProfileForm::default(),
            loading: false,
            phase: Phase::Editing,
            current_year,
        };

        match profile {
            Some(profile) => {
                screen.load(Some(profile));
                (screen, ScreenResponse::none())
            }
            None => {
                screen.loading = true;
                let effect = Effect::ReadProfile {
                    identity_id: screen.identity.id.clone(),
                };
                (screen, ScreenResponse::effect(effect))
            }
        }
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn load(&mut self, profile: Option<ProfileRecord>) {
        self.form = ProfileForm::from_record(profile.as_ref());
        self.loaded = profile;
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
            Command::Submit => self.save(),
            Command::Cancel => {
                self.form = ProfileForm::from_record(self.loaded.as_ref());
                ScreenResponse::alert(Alert::new("Changes discarded", "The form was reset"))
            }
            Command::Back => ScreenResponse::navigate(Navigation::Back),
            other => unavailable(&other),
        }
    }

    fn save(&mut self) -> ScreenResponse {
        if self.phase == Phase::Submitting || self.loading {
            return busy();
        }

        match self.form.validate(self.current_year) {
            Ok(update) => {
                self.phase = Phase::Submitting;
                ScreenResponse::effect(Effect::UpdateProfile {
                    identity_id: self.identity.id.clone(),
                    update,
                })
            }
            Err(e) => ScreenResponse::alert(Alert::error(e.to_string())),
        }
    }

    pub fn complete(&mut self, outcome: EffectOutcome) -> ScreenResponse {
        match outcome {
            EffectOutcome::ProfileLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(Some(profile)) => {
                        self.load(Some(profile));
                        ScreenResponse::none()
                    }
                    Ok(None) => {
                        self.load(None);
                        ScreenResponse::alert(Alert::new(
                            "No profile yet",
                            "No saved information was found. You can add your details here.",
                        ))
                    }
                    Err(e) => ScreenResponse::alert(Alert::error(format!(
                        "Could not load your profile: {}",
                        e.message()
                    ))),
                }
            }
            EffectOutcome::ProfileSaved(Ok(())) => {
                self.phase = Phase::Done;
                ScreenResponse::alert(Alert::new(
                    "Profile updated",
                    "Your details have been saved",
                ))
                .with_navigation(Navigation::Back)
            }
            EffectOutcome::ProfileSaved(Err(e)) => {
                self.phase = Phase::Editing;
                ScreenResponse::alert(Alert::error(format!(
                    "Could not save your profile: {}",
                    e.message()
                )))
            }
            _ => ScreenResponse::none(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("== Edit profile ==\n");
        if self.loading {
            out.push_str("  Loading...\n");
            return out;
        }

        out.push_str(&format!("  email    {} (read-only)\n", self.identity.email));
        render_fields(&mut out, ProfileForm::FIELDS, |f| self.form.get(f));
        match self.phase {
            Phase::Submitting => out.push_str("  Saving...\n"),
            _ => out.push_str("  [submit] save   [cancel] discard changes   [back] return\n"),
        }
        out
    }
}
