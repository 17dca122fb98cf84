//! Screens as form state machines.
//!
//! A screen never performs I/O. Commands and effect outcomes go in, a
//! [`ScreenResponse`] comes out describing the alert to show, the
//! navigation to perform and the effect to run.

mod edit_profile;
mod home;
mod login;
mod register;
mod splash;

pub use edit_profile::EditProfileScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use register::RegisterScreen;
pub use splash::SplashScreen;

use crate::{Command, Effect, EffectOutcome};

use cp_core::{FormField, Identity};
use cp_session::Route;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    To(Route),
    Back,
}

/// What the app should do after a screen handled an input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScreenResponse {
    pub alert: Option<Alert>,
    pub navigation: Option<Navigation>,
    pub effect: Option<Effect>,
}

impl ScreenResponse {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn alert(alert: Alert) -> Self {
        Self {
            alert: Some(alert),
            ..Self::default()
        }
    }

    pub fn effect(effect: Effect) -> Self {
        Self {
            effect: Some(effect),
            ..Self::default()
        }
    }

    pub fn navigate(navigation: Navigation) -> Self {
        Self {
            navigation: Some(navigation),
            ..Self::default()
        }
    }

    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.alert = Some(alert);
        self
    }

    pub fn with_navigation(mut self, navigation: Navigation) -> Self {
        self.navigation = Some(navigation);
        self
    }
}

/// The mounted screen.
#[derive(Debug)]
pub enum Screen {
    Splash(SplashScreen),
    Login(LoginScreen),
    Register(RegisterScreen),
    Home(HomeScreen),
    EditProfile(EditProfileScreen),
}

impl Screen {
    /// Create the screen for `route` along with whatever it does on mount.
    pub fn mount(
        route: &Route,
        identity: Option<&Identity>,
        current_year: i32,
    ) -> (Self, ScreenResponse) {
        match (route, identity) {
            (Route::Splash, _) => (Self::Splash(SplashScreen), ScreenResponse::none()),
            (Route::Login, _) => (Self::Login(LoginScreen::new()), ScreenResponse::none()),
            (Route::Register, _) => (
                Self::Register(RegisterScreen::new(current_year)),
                ScreenResponse::none(),
            ),
            (Route::Home, Some(identity)) => {
                let (screen, response) = HomeScreen::mount(identity.clone());
                (Self::Home(screen), response)
            }
            (Route::EditProfile { profile }, Some(identity)) => {
                let (screen, response) =
                    EditProfileScreen::mount(identity.clone(), profile.clone(), current_year);
                (Self::EditProfile(screen), response)
            }
            (Route::Home | Route::EditProfile { .. }, None) => (
                Self::Splash(SplashScreen),
                ScreenResponse::alert(Alert::error("No user is signed in")),
            ),
        }
    }

    pub fn handle(&mut self, command: Command) -> ScreenResponse {
        match self {
            Self::Splash(screen) => screen.handle(command),
            Self::Login(screen) => screen.handle(command),
            Self::Register(screen) => screen.handle(command),
            Self::Home(screen) => screen.handle(command),
            Self::EditProfile(screen) => screen.handle(command),
        }
    }

    pub fn complete(&mut self, outcome: EffectOutcome) -> ScreenResponse {
        match self {
            Self::Splash(_) => ScreenResponse::none(),
            Self::Login(screen) => screen.complete(outcome),
            Self::Register(screen) => screen.complete(outcome),
            Self::Home(screen) => screen.complete(outcome),
            Self::EditProfile(screen) => screen.complete(outcome),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Splash(screen) => screen.render(),
            Self::Login(screen) => screen.render(),
            Self::Register(screen) => screen.render(),
            Self::Home(screen) => screen.render(),
            Self::EditProfile(screen) => screen.render(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Splash(_) => "Splash",
            Self::Login(_) => "Login",
            Self::Register(_) => "Register",
            Self::Home(_) => "Home",
            Self::EditProfile(_) => "EditProfile",
        }
    }
}

/// Reply to a command the screen does not offer.
pub(crate) fn unavailable(command: &Command) -> ScreenResponse {
    ScreenResponse::alert(Alert::error(format!(
        "'{}' is not available here",
        command_name(command)
    )))
}

pub(crate) fn busy() -> ScreenResponse {
    ScreenResponse::alert(Alert::new("Please wait", "A request is already in progress"))
}

pub(crate) fn not_on_form(field: FormField) -> ScreenResponse {
    ScreenResponse::alert(Alert::error(format!("This form has no '{field}' field")))
}

/// Render form buffers, masking secrets.
pub(crate) fn render_fields<'a>(
    out: &mut String,
    fields: &[FormField],
    value: impl Fn(FormField) -> Option<&'a str>,
) {
    for field in fields {
        let raw = value(*field).unwrap_or_default();
        let shown = if field.is_secret() {
            "*".repeat(raw.chars().count())
        } else {
            raw.to_string()
        };
        out.push_str(&format!("  {:<8} {}\n", field.as_str(), shown));
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Set { .. } => "set",
        Command::Submit => "submit",
        Command::Register => "register",
        Command::Login => "login",
        Command::Edit => "edit",
        Command::Logout => "logout",
        Command::Cancel => "cancel",
        Command::Back => "back",
        Command::Help => "help",
        Command::Quit => "quit",
    }
}
