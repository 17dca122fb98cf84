use cp_core::ProfileRecord;

use std::fmt;

/// A screen inside one of the graphs, with its navigation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Splash,
    Login,
    Register,
    Home,
    /// The profile already loaded by Home, if any. Without it the screen
    /// loads the profile itself.
    EditProfile { profile: Option<ProfileRecord> },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Splash => "Splash",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Home => "Home",
            Self::EditProfile { .. } => "EditProfile",
        }
    }

    /// Same screen, ignoring parameters.
    pub fn same_screen(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
