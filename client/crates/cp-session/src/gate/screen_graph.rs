use crate::Route;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenGraph {
    Splash,
    Unauthenticated,
    Authenticated,
}

impl ScreenGraph {
    /// Route shown when the graph is entered.
    pub fn entry(self) -> Route {
        match self {
            Self::Splash => Route::Splash,
            Self::Unauthenticated => Route::Login,
            Self::Authenticated => Route::Home,
        }
    }

    pub fn contains(self, route: &Route) -> bool {
        matches!(
            (self, route),
            (Self::Splash, Route::Splash)
                | (Self::Unauthenticated, Route::Login | Route::Register)
                | (Self::Authenticated, Route::Home | Route::EditProfile { .. })
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated => "authenticated",
        }
    }
}

impl fmt::Display for ScreenGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
