use crate::Command;
use crate::screens::{Alert, ScreenResponse};

/// Shown while the session resolves and for the splash minimum.
#[derive(Debug, Default)]
pub struct SplashScreen;

impl SplashScreen {
    pub fn handle(&mut self, _command: Command) -> ScreenResponse {
        ScreenResponse::alert(Alert::new("Please wait", "Still starting up"))
    }

    pub fn render(&self) -> String {
        String::from("== Campus Profile ==\n  Loading...\n")
    }
}
