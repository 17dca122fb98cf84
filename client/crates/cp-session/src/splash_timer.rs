use std::time::Duration;

use log::debug;
use tokio::time::Instant;

/// Minimum display time of the splash screen. Fires exactly once.
#[derive(Debug)]
pub struct SplashTimer {
    deadline: Instant,
    fired: bool,
}

impl SplashTimer {
    /// Start counting now.
    pub fn start(min_display: Duration) -> Self {
        Self {
            deadline: Instant::now() + min_display,
            fired: min_display.is_zero(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.fired
    }

    /// Wait for the deadline. Returns immediately once fired; cancel safe.
    pub async fn wait(&mut self) {
        if self.fired {
            return;
        }
        tokio::time::sleep_until(self.deadline).await;
        self.fired = true;
        debug!("Splash minimum display elapsed");
    }
}
