use crate::{ConfigError, ConfigErrorResult, DEFAULT_SPLASH_MIN_DISPLAY_MS, MAX_DELAY_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// How long the splash stays up regardless of session state
    pub min_display_ms: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            min_display_ms: DEFAULT_SPLASH_MIN_DISPLAY_MS,
        }
    }
}

impl SplashConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_display_ms > MAX_DELAY_MS {
            return Err(ConfigError::config(format!(
                "splash.min_display_ms must be 0-{}, got {}",
                MAX_DELAY_MS, self.min_display_ms
            )));
        }
        Ok(())
    }

    pub fn min_display(&self) -> Duration {
        Duration::from_millis(self.min_display_ms)
    }
}
