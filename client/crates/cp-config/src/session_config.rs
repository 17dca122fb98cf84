use crate::{ConfigError, ConfigErrorResult, DEFAULT_MIN_RESOLVE_DELAY_MS, MAX_DELAY_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Minimum time the session stays "resolving" after the first identity
    /// notification (0 = resolve immediately)
    pub min_resolve_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_resolve_delay_ms: DEFAULT_MIN_RESOLVE_DELAY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_resolve_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::config(format!(
                "session.min_resolve_delay_ms must be 0-{}, got {}",
                MAX_DELAY_MS, self.min_resolve_delay_ms
            )));
        }
        Ok(())
    }

    pub fn min_resolve_delay(&self) -> Duration {
        Duration::from_millis(self.min_resolve_delay_ms)
    }
}
