use crate::{
    AppConfig, Backend, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DOTENV_FILE_NAME, FirebaseConfig, LoggingConfig, SessionConfig,
    SplashConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub firebase: FirebaseConfig,
    pub session: SessionConfig,
    pub splash: SplashConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CP_CONFIG_DIR env var, else use ./.campus/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load `.env` from the config directory into the process environment
    ///    (variables already set win)
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply CP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Same as [`load`](Self::load) with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        Self::load_dotenv(&config_dir.join(DOTENV_FILE_NAME))?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_dotenv(path: &Path) -> ConfigErrorResult<()> {
        if !path.exists() {
            return Ok(());
        }

        dotenvy::from_path(path).map_err(|e| ConfigError::Dotenv {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CP_CONFIG_DIR env var > ./.campus/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() (and after any CLI overrides) to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.app.backend == Backend::Firebase {
            self.firebase.validate()?;
        }

        self.session.validate()?;
        self.splash.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Log file path under `config_dir`, when file logging is configured.
    pub fn log_file_path_in(&self, config_dir: &Path) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| config_dir.join(&self.logging.dir).join(file))
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  backend: {}", self.app.backend);

        if self.app.backend == Backend::Firebase {
            info!(
                "  firebase: project={}, auth_domain={}, api_key={}",
                self.firebase.project_id.as_deref().unwrap_or("<unset>"),
                self.firebase.auth_domain.as_deref().unwrap_or("<unset>"),
                if self.firebase.api_key.is_some() {
                    "set"
                } else {
                    "unset"
                }
            );
        }

        info!(
            "  session: min_resolve_delay={}ms",
            self.session.min_resolve_delay_ms
        );
        info!("  splash: min_display={}ms", self.splash.min_display_ms);
        info!(
            "  logging: {} ({})",
            self.logging.level,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // App
        Self::apply_env_parse("CP_BACKEND", &mut self.app.backend);

        // Firebase
        Self::apply_env_option_string("CP_FIREBASE_API_KEY", &mut self.firebase.api_key);
        Self::apply_env_option_string("CP_FIREBASE_AUTH_DOMAIN", &mut self.firebase.auth_domain);
        Self::apply_env_option_string("CP_FIREBASE_PROJECT_ID", &mut self.firebase.project_id);
        Self::apply_env_option_string(
            "CP_FIREBASE_STORAGE_BUCKET",
            &mut self.firebase.storage_bucket,
        );
        Self::apply_env_option_string(
            "CP_FIREBASE_MESSAGING_SENDER_ID",
            &mut self.firebase.messaging_sender_id,
        );
        Self::apply_env_option_string("CP_FIREBASE_APP_ID", &mut self.firebase.app_id);
        Self::apply_env_string(
            "CP_FIREBASE_IDENTITY_TOOLKIT_URL",
            &mut self.firebase.identity_toolkit_url,
        );
        Self::apply_env_string(
            "CP_FIREBASE_SECURE_TOKEN_URL",
            &mut self.firebase.secure_token_url,
        );
        Self::apply_env_string("CP_FIREBASE_FIRESTORE_URL", &mut self.firebase.firestore_url);

        // Timing
        Self::apply_env_parse(
            "CP_SESSION_MIN_RESOLVE_DELAY_MS",
            &mut self.session.min_resolve_delay_ms,
        );
        Self::apply_env_parse("CP_SPLASH_MIN_DISPLAY_MS", &mut self.splash.min_display_ms);

        // Logging
        Self::apply_env_parse("CP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("CP_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("CP_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("CP_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values;
    /// unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
