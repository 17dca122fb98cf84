mod app_config;
mod backend;
mod config;
mod error;
mod firebase_config;
mod log_level;
mod logging_config;
mod session_config;
mod splash_config;

pub use app_config::AppConfig;
pub use backend::Backend;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use firebase_config::FirebaseConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use splash_config::SplashConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "CP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".campus";
const CONFIG_FILE_NAME: &str = "config.toml";
const DOTENV_FILE_NAME: &str = ".env";

const DEFAULT_IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com";
const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";

const DEFAULT_MIN_RESOLVE_DELAY_MS: u64 = 2_000;
const DEFAULT_SPLASH_MIN_DISPLAY_MS: u64 = 4_000;
const MAX_DELAY_MS: u64 = 60_000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
