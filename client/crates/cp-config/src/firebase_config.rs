use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FIRESTORE_URL, DEFAULT_IDENTITY_TOOLKIT_URL,
    DEFAULT_SECURE_TOKEN_URL,
};

use std::fmt;

use serde::Deserialize;

/// Web-app credentials of the Firebase project plus the REST endpoints.
///
/// The endpoint URLs only need overriding for emulators and tests.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub identity_toolkit_url: String,
    pub secure_token_url: String,
    pub firestore_url: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            auth_domain: None,
            project_id: None,
            storage_bucket: None,
            messaging_sender_id: None,
            app_id: None,
            identity_toolkit_url: String::from(DEFAULT_IDENTITY_TOOLKIT_URL),
            secure_token_url: String::from(DEFAULT_SECURE_TOKEN_URL),
            firestore_url: String::from(DEFAULT_FIRESTORE_URL),
        }
    }
}

impl fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("auth_domain", &self.auth_domain)
            .field("project_id", &self.project_id)
            .field("storage_bucket", &self.storage_bucket)
            .field("messaging_sender_id", &self.messaging_sender_id)
            .field("app_id", &self.app_id)
            .field("identity_toolkit_url", &self.identity_toolkit_url)
            .field("secure_token_url", &self.secure_token_url)
            .field("firestore_url", &self.firestore_url)
            .finish()
    }
}

impl FirebaseConfig {
    /// Every value the client needs to talk to the project must be present.
    /// Storage bucket and sender id are carried but not required.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::require("firebase.api_key", &self.api_key)?;
        Self::require("firebase.auth_domain", &self.auth_domain)?;
        Self::require("firebase.project_id", &self.project_id)?;
        Self::require("firebase.app_id", &self.app_id)?;

        for (key, url) in [
            ("firebase.identity_toolkit_url", &self.identity_toolkit_url),
            ("firebase.secure_token_url", &self.secure_token_url),
            ("firebase.firestore_url", &self.firestore_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::firebase(format!(
                    "{key} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        Ok(())
    }

    /// API key, once validated.
    pub fn api_key(&self) -> ConfigErrorResult<&str> {
        Self::require("firebase.api_key", &self.api_key)
    }

    /// Project id, once validated.
    pub fn project_id(&self) -> ConfigErrorResult<&str> {
        Self::require("firebase.project_id", &self.project_id)
    }

    #[track_caller]
    fn require<'a>(key: &'static str, value: &'a Option<String>) -> ConfigErrorResult<&'a str> {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(ConfigError::missing(key)),
        }
    }
}
