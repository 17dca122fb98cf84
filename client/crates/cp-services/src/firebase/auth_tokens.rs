use cp_core::Identity;

use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Tokens are refreshed this long before they actually expire.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Signed-in user plus the tokens that authorise document requests.
#[derive(Clone)]
pub(crate) struct AuthTokens {
    pub(crate) identity: Identity,
    pub(crate) id_token: String,
    pub(crate) refresh_token: String,
    pub(crate) expires_at: DateTime<Utc>,
}

impl AuthTokens {
    /// `expires_in` is the seconds-as-string value the REST API returns.
    pub(crate) fn new(
        identity: Identity,
        id_token: String,
        refresh_token: String,
        expires_in: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let secs = expires_in.trim().parse::<i64>().unwrap_or(0);
        Self {
            identity,
            id_token,
            refresh_token,
            expires_at: now + Duration::seconds(secs),
        }
    }

    pub(crate) fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_MARGIN_SECS) >= self.expires_at
    }
}

impl fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTokens")
            .field("identity", &self.identity)
            .field("id_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
