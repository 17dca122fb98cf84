use crate::firebase::auth_tokens::AuthTokens;
use crate::firebase::rest::execute;
use crate::{IdentityBroadcaster, IdentityService, IdentityWatch, ServiceError, ServiceResult};

use cp_core::Identity;

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Identity Toolkit sign-up / sign-in response.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

/// Secure Token refresh response (snake_case on this endpoint).
#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

/// Firebase Authentication client (email/password provider).
///
/// The signed-in user lives only in memory; sign-out is local, as with the
/// web SDK.
pub struct FirebaseAuth {
    http: Client,
    api_key: String,
    identity_toolkit_url: String,
    secure_token_url: String,
    tokens: Mutex<Option<AuthTokens>>,
    broadcaster: IdentityBroadcaster,
}

impl FirebaseAuth {
    pub fn new(
        http: Client,
        api_key: &str,
        identity_toolkit_url: &str,
        secure_token_url: &str,
    ) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            identity_toolkit_url: identity_toolkit_url.trim_end_matches('/').to_string(),
            secure_token_url: secure_token_url.trim_end_matches('/').to_string(),
            tokens: Mutex::new(None),
            broadcaster: IdentityBroadcaster::new(),
        }
    }

    /// ID token of the signed-in user, refreshed first when it is about to
    /// expire. A refresh rejected by the service signs the user out.
    pub async fn id_token(&self) -> ServiceResult<String> {
        let mut guard = self.tokens.lock().await;

        let refresh_token = match guard.as_ref() {
            None => return Err(ServiceError::not_signed_in()),
            Some(tokens) if !tokens.needs_refresh(Utc::now()) => {
                return Ok(tokens.id_token.clone());
            }
            Some(tokens) => tokens.refresh_token.clone(),
        };

        match self.refresh(&refresh_token).await {
            Ok(refreshed) => {
                let now = Utc::now();
                if let Some(tokens) = guard.as_mut() {
                    *tokens = AuthTokens::new(
                        tokens.identity.clone(),
                        refreshed.id_token.clone(),
                        refreshed.refresh_token,
                        &refreshed.expires_in,
                        now,
                    );
                }
                Ok(refreshed.id_token)
            }
            Err(err) => {
                if matches!(err, ServiceError::Api { .. }) {
                    warn!("Token refresh rejected, signing out: {}", err.message());
                    *guard = None;
                    drop(guard);
                    self.broadcaster.publish(None);
                }
                Err(err)
            }
        }
    }

    async fn refresh(&self, refresh_token: &str) -> ServiceResult<RefreshResponse> {
        let url = format!("{}/v1/token", self.secure_token_url);

        let req = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ]);

        let body = execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn password_request(
        &self,
        action: &str,
        email: &str,
        password: &str,
    ) -> ServiceResult<Identity> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct PasswordRequest<'a> {
            email: &'a str,
            password: &'a str,
            return_secure_token: bool,
        }

        let url = format!("{}/v1/accounts:{}", self.identity_toolkit_url, action);
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = execute(
            self.http
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .json(&body),
        )
        .await?;
        let account: AccountResponse = serde_json::from_value(response)?;

        let account_email = if account.email.is_empty() {
            email.to_string()
        } else {
            account.email
        };
        let identity = Identity::new(account.local_id, account_email);

        *self.tokens.lock().await = Some(AuthTokens::new(
            identity.clone(),
            account.id_token,
            account.refresh_token,
            &account.expires_in,
            Utc::now(),
        ));
        self.broadcaster.publish(Some(identity.clone()));

        Ok(identity)
    }
}

#[async_trait]
impl IdentityService for FirebaseAuth {
    async fn create_account(&self, email: &str, password: &str) -> ServiceResult<Identity> {
        let identity = self.password_request("signUp", email, password).await?;
        info!("Account created: {}", identity.id);
        Ok(identity)
    }

    async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<Identity> {
        let identity = self
            .password_request("signInWithPassword", email, password)
            .await?;
        info!("Signed in: {}", identity.id);
        Ok(identity)
    }

    async fn sign_out(&self) -> ServiceResult<()> {
        *self.tokens.lock().await = None;
        self.broadcaster.publish(None);
        info!("Signed out");
        Ok(())
    }

    fn subscribe(&self) -> IdentityWatch {
        self.broadcaster.subscribe()
    }

    fn current_identity(&self) -> Option<Identity> {
        self.broadcaster.current()
    }
}
