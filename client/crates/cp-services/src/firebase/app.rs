use crate::firebase::{FirebaseAuth, Firestore};

use cp_config::{ConfigErrorResult, FirebaseConfig};

use std::sync::Arc;

use log::info;
use reqwest::Client;

/// One initialised Firebase application: a single HTTP client shared by the
/// auth and Firestore handles. Build it once at startup and hand out the
/// `Arc`s.
pub struct FirebaseApp {
    auth: Arc<FirebaseAuth>,
    firestore: Arc<Firestore>,
}

impl FirebaseApp {
    pub fn new(config: &FirebaseConfig) -> ConfigErrorResult<Self> {
        config.validate()?;
        let api_key = config.api_key()?;
        let project_id = config.project_id()?;

        let http = Client::new();

        let auth = Arc::new(FirebaseAuth::new(
            http.clone(),
            api_key,
            &config.identity_toolkit_url,
            &config.secure_token_url,
        ));
        let firestore = Arc::new(Firestore::new(
            http,
            &config.firestore_url,
            project_id,
            Arc::clone(&auth),
        ));

        info!("Firebase initialised for project {project_id}");

        Ok(Self { auth, firestore })
    }

    pub fn auth(&self) -> Arc<FirebaseAuth> {
        Arc::clone(&self.auth)
    }

    pub fn firestore(&self) -> Arc<Firestore> {
        Arc::clone(&self.firestore)
    }
}
