mod logging;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - restores the previous value on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::set_var(key, value) };
        Self { key, original }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::remove_var(key) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point CP_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("CP_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Config dir with a complete `[firebase]` section
pub(crate) fn setup_firebase_config_dir() -> (TempDir, EnvGuard) {
    let (temp, guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [firebase]
            api_key = "AIzaTestKey"
            auth_domain = "campus-test.firebaseapp.com"
            project_id = "campus-test"
            app_id = "1:1234:web:abcd"
        "#,
    )
    .unwrap();
    (temp, guard)
}
