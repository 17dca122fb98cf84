mod edit_profile;
mod home;
mod login;
mod register;

use cp_core::{Identity, ProfileRecord};

const CURRENT_YEAR: i32 = 2026;

fn identity() -> Identity {
    Identity::new("u1", "ana@example.com")
}

fn record() -> ProfileRecord {
    ProfileRecord {
        name: "Ana".to_string(),
        degree_title: "BSc".to_string(),
        graduation_year: Some(2020),
        email: Some("ana@example.com".to_string()),
        created_at: None,
        updated_at: None,
    }
}
