//! Firebase Authentication and Cloud Firestore over their REST APIs.

mod app;
mod auth;
mod auth_tokens;
mod firestore;
pub mod firestore_value;
mod rest;

pub use app::FirebaseApp;
pub use auth::FirebaseAuth;
pub use firestore::Firestore;
