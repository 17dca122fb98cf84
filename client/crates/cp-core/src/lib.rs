//! Domain types shared by every layer of the campus profile client.
//!
//! Nothing in this crate performs I/O: it holds the identity and profile
//! models, the form buffers the screens edit, and the local validation
//! rules that run before any request leaves the device.

pub mod forms;
pub mod models;
pub mod validation_error;

pub use forms::form_field::FormField;
pub use forms::login_form::{LoginCredentials, LoginForm};
pub use forms::profile_form::ProfileForm;
pub use forms::registration_form::RegistrationForm;
pub use models::identity::Identity;
pub use models::profile_record::ProfileRecord;
pub use models::profile_update::ProfileUpdate;
pub use models::registration::Registration;
pub use validation_error::{Result as ValidationResult, ValidationError};

#[cfg(test)]
mod tests;

/// Earliest graduation year accepted by any form.
pub const MIN_GRADUATION_YEAR: i32 = 1950;

/// Minimum password length enforced at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// How many years past the current one a profile edit may claim
/// (expected graduation dates).
pub const PROFILE_YEAR_LOOKAHEAD: i32 = 10;

/// Current calendar year in UTC.
pub fn current_year() -> i32 {
    use chrono::Datelike;

    chrono::Utc::now().year()
}
