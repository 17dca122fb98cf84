use std::result::Result as StdResult;

use thiserror::Error;

/// Local form validation failures.
///
/// These never reach the repository; the display text is what the screen
/// shows to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Degree title is required")]
    DegreeTitleRequired,

    #[error("Enter a valid graduation year ({min}-{max})")]
    GraduationYearOutOfRange { min: i32, max: i32 },
}

pub type Result<T> = StdResult<T, ValidationError>;
