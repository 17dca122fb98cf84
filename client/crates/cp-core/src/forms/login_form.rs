use crate::forms::validate_email;
use crate::{FormField, ValidationError, ValidationResult};

/// Email/password buffers of the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Credentials that passed local validation.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    /// Trimmed and lower-cased.
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginForm {
    pub const FIELDS: &'static [FormField] = &[FormField::Email, FormField::Password];

    /// Returns false when the field does not belong to this form.
    pub fn set(&mut self, field: FormField, value: &str) -> bool {
        match field {
            FormField::Email => self.email = value.to_string(),
            FormField::Password => self.password = value.to_string(),
            _ => return false,
        }
        true
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Email => Some(&self.email),
            FormField::Password => Some(&self.password),
            _ => None,
        }
    }

    pub fn validate(&self) -> ValidationResult<LoginCredentials> {
        let email = validate_email(&self.email)?;

        if self.password.trim().is_empty() {
            return Err(ValidationError::PasswordRequired);
        }

        Ok(LoginCredentials {
            email,
            password: self.password.clone(),
        })
    }
}
