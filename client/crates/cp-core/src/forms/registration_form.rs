use crate::forms::{required, validate_email, validate_year};
use crate::{FormField, MIN_PASSWORD_LENGTH, Registration, ValidationError, ValidationResult};

/// Raw buffers of the registration screen. The year stays text until
/// validation so that partial input can be held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub degree_title: String,
    pub graduation_year: String,
}

impl RegistrationForm {
    pub const FIELDS: &'static [FormField] = &[
        FormField::Name,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
        FormField::DegreeTitle,
        FormField::GraduationYear,
    ];

    pub fn set(&mut self, field: FormField, value: &str) -> bool {
        let target = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
            FormField::DegreeTitle => &mut self.degree_title,
            FormField::GraduationYear => &mut self.graduation_year,
        };
        *target = value.to_string();
        true
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        Some(match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
            FormField::DegreeTitle => &self.degree_title,
            FormField::GraduationYear => &self.graduation_year,
        })
    }

    /// Checks every rule in screen order and returns the first failure.
    ///
    /// The graduation year must lie in `[MIN_GRADUATION_YEAR, current_year]`.
    pub fn validate(&self, current_year: i32) -> ValidationResult<Registration> {
        let name = required(&self.name, ValidationError::NameRequired)?;
        let email = validate_email(&self.email)?;

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        let degree_title = required(&self.degree_title, ValidationError::DegreeTitleRequired)?;
        let graduation_year = validate_year(&self.graduation_year, current_year)?;

        Ok(Registration {
            name,
            email,
            password: self.password.clone(),
            degree_title,
            graduation_year,
        })
    }
}
