pub mod form_field;
pub mod login_form;
pub mod profile_form;
pub mod registration_form;

use crate::{MIN_GRADUATION_YEAR, ValidationError, ValidationResult};

pub(crate) fn validate_email(email: &str) -> ValidationResult<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(trimmed.to_lowercase())
}

pub(crate) fn validate_year(input: &str, max: i32) -> ValidationResult<i32> {
    let out_of_range = ValidationError::GraduationYearOutOfRange {
        min: MIN_GRADUATION_YEAR,
        max,
    };

    let year: i32 = input.trim().parse().map_err(|_| out_of_range.clone())?;
    if !(MIN_GRADUATION_YEAR..=max).contains(&year) {
        return Err(out_of_range);
    }
    Ok(year)
}

pub(crate) fn required(value: &str, error: ValidationError) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_string())
}
