use crate::forms::{required, validate_year};
use crate::{
    FormField, PROFILE_YEAR_LOOKAHEAD, ProfileRecord, ProfileUpdate, ValidationError,
    ValidationResult,
};

/// Editable profile buffers. Email is not part of the form; it is shown
/// read-only from the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub degree_title: String,
    pub graduation_year: String,
}

impl ProfileForm {
    pub const FIELDS: &'static [FormField] = &[
        FormField::Name,
        FormField::DegreeTitle,
        FormField::GraduationYear,
    ];

    /// Populate from a stored record; `None` yields an empty form.
    pub fn from_record(record: Option<&ProfileRecord>) -> Self {
        match record {
            Some(record) => Self {
                name: record.name.clone(),
                degree_title: record.degree_title.clone(),
                graduation_year: record
                    .graduation_year
                    .map(|year| year.to_string())
                    .unwrap_or_default(),
            },
            None => Self::default(),
        }
    }

    pub fn set(&mut self, field: FormField, value: &str) -> bool {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::DegreeTitle => self.degree_title = value.to_string(),
            FormField::GraduationYear => self.graduation_year = value.to_string(),
            _ => return false,
        }
        true
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::DegreeTitle => Some(&self.degree_title),
            FormField::GraduationYear => Some(&self.graduation_year),
            _ => None,
        }
    }

    /// Validates and returns a full update. Expected graduation dates up to
    /// `PROFILE_YEAR_LOOKAHEAD` years ahead are accepted.
    pub fn validate(&self, current_year: i32) -> ValidationResult<ProfileUpdate> {
        let name = required(&self.name, ValidationError::NameRequired)?;
        let degree_title = required(&self.degree_title, ValidationError::DegreeTitleRequired)?;
        let graduation_year =
            validate_year(&self.graduation_year, current_year + PROFILE_YEAR_LOOKAHEAD)?;

        Ok(ProfileUpdate {
            name: Some(name),
            degree_title: Some(degree_title),
            graduation_year: Some(graduation_year),
        })
    }
}
