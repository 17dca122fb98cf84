use std::fmt;
use std::str::FromStr;

/// Input buffer addressed by a `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    DegreeTitle,
    GraduationYear,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm",
            Self::DegreeTitle => "degree",
            Self::GraduationYear => "year",
        }
    }

    /// Secret fields are masked when a form is rendered.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "confirm" | "confirm_password" => Ok(Self::ConfirmPassword),
            "degree" | "degree_title" => Ok(Self::DegreeTitle),
            "year" | "graduation_year" => Ok(Self::GraduationYear),
            other => Err(format!("Unknown field: {other}")),
        }
    }
}
