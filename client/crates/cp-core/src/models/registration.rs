/// Normalised registration input, produced only by
/// [`RegistrationForm::validate`](crate::RegistrationForm::validate).
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    /// Trimmed and lower-cased.
    pub email: String,
    pub password: String,
    pub degree_title: String,
    pub graduation_year: i32,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("degree_title", &self.degree_title)
            .field("graduation_year", &self.graduation_year)
            .finish()
    }
}
