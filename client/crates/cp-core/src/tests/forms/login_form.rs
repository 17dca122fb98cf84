use crate::{FormField, LoginForm, ValidationError};

fn filled(email: &str, password: &str) -> LoginForm {
    let mut form = LoginForm::default();
    form.set(FormField::Email, email);
    form.set(FormField::Password, password);
    form
}

#[test]
fn given_valid_input_when_validated_then_email_is_normalised() {
    let credentials = filled("  Ana@Example.COM ", "secret").validate().unwrap();

    assert_eq!(credentials.email, "ana@example.com");
    assert_eq!(credentials.password, "secret");
}

#[test]
fn given_email_without_at_when_validated_then_invalid_email() {
    let result = filled("ana.example.com", "secret").validate();
    assert_eq!(result.unwrap_err(), ValidationError::InvalidEmail);
}

#[test]
fn given_blank_password_when_validated_then_password_required() {
    let result = filled("ana@example.com", "   ").validate();
    assert_eq!(result.unwrap_err(), ValidationError::PasswordRequired);
}

#[test]
fn given_foreign_field_when_set_then_rejected() {
    let mut form = LoginForm::default();
    assert!(!form.set(FormField::Name, "Ana"));
    assert_eq!(form, LoginForm::default());
}

#[test]
fn given_credentials_when_debug_printed_then_password_is_redacted() {
    let credentials = filled("ana@example.com", "hunter22").validate().unwrap();
    let printed = format!("{credentials:?}");

    assert!(!printed.contains("hunter22"));
    assert!(printed.contains("<redacted>"));
}
