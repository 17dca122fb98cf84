use crate::screens::{Navigation, Phase, RegisterScreen};
use crate::tests::screens::{CURRENT_YEAR, identity};
use crate::{Command, Effect, EffectOutcome};

use cp_core::FormField;
use cp_services::{RepositoryError, ServiceError};
use cp_session::Route;

fn filled(year: &str) -> RegisterScreen {
    let mut screen = RegisterScreen::new(CURRENT_YEAR);
    for (field, value) in [
        (FormField::Name, " Ana "),
        (FormField::Email, "Ana@Example.com"),
        (FormField::Password, "secret1"),
        (FormField::ConfirmPassword, "secret1"),
        (FormField::DegreeTitle, "BSc"),
        (FormField::GraduationYear, year),
    ] {
        screen.handle(Command::Set {
            field,
            value: value.to_string(),
        });
    }
    screen
}

#[test]
fn given_valid_form_when_submitted_then_register_effect() {
    // Given
    let mut screen = filled("2020");

    // When
    let response = screen.handle(Command::Submit);

    // Then
    let Some(Effect::Register(registration)) = response.effect else {
        panic!("expected a register effect");
    };
    assert_eq!(registration.name, "Ana");
    assert_eq!(registration.email, "ana@example.com");
    assert_eq!(registration.graduation_year, 2020);
    assert_eq!(screen.phase(), Phase::Submitting);
}

#[test]
fn given_future_year_when_submitted_then_rejected_without_effect() {
    let mut screen = filled("2027");

    let response = screen.handle(Command::Submit);

    assert_eq!(response.effect, None);
    assert!(response.alert.is_some());
    assert_eq!(screen.phase(), Phase::Editing);
}

#[test]
fn given_mismatched_confirmation_when_submitted_then_mismatch_alert() {
    let mut screen = filled("2020");
    screen.handle(Command::Set {
        field: FormField::ConfirmPassword,
        value: "secret2".to_string(),
    });

    let response = screen.handle(Command::Submit);

    assert_eq!(response.effect, None);
    assert_eq!(
        response.alert.map(|a| a.message),
        Some("Passwords do not match".to_string())
    );
}

#[test]
fn given_success_when_completed_then_alert_and_navigate_to_login() {
    let mut screen = filled("2020");
    screen.handle(Command::Submit);

    let response = screen.complete(EffectOutcome::Registered(Ok(identity())));

    assert_eq!(screen.phase(), Phase::Done);
    assert_eq!(
        response.alert.map(|a| a.title),
        Some("Registration successful".to_string())
    );
    assert_eq!(response.navigation, Some(Navigation::To(Route::Login)));
}

#[test]
fn given_email_taken_when_completed_then_editing_with_service_message() {
    let mut screen = filled("2020");
    screen.handle(Command::Submit);
    let error = RepositoryError::identity_creation(ServiceError::api(
        "INVALID_ARGUMENT",
        "EMAIL_EXISTS",
    ));

    let response = screen.complete(EffectOutcome::Registered(Err(error)));

    assert_eq!(screen.phase(), Phase::Editing);
    assert_eq!(
        response.alert.map(|a| a.message),
        Some("Registration failed: EMAIL_EXISTS".to_string())
    );
}

#[test]
fn given_login_link_when_handled_then_navigates_to_login() {
    let mut screen = RegisterScreen::new(CURRENT_YEAR);

    let response = screen.handle(Command::Login);

    assert_eq!(response.navigation, Some(Navigation::To(Route::Login)));
}
