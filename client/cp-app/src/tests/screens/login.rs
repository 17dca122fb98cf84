use crate::screens::{LoginScreen, Navigation, Phase};
use crate::{Command, Effect, EffectOutcome};

use cp_core::{FormField, Identity};
use cp_services::{RepositoryError, ServiceError};
use cp_session::Route;

fn set(screen: &mut LoginScreen, field: FormField, value: &str) {
    let response = screen.handle(Command::Set {
        field,
        value: value.to_string(),
    });
    assert_eq!(response.alert, None);
}

fn filled() -> LoginScreen {
    let mut screen = LoginScreen::new();
    set(&mut screen, FormField::Email, " Ana@Example.com ");
    set(&mut screen, FormField::Password, "secret1");
    screen
}

#[test]
fn given_valid_form_when_submitted_then_authenticate_effect_with_normalised_email() {
    // Given
    let mut screen = filled();

    // When
    let response = screen.handle(Command::Submit);

    // Then
    assert_eq!(
        response.effect,
        Some(Effect::Authenticate {
            email: "ana@example.com".to_string(),
            password: "secret1".to_string()
        })
    );
    assert_eq!(screen.phase(), Phase::Submitting);
}

#[test]
fn given_blank_password_when_submitted_then_alert_and_no_effect() {
    let mut screen = LoginScreen::new();
    set(&mut screen, FormField::Email, "ana@example.com");

    let response = screen.handle(Command::Submit);

    assert_eq!(response.effect, None);
    assert_eq!(
        response.alert.map(|a| a.message),
        Some("Password is required".to_string())
    );
    assert_eq!(screen.phase(), Phase::Editing);
}

#[test]
fn given_submitting_when_submitted_again_then_no_second_effect() {
    let mut screen = filled();
    screen.handle(Command::Submit);

    let response = screen.handle(Command::Submit);

    assert_eq!(response.effect, None);
    assert!(response.alert.is_some());
}

#[test]
fn given_success_when_completed_then_done_without_navigation() {
    let mut screen = filled();
    screen.handle(Command::Submit);

    let response = screen.complete(EffectOutcome::Authenticated(Ok(Identity::new(
        "u1",
        "ana@example.com",
    ))));

    assert_eq!(response.navigation, None);
    assert_eq!(response.alert, None);
    assert_eq!(screen.phase(), Phase::Done);
}

#[test]
fn given_failure_when_completed_then_editing_with_service_message() {
    // Given
    let mut screen = filled();
    screen.handle(Command::Submit);
    let error = RepositoryError::authentication(ServiceError::api(
        "INVALID_ARGUMENT",
        "INVALID_LOGIN_CREDENTIALS",
    ));

    // When
    let response = screen.complete(EffectOutcome::Authenticated(Err(error)));

    // Then
    assert_eq!(screen.phase(), Phase::Editing);
    assert_eq!(
        response.alert.map(|a| a.message),
        Some("Login failed: INVALID_LOGIN_CREDENTIALS".to_string())
    );
    assert_eq!(screen.form().email, " Ana@Example.com ");
}

#[test]
fn given_register_command_when_handled_then_navigates_to_register() {
    let mut screen = LoginScreen::new();

    let response = screen.handle(Command::Register);

    assert_eq!(response.navigation, Some(Navigation::To(Route::Register)));
}

#[test]
fn given_profile_field_when_set_then_rejected() {
    let mut screen = LoginScreen::new();

    let response = screen.handle(Command::Set {
        field: FormField::DegreeTitle,
        value: "BSc".to_string(),
    });

    assert!(response.alert.is_some());
}

#[test]
fn given_password_when_rendered_then_masked() {
    let screen = filled();

    let text = screen.render();

    assert!(!text.contains("secret1"));
    assert!(text.contains("*******"));
}
