use crate::screens::{HomeScreen, Navigation, Phase};
use crate::tests::screens::{identity, record};
use crate::{Command, Effect, EffectOutcome};

use cp_core::ProfileRecord;
use cp_services::{RepositoryError, ServiceError};
use cp_session::Route;

#[test]
fn given_identity_when_mounted_then_reads_its_profile() {
    let (screen, response) = HomeScreen::mount(identity());

    assert_eq!(
        response.effect,
        Some(Effect::ReadProfile {
            identity_id: "u1".to_string()
        })
    );
    assert!(screen.is_loading());
}

#[test]
fn given_loaded_profile_when_rendered_then_fields_shown() {
    let (mut screen, _) = HomeScreen::mount(identity());

    screen.complete(EffectOutcome::ProfileLoaded(Ok(Some(record()))));
    let text = screen.render();

    assert!(text.contains("Ana"));
    assert!(text.contains("BSc"));
    assert!(text.contains("2020"));
}

#[test]
fn given_partial_profile_when_rendered_then_placeholders_and_identity_email() {
    // Given
    let (mut screen, _) = HomeScreen::mount(identity());
    let partial = ProfileRecord {
        name: "Ana".to_string(),
        degree_title: String::new(),
        graduation_year: None,
        email: None,
        created_at: None,
        updated_at: None,
    };

    // When
    screen.complete(EffectOutcome::ProfileLoaded(Ok(Some(partial))));
    let text = screen.render();

    // Then
    assert!(text.contains("ana@example.com"));
    assert_eq!(text.matches("not available").count(), 2);
}

#[test]
fn given_read_failure_when_completed_then_alert() {
    let (mut screen, _) = HomeScreen::mount(identity());
    let error = RepositoryError::profile_read("u1", ServiceError::unavailable("UNAVAILABLE"));

    let response = screen.complete(EffectOutcome::ProfileLoaded(Err(error)));

    assert!(response.alert.is_some());
    assert!(!screen.is_loading());
    assert_eq!(screen.profile(), None);
}

#[test]
fn given_loaded_profile_when_edit_then_navigates_with_profile() {
    let (mut screen, _) = HomeScreen::mount(identity());
    screen.complete(EffectOutcome::ProfileLoaded(Ok(Some(record()))));

    let response = screen.handle(Command::Edit);

    assert_eq!(
        response.navigation,
        Some(Navigation::To(Route::EditProfile {
            profile: Some(record())
        }))
    );
}

#[test]
fn given_logout_when_handled_then_terminate_session_effect() {
    let (mut screen, _) = HomeScreen::mount(identity());

    let response = screen.handle(Command::Logout);

    assert_eq!(response.effect, Some(Effect::TerminateSession));
    assert_eq!(screen.phase(), Phase::Submitting);
}

#[test]
fn given_sign_out_failure_when_completed_then_alert_and_editing() {
    let (mut screen, _) = HomeScreen::mount(identity());
    screen.handle(Command::Logout);
    let error = RepositoryError::sign_out(ServiceError::unavailable("NETWORK_REQUEST_FAILED"));

    let response = screen.complete(EffectOutcome::SessionTerminated(Err(error)));

    assert_eq!(screen.phase(), Phase::Editing);
    assert_eq!(
        response.alert.map(|a| a.message),
        Some("Could not sign out: NETWORK_REQUEST_FAILED".to_string())
    );
}

#[test]
fn given_empty_profile_when_registration_completes_then_confirms_and_reads_again() {
    // Given
    let (mut screen, _) = HomeScreen::mount(identity());
    screen.complete(EffectOutcome::ProfileLoaded(Ok(None)));

    // When
    let response = screen.registration_completed();

    // Then
    assert_eq!(
        response.effect,
        Some(Effect::ReadProfile {
            identity_id: "u1".to_string()
        })
    );
    assert_eq!(
        response.alert.map(|alert| alert.title),
        Some("Registration successful".to_string())
    );
    assert!(screen.is_loading());
}
