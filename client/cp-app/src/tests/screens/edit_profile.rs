use crate::screens::{EditProfileScreen, Navigation, Phase};
use crate::tests::screens::{CURRENT_YEAR, identity, record};
use crate::{Command, Effect, EffectOutcome};

use cp_core::{FormField, ProfileUpdate};
use cp_services::{RepositoryError, ServiceError};

fn set(screen: &mut EditProfileScreen, field: FormField, value: &str) {
    screen.handle(Command::Set {
        field,
        value: value.to_string(),
    });
}

#[test]
fn given_parameter_and_read_paths_when_mounted_then_same_form_state() {
    // Given
    let (from_param, param_response) =
        EditProfileScreen::mount(identity(), Some(record()), CURRENT_YEAR);
    let (mut from_read, read_response) = EditProfileScreen::mount(identity(), None, CURRENT_YEAR);

    // When
    from_read.complete(EffectOutcome::ProfileLoaded(Ok(Some(record()))));

    // Then
    assert_eq!(param_response.effect, None);
    assert_eq!(
        read_response.effect,
        Some(Effect::ReadProfile {
            identity_id: "u1".to_string()
        })
    );
    assert_eq!(from_param.form(), from_read.form());
    assert_eq!(from_param.form().graduation_year, "2020");
}

#[test]
fn given_missing_document_when_loaded_then_info_alert_and_empty_form() {
    let (mut screen, _) = EditProfileScreen::mount(identity(), None, CURRENT_YEAR);

    let response = screen.complete(EffectOutcome::ProfileLoaded(Ok(None)));

    assert_eq!(
        response.alert.map(|a| a.title),
        Some("No profile yet".to_string())
    );
    assert!(screen.form().name.is_empty());
    assert!(!screen.is_loading());
}

#[test]
fn given_expected_graduation_year_when_saved_then_update_effect() {
    // Given
    let (mut screen, _) = EditProfileScreen::mount(identity(), Some(record()), CURRENT_YEAR);
    set(&mut screen, FormField::GraduationYear, "2036");

    // When
    let response = screen.handle(Command::Submit);

    // Then
    assert_eq!(
        response.effect,
        Some(Effect::UpdateProfile {
            identity_id: "u1".to_string(),
            update: ProfileUpdate {
                name: Some("Ana".to_string()),
                degree_title: Some("BSc".to_string()),
                graduation_year: Some(2036),
            }
        })
    );
    assert_eq!(screen.phase(), Phase::Submitting);
}

#[test]
fn given_year_past_lookahead_when_saved_then_rejected() {
    let (mut screen, _) = EditProfileScreen::mount(identity(), Some(record()), CURRENT_YEAR);
    set(&mut screen, FormField::GraduationYear, "2037");

    let response = screen.handle(Command::Submit);

    assert_eq!(response.effect, None);
    assert!(response.alert.is_some());
}

#[test]
fn given_blank_name_when_saved_then_rejected() {
    let (mut screen, _) = EditProfileScreen::mount(identity(), Some(record()), CURRENT_YEAR);
    set(&mut screen, FormField::Name, "  ");

    let response = screen.handle(Command::Submit);

    assert_eq!(
        response.alert.map(|a| a.message),
        Some("Name is required".to_string())
    );
}

#[test]
fn given_edits_when_cancelled_then_loaded_values_restored() {
    let (mut screen, _) = EditProfileScreen::mount(identity(), Some(record()), CURRENT_YEAR);
    set(&mut screen, FormField::Name, "Someone else");

    screen.handle(Command::Cancel);

    assert_eq!(screen.form().name, "Ana");
}

#[test]
fn given_email_field_when_set_then_rejected_as_read_only() {
    let (mut screen, _) = EditProfileScreen::mount(identity(), Some(record()), CURRENT_YEAR);

    let response = screen.handle(Command::Set {
        field: FormField::Email,
        value: "other@example.com".to_string(),
    });

    assert!(response.alert.is_some());
    assert!(screen.render().contains("ana@example.com"));
}

#[test]
fn given_saved_when_completed_then_alert_and_back() {
    let (mut screen, _) = EditProfileScreen::mount(identity(), Some(record()), CURRENT_YEAR);
    screen.handle(Command::Submit);

    let response = screen.complete(EffectOutcome::ProfileSaved(Ok(())));

    assert_eq!(screen.phase(), Phase::Done);
    assert!(response.alert.is_some());
    assert_eq!(response.navigation, Some(Navigation::Back));
}

#[test]
fn given_save_failure_when_completed_then_editing_with_message() {
    let (mut screen, _) = EditProfileScreen::mount(identity(), Some(record()), CURRENT_YEAR);
    screen.handle(Command::Submit);
    let error = RepositoryError::profile_write("u1", ServiceError::unavailable("UNAVAILABLE"));

    let response = screen.complete(EffectOutcome::ProfileSaved(Err(error)));

    assert_eq!(screen.phase(), Phase::Editing);
    assert_eq!(
        response.alert.map(|a| a.message),
        Some("Could not save your profile: UNAVAILABLE".to_string())
    );
}
