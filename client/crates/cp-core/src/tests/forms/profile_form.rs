use crate::{FormField, ProfileForm, ProfileRecord, ValidationError};

use chrono::Utc;

const CURRENT_YEAR: i32 = 2026;

#[test]
fn given_record_when_form_built_then_fields_copied() {
    let record = ProfileRecord {
        name: "Ana".into(),
        degree_title: "BSc".into(),
        graduation_year: Some(2019),
        email: Some("ana@example.com".into()),
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    };

    let form = ProfileForm::from_record(Some(&record));

    assert_eq!(form.name, "Ana");
    assert_eq!(form.degree_title, "BSc");
    assert_eq!(form.graduation_year, "2019");
}

#[test]
fn given_no_record_when_form_built_then_empty() {
    assert_eq!(ProfileForm::from_record(None), ProfileForm::default());
}

#[test]
fn given_year_within_lookahead_when_validated_then_accepted() {
    let form = ProfileForm {
        name: "Ana".into(),
        degree_title: "BSc".into(),
        graduation_year: "2036".into(),
    };

    let update = form.validate(CURRENT_YEAR).unwrap();

    assert_eq!(update.graduation_year, Some(2036));
    assert_eq!(update.name.as_deref(), Some("Ana"));
}

#[test]
fn given_year_past_lookahead_when_validated_then_rejected() {
    let form = ProfileForm {
        name: "Ana".into(),
        degree_title: "BSc".into(),
        graduation_year: "2037".into(),
    };

    assert!(matches!(
        form.validate(CURRENT_YEAR),
        Err(ValidationError::GraduationYearOutOfRange { max: 2036, .. })
    ));
}

#[test]
fn given_email_field_when_set_then_not_part_of_profile_form() {
    let mut form = ProfileForm::default();
    assert!(!form.set(FormField::Email, "x@y.z"));
    assert!(form.get(FormField::Email).is_none());
}
