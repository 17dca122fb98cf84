use crate::{ProfileRecord, Registration};

use chrono::{TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use serde_json::json;

fn registration() -> Registration {
    Registration {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        password: "secret1".into(),
        degree_title: "BSc".into(),
        graduation_year: 2020,
    }
}

#[test]
fn given_registration_when_new_record_then_timestamps_match() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let record = ProfileRecord::new(&registration(), now);

    assert_eq!(record.created_at, Some(now));
    assert_eq!(record.created_at, record.updated_at);
    assert_eq!(record.email.as_deref(), Some("ana@example.com"));
}

#[test]
fn given_record_when_encoded_then_uses_camel_case_keys() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let document = ProfileRecord::new(&registration(), now).to_document().unwrap();

    assert_that!(document.contains_key("degreeTitle"), eq(true));
    assert_that!(document.contains_key("graduationYear"), eq(true));
    assert_that!(document.contains_key("createdAt"), eq(true));
    assert_that!(document.contains_key("degree_title"), eq(false));
}

#[test]
fn given_partial_document_when_decoded_then_missing_fields_default() {
    let document = json!({
        "name": "Ana",
        "updatedAt": "2024-05-01T12:00:00Z"
    });
    let record = ProfileRecord::from_document(document.as_object().unwrap().clone()).unwrap();

    assert_eq!(record.name, "Ana");
    assert_eq!(record.degree_title, "");
    assert!(record.graduation_year.is_none());
    assert!(record.created_at.is_none());
    assert_eq!(record.email_or("fallback@example.com"), "fallback@example.com");
}

#[test]
fn given_wrong_type_when_decoded_then_error() {
    let document = json!({ "graduationYear": "not a year" });
    let result = ProfileRecord::from_document(document.as_object().unwrap().clone());

    assert_that!(result, err(anything()));
}
