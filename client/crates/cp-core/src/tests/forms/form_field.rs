use crate::FormField;

use std::str::FromStr;

#[test]
fn given_aliases_when_parsed_then_map_to_same_field() {
    assert_eq!(FormField::from_str("degree").unwrap(), FormField::DegreeTitle);
    assert_eq!(FormField::from_str("degree_title").unwrap(), FormField::DegreeTitle);
    assert_eq!(FormField::from_str("YEAR").unwrap(), FormField::GraduationYear);
    assert_eq!(FormField::from_str("confirm").unwrap(), FormField::ConfirmPassword);
}

#[test]
fn given_unknown_name_when_parsed_then_error_names_it() {
    let err = FormField::from_str("nickname").unwrap_err();
    assert!(err.contains("nickname"));
}

#[test]
fn given_password_fields_when_checked_then_are_secret() {
    assert!(FormField::Password.is_secret());
    assert!(FormField::ConfirmPassword.is_secret());
    assert!(!FormField::Email.is_secret());
}
