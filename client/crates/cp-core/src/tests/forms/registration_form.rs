use crate::{FormField, MIN_GRADUATION_YEAR, RegistrationForm, ValidationError};

const CURRENT_YEAR: i32 = 2026;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        name: "  Ana Torres ".into(),
        email: "Ana@Example.com".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
        degree_title: " BSc Computer Science ".into(),
        graduation_year: "2020".into(),
    }
}

#[test]
fn given_valid_form_when_validated_then_returns_normalised_registration() {
    let registration = valid_form().validate(CURRENT_YEAR).unwrap();

    assert_eq!(registration.name, "Ana Torres");
    assert_eq!(registration.email, "ana@example.com");
    assert_eq!(registration.degree_title, "BSc Computer Science");
    assert_eq!(registration.graduation_year, 2020);
}

#[test]
fn given_empty_name_when_validated_then_name_required() {
    let mut form = valid_form();
    form.set(FormField::Name, "   ");
    assert_eq!(form.validate(CURRENT_YEAR).unwrap_err(), ValidationError::NameRequired);
}

#[test]
fn given_email_without_at_when_validated_then_invalid_email() {
    let mut form = valid_form();
    form.set(FormField::Email, "ana.example.com");
    assert_eq!(form.validate(CURRENT_YEAR).unwrap_err(), ValidationError::InvalidEmail);
}

#[test]
fn given_five_char_password_when_validated_then_too_short() {
    let mut form = valid_form();
    form.set(FormField::Password, "12345");
    form.set(FormField::ConfirmPassword, "12345");
    assert_eq!(
        form.validate(CURRENT_YEAR).unwrap_err(),
        ValidationError::PasswordTooShort { min: 6 }
    );
}

#[test]
fn given_six_char_password_when_validated_then_accepted() {
    let mut form = valid_form();
    form.set(FormField::Password, "123456");
    form.set(FormField::ConfirmPassword, "123456");
    assert!(form.validate(CURRENT_YEAR).is_ok());
}

#[test]
fn given_mismatched_confirmation_when_validated_then_mismatch() {
    let mut form = valid_form();
    form.set(FormField::ConfirmPassword, "secret2");
    assert_eq!(form.validate(CURRENT_YEAR).unwrap_err(), ValidationError::PasswordMismatch);
}

#[test]
fn given_empty_degree_when_validated_then_degree_required() {
    let mut form = valid_form();
    form.set(FormField::DegreeTitle, "");
    assert_eq!(
        form.validate(CURRENT_YEAR).unwrap_err(),
        ValidationError::DegreeTitleRequired
    );
}

#[test]
fn given_year_bounds_when_validated_then_inclusive_range_applies() {
    let out_of_range = ValidationError::GraduationYearOutOfRange {
        min: MIN_GRADUATION_YEAR,
        max: CURRENT_YEAR,
    };

    for (year, accepted) in [
        ("1949", false),
        ("1950", true),
        ("2026", true),
        ("2027", false),
        ("", false),
        ("20x0", false),
    ] {
        let mut form = valid_form();
        form.set(FormField::GraduationYear, year);
        let result = form.validate(CURRENT_YEAR);
        if accepted {
            assert!(result.is_ok(), "year {year:?} should be accepted");
        } else {
            assert_eq!(result.unwrap_err(), out_of_range, "year {year:?}");
        }
    }
}

#[test]
fn given_several_bad_fields_when_validated_then_first_rule_wins() {
    let form = RegistrationForm::default();
    assert_eq!(form.validate(CURRENT_YEAR).unwrap_err(), ValidationError::NameRequired);
}
