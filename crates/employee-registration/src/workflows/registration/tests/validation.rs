use super::common::*;
use crate::workflows::registration::domain::{EducationEntry, RegistrationForm};
use crate::workflows::registration::path::{FieldName, FieldPath};
use crate::workflows::registration::validation::{validate, ErrorKind, FieldError};

fn cleared(name: FieldName) -> RegistrationForm {
    let mut form = complete_form();
    *form.text_mut(name).expect("text field") = String::new();
    form
}

#[test]
fn complete_form_has_no_issues() {
    let report = validate(&complete_form(), today());

    assert!(report.is_valid(), "unexpected issues: {:?}", report.messages());
    assert!(report.first_invalid().is_none());
}

#[test]
fn empty_required_fields_report_exactly_the_required_message() {
    let expected = [
        (FieldName::FullName, "Please enter your full name"),
        (FieldName::Gender, "Please select your gender"),
        (FieldName::Nationality, "Please select your nationality"),
        (FieldName::DateOfBirth, "Please enter your date of birth"),
        (FieldName::Birthplace, "Please enter your birthplace"),
        (FieldName::IdNumber, "Please enter your ID number"),
        (FieldName::HomeAddress, "Please enter your home address"),
        (FieldName::PhoneNumber, "Please enter your phone number"),
        (FieldName::Department, "Please enter your department"),
        (FieldName::Position, "Please enter your position"),
        (FieldName::JobTitle, "Please enter your job title"),
        (
            FieldName::StartDatePreference,
            "Please select your start date preference",
        ),
    ];

    for (name, message) in expected {
        let report = validate(&cleared(name), today());
        let path = FieldPath::Field(name);

        assert_eq!(
            report.errors_for(&path),
            &[FieldError::required(message)],
            "unexpected errors for {name}"
        );
        assert!(!report.is_path_valid(&path));
        assert_eq!(report.issues().len(), 1, "only {name} should fail");
    }
}

#[test]
fn numeric_fields_distinguish_format_from_missing() {
    let cases = [
        (FieldName::IdNumber, "ID number must be a numeric value", "Please enter your ID number"),
        (
            FieldName::PhoneNumber,
            "Phone number must be a numeric value",
            "Please enter your phone number",
        ),
    ];

    for (name, format_message, required_message) in cases {
        let path = FieldPath::Field(name);
        let mut form = complete_form();

        *form.text_mut(name).expect("text field") = "abc12".to_string();
        let errors = validate(&form, today()).errors_for(&path).to_vec();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::InvalidFormat);
        assert_eq!(errors[0].message, format_message);

        *form.text_mut(name).expect("text field") = String::new();
        let errors = validate(&form, today()).errors_for(&path).to_vec();
        assert_eq!(errors, vec![FieldError::required(required_message)]);

        *form.text_mut(name).expect("text field") = "12345".to_string();
        assert!(validate(&form, today()).errors_for(&path).is_empty());
    }
}

#[test]
fn numeric_fields_reject_signs_and_spaces() {
    let mut form = complete_form();
    form.phone_number = "+62 812".to_string();

    let report = validate(&form, today());

    assert!(!report.is_path_valid(&FieldPath::Field(FieldName::PhoneNumber)));
}

#[test]
fn date_of_birth_must_not_be_after_today() {
    let mut form = complete_form();
    form.date_of_birth = "2030-01-01".to_string();
    let path = FieldPath::Field(FieldName::DateOfBirth);

    let report = validate(&form, today());
    assert_eq!(
        report.errors_for(&path),
        &[FieldError::invalid("Date of birth cannot be in the future")]
    );

    form.date_of_birth = today().format("%Y-%m-%d").to_string();
    assert!(validate(&form, today()).is_valid());
}

#[test]
fn date_of_birth_must_be_iso_formatted() {
    let mut form = complete_form();
    form.date_of_birth = "17/08/1994".to_string();

    let report = validate(&form, today());

    assert_eq!(
        report.errors_for(&FieldPath::Field(FieldName::DateOfBirth)),
        &[FieldError::invalid("Date of birth must be a valid date")]
    );
}

#[test]
fn select_fields_reject_unlisted_options() {
    let mut form = complete_form();
    form.gender = "Other".to_string();
    form.political_status = "Undecided".to_string();

    let report = validate(&form, today());

    assert_eq!(
        report.errors_for(&FieldPath::Field(FieldName::Gender)),
        &[FieldError::invalid("Please select a valid gender")]
    );
    assert_eq!(
        report.errors_for(&FieldPath::Field(FieldName::PoliticalStatus)),
        &[FieldError::invalid("Please select a valid political status")]
    );
}

#[test]
fn optional_fields_accept_empty_values() {
    let mut form = complete_form();
    form.height.clear();
    form.weight.clear();
    form.id_type.clear();
    form.political_status.clear();
    form.account_location.clear();

    assert!(validate(&form, today()).is_valid());
}

#[test]
fn measurements_must_be_positive_whole_numbers() {
    let mut form = complete_form();
    form.height = "0".to_string();
    form.weight = "sixty".to_string();

    let report = validate(&form, today());

    assert_eq!(
        report.errors_for(&FieldPath::Field(FieldName::Height)),
        &[FieldError::invalid("Height must be a positive whole number")]
    );
    assert_eq!(
        report.errors_for(&FieldPath::Field(FieldName::Weight)),
        &[FieldError::invalid("Weight must be a positive whole number")]
    );

    form.height = "172".to_string();
    form.weight = "64".to_string();
    assert!(validate(&form, today()).is_valid());
}

#[test]
fn blank_education_entry_reports_each_sub_field() {
    let mut form = complete_form();
    form.education = vec![EducationEntry::blank()];

    let report = validate(&form, today());

    assert_eq!(
        report.errors_for(&path("education[0].school")),
        &[FieldError::required("Please enter your school/university")]
    );
    assert_eq!(
        report.errors_for(&path("education[0].major")),
        &[FieldError::required("Please enter your major/field of study")]
    );
    assert_eq!(
        report.errors_for(&path("education[0].period")),
        &[FieldError::required("Please enter your education period")]
    );
    assert!(!report.is_path_valid(&FieldPath::Education));
    assert_eq!(report.first_invalid(), Some(&path("education[0].school")));
}

#[test]
fn one_invalid_entry_invalidates_the_education_aggregate() {
    let mut form = complete_form();
    form.education.push(EducationEntry::new("ITB", "", "2014-08-01", "2018-07-01"));

    let report = validate(&form, today());

    assert!(report.is_path_valid(&path("education[0].major")));
    assert!(!report.is_path_valid(&path("education[1].major")));
    assert!(!report.is_path_valid(&FieldPath::Education));
}

#[test]
fn half_filled_period_is_still_missing() {
    let mut form = complete_form();
    form.education[0].period = ["2018-01-01".to_string(), String::new()];

    let report = validate(&form, today());

    assert_eq!(
        report.errors_for(&path("education[0].period")),
        &[FieldError::required("Please enter your education period")]
    );
}

#[test]
fn reversed_period_is_a_format_error() {
    let mut form = complete_form();
    form.education[0].period = ["2022-01-01".to_string(), "2018-01-01".to_string()];

    let report = validate(&form, today());

    assert_eq!(
        report.errors_for(&path("education[0].period")),
        &[FieldError::invalid("Education period must end after it starts")]
    );
}

#[test]
fn empty_education_list_fails_the_aggregate_path() {
    let mut form = complete_form();
    form.education.clear();

    let report = validate(&form, today());

    assert_eq!(
        report.errors_for(&FieldPath::Education),
        &[FieldError::required("Please add at least one education entry")]
    );
}

#[test]
fn first_invalid_follows_display_order() {
    let mut form = complete_form();
    form.phone_number.clear();
    form.full_name.clear();
    assert_eq!(
        validate(&form, today()).first_invalid(),
        Some(&FieldPath::Field(FieldName::FullName))
    );

    let mut form = complete_form();
    form.education[0].school.clear();
    form.phone_number.clear();
    assert_eq!(
        validate(&form, today()).first_invalid(),
        Some(&FieldPath::Field(FieldName::PhoneNumber))
    );

    let mut form = complete_form();
    form.account_location = "Thailand".to_string();
    form.education[0].school.clear();
    assert_eq!(
        validate(&form, today()).first_invalid(),
        Some(&path("education[0].school"))
    );
}

#[test]
fn messages_are_keyed_by_rendered_path() {
    let mut form = complete_form();
    form.id_number = "12-34".to_string();
    form.education[0].major.clear();

    let messages = validate(&form, today()).messages();

    assert_eq!(
        messages.get("idNumber"),
        Some(&vec!["ID number must be a numeric value".to_string()])
    );
    assert_eq!(
        messages.get("education[0].major"),
        Some(&vec!["Please enter your major/field of study".to_string()])
    );
    assert_eq!(messages.len(), 2);
}
