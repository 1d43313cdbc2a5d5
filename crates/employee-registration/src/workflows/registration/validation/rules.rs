use chrono::NaiveDate;

use super::super::domain::{parse_form_date, EducationEntry};
use super::super::path::EducationField;
use super::super::schema::{EducationDescriptor, FieldDescriptor, FieldFormat};
use super::FieldError;

/// Errors for one top-level field. A missing value only ever reports the required
/// message; format rules run on non-empty values.
pub(crate) fn check_field(
    descriptor: &FieldDescriptor,
    value: &str,
    today: NaiveDate,
) -> Vec<FieldError> {
    if value.is_empty() {
        return if descriptor.required {
            vec![FieldError::required(descriptor.required_message())]
        } else {
            Vec::new()
        };
    }

    match descriptor.format {
        FieldFormat::Text | FieldFormat::Tags => Vec::new(),
        FieldFormat::Numeric => check_numeric(descriptor, value),
        FieldFormat::Select => check_option(descriptor, value),
        FieldFormat::PastDate => check_past_date(descriptor, value, today),
        FieldFormat::Measure => check_measure(descriptor, value),
    }
}

fn check_numeric(descriptor: &FieldDescriptor, value: &str) -> Vec<FieldError> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        return Vec::new();
    }

    vec![FieldError::invalid(format!(
        "{} must be a numeric value",
        capitalize(descriptor.noun)
    ))]
}

fn check_option(descriptor: &FieldDescriptor, value: &str) -> Vec<FieldError> {
    if descriptor.options.iter().any(|option| *option == value) {
        return Vec::new();
    }

    vec![FieldError::invalid(format!(
        "Please select a valid {}",
        descriptor.noun
    ))]
}

fn check_past_date(descriptor: &FieldDescriptor, value: &str, today: NaiveDate) -> Vec<FieldError> {
    match parse_form_date(value) {
        None => vec![FieldError::invalid(format!(
            "{} must be a valid date",
            capitalize(descriptor.noun)
        ))],
        Some(date) if date > today => vec![FieldError::invalid(format!(
            "{} cannot be in the future",
            capitalize(descriptor.noun)
        ))],
        Some(_) => Vec::new(),
    }
}

fn check_measure(descriptor: &FieldDescriptor, value: &str) -> Vec<FieldError> {
    match value.parse::<u32>() {
        Ok(amount) if amount >= 1 => Vec::new(),
        _ => vec![FieldError::invalid(format!(
            "{} must be a positive whole number",
            capitalize(descriptor.noun)
        ))],
    }
}

/// Errors for one sub-field of an education entry.
pub(crate) fn check_education_field(
    descriptor: &EducationDescriptor,
    entry: &EducationEntry,
) -> Vec<FieldError> {
    match descriptor.field {
        EducationField::Period => check_period(descriptor, entry),
        field => match entry.text(field) {
            Some(value) if !value.is_empty() => Vec::new(),
            _ => vec![FieldError::required(descriptor.required_message())],
        },
    }
}

fn check_period(descriptor: &EducationDescriptor, entry: &EducationEntry) -> Vec<FieldError> {
    if entry.period.iter().any(String::is_empty) {
        return vec![FieldError::required(descriptor.required_message())];
    }

    match entry.period_dates() {
        None => vec![FieldError::invalid(format!(
            "{} must use valid dates",
            capitalize(descriptor.noun)
        ))],
        Some((start, end)) if end < start => vec![FieldError::invalid(format!(
            "{} must end after it starts",
            capitalize(descriptor.noun)
        ))],
        Some(_) => Vec::new(),
    }
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_keeps_acronyms() {
        assert_eq!(capitalize("ID number"), "ID number");
        assert_eq!(capitalize("phone number"), "Phone number");
        assert_eq!(capitalize(""), "");
    }
}
