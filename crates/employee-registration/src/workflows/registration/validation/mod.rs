mod rules;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::RegistrationForm;
use super::path::FieldPath;
use super::schema::{FormSchema, FormSection};

/// The two ways a field can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RequiredFieldMissing,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::RequiredFieldMissing,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidFormat,
            message: message.into(),
        }
    }
}

/// Errors attached to one field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssues {
    pub path: FieldPath,
    pub errors: Vec<FieldError>,
}

/// Outcome of validating a whole form. Only failing paths are recorded, in display
/// order, so the first entry is the control that should receive focus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: Vec<FieldIssues>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[FieldIssues] {
        &self.issues
    }

    pub fn first_invalid(&self) -> Option<&FieldPath> {
        self.issues.first().map(|issue| &issue.path)
    }

    /// Errors recorded directly against `path`.
    pub fn errors_for(&self, path: &FieldPath) -> &[FieldError] {
        self.issues
            .iter()
            .find(|issue| &issue.path == path)
            .map(|issue| issue.errors.as_slice())
            .unwrap_or(&[])
    }

    /// The aggregate `education` path fails when any entry under it fails.
    pub fn is_path_valid(&self, path: &FieldPath) -> bool {
        match path {
            FieldPath::Education => !self.issues.iter().any(|issue| issue.path.is_education()),
            other => self.errors_for(other).is_empty(),
        }
    }

    /// Flattened `path -> messages` view for display and logging.
    pub fn messages(&self) -> BTreeMap<String, Vec<String>> {
        self.issues
            .iter()
            .map(|issue| {
                (
                    issue.path.to_string(),
                    issue
                        .errors
                        .iter()
                        .map(|error| error.message.clone())
                        .collect(),
                )
            })
            .collect()
    }

    fn record(&mut self, path: FieldPath, errors: Vec<FieldError>) {
        if !errors.is_empty() {
            self.issues.push(FieldIssues { path, errors });
        }
    }
}

/// Whole-form validator composed from the per-field rules of a schema.
#[derive(Debug, Clone)]
pub struct FormValidator {
    schema: FormSchema,
    today: NaiveDate,
}

impl FormValidator {
    pub fn new(schema: FormSchema, today: NaiveDate) -> Self {
        Self { schema, today }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn validate(&self, form: &RegistrationForm) -> ValidationReport {
        let mut report = ValidationReport::default();

        for section in FormSection::ordered() {
            if section == FormSection::Education {
                self.validate_education(form, &mut report);
                continue;
            }

            for descriptor in self.schema.fields_in(section) {
                let Some(value) = form.text(descriptor.name) else {
                    continue;
                };
                let errors = rules::check_field(descriptor, value, self.today);
                report.record(FieldPath::Field(descriptor.name), errors);
            }
        }

        report
    }

    fn validate_education(&self, form: &RegistrationForm, report: &mut ValidationReport) {
        if form.education.is_empty() {
            report.record(
                FieldPath::Education,
                vec![FieldError::required("Please add at least one education entry")],
            );
            return;
        }

        for (index, entry) in form.education.iter().enumerate() {
            for descriptor in self.schema.education() {
                let errors = rules::check_education_field(descriptor, entry);
                report.record(FieldPath::entry(index, descriptor.field), errors);
            }
        }
    }
}

/// Validate a snapshot against the standard schema.
pub fn validate(form: &RegistrationForm, today: NaiveDate) -> ValidationReport {
    FormValidator::new(FormSchema::standard(), today).validate(form)
}
