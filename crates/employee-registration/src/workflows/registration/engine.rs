use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::domain::{EducationEntry, FieldValue, RegistrationForm};
use super::path::{EducationField, FieldPath};
use super::progress::FormProgress;
use super::schema::{FormSchema, FormSection};
use super::submission::{SubmitError, SubmitHandler, SubmitOutcome};
use super::validation::{FieldError, FormValidator, ValidationReport};

/// Misuse of the engine API: addressing a path that does not exist or writing a value
/// of the wrong shape. Validation failures are never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("unknown field path '{0}'")]
    UnknownField(String),
    #[error("education entry {index} does not exist ({len} entries)")]
    EducationIndexOutOfRange { index: usize, len: usize },
    #[error("field '{path}' expects a {expected} value")]
    ValueShape {
        path: FieldPath,
        expected: &'static str,
    },
    #[error("field '{0}' is changed through its entries")]
    AggregatePath(FieldPath),
}

/// Whole-form flags published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormStatus {
    pub can_submit: bool,
    pub is_submitting: bool,
}

/// Derived state of a single field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub path: FieldPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    pub touched: bool,
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

/// Holds the registration values, revalidates on every change, and gates submission.
pub struct FormValidationEngine {
    validator: FormValidator,
    values: RegistrationForm,
    touched: BTreeSet<FieldPath>,
    report: ValidationReport,
    is_submitting: bool,
    submission_attempts: u32,
    status: watch::Sender<FormStatus>,
}

impl FormValidationEngine {
    /// Blank form validated against the local calendar date.
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    pub fn with_today(today: NaiveDate) -> Self {
        Self::from_form(RegistrationForm::default(), today)
    }

    pub fn from_form(form: RegistrationForm, today: NaiveDate) -> Self {
        Self::with_validator(FormValidator::new(FormSchema::standard(), today), form)
    }

    pub fn with_validator(validator: FormValidator, form: RegistrationForm) -> Self {
        let report = validator.validate(&form);
        let (status, _) = watch::channel(FormStatus {
            can_submit: report.is_valid(),
            is_submitting: false,
        });

        Self {
            validator,
            values: form,
            touched: BTreeSet::new(),
            report,
            is_submitting: false,
            submission_attempts: 0,
            status,
        }
    }

    pub fn values(&self) -> &RegistrationForm {
        &self.values
    }

    /// Immutable copy of the current values.
    pub fn snapshot(&self) -> RegistrationForm {
        self.values.clone()
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn schema(&self) -> &FormSchema {
        self.validator.schema()
    }

    pub fn today(&self) -> NaiveDate {
        self.validator.today()
    }

    pub fn can_submit(&self) -> bool {
        self.report.is_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn submission_attempts(&self) -> u32 {
        self.submission_attempts
    }

    pub fn status(&self) -> FormStatus {
        FormStatus {
            can_submit: self.can_submit(),
            is_submitting: self.is_submitting,
        }
    }

    /// Receiver that observes every `can_submit` / `is_submitting` transition.
    pub fn subscribe(&self) -> watch::Receiver<FormStatus> {
        self.status.subscribe()
    }

    pub fn progress(&self) -> FormProgress {
        FormProgress::measure(self.validator.schema(), &self.report)
    }

    /// Store `value` at `path`, mark the path touched, and revalidate the form.
    pub fn set_field_value(
        &mut self,
        path: &FieldPath,
        value: impl Into<FieldValue>,
    ) -> Result<(), EngineError> {
        let path = *path;
        match (path, value.into()) {
            (FieldPath::Field(name), FieldValue::Text(text)) => {
                let slot = self
                    .values
                    .text_mut(name)
                    .ok_or(EngineError::ValueShape {
                        path,
                        expected: "tag list",
                    })?;
                *slot = text;
            }
            (FieldPath::Field(name), FieldValue::Tags(tags)) => {
                let slot = self
                    .values
                    .tags_mut(name)
                    .ok_or(EngineError::ValueShape {
                        path,
                        expected: "text",
                    })?;
                *slot = tags;
            }
            (FieldPath::Field(name), FieldValue::Range(pair)) => {
                // A two-tag list deserializes as a range.
                let slot = self
                    .values
                    .tags_mut(name)
                    .ok_or(EngineError::ValueShape {
                        path,
                        expected: "text",
                    })?;
                *slot = pair.to_vec();
            }
            (FieldPath::Education, _) => return Err(EngineError::AggregatePath(path)),
            (FieldPath::EducationEntry { index, field }, value) => {
                let len = self.values.education.len();
                let entry = self
                    .values
                    .education
                    .get_mut(index)
                    .ok_or(EngineError::EducationIndexOutOfRange { index, len })?;

                match (field, value) {
                    (EducationField::School, FieldValue::Text(text)) => entry.school = text,
                    (EducationField::Major, FieldValue::Text(text)) => entry.major = text,
                    (EducationField::Period, FieldValue::Range(period)) => entry.period = period,
                    (EducationField::Period, _) => {
                        return Err(EngineError::ValueShape {
                            path,
                            expected: "date range",
                        })
                    }
                    (_, _) => {
                        return Err(EngineError::ValueShape {
                            path,
                            expected: "text",
                        })
                    }
                }
            }
        }

        self.touched.insert(path);
        self.revalidate();
        debug!(field = %path, valid = self.report.is_path_valid(&path), "registration field updated");
        Ok(())
    }

    /// Record that the control for `path` lost focus.
    pub fn mark_touched(&mut self, path: &FieldPath) -> Result<(), EngineError> {
        self.ensure_exists(path)?;
        self.touched.insert(*path);
        Ok(())
    }

    pub fn mark_all_touched(&mut self) {
        let paths = self.paths();
        self.touched.extend(paths);
    }

    pub fn is_touched(&self, path: &FieldPath) -> bool {
        match path {
            FieldPath::Education => self.touched.iter().any(FieldPath::is_education),
            other => self.touched.contains(other),
        }
    }

    pub fn field_state(&self, path: &FieldPath) -> Result<FieldState, EngineError> {
        self.ensure_exists(path)?;

        let value = match path {
            FieldPath::Field(name) => self
                .values
                .text(*name)
                .map(FieldValue::from)
                .or_else(|| self.values.tags(*name).cloned().map(FieldValue::Tags)),
            FieldPath::Education => None,
            FieldPath::EducationEntry { index, field } => {
                let entry = &self.values.education[*index];
                match field {
                    EducationField::School => Some(FieldValue::from(entry.school.as_str())),
                    EducationField::Major => Some(FieldValue::from(entry.major.as_str())),
                    EducationField::Period => Some(FieldValue::Range(entry.period.clone())),
                }
            }
        };

        Ok(FieldState {
            path: *path,
            value,
            touched: self.is_touched(path),
            valid: self.report.is_path_valid(path),
            errors: self.report.errors_for(path).to_vec(),
        })
    }

    /// State of every addressable path in display order.
    pub fn field_states(&self) -> Vec<FieldState> {
        self.paths()
            .iter()
            .filter_map(|path| self.field_state(path).ok())
            .collect()
    }

    pub fn education_len(&self) -> usize {
        self.values.education.len()
    }

    /// Append a blank education entry and return its index.
    pub fn add_education_entry(&mut self) -> usize {
        self.values.education.push(EducationEntry::blank());
        self.revalidate();
        let index = self.values.education.len() - 1;
        debug!(index, "education entry added");
        index
    }

    /// Remove the entry at `index`. Returns `Ok(false)` without touching the list when it
    /// holds a single entry, since at least one must remain.
    pub fn remove_education_entry(&mut self, index: usize) -> Result<bool, EngineError> {
        let len = self.values.education.len();
        if len <= 1 {
            return Ok(false);
        }
        if index >= len {
            return Err(EngineError::EducationIndexOutOfRange { index, len });
        }

        self.values.education.remove(index);
        self.touched = std::mem::take(&mut self.touched)
            .into_iter()
            .filter_map(|path| match path {
                FieldPath::EducationEntry { index: at, .. } if at == index => None,
                FieldPath::EducationEntry { index: at, field } if at > index => {
                    Some(FieldPath::entry(at - 1, field))
                }
                other => Some(other),
            })
            .collect();
        self.revalidate();
        debug!(index, remaining = len - 1, "education entry removed");
        Ok(true)
    }

    /// Restore default values and forget touched flags and submit attempts.
    pub fn reset(&mut self) {
        self.values = RegistrationForm::default();
        self.touched.clear();
        self.submission_attempts = 0;
        self.revalidate();
    }

    /// Validate everything and, when valid, hand a snapshot to `handler`.
    ///
    /// A rejected submit marks every field touched so inline errors become visible and
    /// reports the first failing path. A handler failure is returned once; either way
    /// `is_submitting` is cleared before this returns.
    pub async fn submit<H>(&mut self, handler: &H) -> Result<SubmitOutcome, SubmitError>
    where
        H: SubmitHandler,
    {
        self.submission_attempts += 1;
        self.revalidate();

        if let Some(first_invalid) = self.report.first_invalid().copied() {
            self.mark_all_touched();
            info!(
                first_invalid = %first_invalid,
                invalid_fields = self.report.issues().len(),
                "registration submit rejected"
            );
            return Ok(SubmitOutcome::Rejected {
                first_invalid,
                report: self.report.clone(),
            });
        }

        self.set_submitting(true);
        let result = handler.submit(self.snapshot()).await;
        self.set_submitting(false);

        match result {
            Ok(()) => {
                info!(attempt = self.submission_attempts, "registration submitted");
                Ok(SubmitOutcome::Submitted)
            }
            Err(failure) => {
                warn!(reason = %failure.reason, "registration submit handler failed");
                Err(SubmitError::Handler(failure))
            }
        }
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.is_submitting = submitting;
        self.publish();
    }

    fn revalidate(&mut self) {
        self.report = self.validator.validate(&self.values);
        self.publish();
    }

    fn publish(&self) {
        let next = self.status();
        self.status.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn ensure_exists(&self, path: &FieldPath) -> Result<(), EngineError> {
        match path {
            FieldPath::Field(_) | FieldPath::Education => Ok(()),
            FieldPath::EducationEntry { index, .. } => {
                let len = self.values.education.len();
                if *index < len {
                    Ok(())
                } else {
                    Err(EngineError::EducationIndexOutOfRange { index: *index, len })
                }
            }
        }
    }

    fn paths(&self) -> Vec<FieldPath> {
        let schema = self.validator.schema();
        let mut paths = Vec::new();

        for section in FormSection::ordered() {
            if section == FormSection::Education {
                paths.push(FieldPath::Education);
                for index in 0..self.values.education.len() {
                    paths.extend(
                        schema
                            .education()
                            .iter()
                            .map(|descriptor| FieldPath::entry(index, descriptor.field)),
                    );
                }
                continue;
            }

            paths.extend(
                schema
                    .fields_in(section)
                    .map(|descriptor| FieldPath::Field(descriptor.name)),
            );
        }

        paths
    }
}

impl Default for FormValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

