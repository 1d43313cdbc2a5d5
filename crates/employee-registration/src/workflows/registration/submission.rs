use std::future::Future;

use serde::Serialize;

use super::domain::RegistrationForm;
use super::path::FieldPath;
use super::validation::ValidationReport;

/// Receiver of a validated registration (HR system adapter, queue, test double).
///
/// The engine awaits the returned future exactly once per accepted submit and does not
/// retry.
pub trait SubmitHandler: Send + Sync {
    fn submit(
        &self,
        snapshot: RegistrationForm,
    ) -> impl Future<Output = Result<(), SubmissionFailure>> + Send;
}

/// Failure reported by a submit handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("submit handler failed: {reason}")]
pub struct SubmissionFailure {
    pub reason: String,
}

impl SubmissionFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Handler(#[from] SubmissionFailure),
}

/// Result of a submit attempt that did not fail inside the handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Submitted,
    Rejected {
        first_invalid: FieldPath,
        report: ValidationReport,
    },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}
