//! Employee registration form: field schema, validation rules, and the engine that
//! tracks values, touched flags, and submission state.
//!
//! Validation failures are data. Every failing field path carries an ordered list of
//! [`FieldError`]s, and the only consequence of a failure is that
//! [`FormValidationEngine::can_submit`] returns `false` and submit is rejected without
//! calling the [`SubmitHandler`].

pub mod domain;
pub mod engine;
pub mod path;
pub mod progress;
pub mod router;
pub mod schema;
pub mod submission;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    parse_form_date, Country, EducationEntry, FieldValue, Gender, IdType, PoliticalStatus,
    RegistrationForm, StartDatePreference,
};
pub use engine::{EngineError, FieldState, FormStatus, FormValidationEngine};
pub use path::{EducationField, FieldName, FieldPath};
pub use progress::{FormProgress, RegistrationStep};
pub use router::{registration_router, RegistrationRouterState};
pub use schema::{FieldDescriptor, FieldFormat, FormSchema, FormSection};
pub use submission::{SubmissionFailure, SubmitError, SubmitHandler, SubmitOutcome};
pub use validation::{
    validate, ErrorKind, FieldError, FieldIssues, FormValidator, ValidationReport,
};
