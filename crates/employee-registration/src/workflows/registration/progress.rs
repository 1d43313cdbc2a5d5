use serde::Serialize;

use super::path::FieldPath;
use super::schema::FormSchema;
use super::validation::ValidationReport;

/// Steps shown in the registration progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    GetStarted,
    ApplicationDetails,
    ReviewAndConfirm,
    Done,
}

impl RegistrationStep {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::GetStarted,
            Self::ApplicationDetails,
            Self::ReviewAndConfirm,
            Self::Done,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GetStarted => "Get Started",
            Self::ApplicationDetails => "Application Details",
            Self::ReviewAndConfirm => "Review & Confirm",
            Self::Done => "Done",
        }
    }

    /// The registration form is always rendered on the application details step.
    pub const fn current() -> Self {
        Self::ApplicationDetails
    }

    pub fn position(self) -> usize {
        Self::ordered()
            .iter()
            .position(|step| *step == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormProgress {
    pub current_step: RegistrationStep,
    pub current_step_label: &'static str,
    pub steps_completed: usize,
    pub steps_total: usize,
    pub required_completed: usize,
    pub required_total: usize,
    pub percent_complete: u8,
}

impl FormProgress {
    pub fn measure(schema: &FormSchema, report: &ValidationReport) -> Self {
        let step = RegistrationStep::current();

        let scalar_completed = schema
            .fields()
            .iter()
            .filter(|descriptor| descriptor.required)
            .filter(|descriptor| report.is_path_valid(&FieldPath::Field(descriptor.name)))
            .count();
        let education_completed = usize::from(report.is_path_valid(&FieldPath::Education));

        let required_completed = scalar_completed + education_completed;
        let required_total = schema.required_count();
        let percent_complete = if required_total == 0 {
            100
        } else {
            (required_completed * 100 / required_total) as u8
        };

        Self {
            current_step: step,
            current_step_label: step.label(),
            // The sidebar counts the step in progress ("2 of 4 Complete").
            steps_completed: step.position() + 1,
            steps_total: RegistrationStep::ordered().len(),
            required_completed,
            required_total,
            percent_complete,
        }
    }
}
