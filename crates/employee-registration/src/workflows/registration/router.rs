use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AppError;

use super::domain::RegistrationForm;
use super::engine::{FieldState, FormValidationEngine};
use super::path::FieldPath;
use super::progress::{FormProgress, RegistrationStep};
use super::schema::{EducationDescriptor, FieldDescriptor, FormSchema, FormSection};

/// Shared settings for the registration endpoints.
#[derive(Debug, Clone, Default)]
pub struct RegistrationRouterState {
    /// Date used for the date-of-birth check when a request does not supply one.
    pub fixed_today: Option<NaiveDate>,
}

impl RegistrationRouterState {
    fn today(&self, requested: Option<NaiveDate>) -> NaiveDate {
        requested
            .or(self.fixed_today)
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Router builder exposing the schema and a stateless validation endpoint. Nothing is
/// stored or forwarded.
pub fn registration_router(state: RegistrationRouterState) -> Router {
    Router::new()
        .route("/api/v1/registration/schema", get(schema_handler))
        .route("/api/v1/registration/defaults", get(defaults_handler))
        .route("/api/v1/registration/validate", post(validate_handler))
        .with_state(Arc::new(state))
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub form: RegistrationForm,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub can_submit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_invalid: Option<FieldPath>,
    pub errors: BTreeMap<String, Vec<String>>,
    pub fields: Vec<FieldState>,
    pub progress: FormProgress,
}

#[derive(Debug, Serialize)]
pub struct SchemaSection {
    pub section: FormSection,
    pub label: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub steps: Vec<&'static str>,
    pub current_step: &'static str,
    pub sections: Vec<SchemaSection>,
    pub education: Vec<EducationDescriptor>,
}

impl SchemaResponse {
    pub fn from_schema(schema: &FormSchema) -> Self {
        let sections = FormSection::ordered()
            .into_iter()
            .map(|section| SchemaSection {
                section,
                label: section.label(),
                fields: schema.fields_in(section).cloned().collect(),
            })
            .collect();

        Self {
            steps: RegistrationStep::ordered()
                .into_iter()
                .map(RegistrationStep::label)
                .collect(),
            current_step: RegistrationStep::current().label(),
            sections,
            education: schema.education().to_vec(),
        }
    }
}

pub(crate) async fn schema_handler() -> Json<SchemaResponse> {
    Json(SchemaResponse::from_schema(&FormSchema::standard()))
}

pub(crate) async fn defaults_handler() -> Json<RegistrationForm> {
    Json(RegistrationForm::default())
}

pub(crate) async fn validate_handler(
    State(state): State<Arc<RegistrationRouterState>>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "registration payload rejected");
        AppError::from(rejection)
    })?;
    let today = state.today(request.today);
    let mut engine = FormValidationEngine::from_form(request.form, today);
    engine.mark_all_touched();

    let report = engine.report();
    debug!(
        %today,
        invalid_fields = report.issues().len(),
        "registration snapshot validated"
    );

    let body = ValidateResponse {
        can_submit: engine.can_submit(),
        first_invalid: report.first_invalid().copied(),
        errors: report.messages(),
        fields: engine.field_states(),
        progress: engine.progress(),
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}
