use chrono::NaiveDate;
use employee_registration::workflows::registration::{
    parse_form_date, RegistrationForm, SubmissionFailure, SubmitHandler,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Submit handler that records the accepted snapshot in the log instead of forwarding it.
#[derive(Debug, Default)]
pub(crate) struct LoggingSubmitHandler {
    accepted: AtomicUsize,
    fail_with: Option<String>,
}

impl LoggingSubmitHandler {
    /// Handler that refuses every snapshot with `reason`.
    pub(crate) fn failing(reason: impl Into<String>) -> Self {
        Self {
            accepted: AtomicUsize::new(0),
            fail_with: Some(reason.into()),
        }
    }

    pub(crate) fn accepted(&self) -> usize {
        self.accepted.load(Ordering::Relaxed)
    }
}

impl SubmitHandler for LoggingSubmitHandler {
    async fn submit(&self, snapshot: RegistrationForm) -> Result<(), SubmissionFailure> {
        if let Some(reason) = &self.fail_with {
            return Err(SubmissionFailure::new(reason.clone()));
        }

        self.accepted.fetch_add(1, Ordering::Relaxed);
        info!(
            full_name = %snapshot.full_name,
            department = %snapshot.department,
            job_title = %snapshot.job_title,
            education_entries = snapshot.education.len(),
            "registration snapshot accepted"
        );
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_form_date(raw.trim())
        .ok_or_else(|| format!("failed to parse '{raw}' as YYYY-MM-DD"))
}
