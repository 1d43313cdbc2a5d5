use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;
use tokio::sync::watch;

use crate::workflows::registration::domain::{EducationEntry, RegistrationForm};
use crate::workflows::registration::engine::{FormStatus, FormValidationEngine};
use crate::workflows::registration::path::FieldPath;
use crate::workflows::registration::submission::{SubmissionFailure, SubmitHandler};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn path(raw: &str) -> FieldPath {
    raw.parse().expect("known field path")
}

pub(super) fn mit_entry() -> EducationEntry {
    EducationEntry::new("MIT", "CS", "2018-01-01", "2022-01-01")
}

/// Every required field filled with a valid value.
pub(super) fn complete_form() -> RegistrationForm {
    RegistrationForm {
        full_name: "Siti Rahmawati".to_string(),
        gender: "Female".to_string(),
        nationality: "Indonesia".to_string(),
        date_of_birth: "1994-08-17".to_string(),
        birthplace: "Bandung".to_string(),
        id_number: "3273015708940001".to_string(),
        home_address: "Jl. Merdeka No. 10, Bandung".to_string(),
        phone_number: "6281234567890".to_string(),
        department: "Engineering".to_string(),
        position: "Staff".to_string(),
        job_title: "Backend Engineer".to_string(),
        start_date_preference: "1 month notice".to_string(),
        education: vec![mit_entry()],
        ..RegistrationForm::default()
    }
}

pub(super) fn engine() -> FormValidationEngine {
    FormValidationEngine::with_today(today())
}

/// Drive a blank engine to a submittable state through `set_field_value`.
pub(super) fn fill_required(engine: &mut FormValidationEngine) {
    let values = [
        ("fullName", "Siti Rahmawati"),
        ("gender", "Female"),
        ("nationality", "Indonesia"),
        ("dateOfBirth", "1994-08-17"),
        ("birthplace", "Bandung"),
        ("idNumber", "3273015708940001"),
        ("homeAddress", "Jl. Merdeka No. 10, Bandung"),
        ("phoneNumber", "6281234567890"),
        ("department", "Engineering"),
        ("position", "Staff"),
        ("jobTitle", "Backend Engineer"),
        ("startDatePreference", "1 month notice"),
        ("education[0].school", "MIT"),
        ("education[0].major", "CS"),
    ];

    for (raw, value) in values {
        engine
            .set_field_value(&path(raw), value)
            .expect("field accepts text");
    }

    engine
        .set_field_value(&path("education[0].period"), ["2018-01-01", "2022-01-01"])
        .expect("period accepts a date pair");
}

/// Handler that records every snapshot and, when given a receiver, the form status seen
/// while it runs.
#[derive(Default)]
pub(super) struct RecordingHandler {
    snapshots: Mutex<Vec<RegistrationForm>>,
    observed: Mutex<Vec<FormStatus>>,
    status: Option<watch::Receiver<FormStatus>>,
}

impl RecordingHandler {
    pub(super) fn observing(status: watch::Receiver<FormStatus>) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub(super) fn snapshots(&self) -> Vec<RegistrationForm> {
        self.snapshots.lock().expect("snapshot mutex poisoned").clone()
    }

    pub(super) fn observed(&self) -> Vec<FormStatus> {
        self.observed.lock().expect("status mutex poisoned").clone()
    }
}

impl SubmitHandler for RecordingHandler {
    async fn submit(&self, snapshot: RegistrationForm) -> Result<(), SubmissionFailure> {
        if let Some(status) = &self.status {
            let current = *status.borrow();
            self.observed
                .lock()
                .expect("status mutex poisoned")
                .push(current);
        }
        self.snapshots
            .lock()
            .expect("snapshot mutex poisoned")
            .push(snapshot);
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct FailingHandler {
    calls: AtomicUsize,
}

impl FailingHandler {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SubmitHandler for FailingHandler {
    async fn submit(&self, _snapshot: RegistrationForm) -> Result<(), SubmissionFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SubmissionFailure::new("HR system unavailable"))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
