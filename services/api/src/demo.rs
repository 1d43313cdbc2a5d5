use crate::infra::LoggingSubmitHandler;
use chrono::{Local, NaiveDate};
use clap::Args;
use employee_registration::error::AppError;
use employee_registration::workflows::registration::{
    EducationField, FieldPath, FormSchema, FormSection, FormValidationEngine, RegistrationForm,
    SubmitOutcome, ValidationReport,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON file holding a registration form (camelCase keys)
    pub(crate) file: PathBuf,
    /// Reference date for the date-of-birth check (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for the date-of-birth check (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Make the submit handler refuse the completed form
    #[arg(long)]
    pub(crate) fail_submit: bool,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let form = load_form(&args.file)?;

    println!("Registration form check ({})", args.file.display());
    check_form(form, today)
}

pub(crate) fn run_schema() -> Result<(), AppError> {
    let schema = FormSchema::standard();

    println!("Employee registration form");
    for section in FormSection::ordered() {
        println!("\n{}", section.label());
        if section == FormSection::Education {
            for descriptor in schema.education() {
                println!("  * {} (per entry)", descriptor.label);
            }
            continue;
        }

        for descriptor in schema.fields_in(section) {
            let marker = if descriptor.required { "*" } else { "-" };
            if descriptor.options.is_empty() {
                println!("  {marker} {}", descriptor.label);
            } else {
                println!(
                    "  {marker} {} [{}]",
                    descriptor.label,
                    descriptor.options.join(", ")
                );
            }
        }
    }
    println!(
        "\n{} required items (* = required)",
        schema.required_count()
    );

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let handler = if args.fail_submit {
        LoggingSubmitHandler::failing("HR system unavailable")
    } else {
        LoggingSubmitHandler::default()
    };

    println!("Employee registration demo (reference date {today})");
    let mut engine = FormValidationEngine::with_today(today);

    println!("\nSubmitting the blank form");
    match engine.submit(&handler).await? {
        SubmitOutcome::Rejected {
            first_invalid,
            report,
        } => {
            println!(
                "  Rejected: {} fields need attention, focus moves to {first_invalid}",
                report.issues().len()
            );
        }
        SubmitOutcome::Submitted => println!("  Unexpectedly accepted"),
    }

    println!("\nFilling the form");
    for (path, value) in sample_values() {
        let path: FieldPath = path.parse()?;
        engine.set_field_value(&path, value)?;
    }
    engine.set_field_value(
        &FieldPath::entry(0, EducationField::Period),
        ["2010-09-01", "2014-06-30"],
    )?;
    let progress = engine.progress();
    println!(
        "  {} of {} required items complete ({}%), can submit: {}",
        progress.required_completed,
        progress.required_total,
        progress.percent_complete,
        engine.can_submit()
    );

    println!("\nEditing education history");
    let added = engine.add_education_entry();
    println!(
        "  Added entry {added}; can submit: {} (new entry is blank)",
        engine.can_submit()
    );
    engine.remove_education_entry(added)?;
    println!(
        "  Removed entry {added}; {} entry left, can submit: {}",
        engine.education_len(),
        engine.can_submit()
    );
    let kept = engine.remove_education_entry(0)?;
    println!("  Removing the last entry is refused: {}", !kept);

    println!("\nSubmitting the completed form");
    match engine.submit(&handler).await {
        Ok(SubmitOutcome::Submitted) => println!(
            "  Submitted after {} attempts ({} snapshot accepted)",
            engine.submission_attempts(),
            handler.accepted()
        ),
        Ok(SubmitOutcome::Rejected { first_invalid, .. }) => {
            println!("  Rejected at {first_invalid}")
        }
        Err(err) => println!(
            "  {err}; submitting flag cleared: {}",
            !engine.is_submitting()
        ),
    }

    Ok(())
}

fn load_form(path: &Path) -> Result<RegistrationForm, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn check_form(form: RegistrationForm, today: NaiveDate) -> Result<(), AppError> {
    let mut engine = FormValidationEngine::from_form(form, today);
    engine.mark_all_touched();

    let progress = engine.progress();
    println!(
        "{} of {} required items complete ({}%)",
        progress.required_completed, progress.required_total, progress.percent_complete
    );

    match engine.report().first_invalid().copied() {
        None => {
            println!("Form is ready to submit");
            Ok(())
        }
        Some(first_invalid) => {
            render_issues(engine.report());
            Err(AppError::InvalidForm { first_invalid })
        }
    }
}

fn render_issues(report: &ValidationReport) {
    println!("\nFields needing attention");
    for issue in report.issues() {
        for error in &issue.errors {
            println!("- {}: {}", issue.path, error.message);
        }
    }
}

fn sample_values() -> [(&'static str, &'static str); 14] {
    [
        ("fullName", "Dewi Lestari"),
        ("gender", "Female"),
        ("nationality", "Indonesia"),
        ("dateOfBirth", "1992-03-14"),
        ("birthplace", "Bandung"),
        ("idNumber", "3273015403920001"),
        ("homeAddress", "Jl. Merdeka 21, Bandung"),
        ("phoneNumber", "6281234567890"),
        ("department", "Engineering"),
        ("position", "Senior"),
        ("jobTitle", "Backend Engineer"),
        ("startDatePreference", "1 month notice"),
        ("education[0].school", "Institut Teknologi Bandung"),
        ("education[0].major", "Informatics"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    }

    fn sample_form() -> RegistrationForm {
        let mut engine = FormValidationEngine::with_today(today());
        for (path, value) in sample_values() {
            let path: FieldPath = path.parse().expect("sample path");
            engine.set_field_value(&path, value).expect("sample value");
        }
        engine
            .set_field_value(
                &"education[0].period".parse().expect("period path"),
                ["2010-09-01", "2014-06-30"],
            )
            .expect("sample period");
        engine.snapshot()
    }

    #[test]
    fn sample_values_complete_the_form() {
        check_form(sample_form(), today()).expect("sample form is valid");
    }

    #[test]
    fn check_form_reports_first_invalid_field() {
        let mut form = sample_form();
        form.phone_number = "+62 812".to_string();

        let err = check_form(form, today()).expect_err("phone number rejected");
        match err {
            AppError::InvalidForm { first_invalid } => {
                assert_eq!(first_invalid.to_string(), "phoneNumber")
            }
            other => panic!("expected invalid form, got {other:?}"),
        }
    }

    #[test]
    fn load_form_rejects_malformed_json() {
        let path = std::env::temp_dir().join(format!(
            "registration-malformed-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ \"fullName\": ").expect("write temp file");

        let err = load_form(&path).expect_err("malformed json");
        let _ = fs::remove_file(&path);
        match err {
            AppError::FormFile(_) => {}
            other => panic!("expected form file error, got {other:?}"),
        }
    }

    #[test]
    fn load_form_reports_missing_files() {
        let err = load_form(Path::new("/nonexistent/registration.json")).expect_err("missing");
        match err {
            AppError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn demo_runs_with_failing_handler() {
        run_demo(DemoArgs {
            today: Some(today()),
            fail_submit: true,
        })
        .await
        .expect("handler failure is reported, not raised");
    }
}
