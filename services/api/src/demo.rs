use crate::infra::{build_service, TriageService};
use case_triage::config::{AppConfig, AssessmentConfig};
use case_triage::error::AppError;
use case_triage::workflows::assessment::{
    render_report, AssessmentExport, AssessmentResult, ChildRecord, ClientIntake, ExportError,
    IntakeSubmission, Residences,
};
use chrono::{Local, Utc};
use clap::{Args, ValueEnum};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain-text case report
    #[default]
    Text,
    /// Assessment result as pretty JSON
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Intake document (JSON) to assess
    #[arg(long, required_unless_present = "sample", conflicts_with = "sample")]
    pub(crate) input: Option<PathBuf>,
    /// Assess the built-in sample intake instead of a file
    #[arg(long)]
    pub(crate) sample: bool,
    /// Output format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Also write the text report to this path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Also write the JSON export envelope (intake, assessment, metadata) to this path
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print only the history summary, not the full sample report
    #[arg(long)]
    pub(crate) summary_only: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        sample: _,
        format,
        output,
        export,
    } = args;

    let submission = match input {
        Some(path) => load_submission(&path)?,
        None => sample_submission(),
    };
    let intake = ClientIntake::try_from(submission)?;

    let service = build_service(assessment_config()?)?;
    let result = service.assess_intake(&intake)?;
    let report = render_report(&result, &intake, Local::now().naive_local());

    match format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", result_json(&result)?),
    }

    if let Some(path) = output {
        std::fs::write(&path, &report)?;
        eprintln!("Report written to {}", path.display());
    }

    if let Some(path) = export {
        let envelope = AssessmentExport::new(intake, result, Utc::now());
        std::fs::write(&path, envelope.to_json_pretty()?)?;
        eprintln!("Export written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = build_service(assessment_config()?)?;

    println!("Family law case triage demo");
    let sample = ClientIntake::try_from(sample_submission())?;
    let result = service.assess_intake(&sample)?;
    if !args.summary_only {
        println!();
        println!(
            "{}",
            render_report(&result, &sample, Local::now().naive_local())
        );
    }

    let follow_up = ClientIntake::try_from(follow_up_submission())?;
    service.assess_intake(&follow_up)?;

    println!();
    render_history(&service)
}

fn assessment_config() -> Result<AssessmentConfig, AppError> {
    Ok(AppConfig::load()?.assessment)
}

fn load_submission(path: &Path) -> Result<IntakeSubmission, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn result_json(result: &AssessmentResult) -> Result<String, AppError> {
    serde_json::to_string_pretty(result)
        .map_err(ExportError::from)
        .map_err(AppError::from)
}

fn render_history(service: &TriageService) -> Result<(), AppError> {
    let records = service.history()?;
    println!("Assessment history ({} records)", records.len());
    println!(
        "  {:<12} | {:<16} | {:<20} | Urgency",
        "Client ID", "Client Name", "Assessment Date"
    );
    for record in records.iter().map(|record| record.summary_view()) {
        println!(
            "  {:<12} | {:<16} | {:<20} | {}",
            record.client_id.0,
            record.client_name,
            record.assessment_date.format("%Y-%m-%d %H:%M UTC"),
            record.urgency_level.label()
        );
    }
    Ok(())
}

/// Built-in intake exercising every flag category, two addresses, and children.
pub(crate) fn sample_submission() -> IntakeSubmission {
    let financial_disclosure = BTreeMap::from([
        ("income".to_string(), json!(45000)),
        ("spouse_income".to_string(), json!(250000)),
        ("joint_assets".to_string(), json!(750000)),
        ("separate_assets".to_string(), json!(50000)),
    ]);
    let opposing_party_info = BTreeMap::from([
        ("name".to_string(), "John Smith".to_string()),
        ("employer".to_string(), "Self-employed consultant".to_string()),
        ("attorney".to_string(), "Unknown".to_string()),
    ]);
    let child = |name: &str, age: u32| ChildRecord {
        name: Some(name.to_string()),
        age: Some(age),
        school: Some("PS 321 Brooklyn".to_string()),
    };

    IntakeSubmission {
        client_id: Some("FL-2023-001".to_string()),
        client_name: Some("Jane Smith".to_string()),
        intake_date: Some("2023-10-26".to_string()),
        marital_status: Some("Married".to_string()),
        has_children: Some(true),
        children_info: Some(vec![child("Child1", 8), child("Child2", 5)]),
        residences: Some(Residences {
            client: "123 Main St, Brooklyn, NY 11201".to_string(),
            spouse: "456 Park Ave, Manhattan, NY 10022".to_string(),
        }),
        emergency_concerns: Some(vec![
            "Husband threatened me with violence".to_string(),
            "I have no access to bank accounts".to_string(),
            "He has a secret crypto account".to_string(),
            "Facing eviction next month".to_string(),
        ]),
        financial_disclosure: Some(financial_disclosure),
        notes: Some(
            "Client reports escalating arguments with spouse. Spouse has been violent on two \
             occasions, leaving bruises. Client fears for safety. Spouse controls all finances \
             and client has no access to funds. Client discovered Bitcoin account in spouse's \
             name but cannot access. Spouse has consulting business that may have unreported \
             income. Children attend school in Brooklyn. Client wants to file for divorce but \
             fears retaliation."
                .to_string(),
        ),
        opposing_party_info: Some(opposing_party_info),
    }
}

fn follow_up_submission() -> IntakeSubmission {
    IntakeSubmission {
        client_id: Some("FL-2023-002".to_string()),
        client_name: Some("Maria Lopez".to_string()),
        intake_date: Some("2023-10-27".to_string()),
        marital_status: Some("Separated".to_string()),
        has_children: Some(false),
        children_info: Some(Vec::new()),
        residences: Some(Residences {
            client: "88 Ocean Pkwy, Kings County, NY".to_string(),
            spouse: "12 Main St, Mineola, Nassau County".to_string(),
        }),
        emergency_concerns: Some(vec!["Mortgage bills are overdue".to_string()]),
        financial_disclosure: Some(BTreeMap::new()),
        notes: Some("Amicable separation; both parties employed.".to_string()),
        opposing_party_info: Some(BTreeMap::new()),
    }
}
