use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::assessment::domain::{
    ChildRecord, ClientId, ClientIntake, IntakeSubmission, Residences,
};
use crate::workflows::assessment::engine::AssessmentEngine;
use crate::workflows::assessment::entities::GazetteerEntityExtractor;
use crate::workflows::assessment::history::{
    AssessmentHistory, HistoryError, HistoryRecord, InMemoryAssessmentHistory,
};
use crate::workflows::assessment::service::CaseAssessmentService;

pub(super) const SAMPLE_NOTES: &str = "Client reports escalating arguments with spouse. Spouse has been violent on two occasions, leaving bruises. Client fears for safety. Spouse controls all finances and client has no access to funds. Client discovered Bitcoin account in spouse's name but cannot access. Spouse has consulting business that may have unreported income. Children attend school in Brooklyn. Client wants to file for divorce but fears retaliation.";

pub(super) fn sample_concerns() -> Vec<String> {
    vec![
        "Husband threatened me with violence".to_string(),
        "I have no access to bank accounts".to_string(),
        "He has a secret crypto account".to_string(),
        "Facing eviction next month".to_string(),
    ]
}

pub(super) fn sample_submission() -> IntakeSubmission {
    let mut financial_disclosure = BTreeMap::new();
    financial_disclosure.insert("income".to_string(), json!(45000));
    financial_disclosure.insert("spouse_income".to_string(), json!(250000));
    financial_disclosure.insert("joint_assets".to_string(), json!(750000));
    financial_disclosure.insert("separate_assets".to_string(), json!(50000));

    let mut opposing_party_info = BTreeMap::new();
    opposing_party_info.insert("name".to_string(), "John Smith".to_string());
    opposing_party_info.insert("employer".to_string(), "Self-employed consultant".to_string());
    opposing_party_info.insert("attorney".to_string(), "Unknown".to_string());

    IntakeSubmission {
        client_id: Some("FL-2023-001".to_string()),
        client_name: Some("Jane Smith".to_string()),
        intake_date: Some("2023-10-26".to_string()),
        marital_status: Some("Married".to_string()),
        has_children: Some(true),
        children_info: Some(vec![
            ChildRecord {
                name: Some("Child1".to_string()),
                age: Some(8),
                school: Some("PS 321 Brooklyn".to_string()),
            },
            ChildRecord {
                name: Some("Child2".to_string()),
                age: Some(5),
                school: Some("PS 321 Brooklyn".to_string()),
            },
        ]),
        residences: Some(Residences {
            client: "123 Main St, Brooklyn, NY 11201".to_string(),
            spouse: "456 Park Ave, Manhattan, NY 10022".to_string(),
        }),
        emergency_concerns: Some(sample_concerns()),
        financial_disclosure: Some(financial_disclosure),
        notes: Some(SAMPLE_NOTES.to_string()),
        opposing_party_info: Some(opposing_party_info),
    }
}

pub(super) fn sample_intake() -> ClientIntake {
    ClientIntake::try_from(sample_submission()).expect("sample intake is complete")
}

/// Bare intake: no text, no addresses, no children.
pub(super) fn quiet_intake(client_id: &str) -> ClientIntake {
    ClientIntake {
        client_id: ClientId(client_id.to_string()),
        client_name: "Quiet Client".to_string(),
        intake_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
        marital_status: "Separated".to_string(),
        has_children: false,
        children_info: Vec::new(),
        residences: Residences::default(),
        emergency_concerns: Vec::new(),
        financial_disclosure: BTreeMap::new(),
        notes: String::new(),
        opposing_party_info: BTreeMap::new(),
    }
}

pub(super) fn intake_with_notes(notes: &str) -> ClientIntake {
    let mut intake = quiet_intake("FL-TEXT");
    intake.notes = notes.to_string();
    intake
}

pub(super) fn keyword_engine() -> AssessmentEngine {
    AssessmentEngine::without_enrichment().expect("standard lexicon compiles")
}

pub(super) fn enriched_engine() -> AssessmentEngine {
    let extractor = GazetteerEntityExtractor::new_york().expect("gazetteer compiles");
    AssessmentEngine::standard(Arc::new(extractor)).expect("standard lexicon compiles")
}

pub(super) fn build_service() -> (
    CaseAssessmentService<InMemoryAssessmentHistory>,
    Arc<InMemoryAssessmentHistory>,
) {
    let history = Arc::new(InMemoryAssessmentHistory::new());
    let service =
        CaseAssessmentService::with_engine(Arc::new(enriched_engine()), history.clone());
    (service, history)
}

pub(super) struct UnavailableHistory;

impl AssessmentHistory for UnavailableHistory {
    fn append(&self, _record: HistoryRecord) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("database offline".to_string()))
    }

    fn records(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        Err(HistoryError::Unavailable("database offline".to_string()))
    }

    fn records_for(&self, _client_id: &ClientId) -> Result<Vec<HistoryRecord>, HistoryError> {
        Err(HistoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
