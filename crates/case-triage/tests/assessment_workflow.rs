//! Integration scenarios for the intake triage workflow.
//!
//! Scenarios drive the public service facade, renderers, and HTTP router the way an embedding
//! application would, without reaching into private modules.

mod common {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use serde_json::json;

    use case_triage::config::{AssessmentConfig, EntityExtractorKind};
    use case_triage::workflows::assessment::{
        CaseAssessmentService, ChildRecord, InMemoryAssessmentHistory, IntakeSubmission,
        Residences,
    };

    pub(super) fn submission(client_id: &str) -> IntakeSubmission {
        IntakeSubmission {
            client_id: Some(client_id.to_string()),
            client_name: Some("Ana Reyes".to_string()),
            intake_date: Some("2024-05-14".to_string()),
            marital_status: Some("Married".to_string()),
            has_children: Some(true),
            children_info: Some(vec![ChildRecord {
                name: Some("Leo".to_string()),
                age: Some(9),
                school: Some("PS 150 Queens".to_string()),
            }]),
            residences: Some(Residences {
                client: "41-12 Skillman Ave, Queens, NY 11104".to_string(),
                spouse: "9 Harbor Rd, Port Washington, Nassau County".to_string(),
            }),
            emergency_concerns: Some(vec![
                "He keeps money in an offshore account".to_string(),
                "Utilities will be shut off Friday".to_string(),
            ]),
            financial_disclosure: Some(BTreeMap::from([(
                "income".to_string(),
                json!(38000),
            )])),
            notes: Some("Client moved out of the marital home on Long Island in March.".to_string()),
            opposing_party_info: Some(BTreeMap::from([(
                "name".to_string(),
                "Marco Reyes".to_string(),
            )])),
        }
    }

    pub(super) fn service(
        extractor: EntityExtractorKind,
    ) -> Arc<CaseAssessmentService<InMemoryAssessmentHistory>> {
        let config = AssessmentConfig {
            entity_extractor: extractor,
        };
        Arc::new(
            CaseAssessmentService::new(Arc::new(InMemoryAssessmentHistory::new()), config)
                .expect("service builds"),
        )
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{NaiveDate, Utc};
use tower::ServiceExt;

use case_triage::config::EntityExtractorKind;
use case_triage::workflows::assessment::{
    assessment_router, render_report, AssessmentExport, ClientId, ClientIntake, HistoryExport,
    IssueKind, UrgencyLevel,
};
use common::*;

#[test]
fn queens_client_with_nassau_spouse_is_triaged_end_to_end() {
    let service = service(EntityExtractorKind::Gazetteer);

    let result = service
        .assess(submission("FL-2024-017"))
        .expect("assessment succeeds");

    assert_eq!(result.urgency_level, UrgencyLevel::High);
    let kinds: Vec<IssueKind> = result
        .immediate_issues
        .iter()
        .map(|issue| issue.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![IssueKind::UrgentSupportNeeds, IssueKind::PotentialHiddenAssets]
    );
    assert_eq!(
        result.flagged_keywords.urgent_support,
        vec!["utilities", "shut off"]
    );
    assert_eq!(result.flagged_keywords.hidden_assets, vec!["offshore"]);
    assert_eq!(
        result.flagged_keywords.jurisdiction_clues,
        vec!["Long Island (LOC)"]
    );

    let venue = &result.jurisdiction_recommendation;
    assert_eq!(venue.recommended_county, "Queens");
    assert_eq!(
        venue.basis,
        vec![
            "Client resides in Queens County",
            "Multiple jurisdictions possible - may file in either county per DRL §230",
            "Child attends school: PS 150 Queens",
        ]
    );
    assert_eq!(
        venue.issues,
        vec!["Parties live in different counties: Queens vs Nassau"]
    );

    // baseline + support + assets + residency + children
    assert_eq!(result.recommended_actions.len(), 3 + 3 + 3 + 1 + 3);
}

#[test]
fn report_and_export_describe_the_same_assessment() {
    let service = service(EntityExtractorKind::Disabled);
    let intake = ClientIntake::try_from(submission("FL-2024-018")).expect("complete");
    let result = service.assess_intake(&intake).expect("assessment succeeds");

    let generated_at = NaiveDate::from_ymd_opt(2024, 5, 14)
        .and_then(|date| date.and_hms_opt(9, 5, 0))
        .expect("valid timestamp");
    let report = render_report(&result, &intake, generated_at);
    assert!(report.contains("Assessment Date: 2024-05-14 09:05"));
    assert!(report.contains("  Recommended County: Queens"));
    assert!(!report.contains("Jurisdiction Clues"));

    let export = AssessmentExport::new(intake, result.clone(), Utc::now());
    let json = export.to_json_pretty().expect("serialises");
    let parsed: AssessmentExport = serde_json::from_str(&json).expect("parses back");
    assert_eq!(parsed.assessment, result);
    assert_eq!(parsed.metadata.tool_version, "1.0");
}

#[test]
fn history_export_lists_every_assessment_in_order() {
    let service = service(EntityExtractorKind::Disabled);
    service.assess(submission("FL-A")).expect("first");
    service.assess(submission("FL-B")).expect("second");
    service.assess(submission("FL-A")).expect("third");

    let records = service.history().expect("history");
    let ids: Vec<&str> = records
        .iter()
        .map(|record| record.client_id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["FL-A", "FL-B", "FL-A"]);
    assert_eq!(
        service
            .history_for(&ClientId("FL-A".to_string()))
            .expect("history")
            .len(),
        2
    );

    let export = HistoryExport::new(records, Utc::now());
    let json: serde_json::Value =
        serde_json::from_str(&export.to_json_pretty().expect("serialises")).expect("json");
    assert_eq!(json["assessments"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["assessments"][1]["client_id"], "FL-B");
}

#[tokio::test]
async fn router_rejects_unparseable_dates_without_recording() {
    let service = service(EntityExtractorKind::Disabled);
    let router = assessment_router(service.clone());
    let mut payload = submission("FL-BAD");
    payload.intake_date = Some("May 14th".to_string());

    let response = router
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).expect("serialise")))
                .expect("request"),
        )
        .await
        .expect("route response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let body: serde_json::Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(body["field"], "intake_date");
    assert!(service.history().expect("history").is_empty());
}
