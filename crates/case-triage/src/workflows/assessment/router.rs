use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, Utc};
use serde_json::json;

use super::domain::{AssessmentResult, ClientId, ClientIntake, IntakeSubmission};
use super::export::{AssessmentExport, HistoryExport};
use super::history::{AssessmentHistory, HistorySummaryView};
use super::intake::IntakeError;
use super::report::render_report;
use super::service::{AssessmentServiceError, CaseAssessmentService};

/// Router builder exposing assessment, report, export, and history endpoints.
pub fn assessment_router<H>(service: Arc<CaseAssessmentService<H>>) -> Router
where
    H: AssessmentHistory + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(assess_handler::<H>))
        .route("/api/v1/assessments/report", post(report_handler::<H>))
        .route("/api/v1/assessments/export", post(export_handler::<H>))
        .route("/api/v1/assessments/history", get(history_handler::<H>))
        .route(
            "/api/v1/assessments/history/export",
            get(history_export_handler::<H>),
        )
        .route(
            "/api/v1/assessments/history/:client_id",
            get(client_history_handler::<H>),
        )
        .with_state(service)
}

fn intake_error_response(error: &IntakeError) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "field": error.field(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

fn service_error_response(error: &AssessmentServiceError) -> Response {
    match error {
        AssessmentServiceError::Intake(error) => intake_error_response(error),
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn assess_submission<H>(
    service: &CaseAssessmentService<H>,
    submission: IntakeSubmission,
) -> Result<(ClientIntake, AssessmentResult), Response>
where
    H: AssessmentHistory + 'static,
{
    let intake = ClientIntake::try_from(submission).map_err(|err| intake_error_response(&err))?;
    let result = service
        .assess_intake(&intake)
        .map_err(|err| service_error_response(&err))?;
    Ok((intake, result))
}

pub(crate) async fn assess_handler<H>(
    State(service): State<Arc<CaseAssessmentService<H>>>,
    axum::Json(submission): axum::Json<IntakeSubmission>,
) -> Response
where
    H: AssessmentHistory + 'static,
{
    match assess_submission(&service, submission) {
        Ok((_, result)) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(response) => response,
    }
}

pub(crate) async fn report_handler<H>(
    State(service): State<Arc<CaseAssessmentService<H>>>,
    axum::Json(submission): axum::Json<IntakeSubmission>,
) -> Response
where
    H: AssessmentHistory + 'static,
{
    match assess_submission(&service, submission) {
        Ok((intake, result)) => {
            let report = render_report(&result, &intake, Local::now().naive_local());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                report,
            )
                .into_response()
        }
        Err(response) => response,
    }
}

pub(crate) async fn export_handler<H>(
    State(service): State<Arc<CaseAssessmentService<H>>>,
    axum::Json(submission): axum::Json<IntakeSubmission>,
) -> Response
where
    H: AssessmentHistory + 'static,
{
    match assess_submission(&service, submission) {
        Ok((intake, result)) => {
            let export = AssessmentExport::new(intake, result, Utc::now());
            (StatusCode::OK, axum::Json(export)).into_response()
        }
        Err(response) => response,
    }
}

pub(crate) async fn history_handler<H>(
    State(service): State<Arc<CaseAssessmentService<H>>>,
) -> Response
where
    H: AssessmentHistory + 'static,
{
    match service.history() {
        Ok(records) => {
            let rows: Vec<HistorySummaryView> =
                records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, axum::Json(rows)).into_response()
        }
        Err(err) => service_error_response(&err),
    }
}

pub(crate) async fn history_export_handler<H>(
    State(service): State<Arc<CaseAssessmentService<H>>>,
) -> Response
where
    H: AssessmentHistory + 'static,
{
    match service.history() {
        Ok(records) => {
            let export = HistoryExport::new(records, Utc::now());
            (StatusCode::OK, axum::Json(export)).into_response()
        }
        Err(err) => service_error_response(&err),
    }
}

pub(crate) async fn client_history_handler<H>(
    State(service): State<Arc<CaseAssessmentService<H>>>,
    Path(client_id): Path<String>,
) -> Response
where
    H: AssessmentHistory + 'static,
{
    match service.history_for(&ClientId(client_id)) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => service_error_response(&err),
    }
}
