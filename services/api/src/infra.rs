use case_triage::config::AssessmentConfig;
use case_triage::error::AppError;
use case_triage::workflows::assessment::{CaseAssessmentService, InMemoryAssessmentHistory};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type TriageService = CaseAssessmentService<InMemoryAssessmentHistory>;

/// Service backed by a fresh process-local history store.
pub(crate) fn build_service(config: AssessmentConfig) -> Result<Arc<TriageService>, AppError> {
    let history = Arc::new(InMemoryAssessmentHistory::new());
    let service = CaseAssessmentService::new(history, config)?;
    Ok(Arc::new(service))
}
