use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentResult, ClientId, UrgencyLevel};

/// One completed assessment, as kept in the history store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub client_id: ClientId,
    pub client_name: String,
    pub assessment_date: DateTime<Utc>,
    pub result: AssessmentResult,
}

impl HistoryRecord {
    pub fn summary_view(&self) -> HistorySummaryView {
        HistorySummaryView {
            client_id: self.client_id.clone(),
            client_name: self.client_name.clone(),
            assessment_date: self.assessment_date,
            urgency_level: self.result.urgency_level,
        }
    }
}

/// Row shape for history listings; omits the full result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySummaryView {
    pub client_id: ClientId,
    pub client_name: String,
    pub assessment_date: DateTime<Utc>,
    pub urgency_level: UrgencyLevel,
}

/// Storage abstraction so the orchestrator never owns ambient history state.
pub trait AssessmentHistory: Send + Sync {
    fn append(&self, record: HistoryRecord) -> Result<(), HistoryError>;
    /// All records in append order.
    fn records(&self) -> Result<Vec<HistoryRecord>, HistoryError>;
    fn records_for(&self, client_id: &ClientId) -> Result<Vec<HistoryRecord>, HistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

/// Process-local history list guarded by a mutex.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAssessmentHistory {
    records: Arc<Mutex<Vec<HistoryRecord>>>,
}

impl InMemoryAssessmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_records<T>(
        &self,
        f: impl FnOnce(&mut Vec<HistoryRecord>) -> T,
    ) -> Result<T, HistoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| HistoryError::Unavailable("history mutex poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl AssessmentHistory for InMemoryAssessmentHistory {
    fn append(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        self.with_records(|records| records.push(record))
    }

    fn records(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.with_records(|records| records.clone())
    }

    fn records_for(&self, client_id: &ClientId) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.with_records(|records| {
            records
                .iter()
                .filter(|record| &record.client_id == client_id)
                .cloned()
                .collect()
        })
    }
}
