use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentResult, ClientIntake};
use super::history::HistoryRecord;

pub const TOOL_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub tool_version: String,
    pub assessment_date: DateTime<Utc>,
}

/// Single-case export: the intake, its assessment, and provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentExport {
    pub intake: ClientIntake,
    pub assessment: AssessmentResult,
    pub metadata: ExportMetadata,
}

impl AssessmentExport {
    pub fn new(
        intake: ClientIntake,
        assessment: AssessmentResult,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            intake,
            assessment,
            metadata: ExportMetadata {
                tool_version: TOOL_VERSION.to_string(),
                assessment_date: exported_at,
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Every recorded assessment, for record keeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryExport {
    pub assessments: Vec<HistoryRecord>,
    pub export_date: DateTime<Utc>,
}

impl HistoryExport {
    pub fn new(assessments: Vec<HistoryRecord>, exported_at: DateTime<Utc>) -> Self {
        Self {
            assessments,
            export_date: exported_at,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialise export: {0}")]
    Json(#[from] serde_json::Error),
}
