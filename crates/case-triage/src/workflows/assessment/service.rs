use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{AssessmentResult, ClientId, ClientIntake, IntakeSubmission};
use super::engine::AssessmentEngine;
use super::entities::extractor_for;
use super::history::{AssessmentHistory, HistoryError, HistoryRecord};
use super::intake::IntakeError;
use super::matcher::LexiconError;
use crate::config::AssessmentConfig;

/// Service composing intake validation, the assessment engine, and the
/// history store.
pub struct CaseAssessmentService<H> {
    engine: Arc<AssessmentEngine>,
    history: Arc<H>,
}

impl<H> CaseAssessmentService<H>
where
    H: AssessmentHistory + 'static,
{
    pub fn new(history: Arc<H>, config: AssessmentConfig) -> Result<Self, AssessmentServiceError> {
        let extractor = extractor_for(config.entity_extractor)?;
        let engine = AssessmentEngine::standard(extractor)?;
        Ok(Self::with_engine(Arc::new(engine), history))
    }

    pub fn with_engine(engine: Arc<AssessmentEngine>, history: Arc<H>) -> Self {
        Self { engine, history }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    /// Validate a submission, assess it, and record the outcome.
    pub fn assess(
        &self,
        submission: IntakeSubmission,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        let intake = ClientIntake::try_from(submission)?;
        self.assess_intake(&intake)
    }

    /// Assess an already validated intake. Appends exactly one history record.
    pub fn assess_intake(
        &self,
        intake: &ClientIntake,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        let assessed_at = Utc::now();
        let result = self.engine.evaluate(intake);

        let record = HistoryRecord {
            client_id: intake.client_id.clone(),
            client_name: intake.client_name.clone(),
            assessment_date: assessed_at,
            result: result.clone(),
        };
        if let Err(err) = self.history.append(record) {
            warn!(client_id = %intake.client_id.0, error = %err, "failed to record assessment");
            return Err(err.into());
        }

        info!(
            client_id = %intake.client_id.0,
            urgency = result.urgency_level.label(),
            immediate_issues = result.immediate_issues.len(),
            county = %result.jurisdiction_recommendation.recommended_county,
            "intake assessed"
        );

        Ok(result)
    }

    pub fn history(&self) -> Result<Vec<HistoryRecord>, AssessmentServiceError> {
        Ok(self.history.records()?)
    }

    pub fn history_for(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<HistoryRecord>, AssessmentServiceError> {
        Ok(self.history.records_for(client_id)?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    History(#[from] HistoryError),
}
