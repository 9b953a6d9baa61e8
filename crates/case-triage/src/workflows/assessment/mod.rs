//! Family law intake triage: keyword flags, urgency scoring, venue inference,
//! and the attorney checklist, plus the history store and outer surfaces that
//! wrap them.

mod actions;
pub mod domain;
mod engine;
pub mod entities;
pub mod export;
pub mod history;
pub(crate) mod intake;
pub mod jurisdiction;
pub mod lexicon;
pub mod matcher;
pub mod report;
pub mod router;
mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use actions::recommend_actions;
pub use domain::{
    AssessmentResult, ChildRecord, ClientId, ClientIntake, FlagCategory, FlaggedIssues,
    ImmediateIssue, IntakeSubmission, IssueKind, IssueSeverity, JurisdictionRecommendation,
    Residences, UrgencyLevel,
};
pub use engine::AssessmentEngine;
pub use entities::{
    extractor_for, EntityExtractor, EntityLabel, EntityMention, GazetteerEntityExtractor,
    NoEntityExtractor,
};
pub use export::{AssessmentExport, ExportError, ExportMetadata, HistoryExport};
pub use history::{
    AssessmentHistory, HistoryError, HistoryRecord, HistorySummaryView, InMemoryAssessmentHistory,
};
pub use intake::IntakeError;
pub use jurisdiction::{County, CountyTable};
pub use lexicon::Lexicon;
pub use matcher::{LexiconError, LexiconMatcher};
pub use report::render_report;
pub use router::assessment_router;
pub use scoring::{assess_urgency, UrgencyAssessment};
pub use service::{AssessmentServiceError, CaseAssessmentService};
