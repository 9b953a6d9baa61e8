use std::sync::Arc;

use tracing::debug;

use super::actions::recommend_actions;
use super::domain::{AssessmentResult, ClientIntake};
use super::entities::{EntityExtractor, NoEntityExtractor};
use super::jurisdiction::CountyTable;
use super::lexicon::Lexicon;
use super::matcher::{LexiconError, LexiconMatcher};
use super::scoring::assess_urgency;

/// Stateless pipeline: matcher, scorer, resolver, then action generator.
pub struct AssessmentEngine {
    matcher: LexiconMatcher,
    counties: CountyTable,
}

impl AssessmentEngine {
    pub fn new(
        lexicon: &Lexicon,
        counties: CountyTable,
        extractor: Arc<dyn EntityExtractor>,
    ) -> Result<Self, LexiconError> {
        Ok(Self {
            matcher: LexiconMatcher::new(lexicon, extractor)?,
            counties,
        })
    }

    /// Standard lexicon and New York county table.
    pub fn standard(extractor: Arc<dyn EntityExtractor>) -> Result<Self, LexiconError> {
        Self::new(&Lexicon::standard(), CountyTable::new_york(), extractor)
    }

    /// Keyword-only engine, used where location enrichment is unavailable.
    pub fn without_enrichment() -> Result<Self, LexiconError> {
        Self::standard(Arc::new(NoEntityExtractor))
    }

    pub fn matcher(&self) -> &LexiconMatcher {
        &self.matcher
    }

    pub fn counties(&self) -> &CountyTable {
        &self.counties
    }

    pub fn evaluate(&self, intake: &ClientIntake) -> AssessmentResult {
        let flagged = self.matcher.flag(&intake.narrative());

        let jurisdiction = self.counties.resolve(
            &intake.residences,
            intake.has_children,
            &intake.children_info,
        );
        if !jurisdiction.issues.is_empty() {
            debug!(
                client_id = %intake.client_id.0,
                county = %jurisdiction.recommended_county,
                issues = jurisdiction.issues.len(),
                "jurisdiction resolved with notes"
            );
        }

        let urgency = assess_urgency(&flagged);
        let recommended_actions = recommend_actions(intake, &flagged, &urgency.immediate_issues);

        AssessmentResult {
            urgency_level: urgency.level,
            immediate_issues: urgency.immediate_issues,
            jurisdiction_recommendation: jurisdiction,
            recommended_actions,
            flagged_keywords: flagged,
        }
    }
}
