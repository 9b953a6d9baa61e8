use std::sync::Arc;

use regex::Regex;

use super::domain::{FlagCategory, FlaggedIssues};
use super::entities::{EntityExtractor, NoEntityExtractor};
use super::lexicon::Lexicon;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon term '{term}' does not compile to a word-boundary pattern")]
    Pattern {
        term: String,
        #[source]
        source: regex::Error,
    },
}

struct TermPattern {
    category: FlagCategory,
    term: &'static str,
    pattern: Regex,
}

/// Whole-word scanner over the keyword lexicon, with optional location
/// enrichment for the jurisdiction-clue category.
pub struct LexiconMatcher {
    patterns: Vec<TermPattern>,
    extractor: Arc<dyn EntityExtractor>,
}

impl LexiconMatcher {
    pub fn new(
        lexicon: &Lexicon,
        extractor: Arc<dyn EntityExtractor>,
    ) -> Result<Self, LexiconError> {
        let mut patterns = Vec::new();
        for category in Lexicon::keyword_categories() {
            for term in lexicon.terms(category).iter().copied() {
                let source = format!(r"\b{}\b", regex::escape(term));
                let pattern = Regex::new(&source).map_err(|source| LexiconError::Pattern {
                    term: term.to_string(),
                    source,
                })?;
                patterns.push(TermPattern {
                    category,
                    term,
                    pattern,
                });
            }
        }

        Ok(Self {
            patterns,
            extractor,
        })
    }

    /// Matcher over the standard lexicon without location enrichment.
    pub fn standard() -> Result<Self, LexiconError> {
        Self::new(&Lexicon::standard(), Arc::new(NoEntityExtractor))
    }

    pub fn extractor_name(&self) -> &'static str {
        self.extractor.name()
    }

    /// Each term is reported at most once, however often it occurs.
    pub fn flag(&self, text: &str) -> FlaggedIssues {
        let lowered = text.to_lowercase();
        let mut flagged = FlaggedIssues::default();

        for entry in &self.patterns {
            if entry.pattern.is_match(&lowered) {
                flagged.get_mut(entry.category).push(entry.term.to_string());
            }
        }

        if !text.is_empty() {
            flagged.jurisdiction_clues = self
                .extractor
                .extract(text)
                .iter()
                .map(|mention| mention.describe())
                .collect();
        }

        flagged
    }
}
