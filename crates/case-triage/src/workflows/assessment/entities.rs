//! Location recognisers feeding the jurisdiction-clue category.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::matcher::LexiconError;
use crate::config::EntityExtractorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// Geopolitical entity: a city, borough, county, or state.
    Gpe,
    /// Non-political location such as a region.
    Loc,
}

impl EntityLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recognised span, carrying the text exactly as it appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMention {
    pub text: String,
    pub label: EntityLabel,
}

impl EntityMention {
    /// `"<text> (<LABEL>)"`, the form stored in the flagged keyword map.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.text, self.label)
    }
}

/// Optional collaborator that pulls place names out of free text.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<EntityMention>;

    fn name(&self) -> &'static str;
}

/// Used when no recogniser is configured; never yields anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntityExtractor;

impl EntityExtractor for NoEntityExtractor {
    fn extract(&self, _text: &str) -> Vec<EntityMention> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

const NEW_YORK_GAZETTEER: &[(&str, EntityLabel)] = &[
    ("New York City", EntityLabel::Gpe),
    ("New York", EntityLabel::Gpe),
    ("NYC", EntityLabel::Gpe),
    ("Manhattan", EntityLabel::Gpe),
    ("Brooklyn", EntityLabel::Gpe),
    ("Queens", EntityLabel::Gpe),
    ("Bronx", EntityLabel::Gpe),
    ("Staten Island", EntityLabel::Gpe),
    ("Westchester", EntityLabel::Gpe),
    ("Nassau", EntityLabel::Gpe),
    ("Suffolk", EntityLabel::Gpe),
    ("Rockland", EntityLabel::Gpe),
    ("Erie", EntityLabel::Gpe),
    ("Buffalo", EntityLabel::Gpe),
    ("Yonkers", EntityLabel::Gpe),
    ("White Plains", EntityLabel::Gpe),
    ("Albany", EntityLabel::Gpe),
    ("Long Island", EntityLabel::Loc),
    ("Hudson Valley", EntityLabel::Loc),
    ("Upstate New York", EntityLabel::Loc),
    ("Catskills", EntityLabel::Loc),
    ("Adirondacks", EntityLabel::Loc),
];

/// Rule-based recogniser over a fixed list of New York place names.
///
/// Matching is case-insensitive and word-bounded. Every occurrence is
/// reported in text order; where two entries overlap the longer one wins
/// (`Upstate New York` over `New York`).
#[derive(Debug, Clone)]
pub struct GazetteerEntityExtractor {
    pattern: Regex,
    labels: HashMap<String, EntityLabel>,
}

impl GazetteerEntityExtractor {
    pub fn new_york() -> Result<Self, LexiconError> {
        Self::from_entries(NEW_YORK_GAZETTEER)
    }

    pub fn from_entries(entries: &[(&str, EntityLabel)]) -> Result<Self, LexiconError> {
        let mut names: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(r"(?i)\b(?:{alternation})\b");
        let pattern = Regex::new(&source).map_err(|source| LexiconError::Pattern {
            term: "gazetteer".to_string(),
            source,
        })?;

        let labels = entries
            .iter()
            .map(|(name, label)| (name.to_lowercase(), *label))
            .collect();

        Ok(Self { pattern, labels })
    }
}

impl EntityExtractor for GazetteerEntityExtractor {
    fn extract(&self, text: &str) -> Vec<EntityMention> {
        self.pattern
            .find_iter(text)
            .filter_map(|found| {
                self.labels
                    .get(&found.as_str().to_lowercase())
                    .map(|label| EntityMention {
                        text: found.as_str().to_string(),
                        label: *label,
                    })
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "gazetteer"
    }
}

/// Resolve the configured recogniser once at startup.
pub fn extractor_for(kind: EntityExtractorKind) -> Result<Arc<dyn EntityExtractor>, LexiconError> {
    match kind {
        EntityExtractorKind::Gazetteer => Ok(Arc::new(GazetteerEntityExtractor::new_york()?)),
        EntityExtractorKind::Disabled => Ok(Arc::new(NoEntityExtractor)),
    }
}
