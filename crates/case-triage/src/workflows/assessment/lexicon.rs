//! Fixed keyword tables used to flag intake narratives.
//!
//! Terms are stored lower-case; the matcher lower-cases the narrative before
//! testing them. Table order is significant: matched terms are reported in the
//! order they are declared here.

use super::domain::FlagCategory;

const DOMESTIC_VIOLENCE_TERMS: &[&str] = &[
    "abuse",
    "violent",
    "hit",
    "punch",
    "slap",
    "threat",
    "fear",
    "scared",
    "restraining order",
    "order of protection",
    "harass",
    "stalk",
    "intimidate",
    "weapon",
    "gun",
    "hurt",
    "bruise",
    "injury",
    "emergency",
    "police",
    "911",
    "control",
    "manipulate",
    "isolate",
    "coerce",
];

const URGENT_SUPPORT_TERMS: &[&str] = &[
    "no money",
    "unemployed",
    "jobless",
    "eviction",
    "homeless",
    "hungry",
    "utilities",
    "electricity",
    "gas",
    "water",
    "shut off",
    "medication",
    "medical",
    "treatment",
    "urgent",
    "immediate",
    "desperate",
    "crisis",
    "bills",
    "debt",
    "credit",
    "overdue",
    "foreclosure",
];

const HIDDEN_ASSET_TERMS: &[&str] = &[
    "offshore",
    "crypto",
    "bitcoin",
    "hidden",
    "secret",
    "undisclosed",
    "cash business",
    "tips",
    "under the table",
    "unreported",
    "business account",
    "side business",
    "consulting",
    "freelance",
    "foreign account",
    "swiss",
    "cayman",
    "transferred",
    "moved money",
    "gifted",
    "gave away",
    "sold quickly",
    "antiques",
    "art",
    "collectibles",
    "safe deposit",
    "safe",
    "family loan",
    "repayment",
];

const JURISDICTION_CLUE_TERMS: &[(&str, &[&str])] = &[
    ("lived", &["residence", "live", "reside", "address", "home"]),
    ("married", &["married", "wedding", "ceremony"]),
    ("children", &["school", "enrolled", "pediatrician", "doctor"]),
];

/// Read-only keyword tables shared by every assessment.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    domestic_violence: &'static [&'static str],
    urgent_support: &'static [&'static str],
    hidden_assets: &'static [&'static str],
    jurisdiction_clues: &'static [(&'static str, &'static [&'static str])],
}

impl Lexicon {
    pub const fn standard() -> Self {
        Self {
            domestic_violence: DOMESTIC_VIOLENCE_TERMS,
            urgent_support: URGENT_SUPPORT_TERMS,
            hidden_assets: HIDDEN_ASSET_TERMS,
            jurisdiction_clues: JURISDICTION_CLUE_TERMS,
        }
    }

    /// Terms for one of the three keyword categories. Jurisdiction clues come
    /// from entity extraction, not literal terms, so that category is empty.
    pub const fn terms(&self, category: FlagCategory) -> &'static [&'static str] {
        match category {
            FlagCategory::DomesticViolence => self.domestic_violence,
            FlagCategory::UrgentSupport => self.urgent_support,
            FlagCategory::HiddenAssets => self.hidden_assets,
            FlagCategory::JurisdictionClues => &[],
        }
    }

    /// Residency context terms grouped by the fact they hint at.
    pub const fn jurisdiction_terms(&self) -> &'static [(&'static str, &'static [&'static str])] {
        self.jurisdiction_clues
    }

    pub const fn keyword_categories() -> [FlagCategory; 3] {
        [
            FlagCategory::DomesticViolence,
            FlagCategory::UrgentSupport,
            FlagCategory::HiddenAssets,
        ]
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}
