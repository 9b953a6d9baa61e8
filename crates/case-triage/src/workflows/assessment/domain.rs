use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier wrapper for intake clients (e.g. `FL-2023-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

/// Child details captured during intake. Every field is optional on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
}

/// Free-form addresses for both parties; either may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residences {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub spouse: String,
}

impl Residences {
    pub fn both_present(&self) -> bool {
        !self.client.is_empty() && !self.spouse.is_empty()
    }
}

/// Wire form of an intake as it arrives from a form, file, or HTTP body.
///
/// Every field is optional here so that a missing field surfaces as an
/// [`IntakeError`](super::intake::IntakeError) naming it, rather than as a
/// generic deserialisation failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeSubmission {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub intake_date: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub has_children: Option<bool>,
    #[serde(default)]
    pub children_info: Option<Vec<ChildRecord>>,
    #[serde(default)]
    pub residences: Option<Residences>,
    #[serde(default)]
    pub emergency_concerns: Option<Vec<String>>,
    #[serde(default)]
    pub financial_disclosure: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub opposing_party_info: Option<BTreeMap<String, String>>,
}

/// Validated intake record. Built once per assessment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientIntake {
    pub client_id: ClientId,
    pub client_name: String,
    pub intake_date: NaiveDate,
    pub marital_status: String,
    pub has_children: bool,
    pub children_info: Vec<ChildRecord>,
    pub residences: Residences,
    pub emergency_concerns: Vec<String>,
    pub financial_disclosure: BTreeMap<String, Value>,
    pub notes: String,
    pub opposing_party_info: BTreeMap<String, String>,
}

impl ClientIntake {
    /// Notes followed by every emergency concern, space separated.
    pub fn narrative(&self) -> String {
        format!("{} {}", self.notes, self.emergency_concerns.join(" "))
    }
}

/// Keyword categories tracked by the lexicon matcher, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagCategory {
    DomesticViolence,
    UrgentSupport,
    HiddenAssets,
    JurisdictionClues,
}

impl FlagCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::DomesticViolence,
            Self::UrgentSupport,
            Self::HiddenAssets,
            Self::JurisdictionClues,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::DomesticViolence => "domestic_violence",
            Self::UrgentSupport => "urgent_support",
            Self::HiddenAssets => "hidden_assets",
            Self::JurisdictionClues => "jurisdiction_clues",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DomesticViolence => "Domestic Violence",
            Self::UrgentSupport => "Urgent Support",
            Self::HiddenAssets => "Hidden Assets",
            Self::JurisdictionClues => "Jurisdiction Clues",
        }
    }
}

/// Category → matched literal terms. Term order follows the lexicon; the
/// jurisdiction-clue list follows text order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedIssues {
    pub domestic_violence: Vec<String>,
    pub urgent_support: Vec<String>,
    pub hidden_assets: Vec<String>,
    pub jurisdiction_clues: Vec<String>,
}

impl FlaggedIssues {
    pub fn get(&self, category: FlagCategory) -> &[String] {
        match category {
            FlagCategory::DomesticViolence => &self.domestic_violence,
            FlagCategory::UrgentSupport => &self.urgent_support,
            FlagCategory::HiddenAssets => &self.hidden_assets,
            FlagCategory::JurisdictionClues => &self.jurisdiction_clues,
        }
    }

    pub(crate) fn get_mut(&mut self, category: FlagCategory) -> &mut Vec<String> {
        match category {
            FlagCategory::DomesticViolence => &mut self.domestic_violence,
            FlagCategory::UrgentSupport => &mut self.urgent_support,
            FlagCategory::HiddenAssets => &mut self.hidden_assets,
            FlagCategory::JurisdictionClues => &mut self.jurisdiction_clues,
        }
    }

    pub fn fired(&self, category: FlagCategory) -> bool {
        !self.get(category).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        FlagCategory::ordered()
            .into_iter()
            .all(|category| !self.fired(category))
    }

    pub fn entries(&self) -> impl Iterator<Item = (FlagCategory, &[String])> + '_ {
        FlagCategory::ordered()
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// Coarse triage bucket derived from the severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyLevel {
    High,
    Medium,
    Low,
}

impl UrgencyLevel {
    pub const HIGH_THRESHOLD: u8 = 10;
    pub const MEDIUM_THRESHOLD: u8 = 5;

    pub const fn from_score(score: u8) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    DomesticViolence,
    UrgentSupportNeeds,
    PotentialHiddenAssets,
}

impl IssueKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DomesticViolence => "DOMESTIC_VIOLENCE",
            Self::UrgentSupportNeeds => "URGENT_SUPPORT_NEEDS",
            Self::PotentialHiddenAssets => "POTENTIAL_HIDDEN_ASSETS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueSeverity {
    High,
    Medium,
}

impl IssueSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
        }
    }
}

/// Structured finding paired with its canned remediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmediateIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub indicators: Vec<String>,
    pub action: String,
}

/// Filing venue suggestion plus the reasoning trail behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionRecommendation {
    pub recommended_county: String,
    pub basis: Vec<String>,
    pub issues: Vec<String>,
    pub client_residence: String,
    pub spouse_residence: String,
}

/// Everything one assessment produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub urgency_level: UrgencyLevel,
    pub immediate_issues: Vec<ImmediateIssue>,
    pub jurisdiction_recommendation: JurisdictionRecommendation,
    pub recommended_actions: Vec<String>,
    pub flagged_keywords: FlaggedIssues,
}
