use super::domain::{
    FlagCategory, FlaggedIssues, ImmediateIssue, IssueKind, IssueSeverity, UrgencyLevel,
};

const MAX_INDICATORS: usize = 5;

struct IssueRule {
    category: FlagCategory,
    weight: u8,
    kind: IssueKind,
    severity: IssueSeverity,
    action: &'static str,
}

// Evaluation order is the order issues are reported in.
const ISSUE_RULES: [IssueRule; 3] = [
    IssueRule {
        category: FlagCategory::DomesticViolence,
        weight: 10,
        kind: IssueKind::DomesticViolence,
        severity: IssueSeverity::High,
        action: "Immediate referral for Order of Protection. Safety planning required.",
    },
    IssueRule {
        category: FlagCategory::UrgentSupport,
        weight: 7,
        kind: IssueKind::UrgentSupportNeeds,
        severity: IssueSeverity::High,
        action: "Consider immediate Pendente Lite motion for temporary support/maintenance.",
    },
    IssueRule {
        category: FlagCategory::HiddenAssets,
        weight: 5,
        kind: IssueKind::PotentialHiddenAssets,
        severity: IssueSeverity::Medium,
        action: "Requires detailed forensic discovery. Consider subpoenas for bank/business records.",
    },
];

/// Score and issue list produced by [`assess_urgency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgencyAssessment {
    pub score: u8,
    pub level: UrgencyLevel,
    pub immediate_issues: Vec<ImmediateIssue>,
}

pub fn assess_urgency(flagged: &FlaggedIssues) -> UrgencyAssessment {
    let mut score: u8 = 0;
    let mut immediate_issues = Vec::new();

    for rule in &ISSUE_RULES {
        let indicators = flagged.get(rule.category);
        if indicators.is_empty() {
            continue;
        }

        score = score.saturating_add(rule.weight);
        immediate_issues.push(ImmediateIssue {
            kind: rule.kind,
            severity: rule.severity,
            indicators: indicators.iter().take(MAX_INDICATORS).cloned().collect(),
            action: rule.action.to_string(),
        });
    }

    UrgencyAssessment {
        score,
        level: UrgencyLevel::from_score(score),
        immediate_issues,
    }
}
