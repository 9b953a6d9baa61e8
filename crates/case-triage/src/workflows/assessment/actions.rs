use super::domain::{ClientIntake, FlagCategory, FlaggedIssues, ImmediateIssue};

const BASELINE_ACTIONS: [&str; 3] = [
    "Schedule initial client meeting to review concerns in detail",
    "Complete conflict check for all parties mentioned",
    "Prepare retainer agreement for client review",
];

const CATEGORY_ACTIONS: [(FlagCategory, [&str; 3]); 3] = [
    (
        FlagCategory::DomesticViolence,
        [
            "IMMEDIATE: Discuss Order of Protection options (Family Court vs Supreme Court)",
            "Provide client with domestic violence resources and safety plan",
            "Document all incidents with dates, times, and evidence",
        ],
    ),
    (
        FlagCategory::UrgentSupport,
        [
            "Prepare financial affidavit for temporary support motion",
            "Gather proof of income/expenses for both parties",
            "Consider emergency motion for temporary relief",
        ],
    ),
    (
        FlagCategory::HiddenAssets,
        [
            "Draft comprehensive discovery demands for financial documents",
            "Consider need for forensic accountant",
            "Research business interests and asset searches",
        ],
    ),
];

const RESIDENCY_ACTION: &str = "Verify residency requirements for chosen jurisdiction";

const CHILDREN_ACTIONS: [&str; 3] = [
    "Schedule child custody/visitation planning meeting",
    "Gather school/medical records for children",
    "Consider need for parenting coordinator or evaluation",
];

/// Attorney checklist for one intake. Order is fixed and nothing is deduplicated.
///
/// `_immediate_issues` is accepted so callers pass the scorer output through;
/// the checklist currently depends only on which categories fired.
pub fn recommend_actions(
    intake: &ClientIntake,
    flagged: &FlaggedIssues,
    _immediate_issues: &[ImmediateIssue],
) -> Vec<String> {
    let mut actions: Vec<String> = BASELINE_ACTIONS.iter().map(|a| a.to_string()).collect();

    for (category, block) in &CATEGORY_ACTIONS {
        if flagged.fired(*category) {
            actions.extend(block.iter().map(|a| a.to_string()));
        }
    }

    if intake.residences.both_present() {
        actions.push(RESIDENCY_ACTION.to_string());
    }

    if intake.has_children {
        actions.extend(CHILDREN_ACTIONS.iter().map(|a| a.to_string()));
    }

    actions
}
