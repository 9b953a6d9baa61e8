use chrono::NaiveDateTime;

use super::domain::{AssessmentResult, ClientIntake};

const RULE_WIDTH: usize = 60;
const DISPLAYED_INDICATORS: usize = 3;

/// Plain-text case report. Section order and headings are fixed; the
/// timestamp is supplied by the caller so output is reproducible.
pub fn render_report(
    result: &AssessmentResult,
    intake: &ClientIntake,
    generated_at: NaiveDateTime,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = vec![
        rule.clone(),
        "FAMILY LAW CASE ASSESSMENT REPORT".to_string(),
        rule,
        format!("Client: {}", intake.client_name),
        format!("Client ID: {}", intake.client_id.0),
        format!("Assessment Date: {}", generated_at.format("%Y-%m-%d %H:%M")),
        String::new(),
    ];

    lines.push("URGENCY LEVEL:".to_string());
    lines.push(format!("  {} PRIORITY", result.urgency_level.label()));
    lines.push(String::new());

    if !result.immediate_issues.is_empty() {
        lines.push("IMMEDIATE ISSUES IDENTIFIED:".to_string());
        for issue in &result.immediate_issues {
            let shown: Vec<&str> = issue
                .indicators
                .iter()
                .take(DISPLAYED_INDICATORS)
                .map(String::as_str)
                .collect();
            lines.push(format!(
                "  • {} ({})",
                issue.kind.label(),
                issue.severity.label()
            ));
            lines.push(format!("    Indicators: {}", shown.join(", ")));
            lines.push(format!("    Action: {}", issue.action));
            lines.push(String::new());
        }
    }

    let jurisdiction = &result.jurisdiction_recommendation;
    lines.push("JURISDICTION ANALYSIS:".to_string());
    lines.push(format!(
        "  Recommended County: {}",
        jurisdiction.recommended_county
    ));
    if !jurisdiction.basis.is_empty() {
        lines.push("  Basis:".to_string());
        lines.extend(jurisdiction.basis.iter().map(|basis| format!("    • {basis}")));
    }
    if !jurisdiction.issues.is_empty() {
        lines.push("  Issues/Notes:".to_string());
        lines.extend(jurisdiction.issues.iter().map(|issue| format!("    • {issue}")));
    }
    lines.push(String::new());

    lines.push("RECOMMENDED ACTIONS:".to_string());
    lines.extend(
        result
            .recommended_actions
            .iter()
            .enumerate()
            .map(|(index, action)| format!("  {}. {}", index + 1, action)),
    );
    lines.push(String::new());

    lines.push("KEYWORD ANALYSIS SUMMARY:".to_string());
    for (category, keywords) in result.flagged_keywords.entries() {
        if !keywords.is_empty() {
            lines.push(format!(
                "  {}: {} indicators found",
                category.label(),
                keywords.len()
            ));
        }
    }

    lines.join("\n")
}
