use chrono::NaiveDate;

use super::domain::{ClientId, ClientIntake, IntakeSubmission};

/// Validation errors raised while building a [`ClientIntake`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("intake is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("intake field `intake_date` must be YYYY-MM-DD (found '{value}')")]
    InvalidDate { value: String },
}

impl IntakeError {
    pub const fn field(&self) -> &'static str {
        match self {
            IntakeError::MissingField(field) => field,
            IntakeError::InvalidDate { .. } => "intake_date",
        }
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, IntakeError> {
    value.ok_or(IntakeError::MissingField(field))
}

pub(crate) fn parse_intake_date(raw: &str) -> Result<NaiveDate, IntakeError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| IntakeError::InvalidDate {
        value: raw.to_string(),
    })
}

impl TryFrom<IntakeSubmission> for ClientIntake {
    type Error = IntakeError;

    /// Fields are checked in declaration order; the first gap is reported.
    fn try_from(submission: IntakeSubmission) -> Result<Self, Self::Error> {
        let client_id = required(submission.client_id, "client_id")?;
        let client_name = required(submission.client_name, "client_name")?;
        let intake_date = required(submission.intake_date, "intake_date")?;
        let marital_status = required(submission.marital_status, "marital_status")?;
        let has_children = required(submission.has_children, "has_children")?;
        let children_info = required(submission.children_info, "children_info")?;
        let residences = required(submission.residences, "residences")?;
        let emergency_concerns = required(submission.emergency_concerns, "emergency_concerns")?;
        let financial_disclosure =
            required(submission.financial_disclosure, "financial_disclosure")?;
        let notes = required(submission.notes, "notes")?;
        let opposing_party_info = required(submission.opposing_party_info, "opposing_party_info")?;

        Ok(ClientIntake {
            client_id: ClientId(client_id),
            client_name,
            intake_date: parse_intake_date(&intake_date)?,
            marital_status,
            has_children,
            children_info,
            residences,
            emergency_concerns,
            financial_disclosure,
            notes,
            opposing_party_info,
        })
    }
}

impl From<&ClientIntake> for IntakeSubmission {
    fn from(intake: &ClientIntake) -> Self {
        Self {
            client_id: Some(intake.client_id.0.clone()),
            client_name: Some(intake.client_name.clone()),
            intake_date: Some(intake.intake_date.format("%Y-%m-%d").to_string()),
            marital_status: Some(intake.marital_status.clone()),
            has_children: Some(intake.has_children),
            children_info: Some(intake.children_info.clone()),
            residences: Some(intake.residences.clone()),
            emergency_concerns: Some(intake.emergency_concerns.clone()),
            financial_disclosure: Some(intake.financial_disclosure.clone()),
            notes: Some(intake.notes.clone()),
            opposing_party_info: Some(intake.opposing_party_info.clone()),
        }
    }
}
