use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::{DEFAULT_DATE_FORMAT, format_date};
use crate::model::{Answer, ItemId};

/// Data captured by the initial form before a checklist can be filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    pub asset_tag: String,
    pub owner: String,
    pub position: String,
    pub technician: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl OperatorInfo {
    /// Trims every field; an empty email becomes `None`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            asset_tag: self.asset_tag.trim().to_string(),
            owner: self.owner.trim().to_string(),
            position: self.position.trim().to_string(),
            technician: self.technician.trim().to_string(),
            email: self
                .email
                .map(|email| email.trim().to_string())
                .filter(|email| !email.is_empty()),
        }
    }

    /// Whether every mandatory field is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.asset_tag, &self.owner, &self.position, &self.technician]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

/// A completed checklist ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistSubmission {
    pub kind: String,
    pub operator: OperatorInfo,
    pub answers: BTreeMap<ItemId, Answer>,
    pub submitted_on: NaiveDate,
}

impl ChecklistSubmission {
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        operator: OperatorInfo,
        answers: impl IntoIterator<Item = (ItemId, Answer)>,
        submitted_on: NaiveDate,
    ) -> Self {
        Self {
            kind: kind.into(),
            operator,
            answers: answers.into_iter().collect(),
            submitted_on,
        }
    }

    /// Form fields of the post, in a stable order.
    ///
    /// Unanswered items are left out; the receiving side treats a missing
    /// `pregunta_N` as `N/A`.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("activo_fijo".to_string(), self.operator.asset_tag.clone()),
            ("propietario".to_string(), self.operator.owner.clone()),
            ("cargo".to_string(), self.operator.position.clone()),
            ("tecnico".to_string(), self.operator.technician.clone()),
        ];
        if let Some(email) = &self.operator.email {
            fields.push(("email".to_string(), email.clone()));
        }
        fields.push((
            "fecha".to_string(),
            format_date(self.submitted_on, DEFAULT_DATE_FORMAT),
        ));
        for (id, answer) in &self.answers {
            if let Some(value) = answer.control_value() {
                fields.push((id.form_field(), value.to_string()));
            }
        }
        fields
    }

    /// Name of the spreadsheet the receiving side stores this checklist as.
    #[must_use]
    pub fn file_name(&self) -> String {
        let name = format!(
            "Activo {} Checklist {} {} {}.xlsx",
            self.operator.asset_tag,
            self.kind,
            self.operator.owner.replace(' ', "-"),
            self.operator.position.replace(' ', "-"),
        );
        sanitize_file_name(&name)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|a| a.is_answered()).count()
    }
}

/// Replaces characters that are not allowed in file names with `_`.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|ch| if r#"\/:*?"<>|"#.contains(ch) { '_' } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn operator() -> OperatorInfo {
        OperatorInfo {
            asset_tag: " AF-1020 ".into(),
            owner: "Ana Ruiz".into(),
            position: "Contadora".into(),
            technician: "Luis".into(),
            email: Some("  ".into()),
        }
        .normalized()
    }

    #[test]
    fn normalized_trims_and_drops_blank_email() {
        let info = operator();
        assert_eq!(info.asset_tag, "AF-1020");
        assert_eq!(info.email, None);
        assert!(info.is_complete());
        assert!(!OperatorInfo::default().is_complete());
    }

    #[test]
    fn form_fields_encode_answers_by_question() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let submission = ChecklistSubmission::new(
            "pc",
            operator(),
            [
                (ItemId::new(2), Answer::NotApplicable),
                (ItemId::new(1), Answer::Ok),
                (ItemId::new(3), Answer::PartiallyDone),
            ],
            date,
        );
        let fields = submission.form_fields();
        let expected: Vec<(String, String)> = [
            ("activo_fijo", "AF-1020"),
            ("propietario", "Ana Ruiz"),
            ("cargo", "Contadora"),
            ("tecnico", "Luis"),
            ("fecha", "09/03/2024"),
            ("pregunta_1", "OK"),
            ("pregunta_2", "N/A"),
            ("pregunta_3", "PD"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(fields, expected);
        assert_eq!(submission.answered_count(), 3);
    }

    #[test]
    fn file_name_is_sanitized() {
        let mut info = operator();
        info.asset_tag = "AF/10:20".into();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let submission = ChecklistSubmission::new("pc", info, Vec::new(), date);
        assert_eq!(
            submission.file_name(),
            "Activo AF_10_20 Checklist pc Ana-Ruiz Contadora.xlsx"
        );
    }

    #[test]
    fn unanswered_items_are_omitted() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let submission = ChecklistSubmission::new(
            "pc",
            operator(),
            [(ItemId::new(1), Answer::Unanswered)],
            date,
        );
        assert!(
            submission
                .form_fields()
                .iter()
                .all(|(key, _)| !key.starts_with("pregunta_"))
        );
    }
}
