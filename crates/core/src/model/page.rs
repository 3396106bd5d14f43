use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Answer, ItemId};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("checklist {kind:?} has no items")]
    Empty { kind: String },
    #[error("checklist item {0} appears more than once")]
    DuplicateItem(ItemId),
    #[error("checklist kind must not be blank")]
    BlankKind,
    #[error("invalid page snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// One rendered checklist question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ItemId,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Answer the page was rendered with.
    #[serde(default)]
    pub answer: Answer,
}

impl ChecklistItem {
    #[must_use]
    pub fn new(id: u64, prompt: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            prompt: prompt.into(),
            section: None,
            answer: Answer::Unanswered,
        }
    }

    #[must_use]
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.answer = answer;
        self
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

/// Outcome banner rendered after a save round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveBanner {
    /// Saved and copied to the shared folder.
    Saved { file: String },
    /// Saved locally but the shared-folder copy failed.
    SavedLocally { file: String },
    Failed,
}

impl SaveBanner {
    /// Only a full save arms the automatic return to the start page.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, SaveBanner::Saved { .. })
    }

    /// Maps the `mensaje`/`archivo` query parameters of the result redirect.
    #[must_use]
    pub fn from_query(mensaje: Option<&str>, archivo: Option<&str>) -> Option<Self> {
        let file = archivo.unwrap_or_default().to_string();
        match mensaje? {
            "1" => Some(SaveBanner::Saved { file }),
            "0" => Some(SaveBanner::SavedLocally { file }),
            "error" => Some(SaveBanner::Failed),
            _ => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            SaveBanner::Saved { file } => {
                format!("Checklist guardado correctamente: {file}")
            }
            SaveBanner::SavedLocally { file } => format!(
                "Checklist guardado localmente ({file}), pero no se pudo copiar a la carpeta compartida"
            ),
            SaveBanner::Failed => "Error al guardar el checklist. Intenta nuevamente".to_string(),
        }
    }
}

/// Snapshot of a rendered checklist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistPage {
    pub kind: String,
    pub title: String,
    pub items: Vec<ChecklistItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<SaveBanner>,
}

impl ChecklistPage {
    /// Builds a page, rejecting snapshots no checklist could be rendered from.
    ///
    /// # Errors
    ///
    /// Returns `PageError` when the kind is blank, there are no items, or an
    /// id repeats.
    pub fn new(
        kind: impl Into<String>,
        title: impl Into<String>,
        items: Vec<ChecklistItem>,
    ) -> Result<Self, PageError> {
        let page = Self {
            kind: kind.into(),
            title: title.into(),
            items,
            banner: None,
        };
        page.validate()?;
        Ok(page)
    }

    /// Parses and validates a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Json` for malformed input and the `validate`
    /// errors otherwise.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let page: ChecklistPage = serde_json::from_str(raw)?;
        page.validate()?;
        Ok(page)
    }

    /// # Errors
    ///
    /// See [`ChecklistPage::new`].
    pub fn validate(&self) -> Result<(), PageError> {
        if self.kind.trim().is_empty() {
            return Err(PageError::BlankKind);
        }
        if self.items.is_empty() {
            return Err(PageError::Empty {
                kind: self.kind.clone(),
            });
        }
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(PageError::DuplicateItem(item.id));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn with_banner(mut self, banner: SaveBanner) -> Self {
        self.banner = Some(banner);
        self
    }

    #[must_use]
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    #[must_use]
    pub fn has_success_banner(&self) -> bool {
        self.banner.as_ref().is_some_and(SaveBanner::is_success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let err = ChecklistPage::new(
            "pc",
            "PC",
            vec![ChecklistItem::new(1, "a"), ChecklistItem::new(1, "b")],
        )
        .unwrap_err();
        assert!(matches!(err, PageError::DuplicateItem(id) if id == ItemId::new(1)));
    }

    #[test]
    fn rejects_empty_pages() {
        let err = ChecklistPage::new("pc", "PC", Vec::new()).unwrap_err();
        assert!(matches!(err, PageError::Empty { .. }));
        let err = ChecklistPage::new(" ", "PC", vec![ChecklistItem::new(1, "a")]).unwrap_err();
        assert!(matches!(err, PageError::BlankKind));
    }

    #[test]
    fn parses_snapshot_with_prerendered_answers() {
        let raw = r#"{
            "kind": "pc",
            "title": "Checklist PC",
            "items": [
                {"id": 1, "prompt": "Equipo enciende"},
                {"id": 2, "prompt": "Antivirus", "answer": "N/A", "section": "Software"}
            ],
            "banner": {"status": "saved", "file": "pc_001.xlsx"}
        }"#;
        let page = ChecklistPage::from_json(raw).unwrap();
        assert_eq!(page.items[0].answer, Answer::Unanswered);
        assert_eq!(page.items[1].answer, Answer::NotApplicable);
        assert_eq!(page.items[1].section.as_deref(), Some("Software"));
        assert!(page.has_success_banner());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ChecklistPage::from_json("{").unwrap_err();
        assert!(matches!(err, PageError::Json(_)));
    }

    #[test]
    fn banner_from_query_parameters() {
        assert_eq!(
            SaveBanner::from_query(Some("1"), Some("a.xlsx")),
            Some(SaveBanner::Saved {
                file: "a.xlsx".into()
            })
        );
        assert_eq!(
            SaveBanner::from_query(Some("0"), Some("a.xlsx")),
            Some(SaveBanner::SavedLocally {
                file: "a.xlsx".into()
            })
        );
        assert_eq!(SaveBanner::from_query(Some("error"), None), Some(SaveBanner::Failed));
        assert_eq!(SaveBanner::from_query(None, Some("a.xlsx")), None);
        assert!(!SaveBanner::Failed.is_success());
    }
}
