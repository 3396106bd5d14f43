use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while decoding an answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("unknown answer control value: {0:?}")]
    UnknownControl(String),
}

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// Current answer of a checklist item.
///
/// Each item renders three exclusive controls (`OK`, `N/A`, `PD`); the
/// fourth state is "none of them active". Clicking the item body walks the
/// cycle returned by [`Answer::next`]:
///
/// `Unanswered → Ok → NotApplicable → PartiallyDone → Unanswered`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Answer {
    /// No control active.
    #[default]
    Unanswered,
    /// The check passed.
    #[serde(rename = "OK")]
    Ok,
    /// The check does not apply to this asset.
    #[serde(rename = "N/A")]
    NotApplicable,
    /// The check was only partially done.
    #[serde(rename = "PD")]
    PartiallyDone,
}

impl Answer {
    /// The three answers backed by a selectable control, in render order.
    pub const CONTROLS: [Answer; 3] = [Answer::Ok, Answer::NotApplicable, Answer::PartiallyDone];

    /// Next state of the body-click cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Answer::Unanswered => Answer::Ok,
            Answer::Ok => Answer::NotApplicable,
            Answer::NotApplicable => Answer::PartiallyDone,
            Answer::PartiallyDone => Answer::Unanswered,
        }
    }

    #[must_use]
    pub fn is_answered(self) -> bool {
        !matches!(self, Answer::Unanswered)
    }

    /// Value submitted by the control, `None` for `Unanswered`.
    #[must_use]
    pub fn control_value(self) -> Option<&'static str> {
        match self {
            Answer::Unanswered => None,
            Answer::Ok => Some("OK"),
            Answer::NotApplicable => Some("N/A"),
            Answer::PartiallyDone => Some("PD"),
        }
    }

    /// Decodes a control value (`OK`, `N/A`, `PD`).
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::UnknownControl` for any other value.
    pub fn from_control_value(value: &str) -> Result<Self, AnswerError> {
        match value.trim() {
            "OK" => Ok(Answer::Ok),
            "N/A" => Ok(Answer::NotApplicable),
            "PD" => Ok(Answer::PartiallyDone),
            other => Err(AnswerError::UnknownControl(other.to_string())),
        }
    }

    /// Category used for the "answered" marker of the active control.
    #[must_use]
    pub fn marker(self) -> Option<AnswerMarker> {
        match self {
            Answer::Unanswered => None,
            Answer::Ok => Some(AnswerMarker::Ok),
            Answer::NotApplicable => Some(AnswerMarker::NotApplicable),
            Answer::PartiallyDone => Some(AnswerMarker::PartiallyDone),
        }
    }

    /// Human label of the control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Answer::Unanswered => "Sin responder",
            Answer::Ok => "OK",
            Answer::NotApplicable => "N/A",
            Answer::PartiallyDone => "PD",
        }
    }
}

//
// ─── MARKER ───────────────────────────────────────────────────────────────────
//

/// Visual marker applied to the active control of an answered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerMarker {
    Ok,
    NotApplicable,
    PartiallyDone,
}

impl AnswerMarker {
    /// `data-type` attribute of the control label.
    #[must_use]
    pub fn data_type(self) -> &'static str {
        match self {
            AnswerMarker::Ok => "ok",
            AnswerMarker::NotApplicable => "na",
            AnswerMarker::PartiallyDone => "pd",
        }
    }

    /// Class added to the control label while it is active.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            AnswerMarker::Ok => "checked-ok",
            AnswerMarker::NotApplicable => "checked-na",
            AnswerMarker::PartiallyDone => "checked-pd",
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
