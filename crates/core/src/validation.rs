use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Input type of a validated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Search,
    Password,
}

impl FieldKind {
    /// Value of the `type` attribute.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Search => "search",
            FieldKind::Password => "password",
        }
    }
}

/// Constraints declared on a form field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldRules {
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
}

impl FieldRules {
    #[must_use]
    pub fn text() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email() -> Self {
        Self {
            kind: FieldKind::Email,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Applies the rules to a raw value. The value is trimmed first.
    ///
    /// Rules are checked in order (required, email, minimum length) and the
    /// first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the `FieldError` to display next to the field.
    pub fn check(&self, raw: &str) -> Result<(), FieldError> {
        let value = raw.trim();
        if value.is_empty() {
            return if self.required {
                Err(FieldError::Required)
            } else {
                Ok(())
            };
        }
        if self.kind == FieldKind::Email && !EMAIL.is_match(value) {
            return Err(FieldError::InvalidEmail);
        }
        if let Some(min) = self.min_length
            && value.chars().count() < min
        {
            return Err(FieldError::TooShort { min });
        }
        Ok(())
    }
}

/// User-correctable validation failure shown inline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Este campo es obligatorio")]
    Required,
    #[error("Email inválido")]
    InvalidEmail,
    #[error("Mínimo {min} caracteres")]
    TooShort { min: usize },
}

/// Visual state of a field after validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Not validated yet.
    #[default]
    Pristine,
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    #[must_use]
    pub fn from_check(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err),
        }
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&FieldError> {
        match self {
            FieldStatus::Invalid(err) => Some(err),
            _ => None,
        }
    }

    /// Border class applied to the input.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            FieldStatus::Pristine => "",
            FieldStatus::Valid => "border-green-500",
            FieldStatus::Invalid(_) => "border-red-500",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_empty_field_fails() {
        let rules = FieldRules::text().required();
        assert_eq!(rules.check("   "), Err(FieldError::Required));
        assert_eq!(rules.check("x"), Ok(()));
    }

    #[test]
    fn optional_empty_field_passes_every_rule() {
        let rules = FieldRules::email().min_length(5);
        assert_eq!(rules.check(""), Ok(()));
    }

    #[test]
    fn email_pattern() {
        let rules = FieldRules::email().required();
        assert_eq!(rules.check("ana@empresa.com"), Ok(()));
        assert_eq!(rules.check("ana@empresa"), Err(FieldError::InvalidEmail));
        assert_eq!(rules.check("ana @empresa.com"), Err(FieldError::InvalidEmail));
        assert_eq!(rules.check("ana@@empresa.com"), Err(FieldError::InvalidEmail));
        assert_eq!(rules.check("  ana@empresa.com  "), Ok(()));
    }

    #[test]
    fn min_length_message_names_the_limit() {
        let rules = FieldRules::text().required().min_length(8);
        let err = rules.check("abc").unwrap_err();
        assert_eq!(err.to_string(), "Mínimo 8 caracteres");
        assert_eq!(rules.check("abcdefgh"), Ok(()));
    }

    #[test]
    fn min_length_counts_characters() {
        let rules = FieldRules::text().min_length(4);
        assert_eq!(rules.check("ñañá"), Ok(()));
    }

    #[test]
    fn first_failing_rule_wins() {
        let rules = FieldRules::email().min_length(20);
        assert_eq!(rules.check("bad"), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn status_classes() {
        assert_eq!(FieldStatus::from_check(Ok(())).class(), "border-green-500");
        let invalid = FieldStatus::from_check(Err(FieldError::Required));
        assert!(invalid.is_invalid());
        assert_eq!(invalid.error(), Some(&FieldError::Required));
        assert_eq!(FieldStatus::Pristine.class(), "");
    }
}
