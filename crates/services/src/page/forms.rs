use std::time::Duration;

use checklist_core::validation::{FieldRules, FieldStatus};
use tracing::debug;

use crate::debounce::Debouncer;
use crate::timers::Scheduler;

/// Warning shown when a validated form is submitted with invalid fields.
pub const FORM_INCOMPLETE_MESSAGE: &str = "Por favor, completa todos los campos requeridos";

/// Debounced re-validation of a field after typing pauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revalidate(pub String);

#[derive(Debug, Clone)]
struct FormField {
    name: String,
    rules: FieldRules,
    value: String,
    status: FieldStatus,
    debouncer: Debouncer,
}

impl FormField {
    /// Only fields carrying at least one rule are validated.
    fn is_checked(&self) -> bool {
        self.rules != FieldRules::text()
    }

    fn validate(&mut self) -> &FieldStatus {
        self.status = FieldStatus::from_check(self.rules.check(&self.value));
        &self.status
    }
}

/// Live validation of a form marked for validation.
#[derive(Debug, Clone)]
pub struct FormValidator {
    fields: Vec<FormField>,
    debounce: Duration,
}

impl FormValidator {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            fields: Vec::new(),
            debounce,
        }
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.push(FormField {
            name: name.into(),
            rules,
            value: String::new(),
            status: FieldStatus::Pristine,
            debouncer: Debouncer::new(self.debounce),
        });
        self
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    fn find(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Stores the typed value and schedules a validation once typing pauses.
    pub fn on_input<S>(&mut self, name: &str, value: impl Into<String>, scheduler: &mut S)
    where
        S: Scheduler<Revalidate> + ?Sized,
    {
        let Some(field) = self.find_mut(name) else {
            return;
        };
        field.value = value.into();
        if field.is_checked() {
            field
                .debouncer
                .trigger(scheduler, Revalidate(field.name.clone()));
        }
    }

    /// Focus left the field: validate now.
    pub fn on_blur(&mut self, name: &str) -> Option<FieldStatus> {
        let field = self.find_mut(name)?;
        if !field.is_checked() {
            return None;
        }
        Some(field.validate().clone())
    }

    pub fn handle(&mut self, event: Revalidate) -> Option<FieldStatus> {
        let field = self.find_mut(&event.0)?;
        field.debouncer.settle();
        Some(field.validate().clone())
    }

    /// Validates every checked field. Returns false when any of them fails;
    /// the caller cancels the submission and warns with
    /// [`FORM_INCOMPLETE_MESSAGE`].
    pub fn submit(&mut self) -> bool {
        let mut valid = true;
        for field in self.fields.iter_mut().filter(|field| field.is_checked()) {
            if field.validate().is_invalid() {
                valid = false;
            }
        }
        debug!(valid, "validated form submitted");
        valid
    }

    #[must_use]
    pub fn status(&self, name: &str) -> FieldStatus {
        self.find(name)
            .map(|field| field.status.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.find(name).map_or("", |field| field.value.as_str())
    }

    #[must_use]
    pub fn rules(&self, name: &str) -> Option<&FieldRules> {
        self.find(name).map(|field| &field.rules)
    }
}

#[cfg(test)]
mod tests {
    use checklist_core::validation::FieldError;

    use super::*;
    use crate::timers::TimerQueue;

    fn validator() -> FormValidator {
        FormValidator::new(Duration::from_millis(300))
            .field("password", FieldRules::text().required().min_length(8))
            .field("email", FieldRules::email())
            .field("notes", FieldRules::text())
    }

    #[test]
    fn typing_validates_after_pause() {
        let mut queue = TimerQueue::new();
        let mut form = validator();
        form.on_input("password", "a", &mut queue);
        form.on_input("password", "ab", &mut queue);
        assert_eq!(queue.pending_count(), 1);
        assert_eq!(form.status("password"), FieldStatus::Pristine);

        let fired = queue.advance(Duration::from_millis(300));
        assert_eq!(fired, vec![Revalidate("password".into())]);
        for event in fired {
            form.handle(event);
        }
        assert_eq!(
            form.status("password"),
            FieldStatus::Invalid(FieldError::TooShort { min: 8 })
        );
    }

    #[test]
    fn unchecked_fields_never_validate() {
        let mut queue = TimerQueue::new();
        let mut form = validator();
        form.on_input("notes", "hola", &mut queue);
        assert!(queue.is_idle());
        assert_eq!(form.on_blur("notes"), None);
        assert_eq!(form.value("notes"), "hola");
    }

    #[test]
    fn submit_checks_every_ruled_field() {
        let mut queue = TimerQueue::new();
        let mut form = validator();
        form.on_input("password", "secreto-largo", &mut queue);
        form.on_input("email", "no-es-email", &mut queue);
        assert!(!form.submit());
        assert!(form.status("email").is_invalid());
        assert_eq!(form.status("password"), FieldStatus::Valid);

        form.on_input("email", "", &mut queue);
        assert!(form.submit());
    }
}
