//! Per-form state: values, inline errors and submission status

use super::{validate, FieldValues, Rule};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Succeeded(message) | SubmitStatus::Failed(message) => Some(message),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }
}

/// Values and inline errors for one mounted form.
///
/// Editing a field drops that field's error straight away; the full error
/// map is only rebuilt by [`FormState::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    values: FieldValues,
    defaults: FieldValues,
    errors: BTreeMap<String, String>,
    status: SubmitStatus,
}

impl FormState {
    pub fn new(defaults: FieldValues) -> Self {
        Self {
            values: defaults.clone(),
            defaults,
            errors: BTreeMap::new(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Record a keystroke/change. Clears the field's error and any stale
    /// failure banner.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(field);
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Recompute every error. Returns whether the form is valid.
    pub fn validate(&mut self, rules: &[Rule]) -> bool {
        self.errors = validate(&self.values, rules).into_errors();
        self.errors.is_empty()
    }

    /// Validate and, if clean, enter `Submitting` and hand back the payload.
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self, rules: &[Rule]) -> Option<FieldValues> {
        if self.is_submitting() || !self.validate(rules) {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.values.clone())
    }

    /// Settle an in-flight submission. Success clears the form.
    pub fn finish_submit(&mut self, result: Result<String, String>) {
        match result {
            Ok(message) => {
                self.values = self.defaults.clone();
                self.errors.clear();
                self.status = SubmitStatus::Succeeded(message);
            }
            Err(message) => {
                self.status = SubmitStatus::Failed(message);
            }
        }
    }

    /// Back to the freshly mounted state
    pub fn reset(&mut self) {
        *self = Self::new(self.defaults.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Format;

    fn rules() -> Vec<Rule> {
        vec![
            Rule::required("email", "Email is required")
                .format(Format::Email, "Please enter a valid email address"),
            Rule::required("message", "Message is required"),
        ]
    }

    #[test]
    fn test_edit_clears_field_error_optimistically() {
        let mut form = FormState::default();
        assert!(!form.validate(&rules()));
        assert_eq!(form.errors().len(), 2);

        form.set("email", "not-an-email");
        assert_eq!(form.error("email"), None);
        assert_eq!(form.error("message"), Some("Message is required"));

        assert!(!form.validate(&rules()));
        assert_eq!(form.error("email"), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_submit_lifecycle_clears_on_success() {
        let defaults = FieldValues::new().with("topic", "general");
        let mut form = FormState::new(defaults);
        form.set("email", "sam@example.com");
        form.set("message", "Where is my order?");

        let payload = form.begin_submit(&rules()).expect("form is valid");
        assert_eq!(payload.get("topic"), "general");
        assert!(form.is_submitting());
        assert!(form.begin_submit(&rules()).is_none());

        form.finish_submit(Ok("Thanks!".into()));
        assert_eq!(form.status().message(), Some("Thanks!"));
        assert_eq!(form.value("email"), "");
        assert_eq!(form.value("topic"), "general");
    }

    #[test]
    fn test_invalid_submit_does_not_start() {
        let mut form = FormState::default();
        assert!(form.begin_submit(&rules()).is_none());
        assert_eq!(form.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_values_until_edit() {
        let mut form = FormState::default();
        form.set("email", "sam@example.com");
        form.set("message", "hi");
        form.begin_submit(&rules());
        form.finish_submit(Err("Something went wrong".into()));
        assert_eq!(form.value("message"), "hi");
        assert!(matches!(form.status(), SubmitStatus::Failed(_)));

        form.set("message", "hello");
        assert_eq!(form.status(), &SubmitStatus::Idle);
        form.reset();
        assert_eq!(form.value("message"), "");
    }
}
