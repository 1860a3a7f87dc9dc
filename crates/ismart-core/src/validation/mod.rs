//! Declarative form validation
//!
//! A form is a flat map of field id → string value. Rules are evaluated
//! wholesale on each pass and produce at most one message per field.

mod forms;
mod state;

pub use forms::{
    FormKind, CONTACT_SUBJECTS, ILLEGAL_CONTENT_CATEGORIES, ILLEGAL_CONTENT_QUERY, ORDER_HELP_QUERY,
    REPORT_QUERIES,
};
pub use state::{FormState, SubmitStatus};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("url pattern compiles"));

/// Field values of one form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Missing fields read as empty
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).trim().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.0.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for FieldValues {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Shape a non-empty value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Email,
    Url,
    MinLength(usize),
}

impl Format {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Format::Email => EMAIL_PATTERN.is_match(value),
            Format::Url => URL_PATTERN.is_match(value),
            Format::MinLength(min) => value.chars().count() >= *min,
        }
    }
}

/// Gate that decides whether a rule applies to the current values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Equals { field: String, value: String },
    NotEquals { field: String, value: String },
    Filled(String),
}

impl Condition {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn holds(&self, values: &FieldValues) -> bool {
        match self {
            Condition::Equals { field, value } => values.get(field) == value,
            Condition::NotEquals { field, value } => values.get(field) != value,
            Condition::Filled(field) => !values.is_blank(field),
        }
    }
}

/// One field's validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub field: String,
    pub required: bool,
    pub message: String,
    pub format: Option<(Format, String)>,
    pub condition: Option<Condition>,
}

impl Rule {
    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            required: true,
            message: message.into(),
            format: None,
            condition: None,
        }
    }

    /// Empty is fine; a format, if declared, still applies to non-empty input.
    pub fn optional(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            required: false,
            message: String::new(),
            format: None,
            condition: None,
        }
    }

    pub fn format(mut self, format: Format, message: impl Into<String>) -> Self {
        self.format = Some((format, message.into()));
        self
    }

    /// Only apply this rule while `condition` holds
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Error message for this rule against `values`, if it fails
    pub fn check(&self, values: &FieldValues) -> Option<&str> {
        if let Some(condition) = &self.condition {
            if !condition.holds(values) {
                return None;
            }
        }

        let value = values.get(&self.field).trim();
        if value.is_empty() {
            return self.required.then_some(self.message.as_str());
        }

        match &self.format {
            Some((format, message)) if !format.accepts(value) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Result of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    errors: BTreeMap<String, String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

/// Run every rule against `values`. The first failing rule for a field wins.
pub fn validate(values: &FieldValues, rules: &[Rule]) -> ValidationOutcome {
    let mut errors = BTreeMap::new();
    for rule in rules {
        if errors.contains_key(&rule.field) {
            continue;
        }
        if let Some(message) = rule.check(values) {
            errors.insert(rule.field.clone(), message.to_string());
        }
    }
    ValidationOutcome { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_and_subject() -> Vec<Rule> {
        vec![
            Rule::required("email", "Email is required"),
            Rule::required("subject", "Subject is required"),
        ]
    }

    #[test]
    fn test_missing_required_field() {
        let values = FieldValues::new().with("email", "").with("subject", "x");
        let outcome = validate(&values, &email_and_subject());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.errors().len(), 1);
        assert_eq!(outcome.error("email"), Some("Email is required"));
        assert_eq!(outcome.error("subject"), None);
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let values = FieldValues::new().with("email", "   ").with("subject", "x");
        assert!(!validate(&values, &email_and_subject()).is_valid());
    }

    #[test]
    fn test_conditional_rule_skipped() {
        let rules = vec![Rule::required("category", "Select a category")
            .when(Condition::equals("selectedQuery", "Notice of illegal content"))];

        let values = FieldValues::new()
            .with("selectedQuery", "Help with an order")
            .with("category", "");
        assert!(validate(&values, &rules).is_valid());

        let values = values.with("selectedQuery", "Notice of illegal content");
        assert_eq!(
            validate(&values, &rules).error("category"),
            Some("Select a category")
        );
    }

    #[test]
    fn test_email_format() {
        let rules = vec![Rule::required("email", "Email is required")
            .format(Format::Email, "Please enter a valid email address")];

        for bad in ["plainaddress", "a@b", "a b@c.com", "@x.io"] {
            let values = FieldValues::new().with("email", bad);
            assert_eq!(
                validate(&values, &rules).error("email"),
                Some("Please enter a valid email address"),
                "{bad} should be rejected"
            );
        }

        let values = FieldValues::new().with("email", " jane@ismart.store ");
        assert!(validate(&values, &rules).is_valid());
    }

    #[test]
    fn test_optional_field_format_only_when_filled() {
        let rules = vec![Rule::optional("website").format(Format::Url, "Enter a full link")];
        assert!(validate(&FieldValues::new(), &rules).is_valid());

        let values = FieldValues::new().with("website", "ismart.store");
        assert_eq!(validate(&values, &rules).error("website"), Some("Enter a full link"));

        let values = FieldValues::new().with("website", "https://ismart.store/p/12");
        assert!(validate(&values, &rules).is_valid());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let rules = vec![
            Rule::required("password", "Password is required")
                .format(Format::MinLength(8), "Use at least 8 characters"),
            Rule::required("password", "ignored"),
        ];
        let values = FieldValues::new().with("password", "short");
        assert_eq!(
            validate(&values, &rules).error("password"),
            Some("Use at least 8 characters")
        );
    }

    #[test]
    fn test_filled_and_not_equals_conditions() {
        let values = FieldValues::new().with("orderNumber", "ISM-1001");
        assert!(Condition::Filled("orderNumber".into()).holds(&values));
        assert!(!Condition::Filled("email".into()).holds(&values));
        let not_other = Condition::NotEquals {
            field: "selectedQuery".into(),
            value: "Other".into(),
        };
        assert!(not_other.holds(&values));
    }

    #[test]
    fn test_field_values_from_map() {
        let mut map = HashMap::new();
        map.insert("email".to_string(), "a@b.co".to_string());
        let values = FieldValues::from(map);
        assert_eq!(values.get("email"), "a@b.co");
        assert_eq!(values.get("missing"), "");
        assert_eq!(values.into_map().len(), 1);
    }
}
