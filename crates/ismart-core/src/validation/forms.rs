//! Rule sets for the storefront's forms

use super::{Condition, FieldValues, Format, Rule};
use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Report query that switches on the illegal-content fields
pub const ILLEGAL_CONTENT_QUERY: &str = "Notice of illegal content";

/// Report query that requires an order number
pub const ORDER_HELP_QUERY: &str = "Help with an order";

pub const REPORT_QUERIES: &[&str] = &[
    ILLEGAL_CONTENT_QUERY,
    ORDER_HELP_QUERY,
    "Product information is incorrect",
    "Something else",
];

pub const ILLEGAL_CONTENT_CATEGORIES: &[&str] = &[
    "Intellectual property infringement",
    "Counterfeit or stolen goods",
    "Unsafe or recalled product",
    "Misleading product listing",
    "Hateful or abusive content",
    "Other illegal content",
];

pub const CONTACT_SUBJECTS: &[&str] = &[
    "Order status",
    "Returns and refunds",
    "Warranty claim",
    "Trade-in",
    "Business enquiries",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Report,
    Newsletter,
    Login,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Report => "report",
            FormKind::Newsletter => "newsletter",
            FormKind::Login => "login",
        }
    }

    pub fn rules(&self) -> Vec<Rule> {
        match self {
            FormKind::Contact => vec![
                Rule::required("name", "Please enter your name"),
                email_rule(),
                Rule::required("subject", "Please choose a subject"),
                Rule::required("message", "Please enter a message")
                    .format(Format::MinLength(10), "Please tell us a little more (10 characters minimum)"),
                Rule::optional("orderNumber"),
            ],
            FormKind::Report => vec![
                Rule::required("selectedQuery", "Please choose what your report is about"),
                Rule::required("name", "Please enter your full name"),
                email_rule(),
                Rule::required("category", "Please select the type of illegal content")
                    .when(Condition::equals("selectedQuery", ILLEGAL_CONTENT_QUERY)),
                Rule::required("contentUrl", "Please provide a link to the content")
                    .format(Format::Url, "Please enter a full link starting with http:// or https://")
                    .when(Condition::equals("selectedQuery", ILLEGAL_CONTENT_QUERY)),
                Rule::required("confirm", "Please confirm the information is accurate")
                    .when(Condition::equals("selectedQuery", ILLEGAL_CONTENT_QUERY)),
                Rule::required("orderNumber", "Please enter your order number")
                    .when(Condition::equals("selectedQuery", ORDER_HELP_QUERY)),
                Rule::required("description", "Please describe the issue")
                    .format(Format::MinLength(20), "Please add a few more details (20 characters minimum)"),
            ],
            FormKind::Newsletter => vec![email_rule()],
            FormKind::Login => vec![
                email_rule(),
                Rule::required("password", "Please enter your password")
                    .format(Format::MinLength(8), "Passwords are at least 8 characters"),
            ],
        }
    }

    /// Field values on mount
    pub fn default_values(&self) -> FieldValues {
        let fields: &[&str] = match self {
            FormKind::Contact => &["name", "email", "subject", "orderNumber", "message"],
            FormKind::Report => &[
                "selectedQuery",
                "name",
                "email",
                "category",
                "contentUrl",
                "orderNumber",
                "description",
                "confirm",
            ],
            FormKind::Newsletter => &["email"],
            FormKind::Login => &["email", "password"],
        };
        fields.iter().map(|field| (*field, "")).collect()
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Contact => "Thanks for reaching out! Our team will reply within one business day.",
            FormKind::Report => "Your report has been received. We review every report within 48 hours.",
            FormKind::Newsletter => "You're subscribed! Look out for our next drop in your inbox.",
            FormKind::Login => "Welcome back!",
        }
    }
}

fn email_rule() -> Rule {
    Rule::required("email", "Please enter your email address")
        .format(Format::Email, "Please enter a valid email address")
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact" => Ok(FormKind::Contact),
            "report" => Ok(FormKind::Report),
            "newsletter" => Ok(FormKind::Newsletter),
            "login" => Ok(FormKind::Login),
            other => Err(CoreError::UnknownForm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    fn report(query: &str) -> FieldValues {
        FormKind::Report
            .default_values()
            .with("selectedQuery", query)
            .with("name", "Alex Doe")
            .with("email", "alex@example.com")
            .with("description", "The listing uses photos copied from our catalogue.")
    }

    #[test]
    fn test_report_general_query_skips_conditional_fields() {
        let outcome = validate(&report("Something else"), &FormKind::Report.rules());
        assert!(outcome.is_valid(), "{:?}", outcome.errors());
    }

    #[test]
    fn test_report_illegal_content_requires_details() {
        let outcome = validate(&report(ILLEGAL_CONTENT_QUERY), &FormKind::Report.rules());
        let fields: Vec<&str> = outcome.errors().keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["category", "confirm", "contentUrl"]);

        let values = report(ILLEGAL_CONTENT_QUERY)
            .with("category", ILLEGAL_CONTENT_CATEGORIES[0])
            .with("contentUrl", "https://ismart.store/listing/42")
            .with("confirm", "true");
        assert!(validate(&values, &FormKind::Report.rules()).is_valid());
    }

    #[test]
    fn test_report_order_help_requires_order_number() {
        let outcome = validate(&report(ORDER_HELP_QUERY), &FormKind::Report.rules());
        assert_eq!(outcome.error("orderNumber"), Some("Please enter your order number"));
        assert_eq!(outcome.errors().len(), 1);
    }

    #[test]
    fn test_login_password_length() {
        let values = FieldValues::new()
            .with("email", "sam@example.com")
            .with("password", "hunter2");
        let outcome = validate(&values, &FormKind::Login.rules());
        assert_eq!(outcome.error("password"), Some("Passwords are at least 8 characters"));
    }

    #[test]
    fn test_newsletter_accepts_valid_email() {
        let values = FieldValues::new().with("email", "news@ismart.store");
        assert!(validate(&values, &FormKind::Newsletter.rules()).is_valid());
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in [FormKind::Contact, FormKind::Report, FormKind::Newsletter, FormKind::Login] {
            assert_eq!(kind.as_str().parse::<FormKind>().unwrap(), kind);
        }
        assert!(matches!("signup".parse::<FormKind>(), Err(CoreError::UnknownForm(_))));
    }
}
