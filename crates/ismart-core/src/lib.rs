//! ISmart Storefront Core
//!
//! Framework-neutral state logic behind the storefront pages: carousel
//! steppers, category filtering, form validation, accordion state, the
//! static catalog and the route table. Rendering lives in `ismart-site`.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod routes;
#[cfg(feature = "runtime")]
pub mod submit;
pub mod toggle;
pub mod validation;

use thiserror::Error;

pub use carousel::{Autoplay, CyclicStepper, OverflowPolicy, Steppable, WindowedSlider};
pub use catalog::{Card, Visual};
pub use config::WidgetConfig;
pub use filter::{CategoryFilter, Selection, ALL_SENTINEL};
pub use routes::{Breadcrumb, SiteRoute};
pub use toggle::{Accordion, ToggleSet};
pub use validation::{FieldValues, FormKind, FormState, Rule, SubmitStatus, ValidationOutcome};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation failed for {} field(s)", .0.errors().len())]
    Validation(ValidationOutcome),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown form: {0}")]
    UnknownForm(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Fallback shown when a submission fails for a reason the user cannot fix.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_counts_fields() {
        let values = FieldValues::new();
        let outcome = validation::validate(&values, &FormKind::Contact.rules());
        let err = CoreError::Validation(outcome);
        assert_eq!(err.to_string(), "Validation failed for 4 field(s)");
    }

    #[test]
    fn test_config_error_display() {
        let err = CoreError::Config("autoplay interval must be positive".into());
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
