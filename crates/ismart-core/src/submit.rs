//! Simulated form submission
//!
//! Stands in for the network round trip: re-validates the payload, waits the
//! configured delay and resolves with the form's success message. This is
//! the single place a real endpoint call would go.

use crate::validation::{validate, FieldValues, FormKind};
use crate::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub reference: Uuid,
    pub form: FormKind,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SubmissionStub {
    delay: Duration,
}

impl SubmissionStub {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn submit(&self, form: FormKind, values: &FieldValues) -> CoreResult<SubmitReceipt> {
        let outcome = validate(values, &form.rules());
        if !outcome.is_valid() {
            tracing::warn!(%form, fields = ?outcome.errors().keys().collect::<Vec<_>>(), "rejected invalid submission");
            return Err(CoreError::Validation(outcome));
        }

        tokio::time::sleep(self.delay).await;

        let receipt = SubmitReceipt {
            reference: Uuid::new_v4(),
            form,
            received_at: Utc::now(),
            message: form.success_message().to_string(),
        };
        tracing::info!(%form, reference = %receipt.reference, "form submission accepted");
        Ok(receipt)
    }
}

impl Default for SubmissionStub {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_SUBMIT_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newsletter(email: &str) -> FieldValues {
        FieldValues::new().with("email", email)
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_then_succeeds() {
        let stub = SubmissionStub::default();
        let started = tokio::time::Instant::now();
        let receipt = stub
            .submit(FormKind::Newsletter, &newsletter("hi@ismart.store"))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1200));
        assert_eq!(receipt.form, FormKind::Newsletter);
        assert_eq!(receipt.message, FormKind::Newsletter.success_message());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_rejects_invalid_without_waiting() {
        let stub = SubmissionStub::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        let err = stub
            .submit(FormKind::Newsletter, &newsletter("nope"))
            .await
            .unwrap_err();
        assert!(started.elapsed() < Duration::from_millis(1500));
        match err {
            CoreError::Validation(outcome) => {
                assert_eq!(outcome.error("email"), Some("Please enter a valid email address"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
