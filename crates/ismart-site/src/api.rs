//! Server functions

use leptos::*;
use std::collections::HashMap;

/// Submit one of the site's forms. Resolves to the form's success message
/// after the simulated network delay.
#[server(SubmitForm, "/api")]
pub async fn submit_form(
    form: String,
    values: HashMap<String, String>,
) -> Result<String, ServerFnError> {
    use crate::config::SiteConfig;
    use ismart_core::submit::SubmissionStub;
    use ismart_core::{FieldValues, FormKind};

    let kind = match form.parse::<FormKind>() {
        Ok(kind) => kind,
        Err(err) => return Err(ServerFnError::ServerError(err.to_string())),
    };

    let stub = SubmissionStub::new(SiteConfig::global().widgets.submit_delay());
    match stub.submit(kind, &FieldValues::from(values)).await {
        Ok(receipt) => Ok(receipt.message),
        Err(err) => Err(ServerFnError::ServerError(err.to_string())),
    }
}
