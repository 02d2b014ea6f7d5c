use hub_core::{CoreError, FieldError, ValidationErrors};
use hub_session::Outcome;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Serialize)]
struct InvalidFormResponse<'a> {
    valid: bool,
    errors: &'a [FieldError],
}

/// Split a validation result into field errors or a hard failure.
pub fn field_errors(result: Result<(), CoreError>) -> anyhow::Result<Option<ValidationErrors>> {
    match result {
        Ok(()) => Ok(None),
        Err(CoreError::InvalidForm(errors)) => Ok(Some(errors)),
        Err(other) => Err(other.into()),
    }
}

/// Show the form with its field errors and fail without touching the network.
pub fn reject_form<T>(
    view: &str,
    errors: &ValidationErrors,
    flags: &GlobalFlags,
) -> anyhow::Result<T> {
    if flags.format == OutputFormat::Table {
        println!("{view}");
    } else {
        output(
            &InvalidFormResponse {
                valid: false,
                errors: errors.errors(),
            },
            flags.format,
        )?;
    }
    anyhow::bail!("invalid form: {errors}")
}

/// Unwrap a successful outcome or fail with its message.
///
/// The failure was already reported through the notifier.
pub fn require_success<T>(outcome: Outcome<T>, action: &str) -> anyhow::Result<T> {
    if let Some(message) = outcome.failure_message() {
        anyhow::bail!("{action} failed: {message}");
    }
    outcome
        .into_value()
        .ok_or_else(|| anyhow::anyhow!("{action} failed"))
}
