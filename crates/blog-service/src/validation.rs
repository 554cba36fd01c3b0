use blog_core::error::AppError;
use validator::{Validate, ValidationErrors};

/// Message for any missing required field.
pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "Please fill required fields";

/// Fail with the required-fields message when any value is blank.
pub(crate) fn require_filled(values: &[&str]) -> Result<(), AppError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(AppError::validation(REQUIRED_FIELDS_MESSAGE));
    }
    Ok(())
}

/// Run derived validation rules, surfacing the first message.
pub(crate) fn run_rules<T: Validate>(input: &T) -> Result<(), AppError> {
    input
        .validate()
        .map_err(|errors| AppError::validation(first_message(&errors)))
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}
