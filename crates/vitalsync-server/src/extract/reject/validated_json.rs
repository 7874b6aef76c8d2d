//! Validated JSON extractor with automatic validation.
//!
//! This module provides [`ValidateJson`], an enhanced JSON extractor that
//! combines deserialization with automatic validation using the `validator`
//! crate. Validation failures surface as the uniform 422 error envelope with
//! per-field details.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::Json;
use crate::handler::response::ValidationErrorDetail;
use crate::handler::{Error, ErrorKind};

/// Enhanced JSON extractor with automatic validation using the `validator` crate.
///
/// This extractor combines JSON deserialization with automatic validation,
/// providing comprehensive error messages for validation failures. It works
/// with any type that implements both `serde::Deserialize` and `validator::Validate`.
///
/// Also see [`Json`]
///
/// [`Json`]: axum::extract::Json
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Creates a new instance of [`ValidateJson`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First, deserialize the JSON
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;

        // Then validate the deserialized data
        data.validate()?;
        Ok(Self::new(data))
    }
}

/// Formats length validation errors with appropriate units and context.
fn format_length_error(
    field: &str,
    params: &HashMap<Cow<'static, str>, serde_json::Value>,
) -> String {
    if params.is_empty() {
        return format!("Field '{}' has invalid length", field);
    }

    // Whether the constraint counts characters or collection items
    let unit = if field.contains("name") || field.contains("message") || field.contains("text") {
        "characters"
    } else {
        "items"
    };

    match (params.get("min"), params.get("max")) {
        (Some(min), Some(max)) => {
            let min_val = extract_number_from_json(min).unwrap_or(0.0) as u64;
            let max_val = extract_number_from_json(max).unwrap_or(0.0) as u64;
            format!(
                "Field '{}' must be between {} and {} {} long",
                field, min_val, max_val, unit
            )
        }
        (Some(min), None) => {
            let min_val = extract_number_from_json(min).unwrap_or(0.0) as u64;
            format!(
                "Field '{}' must be at least {} {} long",
                field, min_val, unit
            )
        }
        (None, Some(max)) => {
            let max_val = extract_number_from_json(max).unwrap_or(0.0) as u64;
            format!(
                "Field '{}' must be at most {} {} long",
                field, max_val, unit
            )
        }
        _ => format!("Field '{}' has invalid length", field),
    }
}

/// Formats range validation errors with appropriate context and units.
fn format_range_error(
    field: &str,
    params: &HashMap<Cow<'static, str>, serde_json::Value>,
) -> String {
    if params.is_empty() {
        return format!("Field '{}' is out of valid range", field);
    }

    match (params.get("min"), params.get("max")) {
        (Some(min), Some(max)) => {
            let min_val = extract_number_from_json(min).unwrap_or(0.0);
            let max_val = extract_number_from_json(max).unwrap_or(0.0);
            format!(
                "Field '{}' must be between {} and {}",
                field, min_val, max_val
            )
        }
        (Some(min), None) => {
            let min_val = extract_number_from_json(min).unwrap_or(0.0);
            format!("Field '{}' must be at least {}", field, min_val)
        }
        (None, Some(max)) => {
            let max_val = extract_number_from_json(max).unwrap_or(0.0);
            format!("Field '{}' must be at most {}", field, max_val)
        }
        _ => format!("Field '{}' is out of valid range", field),
    }
}

/// Extracts a number from a JSON value, supporting both integers and floats.
fn extract_number_from_json(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Formats validation errors with context-aware, user-friendly messages.
fn format_validation_error(field: &str, error: &validator::ValidationError) -> String {
    // Use custom message if provided, otherwise generate appropriate message
    if let Some(custom_message) = &error.message {
        return format!("Field '{}': {}", field, custom_message);
    }

    let message = match error.code.as_ref() {
        "required" => "is required and cannot be empty".to_string(),
        "length" => return format_length_error(field, &error.params),
        "email" => "must be a valid email address (e.g., user@example.com)".to_string(),
        "range" => return format_range_error(field, &error.params),
        "url" => "must be a valid URL (e.g., https://example.com)".to_string(),
        "must_match" => {
            let other_field = error
                .params
                .get("other")
                .and_then(|v| v.as_str())
                .unwrap_or("other field");
            format!("must match '{}'", other_field)
        }
        "regex" => "format is invalid - please check the required pattern".to_string(),
        "contains" => {
            let needle = error
                .params
                .get("needle")
                .and_then(|v| v.as_str())
                .unwrap_or("required text");
            format!("must contain '{}'", needle)
        }
        "does_not_contain" => {
            let needle = error
                .params
                .get("needle")
                .and_then(|v| v.as_str())
                .unwrap_or("forbidden text");
            format!("must not contain '{}'", needle)
        }
        code => format!("failed validation: {}", code),
    };

    format!("Field '{}' {}", field, message)
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let mut error_details = Vec::new();
        let mut error_messages = Vec::new();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = format_validation_error(&field, error);

                let mut params = HashMap::new();
                for (key, value) in &error.params {
                    params.insert(key.to_string(), value.clone());
                }

                error_details.push(ValidationErrorDetail {
                    field: field.to_string(),
                    code: error.code.to_string(),
                    message: message.clone(),
                    params: if params.is_empty() {
                        None
                    } else {
                        Some(params)
                    },
                });
                error_messages.push(message);
            }
        }

        // Show validation details in the user-facing message
        let user_message = match error_messages.as_slice() {
            [] => "Validation failed".to_string(),
            [single_error] => single_error.clone(),
            multiple => multiple.join(". "),
        };

        tracing::warn!(
            errors = ?errors.field_errors(),
            "Request validation failed"
        );

        ErrorKind::Validation
            .with_message(user_message)
            .with_details(serde_json::json!({ "errors": error_details }))
    }
}

impl<T> aide::OperationInput for ValidateJson<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        Json::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        Json::<T>::inferred_early_responses(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use validator::ValidationError;

    use super::*;
    use crate::handler::ErrorKind;

    fn length_error(min: u64, max: u64) -> ValidationError {
        let mut error = ValidationError::new("length");
        error.add_param(Cow::Borrowed("min"), &min);
        error.add_param(Cow::Borrowed("max"), &max);
        error
    }

    #[test]
    fn length_error_message_includes_bounds() {
        let error = length_error(1, 100);
        let message = format_validation_error("name", &error);

        assert!(message.contains("between 1 and 100"));
        assert!(message.contains("characters"));
    }

    #[test]
    fn range_error_message_includes_minimum() {
        let mut error = ValidationError::new("range");
        error.add_param(Cow::Borrowed("min"), &1);

        let message = format_validation_error("user_id", &error);
        assert!(message.contains("at least 1"));
    }

    #[test]
    fn custom_message_takes_precedence() {
        let mut error = ValidationError::new("length");
        error.message = Some(Cow::Borrowed("must not be blank"));

        let message = format_validation_error("name", &error);
        assert_eq!(message, "Field 'name': must not be blank");
    }

    #[test]
    fn validation_errors_convert_to_validation_kind() {
        let mut errors = ValidationErrors::new();
        errors.add("name", length_error(1, 100));

        let error = Error::from(errors);
        assert_eq!(error.kind(), ErrorKind::Validation);

        let details = error.details().unwrap();
        let entries = details["errors"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["field"], serde_json::json!("name"));
        assert!(!entries[0]["message"].as_str().unwrap().is_empty());
    }
}
