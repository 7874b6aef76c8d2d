use std::borrow::Cow;
use std::collections::HashMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Serialize, Serializer};

/// Validation error details for field-specific errors.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorDetail {
    /// Field name that failed validation
    pub field: String,
    /// Error code for the validation failure
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional parameters related to the validation error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, serde_json::Value>>,
}

/// Uniform error envelope returned by all handlers.
///
/// This struct carries everything needed to serialize an error response:
/// a stable machine-readable error code, a client-safe message, optional
/// structured details, and the HTTP status code. Internal context is kept
/// out of the serialized payload and only surfaces in logs.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ErrorResponse<'a> {
    /// Always `false` for error payloads
    pub success: bool,
    /// Stable machine-readable error code
    pub error_code: Cow<'a, str>,
    /// User-friendly error message safe for client display
    pub message: Cow<'a, str>,
    /// Structured details about the failure (e.g. per-field validation errors)
    pub details: Option<serde_json::Value>,
    /// Moment the error payload was serialized; stamped on the fly when unset
    #[serde(serialize_with = "serialize_timestamp")]
    #[schemars(with = "Timestamp")]
    pub timestamp: Option<Timestamp>,

    /// Internal context for debugging (not exposed to the client)
    #[serde(skip)]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    pub status: StatusCode,
}

/// Serializes the stored timestamp, falling back to the current instant.
fn serialize_timestamp<S>(timestamp: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    timestamp
        .unwrap_or_else(Timestamp::now)
        .serialize(serializer)
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "BAD_REQUEST",
        "Invalid request data.",
        StatusCode::BAD_REQUEST,
    );
    pub const NOT_FOUND: Self =
        Self::new("NOT_FOUND", "Resource not found.", StatusCode::NOT_FOUND);
    pub const VALIDATION_ERROR: Self = Self::new(
        "VALIDATION_ERROR",
        "Request validation failed.",
        StatusCode::UNPROCESSABLE_ENTITY,
    );
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "INTERNAL_SERVER_ERROR",
        "An unexpected error occurred.",
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(error_code: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            success: false,
            error_code: Cow::Borrowed(error_code),
            message: Cow::Borrowed(message),
            details: None,
            timestamp: None,
            context: None,
            status,
        }
    }

    /// Creates a new error response with a custom message.
    /// Appends the new message to the existing message.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        let new_message = message.into();
        let base = self.message.trim_end_matches('.');
        self.message = Cow::Owned(format!("{}. {}", base, new_message));
        self
    }

    /// Attaches context to the error response.
    /// If context already exists, it merges them with a separator.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let new_context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{}; {}", existing, new_context)),
            None => new_context,
        });
        self
    }

    /// Attaches structured details to the error response.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Pins the payload timestamp instead of stamping it at serialization.
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    fn into_response(self) -> Response {
        tracing::warn!(
            status = %self.status,
            error_code = %self.error_code,
            message = %self.message,
            context = ?self.context,
            "HTTP error response"
        );
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_merging_message() {
        let response = ErrorResponse::BAD_REQUEST
            .with_message("Invalid format")
            .with_message("Missing required field");

        assert_eq!(
            &response.message,
            "Invalid request data. Invalid format. Missing required field"
        );
    }

    #[test]
    fn error_response_merging_context() {
        let response = ErrorResponse::INTERNAL_SERVER_ERROR
            .with_context("Memory sampling failed")
            .with_context("Retry attempted 3 times");

        assert_eq!(
            response.context.as_deref(),
            Some("Memory sampling failed; Retry attempted 3 times")
        );
    }

    #[test]
    fn error_response_serialization() {
        let response = ErrorResponse::BAD_REQUEST
            .with_message("Test message")
            .with_context("Test context");

        let json = serde_json::to_value(&response).unwrap();

        // Serialized fields, including a stamped timestamp and a null details
        assert_eq!(json["success"], serde_json::json!(false));
        assert_eq!(json["error_code"], serde_json::json!("BAD_REQUEST"));
        assert!(json["timestamp"].is_string());
        assert!(json["details"].is_null());

        // Skipped fields never reach the wire
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("status"));
        assert!(!object.contains_key("context"));
    }

    #[test]
    fn error_response_pinned_timestamp() {
        let timestamp = Timestamp::UNIX_EPOCH;
        let response = ErrorResponse::NOT_FOUND.with_timestamp(timestamp);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["timestamp"], serde_json::json!("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn error_response_with_details() {
        let details = serde_json::json!({ "errors": [{ "field": "name" }] });
        let response = ErrorResponse::VALIDATION_ERROR.with_details(details);

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(&response.error_code, "VALIDATION_ERROR");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["details"]["errors"][0]["field"], serde_json::json!("name"));
    }
}
