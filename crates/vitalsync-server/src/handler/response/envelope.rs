//! Uniform success envelope for API responses.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Uniform envelope wrapping every successful API payload.
///
/// Pairs the payload with a human-readable message and the moment the
/// response was produced, so clients can treat all endpoints uniformly.
/// `data` is serialized as `null` when no payload applies.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(rename = "{T}Envelope")]
pub struct ApiResponse<T> {
    /// Always `true` for success payloads.
    pub success: bool,
    /// Human-readable summary of the outcome.
    pub message: String,
    /// Payload produced by the handler.
    pub data: Option<T>,
    /// Moment the response was produced.
    pub timestamp: Timestamp,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in a success envelope with a fresh timestamp.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: Timestamp::now(),
        }
    }

    /// Creates a success envelope carrying a message but no payload.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            timestamp: Timestamp::now(),
        }
    }

    /// Maps the payload from one type to another, keeping the envelope.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_is_stamped() {
        let before = Timestamp::now();
        let response = ApiResponse::success(42u32, "Retrieved");
        let after = Timestamp::now();

        assert!(response.success);
        assert_eq!(response.message, "Retrieved");
        assert_eq!(response.data, Some(42));
        assert!(response.timestamp >= before);
        assert!(response.timestamp <= after);
    }

    #[test]
    fn message_only_envelope_serializes_null_data() {
        let response = ApiResponse::<u32>::message_only("Accepted");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::Value::Null);
    }

    #[test]
    fn envelope_round_trip_preserves_fields() {
        let response = ApiResponse::success(vec![1i64, 2, 3], "Listed");

        let json = serde_json::to_string(&response).unwrap();
        let parsed: ApiResponse<Vec<i64>> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, response);
    }

    #[test]
    fn envelope_timestamp_keeps_subsecond_precision() {
        let response = ApiResponse::success((), "Checked");

        let json = serde_json::to_value(&response).unwrap();
        let parsed: Timestamp = serde_json::from_value(json["timestamp"].clone()).unwrap();

        assert_eq!(parsed.as_nanosecond(), response.timestamp.as_nanosecond());
    }

    #[test]
    fn envelope_map_keeps_metadata() {
        let response = ApiResponse::success(21u32, "Computed").map(|n| n * 2);

        assert!(response.success);
        assert_eq!(response.message, "Computed");
        assert_eq!(response.data, Some(42));
    }
}
