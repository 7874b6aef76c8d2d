//! User account request types.

use jiff::civil::Date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for registering a new member.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
pub struct UserRegistrationRequest {
    /// Display name (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Birth date used for age-adjusted recommendations.
    pub birth_date: Date,
    /// Free-form occupation label.
    pub occupation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request(name: &str) -> UserRegistrationRequest {
        UserRegistrationRequest {
            name: name.to_owned(),
            birth_date: Date::constant(1990, 6, 15),
            occupation: "nurse".to_owned(),
        }
    }

    #[test]
    fn registration_accepts_valid_name() {
        assert!(test_request("Alex").validate().is_ok());
    }

    #[test]
    fn registration_rejects_empty_name() {
        let errors = test_request("").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn registration_rejects_overlong_name() {
        let errors = test_request(&"x".repeat(101)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn registration_deserializes_birth_date() {
        let request: UserRegistrationRequest = serde_json::from_value(serde_json::json!({
            "name": "Alex",
            "birth_date": "1990-06-15",
            "occupation": "nurse",
        }))
        .unwrap();

        assert_eq!(request.birth_date, Date::constant(1990, 6, 15));
    }
}
