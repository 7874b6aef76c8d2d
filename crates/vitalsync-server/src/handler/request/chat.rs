//! Conversational AI request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for sending a chat message to the assistant.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
pub struct ChatRequest {
    /// Message text (1-500 characters).
    #[validate(length(min = 1, max = 500))]
    pub message: String,
    /// Conversation session the message belongs to.
    pub session_id: String,
    /// Optional conversation context carried by the client.
    pub context: Option<String>,
    /// Member sending the message.
    #[validate(range(min = 1))]
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request(message: &str) -> ChatRequest {
        ChatRequest {
            message: message.to_owned(),
            session_id: "session-1".to_owned(),
            context: None,
            user_id: 7,
        }
    }

    #[test]
    fn chat_accepts_valid_message() {
        assert!(test_request("How much water should I drink?").validate().is_ok());
    }

    #[test]
    fn chat_rejects_empty_message() {
        let errors = test_request("").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn chat_rejects_overlong_message() {
        let errors = test_request(&"x".repeat(501)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }
}
