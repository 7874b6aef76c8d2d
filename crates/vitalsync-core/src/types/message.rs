//! Chat messaging and notification classification types.
//!
//! The assistant converses with members through short chat exchanges and
//! scheduled notifications. This module provides the stored message record
//! and the enums classifying senders, message intents, and notification
//! cadence.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Role of a message participant in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from a human member
    User,
    /// Message from the assistant
    Assistant,
    /// System message providing instructions or context
    System,
}

/// Intent classification of a stored chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Member asked the assistant a question
    Question,
    /// Assistant answered a question
    Answer,
    /// One-way informational message
    Notification,
    /// Message celebrating an achievement
    Celebration,
    /// Message nudging the member to keep going
    Encouragement,
}

/// Originator of a message or notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SenderKind {
    /// Sent by a human member
    User,
    /// Sent by the assistant
    Ai,
    /// Sent by the platform itself
    System,
}

/// Cadence and purpose of a scheduled notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Morning encouragement sent every day
    DailyEncouragement,
    /// Digest of the past week
    WeeklySummary,
    /// Celebration when a milestone is reached
    MilestoneCelebration,
    /// Reminder to log health data
    HealthReminder,
    /// Reminder about outstanding missions
    MissionReminder,
}

/// Intensity of encouragement messaging a member receives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EncouragementLevel {
    /// Occasional light nudges
    Low,
    /// Regular reminders
    #[default]
    Medium,
    /// Frequent, direct encouragement
    High,
    /// Maximum cadence for members who opted in
    Intensive,
}

/// A stored chat exchange between a member and the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ChatMessage {
    /// Identifier of this message.
    pub message_id: i64,

    /// Serial number of the member in the conversation.
    pub member_serial_number: i64,

    /// Intent classification of the message.
    pub message_type: MessageKind,

    /// Text the member sent.
    pub message_content: String,

    /// Assistant reply, once generated.
    pub response_content: Option<String>,

    /// Timestamp when the message was stored.
    pub created_at: Timestamp,
}

impl ChatMessage {
    /// Creates a new stored message without a reply.
    pub fn new(
        message_id: i64,
        member_serial_number: i64,
        message_type: MessageKind,
        message_content: impl Into<String>,
    ) -> Self {
        Self {
            message_id,
            member_serial_number,
            message_type,
            message_content: message_content.into(),
            response_content: None,
            created_at: Timestamp::now(),
        }
    }

    /// Attaches the assistant reply.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response_content = Some(response.into());
        self
    }

    /// Check if the assistant already replied
    #[must_use]
    pub fn has_response(&self) -> bool {
        self.response_content.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&SenderKind::Ai).unwrap(), "\"ai\"");
    }

    #[test]
    fn test_notification_kind_serialization() {
        let serialized = serde_json::to_string(&NotificationKind::MilestoneCelebration).unwrap();
        assert_eq!(serialized, "\"milestone_celebration\"");

        let deserialized: NotificationKind =
            serde_json::from_str("\"daily_encouragement\"").unwrap();
        assert_eq!(deserialized, NotificationKind::DailyEncouragement);
    }

    #[test]
    fn test_encouragement_default() {
        assert_eq!(EncouragementLevel::default(), EncouragementLevel::Medium);
    }

    #[test]
    fn test_message_kind_from_str() {
        use std::str::FromStr;

        assert_eq!(
            MessageKind::from_str("celebration").unwrap(),
            MessageKind::Celebration
        );
        assert!(MessageKind::from_str("unknown").is_err());
    }

    #[test]
    fn test_chat_message_response() {
        let message = ChatMessage::new(1, 1001, MessageKind::Question, "How did I sleep?");
        assert!(!message.has_response());

        let answered = message.with_response("You averaged seven hours this week.");
        assert!(answered.has_response());
    }
}
