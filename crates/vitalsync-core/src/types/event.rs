//! Event sourcing records and runtime settings.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

/// Classification of a recorded domain event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new member registered
    UserRegistered,
    /// Health data arrived from a connected device
    HealthDataSynced,
    /// A member configured their mission goals
    GoalSetup,
    /// A member completed a mission
    MissionCompleted,
    /// The assistant finished analyzing health data
    AiAnalysisCompleted,
    /// A notification was delivered
    NotificationSent,
}

/// One append-only event row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct EventRecord {
    /// Monotonic identifier of the event.
    pub event_id: i64,

    /// Aggregate the event belongs to.
    pub aggregate_id: Uuid,

    /// Classification of the event.
    pub event_type: EventKind,

    /// JSON encoded event payload.
    pub event_data: String,

    /// Member the event concerns, when applicable.
    pub member_serial_number: Option<i64>,

    /// Service that emitted the event.
    pub service_name: String,

    /// Timestamp when the event was appended.
    pub created_at: Timestamp,
}

impl EventRecord {
    /// Creates a new event row with an empty payload.
    pub fn new(
        event_id: i64,
        aggregate_id: Uuid,
        event_type: EventKind,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            event_id,
            aggregate_id,
            event_type,
            event_data: String::from("{}"),
            member_serial_number: None,
            service_name: service_name.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Sets the JSON encoded payload.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.event_data = data.into();
        self
    }

    /// Associates the event with a member.
    pub fn with_member(mut self, member_serial_number: i64) -> Self {
        self.member_serial_number = Some(member_serial_number);
        self
    }
}

/// A runtime configuration entry stored alongside the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SystemSetting {
    /// Identifier of the entry.
    pub config_id: i64,

    /// Unique setting key.
    pub config_key: String,

    /// Raw setting value.
    pub config_value: String,

    /// Optional description of what the setting controls.
    pub description: Option<String>,

    /// Timestamp when the entry was created.
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_serialization() {
        let serialized = serde_json::to_string(&EventKind::AiAnalysisCompleted).unwrap();
        assert_eq!(serialized, "\"ai_analysis_completed\"");

        let deserialized: EventKind = serde_json::from_str("\"user_registered\"").unwrap();
        assert_eq!(deserialized, EventKind::UserRegistered);
    }

    #[test]
    fn test_event_record_builders() {
        let aggregate = Uuid::new_v4();
        let event = EventRecord::new(1, aggregate, EventKind::MissionCompleted, "vitalsync")
            .with_data(r#"{"mission_id":7}"#)
            .with_member(1001);

        assert_eq!(event.aggregate_id, aggregate);
        assert_eq!(event.member_serial_number, Some(1001));
        assert!(event.event_data.contains("mission_id"));
    }

    #[test]
    fn test_event_record_serialization() {
        let event = EventRecord::new(1, Uuid::new_v4(), EventKind::GoalSetup, "vitalsync");
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["event_type"], "goal_setup");
        assert_eq!(value["service_name"], "vitalsync");
        assert!(value["member_serial_number"].is_null());
    }
}
