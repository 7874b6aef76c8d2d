//! Goal and mission request types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for selecting the missions a member wants to pursue.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
pub struct MissionSelectionRequest {
    /// Member making the selection.
    #[validate(range(min = 1))]
    pub user_id: i64,
    /// Identifiers of the selected missions (at least one).
    #[validate(length(min = 1))]
    pub selected_mission_ids: Vec<i64>,
}

/// Request payload for recording a mission completion.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
pub struct MissionCompleteRequest {
    /// Member reporting the completion.
    #[validate(range(min = 1))]
    pub user_id: i64,
    /// Whether the mission was completed or undone.
    pub completed: bool,
    /// Moment the completion happened.
    pub completed_at: Timestamp,
    /// Optional free-form note from the member.
    pub notes: Option<String>,
}
