//! Mission goal and completion tracking types.
//!
//! Missions are small recurring health tasks a member commits to, such as a
//! daily step target or a hydration reminder. This module provides the goal
//! records, the completion history, and the classification enums used by
//! mission recommendations.

use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Lifecycle state of a mission goal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    /// Mission is currently being pursued
    #[default]
    Active,
    /// Mission reached its target and finished
    Completed,
    /// Mission is temporarily suspended by the member
    Paused,
    /// Mission was abandoned before completion
    Cancelled,
}

/// Recurrence window a goal is evaluated over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Goal resets every day
    #[default]
    Daily,
    /// Goal is evaluated per calendar week
    Weekly,
    /// Goal is evaluated per calendar month
    Monthly,
}

/// Difficulty grading used when recommending missions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    /// Suitable for members new to the habit
    #[default]
    Beginner,
    /// Requires an established routine
    Intermediate,
    /// Demanding missions for experienced members
    Advanced,
}

/// Health area a mission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MissionCategory {
    /// Physical activity missions
    Exercise,
    /// Diet and eating habit missions
    Nutrition,
    /// Mindfulness and mood missions
    MentalHealth,
    /// Water intake missions
    Hydration,
    /// Sleep schedule missions
    Sleep,
    /// Stress reduction missions
    StressManagement,
}

impl MissionStatus {
    /// Check if the mission is still being pursued
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if the mission reached a terminal state
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// A member's configured mission goal for a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct MissionGoal {
    /// Identifier of the mission definition this goal tracks.
    pub mission_id: i64,

    /// Serial number of the member the goal belongs to.
    pub member_serial_number: i64,

    /// Day the goal applies to.
    pub performance_date: Date,

    /// Short mission title shown to the member.
    pub mission_name: String,

    /// Longer mission description.
    pub mission_description: String,

    /// Number of completions required to meet the goal for the day.
    pub daily_target_count: u32,

    /// Whether the goal still counts towards daily progress.
    pub is_active: bool,

    /// Timestamp when the goal was created.
    pub created_at: Timestamp,
}

impl MissionGoal {
    /// Creates a new active mission goal with a target of one completion.
    pub fn new(
        mission_id: i64,
        member_serial_number: i64,
        performance_date: Date,
        mission_name: impl Into<String>,
    ) -> Self {
        Self {
            mission_id,
            member_serial_number,
            performance_date,
            mission_name: mission_name.into(),
            mission_description: String::new(),
            daily_target_count: 1,
            is_active: true,
            created_at: Timestamp::now(),
        }
    }

    /// Sets the mission description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.mission_description = description.into();
        self
    }

    /// Sets the daily completion target.
    pub fn with_daily_target(mut self, count: u32) -> Self {
        self.daily_target_count = count;
        self
    }

    /// Removes the goal from daily progress without deleting it.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

/// Completion record for a mission goal on a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct MissionCompletion {
    /// Identifier of this completion record.
    pub completion_id: i64,

    /// Identifier of the mission the record belongs to.
    pub mission_id: i64,

    /// Serial number of the member who completed the mission.
    pub member_serial_number: i64,

    /// Day the completions were counted for.
    pub completion_date: Date,

    /// Target count the goal required that day.
    pub daily_target_count: u32,

    /// Completions the member actually logged that day.
    pub daily_completed_count: u32,

    /// Timestamp when the record was written.
    pub created_at: Timestamp,
}

impl MissionCompletion {
    /// Creates a new completion record with zero logged completions.
    pub fn new(
        completion_id: i64,
        mission_id: i64,
        member_serial_number: i64,
        completion_date: Date,
        daily_target_count: u32,
    ) -> Self {
        Self {
            completion_id,
            mission_id,
            member_serial_number,
            completion_date,
            daily_target_count,
            daily_completed_count: 0,
            created_at: Timestamp::now(),
        }
    }

    /// Sets the number of completions logged for the day.
    pub fn with_completed_count(mut self, count: u32) -> Self {
        self.daily_completed_count = count;
        self
    }

    /// Returns true once the logged completions reach the daily target.
    #[must_use]
    pub fn is_target_met(&self) -> bool {
        self.daily_completed_count >= self.daily_target_count
    }

    /// Fraction of the daily target that was completed, capped at 1.0.
    ///
    /// A record with a zero target counts as fully completed.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.daily_target_count == 0 {
            return 1.0;
        }

        let rate = f64::from(self.daily_completed_count) / f64::from(self.daily_target_count);
        rate.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> Date {
        Date::constant(2025, 6, 1)
    }

    #[test]
    fn test_mission_status_predicates() {
        assert!(MissionStatus::Active.is_active());
        assert!(!MissionStatus::Active.is_finished());

        assert!(MissionStatus::Completed.is_finished());
        assert!(MissionStatus::Cancelled.is_finished());
        assert!(!MissionStatus::Paused.is_finished());
    }

    #[test]
    fn test_category_serialization() {
        let category = MissionCategory::StressManagement;
        let serialized = serde_json::to_string(&category).unwrap();
        assert_eq!(serialized, "\"stress_management\"");

        let deserialized: MissionCategory = serde_json::from_str("\"mental_health\"").unwrap();
        assert_eq!(deserialized, MissionCategory::MentalHealth);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(MissionCategory::Exercise.to_string(), "exercise");
        assert_eq!(
            MissionCategory::StressManagement.to_string(),
            "stress_management"
        );
    }

    #[test]
    fn test_goal_defaults() {
        let goal = MissionGoal::new(7, 1001, test_date(), "Drink water");

        assert!(goal.is_active);
        assert_eq!(goal.daily_target_count, 1);
        assert!(goal.mission_description.is_empty());
    }

    #[test]
    fn test_goal_builders() {
        let mut goal = MissionGoal::new(7, 1001, test_date(), "Drink water")
            .with_description("Eight glasses spread over the day")
            .with_daily_target(8);

        assert_eq!(goal.daily_target_count, 8);
        assert!(!goal.mission_description.is_empty());

        goal.deactivate();
        assert!(!goal.is_active);
    }

    #[test]
    fn test_completion_target_met() {
        let completion =
            MissionCompletion::new(1, 7, 1001, test_date(), 3).with_completed_count(3);

        assert!(completion.is_target_met());
        assert!((completion.completion_rate() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_completion_rate_partial() {
        let completion =
            MissionCompletion::new(1, 7, 1001, test_date(), 4).with_completed_count(1);

        assert!(!completion.is_target_met());
        assert!((completion.completion_rate() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_completion_rate_caps_overachievement() {
        let completion =
            MissionCompletion::new(1, 7, 1001, test_date(), 2).with_completed_count(5);

        assert!((completion.completion_rate() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_completion_rate_zero_target() {
        let completion = MissionCompletion::new(1, 7, 1001, test_date(), 0);

        assert!(completion.is_target_met());
        assert!((completion.completion_rate() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_goal_serialization() {
        let goal = MissionGoal::new(7, 1001, test_date(), "Walk 6000 steps");
        let value = serde_json::to_value(&goal).unwrap();

        assert_eq!(value["mission_id"], 7);
        assert_eq!(value["member_serial_number"], 1001);
        assert_eq!(value["performance_date"], "2025-06-01");
        assert_eq!(value["is_active"], true);
    }
}
