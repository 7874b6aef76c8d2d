//! Goal and mission response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vitalsync_core::types::MissionGoal;

/// Confirmation returned after a member finishes goal setup.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GoalSetupResponse {
    /// Identifier of the created goal.
    pub goal_id: i64,
    /// Missions the member selected during setup.
    pub selected_missions: Vec<MissionGoal>,
    /// Human-readable confirmation message.
    pub message: String,
    /// Moment the setup completed.
    pub setup_completed_at: Timestamp,
}

/// Snapshot of a member's active daily missions.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ActiveMissionsResponse {
    /// Missions scheduled for today.
    pub daily_missions: Vec<MissionGoal>,
    /// Total number of active missions.
    pub total_missions: u32,
    /// How many of today's missions are already completed.
    pub today_completed_count: u32,
    /// Fraction of today's missions completed, in `0.0..=1.0`.
    pub completion_rate: f64,
}

impl ActiveMissionsResponse {
    /// Builds a snapshot from the member's active missions.
    ///
    /// The completion rate is clamped to `1.0`; an empty mission list
    /// yields a rate of `0.0`.
    pub fn from_goals(daily_missions: Vec<MissionGoal>, today_completed_count: u32) -> Self {
        let total_missions = daily_missions.len() as u32;
        let completion_rate = if total_missions == 0 {
            0.0
        } else {
            (f64::from(today_completed_count) / f64::from(total_missions)).min(1.0)
        };

        Self {
            daily_missions,
            total_missions,
            today_completed_count,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::Date;

    use super::*;

    fn test_goal(mission_id: i64) -> MissionGoal {
        MissionGoal::new(mission_id, 7, Date::constant(2025, 6, 1), "Walk 10k steps")
    }

    #[test]
    fn active_missions_from_goals() {
        let response =
            ActiveMissionsResponse::from_goals(vec![test_goal(1), test_goal(2), test_goal(3)], 2);

        assert_eq!(response.total_missions, 3);
        assert_eq!(response.today_completed_count, 2);
        assert!((response.completion_rate - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn active_missions_empty_list() {
        let response = ActiveMissionsResponse::from_goals(Vec::new(), 0);

        assert_eq!(response.total_missions, 0);
        assert_eq!(response.completion_rate, 0.0);
    }

    #[test]
    fn active_missions_rate_is_clamped() {
        let response = ActiveMissionsResponse::from_goals(vec![test_goal(1)], 5);

        assert_eq!(response.completion_rate, 1.0);
    }

    #[test]
    fn goal_setup_serialization() {
        let response = GoalSetupResponse {
            goal_id: 42,
            selected_missions: vec![test_goal(1), test_goal(2)],
            message: "Goal setup completed".to_owned(),
            setup_completed_at: Timestamp::UNIX_EPOCH,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["goal_id"], serde_json::json!(42));
        assert_eq!(json["selected_missions"].as_array().unwrap().len(), 2);
        assert_eq!(
            json["selected_missions"][0]["mission_id"],
            serde_json::json!(1)
        );
    }
}
