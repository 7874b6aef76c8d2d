//! Conversational AI response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vitalsync_core::types::{DifficultyLevel, MessageKind, MissionCategory};

/// Reply produced for a member chat message.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChatResponse {
    /// Assistant reply text.
    pub response: String,
    /// Conversation session this reply belongs to.
    pub session_id: String,
    /// Moment the reply was produced.
    pub timestamp: Timestamp,
    /// Follow-up questions the member may want to ask next.
    pub suggested_questions: Vec<String>,
    /// Classification of the reply.
    pub response_type: MessageKind,
}

/// Narrative health assessment derived from a member's checkup data.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthDiagnosisResponse {
    /// Three-sentence plain-language summary of the assessment.
    pub three_sentence_summary: Vec<String>,
    /// Overall health score in `0..=100`.
    pub health_score: u8,
    /// Coarse risk classification (`low`, `medium`, or `high`).
    pub risk_level: String,
    /// Guidance specific to the member's occupation.
    pub occupation_considerations: String,
    /// Moment the analysis was produced.
    pub analysis_timestamp: Timestamp,
    /// Model confidence in `0.0..=1.0`.
    pub confidence_score: f64,
}

/// A single mission suggested for the member.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecommendedMission {
    /// Stable identifier of the suggested mission.
    pub mission_id: String,
    /// Short mission title.
    pub title: String,
    /// What the mission asks the member to do.
    pub description: String,
    /// Health domain the mission belongs to.
    pub category: MissionCategory,
    /// How demanding the mission is.
    pub difficulty: DifficultyLevel,
    /// Expected health benefit of completing the mission.
    pub health_benefit: String,
    /// Why the mission suits the member's occupation.
    pub occupation_relevance: String,
    /// Estimated time to complete in minutes.
    pub estimated_time_minutes: u32,
}

/// Personalized mission suggestions for a member.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MissionRecommendationResponse {
    /// Suggested missions, strongest match first.
    pub missions: Vec<RecommendedMission>,
    /// Why these missions were chosen.
    pub recommendation_reason: String,
    /// Number of missions suggested.
    pub total_recommended: u32,
}

impl MissionRecommendationResponse {
    /// Builds a recommendation list, deriving the total from the missions.
    pub fn from_missions(missions: Vec<RecommendedMission>, reason: impl Into<String>) -> Self {
        Self {
            total_recommended: missions.len() as u32,
            missions,
            recommendation_reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_mission() -> RecommendedMission {
        RecommendedMission {
            mission_id: "stretch-break".to_owned(),
            title: "Hourly stretch break".to_owned(),
            description: "Stand up and stretch for two minutes every hour".to_owned(),
            category: MissionCategory::Exercise,
            difficulty: DifficultyLevel::Beginner,
            health_benefit: "Reduces back strain from prolonged sitting".to_owned(),
            occupation_relevance: "Desk workers sit for long stretches".to_owned(),
            estimated_time_minutes: 2,
        }
    }

    #[test]
    fn recommendation_totals_match_missions() {
        let response = MissionRecommendationResponse::from_missions(
            vec![test_mission(), test_mission()],
            "Tailored to a sedentary routine",
        );

        assert_eq!(response.total_recommended, 2);
        assert_eq!(response.missions.len(), 2);
    }

    #[test]
    fn chat_response_serialization() {
        let response = ChatResponse {
            response: "Drink water regularly".to_owned(),
            session_id: "session-1".to_owned(),
            timestamp: Timestamp::UNIX_EPOCH,
            suggested_questions: vec!["How much water per day?".to_owned()],
            response_type: MessageKind::Answer,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["response_type"], serde_json::json!("answer"));
        assert_eq!(json["session_id"], serde_json::json!("session-1"));
    }

    #[test]
    fn recommended_mission_serialization() {
        let json = serde_json::to_value(test_mission()).unwrap();

        assert_eq!(json["category"], serde_json::json!("exercise"));
        assert_eq!(json["difficulty"], serde_json::json!("beginner"));
        assert_eq!(json["estimated_time_minutes"], serde_json::json!(2));
    }
}
