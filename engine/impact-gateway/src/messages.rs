//! Wire messages for the ImpactGateway

use chrono::{DateTime, Utc};
use impact_engine::{MatchImpactResult, MatchPhase, MatchRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Incoming match impact question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchImpactRequest {
    pub your_team: String,
    pub opponent_team: String,
    /// Scheduled overs per innings.
    pub match_overs: u32,
    /// Desired 1-based league position after the match.
    pub desired_position: usize,
    /// `setting_total` or `chasing`.
    pub phase: MatchPhase,
    /// Runs scored (setting a total) or the target to chase.
    pub runs_value: u32,
}

impl From<MatchImpactRequest> for MatchRequest {
    fn from(request: MatchImpactRequest) -> Self {
        MatchRequest {
            your_team: request.your_team,
            opponent_team: request.opponent_team,
            match_overs: request.match_overs,
            desired_position: request.desired_position,
            phase: request.phase,
            runs_value: request.runs_value,
        }
    }
}

/// Successful answer envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchImpactResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub result: MatchImpactResult,
}

/// Error envelope with a stable machine-readable code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_phase_uses_snake_case() {
        let json = r#"{
            "your_team": "Rajasthan Royals",
            "opponent_team": "Mumbai Indians",
            "match_overs": 20,
            "desired_position": 3,
            "phase": "setting_total",
            "runs_value": 170
        }"#;
        let request: MatchImpactRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.phase, MatchPhase::SettingTotal);

        let core: MatchRequest = request.into();
        assert_eq!(core.desired_position, 3);
        assert_eq!(core.runs_value, 170);
    }

    #[test]
    fn missing_fields_fail_deserialization() {
        let json = r#"{"your_team": "Rajasthan Royals"}"#;
        assert!(serde_json::from_str::<MatchImpactRequest>(json).is_err());
    }
}
