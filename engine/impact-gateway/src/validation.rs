//! Request-shape validation
//!
//! Everything here runs before the engine does; the engine is entitled to
//! assume these checks have passed. Semantic impossibilities that depend on
//! the standings (unknown teams, unreachable positions) are the engine's to
//! report, not the validator's.

use crate::error::{GatewayError, GatewayResult};
use crate::messages::MatchImpactRequest;

/// Validate a request's shape and field ranges.
pub fn validate(request: &MatchImpactRequest) -> GatewayResult<()> {
    if request.your_team.trim().is_empty() || request.opponent_team.trim().is_empty() {
        return Err(GatewayError::InvalidRequest("team names must be non-empty".to_string()));
    }
    if request.your_team == request.opponent_team {
        return Err(GatewayError::InvalidRequest(
            "your_team and opponent_team must be different".to_string(),
        ));
    }
    if request.match_overs == 0 {
        return Err(GatewayError::InvalidRequest("match_overs must be positive".to_string()));
    }
    if request.desired_position == 0 {
        return Err(GatewayError::InvalidRequest(
            "desired_position must be a positive 1-based rank".to_string(),
        ));
    }
    Ok(())
}
