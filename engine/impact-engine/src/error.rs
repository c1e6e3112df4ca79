//! Error types for the impact engine

use crate::feasibility::PositionAnalysis;
use scorebook::ScoreError;
use thiserror::Error;

/// Result type for impact engine operations
pub type Result<T> = std::result::Result<T, ImpactError>;

/// Errors that can occur while computing a match impact
///
/// An unattainable outcome is deliberately NOT represented here: "no match
/// result achieves the desired NRR" is a valid business answer and comes back
/// as a structured [`crate::OutcomeReport`] with `impossible: true`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    #[error("unknown team: {0}")]
    UnknownTeam(String),

    #[error(
        "position {desired_position} cannot be reached after a win: \
         reachable positions are {} to {}",
        .analysis.best_possible_position,
        .analysis.worst_possible_position
    )]
    InfeasiblePosition { desired_position: usize, analysis: PositionAnalysis },

    #[error(
        "invalid NRR bracket: minimum required {min_required:.3} is not below \
         maximum allowed {max_allowed:.3}"
    )]
    InvalidBracket { min_required: f64, max_allowed: f64 },

    #[error(transparent)]
    Score(#[from] ScoreError),
}
