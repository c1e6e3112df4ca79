//! Error types for the scorebook core

use thiserror::Error;

/// Errors raised by the scorebook model and run-rate arithmetic
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("run rate undefined: cumulative overs {overs} is not positive")]
    NonPositiveOvers { overs: f64 },

    #[error("team {name}: matches ({matches}) != won ({won}) + lost ({lost})")]
    MatchCountMismatch { name: String, matches: u32, won: u32, lost: u32 },

    #[error("team {name}: points ({points}) != 2 x won ({won})")]
    PointsMismatch { name: String, points: u32, won: u32 },
}
