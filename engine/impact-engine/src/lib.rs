//! Impact engine - answers "what opponent results put us at position N?"
//!
//! The engine works over an immutable standings snapshot. Assuming the
//! caller's team wins the match in question, it checks whether the desired
//! league position is reachable on points at all, derives the net-run-rate
//! interval consistent with that position, and searches the space of
//! concrete match outcomes (runs conceded while defending a total, or balls
//! consumed while chasing one) for the sub-range that realizes the interval.
//! Everything is synchronous and side-effect-free; a request either completes
//! or fails with a typed error.

mod bracket;
mod engine;
mod error;
mod feasibility;
mod search;
mod types;

#[cfg(test)]
mod tests;

pub use bracket::{NrrBracket, NRR_MARGIN};
pub use engine::compute_match_impact;
pub use error::{ImpactError, Result};
pub use feasibility::PositionAnalysis;
pub use search::OutcomeReport;
pub use types::{MatchImpactResult, MatchPhase, MatchRequest};
