//! Request and result types for the impact engine

use crate::feasibility::PositionAnalysis;
use crate::search::OutcomeReport;
use serde::{Deserialize, Serialize};

/// Which half of the match the caller's team is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// Batting first; `runs_value` is the total already on the board.
    SettingTotal,
    /// Batting second; `runs_value` is the target being chased.
    Chasing,
}

/// A single what-if question about one upcoming (or in-progress) match.
///
/// The transport validator guarantees field presence, a positive
/// `match_overs`, a positive `desired_position`, and distinct team names
/// before this reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub your_team: String,
    pub opponent_team: String,
    /// Scheduled overs per innings.
    pub match_overs: u32,
    /// Desired 1-based league position after the match.
    pub desired_position: usize,
    pub phase: MatchPhase,
    /// Runs scored (setting a total) or the target to chase.
    pub runs_value: u32,
}

/// The full answer assembled by [`crate::compute_match_impact`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchImpactResult {
    /// Echoes the requested phase.
    pub mode: MatchPhase,
    /// The outcome search's verdict, including the impossible case.
    pub answer: OutcomeReport,
    /// 1-based position in the snapshot before the hypothetical win.
    pub current_position: usize,
    pub desired_position: usize,
    /// Lower edge of the NRR bracket; `None` means unbounded below.
    pub required_nrr: Option<f64>,
    /// Upper edge of the NRR bracket; `None` means unbounded above.
    pub max_allowed_nrr: Option<f64>,
    /// Who currently sits in the desired slot among the other teams.
    pub team_at_desired_position: Option<String>,
    pub position_analysis: PositionAnalysis,
}
