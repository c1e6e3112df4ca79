//! Feasibility analysis - can the position be reached on points at all?
//!
//! After the presumed win the caller's team holds `points + 2`. Teams with
//! strictly more points stay above it no matter what the run rates do; teams
//! level on points can fall either side depending on NRR. That pins the
//! reachable positions to a closed interval before any NRR work happens.

use scorebook::Team;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Points-only reachability interval for the desired position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionAnalysis {
    pub achievable: bool,
    /// Best finish if the team out-rates every level-points rival.
    pub best_possible_position: usize,
    /// Worst finish if every level-points rival out-rates the team.
    pub worst_possible_position: usize,
    /// The caller's points after the presumed win.
    pub points_after_win: u32,
    /// Rivals level on points after the win, whose NRRs decide the slot.
    pub level_teams: Vec<String>,
}

/// Classify the desired position against the post-win points interval.
///
/// `rivals` is every other team in the snapshot, with the opponent's match
/// counters already advanced for its presumed loss (a loss moves no points,
/// so only the level/above partition matters here).
pub fn analyze(rivals: &[Team], points_after_win: u32, desired_position: usize) -> PositionAnalysis {
    let teams_above = rivals.iter().filter(|t| t.points > points_after_win).count();
    let level_teams: Vec<String> = rivals
        .iter()
        .filter(|t| t.points == points_after_win)
        .map(|t| t.name.clone())
        .collect();

    let best_possible_position = teams_above + 1;
    let worst_possible_position = teams_above + level_teams.len() + 1;
    let achievable =
        (best_possible_position..=worst_possible_position).contains(&desired_position);

    debug!(
        desired_position,
        best_possible_position, worst_possible_position, achievable, "position analysis"
    );

    PositionAnalysis {
        achievable,
        best_possible_position,
        worst_possible_position,
        points_after_win,
        level_teams,
    }
}
