//! NRR bracket solving
//!
//! Given a reachable desired position, derive the inclusive interval of
//! revised NRR values that lands the caller's team exactly there. Bounds are
//! explicit options rather than sentinel magnitudes: `None` means unbounded
//! in that direction. The margin below/above a rival's NRR is one thousandth,
//! the granularity at which the statistic is published.

use crate::error::ImpactError;
use scorebook::{standings_order, Team};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Separation from a rival's NRR needed to rank on the intended side of it.
pub const NRR_MARGIN: f64 = 0.001;

/// Tolerance absorbing three-decimal truncation artifacts when a recomputed
/// NRR is compared against a bracket edge.
pub const NRR_TOLERANCE: f64 = 1e-9;

/// Inclusive NRR interval consistent with the desired position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NrrBracket {
    /// `None` = no lower bound.
    pub min_required: Option<f64>,
    /// `None` = no upper bound.
    pub max_allowed: Option<f64>,
}

impl NrrBracket {
    /// Whether a recomputed NRR lies inside the bracket, tolerating float
    /// noise at both edges.
    pub fn contains(&self, nrr: f64) -> bool {
        self.clears_floor(nrr) && self.clears_ceiling(nrr)
    }

    /// Upper-edge half of the membership test.
    pub(crate) fn clears_ceiling(&self, nrr: f64) -> bool {
        self.max_allowed.map_or(true, |max| nrr <= max + NRR_TOLERANCE)
    }

    /// Lower-edge half of the membership test.
    pub(crate) fn clears_floor(&self, nrr: f64) -> bool {
        self.min_required.map_or(true, |min| nrr >= min - NRR_TOLERANCE)
    }
}

/// Derive the NRR bracket for `desired_position`.
///
/// `rivals` is every team but the caller's, with the opponent's loss counted
/// in its match counters but its NRR left at the snapshot value (the
/// hypothetical outcome that would change it is the very thing being solved
/// for). Callers must have established points-feasibility first.
pub fn solve(
    rivals: &[Team],
    points_after_win: u32,
    desired_position: usize,
) -> Result<NrrBracket, ImpactError> {
    let mut table: Vec<&Team> = rivals.iter().collect();
    table.sort_by(|a, b| standings_order(a, b));

    let above = table.iter().filter(|t| t.points > points_after_win).count();
    let level: Vec<&&Team> =
        table.iter().filter(|t| t.points == points_after_win).collect();

    // How many level-points rivals must finish above us. Guaranteed to be in
    // [0, level.len()] by the feasibility check; a violation here means the
    // caller skipped it, and the bracket it implies is contradictory.
    let level_above = match desired_position.checked_sub(above + 1) {
        Some(n) if n <= level.len() => n,
        _ => {
            return Err(ImpactError::InvalidBracket {
                min_required: f64::INFINITY,
                max_allowed: f64::NEG_INFINITY,
            })
        }
    };

    let mut max_allowed = if level_above >= 1 {
        // Stay under the slowest rival that must remain above us.
        Some(level[level_above - 1].nrr - NRR_MARGIN)
    } else {
        None
    };

    let min_required = if level_above < level.len() {
        // Beat the fastest rival that must remain below us.
        Some(level[level_above].nrr + NRR_MARGIN)
    } else {
        // Nobody level stays below; clear the best of the lower-points pack.
        let floor = table
            .iter()
            .filter(|t| t.points < points_after_win)
            .map(|t| t.nrr)
            .fold(f64::NEG_INFINITY, f64::max);
        Some(if floor.is_finite() { floor + NRR_MARGIN } else { NRR_MARGIN })
    };

    if desired_position == 1 {
        // Top of the table has no ceiling.
        max_allowed = None;
    } else if max_allowed.is_none() {
        // No level-points ceiling; bound by whoever sits immediately above
        // the desired slot.
        if let Some(team_above) = table.get(desired_position - 2) {
            max_allowed = Some(team_above.nrr - NRR_MARGIN);
        }
    }

    if let (Some(min), Some(max)) = (min_required, max_allowed) {
        if min >= max {
            return Err(ImpactError::InvalidBracket { min_required: min, max_allowed: max });
        }
    }

    debug!(desired_position, ?min_required, ?max_allowed, "solved NRR bracket");
    Ok(NrrBracket { min_required, max_allowed })
}
