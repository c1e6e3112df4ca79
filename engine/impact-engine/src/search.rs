//! Outcome search - which concrete match results realize the NRR bracket?
//!
//! Both phases search a bounded integer domain in which the revised NRR is
//! monotone non-increasing: runs conceded while defending a total, or balls
//! consumed while chasing one. The feasible set is therefore a contiguous
//! interval whose edges are located by binary search over the in-bracket
//! predicate. Every NRR reported back is recomputed from the literal
//! candidate outcome through the run-rate engine, never read off an
//! analytic estimate, so results always honor the truncation rule.

use crate::bracket::NrrBracket;
use crate::error::{ImpactError, Result};
use crate::types::MatchRequest;
use scorebook::{revised_nrr, Overs, Team, BALLS_PER_OVER};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Extra balls around the algebraic chase window, covering over/ball
/// quantization and the truncation of compared NRR values.
const WINDOW_SLACK: u32 = 2;

/// The outcome search's verdict.
///
/// An unattainable result is an answer, not an error: `impossible: true`
/// with the reachable NRR extremes as diagnostics. Otherwise the phase's
/// range fields carry the qualifying window and `revised_nrr_min`/`max` the
/// NRR recomputed at its two boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub impossible: bool,
    pub message: String,
    /// Lowest qualifying opponent score (defending a total).
    pub restrict_runs_min: Option<u32>,
    /// Highest qualifying opponent score (defending a total).
    pub restrict_runs_max: Option<u32>,
    /// Earliest qualifying finish in display overs (chasing).
    pub min_overs: Option<f64>,
    /// Latest qualifying finish in display overs (chasing).
    pub max_overs: Option<f64>,
    /// NRR at the worst returned boundary, or the worst reachable NRR.
    pub revised_nrr_min: f64,
    /// NRR at the best returned boundary, or the best reachable NRR.
    pub revised_nrr_max: f64,
    /// Whether finishing level on the target also lands in bracket (chasing).
    pub tie_qualifies: Option<bool>,
}

impl OutcomeReport {
    fn unattainable(message: String, nrr_best: f64, nrr_worst: f64) -> Self {
        Self {
            impossible: true,
            message,
            restrict_runs_min: None,
            restrict_runs_max: None,
            min_overs: None,
            max_overs: None,
            revised_nrr_min: nrr_worst,
            revised_nrr_max: nrr_best,
            tie_qualifies: None,
        }
    }
}

/// Defending a total: the opponent's reply ranges over `[0, runs_value - 1]`.
pub fn search_setting_total(
    team: &Team,
    request: &MatchRequest,
    bracket: &NrrBracket,
) -> Result<OutcomeReport> {
    let overs = request.match_overs as f64;
    let nrr_at = |conceded: u32| -> Result<f64> {
        Ok(revised_nrr(team, request.runs_value, overs, conceded, overs)?)
    };

    if request.runs_value == 0 {
        // No reply can be below zero; the win premise cannot hold.
        let nrr = nrr_at(0)?;
        return Ok(OutcomeReport::unattainable(
            format!(
                "{} cannot be beaten defending a total of 0; no opponent score qualifies",
                request.opponent_team
            ),
            nrr,
            nrr,
        ));
    }

    let max_conceded = request.runs_value - 1;
    // NRR falls as the opponent scores more, so the qualifying scores are
    // contiguous: the low edge clears the ceiling, the high edge the floor.
    let first = match bracket.max_allowed {
        Some(_) => lower_bound(0, max_conceded, |r| Ok(bracket.clears_ceiling(nrr_at(r)?)))?,
        None => Some(0),
    };
    let last = match bracket.min_required {
        Some(_) => upper_bound(0, max_conceded, |r| Ok(bracket.clears_floor(nrr_at(r)?)))?,
        None => Some(max_conceded),
    };

    debug!(?first, ?last, max_conceded, "defend-total search window");

    match (first, last) {
        (Some(lo), Some(hi)) if lo <= hi => {
            let nrr_best = nrr_at(lo)?;
            let nrr_worst = nrr_at(hi)?;
            Ok(OutcomeReport {
                impossible: false,
                message: format!(
                    "Restrict {} to between {} and {} runs; the revised NRR lies between {:.3} and {:.3}",
                    request.opponent_team, lo, hi, nrr_worst, nrr_best
                ),
                restrict_runs_min: Some(lo),
                restrict_runs_max: Some(hi),
                min_overs: None,
                max_overs: None,
                revised_nrr_min: nrr_worst,
                revised_nrr_max: nrr_best,
                tie_qualifies: None,
            })
        }
        _ => {
            let nrr_best = nrr_at(0)?;
            let nrr_worst = nrr_at(max_conceded)?;
            Ok(OutcomeReport::unattainable(
                format!(
                    "No score by {} gives the required NRR; this match can only move it between {:.3} and {:.3}",
                    request.opponent_team, nrr_worst, nrr_best
                ),
                nrr_best,
                nrr_worst,
            ))
        }
    }
}

/// Chasing a target: the win needs `runs_value + 1` runs and the search
/// variable is the ball count consumed getting there.
pub fn search_chasing(
    team: &Team,
    request: &MatchRequest,
    bracket: &NrrBracket,
) -> Result<OutcomeReport> {
    let target = request.runs_value;
    let win_runs = target + 1;
    let match_overs = request.match_overs as f64;
    let min_balls = win_runs.div_ceil(BALLS_PER_OVER);
    let max_balls = request.match_overs * BALLS_PER_OVER;

    let nrr_at = |balls: u32| -> Result<f64> {
        Ok(revised_nrr(
            team,
            win_runs,
            Overs::from_balls(balls).as_decimal(),
            target,
            match_overs,
        )?)
    };

    if min_balls > max_balls {
        let nrr = nrr_at(max_balls)?;
        return Ok(OutcomeReport::unattainable(
            format!(
                "A target of {} cannot be run down inside {} overs",
                target, request.match_overs
            ),
            nrr,
            nrr,
        ));
    }

    // Finishing level on the target over the full overs is a distinguished
    // outcome, reported alongside the win window when its NRR qualifies.
    let tie_nrr = revised_nrr(team, target, match_overs, target, match_overs)?;
    let tie_qualifies = bracket.contains(tie_nrr);

    // Closed-form window: solve for_total/(for_overs + x) - concede_rate = edge
    // for the decimal overs x consumed, per bracket edge. Exact up to the
    // overs/balls quantization, which the slack and the refinement absorb.
    let concede_rate = (team.against_runs + target) as f64
        / (team.against_overs.as_decimal() + match_overs);
    let estimate = |edge: f64| -> Option<u32> {
        let denom = edge + concede_rate;
        if denom <= 0.0 {
            return None;
        }
        let overs_consumed =
            (team.for_runs + win_runs) as f64 / denom - team.for_overs.as_decimal();
        if overs_consumed <= 0.0 {
            Some(0)
        } else {
            Some((overs_consumed * BALLS_PER_OVER as f64).floor() as u32)
        }
    };

    let window_lo = match bracket.max_allowed {
        // A ceiling below the NRR floor of this chase: no finish gets under it.
        Some(edge) => match estimate(edge) {
            Some(balls) => balls.saturating_sub(WINDOW_SLACK).clamp(min_balls, max_balls),
            None => return chase_failure(request, tie_nrr, tie_qualifies, nrr_at, min_balls, max_balls),
        },
        None => min_balls,
    };
    let window_hi = match bracket.min_required {
        Some(edge) => estimate(edge)
            .map(|balls| (balls + WINDOW_SLACK).clamp(min_balls, max_balls))
            .unwrap_or(max_balls),
        None => max_balls,
    };

    debug!(window_lo, window_hi, min_balls, max_balls, "chase search window");

    let first = match bracket.max_allowed {
        Some(_) => {
            lower_bound(window_lo, window_hi, |b| Ok(bracket.clears_ceiling(nrr_at(b)?)))?
        }
        None => Some(window_lo),
    };
    let last = match bracket.min_required {
        Some(_) => {
            upper_bound(window_lo, window_hi, |b| Ok(bracket.clears_floor(nrr_at(b)?)))?
        }
        None => Some(window_hi),
    };

    match (first, last) {
        (Some(lo), Some(hi)) if lo <= hi => {
            let nrr_fast = nrr_at(lo)?;
            let nrr_slow = nrr_at(hi)?;
            let lo_overs = Overs::from_balls(lo);
            let hi_overs = Overs::from_balls(hi);
            let mut message = format!(
                "Chase {} runs between {} and {} overs; the revised NRR lies between {:.3} and {:.3}",
                win_runs, lo_overs, hi_overs, nrr_slow, nrr_fast
            );
            if tie_qualifies {
                message.push_str(&format!(
                    " (a tie over the full {} overs also qualifies at {:.3})",
                    request.match_overs, tie_nrr
                ));
            }
            Ok(OutcomeReport {
                impossible: false,
                message,
                restrict_runs_min: None,
                restrict_runs_max: None,
                min_overs: Some(lo_overs.display()),
                max_overs: Some(hi_overs.display()),
                revised_nrr_min: nrr_slow,
                revised_nrr_max: nrr_fast,
                tie_qualifies: Some(tie_qualifies),
            })
        }
        _ => chase_failure(request, tie_nrr, tie_qualifies, nrr_at, min_balls, max_balls),
    }
}

/// No winning finish qualifies: either fall back to the tie, or report the
/// reachable NRR extremes as an unattainable outcome.
fn chase_failure<F>(
    request: &MatchRequest,
    tie_nrr: f64,
    tie_qualifies: bool,
    nrr_at: F,
    min_balls: u32,
    max_balls: u32,
) -> Result<OutcomeReport>
where
    F: Fn(u32) -> Result<f64>,
{
    if tie_qualifies {
        return Ok(OutcomeReport {
            impossible: false,
            message: format!(
                "No winning finish qualifies; only a tie (scoring {} in the full {} overs, NRR {:.3}) reaches the position",
                request.runs_value, request.match_overs, tie_nrr
            ),
            restrict_runs_min: None,
            restrict_runs_max: None,
            min_overs: None,
            max_overs: None,
            revised_nrr_min: tie_nrr,
            revised_nrr_max: tie_nrr,
            tie_qualifies: Some(true),
        });
    }
    let nrr_best = nrr_at(min_balls)?;
    let nrr_worst = nrr_at(max_balls)?;
    let mut report = OutcomeReport::unattainable(
        format!(
            "No finishing time gives the required NRR; this chase can only move it between {:.3} and {:.3}",
            nrr_worst, nrr_best
        ),
        nrr_best,
        nrr_worst,
    );
    report.tie_qualifies = Some(false);
    Ok(report)
}

/// Smallest `v` in `[lo, hi]` for which `holds` is true, given `holds` is
/// monotone false-then-true over the range. `None` if it never holds.
fn lower_bound<F>(mut lo: u32, mut hi: u32, mut holds: F) -> Result<Option<u32>>
where
    F: FnMut(u32) -> Result<bool>,
{
    if lo > hi || !holds(hi)? {
        return Ok(None);
    }
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if holds(mid)? {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Ok(Some(lo))
}

/// Largest `v` in `[lo, hi]` for which `holds` is true, given `holds` is
/// monotone true-then-false over the range. `None` if it never holds.
fn upper_bound<F>(mut lo: u32, mut hi: u32, mut holds: F) -> Result<Option<u32>>
where
    F: FnMut(u32) -> Result<bool>,
{
    if lo > hi || !holds(lo)? {
        return Ok(None);
    }
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if holds(mid)? {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Ok(Some(lo))
}
