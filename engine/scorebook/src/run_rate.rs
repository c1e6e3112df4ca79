//! The run-rate engine
//!
//! Net run rate is scoring rate minus conceding rate,
//! `for_runs/for_overs - against_runs/against_overs`, truncated toward zero
//! to three decimal places. [`revised_nrr`] is the single source of truth for
//! the statistic: every component that needs an NRR for a hypothetical match
//! outcome calls it with the literal candidate deltas instead of repeating
//! the formula inline.

use crate::error::ScoreError;
use crate::team::Team;

/// Truncate toward zero to three decimal places: `1.2349 -> 1.234`,
/// `-1.2349 -> -1.234`. Truncation, not rounding, matches how the statistic
/// is published.
pub fn truncate_nrr(value: f64) -> f64 {
    (value * 1000.0).trunc() / 1000.0
}

/// A team's current NRR from its cumulative record.
///
/// A team with no overs faced or bowled has no defined rate; its NRR reads
/// as zero rather than failing, since a fresh table row is a valid snapshot.
pub fn current_nrr(team: &Team) -> f64 {
    let for_overs = team.for_overs.as_decimal();
    let against_overs = team.against_overs.as_decimal();
    if for_overs <= 0.0 || against_overs <= 0.0 {
        return 0.0;
    }
    truncate_nrr(team.for_runs as f64 / for_overs - team.against_runs as f64 / against_overs)
}

/// NRR after hypothetically adding one match's contribution to the record.
///
/// The deltas are the candidate match outcome: runs scored and decimal overs
/// faced on the for side, runs conceded and decimal overs bowled on the
/// against side. Fails if either cumulative overs total is not positive.
pub fn revised_nrr(
    team: &Team,
    for_runs: u32,
    for_overs: f64,
    against_runs: u32,
    against_overs: f64,
) -> Result<f64, ScoreError> {
    let total_for_overs = team.for_overs.as_decimal() + for_overs;
    let total_against_overs = team.against_overs.as_decimal() + against_overs;
    if total_for_overs <= 0.0 {
        return Err(ScoreError::NonPositiveOvers { overs: total_for_overs });
    }
    if total_against_overs <= 0.0 {
        return Err(ScoreError::NonPositiveOvers { overs: total_against_overs });
    }

    let total_for_runs = (team.for_runs + for_runs) as f64;
    let total_against_runs = (team.against_runs + against_runs) as f64;
    Ok(truncate_nrr(total_for_runs / total_for_overs - total_against_runs / total_against_overs))
}
