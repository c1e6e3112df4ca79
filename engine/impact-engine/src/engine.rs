//! Entry point: orchestrates feasibility, bracket solving, and outcome search

use crate::bracket;
use crate::error::{ImpactError, Result};
use crate::feasibility;
use crate::search;
use crate::types::{MatchImpactResult, MatchPhase, MatchRequest};
use scorebook::{standings_order, Standings, Team, POINTS_PER_WIN};
use tracing::{debug, info};

/// Answer a match-impact question over an immutable standings snapshot.
///
/// The snapshot is never mutated; the hypothetical win lives in derived
/// copies that are dropped when the computation finishes. Identical inputs
/// produce bit-identical results.
pub fn compute_match_impact(
    request: &MatchRequest,
    standings: &Standings,
) -> Result<MatchImpactResult> {
    let team = standings
        .get(&request.your_team)
        .ok_or_else(|| ImpactError::UnknownTeam(request.your_team.clone()))?;
    if !standings.contains(&request.opponent_team) {
        return Err(ImpactError::UnknownTeam(request.opponent_team.clone()));
    }

    let current_position = standings
        .rank_of(&request.your_team)
        .ok_or_else(|| ImpactError::UnknownTeam(request.your_team.clone()))?;
    let points_after_win = team.points + POINTS_PER_WIN;

    info!(
        your_team = %request.your_team,
        opponent = %request.opponent_team,
        desired_position = request.desired_position,
        current_position,
        "computing match impact"
    );

    let rivals = rival_table(standings, &request.your_team, &request.opponent_team);
    let analysis =
        feasibility::analyze(&rivals, points_after_win, request.desired_position);
    if !analysis.achievable {
        return Err(ImpactError::InfeasiblePosition {
            desired_position: request.desired_position,
            analysis,
        });
    }

    let nrr_bracket = bracket::solve(&rivals, points_after_win, request.desired_position)?;
    let answer = match request.phase {
        MatchPhase::SettingTotal => search::search_setting_total(team, request, &nrr_bracket)?,
        MatchPhase::Chasing => search::search_chasing(team, request, &nrr_bracket)?,
    };

    debug!(impossible = answer.impossible, "outcome search finished");

    Ok(MatchImpactResult {
        mode: request.phase,
        answer,
        current_position,
        desired_position: request.desired_position,
        required_nrr: nrr_bracket.min_required,
        max_allowed_nrr: nrr_bracket.max_allowed,
        team_at_desired_position: team_at_position(&rivals, request.desired_position),
        position_analysis: analysis,
    })
}

/// Every team but the caller's, with the opponent's presumed loss applied to
/// its match counters. A loss moves neither points nor (yet) NRR.
fn rival_table(standings: &Standings, your_team: &str, opponent_team: &str) -> Vec<Team> {
    standings
        .teams()
        .filter(|t| t.name != your_team)
        .cloned()
        .map(|mut t| {
            if t.name == opponent_team {
                t.matches += 1;
                t.lost += 1;
            }
            t
        })
        .collect()
}

/// Who currently occupies the desired slot among the rivals.
fn team_at_position(rivals: &[Team], desired_position: usize) -> Option<String> {
    let mut table: Vec<&Team> = rivals.iter().collect();
    table.sort_by(|a, b| standings_order(a, b));
    table.get(desired_position - 1).map(|t| t.name.clone())
}
