//! Crate-level tests for the impact engine
//!
//! Exercises the full `compute_match_impact` pipeline over a realistic
//! five-team table, plus the documented failure scenarios.

use crate::{
    compute_match_impact, ImpactError, MatchPhase, MatchRequest, NRR_MARGIN,
};
use scorebook::{Overs, Standings, Team};

fn team(
    name: &str,
    won: u32,
    lost: u32,
    for_runs: u32,
    for_overs: Overs,
    against_runs: u32,
    against_overs: Overs,
) -> Team {
    let mut t = Team {
        name: name.to_string(),
        matches: won + lost,
        won,
        lost,
        points: 2 * won,
        for_runs,
        against_runs,
        for_overs,
        against_overs,
        nrr: 0.0,
    };
    t.refresh_nrr();
    t
}

/// The league mid-season: CSK 10 pts, RCB and DC 8, RR 6, MI 4.
fn league() -> Standings {
    Standings::from_teams(vec![
        team("Chennai Super Kings", 5, 2, 1130, Overs::new(133, 1), 1071, Overs::new(138, 5)),
        team("Royal Challengers Bangalore", 4, 3, 1217, Overs::whole(140), 1066, Overs::new(131, 4)),
        team("Delhi Capitals", 4, 3, 1085, Overs::whole(126), 1136, Overs::whole(137)),
        team("Rajasthan Royals", 3, 4, 1066, Overs::new(128, 2), 1094, Overs::new(137, 1)),
        team("Mumbai Indians", 2, 6, 1003, Overs::new(155, 2), 1134, Overs::new(138, 1)),
    ])
}

fn request(
    your_team: &str,
    opponent: &str,
    desired_position: usize,
    phase: MatchPhase,
    runs_value: u32,
) -> MatchRequest {
    MatchRequest {
        your_team: your_team.to_string(),
        opponent_team: opponent.to_string(),
        match_overs: 20,
        desired_position,
        phase,
        runs_value,
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

mod defend_total {
    use super::*;

    #[test]
    fn leader_holding_top_spot_gets_the_full_range() {
        // CSK defend 180 and want to stay first: any winning margin keeps
        // them above the 8-point pack on points alone, so every opponent
        // score short of the total qualifies.
        let result = compute_match_impact(
            &request("Chennai Super Kings", "Rajasthan Royals", 1, MatchPhase::SettingTotal, 180),
            &league(),
        )
        .unwrap();

        assert_eq!(result.current_position, 1);
        assert_eq!(result.mode, MatchPhase::SettingTotal);
        assert_eq!(result.max_allowed_nrr, None);
        assert!(close(result.required_nrr.unwrap(), 0.596 + NRR_MARGIN));
        assert_eq!(
            result.team_at_desired_position.as_deref(),
            Some("Royal Challengers Bangalore")
        );

        let answer = &result.answer;
        assert!(!answer.impossible);
        assert_eq!(answer.restrict_runs_min, Some(0));
        assert_eq!(answer.restrict_runs_max, Some(179));
        // Boundary NRRs are literal recomputations, not estimates.
        assert!(close(answer.revised_nrr_max, 1.809));
        assert!(close(answer.revised_nrr_min, 0.682));
        assert!(answer.revised_nrr_max > answer.revised_nrr_min);
    }

    #[test]
    fn small_total_cannot_lift_a_mid_table_side() {
        // RR defend a feeble 30: even a scoreless reply leaves their NRR far
        // short of the 0.597 needed to pass RCB, so the outcome is a
        // structured impossibility, not an error.
        let result = compute_match_impact(
            &request("Rajasthan Royals", "Mumbai Indians", 2, MatchPhase::SettingTotal, 30),
            &league(),
        )
        .unwrap();

        let answer = &result.answer;
        assert!(answer.impossible);
        assert_eq!(answer.restrict_runs_min, None);
        assert_eq!(answer.restrict_runs_max, None);
        // Diagnostics carry the reachable extremes: conceding 0 is the best
        // case, conceding 29 the worst.
        assert!(answer.revised_nrr_max < result.required_nrr.unwrap());
        assert!(answer.revised_nrr_min <= answer.revised_nrr_max);
        assert!(close(answer.revised_nrr_max, 0.428));
        assert!(close(answer.revised_nrr_min, 0.243));
    }

    #[test]
    fn zero_total_is_unwinnable() {
        let result = compute_match_impact(
            &request("Chennai Super Kings", "Mumbai Indians", 1, MatchPhase::SettingTotal, 0),
            &league(),
        )
        .unwrap();
        assert!(result.answer.impossible);
    }
}

mod chase {
    use super::*;

    #[test]
    fn finishing_window_is_reported_in_display_overs() {
        // RR chase 180 wanting second place: they must pass RCB (NRR 0.596)
        // without passing CSK (0.771). That pins the finish between 12.1
        // and 14.5 overs.
        let result = compute_match_impact(
            &request("Rajasthan Royals", "Mumbai Indians", 2, MatchPhase::Chasing, 180),
            &league(),
        )
        .unwrap();

        assert_eq!(result.current_position, 4);
        assert!(close(result.required_nrr.unwrap(), 0.596 + NRR_MARGIN));
        assert!(close(result.max_allowed_nrr.unwrap(), 0.771 - NRR_MARGIN));

        let answer = &result.answer;
        assert!(!answer.impossible);
        assert_eq!(answer.min_overs, Some(12.1));
        assert_eq!(answer.max_overs, Some(14.5));
        assert_eq!(answer.tie_qualifies, Some(false));
        // 73 balls is 12 overs 1 ball; 89 balls is 14 overs 5 balls.
        assert!(close(answer.revised_nrr_max, 0.769));
        assert!(close(answer.revised_nrr_min, 0.604));
    }

    #[test]
    fn tie_can_be_the_only_qualifying_outcome() {
        // A bracket wedged just above the tie NRR but below every winning
        // finish: the answer is the tie, and it is not "impossible".
        let you = team("Rajasthan Royals", 3, 4, 1066, Overs::new(128, 2), 1094, Overs::new(137, 1));
        let mut front = team("Alpha", 4, 3, 1000, Overs::whole(120), 1000, Overs::whole(120));
        front.nrr = 0.298;
        let mut back = team("Beta", 4, 3, 1000, Overs::whole(120), 1000, Overs::whole(120));
        back.nrr = 0.289;
        let opponent = team("Gamma", 1, 6, 900, Overs::whole(130), 1100, Overs::whole(125));
        let standings = Standings::from_teams(vec![you, front, back, opponent]);

        let result = compute_match_impact(
            &request("Rajasthan Royals", "Gamma", 2, MatchPhase::Chasing, 180),
            &standings,
        )
        .unwrap();

        let answer = &result.answer;
        assert!(!answer.impossible);
        assert_eq!(answer.tie_qualifies, Some(true));
        assert_eq!(answer.min_overs, None);
        assert_eq!(answer.max_overs, None);
        // Tie NRR: 1246/148.333 - 1274/157.166 truncated.
        assert!(close(answer.revised_nrr_min, 0.293));
        assert!(close(answer.revised_nrr_max, 0.293));
    }

    #[test]
    fn unreachable_target_is_impossible() {
        // 721 to win off 20 overs exceeds 36 runs per over.
        let result = compute_match_impact(
            &request("Rajasthan Royals", "Mumbai Indians", 2, MatchPhase::Chasing, 720),
            &league(),
        )
        .unwrap();
        assert!(result.answer.impossible);
    }
}

mod failures {
    use super::*;

    #[test]
    fn unknown_teams_are_rejected() {
        let err = compute_match_impact(
            &request("Gujarat Titans", "Mumbai Indians", 1, MatchPhase::Chasing, 150),
            &league(),
        )
        .unwrap_err();
        assert_eq!(err, ImpactError::UnknownTeam("Gujarat Titans".to_string()));

        let err = compute_match_impact(
            &request("Mumbai Indians", "Gujarat Titans", 1, MatchPhase::Chasing, 150),
            &league(),
        )
        .unwrap_err();
        assert_eq!(err, ImpactError::UnknownTeam("Gujarat Titans".to_string()));
    }

    #[test]
    fn position_out_of_points_reach_is_infeasible() {
        // A winless side chasing first place: three teams already sit above
        // its post-win total, so the best possible finish is fourth.
        let standings = Standings::from_teams(vec![
            team("Strugglers", 0, 7, 800, Overs::whole(140), 1100, Overs::whole(135)),
            team("Chennai Super Kings", 5, 2, 1130, Overs::new(133, 1), 1071, Overs::new(138, 5)),
            team("Royal Challengers Bangalore", 4, 3, 1217, Overs::whole(140), 1066, Overs::new(131, 4)),
            team("Delhi Capitals", 4, 3, 1085, Overs::whole(126), 1136, Overs::whole(137)),
            team("Mumbai Indians", 1, 6, 1003, Overs::new(155, 2), 1134, Overs::new(138, 1)),
        ]);

        let err = compute_match_impact(
            &request("Strugglers", "Mumbai Indians", 1, MatchPhase::SettingTotal, 160),
            &standings,
        )
        .unwrap_err();

        match err {
            ImpactError::InfeasiblePosition { desired_position, analysis } => {
                assert_eq!(desired_position, 1);
                assert!(!analysis.achievable);
                assert!(analysis.best_possible_position > 1);
                assert_eq!(analysis.best_possible_position, 4);
            }
            other => panic!("expected InfeasiblePosition, got {other:?}"),
        }
    }

    #[test]
    fn identical_level_rivals_yield_an_invalid_bracket() {
        // Two rivals level on points with byte-identical records: there is
        // no NRR strictly between theirs.
        let twin_a = team("Twin A", 4, 3, 1100, Overs::whole(130), 1050, Overs::whole(130));
        let twin_b = team("Twin B", 4, 3, 1100, Overs::whole(130), 1050, Overs::whole(130));
        let standings = Standings::from_teams(vec![
            team("Hopeful", 3, 4, 1000, Overs::whole(128), 1020, Overs::whole(129)),
            twin_a,
            twin_b,
            team("Doormat", 1, 6, 900, Overs::whole(131), 1150, Overs::whole(126)),
        ]);

        let err = compute_match_impact(
            &request("Hopeful", "Doormat", 2, MatchPhase::SettingTotal, 170),
            &standings,
        )
        .unwrap_err();
        assert!(matches!(err, ImpactError::InvalidBracket { .. }));
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_inputs_give_identical_results() {
        let req = request("Rajasthan Royals", "Mumbai Indians", 2, MatchPhase::Chasing, 180);
        let a = compute_match_impact(&req, &league()).unwrap();
        let b = compute_match_impact(&req, &league()).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn feasibility_bounds_stay_ordered(
            records in proptest::collection::vec((0u32..10, 0u32..10), 1..8),
            desired in 1usize..10,
        ) {
            let rivals: Vec<Team> = records
                .iter()
                .enumerate()
                .map(|(i, &(won, lost))| {
                    super::team(
                        &format!("Rival {i}"),
                        won,
                        lost,
                        1000 + 10 * i as u32,
                        Overs::whole(120),
                        1000,
                        Overs::whole(120),
                    )
                })
                .collect();
            for points_after_win in [2u32, 8, 16] {
                let analysis = crate::feasibility::analyze(&rivals, points_after_win, desired);
                prop_assert!(
                    analysis.best_possible_position <= analysis.worst_possible_position
                );
            }
        }
    }
}
