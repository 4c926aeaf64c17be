//! Cycle-close scenarios exercising the whole stat pipeline.

use std::collections::BTreeMap;

use crate::bundle::{EccEntry, EloStats, PlayerStatsBundle};
use crate::contribution::{
    relative_contribution, relative_contribution_aggregate_cycles, relative_contribution_delta,
    relative_contribution_effective_cycles, relative_contribution_expected, ContributionInputs,
};
use crate::elo::{elo_ratings, MatchParticipant};
use crate::experience::{experience_points_v2, ExperienceInputs};
use crate::formatter::{extract_stat, float_stat, int_stat};
use crate::health::{culture_contribution, team_play, technical_health};
use crate::level::compute_player_level;

#[test]
fn cycle_close_produces_a_coherent_stat_bundle() {
    // A pair spent a full cycle on a 38-hour project; peers agreed the
    // player carried 60% of it.
    let mut rc_scores = BTreeMap::new();
    rc_scores.insert("player1".to_string(), 60.0);
    rc_scores.insert("player2".to_string(), 40.0);
    let mut accuracies = BTreeMap::new();
    accuracies.insert("player1".to_string(), 90.0);
    accuracies.insert("player2".to_string(), 90.0);

    let contribution = relative_contribution(&ContributionInputs {
        player_hours: 38.0,
        team_hours: 76.0,
        expected_project_hours: 38.0,
        rc_scores,
        estimation_accuracies: accuracies,
    })
    .unwrap();
    assert_eq!(contribution, 50.0); // equal accuracies: consensus mean

    let expected = relative_contribution_expected(38.0, 76.0);
    assert_eq!(relative_contribution_delta(expected, contribution), 0.0);

    let aggregate = relative_contribution_aggregate_cycles(2, 1);
    assert_eq!(relative_contribution_effective_cycles(aggregate, contribution), 100.0);

    let xp = experience_points_v2(&ExperienceInputs {
        team_size: 2,
        recommended_team_size: 2,
        expected_project_hours: 38.0,
        dynamic: false,
        goal_points: 100.0,
        project_completeness: 100.0,
        relative_contribution: contribution,
    })
    .unwrap();
    assert_eq!(xp, 65.0); // 50 personal + 15 completion bonus

    let [rating, _] = elo_ratings([
        MatchParticipant { rating: 1000, score: contribution, k_factor: 20.0 },
        MatchParticipant { rating: 1000, score: 50.0, k_factor: 20.0 },
    ]);

    let mut bundle = PlayerStatsBundle {
        elo: Some(EloStats { rating, matches: 1 }),
        experience_points: 210.0 + xp,
        ..Default::default()
    };
    bundle.weighted_averages.culture_contribution = culture_contribution(&[5, 6, 7]) as f64;
    bundle.weighted_averages.team_play = team_play(&[5, 7, 7]) as f64;
    bundle.weighted_averages.technical_health = technical_health(&[5, 6, 7]) as f64;
    bundle.weighted_averages.estimation_accuracy = 72.0;
    bundle.record_project_contribution(
        "cycle1".into(),
        "project1".into(),
        EccEntry { ecc: 100.0, abc: 2.0, rc: contribution },
    );

    // An even match between even ratings moves nothing.
    assert_eq!(extract_stat(&bundle, "elo.rating", int_stat), Some(1000.0));
    assert_eq!(extract_stat(&bundle, "experiencePoints", float_stat), Some(275.0));
    assert_eq!(
        extract_stat(&bundle, "weightedAverages.cultureContribution", int_stat),
        Some(83.0)
    );

    // 1000 elo and 275 xp clears level 1 but not level 2.
    assert_eq!(compute_player_level(&bundle).unwrap(), 1);
}

#[test]
fn rerunning_a_project_close_does_not_double_count_credit() {
    let mut bundle = PlayerStatsBundle::default();
    let entry = EccEntry { ecc: 80.0, abc: 2.0, rc: 40.0 };
    bundle.record_project_contribution("cycle1".into(), "project1".into(), entry);
    bundle.record_project_contribution("cycle1".into(), "project1".into(), entry);
    bundle.record_project_contribution(
        "cycle1".into(),
        "project2".into(),
        EccEntry { ecc: 20.0, abc: 1.0, rc: 60.0 },
    );

    let totals = bundle.cycle_project_ecc.totals();
    assert_eq!(totals, EccEntry { ecc: 100.0, abc: 3.0, rc: 100.0 });
}
