//! Relative-contribution scoring for a single project cycle.
//!
//! Peers rate each other's share of the work as a percentage. The raw number
//! that counts is either the consensus mean or, when one teammate has proven
//! strictly more accurate at estimating, that teammate's rating alone. The
//! chosen raw score is then rescaled by project hours so players who worked
//! fewer hours than expected are not penalized by the raw percentage alone.

use std::collections::BTreeMap;

use crate::error::StatsError;
use crate::types::PlayerId;

/// Raw inputs for one player's contribution on one project.
#[derive(Debug, Clone)]
pub struct ContributionInputs {
    pub player_hours: f64,
    pub team_hours: f64,
    pub expected_project_hours: f64,
    /// Peer-assigned contribution percentage per teammate.
    pub rc_scores: BTreeMap<PlayerId, f64>,
    /// Each teammate's current estimation accuracy, where known.
    pub estimation_accuracies: BTreeMap<PlayerId, f64>,
}

/// Number of aggregate build cycles a team represents: one per player per
/// build cycle.
pub fn relative_contribution_aggregate_cycles(num_players: u32, num_build_cycles: u32) -> u32 {
    num_players * num_build_cycles
}

/// Hour-scaled relative contribution in [0, 100].
pub fn relative_contribution(inputs: &ContributionInputs) -> Result<f64, StatsError> {
    if inputs.rc_scores.is_empty() {
        return Err(StatsError::MissingData("player contribution scores".into()));
    }
    if inputs.team_hours <= 0.0 {
        return Err(StatsError::MissingData("team hours".into()));
    }

    let raw = raw_contribution(&inputs.rc_scores, &inputs.estimation_accuracies);
    let team_size = inputs.rc_scores.len() as f64;
    let scale = inputs.expected_project_hours * team_size / inputs.team_hours;
    Ok((raw * scale).clamp(0.0, 100.0))
}

/// The contribution a player's hours alone would predict.
pub fn relative_contribution_expected(player_hours: f64, team_hours: f64) -> f64 {
    if team_hours == 0.0 {
        return 0.0;
    }
    player_hours / team_hours * 100.0
}

/// How far actual contribution landed from the hour-predicted one.
pub fn relative_contribution_delta(expected: f64, actual: f64) -> f64 {
    actual - expected
}

/// Build cycles effectively contributed: aggregate cycles weighted by the
/// player's contribution percentage.
pub fn relative_contribution_effective_cycles(
    aggregate_cycles: u32,
    relative_contribution: f64,
) -> f64 {
    aggregate_cycles as f64 * relative_contribution
}

/// Mean of the peer scores, unless exactly one teammate holds the strictly
/// highest estimation accuracy, in which case their rating wins outright.
/// A teammate without an accuracy score makes the accuracies incomparable,
/// so the mean is used.
fn raw_contribution(
    scores: &BTreeMap<PlayerId, f64>,
    accuracies: &BTreeMap<PlayerId, f64>,
) -> f64 {
    let mean = scores.values().sum::<f64>() / scores.len() as f64;

    let everyone_has_accuracy = scores.keys().all(|id| accuracies.contains_key(id));
    if !everyone_has_accuracy {
        return mean;
    }

    let mut known = scores.keys().filter_map(|id| accuracies.get(id).copied());
    let all_equal = match known.next() {
        Some(first) => known.all(|accuracy| accuracy == first),
        None => true,
    };
    if all_equal {
        return mean;
    }

    // BTreeMap iterates ids ascending; strict > keeps the lowest id on ties.
    let mut best_accuracy = f64::NEG_INFINITY;
    let mut best_score = mean;
    for (id, &score) in scores {
        let accuracy = accuracies[id];
        if accuracy > best_accuracy {
            best_accuracy = accuracy;
            best_score = score;
        }
    }
    best_score
}
