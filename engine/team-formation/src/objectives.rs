//! Objective scoring strategies.
//!
//! Each objective inspects one property of a candidate plan and returns a
//! score in [0, 1]. Mandatory objectives return exactly 0 or 1. Objectives
//! are resolved through a static registry so that a misconfigured objective
//! list fails at appraiser construction with a typed error instead of
//! somewhere mid-search.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use player_stats::GoalId;

use crate::error::FormationError;
use crate::plan::{CandidatePool, TeamFormationPlan};

/// Vote satisfaction earned by landing on a first-choice goal.
const FIRST_CHOICE_VALUE: f64 = 1.0;

/// Vote satisfaction earned by landing on a second-choice goal.
const SECOND_CHOICE_VALUE: f64 = 0.7;

/// Options forwarded to every objective for one scoring pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreOptions {
    /// Mid-search plans may still have unfilled seats; objectives that judge
    /// seat counts or assignments relax accordingly.
    pub teams_are_incomplete: bool,
}

/// A named, stateless scorer of one plan property.
pub trait Objective: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(
        &self,
        plan: &TeamFormationPlan,
        pool: &CandidatePool,
        opts: ScoreOptions,
    ) -> Result<f64, FormationError>;
}

/// Every objective the platform knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectiveKind {
    AdvancedPlayerTeamCap,
    AdvancedPlayerGoalConsistency,
    TeamSizesMatchRecommendation,
    RegularPlayersGotTheirVote,
    AdvancedPlayersGotTheirVote,
}

impl ObjectiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdvancedPlayerTeamCap => "advancedPlayerTeamCap",
            Self::AdvancedPlayerGoalConsistency => "advancedPlayerGoalConsistency",
            Self::TeamSizesMatchRecommendation => "teamSizesMatchRecommendation",
            Self::RegularPlayersGotTheirVote => "regularPlayersGotTheirVote",
            Self::AdvancedPlayersGotTheirVote => "advancedPlayersGotTheirVote",
        }
    }
}

/// Resolves one objective kind to its implementation. Returning `None` makes
/// appraiser construction fail with a configuration error naming the kind.
pub type ObjectiveRegistry = fn(ObjectiveKind) -> Option<Box<dyn Objective>>;

/// The platform's stock objectives.
pub fn default_registry(kind: ObjectiveKind) -> Option<Box<dyn Objective>> {
    Some(match kind {
        ObjectiveKind::AdvancedPlayerTeamCap => Box::new(AdvancedPlayerTeamCap),
        ObjectiveKind::AdvancedPlayerGoalConsistency => Box::new(AdvancedPlayerGoalConsistency),
        ObjectiveKind::TeamSizesMatchRecommendation => Box::new(TeamSizesMatchRecommendation),
        ObjectiveKind::RegularPlayersGotTheirVote => {
            Box::new(PlayersGotTheirVote { advanced: false })
        }
        ObjectiveKind::AdvancedPlayersGotTheirVote => {
            Box::new(PlayersGotTheirVote { advanced: true })
        }
    })
}

/// Mandatory gate: no advanced player anchors more teams than their cap.
pub struct AdvancedPlayerTeamCap;

impl Objective for AdvancedPlayerTeamCap {
    fn name(&self) -> &'static str {
        ObjectiveKind::AdvancedPlayerTeamCap.as_str()
    }

    fn score(
        &self,
        plan: &TeamFormationPlan,
        pool: &CandidatePool,
        _opts: ScoreOptions,
    ) -> Result<f64, FormationError> {
        let mut team_counts: BTreeMap<&str, u32> = BTreeMap::new();
        for team in &plan.teams {
            for player_id in &team.player_ids {
                if pool.is_advanced(player_id) {
                    *team_counts.entry(player_id.as_str()).or_default() += 1;
                }
            }
        }

        let within_cap = team_counts.iter().all(|(player_id, &count)| {
            pool.candidates.get(*player_id).is_some_and(|candidate| count <= candidate.max_teams)
        });
        Ok(if within_cap { 1.0 } else { 0.0 })
    }
}

/// Mandatory gate: an advanced player's teams all pursue one goal.
pub struct AdvancedPlayerGoalConsistency;

impl Objective for AdvancedPlayerGoalConsistency {
    fn name(&self) -> &'static str {
        ObjectiveKind::AdvancedPlayerGoalConsistency.as_str()
    }

    fn score(
        &self,
        plan: &TeamFormationPlan,
        pool: &CandidatePool,
        _opts: ScoreOptions,
    ) -> Result<f64, FormationError> {
        let mut goals_per_player: BTreeMap<&str, BTreeSet<&GoalId>> = BTreeMap::new();
        for team in &plan.teams {
            for player_id in &team.player_ids {
                if pool.is_advanced(player_id) {
                    goals_per_player.entry(player_id.as_str()).or_default().insert(&team.goal_id);
                }
            }
        }

        let consistent = goals_per_player.values().all(|goals| goals.len() <= 1);
        Ok(if consistent { 1.0 } else { 0.0 })
    }
}

/// Fraction of teams whose roster hits the goal's recommended size. While
/// teams are still being filled, a roster at or below the target also counts.
pub struct TeamSizesMatchRecommendation;

impl Objective for TeamSizesMatchRecommendation {
    fn name(&self) -> &'static str {
        ObjectiveKind::TeamSizesMatchRecommendation.as_str()
    }

    fn score(
        &self,
        plan: &TeamFormationPlan,
        pool: &CandidatePool,
        opts: ScoreOptions,
    ) -> Result<f64, FormationError> {
        if plan.teams.is_empty() {
            return Ok(1.0);
        }

        let matching = plan
            .teams
            .iter()
            .filter(|team| {
                let target = pool
                    .goals
                    .get(&team.goal_id)
                    .map(|goal| goal.recommended_team_size)
                    .unwrap_or(team.team_size);
                let size = team.player_ids.len() as u32;
                if opts.teams_are_incomplete {
                    size <= target
                } else {
                    size == target
                }
            })
            .count();

        Ok(matching as f64 / plan.teams.len() as f64)
    }
}

/// Mean vote satisfaction over one class of players: full credit for a
/// first-choice goal, partial for a second choice, none otherwise. Players
/// on several teams keep their best outcome.
pub struct PlayersGotTheirVote {
    pub advanced: bool,
}

impl Objective for PlayersGotTheirVote {
    fn name(&self) -> &'static str {
        if self.advanced {
            ObjectiveKind::AdvancedPlayersGotTheirVote.as_str()
        } else {
            ObjectiveKind::RegularPlayersGotTheirVote.as_str()
        }
    }

    fn score(
        &self,
        plan: &TeamFormationPlan,
        pool: &CandidatePool,
        opts: ScoreOptions,
    ) -> Result<f64, FormationError> {
        let mut total = 0.0;
        let mut counted = 0usize;

        for (player_id, candidate) in
            pool.candidates.iter().filter(|(_, candidate)| candidate.advanced == self.advanced)
        {
            let mut assigned = false;
            let mut best: f64 = 0.0;
            for team in plan.teams_for(player_id) {
                assigned = true;
                let value = match candidate.votes.iter().position(|goal| goal == &team.goal_id) {
                    Some(0) => FIRST_CHOICE_VALUE,
                    Some(1) => SECOND_CHOICE_VALUE,
                    _ => 0.0,
                };
                best = best.max(value);
            }

            // Unassigned players only count against a finished plan.
            if !assigned && opts.teams_are_incomplete {
                continue;
            }
            total += best;
            counted += 1;
        }

        if counted == 0 {
            return Ok(1.0);
        }
        Ok(total / counted as f64)
    }
}
