//! Candidate plans and the cycle's formation pool.
//!
//! Plans are transient: the external formation search constructs them,
//! scores them through the appraiser, and keeps only the best one. Nothing
//! here is persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use player_stats::{GoalId, PlayerId};

/// One proposed team within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAssignment {
    pub goal_id: GoalId,
    /// Seats this team is being built toward.
    pub team_size: u32,
    pub player_ids: Vec<PlayerId>,
}

/// A candidate assignment of players to teams for one cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFormationPlan {
    pub teams: Vec<TeamAssignment>,
}

impl TeamFormationPlan {
    /// Teams the given player is assigned to.
    pub fn teams_for<'a>(
        &'a self,
        player_id: &'a str,
    ) -> impl Iterator<Item = &'a TeamAssignment> + 'a {
        self.teams.iter().filter(move |team| team.player_ids.iter().any(|id| id == player_id))
    }
}

/// One player eligible for this cycle's formation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Advanced players anchor teams and may sit on several of them.
    pub advanced: bool,
    /// How many teams an advanced player may anchor this cycle.
    pub max_teams: u32,
    /// Goal ids in descending preference order (first and second choice).
    pub votes: Vec<GoalId>,
}

impl Default for Candidate {
    fn default() -> Self {
        Self { advanced: false, max_teams: 1, votes: Vec::new() }
    }
}

/// A goal players voted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSpec {
    pub recommended_team_size: u32,
}

/// Everything the objectives need to know about the cycle being formed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePool {
    pub candidates: BTreeMap<PlayerId, Candidate>,
    pub goals: BTreeMap<GoalId, GoalSpec>,
}

impl CandidatePool {
    pub fn is_advanced(&self, player_id: &str) -> bool {
        self.candidates.get(player_id).is_some_and(|candidate| candidate.advanced)
    }
}
