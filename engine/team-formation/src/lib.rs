//! # team-formation
//!
//! Scores candidate team-formation plans for a cycle. A plan is judged by a
//! fixed set of objectives: mandatory objectives are hard gates (any failure
//! zeroes the plan), prioritized objectives rank the survivors through a
//! weighted sum whose descending powers-of-ten weights make an earlier
//! objective's full-scale difference outweigh every later objective combined.
//!
//! The appraiser holds an immutable objective registry built at construction
//! and is safe to share across concurrent scoring calls; individual
//! objectives are stateless.

pub mod appraiser;
pub mod error;
pub mod instrument;
pub mod objectives;
pub mod plan;

#[cfg(test)]
mod tests;

pub use appraiser::{lexicographic_score, AppraiserConfig, ObjectiveAppraiser};
pub use error::FormationError;
pub use instrument::{AppraisalInstrument, ObjectiveTiming, ScoringTimings};
pub use objectives::{
    default_registry, AdvancedPlayerGoalConsistency, AdvancedPlayerTeamCap, Objective,
    ObjectiveKind, ObjectiveRegistry, PlayersGotTheirVote, ScoreOptions,
    TeamSizesMatchRecommendation,
};
pub use plan::{Candidate, CandidatePool, GoalSpec, TeamAssignment, TeamFormationPlan};
