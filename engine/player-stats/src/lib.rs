//! # player-stats
//!
//! Deterministic scoring engine for the learning platform. Converts raw
//! per-cycle activity (hours worked, peer feedback, completeness reviews,
//! match outcomes) into comparable player and project stats: relative
//! contribution, Elo skill rating, experience points, health percentages,
//! review accuracy/experience, and a discrete player level.
//!
//! Everything in this crate is pure and synchronous. Callers assemble input
//! snapshots from their stores and persist whatever comes back; the engine
//! performs no I/O and keeps no state beyond its arguments, so all functions
//! are safe to call concurrently without coordination.

pub mod bundle;
pub mod config;
pub mod contribution;
pub mod elo;
pub mod error;
pub mod experience;
pub mod formatter;
pub mod health;
pub mod level;
pub mod review;
pub mod types;

#[cfg(test)]
mod tests;

pub use bundle::{CycleProjectEcc, EccEntry, EloStats, PlayerStatsBundle, WeightedAverages};
pub use config::ReviewConfig;
pub use contribution::{
    relative_contribution, relative_contribution_aggregate_cycles, relative_contribution_delta,
    relative_contribution_effective_cycles, relative_contribution_expected, ContributionInputs,
};
pub use elo::{elo_ratings, score_margins, MatchParticipant};
pub use error::StatsError;
pub use experience::{experience_points, experience_points_v2, ExperienceInputs};
pub use formatter::{extract_stat, float_stat, int_stat, round_decimal, StatFormatter};
pub use health::{culture_contribution, team_play, technical_health};
pub use level::{compute_player_level, LevelRequirements, LEVELS};
pub use review::{
    ClosedProject, PlayerReviewStats, ProjectCompleteness, ProjectReview, ProjectReviewEngine,
    ProjectReviewInfo, ProjectUnderReview, ReviewBaseline,
};
pub use types::{CycleId, GoalId, PlayerId, ProjectId};

/// Current version of the scoring engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
