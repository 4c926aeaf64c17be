//! Error types for the scoring engine.

use thiserror::Error;

/// Errors surfaced by the scoring engine. All failures are synchronous and
/// reported to the immediate caller; nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("elo rating must be non-negative, got {value}")]
    NegativeRating { value: i32 },

    #[error("experience points must be non-negative, got {value}")]
    NegativeExperience { value: f64 },

    #[error("missing data: {0}")]
    MissingData(String),

    #[error("configuration error: {0}")]
    Config(String),
}
