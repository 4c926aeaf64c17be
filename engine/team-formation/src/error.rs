//! Error types for team-formation scoring.

use thiserror::Error;

/// Errors surfaced while building or running an appraiser. Objective failures
/// propagate through scoring unchanged; the appraiser never masks them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormationError {
    /// An objective kind had no registered implementation.
    #[error("no implementation registered for objective [{objective}]")]
    UnknownObjective { objective: &'static str },

    /// An objective failed while scoring a plan.
    #[error("objective [{objective}] failed: {message}")]
    Objective { objective: String, message: String },
}
