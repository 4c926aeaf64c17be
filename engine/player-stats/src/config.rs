//! Calibrated constants and tunable configuration.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};

/// Expected hours a single player puts into one project cycle.
pub const DEFAULT_EXPECTED_PROJECT_HOURS: f64 = 38.0;

/// Peer feedback is collected on a 1-7 agreement scale.
pub const PEER_SCORE_MIN: f64 = 1.0;
/// Upper bound of the peer feedback scale.
pub const PEER_SCORE_MAX: f64 = 7.0;

/// Rating assigned to players with no match history.
pub const DEFAULT_RATING: i32 = 1000;

/// Completeness must exceed this percentage before any completion bonus
/// is awarded.
pub const COMPLETION_BONUS_THRESHOLD: f64 = 70.0;

/// Completion bonus awarded per recommended seat on a fully complete,
/// default-length project.
pub const COMPLETION_BONUS_RATE: f64 = 7.5;

/// Configuration for [`crate::review::ProjectReviewEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewConfig {
    /// Only this many of a player's most recent external reviews feed their
    /// accuracy average. Older reviews still count toward totals.
    pub recent_window: usize,

    /// Below this many external reviews (own plus baseline), accuracy falls
    /// back to the rating-derived estimate instead of the delta average.
    pub min_external_reviews: u32,

    /// Flat review-experience credit earned per external review.
    pub experience_bonus_per_review: f64,

    /// Rating assumed for players whose bundle carries no rating yet.
    pub baseline_rating: i32,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            recent_window: 20,
            min_external_reviews: 7,
            experience_bonus_per_review: 0.05,
            baseline_rating: DEFAULT_RATING,
        }
    }
}

impl ReviewConfig {
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.recent_window == 0 {
            return Err(StatsError::Config("recent_window must be at least 1".into()));
        }
        if self.min_external_reviews == 0 {
            return Err(StatsError::Config("min_external_reviews must be at least 1".into()));
        }
        if self.experience_bonus_per_review < 0.0 {
            return Err(StatsError::Config(
                "experience_bonus_per_review must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
