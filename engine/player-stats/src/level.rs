//! Discrete player level derived from rating, experience, and estimation
//! accuracy.

use crate::bundle::PlayerStatsBundle;
use crate::error::StatsError;

/// Requirements to hold one level. Thresholds never decrease across the
/// table, so the greatest satisfied level is well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRequirements {
    pub level: u32,
    pub elo_rating: i32,
    pub experience_points: f64,
    pub estimation_accuracy: f64,
}

pub const LEVELS: [LevelRequirements; 6] = [
    LevelRequirements { level: 0, elo_rating: 0, experience_points: 0.0, estimation_accuracy: 0.0 },
    LevelRequirements {
        level: 1,
        elo_rating: 900,
        experience_points: 150.0,
        estimation_accuracy: 70.0,
    },
    LevelRequirements {
        level: 2,
        elo_rating: 990,
        experience_points: 400.0,
        estimation_accuracy: 80.0,
    },
    LevelRequirements {
        level: 3,
        elo_rating: 1020,
        experience_points: 600.0,
        estimation_accuracy: 85.0,
    },
    LevelRequirements {
        level: 4,
        elo_rating: 1050,
        experience_points: 800.0,
        estimation_accuracy: 90.0,
    },
    LevelRequirements {
        level: 5,
        elo_rating: 1070,
        experience_points: 1000.0,
        estimation_accuracy: 95.0,
    },
];

/// The greatest level whose requirements the player meets, 0 when none.
/// Negative rating or experience points are rejected outright.
pub fn compute_player_level(stats: &PlayerStatsBundle) -> Result<u32, StatsError> {
    let rating = stats.rating();
    if rating < 0 {
        return Err(StatsError::NegativeRating { value: rating });
    }
    if stats.experience_points < 0.0 {
        return Err(StatsError::NegativeExperience { value: stats.experience_points });
    }

    let accuracy = stats.weighted_averages.estimation_accuracy;
    Ok(LEVELS
        .iter()
        .rev()
        .find(|requirements| {
            rating >= requirements.elo_rating
                && stats.experience_points >= requirements.experience_points
                && accuracy >= requirements.estimation_accuracy
        })
        .map(|requirements| requirements.level)
        .unwrap_or(0))
}
