//! Experience-point awards per project cycle.

use crate::config::{
    COMPLETION_BONUS_RATE, COMPLETION_BONUS_THRESHOLD, DEFAULT_EXPECTED_PROJECT_HOURS,
};
use crate::error::StatsError;
use crate::formatter::round_decimal;

/// Legacy award: team hours weighted by the player's contribution share.
pub fn experience_points(team_hours: f64, relative_contribution: f64) -> f64 {
    round_decimal(team_hours * (relative_contribution / 100.0), 2)
}

/// Inputs for the goal-point based award.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceInputs {
    pub team_size: u32,
    pub recommended_team_size: u32,
    pub expected_project_hours: f64,
    /// Dynamic goals grow with the team: more seats, proportionally more
    /// total work available.
    pub dynamic: bool,
    pub goal_points: f64,
    pub project_completeness: f64,
    pub relative_contribution: f64,
}

/// Goal-point award: a personal share earned through contribution plus a
/// completion bonus the whole team receives once the project lands well past
/// the bonus threshold.
pub fn experience_points_v2(inputs: &ExperienceInputs) -> Result<f64, StatsError> {
    if inputs.team_size == 0 || inputs.recommended_team_size == 0 {
        return Err(StatsError::MissingData("team size".into()));
    }

    let completeness = inputs.project_completeness / 100.0;
    let contribution = inputs.relative_contribution / 100.0;

    let goal_scale = if inputs.dynamic {
        inputs.team_size as f64 / inputs.recommended_team_size as f64
    } else {
        1.0
    };
    let personal = inputs.goal_points * goal_scale * completeness * contribution;

    let bonus_seats =
        (if inputs.dynamic { inputs.team_size } else { inputs.recommended_team_size }) as f64;
    let completion_factor = ((inputs.project_completeness - COMPLETION_BONUS_THRESHOLD)
        / (100.0 - COMPLETION_BONUS_THRESHOLD))
        .clamp(0.0, 1.0);
    let bonus = inputs.expected_project_hours / DEFAULT_EXPECTED_PROJECT_HOURS
        * bonus_seats
        * COMPLETION_BONUS_RATE
        * completion_factor;

    Ok(round_decimal(personal + bonus, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_award() {
        assert_eq!(experience_points(140.0, 20.0), 28.0);
    }

    fn inputs() -> ExperienceInputs {
        ExperienceInputs {
            team_size: 1,
            recommended_team_size: 1,
            expected_project_hours: 38.0,
            dynamic: false,
            goal_points: 100.0,
            project_completeness: 0.0,
            relative_contribution: 0.0,
        }
    }

    #[test]
    fn no_xp_with_zero_completeness_on_solo_project() {
        let xp = experience_points_v2(&ExperienceInputs {
            project_completeness: 0.0,
            relative_contribution: 100.0,
            ..inputs()
        });
        assert_eq!(xp.unwrap(), 0.0);
    }

    #[test]
    fn no_xp_with_zero_completeness_on_team_project() {
        let xp = experience_points_v2(&ExperienceInputs {
            team_size: 2,
            recommended_team_size: 2,
            relative_contribution: 50.0,
            ..inputs()
        });
        assert_eq!(xp.unwrap(), 0.0);
    }

    #[test]
    fn bonus_awarded_even_without_contribution() {
        let xp = experience_points_v2(&ExperienceInputs {
            team_size: 2,
            recommended_team_size: 2,
            project_completeness: 100.0,
            relative_contribution: 0.0,
            ..inputs()
        });
        assert_eq!(xp.unwrap(), 15.0);
    }

    #[test]
    fn top_solo_score() {
        let xp = experience_points_v2(&ExperienceInputs {
            project_completeness: 100.0,
            relative_contribution: 100.0,
            ..inputs()
        });
        assert_eq!(xp.unwrap(), 107.5);
    }

    #[test]
    fn top_team_of_two_score() {
        let xp = experience_points_v2(&ExperienceInputs {
            team_size: 2,
            recommended_team_size: 2,
            project_completeness: 100.0,
            relative_contribution: 100.0,
            ..inputs()
        });
        assert_eq!(xp.unwrap(), 115.0);
    }

    #[test]
    fn personal_xp_tracks_contribution() {
        let xp = experience_points_v2(&ExperienceInputs {
            team_size: 2,
            recommended_team_size: 2,
            project_completeness: 70.0,
            relative_contribution: 50.0,
            ..inputs()
        });
        // No bonus at the threshold itself.
        assert_eq!(xp.unwrap(), 35.0);
    }

    #[test]
    fn bonus_xp_tracks_completion() {
        let xp = experience_points_v2(&ExperienceInputs {
            team_size: 2,
            recommended_team_size: 2,
            project_completeness: 90.0,
            relative_contribution: 50.0,
            ..inputs()
        });
        assert_eq!(xp.unwrap(), 55.0); // 45 personal + 10 bonus
    }

    #[test]
    fn dynamic_goal_with_oversize_team_multiplies_points() {
        let xp = experience_points_v2(&ExperienceInputs {
            team_size: 4,
            recommended_team_size: 2,
            dynamic: true,
            project_completeness: 100.0,
            relative_contribution: 100.0,
            ..inputs()
        });
        assert_eq!(xp.unwrap(), 230.0); // 200 personal + 30 bonus
    }

    #[test]
    fn zero_team_size_is_an_error() {
        let xp = experience_points_v2(&ExperienceInputs { team_size: 0, ..inputs() });
        assert!(matches!(xp, Err(StatsError::MissingData(_))));
    }
}
