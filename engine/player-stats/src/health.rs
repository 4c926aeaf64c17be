//! Health percentages aggregated from peer feedback.
//!
//! Technical health, culture contribution, and team play all have the same
//! shape: peers answer on the 1-7 agreement scale, and the mean answer is
//! normalized to a 0-100 percentage. Which question was asked is the only
//! difference between the three.

use crate::config::{PEER_SCORE_MAX, PEER_SCORE_MIN};

/// How healthy the team's codebase and practices were, per peers.
pub fn technical_health(scores: &[u32]) -> u32 {
    peer_score_percentage(scores)
}

/// How much the player contributed to team culture, per peers.
pub fn culture_contribution(scores: &[u32]) -> u32 {
    peer_score_percentage(scores)
}

/// How well the player collaborated, per peers.
pub fn team_play(scores: &[u32]) -> u32 {
    peer_score_percentage(scores)
}

fn peer_score_percentage(scores: &[u32]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let mean = scores.iter().map(|&score| score as f64).sum::<f64>() / scores.len() as f64;
    let normalized = (mean - PEER_SCORE_MIN) / (PEER_SCORE_MAX - PEER_SCORE_MIN);
    (normalized * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_feedback_is_zero() {
        assert_eq!(technical_health(&[]), 0);
        assert_eq!(culture_contribution(&[]), 0);
        assert_eq!(team_play(&[]), 0);
    }

    #[test]
    fn rounds_down() {
        assert_eq!(technical_health(&[5, 6, 7]), 83);
        assert_eq!(culture_contribution(&[5, 6, 7]), 83);
        assert_eq!(team_play(&[5, 6, 7]), 83);
    }

    #[test]
    fn rounds_up() {
        assert_eq!(technical_health(&[5, 7, 7]), 89);
        assert_eq!(culture_contribution(&[5, 7, 7]), 89);
        assert_eq!(team_play(&[5, 7, 7]), 89);
    }

    #[test]
    fn scale_endpoints() {
        assert_eq!(team_play(&[1, 1, 1]), 0);
        assert_eq!(team_play(&[7, 7, 7]), 100);
    }
}
