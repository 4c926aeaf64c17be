//! Project completeness consensus and per-player review accuracy.
//!
//! Completed projects are reviewed by players who report a completeness
//! percentage. Reviews from the project's own team are tracked but never
//! trusted for the official number; among external reviewers, the most
//! experienced one's word is accepted outright. A player's own accuracy is
//! then measured by how close their historical reports landed to the accepted
//! answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ReviewConfig;
use crate::error::StatsError;
use crate::formatter::round_decimal;
use crate::types::{PlayerId, ProjectId};

/// Rating at or below which the rating-derived accuracy bottoms out at zero.
const RATING_ACCURACY_FLOOR: i32 = 900;

/// Rating points per accuracy point in the rating-derived estimate.
const RATING_ACCURACY_SCALE: f64 = 10.0;

/// One completeness report on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReview {
    pub reviewer_id: PlayerId,
    /// Reported completeness percentage, 0-100.
    pub reported_completeness: f64,
    /// Reviewer's review experience at the time of the report.
    pub reviewer_experience: f64,
    /// Reviewer's review accuracy at the time of the report.
    pub reviewer_accuracy: f64,
}

/// The project being reviewed, as the consensus step needs to see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUnderReview {
    pub id: ProjectId,
    pub player_ids: Vec<PlayerId>,
    pub expected_hours: f64,
    pub actual_hours: f64,
}

/// Completeness outcome for a project. Both fields are absent when no
/// external review exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCompleteness {
    pub completeness: Option<f64>,
    pub raw_completeness: Option<f64>,
}

/// A closed project as it appears in a player's review history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedProject {
    pub id: ProjectId,
    pub player_ids: Vec<PlayerId>,
    pub completeness: Option<f64>,
    pub raw_completeness: Option<f64>,
    pub closed_at: DateTime<Utc>,
}

/// One historical project together with every review filed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReviewInfo {
    pub project: ClosedProject,
    pub reviews: Vec<ProjectReview>,
}

/// Review stats carried over from before this engine tracked reviews itself.
/// Blends additively with newly computed stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBaseline {
    pub accuracy: f64,
    pub internal_count: u32,
    pub external_count: u32,
}

/// A player's recomputed review standing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReviewStats {
    pub accuracy: f64,
    pub experience: f64,
    pub internal_count: u32,
    pub external_count: u32,
}

/// Computes completeness consensus and player review accuracy.
#[derive(Debug, Clone)]
pub struct ProjectReviewEngine {
    cfg: ReviewConfig,
}

impl Default for ProjectReviewEngine {
    fn default() -> Self {
        Self { cfg: ReviewConfig::default() }
    }
}

impl ProjectReviewEngine {
    pub fn new(cfg: ReviewConfig) -> Result<Self, StatsError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Accept the word of the top external reviewer, then rescale for hours
    /// the team did not get to work.
    ///
    /// The consensus reviewer is the external reviewer with the highest
    /// review experience, ties broken by review accuracy and then by the
    /// greatest reviewer id. A team that worked fewer hours than expected
    /// has its completeness scaled up proportionally, capped at 100. Without
    /// any external review both outputs are absent.
    pub fn project_review_stats(
        &self,
        project: &ProjectUnderReview,
        reviews: &[ProjectReview],
    ) -> ProjectCompleteness {
        let mut external: Vec<&ProjectReview> = reviews
            .iter()
            .filter(|review| !project.player_ids.contains(&review.reviewer_id))
            .collect();

        if external.is_empty() {
            return ProjectCompleteness { completeness: None, raw_completeness: None };
        }

        external.sort_by(|a, b| {
            b.reviewer_experience
                .total_cmp(&a.reviewer_experience)
                .then(b.reviewer_accuracy.total_cmp(&a.reviewer_accuracy))
                .then(b.reviewer_id.cmp(&a.reviewer_id))
        });
        let consensus = external[0];
        tracing::debug!(
            "accepting completeness {} for project {} from reviewer {}",
            consensus.reported_completeness,
            project.id,
            consensus.reviewer_id
        );

        let raw = consensus.reported_completeness;
        let completeness = if project.actual_hours > 0.0 && project.expected_hours > 0.0 {
            (raw * project.expected_hours / project.actual_hours).clamp(0.0, 100.0)
        } else {
            raw.clamp(0.0, 100.0)
        };

        ProjectCompleteness { completeness: Some(completeness), raw_completeness: Some(raw) }
    }

    /// Score a player's reviewing record against the accepted answers.
    ///
    /// Only external reviews count toward accuracy, measured against each
    /// project's raw completeness (the pre-scaling number the reviewer was
    /// actually estimating) and averaged over the most recent
    /// [`ReviewConfig::recent_window`] reviews. Counts are never windowed.
    /// Until a player has [`ReviewConfig::min_external_reviews`] external
    /// reviews (their own plus any baseline), accuracy falls back to a
    /// rating-derived estimate.
    pub fn player_review_stats(
        &self,
        player_id: &str,
        rating: Option<i32>,
        baseline: Option<&ReviewBaseline>,
        history: &[ProjectReviewInfo],
    ) -> PlayerReviewStats {
        let mut internal_count = 0u32;
        let mut new_external_count = 0u32;
        let mut scored: Vec<(DateTime<Utc>, f64)> = Vec::new();

        for info in history {
            let Some(review) =
                info.reviews.iter().find(|review| review.reviewer_id == player_id)
            else {
                continue;
            };

            if info.project.player_ids.iter().any(|id| id == player_id) {
                internal_count += 1;
                continue;
            }

            new_external_count += 1;
            let correct = info.project.raw_completeness.or(info.project.completeness);
            if let Some(correct) = correct {
                let delta = (review.reported_completeness - correct).abs();
                scored.push((info.project.closed_at, (100.0 - delta).max(0.0)));
            }
        }

        // Most recent first; sort is stable, so same-day reviews keep input order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.cfg.recent_window);

        let baseline_external = baseline.map_or(0, |b| b.external_count);
        let external_count = new_external_count + baseline_external;
        internal_count += baseline.map_or(0, |b| b.internal_count);

        let windowed = scored.len() as f64 + baseline_external as f64;
        let accuracy = if external_count < self.cfg.min_external_reviews || windowed == 0.0 {
            let rating = rating.unwrap_or(self.cfg.baseline_rating);
            tracing::debug!(
                "player {} has {} external reviews, deriving accuracy from rating {}",
                player_id,
                external_count,
                rating
            );
            rating_derived_accuracy(rating)
        } else {
            let sum = scored.iter().map(|&(_, accuracy)| accuracy).sum::<f64>()
                + baseline.map_or(0.0, |b| b.accuracy * b.external_count as f64);
            sum / windowed
        };

        let accuracy = round_decimal(accuracy, 2);
        let experience = round_decimal(
            accuracy + self.cfg.experience_bonus_per_review * external_count as f64,
            2,
        );

        PlayerReviewStats { accuracy, experience, internal_count, external_count }
    }
}

/// Monotone mapping from skill rating to an assumed review accuracy, used
/// until the player has a reviewing record of their own.
fn rating_derived_accuracy(rating: i32) -> f64 {
    ((rating - RATING_ACCURACY_FLOOR) as f64 / RATING_ACCURACY_SCALE).clamp(0.0, 100.0)
}
