//! Per-player stat bundle and contribution-credit accumulation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_RATING;
use crate::types::{CycleId, ProjectId};

/// Skill-rating state carried between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EloStats {
    pub rating: i32,
    /// Scored comparisons this player has been through.
    pub matches: u32,
}

/// Cross-cycle weighted averages of the per-cycle percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedAverages {
    pub culture_contribution: f64,
    pub team_play: f64,
    pub technical_health: f64,
    pub estimation_accuracy: f64,
}

/// Contribution credit earned on one project. The sub-components are opaque
/// to the engine; it merges and totals them without interpreting them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EccEntry {
    pub ecc: f64,
    pub abc: f64,
    pub rc: f64,
}

/// Running per-player accumulator of contribution credit, keyed by cycle and
/// project. Recording the same (cycle, project) twice replaces the earlier
/// entry, so repeated stat runs for one project converge on the latest value
/// instead of double-counting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleProjectEcc(BTreeMap<CycleId, BTreeMap<ProjectId, EccEntry>>);

impl CycleProjectEcc {
    pub fn upsert(&mut self, cycle: CycleId, project: ProjectId, entry: EccEntry) {
        self.0.entry(cycle).or_default().insert(project, entry);
    }

    pub fn get(&self, cycle: &str, project: &str) -> Option<&EccEntry> {
        self.0.get(cycle).and_then(|projects| projects.get(project))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Totals are always recomputed as the sum over current entries rather
    /// than accumulated incrementally, which keeps upserts idempotent.
    pub fn totals(&self) -> EccEntry {
        self.0.values().flat_map(BTreeMap::values).fold(EccEntry::default(), sum_entries)
    }

    /// Totals restricted to a single cycle.
    pub fn cycle_totals(&self, cycle: &str) -> EccEntry {
        self.0
            .get(cycle)
            .map(|projects| projects.values().fold(EccEntry::default(), sum_entries))
            .unwrap_or_default()
    }
}

fn sum_entries(acc: EccEntry, entry: &EccEntry) -> EccEntry {
    EccEntry { ecc: acc.ecc + entry.ecc, abc: acc.abc + entry.abc, rc: acc.rc + entry.rc }
}

/// Everything the platform tracks about one player's standing. Recomputed
/// stats are merged in at cycle close and persisted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsBundle {
    pub elo: Option<EloStats>,
    pub experience_points: f64,
    pub weighted_averages: WeightedAverages,
    pub project_review_accuracy: f64,
    pub project_review_experience: f64,
    pub internal_project_review_count: u32,
    pub external_project_review_count: u32,
    pub cycle_project_ecc: CycleProjectEcc,
}

impl PlayerStatsBundle {
    /// Current rating, falling back to the baseline for unrated players.
    pub fn rating(&self) -> i32 {
        self.elo.map(|elo| elo.rating).unwrap_or(DEFAULT_RATING)
    }

    /// Record the contribution credit earned on one project. Calling this
    /// again for the same (cycle, project) replaces the earlier entry.
    pub fn record_project_contribution(
        &mut self,
        cycle: CycleId,
        project: ProjectId,
        entry: EccEntry,
    ) {
        self.cycle_project_ecc.upsert(cycle, project, entry);
    }

    /// Raw value behind a dot-separated stat path, or `None` when the bundle
    /// has no such stat.
    pub fn stat_path(&self, path: &str) -> Option<f64> {
        match path {
            "elo.rating" => Some(self.rating() as f64),
            "elo.matches" => self.elo.map(|elo| elo.matches as f64),
            "experiencePoints" => Some(self.experience_points),
            "weightedAverages.cultureContribution" => {
                Some(self.weighted_averages.culture_contribution)
            }
            "weightedAverages.teamPlay" => Some(self.weighted_averages.team_play),
            "weightedAverages.technicalHealth" => Some(self.weighted_averages.technical_health),
            "weightedAverages.estimationAccuracy" => {
                Some(self.weighted_averages.estimation_accuracy)
            }
            "projectReviewAccuracy" => Some(self.project_review_accuracy),
            "projectReviewExperience" => Some(self.project_review_experience),
            "internalProjectReviewCount" => Some(self.internal_project_review_count as f64),
            "externalProjectReviewCount" => Some(self.external_project_review_count as f64),
            _ => None,
        }
    }
}
