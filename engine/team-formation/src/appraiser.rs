//! Plan scoring: mandatory gating plus lexicographically weighted objectives.

use std::sync::Arc;
use std::time::Instant;

use crate::error::FormationError;
use crate::instrument::AppraisalInstrument;
use crate::objectives::{
    default_registry, Objective, ObjectiveKind, ObjectiveRegistry, ScoreOptions,
};
use crate::plan::{CandidatePool, TeamFormationPlan};

/// Which objectives run, and in what priority order.
#[derive(Debug, Clone, PartialEq)]
pub struct AppraiserConfig {
    /// Hard gates: every one must score exactly 1 or the plan scores 0.
    pub mandatory: Vec<ObjectiveKind>,
    /// Ranking objectives in descending priority.
    pub prioritized: Vec<ObjectiveKind>,
}

impl Default for AppraiserConfig {
    fn default() -> Self {
        Self {
            mandatory: vec![
                ObjectiveKind::AdvancedPlayerTeamCap,
                ObjectiveKind::AdvancedPlayerGoalConsistency,
            ],
            prioritized: vec![
                ObjectiveKind::TeamSizesMatchRecommendation,
                ObjectiveKind::RegularPlayersGotTheirVote,
                ObjectiveKind::AdvancedPlayersGotTheirVote,
            ],
        }
    }
}

/// Scores candidate plans for one formation run. The objective registry is
/// resolved once at construction; scoring itself never allocates objectives
/// and is safe to call from several threads at once.
pub struct ObjectiveAppraiser {
    pool: CandidatePool,
    mandatory: Vec<Box<dyn Objective>>,
    prioritized: Vec<Box<dyn Objective>>,
    instrument: Option<Arc<dyn AppraisalInstrument>>,
}

impl ObjectiveAppraiser {
    pub fn new(pool: CandidatePool, config: AppraiserConfig) -> Result<Self, FormationError> {
        Self::with_registry(pool, config, default_registry)
    }

    /// Build with a custom registry. Any kind the registry cannot resolve
    /// fails construction with [`FormationError::UnknownObjective`].
    pub fn with_registry(
        pool: CandidatePool,
        config: AppraiserConfig,
        registry: ObjectiveRegistry,
    ) -> Result<Self, FormationError> {
        let resolve = |kinds: &[ObjectiveKind]| {
            kinds
                .iter()
                .map(|&kind| {
                    registry(kind)
                        .ok_or(FormationError::UnknownObjective { objective: kind.as_str() })
                })
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(Self {
            pool,
            mandatory: resolve(&config.mandatory)?,
            prioritized: resolve(&config.prioritized)?,
            instrument: None,
        })
    }

    /// Attach an instrumentation hook observing every objective call.
    pub fn with_instrument(mut self, instrument: Arc<dyn AppraisalInstrument>) -> Self {
        self.instrument = Some(instrument);
        self
    }

    /// Score one candidate plan in [0, 1]. Plans failing any mandatory
    /// objective score 0 regardless of how well they rank otherwise.
    pub fn score(
        &self,
        plan: &TeamFormationPlan,
        opts: ScoreOptions,
    ) -> Result<f64, FormationError> {
        let mandatory_score =
            self.objective_set_score(&self.mandatory, plan, ScoreOptions::default())?;
        if (mandatory_score - 1.0).abs() > f64::EPSILON {
            tracing::debug!("plan rejected by mandatory objectives (score {})", mandatory_score);
            return Ok(0.0);
        }

        self.objective_set_score(&self.prioritized, plan, opts)
    }

    fn objective_set_score(
        &self,
        objectives: &[Box<dyn Objective>],
        plan: &TeamFormationPlan,
        opts: ScoreOptions,
    ) -> Result<f64, FormationError> {
        let mut scores = Vec::with_capacity(objectives.len());
        for objective in objectives {
            let started = Instant::now();
            let score = objective.score(plan, &self.pool, opts)?;
            if let Some(instrument) = &self.instrument {
                instrument.objective_scored(objective.name(), started.elapsed());
            }
            scores.push(score);
        }
        Ok(lexicographic_score(&scores))
    }
}

/// Normalized weighted sum over scores in priority order. Weights are
/// descending powers of ten, so a full-scale difference in an earlier score
/// always outweighs every later score combined. An empty set scores 1:
/// nothing to satisfy.
pub fn lexicographic_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 1.0;
    }
    weighted_sum(scores) / weighted_sum(&vec![1.0; scores.len()])
}

fn weighted_sum(scores: &[f64]) -> f64 {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| score * 10f64.powi((scores.len() - i) as i32))
        .sum()
}
