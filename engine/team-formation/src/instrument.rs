//! Optional scoring instrumentation.
//!
//! The formation search scores thousands of plans per run, so knowing where
//! the time goes matters. Instrumentation is a hook handed to the appraiser
//! at construction rather than a process-wide singleton, so two concurrent
//! formation runs never share counters by accident.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

/// Observes each objective scoring call. Implementations must be safe to
/// share across concurrent scoring calls.
pub trait AppraisalInstrument: Send + Sync {
    fn objective_scored(&self, objective: &str, elapsed: Duration);
}

/// Per-objective call counts and cumulative time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObjectiveTiming {
    pub calls: u64,
    pub total: Duration,
}

/// Accumulating [`AppraisalInstrument`] suitable for one formation run.
#[derive(Debug, Default)]
pub struct ScoringTimings {
    entries: Mutex<BTreeMap<String, ObjectiveTiming>>,
}

impl ScoringTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the timings collected so far.
    pub fn snapshot(&self) -> BTreeMap<String, ObjectiveTiming> {
        self.entries.lock().map(|entries| entries.clone()).unwrap_or_default()
    }
}

impl AppraisalInstrument for ScoringTimings {
    fn objective_scored(&self, objective: &str, elapsed: Duration) {
        if let Ok(mut entries) = self.entries.lock() {
            let timing = entries.entry(objective.to_string()).or_default();
            timing.calls += 1;
            timing.total += elapsed;
        }
    }
}
