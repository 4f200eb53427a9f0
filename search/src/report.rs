//! Run outcome types and the diagnostics report.

use crate::node::StateId;
use crate::options::SearchOptions;

/// Which engine produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BestFirst,
    DepthFirst,
}

impl Strategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BestFirst => "best_first",
            Self::DepthFirst => "depth_first",
        }
    }
}

/// Terminal outcome of a completed `do_search` call.
///
/// Neither variant is an error. `FrontierExhausted` with fewer solutions
/// than requested is how "no (more) solutions" is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The requested number of solutions was accepted.
    SolutionsSatisfied,
    /// No pending states remained.
    FrontierExhausted,
}

impl Termination {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SolutionsSatisfied => "solutions_satisfied",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// Engine lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    /// Constructed, or a run is in progress.
    Running,
    SolutionsSatisfied,
    FrontierExhausted,
    /// A run aborted with an error; bookkeeping holds the partial state.
    Failed,
}

impl EngineStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::SolutionsSatisfied => "solutions_satisfied",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::Failed => "failed",
        }
    }
}

impl From<Termination> for EngineStatus {
    fn from(t: Termination) -> Self {
        match t {
            Termination::SolutionsSatisfied => Self::SolutionsSatisfied,
            Termination::FrontierExhausted => Self::FrontierExhausted,
        }
    }
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Goal-tested states, root included. Best-first solutions are visited
    /// but never expanded, so this can exceed the closed count.
    pub visits: u64,
    /// Children returned by `build_children`.
    pub generated: u64,
    /// Children skipped by the duplicate check.
    pub duplicates_suppressed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Snapshot of an engine's bookkeeping after (or during) a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub status: EngineStatus,
    pub options: SearchOptions,
    pub stats: SearchStats,
    /// Accepted goal states, in discovery order.
    pub solutions: Vec<StateId>,
    /// Closed ids, in expansion order.
    pub closed: Vec<StateId>,
    /// Residual frontier ids, next-to-expand first.
    pub open: Vec<StateId>,
}

impl SearchReport {
    /// Convert to a `serde_json::Value`. Keys are sorted by `serde_json`'s
    /// default map, so equal reports serialize identically.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "closed": ids_to_json(&self.closed),
            "open": ids_to_json(&self.open),
            "options": {
                "admission": self.options.admission.as_str(),
                "requested_solutions": self.options.requested_solutions,
            },
            "solutions": ids_to_json(&self.solutions),
            "stats": {
                "duplicates_suppressed": self.stats.duplicates_suppressed,
                "frontier_high_water": self.stats.frontier_high_water,
                "generated": self.stats.generated,
                "visits": self.stats.visits,
            },
            "status": self.status.as_str(),
            "strategy": self.strategy.as_str(),
        })
    }

    /// Serialize to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }
}

fn ids_to_json(ids: &[StateId]) -> serde_json::Value {
    serde_json::Value::Array(
        ids.iter()
            .map(|id| serde_json::Value::String(id.as_str().to_string()))
            .collect(),
    )
}
