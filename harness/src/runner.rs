//! Harness runner: executes a world under a chosen engine.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig → world.initial() → {BestFirst | DepthFirst}::with_options()
//!   → do_search() → RunOutcome { termination, report, solutions }
//! ```
//!
//! On failure the runner returns the error alongside the partial report so
//! callers can see how far the run got.

use log::info;

use statespace_search::{
    BestFirstSearch, DepthFirstSearch, Node, SearchError, SearchOptions, SearchReport, Strategy,
    Termination,
};

use crate::contract::SearchWorld;

/// Which engine to run, and with what options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub strategy: Strategy,
    pub options: SearchOptions,
}

impl RunConfig {
    #[must_use]
    pub fn best_first() -> Self {
        Self {
            strategy: Strategy::BestFirst,
            options: SearchOptions::default(),
        }
    }

    #[must_use]
    pub fn depth_first() -> Self {
        Self {
            strategy: Strategy::DepthFirst,
            options: SearchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::best_first()
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunOutcome<S> {
    pub world_id: String,
    pub termination: Termination,
    pub report: SearchReport,
    /// Solution nodes in discovery order.
    pub solutions: Vec<Node<S>>,
}

/// A failed run with the bookkeeping it left behind.
#[derive(Debug, Clone)]
pub struct RunFailure<E> {
    pub world_id: String,
    pub error: SearchError<E>,
    pub report: SearchReport,
}

impl<E: std::fmt::Display> std::fmt::Display for RunFailure<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "run of world {} failed: {}", self.world_id, self.error)
    }
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for RunFailure<E> {}

/// Run `world` from its own initial state.
///
/// # Errors
///
/// Returns a [`RunFailure`] carrying the engine error and the partial report.
pub fn run_world<W>(world: W, config: &RunConfig) -> Result<RunOutcome<W::State>, RunFailure<W::Error>>
where
    W: SearchWorld,
    W::State: Clone,
{
    let initial = world.initial();
    run_search(world, initial, config)
}

/// Run `world` from an explicit initial node.
///
/// # Errors
///
/// Returns a [`RunFailure`] carrying the engine error and the partial report.
pub fn run_search<W>(
    world: W,
    initial: Node<W::State>,
    config: &RunConfig,
) -> Result<RunOutcome<W::State>, RunFailure<W::Error>>
where
    W: SearchWorld,
    W::State: Clone,
{
    let world_id = world.world_id().to_string();
    info!(
        "running world {world_id} with {} (requested_solutions={}, admission={})",
        config.strategy.as_str(),
        config.options.requested_solutions,
        config.options.admission.as_str()
    );

    let (result, report, solutions) = match config.strategy {
        Strategy::BestFirst => {
            let mut engine = BestFirstSearch::with_options(world, initial, config.options.clone());
            let result = engine.do_search();
            let solutions: Vec<_> = engine.solutions().into_iter().cloned().collect();
            (result, engine.report(), solutions)
        }
        Strategy::DepthFirst => {
            let mut engine = DepthFirstSearch::with_options(world, initial, config.options.clone());
            let result = engine.do_search();
            let solutions: Vec<_> = engine.solutions().into_iter().cloned().collect();
            (result, engine.report(), solutions)
        }
    };

    match result {
        Ok(termination) => {
            info!(
                "world {world_id}: {} with {} solution(s)",
                termination.as_str(),
                report.solutions.len()
            );
            Ok(RunOutcome {
                world_id,
                termination,
                report,
                solutions,
            })
        }
        Err(error) => Err(RunFailure {
            world_id,
            error,
            report,
        }),
    }
}
