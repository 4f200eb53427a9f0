//! Greedy best-first engine.
//!
//! The frontier is ordered by the heuristic `h` alone. Accumulated cost `g`
//! plays no part in expansion order; this is greedy best-first, not A*.

use log::{debug, trace};

use crate::closed::ClosedSet;
use crate::contract::Problem;
use crate::error::SearchError;
use crate::frontier::PriorityQueue;
use crate::node::{Node, StateArena, StateId};
use crate::options::SearchOptions;
use crate::report::{EngineStatus, SearchReport, SearchStats, Strategy, Termination};

/// Best-first search over a [`Problem`].
///
/// A state accepted as a solution is never expanded: the run stops deepening
/// past it, and when it completes the requested count it is not closed
/// either.
pub struct BestFirstSearch<P: Problem> {
    problem: P,
    options: SearchOptions,
    arena: StateArena<P::State>,
    initial: StateId,
    open: PriorityQueue,
    closed: ClosedSet,
    solutions: Vec<StateId>,
    status: EngineStatus,
    stats: SearchStats,
}

impl<P: Problem> BestFirstSearch<P> {
    /// Engine that stops at the first solution.
    pub fn new(problem: P, initial: Node<P::State>) -> Self {
        Self::with_options(problem, initial, SearchOptions::default())
    }

    pub fn with_options(problem: P, initial: Node<P::State>, options: SearchOptions) -> Self {
        let initial_id = initial.id.clone();
        let mut arena = StateArena::new();
        arena.insert(initial);
        Self {
            problem,
            options,
            arena,
            initial: initial_id,
            open: PriorityQueue::new(),
            closed: ClosedSet::new(),
            solutions: Vec::new(),
            status: EngineStatus::Running,
            stats: SearchStats::default(),
        }
    }

    /// Run until the requested solutions are found or the frontier empties.
    ///
    /// Calling again after a terminal outcome returns that outcome without
    /// doing any work.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidOptions`] if the options fail validation.
    /// - [`SearchError::Hook`] if `build_children` or `is_solution` fails.
    /// - [`SearchError::DuplicateStateId`], [`SearchError::EmptyFrontier`] or
    ///   [`SearchError::MissingNode`] on an engine invariant violation.
    /// - [`SearchError::Aborted`] if an earlier call failed.
    ///
    /// After an error the bookkeeping views hold the partial state.
    pub fn do_search(&mut self) -> Result<Termination, SearchError<P::Error>> {
        match self.status {
            EngineStatus::SolutionsSatisfied => return Ok(Termination::SolutionsSatisfied),
            EngineStatus::FrontierExhausted => return Ok(Termination::FrontierExhausted),
            EngineStatus::Failed => return Err(SearchError::Aborted),
            EngineStatus::Running => {}
        }
        match self.run() {
            Ok(termination) => {
                self.status = termination.into();
                debug!(
                    "best-first finished: {} (solutions={}, closed={}, open={}, visits={})",
                    termination.as_str(),
                    self.solutions.len(),
                    self.closed.len(),
                    self.open.len(),
                    self.stats.visits
                );
                Ok(termination)
            }
            Err(err) => {
                self.status = EngineStatus::Failed;
                Err(err)
            }
        }
    }

    fn run(&mut self) -> Result<Termination, SearchError<P::Error>> {
        self.options.validate()?;

        let mut current = self.initial.clone();
        loop {
            self.stats.visits += 1;
            let node = self
                .arena
                .get(&current)
                .ok_or_else(|| SearchError::MissingNode {
                    id: current.clone(),
                })?;
            trace!("best-first visit {} (h={}, g={})", node.id, node.h, node.g);

            if self.problem.is_solution(node).map_err(SearchError::Hook)? {
                self.solutions.push(current.clone());
                if self.solutions.len() >= self.options.requested_solutions {
                    return Ok(Termination::SolutionsSatisfied);
                }
            } else {
                let children = self
                    .problem
                    .build_children(node)
                    .map_err(SearchError::Hook)?;
                self.admit_children(&current, children);
            }

            self.closed.insert(current)?;

            if self.open.is_empty() {
                return Ok(Termination::FrontierExhausted);
            }
            current = self.open.remove_root()?;
        }
    }

    /// Enqueue every child whose id is neither closed nor pending, and record
    /// all child ids on the parent.
    ///
    /// The parent is about to be closed, so a child carrying the parent's own
    /// id is treated as closed.
    fn admit_children(&mut self, parent: &StateId, children: Vec<Node<P::State>>) {
        let mut child_ids = Vec::with_capacity(children.len());
        for child in children {
            self.stats.generated += 1;
            child_ids.push(child.id.clone());

            if child.id == *parent
                || self.closed.contains(&child.id)
                || self.open.contains(&child.id)
            {
                self.stats.duplicates_suppressed += 1;
                trace!("best-first skip duplicate {}", child.id);
                continue;
            }
            self.open.insert(&child);
            self.arena.insert(child);
        }
        self.stats.frontier_high_water = self.open.high_water() as u64;
        if let Some(node) = self.arena.get_mut(parent) {
            node.children = child_ids;
        }
    }

    /// Expanded states, in expansion order.
    #[must_use]
    pub fn closed(&self) -> Vec<&Node<P::State>> {
        self.arena.resolve(self.closed.ids())
    }

    /// Residual frontier, lowest `h` first.
    #[must_use]
    pub fn open(&self) -> Vec<&Node<P::State>> {
        self.arena.resolve(self.open.items())
    }

    /// Accepted goal states, in discovery order.
    #[must_use]
    pub fn solutions(&self) -> Vec<&Node<P::State>> {
        self.arena.resolve(&self.solutions)
    }

    /// Look up any retained node, e.g. to walk a solution's parent chain.
    #[must_use]
    pub fn node(&self, id: &StateId) -> Option<&Node<P::State>> {
        self.arena.get(id)
    }

    #[must_use]
    pub fn arena(&self) -> &StateArena<P::State> {
        &self.arena
    }

    #[must_use]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    #[must_use]
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn report(&self) -> SearchReport {
        SearchReport {
            strategy: Strategy::BestFirst,
            status: self.status,
            options: self.options.clone(),
            stats: self.stats,
            solutions: self.solutions.clone(),
            closed: self.closed.ids().to_vec(),
            open: self.open.items(),
        }
    }
}
