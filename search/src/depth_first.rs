//! Depth-first engine.
//!
//! The frontier is a LIFO stack of ids plus a pending-id index, so the
//! admission check never scans the stack.

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::closed::ClosedSet;
use crate::contract::Problem;
use crate::error::SearchError;
use crate::node::{Node, StateArena, StateId};
use crate::options::SearchOptions;
use crate::report::{EngineStatus, SearchReport, SearchStats, Strategy, Termination};

/// Depth-first search over a [`Problem`].
///
/// Unlike [`crate::BestFirstSearch`], a solution that does not complete the
/// requested count is still expanded, so solutions below solutions are found.
/// Children are pushed in generation order; the last generated is expanded
/// first.
pub struct DepthFirstSearch<P: Problem> {
    problem: P,
    options: SearchOptions,
    arena: StateArena<P::State>,
    initial: StateId,
    stack: Vec<StateId>,
    pending: HashSet<StateId>,
    closed: ClosedSet,
    solutions: Vec<StateId>,
    status: EngineStatus,
    stats: SearchStats,
}

impl<P: Problem> DepthFirstSearch<P> {
    /// Engine that stops at the first solution, with strict admission.
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
            stack: Vec::new(),
            pending: HashSet::new(),
            closed: ClosedSet::new(),
            solutions: Vec::new(),
            status: EngineStatus::Running,
            stats: SearchStats::default(),
        }
    }

    /// Run until the requested solutions are found or the stack empties.
    ///
    /// Calling again after a terminal outcome returns that outcome without
    /// doing any work.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidOptions`] if the options fail validation.
    /// - [`SearchError::Hook`] if `build_children` or `is_solution` fails.
    /// - [`SearchError::DuplicateStateId`] when [`crate::AdmissionPolicy::Legacy`]
    ///   lets an already-closed state be expanded again.
    /// - [`SearchError::MissingNode`] on an arena invariant violation.
    /// - [`SearchError::Aborted`] if an earlier call failed.
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
                    "depth-first finished: {} (solutions={}, closed={}, open={}, visits={})",
                    termination.as_str(),
                    self.solutions.len(),
                    self.closed.len(),
                    self.stack.len(),
                    self.stats.visits
                );
                Ok(termination)
            }
            Err(err) => {
                if let SearchError::DuplicateStateId { id } = &err {
                    warn!(
                        "depth-first re-expanded closed state {id} (admission={})",
                        self.options.admission.as_str()
                    );
                }
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
            trace!("depth-first visit {} (depth={})", node.id, node.depth);

            if self.problem.is_solution(node).map_err(SearchError::Hook)? {
                self.solutions.push(current.clone());
                if self.solutions.len() >= self.options.requested_solutions {
                    return Ok(Termination::SolutionsSatisfied);
                }
            }

            let children = self
                .problem
                .build_children(node)
                .map_err(SearchError::Hook)?;
            self.admit_children(&current, children);

            self.closed.insert(current)?;

            match self.stack.pop() {
                None => return Ok(Termination::FrontierExhausted),
                Some(next) => {
                    self.pending.remove(&next);
                    current = next;
                }
            }
        }
    }

    /// Push children per the admission policy and record all child ids on
    /// the parent.
    ///
    /// The parent is about to be closed, so its own id counts as closed.
    fn admit_children(&mut self, parent: &StateId, children: Vec<Node<P::State>>) {
        let admission = self.options.admission;
        let mut child_ids = Vec::with_capacity(children.len());
        for child in children {
            self.stats.generated += 1;
            child_ids.push(child.id.clone());

            let closed = child.id == *parent || self.closed.contains(&child.id);
            let pending = self.pending.contains(&child.id);
            if admission.rejects(closed, pending) {
                self.stats.duplicates_suppressed += 1;
                trace!("depth-first skip duplicate {}", child.id);
                continue;
            }
            self.stack.push(child.id.clone());
            self.pending.insert(child.id.clone());
            self.arena.insert(child);
        }
        self.stats.frontier_high_water = self.stats.frontier_high_water.max(self.stack.len() as u64);
        if let Some(node) = self.arena.get_mut(parent) {
            node.children = child_ids;
        }
    }

    /// Expanded states, in expansion order.
    #[must_use]
    pub fn closed(&self) -> Vec<&Node<P::State>> {
        self.arena.resolve(self.closed.ids())
    }

    /// Residual stack, top (next to expand) first.
    ///
    /// Under [`crate::AdmissionPolicy::Legacy`] an id may appear more than once.
    #[must_use]
    pub fn open(&self) -> Vec<&Node<P::State>> {
        self.arena.resolve(self.stack.iter().rev())
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
            strategy: Strategy::DepthFirst,
            status: self.status,
            options: self.options.clone(),
            stats: self.stats,
            solutions: self.solutions.clone(),
            closed: self.closed.ids().to_vec(),
            open: self.stack.iter().rev().cloned().collect(),
        }
    }
}
