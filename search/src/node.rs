//! Search nodes, state identity, and the node arena.

use std::borrow::Borrow;
use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::contract::SearchState;

/// Identity key of a state.
///
/// Two nodes with equal ids are the same search state; this is the only
/// identity test the closed set and the frontiers use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(String);

impl StateId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive a deterministic id from canonical identity bytes.
    ///
    /// Hash = `sha256(domain || data)`, formatted `"sha256:<hex_digest>"`.
    /// `domain` should be a null-terminated prefix unique to the problem so
    /// that two problems never share ids for equal byte layouts.
    #[must_use]
    pub fn fingerprint(domain: &[u8], data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        hasher.update(data);
        Self(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A state together with its search bookkeeping.
///
/// `parent` and `children` are id references into the owning
/// [`StateArena`]; a node never owns its relatives.
#[derive(Debug, Clone)]
pub struct Node<S> {
    /// Identity key, fixed at construction.
    pub id: StateId,
    /// Problem payload.
    pub state: S,
    /// Accumulated path cost from the initial state.
    pub g: f64,
    /// Heuristic estimate of remaining cost (see [`Node::refresh_heuristic`]).
    pub h: f64,
    /// Lower bound for adversarial extensions. Not read by the engines.
    pub alpha: f64,
    /// Upper bound for adversarial extensions. Not read by the engines.
    pub beta: f64,
    /// Distance from the root along the parent chain (root = 0).
    pub depth: u32,
    /// Predecessor id (`None` for the root).
    pub parent: Option<StateId>,
    /// Successor ids in generation order, filled in when the node is expanded.
    pub children: Vec<StateId>,
    /// Label of the first move taken from the root on this branch.
    pub root_move: Option<String>,
}

impl<S: SearchState> Node<S> {
    /// Build an initial node: `g = 0`, depth 0, no parent.
    #[must_use]
    pub fn root(state: S) -> Self {
        let id = state.identity();
        let h = state.compute_heuristic_grade();
        Self {
            id,
            state,
            g: 0.0,
            h,
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
            depth: 0,
            parent: None,
            children: Vec::new(),
            root_move: None,
        }
    }

    /// Build a successor of `parent` reached by `move_label` at `step_cost`.
    ///
    /// A child of the root takes `move_label` as its `root_move`; deeper
    /// nodes inherit the parent's.
    #[must_use]
    pub fn child(parent: &Node<S>, state: S, step_cost: f64, move_label: impl Into<String>) -> Self {
        let root_move = if parent.parent.is_none() {
            Some(move_label.into())
        } else {
            parent.root_move.clone()
        };
        Self {
            parent: Some(parent.id.clone()),
            g: parent.g + step_cost,
            depth: parent.depth + 1,
            root_move,
            ..Self::root(state)
        }
    }

    /// Recompute `h` after the payload has been mutated.
    pub fn refresh_heuristic(&mut self) {
        self.h = self.state.compute_heuristic_grade();
    }

    /// Whether the payload is legal under the problem's rules.
    #[must_use]
    pub fn is_admissible(&self) -> bool {
        self.state.is_admissible()
    }
}

impl<S> Node<S> {
    /// `f = g + h`, computed on every read.
    #[must_use]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Single owner of every node retained during a search run.
///
/// The first node inserted for an id wins; later instances carrying the same
/// id are dropped.
#[derive(Debug, Clone)]
pub struct StateArena<S> {
    nodes: HashMap<StateId, Node<S>>,
    order: Vec<StateId>,
}

impl<S> StateArena<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert `node` unless its id is already present.
    ///
    /// Returns `false` if an earlier node with the same id was kept.
    pub fn insert(&mut self, node: Node<S>) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
        true
    }

    #[must_use]
    pub fn get(&self, id: &StateId) -> Option<&Node<S>> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &StateId) -> Option<&mut Node<S>> {
        self.nodes.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &StateId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Resolve a list of ids, skipping any that are not in the arena.
    #[must_use]
    pub fn resolve<I>(&self, ids: I) -> Vec<&Node<S>>
    where
        I: IntoIterator,
        I::Item: Borrow<StateId>,
    {
        ids.into_iter()
            .filter_map(|id| self.nodes.get(id.borrow()))
            .collect()
    }

    /// Nodes in first-discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Node<S>> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S> Default for StateArena<S> {
    fn default() -> Self {
        Self::new()
    }
}
