//! Closed set: ids of expanded states, in expansion order.

use std::collections::HashSet;

use crate::error::DuplicateStateId;
use crate::node::StateId;

/// Visited-state index shared by both engines.
///
/// Inserting an id twice is rejected, never overwritten: the engines'
/// admission checks are supposed to make it impossible.
#[derive(Debug, Clone, Default)]
pub struct ClosedSet {
    order: Vec<StateId>,
    members: HashSet<StateId>,
}

impl ClosedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as expanded.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateStateId`] if `id` is already closed; the set is
    /// left unchanged.
    pub fn insert(&mut self, id: StateId) -> Result<(), DuplicateStateId> {
        if !self.members.insert(id.clone()) {
            return Err(DuplicateStateId { id });
        }
        self.order.push(id);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, id: &StateId) -> bool {
        self.members.contains(id)
    }

    /// Closed ids in expansion order.
    #[must_use]
    pub fn ids(&self) -> &[StateId] {
        &self.order
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
