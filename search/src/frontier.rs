//! Min-heap frontier ordered by heuristic value.
//!
//! Ordering key is `(h, insertion sequence)`: lowest `h` first, ties broken
//! FIFO (the earlier insert wins). `h` is compared with [`f64::total_cmp`],
//! so a NaN heuristic sorts after `+inf` instead of corrupting the heap.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::FrontierError;
use crate::node::{Node, StateId};

/// The frontier ordering key.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub h: f64,
    pub seq: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.h
            .total_cmp(&other.h)
            .then(self.seq.cmp(&other.seq))
    }
}

/// A heap entry wrapping a state id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// lowest `h` first.
#[derive(Debug, Clone)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    id: StateId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier.
///
/// Holds state ids only; the nodes themselves live in the engine's
/// [`crate::StateArena`]. Insertion is unconditional: duplicate suppression
/// is the caller's job, done with [`PriorityQueue::contains`] beforehand.
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<FrontierEntry>,
    /// Multiplicity of each id currently in the heap.
    members: HashMap<StateId, usize>,
    next_seq: u64,
    high_water: usize,
}

impl PriorityQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node` keyed by its current `h`. O(log n).
    pub fn insert<S>(&mut self, node: &Node<S>) {
        self.insert_id(node.id.clone(), node.h);
    }

    /// Add an id with an explicit heuristic value. O(log n).
    pub fn insert_id(&mut self, id: StateId, h: f64) {
        let key = FrontierKey {
            h,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        *self.members.entry(id.clone()).or_insert(0) += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            id,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the id with the smallest `h`. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Empty`] if the queue is empty.
    pub fn remove_root(&mut self) -> Result<StateId, FrontierError> {
        let entry = self.heap.pop().ok_or(FrontierError::Empty)?;
        if let Some(count) = self.members.get_mut(&entry.id) {
            *count -= 1;
            if *count == 0 {
                self.members.remove(&entry.id);
            }
        }
        Ok(entry.id)
    }

    /// Membership by id equality. O(1) average.
    #[must_use]
    pub fn contains(&self, id: &StateId) -> bool {
        self.members.contains_key(id)
    }

    /// Key of the next entry `remove_root` would return.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|e| e.key.0)
    }

    /// Snapshot of all contained ids, in the order `remove_root` would yield them.
    #[must_use]
    pub fn items(&self) -> Vec<StateId> {
        let mut entries: Vec<&FrontierEntry> = self.heap.iter().collect();
        entries.sort_by(|a, b| a.key.0.cmp(&b.key.0));
        entries.into_iter().map(|e| e.id.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
