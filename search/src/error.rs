//! Typed search errors.
//!
//! Running out of frontier without enough solutions is NOT an error: it is
//! the normal [`crate::report::Termination::FrontierExhausted`] outcome, and
//! callers inspect `solutions()` afterwards. The types here cover pre-flight
//! option failures, engine invariant violations, and hook failures.

use crate::node::StateId;

/// Removal was attempted on an empty frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// `remove_root` called with `len() == 0`.
    Empty,
}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "remove from empty frontier"),
        }
    }
}

impl std::error::Error for FrontierError {}

/// An id was inserted into the closed set twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateStateId {
    pub id: StateId,
}

impl std::fmt::Display for DuplicateStateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "state id already closed: {}", self.id)
    }
}

impl std::error::Error for DuplicateStateId {}

/// Failure of a search run.
///
/// `E` is the problem's hook error type. Whatever `closed`, `open` and
/// `solutions` held when the error surfaced stays readable on the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError<E> {
    /// Options rejected before any step was taken.
    InvalidOptions { detail: String },
    /// The engine popped an empty frontier (engine bug).
    EmptyFrontier,
    /// The engine tried to close an already-closed id.
    DuplicateStateId { id: StateId },
    /// A frontier id had no node in the arena (engine bug).
    MissingNode { id: StateId },
    /// `do_search` was called again after a run failed.
    Aborted,
    /// `build_children` or `is_solution` failed.
    Hook(E),
}

impl<E> From<FrontierError> for SearchError<E> {
    fn from(err: FrontierError) -> Self {
        match err {
            FrontierError::Empty => Self::EmptyFrontier,
        }
    }
}

impl<E> From<DuplicateStateId> for SearchError<E> {
    fn from(err: DuplicateStateId) -> Self {
        Self::DuplicateStateId { id: err.id }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for SearchError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOptions { detail } => write!(f, "invalid search options: {detail}"),
            Self::EmptyFrontier => write!(f, "frontier invariant violated: pop from empty frontier"),
            Self::DuplicateStateId { id } => {
                write!(f, "closed-set invariant violated: duplicate state id {id}")
            }
            Self::MissingNode { id } => write!(f, "arena invariant violated: no node for {id}"),
            Self::Aborted => write!(f, "engine aborted by an earlier failed run"),
            Self::Hook(err) => write!(f, "problem hook failed: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for SearchError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hook(err) => Some(err),
            _ => None,
        }
    }
}
