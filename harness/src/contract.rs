//! World contract: what a problem must provide to be run by the harness.

use statespace_search::{Node, Problem};

/// A self-describing search problem.
///
/// Extends [`Problem`] (the two search hooks) with a stable identifier and
/// the world's canonical starting state.
pub trait SearchWorld: Problem {
    /// Unique world identifier, used in logs and reports.
    fn world_id(&self) -> &str;

    /// The initial node for a run.
    fn initial(&self) -> Node<Self::State>;
}
