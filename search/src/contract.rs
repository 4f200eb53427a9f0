//! State and problem contract traits.

use crate::node::{Node, StateId};

/// Capability required of any problem's state payload.
///
/// # Contract
///
/// - `identity` must be deterministic: equal logical states produce equal
///   ids. Closed-set deduplication is only meaningful under this rule.
/// - `compute_heuristic_grade` is pure. The engines read the value cached on
///   [`Node::h`]; a caller that mutates a payload must call
///   [`Node::refresh_heuristic`] itself.
pub trait SearchState {
    /// Identity key of this state.
    fn identity(&self) -> StateId;

    /// Heuristic estimate of the remaining cost to a goal.
    fn compute_heuristic_grade(&self) -> f64;

    /// Whether this state is legal under the problem's rules.
    ///
    /// The engines do not read this; child generation decides whether
    /// inadmissible states become children at all.
    fn is_admissible(&self) -> bool {
        true
    }
}

/// The two problem-specific search hooks.
///
/// Hook errors are not caught: they abort the run and surface as
/// [`crate::SearchError::Hook`].
pub trait Problem {
    /// Node payload type.
    type State: SearchState;
    /// Hook failure type. Use [`std::convert::Infallible`] when hooks cannot fail.
    type Error;

    /// Generate the successors of `parent`.
    ///
    /// Each returned node must carry its `id`, `g` and `parent`; build them
    /// with [`Node::child`]. The engine records their ids, in order, as
    /// `parent.children`.
    fn build_children(&self, parent: &Node<Self::State>)
        -> Result<Vec<Node<Self::State>>, Self::Error>;

    /// Goal test. Must not depend on engine bookkeeping.
    fn is_solution(&self, node: &Node<Self::State>) -> Result<bool, Self::Error>;
}

/// A [`Problem`] assembled from two closures.
pub struct FnProblem<S, B, G> {
    build: B,
    goal: G,
    _state: std::marker::PhantomData<fn() -> S>,
}

impl<S, B, G> FnProblem<S, B, G>
where
    S: SearchState,
    B: Fn(&Node<S>) -> Vec<Node<S>>,
    G: Fn(&Node<S>) -> bool,
{
    /// Wrap infallible `build_children` and `is_solution` closures.
    pub fn new(build: B, goal: G) -> Self {
        Self {
            build,
            goal,
            _state: std::marker::PhantomData,
        }
    }
}

impl<S, B, G> Problem for FnProblem<S, B, G>
where
    S: SearchState,
    B: Fn(&Node<S>) -> Vec<Node<S>>,
    G: Fn(&Node<S>) -> bool,
{
    type State = S;
    type Error = std::convert::Infallible;

    fn build_children(&self, parent: &Node<S>) -> Result<Vec<Node<S>>, Self::Error> {
        Ok((self.build)(parent))
    }

    fn is_solution(&self, node: &Node<S>) -> Result<bool, Self::Error> {
        Ok((self.goal)(node))
    }
}
