//! Statespace Search: generic best-first and depth-first state-space search.
//!
//! A problem plugs in by implementing [`contract::SearchState`] for its node
//! payload and [`contract::Problem`] for the two search hooks (child
//! generation and goal test). The engines own all bookkeeping: the open
//! frontier, the closed set, and the accumulated solutions.
//!
//! # Crate dependency graph
//!
//! ```text
//! statespace_search  ←  statespace_harness
//! (engines, frontier)   (worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`Node`]: one state plus its search bookkeeping (`g`, `h`, depth, parent)
//! - [`StateArena`]: single owner of every retained node, keyed by [`StateId`]
//! - [`PriorityQueue`]: min-heap frontier ordered by heuristic `h`
//! - [`BestFirstSearch`]: greedy best-first engine (orders by `h`, not `g + h`)
//! - [`DepthFirstSearch`]: LIFO engine with a pending-id index
//! - [`SearchOptions`]: requested solution count and admission policy

#![forbid(unsafe_code)]

pub mod best_first;
pub mod closed;
pub mod contract;
pub mod depth_first;
pub mod error;
pub mod frontier;
pub mod node;
pub mod options;
pub mod report;

pub use best_first::BestFirstSearch;
pub use closed::ClosedSet;
pub use contract::{FnProblem, Problem, SearchState};
pub use depth_first::DepthFirstSearch;
pub use error::{DuplicateStateId, FrontierError, SearchError};
pub use frontier::PriorityQueue;
pub use node::{Node, StateArena, StateId};
pub use options::{AdmissionPolicy, SearchOptions};
pub use report::{EngineStatus, SearchReport, SearchStats, Strategy, Termination};
