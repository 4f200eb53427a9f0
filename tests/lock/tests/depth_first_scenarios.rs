//! Depth-first lock tests: LIFO pop order, expansion of accepted
//! solutions, multi-solution accumulation, and both admission policies.
//!
//! The `legacy_*` tests pin the literal admission rule (skip a child only
//! when it is closed AND pending). Strict admission is the default.

use lock_tests::fixtures::{abc_graph, diamond_graph, Probe, ProbeError};
use statespace_harness::contract::SearchWorld;
use statespace_harness::worlds::graph::GraphWorld;
use statespace_harness::worlds::queens::Queens;
use statespace_search::{
    AdmissionPolicy, DepthFirstSearch, EngineStatus, FnProblem, Node, SearchError, SearchOptions,
    SearchState, StateId, Termination,
};

fn ids<S>(nodes: &[&Node<S>]) -> Vec<String> {
    nodes.iter().map(|n| n.id.as_str().to_string()).collect()
}

fn legacy() -> SearchOptions {
    SearchOptions::default().with_admission(AdmissionPolicy::Legacy)
}

// ---------------------------------------------------------------------------
// A → B, C: push order {B, C}, pop order {C, B}
// ---------------------------------------------------------------------------

#[test_log::test]
fn pop_order_is_reverse_of_push_order() {
    let world = abc_graph(&[]);
    let initial = world.initial();
    let mut engine = DepthFirstSearch::new(Probe::new(world), initial);

    assert_eq!(engine.do_search().unwrap(), Termination::FrontierExhausted);
    assert_eq!(
        engine.problem().visits(),
        vec![StateId::new("A"), StateId::new("C"), StateId::new("B")]
    );
    assert_eq!(ids(&engine.closed()), vec!["A", "C", "B"]);
}

#[test]
fn goal_on_last_pushed_child_stops_before_the_first() {
    let world = abc_graph(&["C"]);
    let initial = world.initial();
    let mut engine = DepthFirstSearch::new(world, initial);

    assert_eq!(engine.do_search().unwrap(), Termination::SolutionsSatisfied);
    assert_eq!(ids(&engine.solutions()), vec!["C"]);
    assert_eq!(ids(&engine.closed()), vec!["A"]);
    assert_eq!(ids(&engine.open()), vec!["B"]);
}

// ---------------------------------------------------------------------------
// Round trip: lone goal state with no children
// ---------------------------------------------------------------------------

fn lone_goal() -> GraphWorld {
    GraphWorld::new("A").vertex("A", 0.0).goal("A").unwrap()
}

#[test]
fn lone_goal_below_requested_count_is_closed_after_one_iteration() {
    let world = lone_goal();
    let initial = world.initial();
    let mut engine = DepthFirstSearch::with_options(
        world,
        initial,
        SearchOptions::default().with_requested_solutions(2),
    );

    assert_eq!(engine.do_search().unwrap(), Termination::FrontierExhausted);
    assert_eq!(ids(&engine.solutions()), vec!["A"]);
    assert_eq!(ids(&engine.closed()), vec!["A"]);
    assert!(engine.open().is_empty());
    assert_eq!(engine.stats().visits, 1);
}

// Meeting the requested count ends the run before the close step.
#[test]
fn lone_goal_meeting_requested_count_stops_before_closing() {
    let world = lone_goal();
    let initial = world.initial();
    let mut engine = DepthFirstSearch::new(world, initial);

    assert_eq!(engine.do_search().unwrap(), Termination::SolutionsSatisfied);
    assert_eq!(ids(&engine.solutions()), vec!["A"]);
    assert!(engine.closed().is_empty());
    assert!(engine.open().is_empty());
    assert_eq!(engine.stats().visits, 1);
}

// ---------------------------------------------------------------------------
// Binary tree: visit order must be a reverse-child preorder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Path(String);

impl SearchState for Path {
    fn identity(&self) -> StateId {
        StateId::new(format!("/{}", self.0))
    }

    fn compute_heuristic_grade(&self) -> f64 {
        0.0
    }
}

fn expected_preorder(prefix: &str, depth: usize, out: &mut Vec<StateId>) {
    out.push(StateId::new(format!("/{prefix}")));
    if prefix.len() < depth {
        for bit in ["1", "0"] {
            expected_preorder(&format!("{prefix}{bit}"), depth, out);
        }
    }
}

#[test]
fn expansion_order_is_lifo_on_a_tree() {
    const DEPTH: usize = 4;
    let tree = FnProblem::new(
        |parent: &Node<Path>| {
            if parent.state.0.len() >= DEPTH {
                return Vec::new();
            }
            ["0", "1"]
                .iter()
                .map(|bit| Node::child(parent, Path(format!("{}{bit}", parent.state.0)), 1.0, *bit))
                .collect()
        },
        |_: &Node<Path>| false,
    );
    let mut engine = DepthFirstSearch::new(Probe::new(tree), Node::root(Path(String::new())));
    engine.do_search().unwrap();

    let mut expected = Vec::new();
    expected_preorder("", DEPTH, &mut expected);
    assert_eq!(engine.problem().visits(), expected);
    assert_eq!(engine.closed().len(), (1 << (DEPTH + 1)) - 1);
}

// ---------------------------------------------------------------------------
// Multi-solution accumulation
// ---------------------------------------------------------------------------

#[test]
fn six_queens_has_four_solutions() {
    let world = Queens::new(6);
    let initial = world.initial();
    let mut engine = DepthFirstSearch::with_options(
        world,
        initial,
        SearchOptions::default().with_requested_solutions(100),
    );

    assert_eq!(engine.do_search().unwrap(), Termination::FrontierExhausted);
    assert_eq!(engine.solutions().len(), 4);
    for solution in engine.solutions() {
        assert!(solution.is_admissible());
        assert_eq!(solution.depth, 6);
    }
}

#[test]
fn requested_count_caps_solutions() {
    for requested in 1..=6 {
        let world = Queens::new(6);
        let initial = world.initial();
        let mut engine = DepthFirstSearch::with_options(
            world,
            initial,
            SearchOptions::default().with_requested_solutions(requested),
        );
        let outcome = engine.do_search().unwrap();

        let found = engine.solutions().len();
        assert!(found <= requested, "found {found} > requested {requested}");
        assert_eq!(found, requested.min(4));
        let expected = if requested <= 4 {
            Termination::SolutionsSatisfied
        } else {
            Termination::FrontierExhausted
        };
        assert_eq!(outcome, expected, "requested={requested}");
    }
}

#[test]
fn eight_queens_has_ninety_two_solutions() {
    let world = Queens::new(8);
    let initial = world.initial();
    let mut engine = DepthFirstSearch::with_options(
        world,
        initial,
        SearchOptions::default().with_requested_solutions(1000),
    );
    engine.do_search().unwrap();
    assert_eq!(engine.solutions().len(), 92);
}

// ---------------------------------------------------------------------------
// Admission policies on S → A, B; A → G, S; B → A, G
// ---------------------------------------------------------------------------

#[test]
fn strict_admission_skips_pending_and_closed() {
    let world = diamond_graph();
    let initial = world.initial();
    let mut engine = DepthFirstSearch::new(world, initial);

    assert_eq!(engine.do_search().unwrap(), Termination::SolutionsSatisfied);
    assert_eq!(ids(&engine.closed()), vec!["S", "B"]);
    assert_eq!(ids(&engine.open()), vec!["A"]);
    assert_eq!(engine.stats().duplicates_suppressed, 1);
}

#[test]
fn legacy_admission_pushes_pending_state_twice() {
    let world = diamond_graph();
    let initial = world.initial();
    let mut engine = DepthFirstSearch::with_options(world, initial, legacy());

    assert_eq!(engine.do_search().unwrap(), Termination::SolutionsSatisfied);
    assert_eq!(ids(&engine.closed()), vec!["S", "B"]);
    assert_eq!(ids(&engine.open()), vec!["A", "A"]);
    assert_eq!(engine.stats().duplicates_suppressed, 0);
}

#[test_log::test]
fn legacy_admission_fails_when_a_closed_state_is_reexpanded() {
    let world = diamond_graph();
    let initial = world.initial();
    let mut engine = DepthFirstSearch::with_options(
        world,
        initial,
        legacy().with_requested_solutions(2),
    );

    let err = engine.do_search().unwrap_err();
    assert_eq!(
        err,
        SearchError::DuplicateStateId {
            id: StateId::new("S")
        }
    );
    assert_eq!(engine.status(), EngineStatus::Failed);
    assert_eq!(ids(&engine.solutions()), vec!["G"]);
    assert_eq!(ids(&engine.closed()), vec!["S", "B", "G", "A"]);
    assert_eq!(engine.do_search().unwrap_err(), SearchError::Aborted);
}

#[test]
fn strict_admission_survives_the_same_cycle() {
    let world = diamond_graph();
    let initial = world.initial();
    let mut engine = DepthFirstSearch::with_options(
        world,
        initial,
        SearchOptions::default().with_requested_solutions(2),
    );

    assert_eq!(engine.do_search().unwrap(), Termination::FrontierExhausted);
    assert_eq!(ids(&engine.solutions()), vec!["G"]);
    assert_eq!(ids(&engine.closed()), vec!["S", "B", "G", "A"]);
}

// ---------------------------------------------------------------------------
// Hook failure
// ---------------------------------------------------------------------------

#[test]
fn hook_failure_aborts_with_partial_state() {
    let world = abc_graph(&[]);
    let initial = world.initial();
    let mut engine = DepthFirstSearch::new(Probe::new(world).failing_at(2), initial);

    let err = engine.do_search().unwrap_err();
    assert_eq!(err, SearchError::Hook(ProbeError::Injected { visit: 2 }));
    assert_eq!(ids(&engine.closed()), vec!["A"]);
    assert_eq!(ids(&engine.open()), vec!["B"]);
}
