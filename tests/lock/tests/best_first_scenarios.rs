//! Best-first lock tests: heuristic ordering, early stop on solutions,
//! duplicate suppression, and the single-node round trip.

use lock_tests::fixtures::{abc_graph, diamond_graph, three_move_puzzle, Probe};
use statespace_harness::contract::SearchWorld;
use statespace_harness::worlds::graph::GraphWorld;
use statespace_harness::worlds::sliding_tile::GOAL;
use statespace_search::{BestFirstSearch, Node, SearchOptions, StateId, Termination};

fn ids<S>(nodes: &[&Node<S>]) -> Vec<String> {
    nodes.iter().map(|n| n.id.as_str().to_string()).collect()
}

// ---------------------------------------------------------------------------
// A(5) → B(2), C(8); goal B
// ---------------------------------------------------------------------------

#[test_log::test]
fn pops_lowest_h_and_does_not_expand_the_solution() {
    let world = abc_graph(&["B"]);
    let initial = world.initial();
    let mut engine = BestFirstSearch::new(Probe::new(world), initial);

    assert_eq!(engine.do_search().unwrap(), Termination::SolutionsSatisfied);
    assert_eq!(ids(&engine.solutions()), vec!["B"]);
    assert_eq!(ids(&engine.closed()), vec!["A"]);
    assert_eq!(ids(&engine.open()), vec!["C"]);
    assert_eq!(
        engine.problem().visits(),
        vec![StateId::new("A"), StateId::new("B")]
    );

    let b = engine.node(&StateId::new("B")).unwrap();
    assert!(b.children.is_empty(), "B must not be expanded");
    let a = engine.node(&StateId::new("A")).unwrap();
    assert_eq!(a.children, vec![StateId::new("B"), StateId::new("C")]);
}

#[test]
fn stops_once_requested_solutions_are_accepted() {
    let world = abc_graph(&["B", "C"]);
    let initial = world.initial();
    let mut engine = BestFirstSearch::with_options(
        world,
        initial,
        SearchOptions::default().with_requested_solutions(2),
    );

    assert_eq!(engine.do_search().unwrap(), Termination::SolutionsSatisfied);
    assert_eq!(ids(&engine.solutions()), vec!["B", "C"]);
    // B is closed unexpanded; C completes the count and is never closed.
    assert_eq!(ids(&engine.closed()), vec!["A", "B"]);
    assert!(engine.open().is_empty());
    let b = engine.node(&StateId::new("B")).unwrap();
    assert!(b.children.is_empty(), "B must not be expanded");
}

#[test]
fn exhausted_frontier_is_not_an_error() {
    let world = abc_graph(&[]);
    let initial = world.initial();
    let mut engine = BestFirstSearch::new(world, initial);

    assert_eq!(engine.do_search().unwrap(), Termination::FrontierExhausted);
    assert!(engine.solutions().is_empty());
    assert_eq!(ids(&engine.closed()), vec!["A", "B", "C"]);
    assert!(engine.open().is_empty());
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
    let mut engine = BestFirstSearch::with_options(
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

// When the initial state alone satisfies the requested count the engine
// stops before the close step, so the closed set stays empty.
#[test]
fn lone_goal_meeting_requested_count_stops_before_closing() {
    let world = lone_goal();
    let initial = world.initial();
    let mut engine = BestFirstSearch::new(world, initial);

    assert_eq!(engine.do_search().unwrap(), Termination::SolutionsSatisfied);
    assert_eq!(ids(&engine.solutions()), vec!["A"]);
    assert!(engine.closed().is_empty());
    assert!(engine.open().is_empty());
    assert_eq!(engine.stats().visits, 1);
}

// ---------------------------------------------------------------------------
// Ordering is greedy by h, never by g + h
// ---------------------------------------------------------------------------

#[test]
fn cheap_path_loses_to_low_heuristic() {
    // S → X (cost 1, h 6), S → Y (cost 50, h 1); both X and Y lead to G.
    let world = GraphWorld::new("S")
        .vertex("S", 10.0)
        .vertex("X", 6.0)
        .vertex("Y", 1.0)
        .vertex("G", 0.0)
        .edge("S", "X", 1.0)
        .and_then(|w| w.edge("S", "Y", 50.0))
        .and_then(|w| w.edge("X", "G", 1.0))
        .and_then(|w| w.edge("Y", "G", 1.0))
        .and_then(|w| w.goal("G"))
        .unwrap();
    let initial = world.initial();
    let mut engine = BestFirstSearch::new(world, initial);
    engine.do_search().unwrap();

    let goal = engine.solutions()[0];
    assert_eq!(goal.parent, Some(StateId::new("Y")), "reached through low-h Y");
    assert_eq!(goal.g, 51.0, "g is carried but not optimised");
    assert_eq!(ids(&engine.open()), vec!["X"]);
}

// ---------------------------------------------------------------------------
// Duplicates by id
// ---------------------------------------------------------------------------

#[test_log::test]
fn pending_and_closed_ids_are_not_enqueued_again() {
    let world = diamond_graph();
    let initial = world.initial();
    let mut engine = BestFirstSearch::new(world, initial);

    assert_eq!(engine.do_search().unwrap(), Termination::SolutionsSatisfied);
    assert_eq!(ids(&engine.solutions()), vec!["G"]);
    assert_eq!(ids(&engine.closed()), vec!["S", "B"]);
    assert_eq!(ids(&engine.open()), vec!["A"]);

    // A was first discovered from S; B's edge to A was suppressed.
    let a = engine.node(&StateId::new("A")).unwrap();
    assert_eq!(a.parent, Some(StateId::new("S")));
    assert_eq!(engine.stats().duplicates_suppressed, 1);

    // Walk the parent chain by hand.
    let mut chain = vec!["G".to_string()];
    let mut cursor = engine.solutions()[0].parent.clone();
    while let Some(id) = cursor {
        chain.push(id.as_str().to_string());
        cursor = engine.node(&id).and_then(|n| n.parent.clone());
    }
    assert_eq!(chain, vec!["G", "B", "S"]);
}

// ---------------------------------------------------------------------------
// Eight-puzzle
// ---------------------------------------------------------------------------

#[test]
fn eight_puzzle_reaches_goal_with_consistent_bookkeeping() {
    let world = three_move_puzzle();
    let initial = world.initial();
    let mut engine = BestFirstSearch::new(world, initial);

    assert_eq!(engine.do_search().unwrap(), Termination::SolutionsSatisfied);
    let goal = engine.solutions()[0];
    assert_eq!(goal.state.tiles(), &GOAL);
    assert_eq!(goal.h, 0.0);
    assert_eq!(goal.depth, 3);
    assert_eq!(goal.g, 3.0);
    assert_eq!(goal.f(), goal.g + goal.h);
    assert_eq!(goal.root_move.as_deref(), Some("right"));
}
