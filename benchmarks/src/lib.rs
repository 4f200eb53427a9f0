//! Shared workload builders for the benchmark suites.

use statespace_harness::worlds::graph::{GraphError, GraphWorld};
use statespace_harness::worlds::sliding_tile::{Board, BoardError, GOAL};

/// Walk `moves` blank moves away from the goal board.
///
/// Move choice is a fixed LCG sequence seeded with `seed`, so every call
/// with the same arguments yields the same board. Boards reached this way
/// are always solvable.
///
/// # Errors
///
/// Never in practice; the goal board is a permutation.
pub fn scrambled_board(moves: usize, seed: u64) -> Result<Board, BoardError> {
    let mut board = Board::new(GOAL)?;
    let mut state = seed;
    let mut previous: Option<Board> = None;
    for _ in 0..moves {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let options: Vec<Board> = board
            .successors()
            .into_iter()
            .map(|(_, next)| next)
            .filter(|next| previous.as_ref() != Some(next))
            .collect();
        #[allow(clippy::cast_possible_truncation)]
        let pick = (state >> 33) as usize % options.len();
        previous = Some(board);
        board = options[pick];
    }
    Ok(board)
}

/// A `side` x `side` grid with 4-neighbour edges of cost 1, starting at
/// `r0c0` and with the goal at the opposite corner. `h` is the Manhattan
/// distance to the goal.
///
/// # Errors
///
/// Returns [`GraphError::Malformed`] when `side` is zero.
pub fn grid_world(side: usize) -> Result<GraphWorld, GraphError> {
    if side == 0 {
        return Err(GraphError::Malformed {
            detail: "grid side must be at least 1".to_string(),
        });
    }
    let name = |r: usize, c: usize| format!("r{r}c{c}");
    let mut world = GraphWorld::new(name(0, 0));
    for r in 0..side {
        for c in 0..side {
            #[allow(clippy::cast_precision_loss)]
            let h = ((side - 1 - r) + (side - 1 - c)) as f64;
            world = world.vertex(name(r, c), h);
        }
    }
    for r in 0..side {
        for c in 0..side {
            let here = name(r, c);
            if r + 1 < side {
                world = world.edge(&here, &name(r + 1, c), 1.0)?;
                world = world.edge(&name(r + 1, c), &here, 1.0)?;
            }
            if c + 1 < side {
                world = world.edge(&here, &name(r, c + 1), 1.0)?;
                world = world.edge(&name(r, c + 1), &here, 1.0)?;
            }
        }
    }
    world.goal(&name(side - 1, side - 1))
}
