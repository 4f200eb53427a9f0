//! `SlidingTile`: the 3×3 eight-puzzle.
//!
//! Tiles are stored row-major, `0` is the blank. Moves are named after the
//! direction the blank travels. The heuristic is the summed Manhattan
//! distance of every non-blank tile from its goal cell; each move costs 1.
//!
//! State ids are SHA-256 fingerprints of the tile bytes.

use statespace_search::{Node, Problem, SearchState, StateId};

use crate::contract::SearchWorld;

/// Domain prefix for board fingerprints.
pub const DOMAIN_SLIDING_TILE: &[u8] = b"STATESPACE::SLIDING_TILE::V1\0";

const SIDE: usize = 3;
const CELLS: usize = SIDE * SIDE;

/// The canonical goal layout: 1..8 then the blank.
pub const GOAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// A board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
}

/// Typed failure for board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The tiles are not a permutation of `0..9`.
    NotAPermutation,
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAPermutation => write!(f, "tiles must be a permutation of 0..9"),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// # Errors
    ///
    /// Returns [`BoardError::NotAPermutation`] unless every value `0..9`
    /// appears exactly once.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        for &t in &tiles {
            let slot = seen
                .get_mut(usize::from(t))
                .ok_or(BoardError::NotAPermutation)?;
            if *slot {
                return Err(BoardError::NotAPermutation);
            }
            *slot = true;
        }
        Ok(Self { tiles })
    }

    #[must_use]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    fn blank(&self) -> usize {
        self.tiles.iter().position(|&t| t == 0).unwrap_or(0)
    }

    /// Whether [`GOAL`] is reachable from this board.
    ///
    /// On an odd-width board a position is solvable iff its inversion count
    /// (blank excluded) is even.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        let mut inversions = 0usize;
        for (i, a) in tiles.iter().enumerate() {
            inversions += tiles[i + 1..].iter().filter(|b| *b < a).count();
        }
        inversions % 2 == 0
    }

    /// Summed Manhattan distance of all tiles from their goal cells.
    #[must_use]
    pub fn manhattan(&self) -> u32 {
        let mut total = 0;
        for (cell, &tile) in self.tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let target = usize::from(tile) - 1;
            total += (cell / SIDE).abs_diff(target / SIDE) + (cell % SIDE).abs_diff(target % SIDE);
        }
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    /// Boards reachable in one move, with the blank's direction.
    #[must_use]
    pub fn successors(&self) -> Vec<(&'static str, Board)> {
        let blank = self.blank();
        let (row, col) = (blank / SIDE, blank % SIDE);
        let mut out = Vec::with_capacity(4);
        let mut slide = |label: &'static str, target: usize| {
            let mut tiles = self.tiles;
            tiles.swap(blank, target);
            out.push((label, Board { tiles }));
        };
        if row > 0 {
            slide("up", blank - SIDE);
        }
        if row + 1 < SIDE {
            slide("down", blank + SIDE);
        }
        if col > 0 {
            slide("left", blank - 1);
        }
        if col + 1 < SIDE {
            slide("right", blank + 1);
        }
        out
    }
}

impl SearchState for Board {
    fn identity(&self) -> StateId {
        StateId::fingerprint(DOMAIN_SLIDING_TILE, &self.tiles)
    }

    fn compute_heuristic_grade(&self) -> f64 {
        f64::from(self.manhattan())
    }
}

/// The eight-puzzle from a fixed start board to [`GOAL`].
#[derive(Debug, Clone)]
pub struct SlidingTile {
    start: Board,
}

impl SlidingTile {
    #[must_use]
    pub fn new(start: Board) -> Self {
        Self { start }
    }

    #[must_use]
    pub fn start(&self) -> &Board {
        &self.start
    }
}

impl Problem for SlidingTile {
    type State = Board;
    type Error = std::convert::Infallible;

    fn build_children(&self, parent: &Node<Board>) -> Result<Vec<Node<Board>>, Self::Error> {
        Ok(parent
            .state
            .successors()
            .into_iter()
            .map(|(label, board)| Node::child(parent, board, 1.0, label))
            .collect())
    }

    fn is_solution(&self, node: &Node<Board>) -> Result<bool, Self::Error> {
        Ok(node.state.tiles == GOAL)
    }
}

impl SearchWorld for SlidingTile {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "sliding_tile"
    }

    fn initial(&self) -> Node<Board> {
        Node::root(self.start)
    }
}
