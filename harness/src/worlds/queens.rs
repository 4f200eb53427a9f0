//! `Queens`: place N non-attacking queens, one row at a time.
//!
//! A placement lists the column of the queen in each filled row. Every
//! column is generated for the next row; placements whose newest queen is
//! attacked are not admissible and are dropped before they become children.
//! The heuristic is the number of rows still empty.

use statespace_search::{Node, Problem, SearchState, StateId};

use crate::contract::SearchWorld;

/// Queens placed so far, by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    n: u8,
    cols: Vec<u8>,
}

impl Placement {
    #[must_use]
    pub fn empty(n: u8) -> Self {
        Self {
            n,
            cols: Vec::new(),
        }
    }

    #[must_use]
    pub fn cols(&self) -> &[u8] {
        &self.cols
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cols.len() == usize::from(self.n)
    }

    fn with_queen(&self, col: u8) -> Self {
        let mut cols = self.cols.clone();
        cols.push(col);
        Self { n: self.n, cols }
    }
}

impl SearchState for Placement {
    fn identity(&self) -> StateId {
        let cols: Vec<String> = self.cols.iter().map(u8::to_string).collect();
        StateId::new(format!("queens{}:[{}]", self.n, cols.join(",")))
    }

    fn compute_heuristic_grade(&self) -> f64 {
        f64::from(self.n) - self.cols.len() as f64
    }

    /// The newest queen shares no column or diagonal with an earlier one.
    fn is_admissible(&self) -> bool {
        let Some((&last, earlier)) = self.cols.split_last() else {
            return true;
        };
        let row = earlier.len();
        earlier.iter().enumerate().all(|(r, &c)| {
            c != last && (row - r) != usize::from(c.abs_diff(last))
        })
    }
}

/// The N-queens problem.
#[derive(Debug, Clone, Copy)]
pub struct Queens {
    n: u8,
}

impl Queens {
    #[must_use]
    pub fn new(n: u8) -> Self {
        Self { n }
    }
}

impl Problem for Queens {
    type State = Placement;
    type Error = std::convert::Infallible;

    fn build_children(&self, parent: &Node<Placement>) -> Result<Vec<Node<Placement>>, Self::Error> {
        if parent.state.is_complete() {
            return Ok(Vec::new());
        }
        Ok((0..self.n)
            .map(|col| parent.state.with_queen(col))
            .filter(SearchState::is_admissible)
            .map(|placement| {
                let label = format!("col{}", placement.cols.last().copied().unwrap_or(0));
                Node::child(parent, placement, 1.0, label)
            })
            .collect())
    }

    fn is_solution(&self, node: &Node<Placement>) -> Result<bool, Self::Error> {
        Ok(node.state.is_complete() && node.is_admissible())
    }
}

impl SearchWorld for Queens {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "queens"
    }

    fn initial(&self) -> Node<Placement> {
        Node::root(Placement::empty(self.n))
    }
}
