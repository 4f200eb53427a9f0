//! World implementations for the harness runner.

pub mod graph;
pub mod queens;
pub mod sliding_tile;
