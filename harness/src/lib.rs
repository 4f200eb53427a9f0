//! Statespace Harness: concrete problem worlds and a run driver.
//!
//! Worlds implement [`statespace_search::Problem`] for a specific puzzle or
//! graph and provide their own initial state. The runner picks an engine,
//! executes it, and packages the outcome with its diagnostics report.
//! Worlds hold domain data and rules only; the engines own all bookkeeping.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod runner;
pub mod worlds;
