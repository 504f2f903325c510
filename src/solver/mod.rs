//! End-to-end solve orchestration.
//!
//! Dispatches a graph snapshot to one of the four strategies and
//! normalizes every outcome into a [`SolveResult`](crate::models::SolveResult).

mod facade;

pub use facade::{solve, solve_with, SolveOptions, Strategy};
