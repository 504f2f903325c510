//! Weighted adjacency relation.
//!
//! Provides the dense weight matrix the solvers query, built from the
//! editor's vertex and edge sets.

mod matrix;

pub use matrix::WeightMatrix;
