//! Constructive heuristics for building candidate tours.
//!
//! - [`nearest_neighbor_from`] — greedy construction from a fixed start, O(n²)
//! - [`nearest_neighbor_best`] — the same from every start, keeping the cheapest, O(n³)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_best, nearest_neighbor_from, GreedyError};
