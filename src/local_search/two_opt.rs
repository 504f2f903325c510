//! 2-opt tour refinement.
//!
//! # Algorithm
//!
//! Scan ordered position pairs `(i, j)` with `1 <= i < j <= n-1`,
//! holding position 0 fixed (the tour is read as a cycle, so a fixed
//! anchor loses nothing). Reversing the segment `[i..j)` gives the
//! candidate; it is accepted the moment it strictly lowers the total
//! cost, and the scan restarts from the top (first-improvement, not
//! best-improvement). A full scan with no acceptance terminates.
//!
//! Costs are recomputed in full for every trial, an O(n) evaluation
//! that makes a sweep O(n³). Interactive-scale graphs keep this cheap;
//! a delta evaluation would be an equivalent drop-in if that ever
//! changes.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman
//! problems", *Operations Research* 6(6), 791-812.

use crate::distance::WeightMatrix;
use crate::evaluation::tour_cost;
use crate::models::VertexId;

/// Refines a tour by first-improvement segment reversal.
///
/// Never increases cost; returns the input unchanged when no reversal
/// helps, which makes the function idempotent. Tours shorter than 4
/// have no non-trivial reversal and pass through untouched. Works on
/// sparse and complete relations alike — an infinite candidate cost
/// never strictly beats anything.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Edge, Vertex};
/// use u_tsp::distance::WeightMatrix;
/// use u_tsp::evaluation::tour_cost;
/// use u_tsp::local_search::two_opt_improve;
///
/// let vertices: Vec<Vertex> = (1..=4).map(|i| Vertex::new(i, 0.0, 0.0)).collect();
/// let mut edges = Vec::new();
/// // Ring edges cost 1, chords cost 5, both directions.
/// for (a, b, w) in [(1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 1, 1), (1, 3, 5), (2, 4, 5)] {
///     edges.push(Edge::new(a, b, w));
///     edges.push(Edge::new(b, a, w));
/// }
/// let m = WeightMatrix::from_graph(&vertices, &edges);
///
/// let improved = two_opt_improve(&[1, 3, 2, 4], &m);
/// assert_eq!(tour_cost(&improved, &m), 4.0);
/// ```
pub fn two_opt_improve(tour: &[VertexId], weights: &WeightMatrix) -> Vec<VertexId> {
    let mut current = tour.to_vec();
    let n = current.len();

    let mut improved = true;
    while improved {
        improved = false;
        let current_cost = tour_cost(&current, weights);

        'scan: for i in 1..n.saturating_sub(1) {
            for j in (i + 1)..n {
                if j - i == 1 {
                    continue;
                }
                let mut candidate = current.clone();
                candidate[i..j].reverse();
                if tour_cost(&candidate, weights) < current_cost {
                    current = candidate;
                    improved = true;
                    break 'scan;
                }
            }
        }
    }

    current
}
