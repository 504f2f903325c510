//! Cyclic tour cost evaluation.

use crate::distance::WeightMatrix;
use crate::models::VertexId;

/// Computes the total cost of a tour read as a directed cycle.
///
/// Sums the weight of every consecutive pair plus the closing pair from
/// the last vertex back to the first. Any required pair that is absent
/// from the relation makes the whole tour cost `f64::INFINITY` — absent
/// and infinite pairs are equally unusable, and infinity sorts worst in
/// every comparison the strategies make.
///
/// This is the single cost oracle for the engine: greedy construction,
/// 2-opt, and both annealing modes all score tours through it. It is
/// pure and allocation-free; only id lookups are performed.
///
/// An empty tour costs 0.0. A single-vertex tour costs `INFINITY`
/// (its closing pair is a self-pair, which never exists).
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Edge, Vertex};
/// use u_tsp::distance::WeightMatrix;
/// use u_tsp::evaluation::tour_cost;
///
/// let vertices = vec![
///     Vertex::new(1, 0.0, 0.0),
///     Vertex::new(2, 1.0, 0.0),
///     Vertex::new(3, 0.5, 1.0),
/// ];
/// let edges = vec![Edge::new(1, 2, 5), Edge::new(2, 3, 5), Edge::new(3, 1, 5)];
/// let m = WeightMatrix::from_graph(&vertices, &edges);
///
/// assert_eq!(tour_cost(&[1, 2, 3], &m), 15.0);
/// assert_eq!(tour_cost(&[1, 3, 2], &m), f64::INFINITY);
/// ```
pub fn tour_cost(tour: &[VertexId], weights: &WeightMatrix) -> f64 {
    let Some((&first, rest)) = tour.split_first() else {
        return 0.0;
    };

    let mut total = 0.0;
    let mut prev = first;
    for &next in rest {
        match weights.weight(prev, next) {
            Some(w) => total += w,
            None => return f64::INFINITY,
        }
        prev = next;
    }
    match weights.weight(prev, first) {
        Some(w) => total + w,
        None => f64::INFINITY,
    }
}
