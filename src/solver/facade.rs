//! Strategy dispatch over the full solve pipeline.

use crate::annealing::{AnnealConfig, AnnealMode, AnnealRunner};
use crate::constructive::{nearest_neighbor_best, nearest_neighbor_from, GreedyError};
use crate::distance::WeightMatrix;
use crate::evaluation::tour_cost;
use crate::local_search::two_opt_improve;
use crate::models::{Edge, SolveResult, SolveStatus, Vertex};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Tour-construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Greedy nearest-neighbor from the vertex with id 1, over the
    /// sparse relation: a missing edge aborts construction.
    NearestNeighborFromOne,
    /// Greedy nearest-neighbor from every start over the complete
    /// relation, refined with 2-opt.
    NearestNeighborTwoOpt,
    /// Plain simulated annealing over the complete relation.
    SimulatedAnnealing,
    /// Adaptive-cooling annealing with mixed moves over the complete
    /// relation.
    BoltzmannAnnealing,
}

/// Per-call options.
///
/// `seed` makes the annealing strategies reproducible; the greedy
/// strategies are deterministic and ignore it. `cancel` is polled by
/// the annealing outer loop; setting the flag returns the best tour
/// found so far.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Random seed for the annealing strategies.
    pub seed: Option<u64>,
    /// Cooperative cancellation flag.
    pub cancel: Option<Arc<AtomicBool>>,
}

/// Solves the TSP over the given graph with default options.
///
/// See [`solve_with`] for the full contract.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Edge, Vertex};
/// use u_tsp::solver::{solve, Strategy};
///
/// let vertices = vec![
///     Vertex::new(1, 0.0, 0.0),
///     Vertex::new(2, 1.0, 0.0),
///     Vertex::new(3, 0.5, 1.0),
/// ];
/// let edges = vec![Edge::new(1, 2, 5), Edge::new(2, 3, 5), Edge::new(3, 1, 5)];
///
/// let result = solve(&vertices, &edges, Strategy::NearestNeighborFromOne);
/// assert_eq!(result.tour(), &[1, 2, 3]);
/// assert_eq!(result.total_cost(), Some(15.0));
/// ```
pub fn solve(vertices: &[Vertex], edges: &[Edge], strategy: Strategy) -> SolveResult {
    solve_with(vertices, edges, strategy, &SolveOptions::default())
}

/// Solves the TSP over the given graph with the chosen strategy.
///
/// The graph is taken as value snapshots — the relation is rebuilt
/// from scratch on every call and nothing persists between calls, so
/// concurrent solves over the same slices are safe.
///
/// Never panics and never returns an error: every failure is a
/// [`SolveStatus`] on the result. All strategies require at least two
/// vertices ([`SolveStatus::InsufficientVertices`]); the fixed-start
/// strategy additionally requires a vertex with id 1
/// ([`SolveStatus::VertexOneMissing`]).
pub fn solve_with(
    vertices: &[Vertex],
    edges: &[Edge],
    strategy: Strategy,
    options: &SolveOptions,
) -> SolveResult {
    if vertices.len() < 2 {
        return SolveResult::failure(SolveStatus::InsufficientVertices);
    }

    match strategy {
        Strategy::NearestNeighborFromOne => {
            if !vertices.iter().any(|v| v.id() == 1) {
                return SolveResult::failure(SolveStatus::VertexOneMissing);
            }
            let weights = WeightMatrix::from_graph(vertices, edges);
            match nearest_neighbor_from(1, &weights) {
                Ok((tour, cost)) => SolveResult::solved(tour, cost),
                Err(err) => SolveResult::failure(greedy_status(err)),
            }
        }

        Strategy::NearestNeighborTwoOpt => {
            let weights = WeightMatrix::from_graph_complete(vertices, edges);
            match nearest_neighbor_best(&weights) {
                Ok((tour, _)) => {
                    let improved = two_opt_improve(&tour, &weights);
                    let cost = tour_cost(&improved, &weights);
                    SolveResult::solved(improved, cost)
                }
                Err(err) => SolveResult::failure(greedy_status(err)),
            }
        }

        Strategy::SimulatedAnnealing | Strategy::BoltzmannAnnealing => {
            let weights = WeightMatrix::from_graph_complete(vertices, edges);
            let (mode, mut config) = match strategy {
                Strategy::SimulatedAnnealing => (AnnealMode::Plain, AnnealConfig::plain()),
                _ => (AnnealMode::Boltzmann, AnnealConfig::boltzmann()),
            };
            config.seed = options.seed;

            let outcome =
                AnnealRunner::run_with_cancel(mode, &weights, &config, options.cancel.clone());
            if outcome.best_cost.is_finite() {
                SolveResult::solved(outcome.best_tour, outcome.best_cost)
            } else {
                SolveResult::failure(SolveStatus::Infeasible)
            }
        }
    }
}

fn greedy_status(err: GreedyError) -> SolveStatus {
    match err {
        GreedyError::DeadEnd => SolveStatus::DeadEnd,
        GreedyError::NoReturnEdge => SolveStatus::NoReturnEdge,
        GreedyError::Infeasible => SolveStatus::Infeasible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    const ALL_STRATEGIES: [Strategy; 4] = [
        Strategy::NearestNeighborFromOne,
        Strategy::NearestNeighborTwoOpt,
        Strategy::SimulatedAnnealing,
        Strategy::BoltzmannAnnealing,
    ];

    fn vertices(n: usize) -> Vec<Vertex> {
        (1..=n).map(|i| Vertex::new(i, i as f64, 0.0)).collect()
    }

    fn seeded() -> SolveOptions {
        SolveOptions {
            seed: Some(42),
            cancel: None,
        }
    }

    #[test]
    fn test_insufficient_vertices() {
        let vs = vertices(1);
        for strategy in ALL_STRATEGIES {
            let r = solve(&vs, &[], strategy);
            assert_eq!(r.status(), SolveStatus::InsufficientVertices, "{strategy:?}");
            assert_eq!(r.total_cost(), None);
        }
    }

    #[test]
    fn test_vertex_one_missing() {
        let vs = vec![Vertex::new(2, 0.0, 0.0), Vertex::new(3, 1.0, 0.0)];
        let edges = vec![Edge::new(2, 3, 1), Edge::new(3, 2, 1)];
        let r = solve(&vs, &edges, Strategy::NearestNeighborFromOne);
        assert_eq!(r.status(), SolveStatus::VertexOneMissing);
        // The other strategies do not care about id 1.
        let r = solve_with(&vs, &edges, Strategy::SimulatedAnnealing, &seeded());
        assert_eq!(r.total_cost(), Some(2.0));
    }

    #[test]
    fn test_directed_triangle_all_strategies() {
        // Directed 3-cycle: the only feasible tour, cost 15.
        let vs = vertices(3);
        let edges = vec![Edge::new(1, 2, 5), Edge::new(2, 3, 5), Edge::new(3, 1, 5)];
        for strategy in ALL_STRATEGIES {
            let r = solve_with(&vs, &edges, strategy, &seeded());
            assert!(r.is_solved(), "{strategy:?}");
            assert_eq!(r.total_cost(), Some(15.0), "{strategy:?}");
            assert_eq!(r.tour().len(), 3, "{strategy:?}");
        }
        // The fixed-start tour is pinned exactly.
        let r = solve(&vs, &edges, Strategy::NearestNeighborFromOne);
        assert_eq!(r.tour(), &[1, 2, 3]);
    }

    #[test]
    fn test_dead_end_and_infeasible_triangle() {
        // Only (1→2,1) and (2→1,1) exist; vertex 3 is untouched by
        // any edge.
        let vs = vertices(3);
        let edges = vec![Edge::new(1, 2, 1), Edge::new(2, 1, 1)];

        let r = solve(&vs, &edges, Strategy::NearestNeighborFromOne);
        assert_eq!(r.status(), SolveStatus::DeadEnd);

        for strategy in [
            Strategy::NearestNeighborTwoOpt,
            Strategy::SimulatedAnnealing,
            Strategy::BoltzmannAnnealing,
        ] {
            let r = solve_with(&vs, &edges, strategy, &seeded());
            assert_eq!(r.status(), SolveStatus::Infeasible, "{strategy:?}");
            assert!(r.tour().is_empty(), "{strategy:?}");
            assert_eq!(r.total_cost(), None, "{strategy:?}");
        }
    }

    #[test]
    fn test_no_return_edge() {
        let vs = vertices(3);
        let edges = vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1)];
        let r = solve(&vs, &edges, Strategy::NearestNeighborFromOne);
        assert_eq!(r.status(), SolveStatus::NoReturnEdge);
    }

    #[test]
    fn test_two_vertex_boundary() {
        let vs = vertices(2);
        let edges = vec![Edge::new(1, 2, 3), Edge::new(2, 1, 8)];
        for strategy in ALL_STRATEGIES {
            let r = solve_with(&vs, &edges, strategy, &seeded());
            assert_eq!(r.total_cost(), Some(11.0), "{strategy:?}");
            assert_eq!(r.tour().len(), 2, "{strategy:?}");
        }
    }

    #[test]
    fn test_two_vertex_one_direction_missing() {
        let vs = vertices(2);
        let edges = vec![Edge::new(1, 2, 3)];

        let r = solve(&vs, &edges, Strategy::NearestNeighborFromOne);
        assert_eq!(r.status(), SolveStatus::NoReturnEdge);

        for strategy in [
            Strategy::NearestNeighborTwoOpt,
            Strategy::SimulatedAnnealing,
            Strategy::BoltzmannAnnealing,
        ] {
            let r = solve_with(&vs, &edges, strategy, &seeded());
            assert_eq!(r.status(), SolveStatus::Infeasible, "{strategy:?}");
        }
    }

    #[test]
    fn test_two_opt_matches_greedy_on_already_optimal() {
        let vs = vertices(3);
        let edges = vec![Edge::new(1, 2, 5), Edge::new(2, 3, 5), Edge::new(3, 1, 5)];
        let greedy = solve(&vs, &edges, Strategy::NearestNeighborFromOne);
        let refined = solve(&vs, &edges, Strategy::NearestNeighborTwoOpt);
        assert_eq!(greedy.total_cost(), refined.total_cost());
    }

    #[test]
    fn test_best_start_two_opt_finds_ring_optimum() {
        let vs = vertices(4);
        let mut edges = Vec::new();
        for (a, b, w) in [(1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 1, 1), (1, 3, 5), (2, 4, 5)] {
            edges.push(Edge::new(a, b, w));
            edges.push(Edge::new(b, a, w));
        }
        let r = solve(&vs, &edges, Strategy::NearestNeighborTwoOpt);
        assert_eq!(r.total_cost(), Some(4.0));
    }

    #[test]
    fn test_annealing_seed_reproducible() {
        let vs = vertices(5);
        let mut edges = Vec::new();
        for i in 1..=5usize {
            for j in 1..=5usize {
                if i != j {
                    edges.push(Edge::new(i, j, ((i * 7 + j * 3) % 10 + 1) as i64));
                }
            }
        }
        for strategy in [Strategy::SimulatedAnnealing, Strategy::BoltzmannAnnealing] {
            let a = solve_with(&vs, &edges, strategy, &seeded());
            let b = solve_with(&vs, &edges, strategy, &seeded());
            assert_eq!(a, b, "{strategy:?}");
        }
    }

    #[test]
    fn test_cancelled_annealing_returns_best_so_far() {
        // A fully-connected graph keeps even the initial random tour
        // finite, so a pre-cancelled run still reports a solution.
        let vs = vertices(3);
        let mut edges = Vec::new();
        for i in 1..=3usize {
            for j in 1..=3usize {
                if i != j {
                    edges.push(Edge::new(i, j, 5));
                }
            }
        }
        let cancel = Arc::new(AtomicBool::new(false));
        cancel.store(true, Ordering::Relaxed);
        let options = SolveOptions {
            seed: Some(42),
            cancel: Some(cancel),
        };
        let r = solve_with(&vs, &edges, Strategy::SimulatedAnnealing, &options);
        assert!(r.is_solved());
        assert_eq!(r.total_cost(), Some(15.0));
    }

    #[test]
    fn test_duplicate_edges_last_write_wins() {
        let vs = vertices(2);
        let edges = vec![Edge::new(1, 2, 3), Edge::new(2, 1, 8), Edge::new(1, 2, 4)];
        let r = solve(&vs, &edges, Strategy::NearestNeighborFromOne);
        assert_eq!(r.total_cost(), Some(12.0));
    }
}
