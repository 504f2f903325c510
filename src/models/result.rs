//! Solve result and status types.

use super::VertexId;
use serde::{Deserialize, Serialize};

/// Outcome category of a solve call.
///
/// Every variant other than [`Solved`](SolveStatus::Solved) is a
/// recoverable failure: the result carries no tour and no cost, and the
/// caller re-invokes with a changed graph (or, for annealing, a new
/// seed) if it wants another attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// A closed tour was found.
    Solved,
    /// Fewer than 2 vertices exist.
    InsufficientVertices,
    /// The fixed-start strategy requires a vertex with id 1.
    VertexOneMissing,
    /// Greedy construction reached a vertex with no edge to any
    /// unvisited vertex.
    DeadEnd,
    /// The constructed path cannot close: no edge from the last vertex
    /// back to the start.
    NoReturnEdge,
    /// No finite-cost closed tour exists over the complete relation.
    Infeasible,
}

impl SolveStatus {
    /// Returns `true` for every non-`Solved` variant.
    pub fn is_failure(&self) -> bool {
        !matches!(self, SolveStatus::Solved)
    }
}

/// Result of one solve invocation.
///
/// A successful result holds a tour (a permutation of all vertex ids,
/// read as a cycle) and its total cost. A failed result holds an empty
/// tour and no cost — failures must never be displayed as a number.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{SolveResult, SolveStatus};
///
/// let ok = SolveResult::solved(vec![1, 2, 3], 15.0);
/// assert!(ok.is_solved());
/// assert_eq!(ok.total_cost(), Some(15.0));
///
/// let failed = SolveResult::failure(SolveStatus::DeadEnd);
/// assert!(failed.tour().is_empty());
/// assert_eq!(failed.total_cost(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    status: SolveStatus,
    tour: Vec<VertexId>,
    total_cost: Option<f64>,
}

impl SolveResult {
    /// Creates a successful result.
    pub fn solved(tour: Vec<VertexId>, total_cost: f64) -> Self {
        Self {
            status: SolveStatus::Solved,
            tour,
            total_cost: Some(total_cost),
        }
    }

    /// Creates a failed result with the given status.
    pub fn failure(status: SolveStatus) -> Self {
        debug_assert!(status.is_failure());
        Self {
            status,
            tour: Vec::new(),
            total_cost: None,
        }
    }

    /// Outcome category.
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// The tour, empty on failure.
    pub fn tour(&self) -> &[VertexId] {
        &self.tour
    }

    /// Total cyclic cost, `None` on failure.
    pub fn total_cost(&self) -> Option<f64> {
        self.total_cost
    }

    /// Returns `true` if a tour was found.
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_result() {
        let r = SolveResult::solved(vec![1, 2, 3], 15.0);
        assert_eq!(r.status(), SolveStatus::Solved);
        assert_eq!(r.tour(), &[1, 2, 3]);
        assert_eq!(r.total_cost(), Some(15.0));
        assert!(r.is_solved());
    }

    #[test]
    fn test_failure_has_no_cost() {
        for status in [
            SolveStatus::InsufficientVertices,
            SolveStatus::VertexOneMissing,
            SolveStatus::DeadEnd,
            SolveStatus::NoReturnEdge,
            SolveStatus::Infeasible,
        ] {
            let r = SolveResult::failure(status);
            assert_eq!(r.status(), status);
            assert!(r.tour().is_empty());
            assert_eq!(r.total_cost(), None);
            assert!(!r.is_solved());
            assert!(status.is_failure());
        }
    }

    #[test]
    fn test_solved_is_not_failure() {
        assert!(!SolveStatus::Solved.is_failure());
    }
}
