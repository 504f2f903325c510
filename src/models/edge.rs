//! Directed weighted edge type.

use super::VertexId;
use serde::{Deserialize, Serialize};

/// A directed edge with an integer weight.
///
/// At most one edge exists per ordered `(from, to)` pair; re-adding the
/// pair through [`Graph::upsert_edge`](super::Graph::upsert_edge)
/// updates the weight in place. The reverse direction is a separate
/// edge with its own weight.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Edge;
///
/// let e = Edge::new(1, 2, 5);
/// assert_eq!(e.from(), 1);
/// assert_eq!(e.to(), 2);
/// assert_eq!(e.weight(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: i64,
}

impl Edge {
    /// Creates a directed edge from `from` to `to` with the given weight.
    pub fn new(from: VertexId, to: VertexId, weight: i64) -> Self {
        Self { from, to, weight }
    }

    /// Source vertex id.
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Target vertex id.
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Edge weight.
    pub fn weight(&self) -> i64 {
        self.weight
    }
}
