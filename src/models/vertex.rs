//! Vertex type and identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a vertex.
///
/// Ids are positive, unique, and stable for the lifetime of a vertex.
/// The editor assigns them sequentially and reuses freed ids, so they
/// are small but not necessarily contiguous.
pub type VertexId = usize;

/// A vertex of the input graph.
///
/// The position is carried for the editing/rendering layer; the
/// optimization engine itself only ever uses the id — edge weights are
/// user-supplied and independent of geometry.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
///
/// let v = Vertex::new(1, 120.0, 80.0);
/// assert_eq!(v.id(), 1);
/// assert_eq!(v.x(), 120.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    x: f64,
    y: f64,
}

impl Vertex {
    /// Creates a vertex with the given id and position.
    pub fn new(id: VertexId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Vertex id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Horizontal position.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical position.
    pub fn y(&self) -> f64 {
        self.y
    }
}
