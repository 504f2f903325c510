//! Mutable graph state as maintained by the editing layer.

use super::{Edge, Vertex, VertexId};
use serde::{Deserialize, Serialize};

/// A user-built weighted directed graph.
///
/// This is the collaborator-side state the solver consumes: an ordered
/// vertex set with stable ids and an ordered edge list with at most one
/// edge per `(from, to)` pair. Ids start at 1; removing a vertex
/// returns its id to a free-list, and the smallest freed id is reused
/// before a new one is minted.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Graph;
///
/// let mut g = Graph::new();
/// let a = g.add_vertex(0.0, 0.0);
/// let b = g.add_vertex(100.0, 0.0);
/// assert_eq!((a, b), (1, 2));
///
/// assert!(g.upsert_edge(a, b, 5));
/// assert!(g.upsert_edge(a, b, 9)); // updates weight in place
/// assert_eq!(g.num_edges(), 1);
/// assert_eq!(g.edges()[0].weight(), 9);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    next_id: VertexId,
    free_ids: Vec<VertexId>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            next_id: 0,
            free_ids: Vec::new(),
        }
    }

    /// Adds a vertex at the given position and returns its id.
    ///
    /// The smallest id on the free-list is reused if one exists,
    /// otherwise a fresh id is minted.
    pub fn add_vertex(&mut self, x: f64, y: f64) -> VertexId {
        let id = match self.free_ids.iter().copied().min() {
            Some(min) => {
                self.free_ids.retain(|&f| f != min);
                min
            }
            None => {
                self.next_id += 1;
                self.next_id
            }
        };
        self.vertices.push(Vertex::new(id, x, y));
        id
    }

    /// Removes the vertex with the given id and every incident edge.
    ///
    /// Returns `false` if no such vertex exists. The id becomes
    /// available for reuse.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        let before = self.vertices.len();
        self.vertices.retain(|v| v.id() != id);
        if self.vertices.len() == before {
            return false;
        }
        self.edges.retain(|e| e.from() != id && e.to() != id);
        self.free_ids.push(id);
        true
    }

    /// Adds an edge, or updates its weight if the ordered pair exists.
    ///
    /// Self-loops and edges touching an unknown vertex are rejected.
    /// Returns `true` if the edge was added or updated.
    pub fn upsert_edge(&mut self, from: VertexId, to: VertexId, weight: i64) -> bool {
        if from == to || !self.contains_vertex(from) || !self.contains_vertex(to) {
            return false;
        }
        if let Some(existing) = self
            .edges
            .iter_mut()
            .find(|e| e.from() == from && e.to() == to)
        {
            *existing = Edge::new(from, to, weight);
        } else {
            self.edges.push(Edge::new(from, to, weight));
        }
        true
    }

    /// Removes the edge with the given ordered pair, if present.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| !(e.from() == from && e.to() == to));
        self.edges.len() != before
    }

    /// Returns `true` if a vertex with this id exists.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.iter().any(|v| v.id() == id)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Removes all vertices and edges and resets id assignment.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.next_id = 0;
        self.free_ids.clear();
    }
}
