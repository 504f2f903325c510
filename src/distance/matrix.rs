//! Dense weight matrix over vertex ids.

use crate::models::{Edge, Vertex, VertexId};
use std::collections::HashMap;

/// A dense n×n matrix of directed edge weights, indexed by vertex id.
///
/// Built fresh from the current vertex and edge sets for every solve
/// invocation; never mutated incrementally. Absent entries are `None`,
/// meaning "no direct edge". The matrix is asymmetric: `(u, v)` and
/// `(v, u)` are independent entries. The diagonal is always `None` —
/// the relation has no self-loops.
///
/// Two build modes exist. [`from_graph`](WeightMatrix::from_graph)
/// leaves absent pairs absent, which the fixed-start greedy strategy
/// reads as "no feasible successor".
/// [`from_graph_complete`](WeightMatrix::from_graph_complete) fills
/// every absent off-diagonal pair with `f64::INFINITY`, so that any
/// permutation is a scorable (if infinitely poor) tour — the form every
/// multi-start and annealing strategy consumes.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Edge, Vertex};
/// use u_tsp::distance::WeightMatrix;
///
/// let vertices = vec![Vertex::new(1, 0.0, 0.0), Vertex::new(2, 1.0, 0.0)];
/// let edges = vec![Edge::new(1, 2, 5)];
///
/// let sparse = WeightMatrix::from_graph(&vertices, &edges);
/// assert_eq!(sparse.weight(1, 2), Some(5.0));
/// assert_eq!(sparse.weight(2, 1), None);
///
/// let complete = WeightMatrix::from_graph_complete(&vertices, &edges);
/// assert_eq!(complete.weight(2, 1), Some(f64::INFINITY));
/// ```
#[derive(Debug, Clone)]
pub struct WeightMatrix {
    ids: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    data: Vec<Option<f64>>,
}

impl WeightMatrix {
    /// Builds the sparse relation: absent pairs stay absent.
    ///
    /// Every vertex gets a row. Edges are applied in order with
    /// last-write-wins semantics on duplicate pairs. Self-loops and
    /// edges touching an id not in `vertices` are skipped.
    pub fn from_graph(vertices: &[Vertex], edges: &[Edge]) -> Self {
        let n = vertices.len();
        let ids: Vec<VertexId> = vertices.iter().map(|v| v.id()).collect();
        let index: HashMap<VertexId, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut matrix = Self {
            ids,
            index,
            data: vec![None; n * n],
        };

        for edge in edges {
            if edge.from() == edge.to() {
                continue;
            }
            let (Some(&from), Some(&to)) =
                (matrix.index.get(&edge.from()), matrix.index.get(&edge.to()))
            else {
                continue;
            };
            matrix.data[from * n + to] = Some(edge.weight() as f64);
        }

        matrix
    }

    /// Builds the complete relation: absent off-diagonal pairs become
    /// `f64::INFINITY`.
    pub fn from_graph_complete(vertices: &[Vertex], edges: &[Edge]) -> Self {
        let mut matrix = Self::from_graph(vertices, edges);
        let n = matrix.ids.len();
        for from in 0..n {
            for to in 0..n {
                if from != to && matrix.data[from * n + to].is_none() {
                    matrix.data[from * n + to] = Some(f64::INFINITY);
                }
            }
        }
        matrix
    }

    /// Returns the weight of the directed pair `(from, to)`.
    ///
    /// `None` for absent pairs, unknown ids, and self-pairs.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        let from = *self.index.get(&from)?;
        let to = *self.index.get(&to)?;
        self.data[from * self.ids.len() + to]
    }

    /// Vertex ids in input order.
    ///
    /// This order defines every deterministic iteration in the engine:
    /// neighbor scans and start-candidate enumeration both follow it.
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    /// Returns `true` if the matrix has a row for this id.
    pub fn contains(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the matrix has no vertices.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
