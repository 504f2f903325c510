//! # u-tsp
//!
//! Approximate solving of the asymmetric Traveling Salesman Problem
//! over small user-built weighted digraphs, with four interchangeable
//! strategies: greedy nearest-neighbor from a fixed start, best-start
//! nearest-neighbor refined by 2-opt, simulated annealing, and an
//! adaptive "Boltzmann" annealing variant.
//!
//! ## Modules
//!
//! - [`models`] — Boundary types (Vertex, Edge, Graph, SolveResult)
//! - [`distance`] — Weighted adjacency relation (sparse and complete forms)
//! - [`evaluation`] — Cyclic tour cost, the shared cost oracle
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt refinement
//! - [`annealing`] — Simulated annealing, plain and Boltzmann modes
//! - [`solver`] — Strategy dispatch facade
//!
//! ## Example
//!
//! ```
//! use u_tsp::models::Graph;
//! use u_tsp::solver::{solve, Strategy};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex(0.0, 0.0);
//! let b = graph.add_vertex(100.0, 0.0);
//! let c = graph.add_vertex(50.0, 80.0);
//! graph.upsert_edge(a, b, 5);
//! graph.upsert_edge(b, c, 5);
//! graph.upsert_edge(c, a, 5);
//!
//! let result = solve(graph.vertices(), graph.edges(), Strategy::NearestNeighborFromOne);
//! assert_eq!(result.tour(), &[a, b, c]);
//! assert_eq!(result.total_cost(), Some(15.0));
//! ```

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;
