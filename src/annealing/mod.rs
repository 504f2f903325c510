//! Simulated annealing over random tours.
//!
//! A single-solution trajectory search: accept worsening moves with a
//! probability that falls as the temperature cools, escaping the local
//! optima that trap greedy construction. Two operating modes share one
//! loop — the plain geometric-cooling form and an adaptive "Boltzmann"
//! variant with mixed move types.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{AnnealMode, AnnealOutcome, AnnealRunner};
