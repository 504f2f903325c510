//! Tour cost evaluation.
//!
//! The single source of truth for cyclic-tour cost, shared by every
//! strategy.

mod cost;

pub use cost::tour_cost;
