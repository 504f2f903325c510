//! Local search refinement of candidate tours.
//!
//! - [`two_opt_improve`] — first-improvement segment reversal

mod two_opt;

pub use two_opt::two_opt_improve;
