//! Annealing execution loop.
//!
//! # Algorithm
//!
//! Start from a uniformly random tour. At each temperature level, try a
//! fixed number of random neighbor moves, accepting each by the
//! Metropolis criterion; then cool geometrically and repeat until the
//! temperature floor. The best tour ever accepted is tracked separately
//! from the current one and is what the run returns.
//!
//! The two modes share this structure and differ in their moves and
//! cooling. Plain uses position swaps and a fixed cooling rate. The
//! Boltzmann variant mixes swaps (p = 0.7) with segment reversals
//! (p = 0.3) and re-derives the cooling rate from each level's
//! acceptance ratio — a high ratio slows cooling. That direction is
//! deliberate and pinned by tests; callers must not "correct" it.
//!
//! # Reference
//!
//! Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated
//! Annealing". Cerny (1985), "Thermodynamical Approach to the
//! Travelling Salesman Problem".

use super::config::AnnealConfig;
use crate::distance::WeightMatrix;
use crate::evaluation::tour_cost;
use crate::models::VertexId;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Operating mode of the annealing solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnealMode {
    /// Swap moves, fixed geometric cooling.
    Plain,
    /// Mixed swap/reversal moves, acceptance-adaptive cooling.
    Boltzmann,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    /// Best tour found across the whole run.
    pub best_tour: Vec<VertexId>,

    /// Cost of the best tour. Infinite when the graph admits no
    /// finite-cost tour at all.
    pub best_cost: f64,

    /// Total move trials.
    pub iterations: usize,

    /// Accepted moves, improving and uphill alike.
    pub accepted_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the annealing search.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs annealing to completion.
    pub fn run(mode: AnnealMode, weights: &WeightMatrix, config: &AnnealConfig) -> AnnealOutcome {
        Self::run_with_cancel(mode, weights, config, None)
    }

    /// Runs annealing with an optional cancellation token.
    ///
    /// The flag is polled once per temperature level; when set, the run
    /// stops immediately and returns the best tour found so far with
    /// `cancelled = true`.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`AnnealConfig::validate`].
    pub fn run_with_cancel(
        mode: AnnealMode,
        weights: &WeightMatrix,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AnnealOutcome {
        config.validate().expect("invalid AnnealConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = weights.len();
        let mut current: Vec<VertexId> = weights.ids().to_vec();
        if n < 2 {
            // Nothing to search; report the trivial tour.
            let cost = tour_cost(&current, weights);
            return AnnealOutcome {
                best_tour: current,
                best_cost: cost,
                iterations: 0,
                accepted_moves: 0,
                final_temperature: config.initial_temperature,
                cancelled: false,
            };
        }

        current.shuffle(&mut rng);
        let mut current_cost = tour_cost(&current, weights);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut cooling_rate = config.cooling_rate;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut cancelled = false;

        while temperature > config.final_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut accepted_at_level = 0usize;

            for _ in 0..config.iterations_per_temperature {
                let mut candidate = current.clone();
                match mode {
                    AnnealMode::Plain => {
                        let (i, j) = distinct_pair(&mut rng, n);
                        candidate.swap(i, j);
                    }
                    AnnealMode::Boltzmann => {
                        if rng.random_range(0.0..1.0) < 0.7 {
                            let (i, j) = distinct_pair(&mut rng, n);
                            candidate.swap(i, j);
                        } else {
                            let (i, j) = distinct_pair(&mut rng, n);
                            let (lo, hi) = if i < j { (i, j) } else { (j, i) };
                            candidate[lo..=hi].reverse();
                        }
                    }
                }

                let candidate_cost = tour_cost(&candidate, weights);
                let delta = candidate_cost - current_cost;

                // Metropolis criterion. An infinite-to-infinite move has
                // a NaN delta, which fails both tests: rejected.
                let accept = delta < 0.0
                    || rng.random_range(0.0..1.0) < (-delta / temperature).exp();

                if accept {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_at_level += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                iterations += 1;
            }

            accepted_moves += accepted_at_level;

            if mode == AnnealMode::Boltzmann {
                // Acceptance ratio picks the next level's cooling rate.
                let ratio =
                    accepted_at_level as f64 / config.iterations_per_temperature as f64;
                cooling_rate = if ratio > 0.6 {
                    0.99
                } else if ratio > 0.3 {
                    0.95
                } else {
                    0.90
                };
            }

            temperature *= cooling_rate;
        }

        AnnealOutcome {
            best_tour: best,
            best_cost,
            iterations,
            accepted_moves,
            final_temperature: temperature,
            cancelled,
        }
    }
}

/// Two distinct positions drawn uniformly from `0..n`. Requires `n >= 2`.
fn distinct_pair<R: Rng>(rng: &mut R, n: usize) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
