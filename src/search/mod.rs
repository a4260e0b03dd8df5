// src/search/mod.rs

//! Stochastic search for a gate sequence approximating a target unitary.
//!
//! For every length in the schedule the searcher draws non-wasteful
//! sequences, compiles them and scores them with [`fidelity`]. A candidate
//! replaces the incumbent only when it scores strictly higher, so the
//! tracked best fidelity never decreases during a run.

mod metric;
mod results;

pub use metric::fidelity;
pub use results::SearchResult;

use crate::core::{GateError, Matrix};
use crate::sampling::non_wasteful_random_gates;
use crate::validation::check_unitarity;
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{debug, trace};

/// Longest sequence length in the default schedule.
pub const DEFAULT_MAX_LENGTH: usize = 40;

/// Settings for a [`Searcher`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Strictly increasing sequence lengths to try, in order.
    lengths: Vec<f64>,
    /// Candidates drawn for each length.
    samples_per_length: usize,
    /// Seed used by [`Searcher::search_seeded`]; drawn fresh when `None`.
    seed: Option<u64>,
}

impl Default for SearchConfig {
    /// Lengths `1..=40`, one sample each, unseeded.
    fn default() -> Self {
        Self {
            lengths: (1..=DEFAULT_MAX_LENGTH).map(|n| n as f64).collect(),
            samples_per_length: 1,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the length schedule.
    ///
    /// # Returns
    /// * `Err(GateError::InvalidSchedule)` if `lengths` is empty, has a
    ///   non-finite entry, or is not strictly increasing.
    pub fn with_lengths<I>(mut self, lengths: I) -> Result<Self, GateError>
    where
        I: IntoIterator<Item = f64>,
    {
        let lengths: Vec<f64> = lengths.into_iter().collect();
        if lengths.is_empty() {
            return Err(GateError::invalid_schedule("schedule has no lengths"));
        }
        if let Some(bad) = lengths.iter().find(|l| !l.is_finite()) {
            return Err(GateError::invalid_schedule(format!("length {} is not finite", bad)));
        }
        if let Some(pair) = lengths.windows(2).find(|w| w[1] <= w[0]) {
            return Err(GateError::invalid_schedule(format!(
                "lengths must strictly increase, found {} then {}",
                pair[0], pair[1]
            )));
        }
        self.lengths = lengths;
        Ok(self)
    }

    /// Schedule `1, 2, …, max_length`.
    pub fn with_max_length(self, max_length: usize) -> Result<Self, GateError> {
        self.with_lengths((1..=max_length).map(|n| n as f64))
    }

    /// Candidates drawn per length; values below 1 are raised to 1.
    pub fn with_samples_per_length(mut self, samples: usize) -> Self {
        self.samples_per_length = samples.max(1);
        self
    }

    /// Fixes the seed used by [`Searcher::search_seeded`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The length schedule.
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Candidates per length.
    pub fn samples_per_length(&self) -> usize {
        self.samples_per_length
    }

    /// Configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Runs fidelity-guided searches with a fixed [`SearchConfig`].
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches for the sequence that best approximates `target`, drawing
    /// randomness from `rng`.
    ///
    /// # Returns
    /// * `Ok(SearchResult)` with the best sequence, its matrix and fidelity.
    /// * `Err(GateError::NonUnitary)` if `target` is not unitary.
    pub fn search<R: Rng + ?Sized>(&self, target: &Matrix, rng: &mut R) -> Result<SearchResult, GateError> {
        check_unitarity(target, None)?;

        let mut best: Option<SearchResult> = None;
        for &length in &self.config.lengths {
            for _ in 0..self.config.samples_per_length {
                let circuit = non_wasteful_random_gates(rng, length);
                let unitary = circuit.unitary();
                let score = fidelity(target, &unitary);
                trace!(length, score, "evaluated candidate");

                match best.as_mut() {
                    None => {
                        debug!(length, fidelity = score, "initial candidate");
                        best = Some(SearchResult::first(circuit, unitary, score));
                    }
                    Some(incumbent) => {
                        let previous = incumbent.fidelity();
                        if incumbent.offer(circuit, unitary, score) {
                            debug!(length, fidelity = score, previous, "improved approximation");
                        }
                    }
                }
            }
        }

        // Schedules are validated non-empty and samples_per_length >= 1
        best.ok_or_else(|| GateError::invalid_schedule("schedule has no lengths"))
    }

    /// Like [`Self::search`], with a `StdRng` seeded from the configured
    /// seed (or a freshly drawn one). The seed is recorded on the result.
    pub fn search_seeded(&self, target: &Matrix) -> Result<SearchResult, GateError> {
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut result = self.search(target, &mut rng)?;
        result.set_seed(seed);
        Ok(result)
    }
}
