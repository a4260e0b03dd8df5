// src/search/results.rs
use crate::circuits::Circuit;
use crate::core::Matrix;
use std::fmt;

/// Best approximation found by one search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    circuit: Circuit,
    unitary: Matrix,
    fidelity: f64,
    /// Best fidelity after each evaluated candidate. Non-decreasing.
    history: Vec<f64>,
    improvements: usize,
    seed: Option<u64>,
}

impl SearchResult {
    /// Starts a result from the first evaluated candidate. (Internal visibility)
    pub(crate) fn first(circuit: Circuit, unitary: Matrix, fidelity: f64) -> Self {
        Self {
            circuit,
            unitary,
            fidelity,
            history: vec![fidelity],
            improvements: 1,
            seed: None,
        }
    }

    /// Offers a candidate. It replaces the incumbent only when its fidelity
    /// is strictly higher; ties keep the incumbent. Returns whether it was
    /// taken. (Internal visibility)
    pub(crate) fn offer(&mut self, circuit: Circuit, unitary: Matrix, fidelity: f64) -> bool {
        let improved = fidelity > self.fidelity;
        if improved {
            self.circuit = circuit;
            self.unitary = unitary;
            self.fidelity = fidelity;
            self.improvements += 1;
        }
        self.history.push(self.fidelity);
        improved
    }

    pub(crate) fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// The best gate sequence.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The compiled unitary of [`Self::circuit`].
    pub fn unitary(&self) -> &Matrix {
        &self.unitary
    }

    /// Fidelity of the best sequence against the target.
    pub fn fidelity(&self) -> f64 {
        self.fidelity
    }

    /// Best fidelity after each evaluated candidate, in evaluation order.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// How many times the incumbent was set, counting the first candidate.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    /// Number of candidates evaluated.
    pub fn evaluated(&self) -> usize {
        self.history.len()
    }

    /// Seed of the random source, when the run was seeded by the searcher.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Results:")?;
        writeln!(f, "  Fidelity: {:.6}", self.fidelity)?;
        writeln!(
            f,
            "  Candidates: {} evaluated, {} improvements",
            self.evaluated(),
            self.improvements
        )?;
        if let Some(seed) = self.seed {
            writeln!(f, "  Seed: {}", seed)?;
        }
        if self.circuit.is_empty() {
            writeln!(f, "  Gates: (none)")?;
        } else {
            writeln!(f, "  Gates ({}): {}", self.circuit.len(), self.circuit.labels())?;
        }
        Ok(())
    }
}
