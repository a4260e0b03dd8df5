// src/sampling/generator.rs

//! Random gate sequences with no locally cancelling steps.
//!
//! The walk draws each gate uniformly from the gates that are legal after
//! the previous one. `T` is always legal. `H` on a qubit is illegal right
//! after `H` on the same qubit, and a CNOT is illegal right after the
//! identical CNOT, since both pairs compose to the identity.

use crate::circuits::Circuit;
use crate::operations::{Gate, Qubit, SingleKind};
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::trace;

/// What the last emitted gate leaves behind. Fully determines which gates
/// may come next.
///
/// A fresh state (all `false`) allows every gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GeneratorState {
    /// Qubit 1's most recent single-qubit gate was `H`, with no CNOT since.
    pub qubit_one_ended_in_h: bool,
    /// Qubit 2's most recent single-qubit gate was `H`, with no CNOT since.
    pub qubit_two_ended_in_h: bool,
    /// The last gate was CNOT controlled by qubit 1.
    pub ended_in_cnot_one: bool,
    /// The last gate was CNOT controlled by qubit 2.
    pub ended_in_cnot_two: bool,
}

impl GeneratorState {
    /// State before any gate has been emitted.
    pub fn new() -> Self {
        Self::default()
    }

    fn ended_in_h(&self, qubit: Qubit) -> bool {
        match qubit {
            Qubit::One => self.qubit_one_ended_in_h,
            Qubit::Two => self.qubit_two_ended_in_h,
        }
    }

    fn ended_in_cnot(&self, control: Qubit) -> bool {
        match control {
            Qubit::One => self.ended_in_cnot_one,
            Qubit::Two => self.ended_in_cnot_two,
        }
    }

    /// Whether `gate` may be emitted next.
    pub fn is_legal(&self, gate: &Gate) -> bool {
        match gate {
            Gate::Single { kind: SingleKind::T, .. } => true,
            Gate::Single { qubit, kind: SingleKind::H } => !self.ended_in_h(*qubit),
            Gate::Cnot { control } => !self.ended_in_cnot(*control),
        }
    }

    /// The legal next gates: both `T`s first, then whichever of `H1`, `H2`,
    /// `CX12`, `CX21` are allowed. Always 4 to 6 entries.
    pub fn candidates(&self) -> Vec<Gate> {
        let mut cand = vec![Gate::t(Qubit::One), Gate::t(Qubit::Two)];
        cand.extend(
            [Gate::h(Qubit::One), Gate::h(Qubit::Two), Gate::cnot(Qubit::One), Gate::cnot(Qubit::Two)]
                .into_iter()
                .filter(|g| self.is_legal(g)),
        );
        cand
    }

    /// The state after emitting `gate`.
    ///
    /// A CNOT clears both `H` flags and sets only its own CNOT flag. A
    /// single-qubit gate clears both CNOT flags and rewrites only its own
    /// qubit's `H` flag.
    pub fn advance(self, gate: &Gate) -> Self {
        match gate {
            Gate::Cnot { control } => Self {
                qubit_one_ended_in_h: false,
                qubit_two_ended_in_h: false,
                ended_in_cnot_one: *control == Qubit::One,
                ended_in_cnot_two: *control == Qubit::Two,
            },
            Gate::Single { qubit, kind } => {
                let is_h = *kind == SingleKind::H;
                Self {
                    qubit_one_ended_in_h: if *qubit == Qubit::One { is_h } else { self.qubit_one_ended_in_h },
                    qubit_two_ended_in_h: if *qubit == Qubit::Two { is_h } else { self.qubit_two_ended_in_h },
                    ended_in_cnot_one: false,
                    ended_in_cnot_two: false,
                }
            }
        }
    }
}

/// Draws one legal gate uniformly and returns it with the updated state.
pub fn next_gate<R: Rng + ?Sized>(rng: &mut R, state: GeneratorState) -> (Gate, GeneratorState) {
    let cand = state.candidates();
    let gate = cand[rng.random_range(0..cand.len())];
    (gate, state.advance(&gate))
}

/// Generates a non-wasteful random sequence of `length` gates.
///
/// Gates are appended while `len < length`, so a fractional `length` rounds
/// up (2.5 yields 3 gates). Zero, negative and NaN lengths yield an empty
/// circuit.
pub fn non_wasteful_random_gates<R: Rng + ?Sized>(rng: &mut R, length: f64) -> Circuit {
    let mut ans = Circuit::new();
    let mut state = GeneratorState::new();
    while (ans.len() as f64) < length {
        let (gate, next) = next_gate(rng, state);
        ans.push(gate);
        state = next;
    }
    trace!(requested = length, generated = ans.len(), gates = %ans.labels(), "generated non-wasteful sequence");
    ans
}

/// `true` if no two adjacent gates cancel (`H·H` on one qubit, or the same
/// CNOT twice).
pub fn is_non_wasteful(gates: &[Gate]) -> bool {
    gates.windows(2).all(|pair| !pair[0].cancels_with(&pair[1]))
}

/// Owns a random source and hands out non-wasteful sequences.
#[derive(Debug, Clone)]
pub struct NonWastefulGenerator<R> {
    rng: R,
}

impl<R: Rng> NonWastefulGenerator<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A sequence of `length` gates; see [`non_wasteful_random_gates`].
    pub fn generate(&mut self, length: f64) -> Circuit {
        non_wasteful_random_gates(&mut self.rng, length)
    }

    /// Access to the underlying random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl NonWastefulGenerator<StdRng> {
    /// Deterministic generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_fresh_state_allows_all_six() {
        let cand = GeneratorState::new().candidates();
        assert_eq!(cand.len(), 6);
        for gate in Gate::ALL {
            assert!(cand.contains(&gate));
        }
    }

    #[test]
    fn test_after_h_same_h_is_excluded() {
        let state = GeneratorState::new().advance(&Gate::h(Qubit::Two));
        let cand = state.candidates();
        assert_eq!(cand.len(), 5);
        assert!(!cand.contains(&Gate::h(Qubit::Two)));
        assert!(cand.contains(&Gate::h(Qubit::One)));
    }

    #[test]
    fn test_both_h_flags_give_four_candidates() {
        let state = GeneratorState::new()
            .advance(&Gate::h(Qubit::One))
            .advance(&Gate::h(Qubit::Two));
        assert!(state.qubit_one_ended_in_h, "other qubit's H flag must survive");
        assert_eq!(state.candidates().len(), 4);
    }

    #[test]
    fn test_cnot_clears_h_flags() {
        let state = GeneratorState::new()
            .advance(&Gate::h(Qubit::One))
            .advance(&Gate::cnot(Qubit::Two));
        assert_eq!(
            state,
            GeneratorState {
                qubit_one_ended_in_h: false,
                qubit_two_ended_in_h: false,
                ended_in_cnot_one: false,
                ended_in_cnot_two: true,
            }
        );
        assert!(!state.is_legal(&Gate::cnot(Qubit::Two)));
        assert!(state.is_legal(&Gate::cnot(Qubit::One)));
    }

    #[test]
    fn test_single_gate_clears_cnot_flags() {
        let state = GeneratorState::new()
            .advance(&Gate::cnot(Qubit::One))
            .advance(&Gate::t(Qubit::Two));
        assert!(!state.ended_in_cnot_one);
        assert!(!state.ended_in_cnot_two);
        // T on qubit 2 after H on qubit 2 lifts the H restriction
        let state = GeneratorState::new()
            .advance(&Gate::h(Qubit::Two))
            .advance(&Gate::t(Qubit::Two));
        assert!(state.is_legal(&Gate::h(Qubit::Two)));
    }

    #[test]
    fn test_exact_lengths() {
        let mut r = rng(7);
        for n in 0..20 {
            assert_eq!(non_wasteful_random_gates(&mut r, n as f64).len(), n);
        }
    }

    #[test]
    fn test_fractional_length_rounds_up() {
        let mut r = rng(11);
        assert_eq!(non_wasteful_random_gates(&mut r, 2.5).len(), 3);
        assert_eq!(non_wasteful_random_gates(&mut r, 0.1).len(), 1);
        assert_eq!(non_wasteful_random_gates(&mut r, -3.0).len(), 0);
        assert_eq!(non_wasteful_random_gates(&mut r, f64::NAN).len(), 0);
    }

    #[test]
    fn test_generated_sequences_are_non_wasteful() {
        let mut generator = NonWastefulGenerator::seeded(42);
        for _ in 0..200 {
            let c = generator.generate(30.0);
            assert!(is_non_wasteful(c.gates()), "wasteful sequence: {}", c.labels());
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = NonWastefulGenerator::seeded(3).generate(25.0);
        let b = NonWastefulGenerator::seeded(3).generate(25.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_gate_eventually_drawn() {
        let c = NonWastefulGenerator::seeded(5).generate(500.0);
        for gate in Gate::ALL {
            assert!(c.gates().contains(&gate), "{} never drawn", gate);
        }
    }

    #[test]
    fn test_is_non_wasteful_detects_pairs() {
        assert!(is_non_wasteful(&[]));
        assert!(is_non_wasteful(&[Gate::h(Qubit::One), Gate::h(Qubit::Two), Gate::h(Qubit::One)]));
        assert!(!is_non_wasteful(&[Gate::t(Qubit::One), Gate::cnot(Qubit::One), Gate::cnot(Qubit::One)]));
    }
}
