// src/operations/mod.rs

//! The fixed universal gate set: `H` and `T` on either qubit, and CNOT with
//! either qubit as control.
//!
//! Every gate maps to an exact 4×4 unitary on the basis `|q1 q2⟩`
//! ordered `|00⟩, |01⟩, |10⟩, |11⟩` (qubit 1 is the most significant bit).
//! Single-qubit gates are lifted with a Kronecker product; the two CNOTs
//! are written out directly as permutation matrices.

use crate::core::constants::gate_constants::SQRT1_2;
use crate::core::Matrix;
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;

/// A 2×2 complex matrix, row-major.
pub type Matrix2 = [[Complex64; 2]; 2];

/// One of the two qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Qubit {
    /// Qubit 1, the most significant bit of a basis index.
    One,
    /// Qubit 2, the least significant bit of a basis index.
    Two,
}

impl Qubit {
    /// The other qubit.
    pub fn other(self) -> Qubit {
        match self {
            Qubit::One => Qubit::Two,
            Qubit::Two => Qubit::One,
        }
    }

    /// 1-based label used in diagrams.
    pub fn number(self) -> u8 {
        match self {
            Qubit::One => 1,
            Qubit::Two => 2,
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.number())
    }
}

/// Single-qubit gate kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleKind {
    /// Hadamard, `(1/√2)[[1,1],[1,-1]]`. Self-inverse.
    H,
    /// π/4 phase, `[[1,0],[0,e^(iπ/4)]]`.
    T,
}

impl SingleKind {
    /// The 2×2 matrix of this gate.
    pub fn matrix(self) -> Matrix2 {
        match self {
            SingleKind::H => hadamard(),
            SingleKind::T => t_gate(),
        }
    }
}

impl fmt::Display for SingleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingleKind::H => write!(f, "H"),
            SingleKind::T => write!(f, "T"),
        }
    }
}

/// An abstract gate descriptor. Immutable; two descriptors are the same
/// gate exactly when their fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// `kind` applied to `qubit`, identity on the other one.
    Single {
        /// Qubit the gate acts on.
        qubit: Qubit,
        /// Which single-qubit gate.
        kind: SingleKind,
    },
    /// Controlled-NOT; the qubit that is not `control` is the target.
    Cnot {
        /// Control qubit.
        control: Qubit,
    },
}

impl Gate {
    /// Every gate of the set, in a fixed order.
    pub const ALL: [Gate; 6] = [
        Gate::Single { qubit: Qubit::One, kind: SingleKind::H },
        Gate::Single { qubit: Qubit::Two, kind: SingleKind::H },
        Gate::Single { qubit: Qubit::One, kind: SingleKind::T },
        Gate::Single { qubit: Qubit::Two, kind: SingleKind::T },
        Gate::Cnot { control: Qubit::One },
        Gate::Cnot { control: Qubit::Two },
    ];

    /// `H` on `qubit`.
    pub fn h(qubit: Qubit) -> Self {
        Gate::Single { qubit, kind: SingleKind::H }
    }

    /// `T` on `qubit`.
    pub fn t(qubit: Qubit) -> Self {
        Gate::Single { qubit, kind: SingleKind::T }
    }

    /// CNOT controlled by `control`.
    pub fn cnot(control: Qubit) -> Self {
        Gate::Cnot { control }
    }

    /// Qubits touched by the gate.
    pub fn involved_qubits(&self) -> Vec<Qubit> {
        match self {
            Gate::Single { qubit, .. } => vec![*qubit],
            Gate::Cnot { control } => vec![*control, control.other()],
        }
    }

    /// `true` when applying `self` then `next` trivially cancels to the
    /// identity (`H·H` on one qubit, or the same CNOT twice).
    pub fn cancels_with(&self, next: &Gate) -> bool {
        match (self, next) {
            (Gate::Single { qubit: a, kind: SingleKind::H }, Gate::Single { qubit: b, kind: SingleKind::H }) => a == b,
            (Gate::Cnot { control: a }, Gate::Cnot { control: b }) => a == b,
            _ => false,
        }
    }

    /// The exact 4×4 unitary of this gate.
    pub fn matrix(&self) -> Matrix {
        match self {
            Gate::Single { qubit: Qubit::One, kind } => kron(&kind.matrix(), &identity2()),
            Gate::Single { qubit: Qubit::Two, kind } => kron(&identity2(), &kind.matrix()),
            // Flips qubit 2 when qubit 1 is set: |10> <-> |11>
            Gate::Cnot { control: Qubit::One } => Matrix::from_real([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
                [0.0, 0.0, 1.0, 0.0],
            ]),
            // Flips qubit 1 when qubit 2 is set: |01> <-> |11>
            Gate::Cnot { control: Qubit::Two } => Matrix::from_real([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
            ]),
        }
    }

    /// Compact label, e.g. `H1`, `T2`, `CX12` (control 1, target 2).
    pub fn label(&self) -> String {
        match self {
            Gate::Single { qubit, kind } => format!("{}{}", kind, qubit.number()),
            Gate::Cnot { control } => format!("CX{}{}", control.number(), control.other().number()),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Single { qubit, kind } => write!(f, "{}({})", kind, qubit),
            Gate::Cnot { control } => write!(f, "CNOT({} -> {})", control, control.other()),
        }
    }
}

/// 2×2 identity.
pub fn identity2() -> Matrix2 {
    [[Complex64::one(), Complex64::zero()], [Complex64::zero(), Complex64::one()]]
}

/// Hadamard, with `1/√2` entries.
pub fn hadamard() -> Matrix2 {
    let s = Complex64::new(SQRT1_2, 0.0);
    [[s, s], [s, -s]]
}

/// `T = diag(1, e^(iπ/4))`, the phase stored as `(√2/2, √2/2)`.
pub fn t_gate() -> Matrix2 {
    [[Complex64::one(), Complex64::zero()], [Complex64::zero(), Complex64::new(SQRT1_2, SQRT1_2)]]
}

/// Kronecker product `a ⊗ b`: `row = 2*r_a + r_b`, `col = 2*c_a + c_b`.
pub fn kron(a: &Matrix2, b: &Matrix2) -> Matrix {
    let mut m = Matrix::zero();
    for ra in 0..2 {
        for ca in 0..2 {
            for rb in 0..2 {
                for cb in 0..2 {
                    m[(2 * ra + rb, 2 * ca + cb)] = a[ra][ca] * b[rb][cb];
                }
            }
        }
    }
    m
}
