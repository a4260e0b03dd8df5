// src/circuits/mod.rs

//! Ordered gate sequences and their compilation to a single unitary.
//!
//! A `Circuit` is the gate list in application order: the first gate is
//! applied first. Compiling folds the gate matrices with `multiply`,
//! starting from the identity.

use crate::core::Matrix;
use crate::operations::{Gate, Qubit, SingleKind};
use std::fmt;

/// Composes `gates` into one 4×4 matrix, `((I · g0) · g1) · …`.
///
/// An empty slice compiles to the exact identity.
pub fn compile(gates: &[Gate]) -> Matrix {
    gates
        .iter()
        .map(Gate::matrix)
        .fold(Matrix::identity(), |acc, m| acc.multiply(&m))
}

/// An ordered sequence of gates on the two qubits.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// Creates a circuit from an existing gate list.
    pub fn from_gates(gates: Vec<Gate>) -> Self {
        Self { gates }
    }

    /// Appends a gate.
    pub fn push(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Appends every gate of `gates`, in order.
    pub fn extend<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        self.gates.extend(gates);
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// The last gate, if any.
    pub fn last(&self) -> Option<&Gate> {
        self.gates.last()
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// The unitary this circuit implements. See [`compile`].
    pub fn unitary(&self) -> Matrix {
        compile(&self.gates)
    }

    /// Space separated compact labels, e.g. `"H1 CX12 T2"`.
    pub fn labels(&self) -> String {
        self.gates.iter().map(Gate::label).collect::<Vec<_>>().join(" ")
    }

    /// Consumes the circuit, returning the gate list.
    pub fn into_gates(self) -> Vec<Gate> {
        self.gates
    }
}

impl From<Vec<Gate>> for Circuit {
    fn from(gates: Vec<Gate>) -> Self {
        Self::from_gates(gates)
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self { gates: iter.into_iter().collect() }
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining construction of a `Circuit`.
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Adds any gate.
    pub fn gate(mut self, gate: Gate) -> Self {
        self.circuit.push(gate);
        self
    }

    /// Adds `H` on `qubit`.
    pub fn h(self, qubit: Qubit) -> Self {
        self.gate(Gate::h(qubit))
    }

    /// Adds `T` on `qubit`.
    pub fn t(self, qubit: Qubit) -> Self {
        self.gate(Gate::t(qubit))
    }

    /// Adds a CNOT controlled by `control`.
    pub fn cnot(self, control: Qubit) -> Self {
        self.gate(Gate::cnot(control))
    }

    /// Adds multiple gates from an iterator.
    pub fn gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        self.circuit.extend(gates);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tqga::Circuit[{} gates]", self.gates.len())?;
        if self.gates.is_empty() {
            return Ok(());
        }

        const GATE_WIDTH: usize = 5; // e.g. "──H──"
        const H_WIRE: char = '─';
        const V_WIRE: char = '│';

        fn format_gate(symbol: char) -> String {
            let pre = (GATE_WIDTH - 1) / 2;
            let post = GATE_WIDTH - 1 - pre;
            format!("{}{}{}", H_WIRE.to_string().repeat(pre), symbol, H_WIRE.to_string().repeat(post))
        }

        let wire = H_WIRE.to_string().repeat(GATE_WIDTH);
        let mut top = String::new();
        let mut middle = String::new();
        let mut bottom = String::new();

        for gate in &self.gates {
            let (sym_one, sym_two, linked) = match gate {
                Gate::Single { qubit: Qubit::One, kind } => (Some(kind_symbol(*kind)), None, false),
                Gate::Single { qubit: Qubit::Two, kind } => (None, Some(kind_symbol(*kind)), false),
                Gate::Cnot { control: Qubit::One } => (Some('@'), Some('X'), true),
                Gate::Cnot { control: Qubit::Two } => (Some('X'), Some('@'), true),
            };
            top.push_str(&sym_one.map(format_gate).unwrap_or_else(|| wire.clone()));
            bottom.push_str(&sym_two.map(format_gate).unwrap_or_else(|| wire.clone()));
            let pad = (GATE_WIDTH - 1) / 2;
            middle.push_str(&" ".repeat(pad));
            middle.push(if linked { V_WIRE } else { ' ' });
            middle.push_str(&" ".repeat(GATE_WIDTH - 1 - pad));
        }

        writeln!(f, "q1: {}", top)?;
        writeln!(f, "    {}", middle.trim_end())?;
        writeln!(f, "q2: {}", bottom)
    }
}

fn kind_symbol(kind: SingleKind) -> char {
    match kind {
        SingleKind::H => 'H',
        SingleKind::T => 'T',
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
