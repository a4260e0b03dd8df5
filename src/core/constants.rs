//! Numerical constants shared across the engine.

/// Constants governing the gate set and the editor guards.
pub mod gate_constants {
    /// `1/√2`, the Hadamard entry and both parts of `e^(iπ/4)`.
    pub const SQRT1_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
    /// Dimension of the two-qubit state space.
    pub const DIM: usize = 4;
    /// Largest `|m[0][0]|` the magnitude editor will still grow.
    pub const MAX_EDITABLE_MAGNITUDE: f64 = 0.95;
    /// Smallest `|m[0][0]|` the magnitude editor will still shrink.
    pub const MIN_EDITABLE_MAGNITUDE: f64 = 0.05;
    /// Minimum squared norm left for the other three entries of the edited
    /// row: each of them keeps at least `MIN_EDITABLE_MAGNITUDE` on average.
    pub const MIN_REMAINING_NORM: f64 =
        MIN_EDITABLE_MAGNITUDE * MIN_EDITABLE_MAGNITUDE * (DIM - 1) as f64;
    /// Default tolerance for unitarity checks.
    pub const UNITARY_TOLERANCE: f64 = 1e-9;
    /// Residual norms at or below this are treated as zero.
    pub const DEGENERACY_EPSILON: f64 = 1e-14;
}
