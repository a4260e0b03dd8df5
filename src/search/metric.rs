// src/search/metric.rs

use crate::core::{Matrix, DIM};

/// Closeness of two 4×4 unitaries, `|Tr(U†V)|² / 16`.
///
/// The score is in `[0, 1]`, unchanged when either argument picks up a
/// global phase, exactly 1 when `V = e^(iθ)U`, and 0 when `U†V` is
/// traceless (e.g. `I` against `Z ⊗ I`).
pub fn fidelity(target: &Matrix, candidate: &Matrix) -> f64 {
    let overlap = target.dagger().multiply(candidate).trace();
    let d = DIM as f64;
    (overlap.norm_sqr() / (d * d)).clamp(0.0, 1.0)
}
