// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod scalar;
pub mod matrix;
pub mod orthonormal;

// Re-export public types for convenient access via `tqga::core::TypeName`
pub use error::GateError;
pub use matrix::{dagger, multiply, Matrix, Vector};
pub use orthonormal::{gram_schmidt, orthonormalize_rows};

pub mod constants;
pub use constants::gate_constants::DIM; // Re-export
