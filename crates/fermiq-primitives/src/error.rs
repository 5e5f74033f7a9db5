//! Error types for the primitives crate.

use thiserror::Error;

/// Errors produced while synthesizing fermionic primitives.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrimitiveError {
    /// The transformation matrix does not have shape n×n or n×2n.
    #[error(
        "Bad shape for transformation matrix: got {rows}x{cols} for {n} qubits (expected {n} rows and {n} or 2*{n} columns)"
    )]
    Shape {
        /// Number of qubits (modes).
        n: usize,
        /// Observed row count.
        rows: usize,
        /// Observed column count.
        cols: usize,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] fermiq_ir::IrError),
}

/// Result type for primitive synthesis.
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
