//! Error types for the variational crate.

use thiserror::Error;

/// Errors produced while building or binding an ansatz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VariationalError {
    /// The same parameter name was declared twice.
    #[error("Duplicate parameter name '{0}'")]
    DuplicateParameter(String),

    /// A value vector whose length differs from the parameter count.
    #[error("Expected {expected} parameter values, got {got}")]
    ParameterCountMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] fermiq_ir::IrError),
}

/// Result type for variational operations.
pub type VariationalResult<T> = Result<T, VariationalError>;
