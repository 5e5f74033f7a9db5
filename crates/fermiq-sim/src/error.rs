//! Error types for the sim crate.

use fermiq_ir::QubitId;
use thiserror::Error;

/// Errors produced while simulating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A gate parameter is still symbolic.
    #[error("Gate '{gate}' has unbound parameter(s); bind them before simulating")]
    UnboundParameter {
        /// Name of the offending gate.
        gate: String,
    },

    /// An instruction touches a qubit that is not in the qubit order.
    #[error("Qubit {0} is not part of the simulated qubit order")]
    UnknownQubit(QubitId),

    /// The state would not fit in memory.
    #[error("Cannot simulate {requested} qubits (maximum is {max})")]
    TooManyQubits {
        /// Number of qubits requested.
        requested: usize,
        /// Supported maximum.
        max: usize,
    },

    /// An amplitude vector whose length is not a power of two.
    #[error("Amplitude count {0} is not a power of two")]
    InvalidAmplitudeCount(usize),

    /// A state whose width differs from the simulated register.
    #[error("State has {state} qubits but the register has {register}")]
    StateSizeMismatch {
        /// Width of the supplied state.
        state: usize,
        /// Width of the qubit order.
        register: usize,
    },

    /// A gate operand outside the state.
    #[error("Qubit position {position} is out of range for {num_qubits} qubits")]
    PositionOutOfRange {
        /// The offending register position.
        position: usize,
        /// Width of the state.
        num_qubits: usize,
    },

    /// The initial basis state does not fit the register.
    #[error("Initial state {state} is out of range for {num_qubits} qubits")]
    InitialStateOutOfRange {
        /// The requested basis index.
        state: usize,
        /// Register width.
        num_qubits: usize,
    },

    /// Circuit IR returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] fermiq_ir::IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
