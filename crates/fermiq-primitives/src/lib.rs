//! `fermiq-primitives` — fermionic circuit primitives.
//!
//! Synthesizes circuits for Bogoliubov transformations of fermionic modes
//! under the Jordan-Wigner encoding, from a particle-conserving `n×n` matrix
//! or a general `n×2n` matrix `[W1 | W2]` defining
//!
//!   b†_j = Σ_k W1[j, k] a†_k + Σ_k W2[j, k] a_k
//!
//! The output uses only adjacent-qubit Givens rotations, phase gates and an
//! X gate on the last qubit.
//!
//! # Quick start
//!
//! ```rust
//! use fermiq_ir::QubitId;
//! use fermiq_primitives::{BogoliubovTransform, InitialState};
//!
//! // Discrete Fourier transform of three modes.
//! let w = fermiq_primitives::random::fourier(3);
//!
//! // Prepare b†_0 |vac⟩ starting from mode 0 occupied (|100⟩).
//! let circuit = BogoliubovTransform::new(QubitId::range(3), w)
//!     .with_initial_state(InitialState::Basis(0b100))
//!     .circuit()
//!     .unwrap();
//! assert!(circuit.len() <= 2);
//! ```

pub mod bogoliubov;
mod decomposition;
pub mod error;
pub mod initial_state;
pub mod options;
pub mod random;

pub use bogoliubov::{BogoliubovTransform, bogoliubov_transform};
pub use error::{PrimitiveError, PrimitiveResult};
pub use initial_state::InitialState;
pub use options::SynthesisOptions;
