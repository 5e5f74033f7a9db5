//! fermiq Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in fermiq: ordered instruction lists over an ordered set of
//! qubits, with the fermionic two-mode Givens rotation as a first-class gate.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`], an opaque ordered label
//! - **Gates**: [`Gate`], the fermionic gate set plus a few helpers for
//!   state preparation
//! - **Parameters**: [`ParameterExpression`] for symbolic parameters in variational circuits
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] builder with composition, inversion and parameter binding
//!
//! # Example: A Fermionic Beam Splitter
//!
//! ```rust
//! use fermiq_ir::{Circuit, QubitId};
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::with_size("beam_splitter", 2);
//!
//! // Occupy mode 0, then split the particle evenly over modes 0 and 1.
//! circuit.x(QubitId(0)).unwrap();
//! circuit.givens(PI / 4.0, 0.0, QubitId(0), QubitId(1)).unwrap();
//!
//! let adjoint = circuit.inverse();
//! assert_eq!(adjoint.len(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Example: Parameterized Circuit
//!
//! ```rust
//! use fermiq_ir::{Circuit, QubitId, ParameterExpression};
//! use rustc_hash::FxHashMap;
//!
//! let mut circuit = Circuit::with_size("variational", 2);
//! let theta = ParameterExpression::symbol("theta");
//! circuit.givens(theta, 0.0, QubitId(0), QubitId(1)).unwrap();
//! assert!(circuit.is_parameterized());
//!
//! let mut bindings = FxHashMap::default();
//! bindings.insert("theta".to_string(), 0.25);
//! assert!(!circuit.assign_parameters(&bindings).is_parameterized());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `X` | 1 | Pauli-X; particle-hole on the last mode |
//! | `H`, `Rz` | 1 | State preparation |
//! | `P` | 1 | Single-mode phase |
//! | `CX` | 2 | CNOT |
//! | `Givens` | 2 | Fermionic two-mode rotation Givens(θ, φ) |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::Instruction;
pub use parameter::ParameterExpression;
pub use qubit::QubitId;
