//! Dense statevector simulation for fermiq circuits.
//!
//! Used to check synthesized circuits against their fermionic targets. The
//! register is big-endian: for a circuit over qubits `q0..q{n-1}`, basis
//! index bit `n-1-i` holds qubit `i`.
//!
//! ```rust
//! use fermiq_ir::{Circuit, QubitId};
//! use fermiq_sim::Simulator;
//!
//! let mut circuit = Circuit::with_size("hop", 2);
//! circuit.givens(std::f64::consts::FRAC_PI_2, 0.0, QubitId(0), QubitId(1)).unwrap();
//!
//! // |10⟩ -> |01⟩
//! let state = Simulator::new().simulate(&circuit, 0b10).unwrap();
//! assert!((state.amplitudes()[0b01].re - 1.0).abs() < 1e-12);
//! ```

pub mod compare;
pub mod error;
pub mod simulator;
pub mod statevector;

pub use compare::{allclose, allclose_up_to_global_phase};
pub use error::{SimError, SimResult};
pub use simulator::{MAX_QUBITS, Simulator};
pub use statevector::Statevector;
