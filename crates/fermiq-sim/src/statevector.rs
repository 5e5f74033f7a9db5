//! Statevector simulation engine.
//!
//! Amplitudes are indexed big-endian: the qubit at position 0 of the
//! register is the most significant bit of the basis index, so the basis
//! label `|q0 q1 ... q{n-1}⟩` reads like the binary index.

use num_complex::Complex64;
use fermiq_ir::{Gate, IrError};

use crate::error::{SimError, SimResult};

/// A quantum state on `num_qubits` qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Create the computational basis state `|index⟩`.
    pub fn basis(num_qubits: usize, index: usize) -> SimResult<Self> {
        let mut state = Self::new(num_qubits);
        if index >= state.amplitudes.len() {
            return Err(SimError::InitialStateOutOfRange {
                state: index,
                num_qubits,
            });
        }
        state.amplitudes.swap(0, index);
        Ok(state)
    }

    /// Wrap raw amplitudes; the length must be a power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> SimResult<Self> {
        if !amplitudes.len().is_power_of_two() {
            return Err(SimError::InvalidAmplitudeCount(amplitudes.len()));
        }
        let num_qubits = amplitudes.len().trailing_zeros() as usize;
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The amplitudes, big-endian indexed.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Consume the state and return its amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Squared norm of the state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    #[inline]
    fn mask(&self, position: usize) -> usize {
        1 << (self.num_qubits - 1 - position)
    }

    /// Apply a gate to the qubits at the given register positions.
    pub fn apply_gate(&mut self, gate: &Gate, qubits: &[usize]) -> SimResult<()> {
        if qubits.len() != gate.num_qubits() as usize {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate.name().to_string(),
                expected: gate.num_qubits(),
                got: qubits.len() as u32,
            }
            .into());
        }
        if let Some(&position) = qubits.iter().find(|&&q| q >= self.num_qubits) {
            return Err(SimError::PositionOutOfRange {
                position,
                num_qubits: self.num_qubits,
            });
        }
        let angle = |p: &fermiq_ir::ParameterExpression| {
            p.as_f64().ok_or_else(|| SimError::UnboundParameter {
                gate: gate.name().to_string(),
            })
        };
        match gate {
            Gate::X => self.apply_x(qubits[0]),
            Gate::H => self.apply_h(qubits[0]),
            Gate::Rz(theta) => self.apply_rz(qubits[0], angle(theta)?),
            Gate::P(theta) => self.apply_phase(qubits[0], angle(theta)?),
            Gate::CX => self.apply_cx(qubits[0], qubits[1]),
            Gate::Givens(theta, phi) => {
                self.apply_givens(qubits[0], qubits[1], angle(theta)?, angle(phi)?);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = self.mask(qubit);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = self.mask(qubit);
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = self.mask(qubit);
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = self.mask(qubit);
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == 0 {
                *amp *= phase_0;
            } else {
                *amp *= phase_1;
            }
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = self.mask(control);
        let tgt_mask = self.mask(target);
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    /// Givens(θ, φ): rotates the single-occupation subspace `{|10⟩, |01⟩}`
    /// of `(q1, q2)` and leaves `|00⟩`, `|11⟩` untouched.
    fn apply_givens(&mut self, q1: usize, q2: usize, theta: f64, phi: f64) {
        let mask1 = self.mask(q1);
        let mask2 = self.mask(q2);
        let c = theta.cos();
        let s = theta.sin();
        let e_ip = Complex64::from_polar(1.0, phi);
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                let alpha = self.amplitudes[i];
                let beta = self.amplitudes[j];
                self.amplitudes[i] = c * alpha - e_ip.conj() * s * beta;
                self.amplitudes[j] = e_ip * s * alpha + c * beta;
            }
        }
    }
}
