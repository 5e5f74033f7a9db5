//! Gate set.
//!
//! Bogoliubov synthesis emits only `X`, `P` and `Givens`. `H`, `Rz` and
//! `CX` are kept for preparing non-basis states around synthesized circuits.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::parameter::ParameterExpression;

/// A gate with known semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Pauli-X. On the last mode of a Jordan-Wigner register this is the
    /// particle-hole transformation.
    X,
    /// Hadamard gate.
    H,
    /// Rotation around Z axis.
    Rz(ParameterExpression),
    /// Phase gate `diag(1, e^{iθ})`; multiplies an occupied mode by a phase.
    P(ParameterExpression),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Fermionic two-mode Givens rotation `Givens(θ, φ)`.
    ///
    /// Acting on qubits `(a, b)` that encode adjacent modes, it fixes
    /// `|00⟩` and `|11⟩` and maps
    ///
    /// ```text
    /// |10⟩ →  cos θ |10⟩ + e^{iφ} sin θ |01⟩
    /// |01⟩ → -e^{-iφ} sin θ |10⟩ + cos θ |01⟩
    /// ```
    ///
    /// so that `G a†_a G† = cos θ a†_a + e^{iφ} sin θ a†_b`.
    Givens(ParameterExpression, ParameterExpression),
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::X => "x",
            Gate::H => "h",
            Gate::Rz(_) => "rz",
            Gate::P(_) => "p",
            Gate::CX => "cx",
            Gate::Givens(_, _) => "givens",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::X | Gate::H | Gate::Rz(_) | Gate::P(_) => 1,
            Gate::CX | Gate::Givens(_, _) => 2,
        }
    }

    /// Check if any parameter of this gate is still symbolic.
    pub fn is_parameterized(&self) -> bool {
        self.parameters().iter().any(|p| p.is_symbolic())
    }

    /// Get parameters of this gate.
    pub fn parameters(&self) -> Vec<&ParameterExpression> {
        match self {
            Gate::Rz(p) | Gate::P(p) => vec![p],
            Gate::Givens(theta, phi) => vec![theta, phi],
            Gate::X | Gate::H | Gate::CX => vec![],
        }
    }

    /// The inverse gate.
    pub fn inverse(&self) -> Gate {
        match self {
            Gate::Rz(p) => Gate::Rz(p.negated()),
            Gate::P(p) => Gate::P(p.negated()),
            // The mode matrix of Givens(θ, φ) is unitary with det 1;
            // its adjoint is Givens(-θ, φ).
            Gate::Givens(theta, phi) => Gate::Givens(theta.negated(), phi.clone()),
            Gate::X | Gate::H | Gate::CX => self.clone(),
        }
    }

    /// Substitute bound symbols in every parameter.
    pub fn assign(&self, bindings: &FxHashMap<String, f64>) -> Gate {
        match self {
            Gate::Rz(p) => Gate::Rz(p.assign(bindings)),
            Gate::P(p) => Gate::P(p.assign(bindings)),
            Gate::Givens(theta, phi) => Gate::Givens(theta.assign(bindings), phi.assign(bindings)),
            Gate::X | Gate::H | Gate::CX => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_properties() {
        assert_eq!(Gate::H.num_qubits(), 1);
        assert_eq!(Gate::CX.num_qubits(), 2);
        assert_eq!(Gate::Givens(0.1.into(), 0.2.into()).num_qubits(), 2);

        assert!(!Gate::H.is_parameterized());
        assert!(!Gate::P(0.3.into()).is_parameterized());
        assert!(Gate::Givens(ParameterExpression::symbol("theta"), 0.0.into()).is_parameterized());
    }

    #[test]
    fn test_givens_inverse_negates_angle_only() {
        let g = Gate::Givens(0.7.into(), 1.1.into());
        assert_eq!(g.inverse(), Gate::Givens((-0.7).into(), 1.1.into()));
        assert_eq!(g.inverse().inverse(), g);
    }

    #[test]
    fn test_self_inverse_and_phase_gates() {
        assert_eq!(Gate::X.inverse(), Gate::X);
        assert_eq!(Gate::CX.inverse(), Gate::CX);
        assert_eq!(Gate::P(0.25.into()).inverse(), Gate::P((-0.25).into()));
        assert_eq!(Gate::Rz(1.0.into()).inverse(), Gate::Rz((-1.0).into()));
    }

    #[test]
    fn test_assign_binds_symbols() {
        let gate = Gate::Givens(
            ParameterExpression::symbol("t"),
            ParameterExpression::constant(0.0),
        );
        let mut bindings = FxHashMap::default();
        bindings.insert("t".to_string(), 0.5);
        let bound = gate.assign(&bindings);
        assert_eq!(bound.parameters()[0].as_f64(), Some(0.5));
        assert!(!bound.is_parameterized());
    }
}
