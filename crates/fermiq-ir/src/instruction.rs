//! Circuit instructions combining gates with operands.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::Gate;
use crate::qubit::QubitId;

/// A gate applied to an ordered list of qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: Gate,
    /// Qubits this instruction operates on, in gate-operand order.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: Gate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: Gate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: Gate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &str {
        self.gate.name()
    }

    /// The inverse instruction on the same operands.
    pub fn inverse(&self) -> Self {
        Self {
            gate: self.gate.inverse(),
            qubits: self.qubits.clone(),
        }
    }

    /// Substitute bound symbols in the gate parameters.
    pub fn assign(&self, bindings: &FxHashMap<String, f64>) -> Self {
        Self {
            gate: self.gate.assign(bindings),
            qubits: self.qubits.clone(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        let params = self.gate.parameters();
        if !params.is_empty() {
            let rendered: Vec<String> = params.iter().map(ToString::to_string).collect();
            write!(f, "({})", rendered.join(", "))?;
        }
        let qubits: Vec<String> = self.qubits.iter().map(ToString::to_string).collect();
        write!(f, " {}", qubits.join(", "))
    }
}
