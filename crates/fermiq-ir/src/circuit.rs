//! High-level circuit builder API.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::Instruction;
use crate::parameter::ParameterExpression;
use crate::qubit::QubitId;

/// A quantum circuit: an ordered sequence of instructions over a fixed,
/// ordered set of qubits.
///
/// The qubit order is significant. Simulators use it as the default basis
/// ordering (first qubit = most significant bit), and fermionic synthesis
/// routines use it as the Jordan-Wigner mode order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<QubitId>,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            instructions: vec![],
        }
    }

    /// Create a circuit on the line of qubits `q0..q{n-1}`.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self::from_qubits(name, QubitId::range(num_qubits))
    }

    /// Create a circuit on the given qubits, in the given order.
    ///
    /// Repeated ids are kept once, at their first position.
    pub fn from_qubits(name: impl Into<String>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        let mut circuit = Self::new(name);
        for q in qubits {
            circuit.add_qubit(q);
        }
        circuit
    }

    /// Add a qubit to the end of the qubit order. No-op if already present.
    pub fn add_qubit(&mut self, qubit: QubitId) -> QubitId {
        if !self.qubits.contains(&qubit) {
            self.qubits.push(qubit);
        }
        qubit
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::X, qubit))
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::H, qubit))
    }

    /// Apply Rz rotation gate.
    pub fn rz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::Rz(theta.into()), qubit))
    }

    /// Apply phase gate.
    pub fn p(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::P(theta.into()), qubit))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(Gate::CX, control, target))
    }

    /// Apply a fermionic Givens rotation between two adjacent modes.
    pub fn givens(
        &mut self,
        theta: impl Into<ParameterExpression>,
        phi: impl Into<ParameterExpression>,
        q1: QubitId,
        q2: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            Gate::Givens(theta.into(), phi.into()),
            q1,
            q2,
        ))
    }

    /// Apply a gate on an explicit operand list.
    pub fn gate(
        &mut self,
        gate: Gate,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(gate, qubits))
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Append an instruction after validating its operands.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.validate(&instruction)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    /// Append every instruction in order.
    ///
    /// All instructions are validated before any is appended; on error the
    /// circuit is left unchanged.
    pub fn extend(
        &mut self,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> IrResult<&mut Self> {
        let pending: Vec<Instruction> = instructions.into_iter().collect();
        for instruction in &pending {
            self.validate(instruction)?;
        }
        self.instructions.extend(pending);
        Ok(self)
    }

    /// Append all of `other`'s instructions after this circuit's.
    pub fn compose(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        self.extend(other.instructions.iter().cloned())
    }

    /// The adjoint circuit: instructions reversed, each gate inverted.
    pub fn inverse(&self) -> Circuit {
        Self {
            name: format!("{}_dg", self.name),
            qubits: self.qubits.clone(),
            instructions: self.instructions.iter().rev().map(Instruction::inverse).collect(),
        }
    }

    /// A copy with every bound symbol replaced by its value.
    pub fn assign_parameters(&self, bindings: &FxHashMap<String, f64>) -> Circuit {
        Self {
            name: self.name.clone(),
            qubits: self.qubits.clone(),
            instructions: self
                .instructions
                .iter()
                .map(|inst| inst.assign(bindings))
                .collect(),
        }
    }

    /// Names of all symbols used by the circuit, sorted.
    pub fn parameters(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for inst in &self.instructions {
            for p in inst.gate.parameters() {
                p.collect_symbols(&mut set);
            }
        }
        set
    }

    /// Whether any gate parameter is still symbolic.
    pub fn is_parameterized(&self) -> bool {
        self.instructions
            .iter()
            .any(|inst| inst.gate.parameters().iter().any(|p| p.is_symbolic()))
    }

    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        let expected = instruction.gate.num_qubits();
        let got = instruction.qubits.len() as u32;
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: instruction.name().to_string(),
                expected,
                got,
            });
        }
        for (i, q) in instruction.qubits.iter().enumerate() {
            if !self.qubits.contains(q) {
                return Err(IrError::QubitNotFound {
                    qubit: *q,
                    gate_name: Some(instruction.name().to_string()),
                });
            }
            if instruction.qubits[..i].contains(q) {
                return Err(IrError::DuplicateQubit {
                    qubit: *q,
                    gate_name: Some(instruction.name().to_string()),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the qubits in the circuit, in order.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Circuit depth: the length of the longest chain of instructions that
    /// share a qubit.
    pub fn depth(&self) -> usize {
        let mut level: FxHashMap<QubitId, usize> = FxHashMap::default();
        let mut depth = 0;
        for inst in &self.instructions {
            let next = inst
                .qubits
                .iter()
                .map(|q| level.get(q).copied().unwrap_or(0))
                .max()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                level.insert(*q, next);
            }
            depth = depth.max(next);
        }
        depth
    }

    /// Instruction counts keyed by gate name.
    pub fn gate_counts(&self) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for inst in &self.instructions {
            *counts.entry(inst.name().to_string()).or_insert(0) += 1;
        }
        counts
    }
}
