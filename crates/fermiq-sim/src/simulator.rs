//! Circuit execution on a statevector.

use ndarray::Array2;
use num_complex::Complex64;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use fermiq_ir::{Circuit, QubitId};

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Largest register the simulator accepts.
pub const MAX_QUBITS: usize = 20;

/// Dense statevector simulator.
///
/// Qubits are laid out in the order of the circuit's register unless an
/// explicit order is set with [`Simulator::with_qubit_order`]. The first
/// qubit in the order is the most significant bit of the basis index.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    qubit_order: Option<Vec<QubitId>>,
}

impl Simulator {
    /// Create a simulator using each circuit's own qubit order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the register layout used for every simulated circuit.
    pub fn with_qubit_order(mut self, order: impl IntoIterator<Item = QubitId>) -> Self {
        self.qubit_order = Some(order.into_iter().collect());
        self
    }

    fn layout(&self, circuit: &Circuit) -> SimResult<(usize, FxHashMap<QubitId, usize>)> {
        let order = self.qubit_order.as_deref().unwrap_or(circuit.qubits());
        if order.len() > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: order.len(),
                max: MAX_QUBITS,
            });
        }
        let positions = order
            .iter()
            .enumerate()
            .map(|(pos, &q)| (q, pos))
            .collect();
        Ok((order.len(), positions))
    }

    /// Run `circuit` starting from the basis state `|initial⟩`.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name(), gates = circuit.len()))]
    pub fn simulate(&self, circuit: &Circuit, initial: usize) -> SimResult<Statevector> {
        let (num_qubits, positions) = self.layout(circuit)?;
        let mut state = Statevector::basis(num_qubits, initial)?;
        self.run(circuit, &positions, &mut state)?;
        debug!(num_qubits, "simulation finished");
        Ok(state)
    }

    /// Run `circuit` on an arbitrary starting state.
    ///
    /// The state must be as wide as the register.
    pub fn evolve(&self, circuit: &Circuit, mut state: Statevector) -> SimResult<Statevector> {
        let (num_qubits, positions) = self.layout(circuit)?;
        if state.num_qubits() != num_qubits {
            return Err(SimError::StateSizeMismatch {
                state: state.num_qubits(),
                register: num_qubits,
            });
        }
        self.run(circuit, &positions, &mut state)?;
        Ok(state)
    }

    /// The full unitary of `circuit`, column `k` being the image of `|k⟩`.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    pub fn unitary(&self, circuit: &Circuit) -> SimResult<Array2<Complex64>> {
        let (num_qubits, positions) = self.layout(circuit)?;
        let dim = 1 << num_qubits;
        let mut unitary = Array2::zeros((dim, dim));
        for col in 0..dim {
            let mut state = Statevector::basis(num_qubits, col)?;
            self.run(circuit, &positions, &mut state)?;
            for (row, amp) in state.amplitudes().iter().enumerate() {
                unitary[[row, col]] = *amp;
            }
        }
        debug!(dim, "unitary assembled");
        Ok(unitary)
    }

    fn run(
        &self,
        circuit: &Circuit,
        positions: &FxHashMap<QubitId, usize>,
        state: &mut Statevector,
    ) -> SimResult<()> {
        for instruction in circuit.instructions() {
            let operands = instruction
                .qubits
                .iter()
                .map(|q| positions.get(q).copied().ok_or(SimError::UnknownQubit(*q)))
                .collect::<SimResult<Vec<_>>>()?;
            state.apply_gate(&instruction.gate, &operands)?;
        }
        Ok(())
    }
}
