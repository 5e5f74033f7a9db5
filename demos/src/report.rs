//! Synthesis reports shared by the demo binaries.

use std::collections::BTreeMap;

use anyhow::Result;
use fermiq_ir::Circuit;
use fermiq_sim::Simulator;
use serde::Serialize;

/// Summary of a synthesized circuit, printable or serializable to JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisReport {
    pub modes: usize,
    pub matrix: String,
    pub occupied: Option<Vec<usize>>,
    pub gate_counts: BTreeMap<String, usize>,
    pub depth: usize,
    pub circuit: Circuit,
    /// Squared norm of the simulated output state, when simulated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_norm: Option<f64>,
}

impl SynthesisReport {
    pub fn new(matrix: impl Into<String>, occupied: Option<Vec<usize>>, circuit: Circuit) -> Self {
        let gate_counts = circuit.gate_counts().into_iter().collect();
        Self {
            modes: circuit.num_qubits(),
            matrix: matrix.into(),
            occupied,
            gate_counts,
            depth: circuit.depth(),
            circuit,
            output_norm: None,
        }
    }

    /// Simulate the circuit from `initial` and record the output norm.
    pub fn simulate_from(&mut self, initial: usize) -> Result<()> {
        let state = Simulator::new().simulate(&self.circuit, initial)?;
        self.output_norm = Some(state.norm_sqr());
        Ok(())
    }
}

/// Big-endian basis index of an occupation list.
pub fn basis_index(n: usize, occupied: &[usize]) -> usize {
    occupied
        .iter()
        .filter(|&&m| m < n)
        .fold(0, |acc, &m| acc | (1usize << (n - 1 - m)))
}
