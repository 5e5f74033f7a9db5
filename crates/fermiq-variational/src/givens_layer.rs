//! Brick-wall network of parameterized Givens rotations.

use std::f64::consts::PI;

use fermiq_ir::{Circuit, QubitId};

use crate::ansatz::VariationalAnsatz;
use crate::error::VariationalResult;
use crate::params::ParameterSet;

/// Layers of `Givens(θ, 0)` on adjacent qubit pairs, alternating between
/// pairs starting at even and at odd positions.
///
/// Parameters are named `theta_{layer}_{pair}`. Every rotation conserves
/// particle number, so the ansatz explores a fixed-particle-number sector
/// of whatever state it is applied to.
///
/// ```text
/// q0 ─┤G├───────
/// q1 ─┤G├─┤G├───
/// q2 ─┤G├─┤G├───
/// q3 ─┤G├───────
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GivensLayerAnsatz {
    qubits: Vec<QubitId>,
    layers: usize,
}

impl GivensLayerAnsatz {
    /// Ansatz on `qubits` with `layers` brick layers.
    pub fn new(qubits: impl IntoIterator<Item = QubitId>, layers: usize) -> Self {
        Self {
            qubits: qubits.into_iter().collect(),
            layers,
        }
    }

    /// Number of brick layers.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Starting positions of the rotated pairs in `layer`.
    fn pair_starts(&self, layer: usize) -> impl Iterator<Item = usize> {
        let width = self.qubits.len();
        (layer % 2..width.saturating_sub(1)).step_by(2)
    }

    fn name(layer: usize, pair: usize) -> String {
        format!("theta_{layer}_{pair}")
    }
}

impl VariationalAnsatz for GivensLayerAnsatz {
    fn qubits(&self) -> Vec<QubitId> {
        self.qubits.clone()
    }

    fn param_names(&self) -> Vec<String> {
        (0..self.layers)
            .flat_map(|layer| {
                self.pair_starts(layer)
                    .enumerate()
                    .map(move |(pair, _)| Self::name(layer, pair))
            })
            .collect()
    }

    fn param_bounds(&self) -> Option<Vec<(f64, f64)>> {
        Some(vec![(-PI, PI); self.param_names().len()])
    }

    fn generate_circuit(&self, params: &ParameterSet) -> VariationalResult<Circuit> {
        let mut circuit = Circuit::from_qubits("givens_layers", self.qubits.iter().copied());
        for layer in 0..self.layers {
            for (pair, start) in self.pair_starts(layer).enumerate() {
                circuit.givens(
                    params.symbol(&Self::name(layer, pair)),
                    0.0,
                    self.qubits[start],
                    self.qubits[start + 1],
                )?;
            }
        }
        Ok(circuit)
    }
}
