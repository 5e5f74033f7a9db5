//! Circuits implementing Bogoliubov transformations.
//!
//! Under the Jordan-Wigner encoding (qubit `i` set ⇔ mode `i` occupied), the
//! synthesized circuit `C` maps every original creation operator onto the
//! new one:
//!
//!   C a†_j C† = b†_j,   b†_j = Σ_k W[j, k] a†_k + Σ_k W[j, n + k] a_k
//!
//! The gate set is two-mode Givens rotations on adjacent qubits, single-mode
//! phase gates, and an X on the last qubit acting as the particle-hole
//! transformation of the last mode.
//!
//! When the initial computational-basis state is known, a shorter circuit is
//! produced that only agrees with the general one on that state, up to a
//! global phase.

use fermiq_ir::{Circuit, Gate, Instruction, QubitId};
use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use crate::decomposition::{Decomposition, Rotation, decompose, decompose_rows};
use crate::error::{PrimitiveError, PrimitiveResult};
use crate::initial_state::InitialState;
use crate::options::SynthesisOptions;

/// Synthesizer for the circuit of a Bogoliubov transformation.
///
/// ```rust
/// use fermiq_ir::QubitId;
/// use fermiq_primitives::BogoliubovTransform;
/// use ndarray::Array2;
/// use num_complex::Complex64;
///
/// let identity = Array2::<Complex64>::eye(3);
/// let ops = BogoliubovTransform::new(QubitId::range(3), identity)
///     .operations()
///     .unwrap();
/// assert!(ops.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BogoliubovTransform {
    qubits: Vec<QubitId>,
    matrix: Array2<Complex64>,
    initial_state: Option<InitialState>,
    options: SynthesisOptions,
}

impl BogoliubovTransform {
    /// Prepare the transformation `matrix` on `qubits`, qubit `i` holding
    /// mode `i`.
    pub fn new(qubits: impl IntoIterator<Item = QubitId>, matrix: Array2<Complex64>) -> Self {
        Self {
            qubits: qubits.into_iter().collect(),
            matrix,
            initial_state: None,
            options: SynthesisOptions::default(),
        }
    }

    /// Specialize the circuit to a computational-basis input.
    #[must_use]
    pub fn with_initial_state(mut self, state: impl Into<InitialState>) -> Self {
        self.initial_state = Some(state.into());
        self
    }

    /// Override the synthesis options.
    #[must_use]
    pub fn with_options(mut self, options: SynthesisOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of modes.
    pub fn num_modes(&self) -> usize {
        self.qubits.len()
    }

    /// True when the transformation mixes creation and annihilation operators.
    pub fn is_pairing(&self) -> bool {
        self.matrix.ncols() == 2 * self.qubits.len() && !self.qubits.is_empty()
    }

    fn validate(&self) -> PrimitiveResult<()> {
        let n = self.qubits.len();
        let (rows, cols) = self.matrix.dim();
        if rows != n || (cols != n && cols != 2 * n) {
            return Err(PrimitiveError::Shape { n, rows, cols });
        }
        Ok(())
    }

    /// The gate sequence, in application order.
    pub fn operations(&self) -> PrimitiveResult<Vec<Instruction>> {
        self.validate()?;
        let n = self.num_modes();
        debug!(
            modes = n,
            cols = self.matrix.ncols(),
            specialized = self.initial_state.is_some(),
            "synthesizing Bogoliubov transform"
        );

        let ops = match (&self.initial_state, self.is_pairing()) {
            (None, _) => self.general(true),
            (Some(_), true) => self.general(false),
            (Some(state), false) => self.conserving_from(&state.occupied_modes(n)),
        };

        debug!(gates = ops.len(), "Bogoliubov transform synthesized");
        Ok(ops)
    }

    /// Append the gate sequence to an existing circuit.
    pub fn append_to(&self, circuit: &mut Circuit) -> PrimitiveResult<()> {
        circuit.extend(self.operations()?)?;
        Ok(())
    }

    /// A fresh circuit over the transform's qubits holding the gate sequence.
    pub fn circuit(&self) -> PrimitiveResult<Circuit> {
        let mut circuit = Circuit::from_qubits("bogoliubov_transform", self.qubits.iter().copied());
        self.append_to(&mut circuit)?;
        Ok(circuit)
    }

    /// Phase layer (optional) followed by the peeled rotations in reverse.
    fn general(&self, with_phases: bool) -> Vec<Instruction> {
        let decomposition = decompose(self.matrix.view(), self.options.tolerance);
        debug!(rotations = decomposition.rotations.len(), "matrix reduced");

        let mut ops = Vec::new();
        if with_phases {
            ops.extend(self.phase_layer(&decomposition));
        }
        ops.extend(self.rotation_gates(&decomposition));
        ops
    }

    /// Move the occupied modes to the front, then spread them out.
    fn conserving_from(&self, occupied: &[usize]) -> Vec<Instruction> {
        let eta = occupied.len();
        let mut ops: Vec<Instruction> = self
            .qubits
            .iter()
            .enumerate()
            .filter(|(mode, _)| (*mode < eta) != occupied.contains(mode))
            .map(|(_, &q)| Instruction::single_qubit_gate(Gate::X, q))
            .collect();

        let decomposition = decompose_rows(self.matrix.view(), occupied, self.options.tolerance);
        debug!(
            occupied = eta,
            rotations = decomposition.rotations.len(),
            "occupied rows reduced"
        );
        ops.extend(self.rotation_gates(&decomposition));
        ops
    }

    fn phase_layer<'a>(
        &'a self,
        decomposition: &'a Decomposition,
    ) -> impl Iterator<Item = Instruction> + 'a {
        let tolerance = self.options.tolerance;
        self.qubits
            .iter()
            .zip(&decomposition.phases)
            .filter(move |(_, phase)| phase.abs() > tolerance)
            .map(|(&q, &phase)| Instruction::single_qubit_gate(Gate::P(phase.into()), q))
    }

    fn rotation_gates<'a>(
        &'a self,
        decomposition: &'a Decomposition,
    ) -> impl Iterator<Item = Instruction> + 'a {
        decomposition
            .rotations
            .iter()
            .rev()
            .map(|rotation| match *rotation {
                Rotation::Givens { mode, theta, phi } => Instruction::two_qubit_gate(
                    Gate::Givens(theta.into(), phi.into()),
                    self.qubits[mode],
                    self.qubits[mode + 1],
                ),
                Rotation::ParticleHole => {
                    Instruction::single_qubit_gate(Gate::X, self.qubits[self.qubits.len() - 1])
                }
            })
    }
}

/// Gate sequence implementing the Bogoliubov transformation `matrix` on
/// `qubits`.
///
/// `matrix` must be `n×n` (particle-conserving) or `n×2n` (general) for
/// `n = qubits.len()`. With `initial_state` set, the sequence is only
/// guaranteed on that computational-basis state, up to a global phase.
pub fn bogoliubov_transform(
    qubits: &[QubitId],
    matrix: &Array2<Complex64>,
    initial_state: Option<InitialState>,
) -> PrimitiveResult<Vec<Instruction>> {
    let mut transform = BogoliubovTransform::new(qubits.iter().copied(), matrix.clone());
    if let Some(state) = initial_state {
        transform = transform.with_initial_state(state);
    }
    transform.operations()
}
