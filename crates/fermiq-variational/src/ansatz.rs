//! The variational ansatz abstraction.
//!
//! An ansatz is a parameterized circuit whose parameters are named symbols.
//! A concrete ansatz implements [`VariationalAnsatz`]; wrapping it in
//! [`Ansatz`] builds the parameter set from the declared names and then
//! generates the circuit once, in that order.

use fermiq_ir::{Circuit, QubitId};
use tracing::debug;

use crate::error::{VariationalError, VariationalResult};
use crate::params::{ParamResolver, ParameterSet};

/// A family of parameterized circuits.
pub trait VariationalAnsatz {
    /// The qubits the circuit acts on.
    fn qubits(&self) -> Vec<QubitId>;

    /// Parameter names, in the order positional values refer to.
    fn param_names(&self) -> Vec<String>;

    /// Optional `(low, high)` bounds, one per parameter in name order.
    fn param_bounds(&self) -> Option<Vec<(f64, f64)>> {
        None
    }

    /// Build the circuit over [`Self::qubits`] using the symbols in `params`.
    fn generate_circuit(&self, params: &ParameterSet) -> VariationalResult<Circuit>;

    /// Suggested starting point for an optimizer.
    fn default_initial_params(&self) -> Vec<f64> {
        vec![0.0; self.param_names().len()]
    }

    /// Interpret a value vector as a binding; by default value `i` binds
    /// name `i`.
    fn param_resolver(&self, values: &[f64]) -> VariationalResult<ParamResolver> {
        ParamResolver::zip(&self.param_names(), values)
    }
}

/// An ansatz together with its parameter set and generated circuit.
#[derive(Debug, Clone)]
pub struct Ansatz<A> {
    variant: A,
    params: ParameterSet,
    circuit: Circuit,
}

impl<A: VariationalAnsatz> Ansatz<A> {
    /// Declare the parameters of `variant`, then generate its circuit.
    pub fn new(variant: A) -> VariationalResult<Self> {
        let params = ParameterSet::new(variant.param_names())?;
        let circuit = variant.generate_circuit(&params)?;
        debug!(
            params = params.len(),
            gates = circuit.len(),
            circuit = circuit.name(),
            "ansatz generated"
        );
        Ok(Self {
            variant,
            params,
            circuit,
        })
    }

    /// The named symbols.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The symbolic circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The wrapped ansatz.
    pub fn variant(&self) -> &A {
        &self.variant
    }

    /// Qubits the ansatz acts on.
    pub fn qubits(&self) -> Vec<QubitId> {
        self.variant.qubits()
    }

    /// Per-parameter `(low, high)` bounds, if the variant sets any.
    pub fn param_bounds(&self) -> Option<Vec<(f64, f64)>> {
        self.variant.param_bounds()
    }

    /// Starting point for an optimizer, one value per parameter.
    pub fn default_initial_params(&self) -> Vec<f64> {
        self.variant.default_initial_params()
    }

    /// Bind a value vector through the variant's resolver.
    pub fn param_resolver(&self, values: &[f64]) -> VariationalResult<ParamResolver> {
        if values.len() != self.params.len() {
            return Err(VariationalError::ParameterCountMismatch {
                expected: self.params.len(),
                got: values.len(),
            });
        }
        self.variant.param_resolver(values)
    }

    /// The circuit with `values` substituted for its symbols.
    pub fn resolved_circuit(&self, values: &[f64]) -> VariationalResult<Circuit> {
        let resolver = self.param_resolver(values)?;
        Ok(resolver.resolve_circuit(&self.circuit))
    }
}
