//! Variational ansatz templates for fermiq.
//!
//! A variational ansatz is a circuit with named symbolic parameters that an
//! outer optimizer tunes. Implement [`VariationalAnsatz`] for a concrete
//! family and wrap it in [`Ansatz`] to obtain the parameter set, the
//! symbolic circuit and bound circuits for given parameter vectors.
//!
//! ```rust
//! use fermiq_ir::QubitId;
//! use fermiq_variational::{Ansatz, GivensLayerAnsatz};
//!
//! let ansatz = Ansatz::new(GivensLayerAnsatz::new(QubitId::range(4), 2)).unwrap();
//! let start = ansatz.default_initial_params();
//! let bound = ansatz.resolved_circuit(&start).unwrap();
//! assert!(!bound.is_parameterized());
//! ```

#![warn(missing_docs)]

pub mod ansatz;
pub mod error;
pub mod givens_layer;
pub mod params;

pub use ansatz::{Ansatz, VariationalAnsatz};
pub use error::{VariationalError, VariationalResult};
pub use givens_layer::GivensLayerAnsatz;
pub use params::{ParamResolver, ParameterSet};
