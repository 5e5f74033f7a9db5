//! Named symbolic parameters and their numeric bindings.

use fermiq_ir::{Circuit, ParameterExpression};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{VariationalError, VariationalResult};

/// Ordered map from parameter name to its symbol.
///
/// Built once from an ansatz's declared names; the order is the declaration
/// order and is what positional value vectors refer to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterSet {
    names: Vec<String>,
    symbols: FxHashMap<String, ParameterExpression>,
}

impl ParameterSet {
    /// Declare `names` in order. Repeated names are rejected.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> VariationalResult<Self> {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if set.symbols.contains_key(&name) {
                return Err(VariationalError::DuplicateParameter(name));
            }
            set.symbols
                .insert(name.clone(), ParameterExpression::symbol(name.clone()));
            set.names.push(name);
        }
        Ok(set)
    }

    /// The symbol for `name`.
    pub fn get(&self, name: &str) -> Option<&ParameterExpression> {
        self.symbols.get(name)
    }

    /// The symbol for `name`, or a fresh one if it was never declared.
    ///
    /// Circuits built from an undeclared name keep an unbound symbol after
    /// resolution, which simulation reports as an error.
    pub fn symbol(&self, name: &str) -> ParameterExpression {
        self.get(name)
            .cloned()
            .unwrap_or_else(|| ParameterExpression::symbol(name))
    }

    /// Parameter names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `(name, symbol)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterExpression)> {
        self.names
            .iter()
            .map(|name| (name.as_str(), &self.symbols[name]))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set has no parameters.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Explicit binding of parameter names to numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParamResolver {
    values: FxHashMap<String, f64>,
}

impl ParamResolver {
    /// An empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind names to values pairwise.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Bind `values` positionally to `names`; the lengths must agree.
    pub fn zip(names: &[String], values: &[f64]) -> VariationalResult<Self> {
        if names.len() != values.len() {
            return Err(VariationalError::ParameterCountMismatch {
                expected: names.len(),
                got: values.len(),
            });
        }
        Ok(Self::from_pairs(
            names.iter().cloned().zip(values.iter().copied()),
        ))
    }

    /// Add or replace one binding.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// The value bound to `name`.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Substitute bound names in `expr`; unbound symbols are kept.
    pub fn resolve(&self, expr: &ParameterExpression) -> ParameterExpression {
        expr.assign(&self.values)
    }

    /// A copy of `circuit` with every bound name substituted.
    pub fn resolve_circuit(&self, circuit: &Circuit) -> Circuit {
        circuit.assign_parameters(&self.values)
    }

    /// The raw bindings.
    pub fn bindings(&self) -> &FxHashMap<String, f64> {
        &self.values
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_set_keeps_order() {
        let set = ParameterSet::new(["b", "a", "c"]).unwrap();
        assert_eq!(set.names(), &["b", "a", "c"]);
        let names: Vec<&str> = set.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(set.get("a"), Some(&ParameterExpression::symbol("a")));
        assert!(set.get("z").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ParameterSet::new(["x", "y", "x"]).unwrap_err();
        assert!(matches!(err, VariationalError::DuplicateParameter(name) if name == "x"));
    }

    #[test]
    fn test_zip_length_mismatch() {
        let names = vec!["a".to_string(), "b".to_string()];
        assert!(matches!(
            ParamResolver::zip(&names, &[1.0]),
            Err(VariationalError::ParameterCountMismatch { expected: 2, got: 1 })
        ));
        let resolver = ParamResolver::zip(&names, &[1.0, 2.0]).unwrap();
        assert_eq!(resolver.value_of("b"), Some(2.0));
    }

    #[test]
    fn test_resolve_expression() {
        let resolver = ParamResolver::new().with("t", 0.5);
        let expr = ParameterExpression::symbol("t") * ParameterExpression::constant(2.0)
            + ParameterExpression::symbol("u");
        let resolved = resolver.resolve(&expr);
        assert!(resolved.is_symbolic());
        let fully = resolver.clone().with("u", 1.0).resolve(&expr);
        assert_eq!(fully.as_f64(), Some(2.0));
    }

    #[test]
    fn test_resolver_serde() {
        let resolver = ParamResolver::from_pairs([("theta", 0.25)]);
        let json = serde_json::to_string(&resolver).unwrap();
        let back: ParamResolver = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resolver);
    }
}
