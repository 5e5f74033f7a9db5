//! Parameter expressions for parameterized circuits.
//!
//! Gate angles are either concrete numbers or expressions over named
//! symbols. Symbols are replaced by numbers through an explicit binding
//! step ([`ParameterExpression::assign`]); nothing is substituted
//! implicitly.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A symbolic or concrete gate parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A constant numeric value.
    Constant(f64),
    /// A named placeholder whose value is supplied later.
    Symbol(String),
    /// Negation.
    Neg(Box<ParameterExpression>),
    /// Addition.
    Add(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Multiplication.
    Mul(Box<ParameterExpression>, Box<ParameterExpression>),
}

impl ParameterExpression {
    /// Create a constant parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        ParameterExpression::Symbol(name.into())
    }

    /// Check if this expression contains any symbols.
    pub fn is_symbolic(&self) -> bool {
        match self {
            ParameterExpression::Constant(_) => false,
            ParameterExpression::Symbol(_) => true,
            ParameterExpression::Neg(e) => e.is_symbolic(),
            ParameterExpression::Add(a, b) | ParameterExpression::Mul(a, b) => {
                a.is_symbolic() || b.is_symbolic()
            }
        }
    }

    /// Evaluate to a number, or `None` while any symbol is unbound.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Symbol(_) => None,
            ParameterExpression::Neg(e) => e.as_f64().map(|v| -v),
            ParameterExpression::Add(a, b) => Some(a.as_f64()? + b.as_f64()?),
            ParameterExpression::Mul(a, b) => Some(a.as_f64()? * b.as_f64()?),
        }
    }

    /// All symbol names in this expression, sorted.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        self.collect_symbols(&mut set);
        set
    }

    pub(crate) fn collect_symbols(&self, set: &mut BTreeSet<String>) {
        match self {
            ParameterExpression::Constant(_) => {}
            ParameterExpression::Symbol(name) => {
                set.insert(name.clone());
            }
            ParameterExpression::Neg(e) => e.collect_symbols(set),
            ParameterExpression::Add(a, b) | ParameterExpression::Mul(a, b) => {
                a.collect_symbols(set);
                b.collect_symbols(set);
            }
        }
    }

    /// Replace every bound symbol by its value and fold constants.
    ///
    /// Symbols missing from `bindings` are left in place.
    pub fn assign(&self, bindings: &FxHashMap<String, f64>) -> Self {
        let assigned = match self {
            ParameterExpression::Symbol(name) => match bindings.get(name) {
                Some(v) => ParameterExpression::Constant(*v),
                None => self.clone(),
            },
            ParameterExpression::Constant(_) => self.clone(),
            ParameterExpression::Neg(e) => ParameterExpression::Neg(Box::new(e.assign(bindings))),
            ParameterExpression::Add(a, b) => ParameterExpression::Add(
                Box::new(a.assign(bindings)),
                Box::new(b.assign(bindings)),
            ),
            ParameterExpression::Mul(a, b) => ParameterExpression::Mul(
                Box::new(a.assign(bindings)),
                Box::new(b.assign(bindings)),
            ),
        };
        match assigned.as_f64() {
            Some(v) => ParameterExpression::Constant(v),
            None => assigned,
        }
    }

    /// The negated expression, folded when constant.
    ///
    /// Used when inverting rotation gates.
    pub fn negated(&self) -> Self {
        match self {
            ParameterExpression::Constant(v) => ParameterExpression::Constant(-v),
            ParameterExpression::Neg(e) => (**e).clone(),
            _ => ParameterExpression::Neg(Box::new(self.clone())),
        }
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Symbol(name) => write!(f, "{name}"),
            ParameterExpression::Neg(e) => write!(f, "-({e})"),
            ParameterExpression::Add(a, b) => write!(f, "({a} + {b})"),
            ParameterExpression::Mul(a, b) => write!(f, "({a} * {b})"),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl std::ops::Add for ParameterExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        ParameterExpression::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        ParameterExpression::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_constant() {
        let p = ParameterExpression::constant(1.5);
        assert!(!p.is_symbolic());
        assert_eq!(p.as_f64(), Some(1.5));
    }

    #[test]
    fn test_symbol() {
        let p = ParameterExpression::symbol("theta");
        assert!(p.is_symbolic());
        assert_eq!(p.as_f64(), None);
        assert!(p.symbols().contains("theta"));
    }

    #[test]
    fn test_assign_folds_to_constant() {
        let expr = ParameterExpression::symbol("theta") * ParameterExpression::constant(2.0);
        let mut bindings = FxHashMap::default();
        bindings.insert("theta".to_string(), PI / 4.0);

        let bound = expr.assign(&bindings);
        assert_eq!(bound, ParameterExpression::Constant(PI / 2.0));
    }

    #[test]
    fn test_assign_keeps_unbound_symbols() {
        let expr = ParameterExpression::symbol("a") + ParameterExpression::symbol("b");
        let mut bindings = FxHashMap::default();
        bindings.insert("a".to_string(), 1.0);

        let partial = expr.assign(&bindings);
        assert!(partial.is_symbolic());
        assert_eq!(partial.symbols().into_iter().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_negated() {
        assert_eq!(
            ParameterExpression::constant(0.3).negated(),
            ParameterExpression::Constant(-0.3)
        );
        let theta = ParameterExpression::symbol("theta");
        assert_eq!(theta.negated().negated(), theta);
        assert_eq!(format!("{}", -theta), "-(theta)");
    }
}
