//! Qubit identifiers.
//!
//! A [`QubitId`] is an opaque, ordered label. Synthesis routines interpret
//! the *position* of a qubit in the sequence they are handed as its
//! fermionic mode index; the numeric id itself carries no meaning.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// Contiguous line of qubits `q0, q1, ..., q{n-1}`.
    ///
    /// ```rust
    /// use fermiq_ir::QubitId;
    ///
    /// let qubits = QubitId::range(3);
    /// assert_eq!(qubits, vec![QubitId(0), QubitId(1), QubitId(2)]);
    /// ```
    pub fn range(n: u32) -> Vec<QubitId> {
        (0..n).map(QubitId).collect()
    }

    /// The raw index of this qubit.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId(0)), "q0");
        assert_eq!(format!("{}", QubitId(12)), "q12");
    }

    #[test]
    fn test_range_is_ordered() {
        let qubits = QubitId::range(4);
        assert_eq!(qubits.len(), 4);
        assert!(qubits.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(qubits[3].index(), 3);
    }

    #[test]
    fn test_range_empty() {
        assert!(QubitId::range(0).is_empty());
    }
}
