//! Computational-basis initial states.

use std::collections::BTreeSet;

use tracing::warn;

/// A computational-basis state of the fermionic modes.
///
/// `Basis` packs the occupations big-endian: mode `i` of `n` is occupied
/// when bit `n - 1 - i` is set. `Occupied` lists the occupied modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialState {
    /// Occupations as an integer.
    Basis(u64),
    /// Indices of the occupied modes.
    Occupied(Vec<usize>),
}

impl InitialState {
    /// Occupied modes in ascending order for a register of `n` modes.
    ///
    /// Occupations outside the register are dropped with a warning.
    pub fn occupied_modes(&self, n: usize) -> Vec<usize> {
        match self {
            InitialState::Basis(bits) => {
                let bits = *bits;
                let width = n.min(64);
                if width < 64 && bits >> width != 0 {
                    warn!(bits, n, "initial state sets bits beyond the register; ignoring them");
                }
                (0..n)
                    .filter(|&mode| {
                        let bit = n - 1 - mode;
                        bit < 64 && (bits >> bit) & 1 == 1
                    })
                    .collect()
            }
            InitialState::Occupied(modes) => {
                let set: BTreeSet<usize> = modes.iter().copied().collect();
                let (inside, outside): (Vec<usize>, Vec<usize>) =
                    set.into_iter().partition(|&mode| mode < n);
                if !outside.is_empty() {
                    warn!(?outside, n, "initial state names modes beyond the register; ignoring them");
                }
                inside
            }
        }
    }
}

impl From<u64> for InitialState {
    fn from(bits: u64) -> Self {
        InitialState::Basis(bits)
    }
}

impl From<Vec<usize>> for InitialState {
    fn from(modes: Vec<usize>) -> Self {
        InitialState::Occupied(modes)
    }
}

impl From<&[usize]> for InitialState {
    fn from(modes: &[usize]) -> Self {
        InitialState::Occupied(modes.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for InitialState {
    fn from(modes: [usize; N]) -> Self {
        InitialState::Occupied(modes.to_vec())
    }
}
