//! Transformation matrices used by the demos.

use fermiq_primitives::random::{fourier, random_bogoliubov, random_unitary};
use ndarray::Array2;
use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Which transformation to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatrixKind {
    /// Discrete Fourier transform of the modes.
    Fourier,
    /// Random particle-conserving transform.
    RandomUnitary,
    /// Random general transform with pairing terms.
    RandomBogoliubov,
}

impl MatrixKind {
    /// Build the `n`-mode matrix, drawing randomness from `seed`.
    pub fn build(self, n: usize, seed: u64) -> Array2<Complex64> {
        let mut rng = StdRng::seed_from_u64(seed);
        match self {
            MatrixKind::Fourier => fourier(n),
            MatrixKind::RandomUnitary => random_unitary(n, &mut rng),
            MatrixKind::RandomBogoliubov => random_bogoliubov(n, &mut rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_unitary(m: &Array2<Complex64>) -> bool {
        let product = m.dot(&m.t().mapv(|x| x.conj()));
        let eye = Array2::<Complex64>::eye(m.nrows());
        product.iter().zip(eye.iter()).all(|(a, b)| (a - b).norm() < 1e-10)
    }

    #[test]
    fn test_every_kind_has_orthonormal_rows() {
        for kind in [MatrixKind::Fourier, MatrixKind::RandomUnitary] {
            let w = kind.build(5, 1);
            assert_eq!(w.dim(), (5, 5));
            assert!(is_unitary(&w));
        }
    }

    #[test]
    fn test_bogoliubov_rows_are_orthonormal() {
        let w = MatrixKind::RandomBogoliubov.build(4, 9);
        assert_eq!(w.dim(), (4, 8));
        assert!(is_unitary(&w));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = MatrixKind::RandomUnitary.build(3, 42);
        let b = MatrixKind::RandomUnitary.build(3, 42);
        assert_eq!(a, b);
    }
}
