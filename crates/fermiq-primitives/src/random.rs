//! Random and reference transformation matrices.
//!
//! Randomness is drawn from a caller-supplied [`Rng`], so seeded generators
//! give reproducible matrices.

use ndarray::{Array2, s};
use num_complex::Complex64;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::f64::consts::PI;

/// Unitary discrete Fourier transform, `F[j, k] = e^{2πi jk/n} / √n`.
pub fn fourier(n: usize) -> Array2<Complex64> {
    Array2::from_shape_fn((n, n), |(j, k)| {
        Complex64::from_polar(
            1.0 / (n as f64).sqrt(),
            2.0 * PI * (j * k) as f64 / n as f64,
        )
    })
}

/// Haar-random `n×n` unitary: orthonormalized complex Gaussian columns.
pub fn random_unitary(n: usize, rng: &mut impl Rng) -> Array2<Complex64> {
    let mut m = Array2::from_shape_simple_fn((n, n), || {
        Complex64::new(StandardNormal.sample(&mut *rng), StandardNormal.sample(&mut *rng))
    });
    orthonormalize_columns(&mut m);
    m
}

/// Haar-random real orthogonal `n×n` matrix.
pub fn random_orthogonal(n: usize, rng: &mut impl Rng) -> Array2<f64> {
    let mut m = Array2::from_shape_simple_fn((n, n), || {
        Complex64::new(StandardNormal.sample(&mut *rng), 0.0)
    });
    orthonormalize_columns(&mut m);
    m.mapv(|x| x.re)
}

/// Random `n×2n` Bogoliubov transform.
///
/// Drawn as a real orthogonal rotation `O` of the Majorana operators
/// `a†_j + a_j` and `i(a†_j − a_j)`, mapped back to ladder operators by
/// `W = ½ Ω† O Ω` and truncated to the creation rows.
pub fn random_bogoliubov(n: usize, rng: &mut impl Rng) -> Array2<Complex64> {
    let o = random_orthogonal(2 * n, rng).mapv(|x| Complex64::new(x, 0.0));
    let one = Complex64::new(1.0, 0.0);
    let i = Complex64::new(0.0, 1.0);
    let mut omega = Array2::<Complex64>::zeros((2 * n, 2 * n));
    for j in 0..n {
        omega[[j, j]] = one;
        omega[[j, n + j]] = one;
        omega[[n + j, j]] = i;
        omega[[n + j, n + j]] = -i;
    }
    let omega_dag = omega.t().mapv(|x| x.conj());
    let full = omega_dag.dot(&o).dot(&omega).mapv(|x| x * 0.5);
    full.slice(s![..n, ..]).to_owned()
}

/// Modified Gram-Schmidt on the columns of `m`, in place.
fn orthonormalize_columns(m: &mut Array2<Complex64>) {
    for j in 0..m.ncols() {
        for k in 0..j {
            let prev = m.column(k).to_owned();
            let overlap: Complex64 = prev.iter().zip(m.column(j)).map(|(p, x)| p.conj() * x).sum();
            m.column_mut(j).zip_mut_with(&prev, |x, p| *x -= overlap * p);
        }
        let norm = m.column(j).iter().map(Complex64::norm_sqr).sum::<f64>().sqrt();
        m.column_mut(j).mapv_inplace(|x| x / norm);
    }
}
