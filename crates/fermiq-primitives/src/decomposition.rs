//! Reduction of a transformation matrix to diagonal phases by mode rotations.
//!
//! A row of the matrix is the expansion of one new creation operator
//!
//!   b†_j = Σ_k W[j, k] a†_k + Σ_k W[j, n + k] a_k
//!
//! in the original modes. A gate that maps the original operators by the
//! mode matrix `R` is peeled off by right-multiplying `W` with `R⁻¹`. Rows
//! are processed top to bottom; once row `i` is reduced to a single phase in
//! column `i`, orthonormality of the rows forces every later row to vanish in
//! columns `< i` of both blocks, so later rotations never disturb it.
//!
//! Rotations act on adjacent modes `(k, k + 1)`. For a rotation `Givens(θ, φ)`
//! with mode matrix
//!
//!   m = [[cos θ, e^{iφ} sin θ], [−e^{−iφ} sin θ, cos θ]]
//!
//! the creation block is multiplied by `m†` and the annihilation block by
//! `mᵀ`.

use ndarray::{Array2, ArrayView2, s};
use num_complex::Complex64;
use std::f64::consts::PI;

/// One peeled-off mode transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Rotation {
    /// `Givens(theta, phi)` on modes `(mode, mode + 1)`.
    Givens { mode: usize, theta: f64, phi: f64 },
    /// Exchange of `a†` and `a` on the last mode.
    ParticleHole,
}

/// Result of reducing a matrix: `W = [D | 0] · R_last · … · R_first`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Decomposition {
    /// Peeled rotations in the order they were removed.
    pub rotations: Vec<Rotation>,
    /// Phase angle of each diagonal entry of `D`, one per processed row.
    pub phases: Vec<f64>,
}

/// Working copy of the matrix being reduced.
struct Reducer {
    w: Array2<Complex64>,
    n: usize,
    pairing: bool,
    tolerance: f64,
    rotations: Vec<Rotation>,
}

impl Reducer {
    fn new(w: Array2<Complex64>, n: usize, tolerance: f64) -> Self {
        let pairing = w.ncols() == 2 * n && n > 0;
        Self {
            w,
            n,
            pairing,
            tolerance,
            rotations: Vec::new(),
        }
    }

    fn givens(&mut self, k: usize, theta: f64, phi: f64) {
        let (s, c) = theta.sin_cos();
        let e = Complex64::from_polar(1.0, phi);
        let n = self.n;
        for mut row in self.w.rows_mut() {
            let (x0, x1) = (row[k], row[k + 1]);
            row[k] = c * x0 + e.conj() * s * x1;
            row[k + 1] = -e * s * x0 + c * x1;
            if self.pairing {
                let (y0, y1) = (row[n + k], row[n + k + 1]);
                row[n + k] = c * y0 + e * s * y1;
                row[n + k + 1] = -e.conj() * s * y0 + c * y1;
            }
        }
        self.rotations.push(Rotation::Givens {
            mode: k,
            theta,
            phi,
        });
    }

    fn particle_hole(&mut self) {
        let last = self.n - 1;
        for mut row in self.w.rows_mut() {
            row.swap(last, self.n + last);
        }
        self.rotations.push(Rotation::ParticleHole);
    }

    /// Move the annihilation part of `row` into the last mode.
    fn push_annihilation_right(&mut self, row: usize, from: usize) {
        for k in from..self.n - 1 {
            let y0 = self.w[[row, self.n + k]];
            let y1 = self.w[[row, self.n + k + 1]];
            if y0.norm() > self.tolerance {
                let theta = y0.norm().atan2(y1.norm());
                let phi = PI + y0.arg() - y1.arg();
                self.givens(k, theta, phi);
            }
        }
    }

    /// Concentrate the creation part of `row` into column `target`.
    fn concentrate_creation(&mut self, row: usize, target: usize) {
        for k in (target..self.n - 1).rev() {
            let x0 = self.w[[row, k]];
            let x1 = self.w[[row, k + 1]];
            if x1.norm() > self.tolerance {
                let theta = x1.norm().atan2(x0.norm());
                let phi = x1.arg() - x0.arg();
                self.givens(k, theta, phi);
            }
        }
    }

    fn reduce(mut self) -> Decomposition {
        let rows = self.w.nrows();
        for i in 0..rows {
            if self.pairing {
                self.push_annihilation_right(i, i);
                let last = self.n - 1;
                if self.w[[i, self.n + last]].norm() > self.w[[i, last]].norm() {
                    self.particle_hole();
                }
            }
            self.concentrate_creation(i, i);
        }
        let phases = (0..rows).map(|i| self.w[[i, i]].arg()).collect();
        Decomposition {
            rotations: self.rotations,
            phases,
        }
    }
}

/// Reduce a full `n×n` or `n×2n` matrix.
pub(crate) fn decompose(matrix: ArrayView2<'_, Complex64>, tolerance: f64) -> Decomposition {
    let n = matrix.nrows();
    if n == 0 {
        return Decomposition::default();
    }
    Reducer::new(matrix.to_owned(), n, tolerance).reduce()
}

/// Reduce only the rows `modes` of a particle-conserving `n×n` matrix, so
/// that the reduced row `r` lands in column `r`.
pub(crate) fn decompose_rows(
    matrix: ArrayView2<'_, Complex64>,
    modes: &[usize],
    tolerance: f64,
) -> Decomposition {
    let n = matrix.ncols();
    if modes.is_empty() {
        return Decomposition::default();
    }
    let mut rows = Array2::zeros((modes.len(), n));
    for (r, &mode) in modes.iter().enumerate() {
        rows.slice_mut(s![r, ..]).assign(&matrix.slice(s![mode, ..]));
    }
    Reducer::new(rows, n, tolerance).reduce()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    /// Rebuild `W` from a decomposition by applying the rotations in reverse.
    fn rebuild(d: &Decomposition, n: usize, cols: usize) -> Array2<Complex64> {
        let mut w = Array2::zeros((d.phases.len(), cols));
        for (i, phase) in d.phases.iter().enumerate() {
            w[[i, i]] = Complex64::from_polar(1.0, *phase);
        }
        let mut reducer = Reducer::new(w, n, 0.0);
        for rotation in d.rotations.iter().rev() {
            match *rotation {
                Rotation::Givens { mode, theta, phi } => reducer.givens(mode, -theta, phi),
                Rotation::ParticleHole => reducer.particle_hole(),
            }
        }
        reducer.w
    }

    fn assert_close(a: &Array2<Complex64>, b: &Array2<Complex64>) {
        assert_eq!(a.dim(), b.dim());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).norm() < 1e-10, "{x} != {y}");
        }
    }

    #[test]
    fn test_identity_needs_no_rotations() {
        let eye = Array2::<Complex64>::eye(3);
        let d = decompose(eye.view(), 1e-10);
        assert!(d.rotations.is_empty());
        assert!(d.phases.iter().all(|p| p.abs() < 1e-12));
    }

    #[test]
    fn test_diagonal_phases() {
        let w = array![[c(0.0, 1.0), c(0.0, 0.0)], [c(0.0, 0.0), c(-1.0, 0.0)]];
        let d = decompose(w.view(), 1e-10);
        assert!(d.rotations.is_empty());
        assert!((d.phases[0] - PI / 2.0).abs() < 1e-12);
        assert!((d.phases[1].abs() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_beam_splitter_round_trip() {
        let h = 1.0 / 2.0_f64.sqrt();
        let w = array![[c(h, 0.0), c(0.0, h)], [c(0.0, h), c(h, 0.0)]];
        let d = decompose(w.view(), 1e-10);
        assert_eq!(d.rotations.len(), 1);
        assert_close(&rebuild(&d, 2, 2), &w);
    }

    #[test]
    fn test_particle_hole_swap() {
        // b†_0 = a_0 on a single mode.
        let w = array![[c(0.0, 0.0), c(1.0, 0.0)]];
        let d = decompose(w.view(), 1e-10);
        assert_eq!(d.rotations, vec![Rotation::ParticleHole]);
        assert_close(&rebuild(&d, 1, 2), &w);
    }

    #[test]
    fn test_pairing_round_trip() {
        // Two-mode squeezing-like transform: b†_0 = c a†_0 + s a_1,
        // b†_1 = c a†_1 - s a_0.
        let (sn, cs) = 0.3_f64.sin_cos();
        let w = array![
            [c(cs, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(sn, 0.0)],
            [c(0.0, 0.0), c(cs, 0.0), c(-sn, 0.0), c(0.0, 0.0)],
        ];
        let d = decompose(w.view(), 1e-10);
        assert_close(&rebuild(&d, 2, 4), &w);
    }

    #[test]
    fn test_selected_rows_land_on_leading_columns() {
        let h = 1.0 / 2.0_f64.sqrt();
        let w = array![
            [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
            [c(0.0, 0.0), c(h, 0.0), c(h, 0.0)],
            [c(0.0, 0.0), c(-h, 0.0), c(h, 0.0)],
        ];
        let d = decompose_rows(w.view(), &[1], 1e-10);
        assert_eq!(d.phases.len(), 1);
        // Row 1 is spread over columns 0..3 through two rotations at most.
        assert!(d.rotations.len() <= 2);
        let rebuilt = rebuild(&d, 3, 3);
        assert_close(&rebuilt, &w.slice(s![1..2, ..]).to_owned());
    }

    #[test]
    fn test_empty_inputs() {
        let w = Array2::<Complex64>::zeros((0, 0));
        let d = decompose(w.view(), 1e-10);
        assert!(d.rotations.is_empty() && d.phases.is_empty());

        let eye = Array2::<Complex64>::eye(2);
        let d = decompose_rows(eye.view(), &[], 1e-10);
        assert!(d.rotations.is_empty() && d.phases.is_empty());
    }
}
