//! Numerical comparison helpers.

use num_complex::Complex64;

/// True if `a` equals `b` times some unit-modulus scalar, entry-wise within
/// `atol`.
///
/// The phase is taken from the largest entry of `b`. Slices of different
/// length never compare equal.
pub fn allclose_up_to_global_phase(a: &[Complex64], b: &[Complex64], atol: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let Some((pivot, largest)) = b
        .iter()
        .enumerate()
        .max_by(|x, y| x.1.norm_sqr().total_cmp(&y.1.norm_sqr()))
    else {
        return true;
    };
    if largest.norm() <= atol {
        return a.iter().all(|x| x.norm() <= atol);
    }
    let ratio = a[pivot] / largest;
    if ratio.norm() == 0.0 {
        return false;
    }
    let phase = ratio / ratio.norm();
    a.iter()
        .zip(b)
        .all(|(x, y)| (x - phase * y).norm() <= atol)
}

/// Entry-wise comparison without a phase allowance.
pub fn allclose(a: &[Complex64], b: &[Complex64], atol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).norm() <= atol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_phase_is_ignored() {
        let b = vec![c(0.6, 0.0), c(0.0, 0.8)];
        let phase = Complex64::from_polar(1.0, 2.1);
        let a: Vec<_> = b.iter().map(|x| x * phase).collect();
        assert!(allclose_up_to_global_phase(&a, &b, 1e-12));
        assert!(!allclose(&a, &b, 1e-12));
    }

    #[test]
    fn test_relative_phase_is_not_ignored() {
        let a = vec![c(0.6, 0.0), c(0.8, 0.0)];
        let b = vec![c(0.6, 0.0), c(-0.8, 0.0)];
        assert!(!allclose_up_to_global_phase(&a, &b, 1e-8));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!allclose_up_to_global_phase(&[c(1.0, 0.0)], &[], 1e-8));
    }

    #[test]
    fn test_zero_vectors() {
        let z = vec![c(0.0, 0.0); 3];
        assert!(allclose_up_to_global_phase(&z, &z, 1e-8));
        assert!(!allclose_up_to_global_phase(&[c(1.0, 0.0)], &[c(0.0, 0.0)], 1e-8));
    }
}
