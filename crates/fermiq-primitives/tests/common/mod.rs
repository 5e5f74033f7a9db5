//! Shared helpers for the Bogoliubov integration tests: random transforms,
//! dense Jordan-Wigner operators and quadratic Hamiltonians.

#![allow(dead_code)]

use fermiq_ir::{Circuit, Instruction, QubitId};
use fermiq_sim::Simulator;
use ndarray::{Array1, Array2, s};
use num_complex::Complex64;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use fermiq_primitives::random::{fourier, random_bogoliubov, random_unitary};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn dagger(m: &Array2<Complex64>) -> Array2<Complex64> {
    m.t().mapv(|x| x.conj())
}

/// Inverse transform: `W†` for `n×n`, `[W1†, W2ᵀ]` for `n×2n`.
pub fn adjoint_transform(w: &Array2<Complex64>) -> Array2<Complex64> {
    let n = w.nrows();
    if w.ncols() == n {
        return dagger(w);
    }
    let w1 = w.slice(s![.., ..n]).to_owned();
    let w2 = w.slice(s![.., n..]).to_owned();
    let mut out = Array2::zeros((n, 2 * n));
    out.slice_mut(s![.., ..n]).assign(&dagger(&w1));
    out.slice_mut(s![.., n..]).assign(&w2.t());
    out
}

/// Dense Jordan-Wigner creation operators `a†_0 .. a†_{n-1}`, big-endian.
pub fn creation_operators(n: usize) -> Vec<Array2<Complex64>> {
    let dim = 1 << n;
    (0..n)
        .map(|mode| {
            let mask = 1 << (n - 1 - mode);
            let mut op = Array2::zeros((dim, dim));
            for x in 0..dim {
                if x & mask != 0 {
                    continue;
                }
                // Occupied modes before `mode` sit in the bits above `mask`.
                let before = (x >> (n - mode)).count_ones();
                let sign = if before % 2 == 0 { 1.0 } else { -1.0 };
                op[[x | mask, x]] = Complex64::new(sign, 0.0);
            }
            op
        })
        .collect()
}

/// `b†_j = Σ_k W1[j,k] a†_k + Σ_k W2[j,k] a_k` as dense matrices.
pub fn transformed_creation_operators(
    w: &Array2<Complex64>,
    creation: &[Array2<Complex64>],
) -> Vec<Array2<Complex64>> {
    let n = w.nrows();
    let dim = creation.first().map_or(1, |a| a.nrows());
    (0..n)
        .map(|j| {
            let mut b = Array2::<Complex64>::zeros((dim, dim));
            for k in 0..n {
                b = b + &creation[k].mapv(|x| x * w[[j, k]]);
                if w.ncols() == 2 * n {
                    b = b + &dagger(&creation[k]).mapv(|x| x * w[[j, n + k]]);
                }
            }
            b
        })
        .collect()
}

/// `H = Σ_j ε_j b†_j b_j + constant`.
pub fn quadratic_hamiltonian(
    w: &Array2<Complex64>,
    energies: &[f64],
    constant: f64,
) -> Array2<Complex64> {
    let n = w.nrows();
    let creation = creation_operators(n);
    let b_dag = transformed_creation_operators(w, &creation);
    let dim = 1 << n;
    let mut h = Array2::<Complex64>::eye(dim).mapv(|x| x * constant);
    for (b, &eps) in b_dag.iter().zip(energies) {
        h = h + b.dot(&dagger(b)).mapv(|x| x * eps);
    }
    h
}

pub fn random_energies(n: usize, rng: &mut impl Rng) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-2.0..2.0)).collect()
}

/// Big-endian basis index of an occupation list.
pub fn basis_index(n: usize, occupied: &[usize]) -> usize {
    occupied.iter().map(|m| 1usize << (n - 1 - m)).sum()
}

pub fn circuit_of(n: usize, ops: impl IntoIterator<Item = Instruction>) -> Circuit {
    let mut circuit = Circuit::with_size("test", n as u32);
    circuit.extend(ops).unwrap();
    circuit
}

pub fn unitary_of(circuit: &Circuit) -> Array2<Complex64> {
    Simulator::new().unitary(circuit).unwrap()
}

pub fn final_state(circuit: &Circuit, initial: usize) -> Array1<Complex64> {
    let state = Simulator::new().simulate(circuit, initial).unwrap();
    Array1::from(state.into_amplitudes())
}

pub fn assert_allclose_up_to_global_phase(a: &Array2<Complex64>, b: &Array2<Complex64>, atol: f64) {
    assert_eq!(a.dim(), b.dim());
    let a: Vec<Complex64> = a.iter().copied().collect();
    let b: Vec<Complex64> = b.iter().copied().collect();
    assert!(
        fermiq_sim::allclose_up_to_global_phase(&a, &b, atol),
        "matrices differ by more than a global phase"
    );
}

pub fn assert_allclose(a: &Array2<Complex64>, b: &Array2<Complex64>, atol: f64) {
    assert_eq!(a.dim(), b.dim());
    for ((idx, x), y) in a.indexed_iter().zip(b.iter()) {
        assert!((x - y).norm() <= atol, "entry {idx:?}: {x} != {y}");
    }
}

pub fn line(n: usize) -> Vec<QubitId> {
    QubitId::range(n as u32)
}
