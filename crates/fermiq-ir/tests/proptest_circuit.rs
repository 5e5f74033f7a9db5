//! Property-based tests for circuit inversion, binding and serialization.

use fermiq_ir::{Circuit, ParameterExpression, QubitId};
use proptest::prelude::*;
use rustc_hash::FxHashMap;

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    X(u32),
    H(u32),
    Rz(u32, f64),
    P(u32, f64),
    CX(u32, u32),
    Givens(u32, f64, f64),
    SymbolicGivens(u32, usize),
}

impl GateOp {
    fn apply(self, circuit: &mut Circuit) {
        match self {
            GateOp::X(q) => {
                let _ = circuit.x(QubitId(q));
            }
            GateOp::H(q) => {
                let _ = circuit.h(QubitId(q));
            }
            GateOp::Rz(q, theta) => {
                let _ = circuit.rz(theta, QubitId(q));
            }
            GateOp::P(q, theta) => {
                let _ = circuit.p(theta, QubitId(q));
            }
            GateOp::CX(q1, q2) => {
                let _ = circuit.cx(QubitId(q1), QubitId(q2));
            }
            GateOp::Givens(q, theta, phi) => {
                let _ = circuit.givens(theta, phi, QubitId(q), QubitId(q + 1));
            }
            GateOp::SymbolicGivens(q, k) => {
                let theta = ParameterExpression::symbol(format!("t{k}"));
                let _ = circuit.givens(theta, 0.0, QubitId(q), QubitId(q + 1));
            }
        }
    }
}

fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    prop_oneof![
        (0..num_qubits).prop_map(GateOp::X),
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits, -3.0_f64..3.0).prop_map(|(q, t)| GateOp::Rz(q, t)),
        (0..num_qubits, -3.0_f64..3.0).prop_map(|(q, t)| GateOp::P(q, t)),
        (0..num_qubits, 0..num_qubits).prop_map(|(a, b)| GateOp::CX(a, b)),
        (0..num_qubits - 1, -3.0_f64..3.0, -3.0_f64..3.0)
            .prop_map(|(q, t, p)| GateOp::Givens(q, t, p)),
        (0..num_qubits - 1, 0_usize..3).prop_map(|(q, k)| GateOp::SymbolicGivens(q, k)),
    ]
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (2_u32..=5).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 0..=12).prop_map(move |ops| {
            let mut circuit = Circuit::with_size("random", num_qubits);
            for op in ops {
                op.apply(&mut circuit);
            }
            circuit
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn inverse_is_an_involution(circuit in arb_circuit()) {
        let twice = circuit.inverse().inverse();
        prop_assert_eq!(twice.instructions(), circuit.instructions());
        prop_assert_eq!(twice.qubits(), circuit.qubits());
    }

    #[test]
    fn inverse_preserves_size(circuit in arb_circuit()) {
        let inverse = circuit.inverse();
        prop_assert_eq!(inverse.len(), circuit.len());
        prop_assert_eq!(inverse.depth(), circuit.depth());
        prop_assert_eq!(inverse.parameters(), circuit.parameters());
    }

    #[test]
    fn binding_every_symbol_removes_parameters(circuit in arb_circuit(), value in -1.0_f64..1.0) {
        let bindings: FxHashMap<String, f64> = circuit
            .parameters()
            .into_iter()
            .map(|name| (name, value))
            .collect();
        let bound = circuit.assign_parameters(&bindings);
        prop_assert!(!bound.is_parameterized());
        prop_assert_eq!(bound.len(), circuit.len());
    }

    #[test]
    fn json_roundtrip(circuit in arb_circuit()) {
        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.qubits(), circuit.qubits());
        prop_assert_eq!(back.parameters(), circuit.parameters());
        for (a, b) in back.instructions().iter().zip(circuit.instructions()) {
            prop_assert_eq!(a.name(), b.name());
            prop_assert_eq!(&a.qubits, &b.qubits);
        }
    }
}
