//! Property-based tests for gate-expression text conversion.
//!
//! Tests that expression → text → expression preserves structure.

use proptest::prelude::*;
use skald_expr::{Gate, GateExpr, OneQubitKind, parse};

const KINDS: [OneQubitKind; 8] = [
    OneQubitKind::H,
    OneQubitKind::X,
    OneQubitKind::Y,
    OneQubitKind::Z,
    OneQubitKind::S,
    OneQubitKind::Sdg,
    OneQubitKind::T,
    OneQubitKind::Tdg,
];

/// Generate a random gate over at most 5 wires.
fn arb_gate() -> impl Strategy<Value = Gate> {
    prop_oneof![
        (0usize..KINDS.len(), 0u32..5).prop_map(|(k, q)| Gate::one_qubit(KINDS[k], q)),
        (0u32..5, 0u32..5)
            .prop_filter("Control and target must differ", |(c, t)| c != t)
            .prop_map(|(c, t)| Gate::cnot(c, t)),
        (0u32..5, 0u32..5)
            .prop_filter("Swapped wires must differ", |(a, b)| a != b)
            .prop_map(|(a, b)| Gate::swap(a, b)),
        (0u32..5, 0usize..KINDS.len(), 0u32..5)
            .prop_filter("Control and target must differ", |(c, _, t)| c != t)
            .prop_map(|(c, k, t)| Gate::controlled([c], Gate::one_qubit(KINDS[k], t))),
        (0u32..5).prop_map(Gate::mz),
    ]
}

/// Generate a random expression of 1-10 factors.
fn arb_expr() -> impl Strategy<Value = GateExpr> {
    prop::collection::vec(arb_gate(), 1..=10).prop_map(|gates| {
        let mut iter = gates.into_iter();
        let first: GateExpr = iter.next().expect("at least one gate").into();
        iter.fold(first, |expr, gate| expr * gate)
    })
}

proptest! {
    /// Expression → text → expression preserves the expression.
    #[test]
    fn test_text_roundtrip_preserves_expression(expr in arb_expr()) {
        let reparsed = parse(&expr.to_string()).unwrap();
        prop_assert_eq!(&reparsed, &expr);
    }

    /// Structural properties survive the text form.
    #[test]
    fn test_text_roundtrip_preserves_structure(expr in arb_expr()) {
        let reparsed = parse(&expr.to_string()).unwrap();
        prop_assert_eq!(reparsed.factor_count(), expr.factor_count());
        prop_assert_eq!(reparsed.arg_count(), expr.arg_count());
        prop_assert_eq!(reparsed.min_qubits(), expr.min_qubits());
    }
}
