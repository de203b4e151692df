//! Symbolic gate values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// One-qubit gate kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OneQubitKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
}

impl OneQubitKind {
    /// The name of this gate kind, as written in gate expressions.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            OneQubitKind::H => "H",
            OneQubitKind::X => "X",
            OneQubitKind::Y => "Y",
            OneQubitKind::Z => "Z",
            OneQubitKind::S => "S",
            OneQubitKind::Sdg => "Sdg",
            OneQubitKind::T => "T",
            OneQubitKind::Tdg => "Tdg",
        }
    }

    /// The letter drawn inside this gate's diagram box.
    pub fn glyph(&self) -> &'static str {
        match self {
            OneQubitKind::Sdg => "S†",
            OneQubitKind::Tdg => "T†",
            other => other.name(),
        }
    }
}

/// A symbolic quantum gate applied to one or more wires.
///
/// Gates carry no matrix semantics; they are structural values that a
/// diagram is laid out from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// A one-qubit gate on a target wire.
    OneQubit {
        /// Which gate.
        kind: OneQubitKind,
        /// The wire it acts on.
        target: QubitId,
    },
    /// Controlled-NOT with explicit control and target wires.
    CNot {
        /// The control wire.
        control: QubitId,
        /// The target wire.
        target: QubitId,
    },
    /// Exchange of two wires.
    Swap {
        /// First wire.
        a: QubitId,
        /// Second wire.
        b: QubitId,
    },
    /// A gate applied conditionally on one or more control wires.
    Controlled {
        /// The control wires.
        controls: Vec<QubitId>,
        /// The gate being controlled.
        inner: Box<Gate>,
    },
    /// Z-basis measurement marker.
    Measure {
        /// The wire being measured.
        target: QubitId,
    },
}

impl Gate {
    /// Create a one-qubit gate.
    pub fn one_qubit(kind: OneQubitKind, target: u32) -> Self {
        Gate::OneQubit {
            kind,
            target: QubitId(target),
        }
    }

    /// Hadamard gate.
    pub fn h(target: u32) -> Self {
        Gate::one_qubit(OneQubitKind::H, target)
    }

    /// Pauli-X gate.
    pub fn x(target: u32) -> Self {
        Gate::one_qubit(OneQubitKind::X, target)
    }

    /// Pauli-Y gate.
    pub fn y(target: u32) -> Self {
        Gate::one_qubit(OneQubitKind::Y, target)
    }

    /// Pauli-Z gate.
    pub fn z(target: u32) -> Self {
        Gate::one_qubit(OneQubitKind::Z, target)
    }

    /// S gate.
    pub fn s(target: u32) -> Self {
        Gate::one_qubit(OneQubitKind::S, target)
    }

    /// S-dagger gate.
    pub fn sdg(target: u32) -> Self {
        Gate::one_qubit(OneQubitKind::Sdg, target)
    }

    /// T gate.
    pub fn t(target: u32) -> Self {
        Gate::one_qubit(OneQubitKind::T, target)
    }

    /// T-dagger gate.
    pub fn tdg(target: u32) -> Self {
        Gate::one_qubit(OneQubitKind::Tdg, target)
    }

    /// Controlled-NOT gate.
    pub fn cnot(control: u32, target: u32) -> Self {
        Gate::CNot {
            control: QubitId(control),
            target: QubitId(target),
        }
    }

    /// SWAP gate.
    pub fn swap(a: u32, b: u32) -> Self {
        Gate::Swap {
            a: QubitId(a),
            b: QubitId(b),
        }
    }

    /// Wrap a gate with control wires.
    pub fn controlled(controls: impl IntoIterator<Item = u32>, inner: Gate) -> Self {
        Gate::Controlled {
            controls: controls.into_iter().map(QubitId).collect(),
            inner: Box::new(inner),
        }
    }

    /// Z-basis measurement marker.
    pub fn mz(target: u32) -> Self {
        Gate::Measure {
            target: QubitId(target),
        }
    }

    /// The name of this gate, as written in gate expressions.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::OneQubit { kind, .. } => kind.name(),
            Gate::CNot { .. } => "CNOT",
            Gate::Swap { .. } => "SWAP",
            Gate::Controlled { .. } => "CGate",
            Gate::Measure { .. } => "Mz",
        }
    }

    /// Wires this gate acts on (excluding controls).
    pub fn targets(&self) -> Vec<QubitId> {
        match self {
            Gate::OneQubit { target, .. } | Gate::Measure { target } => vec![*target],
            Gate::CNot { target, .. } => vec![*target],
            Gate::Swap { a, b } => vec![*a, *b],
            Gate::Controlled { inner, .. } => inner.targets(),
        }
    }

    /// Control wires, outermost first.
    pub fn controls(&self) -> Vec<QubitId> {
        match self {
            Gate::CNot { control, .. } => vec![*control],
            Gate::Controlled { controls, inner } => {
                let mut all = controls.clone();
                all.extend(inner.controls());
                all
            }
            _ => vec![],
        }
    }

    /// Every wire this gate touches, controls before targets.
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::OneQubit { target, .. } | Gate::Measure { target } => vec![*target],
            Gate::CNot { control, target } => vec![*control, *target],
            Gate::Swap { a, b } => vec![*a, *b],
            Gate::Controlled { controls, inner } => {
                let mut all = controls.clone();
                all.extend(inner.qubits());
                all
            }
        }
    }

    /// Number of top-level argument slots this gate occupies.
    ///
    /// Plain gates count their qubit arguments; a controlled wrapper
    /// counts its control group as one slot and the wrapped gate as the
    /// other.
    pub fn arg_count(&self) -> usize {
        match self {
            Gate::OneQubit { .. } | Gate::Measure { .. } => 1,
            Gate::CNot { .. } | Gate::Swap { .. } | Gate::Controlled { .. } => 2,
        }
    }

    /// Smallest wire count able to hold this gate.
    pub fn min_qubits(&self) -> u32 {
        self.qubits()
            .iter()
            .map(|q| q.index() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Check if this gate has control wires.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Gate::CNot { .. } | Gate::Controlled { .. })
    }

    /// Check if this gate is a measurement marker.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure { .. })
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::OneQubit { kind, target } => write!(f, "{}({})", kind.name(), target.index()),
            Gate::CNot { control, target } => {
                write!(f, "CNOT({},{})", control.index(), target.index())
            }
            Gate::Swap { a, b } => write!(f, "SWAP({},{})", a.index(), b.index()),
            Gate::Controlled { controls, inner } => {
                write!(f, "CGate((")?;
                for c in controls {
                    write!(f, "{},", c.index())?;
                }
                write!(f, "),{inner})")
            }
            Gate::Measure { target } => write!(f, "Mz({})", target.index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_qubit_properties() {
        let h = Gate::h(1);
        assert_eq!(h.name(), "H");
        assert_eq!(h.arg_count(), 1);
        assert_eq!(h.min_qubits(), 2);
        assert!(!h.is_controlled());
    }

    #[test]
    fn test_cnot_properties() {
        let cnot = Gate::cnot(1, 0);
        assert_eq!(cnot.name(), "CNOT");
        assert_eq!(cnot.arg_count(), 2);
        assert_eq!(cnot.controls(), vec![QubitId(1)]);
        assert_eq!(cnot.targets(), vec![QubitId(0)]);
        assert_eq!(cnot.min_qubits(), 2);
        assert!(cnot.is_controlled());
    }

    #[test]
    fn test_controlled_wrapper() {
        let cs = Gate::controlled([0], Gate::s(1));
        assert_eq!(cs.name(), "CGate");
        assert_eq!(cs.arg_count(), 2);
        assert_eq!(cs.controls(), vec![QubitId(0)]);
        assert_eq!(cs.targets(), vec![QubitId(1)]);
        assert_eq!(cs.qubits(), vec![QubitId(0), QubitId(1)]);
    }

    #[test]
    fn test_nested_controls() {
        let ccx = Gate::controlled([2], Gate::cnot(1, 0));
        assert_eq!(ccx.controls(), vec![QubitId(2), QubitId(1)]);
        assert_eq!(ccx.targets(), vec![QubitId(0)]);
        assert_eq!(ccx.min_qubits(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Gate::cnot(1, 0).to_string(), "CNOT(1,0)");
        assert_eq!(Gate::swap(0, 2).to_string(), "SWAP(0,2)");
        assert_eq!(Gate::h(2).to_string(), "H(2)");
        assert_eq!(
            Gate::controlled([0], Gate::s(1)).to_string(),
            "CGate((0,),S(1))"
        );
        assert_eq!(Gate::mz(0).to_string(), "Mz(0)");
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(OneQubitKind::H.glyph(), "H");
        assert_eq!(OneQubitKind::Sdg.glyph(), "S†");
        assert_eq!(OneQubitKind::Tdg.glyph(), "T†");
    }
}
