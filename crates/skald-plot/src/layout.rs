//! Grid layout for circuit diagrams.
//!
//! One column per drawn gate in time order, one row per qubit wire.
//! Row 0 is the top wire and carries the highest qubit index, so a label
//! row generated in descending order lines up top to bottom.

use serde::{Deserialize, Serialize};
use tracing::debug;

use skald_expr::{Gate, GateExpr, QubitId};

use crate::error::{PlotError, PlotResult};

/// A drawable mark within a gate column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Glyph {
    /// A boxed gate letter on one wire.
    Box {
        /// Display row.
        row: usize,
        /// The letter drawn inside the box.
        text: String,
    },
    /// A filled control dot.
    Control {
        /// Display row.
        row: usize,
    },
    /// The circled-plus target of a CNOT.
    NotTarget {
        /// Display row.
        row: usize,
    },
    /// One arm of a swap cross.
    SwapCross {
        /// Display row.
        row: usize,
    },
    /// A boxed measurement marker.
    MeasureBox {
        /// Display row.
        row: usize,
    },
    /// A vertical connector between the outermost wires of a gate.
    VLine {
        /// Topmost display row.
        top: usize,
        /// Bottommost display row.
        bottom: usize,
    },
}

/// One gate column: the glyphs drawn at a single x position.
///
/// Connectors come first so boxes and dots draw over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateColumn {
    /// Column index, in time order.
    pub index: usize,
    /// Glyphs to draw at this column.
    pub glyphs: Vec<Glyph>,
}

/// Computed diagram grid for a gate expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitLayout {
    nqubits: u32,
    columns: Vec<GateColumn>,
    /// Per qubit: column index after which the wire is measured.
    measured_after: Vec<Option<usize>>,
}

impl CircuitLayout {
    /// Lay out an expression over `nqubits` wires.
    ///
    /// Fails if any gate addresses a wire at or beyond `nqubits`.
    pub fn new(expr: &GateExpr, nqubits: u32) -> PlotResult<Self> {
        let mut columns = Vec::with_capacity(expr.factor_count());
        let mut measured_after = vec![None; nqubits as usize];

        for (index, gate) in expr.gates().enumerate() {
            check_span(gate, nqubits)?;

            let mut glyphs = Vec::new();
            push_connector(gate, nqubits, &mut glyphs);
            push_glyphs(gate, nqubits, &mut glyphs);

            if let Gate::Measure { target } = gate {
                let slot = &mut measured_after[target.index() as usize];
                if slot.is_none() {
                    *slot = Some(index);
                }
            }

            columns.push(GateColumn { index, glyphs });
        }

        debug!(
            columns = columns.len(),
            wires = nqubits,
            "laid out circuit grid"
        );

        Ok(Self {
            nqubits,
            columns,
            measured_after,
        })
    }

    /// The wire count.
    pub fn nqubits(&self) -> u32 {
        self.nqubits
    }

    /// Number of wire rows.
    pub fn num_rows(&self) -> usize {
        self.nqubits as usize
    }

    /// Number of gate columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// The gate columns, in time order.
    pub fn columns(&self) -> &[GateColumn] {
        &self.columns
    }

    /// Display row of a qubit wire (row 0 on top).
    pub fn row(&self, qubit: QubitId) -> usize {
        row(self.nqubits, qubit)
    }

    /// Column index after which a wire is measured, if it is.
    pub fn measured_after(&self, qubit: QubitId) -> Option<usize> {
        self.measured_after
            .get(qubit.index() as usize)
            .copied()
            .flatten()
    }
}

fn row(nqubits: u32, qubit: QubitId) -> usize {
    (nqubits - 1 - qubit.index()) as usize
}

fn check_span(gate: &Gate, nqubits: u32) -> PlotResult<()> {
    for q in gate.qubits() {
        if q.index() >= nqubits {
            return Err(PlotError::QubitOutOfRange {
                qubit: q.index(),
                nqubits,
                gate: gate.name().to_string(),
            });
        }
    }
    Ok(())
}

/// Add the vertical connector for a multi-wire gate.
fn push_connector(gate: &Gate, nqubits: u32, glyphs: &mut Vec<Glyph>) {
    let rows: Vec<usize> = gate.qubits().iter().map(|q| row(nqubits, *q)).collect();
    if let (Some(&top), Some(&bottom)) = (rows.iter().min(), rows.iter().max()) {
        if top != bottom {
            glyphs.push(Glyph::VLine { top, bottom });
        }
    }
}

/// Add the per-wire marks for a gate.
fn push_glyphs(gate: &Gate, nqubits: u32, glyphs: &mut Vec<Glyph>) {
    match gate {
        Gate::OneQubit { kind, target } => glyphs.push(Glyph::Box {
            row: row(nqubits, *target),
            text: kind.glyph().to_string(),
        }),
        Gate::CNot { control, target } => {
            glyphs.push(Glyph::Control {
                row: row(nqubits, *control),
            });
            glyphs.push(Glyph::NotTarget {
                row: row(nqubits, *target),
            });
        }
        Gate::Swap { a, b } => {
            glyphs.push(Glyph::SwapCross {
                row: row(nqubits, *a),
            });
            glyphs.push(Glyph::SwapCross {
                row: row(nqubits, *b),
            });
        }
        Gate::Controlled { controls, inner } => {
            for c in controls {
                glyphs.push(Glyph::Control {
                    row: row(nqubits, *c),
                });
            }
            push_glyphs(inner, nqubits, glyphs);
        }
        Gate::Measure { target } => glyphs.push(Glyph::MeasureBox {
            row: row(nqubits, *target),
        }),
    }
}
