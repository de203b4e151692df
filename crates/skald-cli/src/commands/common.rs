//! Shared helpers for CLI commands.

use anyhow::Context;

use skald_expr::GateExpr;
use skald_plot::{CircuitPlot, wire_labels_with_prefix};

/// Parse an expression and resolve the wire count.
///
/// When no count is given, the smallest count that fits the expression
/// is used.
pub(crate) fn parse_expr(expr: &str, nqubits: Option<u32>) -> anyhow::Result<(GateExpr, u32)> {
    let parsed = skald_expr::parse(expr)
        .with_context(|| format!("invalid gate expression '{expr}'"))?;
    let nqubits = nqubits.unwrap_or_else(|| parsed.min_qubits());
    Ok((parsed, nqubits))
}

/// Build a plot, generating wire labels unless suppressed.
pub(crate) fn build_plot(
    expr: GateExpr,
    nqubits: u32,
    prefix: &str,
    no_labels: bool,
) -> anyhow::Result<CircuitPlot> {
    let mut builder = CircuitPlot::builder(expr, nqubits);
    if !no_labels {
        builder = builder.labels(wire_labels_with_prefix(nqubits, prefix));
    }
    Ok(builder.build()?)
}
