//! `skald info` - print diagram properties of a gate expression.

use serde::Serialize;
use tracing::debug;

use crate::commands::common;

/// Diagram properties, as reported by `skald info`.
#[derive(Serialize)]
struct InfoReport {
    num_gates: usize,
    num_qubits: u32,
    labels: Vec<String>,
    columns: usize,
    rows: usize,
}

pub fn execute(
    expr: &str,
    nqubits: Option<u32>,
    prefix: &str,
    no_labels: bool,
    format: &str,
) -> anyhow::Result<()> {
    let (parsed, nqubits) = common::parse_expr(expr, nqubits)?;
    debug!(%parsed, nqubits, "inspecting expression");

    let plot = common::build_plot(parsed, nqubits, prefix, no_labels)?;

    let report = InfoReport {
        num_gates: plot.num_gates(),
        num_qubits: plot.num_qubits(),
        labels: plot.labels().to_vec(),
        columns: plot.layout().num_columns(),
        rows: plot.layout().num_rows(),
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "table" => {
            println!("gates:   {}", report.num_gates);
            println!("qubits:  {}", report.num_qubits);
            println!("columns: {}", report.columns);
            if report.labels.is_empty() {
                println!("labels:  (none)");
            } else {
                println!("labels:  {}", report.labels.join(", "));
            }
        }
        other => anyhow::bail!("Unknown format: '{other}' (expected 'table' or 'json')"),
    }

    Ok(())
}
