//! `skald render` - write a circuit diagram to an SVG file.

#[cfg(feature = "render")]
pub fn execute(
    expr: &str,
    nqubits: Option<u32>,
    output: &str,
    prefix: &str,
    no_labels: bool,
    scale: Option<f64>,
) -> anyhow::Result<()> {
    use skald_plot::{CircuitPlot, PlotStyle, wire_labels_with_prefix};
    use tracing::info;

    use crate::commands::common;

    let (parsed, nqubits) = common::parse_expr(expr, nqubits)?;

    let mut builder = CircuitPlot::builder(parsed, nqubits);
    if !no_labels {
        builder = builder.labels(wire_labels_with_prefix(nqubits, prefix));
    }
    if let Some(scale) = scale {
        anyhow::ensure!(scale > 0.0, "scale must be positive, got {scale}");
        builder = builder.style(PlotStyle {
            scale,
            ..PlotStyle::default()
        });
    }

    let plot = builder.build()?;
    plot.save(output)?;
    info!(output, "wrote figure");
    println!(
        "Wrote {output} ({} gates over {} wires)",
        plot.num_gates(),
        plot.num_qubits()
    );

    Ok(())
}

#[cfg(not(feature = "render"))]
pub fn execute(
    _expr: &str,
    _nqubits: Option<u32>,
    _output: &str,
    _prefix: &str,
    _no_labels: bool,
    _scale: Option<f64>,
) -> anyhow::Result<()> {
    anyhow::bail!("this skald build has no rendering backend (rebuild with --features render)")
}
