//! Circuit plot construction.

use tracing::debug;

use skald_expr::GateExpr;

use crate::error::{PlotError, PlotResult};
use crate::layout::CircuitLayout;
use crate::style::PlotStyle;

/// A laid-out circuit diagram.
///
/// Constructed from a gate expression and a wire count; read-only
/// afterwards. With the `render` feature enabled, the SVG figure is drawn
/// as part of construction and available through [`CircuitPlot::svg`].
#[derive(Debug, Clone)]
pub struct CircuitPlot {
    expr: GateExpr,
    nqubits: u32,
    labels: Vec<String>,
    style: PlotStyle,
    layout: CircuitLayout,
    #[cfg(feature = "render")]
    svg: String,
}

impl CircuitPlot {
    /// Build a plot with no labels and the default style.
    pub fn new(expr: impl Into<GateExpr>, nqubits: u32) -> PlotResult<Self> {
        Self::builder(expr, nqubits).build()
    }

    /// Start a builder to attach labels or override the style.
    pub fn builder(expr: impl Into<GateExpr>, nqubits: u32) -> CircuitPlotBuilder {
        CircuitPlotBuilder {
            expr: expr.into(),
            nqubits,
            labels: None,
            style: PlotStyle::default(),
        }
    }

    /// Number of top-level argument slots of the plotted expression.
    ///
    /// A product counts its factors; a single gate counts its own
    /// argument slots, so a lone `CNOT(1,0)` reports 2.
    pub fn num_gates(&self) -> usize {
        self.expr.arg_count()
    }

    /// Number of wires, as given at construction.
    pub fn num_qubits(&self) -> u32 {
        self.nqubits
    }

    /// Wire labels, top to bottom; empty when none were supplied.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The plotted expression.
    pub fn expr(&self) -> &GateExpr {
        &self.expr
    }

    /// The computed grid.
    pub fn layout(&self) -> &CircuitLayout {
        &self.layout
    }

    /// The style the figure is drawn with.
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// The rendered SVG figure.
    #[cfg(feature = "render")]
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Write the rendered figure to `path`.
    #[cfg(feature = "render")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> PlotResult<()> {
        std::fs::write(path, &self.svg)?;
        Ok(())
    }
}

/// Builder for [`CircuitPlot`].
#[derive(Debug, Clone)]
pub struct CircuitPlotBuilder {
    expr: GateExpr,
    nqubits: u32,
    labels: Option<Vec<String>>,
    style: PlotStyle,
}

impl CircuitPlotBuilder {
    /// Attach wire labels, top to bottom.
    ///
    /// The label count must equal the wire count.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Override the diagram style.
    #[must_use]
    pub fn style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Validate, lay out, and (with the `render` feature) draw the figure.
    pub fn build(self) -> PlotResult<CircuitPlot> {
        let labels = self.labels.unwrap_or_default();
        if !labels.is_empty() && labels.len() != self.nqubits as usize {
            return Err(PlotError::LabelCountMismatch {
                expected: self.nqubits as usize,
                got: labels.len(),
            });
        }

        let layout = CircuitLayout::new(&self.expr, self.nqubits)?;

        debug!(
            gates = self.expr.factor_count(),
            wires = self.nqubits,
            labeled = !labels.is_empty(),
            "built circuit plot"
        );

        #[cfg(feature = "render")]
        let svg = crate::render::render_svg(&layout, &labels, &self.style)?;

        Ok(CircuitPlot {
            expr: self.expr,
            nqubits: self.nqubits,
            labels,
            style: self.style,
            layout,
            #[cfg(feature = "render")]
            svg,
        })
    }
}
