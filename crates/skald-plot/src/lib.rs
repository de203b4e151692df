//! Circuit diagram plotting for skald.
//!
//! This crate turns [`skald_expr`] gate expressions into circuit diagrams:
//! wire labels, a column-per-gate grid layout, and (behind the `render`
//! feature) an SVG figure drawn with `plotters`.
//!
//! # Core Components
//!
//! - **Labels**: [`wire_labels`] / [`wire_labels_with_prefix`] generate the
//!   top-to-bottom label row for a wire count
//! - **Layout**: [`CircuitLayout`] assigns every gate a column and every
//!   qubit a wire row
//! - **Plot**: [`CircuitPlot`] bundles expression, wire count, labels and
//!   layout; with the `render` feature it also holds the drawn figure
//! - **Style**: [`PlotStyle`] geometry knobs
//!
//! # Example
//!
//! ```rust
//! use skald_expr::Gate;
//! use skald_plot::{CircuitPlot, wire_labels};
//!
//! let plot = CircuitPlot::builder(Gate::cnot(1, 0), 2)
//!     .labels(wire_labels(2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(plot.num_gates(), 2);
//! assert_eq!(plot.num_qubits(), 2);
//! assert_eq!(plot.labels(), ["q_1", "q_0"]);
//! ```
//!
//! # Rendering
//!
//! Rendering is optional: builds without the `render` feature lay out
//! diagrams and expose their properties but produce no figure, and
//! rendering-dependent tests are compiled out rather than failed. With the
//! feature enabled, construction draws the figure:
//!
//! ```rust,ignore
//! let plot = CircuitPlot::new(Gate::cnot(1, 0), 2)?;
//! plot.save("cnot.svg")?;
//! ```

pub mod error;
pub mod labels;
pub mod layout;
pub mod plot;
pub mod style;

#[cfg(feature = "render")]
mod render;

pub use error::{PlotError, PlotResult};
pub use labels::{DEFAULT_PREFIX, wire_labels, wire_labels_with_prefix};
pub use layout::{CircuitLayout, GateColumn, Glyph};
pub use plot::{CircuitPlot, CircuitPlotBuilder};
pub use style::PlotStyle;
