//! Figure rendering tests.
//!
//! Compiled only when the `render` feature is enabled; builds without a
//! rendering backend skip these entirely.

#![cfg(feature = "render")]

use skald_expr::Gate;
use skald_plot::{CircuitPlot, PlotStyle, wire_labels};

#[test]
fn test_construction_produces_figure() {
    let plot = CircuitPlot::builder(Gate::cnot(1, 0), 2)
        .labels(wire_labels(2))
        .build()
        .unwrap();

    let svg = plot.svg();
    assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
}

#[test]
fn test_figure_contains_labels() {
    let plot = CircuitPlot::builder(Gate::cnot(1, 0) * Gate::h(1), 2)
        .labels(wire_labels(2))
        .build()
        .unwrap();

    assert!(plot.svg().contains("q_1"));
    assert!(plot.svg().contains("q_0"));
}

#[test]
fn test_figure_contains_gate_letters() {
    let expr = Gate::swap(0, 2) * Gate::h(0) * Gate::controlled([0], Gate::s(1));
    let plot = CircuitPlot::new(expr, 3).unwrap();

    assert!(plot.svg().contains(">H<"));
    assert!(plot.svg().contains(">S<"));
}

#[test]
fn test_unlabeled_figure_has_no_label_text() {
    let plot = CircuitPlot::new(Gate::cnot(1, 0), 2).unwrap();
    assert!(!plot.svg().contains("q_1"));
}

#[test]
fn test_custom_style_changes_figure_size() {
    let small = CircuitPlot::new(Gate::h(0), 1).unwrap();

    let mut style = PlotStyle::default();
    style.scale *= 2.0;
    let large = CircuitPlot::builder(Gate::h(0), 1)
        .style(style)
        .build()
        .unwrap();

    assert_ne!(small.svg(), large.svg());
    assert!(large.svg().len() >= small.svg().len());
}

#[test]
fn test_save_writes_figure() {
    let plot = CircuitPlot::new(Gate::cnot(1, 0), 2).unwrap();

    let path = std::env::temp_dir().join(format!("skald-render-{}.svg", std::process::id()));
    plot.save(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, plot.svg());
    std::fs::remove_file(&path).unwrap();
}
