//! Diagram geometry knobs.

use serde::{Deserialize, Serialize};

/// Geometry and stroke settings for a circuit diagram.
///
/// `scale` is the grid pitch in abstract units; the fractional knobs
/// (`control_radius`, `not_radius`, `swap_delta`, `label_buffer`) are
/// expressed relative to the pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    /// Grid pitch: distance between adjacent wires and gate columns.
    pub scale: f64,
    /// Label and gate-glyph font size, in points.
    pub fontsize: f64,
    /// Stroke width for wires and connectors.
    pub linewidth: f64,
    /// Radius of a filled control dot, as a fraction of the pitch.
    pub control_radius: f64,
    /// Radius of a CNOT target circle, as a fraction of the pitch.
    pub not_radius: f64,
    /// Half-extent of a swap cross, as a fraction of the pitch.
    pub swap_delta: f64,
    /// Gap between a wire's label and its leftmost point, as a fraction
    /// of the pitch.
    pub label_buffer: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            scale: 4.0,
            fontsize: 20.0,
            linewidth: 1.0,
            control_radius: 0.05,
            not_radius: 0.15,
            swap_delta: 0.05,
            label_buffer: 0.5,
        }
    }
}

#[cfg(feature = "render")]
impl PlotStyle {
    /// Pixels per grid unit when rasterizing coordinates.
    pub(crate) const PX_PER_UNIT: f64 = 15.0;

    /// Distance in pixels between adjacent wires and columns.
    pub(crate) fn pitch_px(&self) -> f64 {
        self.scale * Self::PX_PER_UNIT
    }

    pub(crate) fn control_radius_px(&self) -> f64 {
        self.control_radius * self.pitch_px()
    }

    pub(crate) fn not_radius_px(&self) -> f64 {
        self.not_radius * self.pitch_px()
    }

    pub(crate) fn swap_delta_px(&self) -> f64 {
        self.swap_delta * self.pitch_px()
    }

    pub(crate) fn label_buffer_px(&self) -> f64 {
        self.label_buffer * self.pitch_px()
    }
}
