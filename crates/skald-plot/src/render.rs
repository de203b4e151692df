//! SVG rendering of circuit layouts.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use skald_expr::QubitId;

use crate::error::{PlotError, PlotResult};
use crate::layout::{CircuitLayout, Glyph};
use crate::style::PlotStyle;

/// Vertical offset between the two strands of a measured (classical) wire.
const MEASURED_WIRE_GAP: f64 = 2.0;

/// Draw a layout into an SVG string.
pub(crate) fn render_svg(
    layout: &CircuitLayout,
    labels: &[String],
    style: &PlotStyle,
) -> PlotResult<String> {
    let pitch = style.pitch_px();
    let margin = 0.75 * pitch;
    let gutter = if labels.is_empty() {
        0.0
    } else {
        style.label_buffer_px() + 2.2 * style.fontsize
    };

    let ncols = layout.num_columns().max(1);
    let nrows = layout.num_rows().max(1);

    let x0 = margin + gutter;
    let y0 = margin;
    let x_col = |c: usize| x0 + c as f64 * pitch;
    let y_row = |r: usize| y0 + r as f64 * pitch;

    let x_wire_left = x0 - 0.6 * pitch;
    let x_wire_right = x_col(ncols - 1) + 0.6 * pitch;

    let width = (x_wire_right + margin).ceil() as u32;
    let height = (y_row(nrows - 1) + margin).ceil() as u32;

    let stroke = BLACK.stroke_width(style.linewidth.round().max(1.0) as u32);
    let font = ("sans-serif", style.fontsize).into_font().color(&BLACK);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(backend_err)?;

        // Wires, doubled after a measurement.
        for r in 0..layout.num_rows() {
            let qubit = QubitId(layout.nqubits() - 1 - r as u32);
            let y = y_row(r);
            match layout.measured_after(qubit) {
                Some(col) => {
                    let x_split = x_col(col);
                    draw_line(&root, (x_wire_left, y), (x_split, y), stroke)?;
                    let gap = MEASURED_WIRE_GAP;
                    draw_line(&root, (x_split, y - gap), (x_wire_right, y - gap), stroke)?;
                    draw_line(&root, (x_split, y + gap), (x_wire_right, y + gap), stroke)?;
                }
                None => draw_line(&root, (x_wire_left, y), (x_wire_right, y), stroke)?,
            }

            if let Some(label) = labels.get(r) {
                let pos = Pos::new(HPos::Right, VPos::Center);
                root.draw(&Text::new(
                    label.clone(),
                    (px(x_wire_left - style.label_buffer_px()), px(y)),
                    font.pos(pos),
                ))
                .map_err(backend_err)?;
            }
        }

        // Gate columns, in time order.
        for column in layout.columns() {
            let x = x_col(column.index);
            for glyph in &column.glyphs {
                draw_glyph(&root, glyph, x, &y_row, style, stroke)?;
            }
        }

        root.present().map_err(backend_err)?;
    }

    debug!(width, height, "rendered circuit figure");
    Ok(svg)
}

type Area<'a> = DrawingArea<SVGBackend<'a>, plotters::coord::Shift>;

fn draw_glyph(
    root: &Area<'_>,
    glyph: &Glyph,
    x: f64,
    y_row: &impl Fn(usize) -> f64,
    style: &PlotStyle,
    stroke: ShapeStyle,
) -> PlotResult<()> {
    match glyph {
        Glyph::VLine { top, bottom } => {
            draw_line(root, (x, y_row(*top)), (x, y_row(*bottom)), stroke)?;
        }
        Glyph::Control { row } => {
            let r = style.control_radius_px();
            root.draw(&Circle::new((px(x), px(y_row(*row))), px(r), BLACK.filled()))
                .map_err(backend_err)?;
        }
        Glyph::NotTarget { row } => {
            let y = y_row(*row);
            let r = style.not_radius_px();
            root.draw(&Circle::new((px(x), px(y)), px(r), stroke))
                .map_err(backend_err)?;
            draw_line(root, (x, y - r), (x, y + r), stroke)?;
            draw_line(root, (x - r, y), (x + r, y), stroke)?;
        }
        Glyph::SwapCross { row } => {
            let y = y_row(*row);
            let d = style.swap_delta_px();
            draw_line(root, (x - d, y - d), (x + d, y + d), stroke)?;
            draw_line(root, (x - d, y + d), (x + d, y - d), stroke)?;
        }
        Glyph::Box { row, text } => {
            draw_box(root, x, y_row(*row), text, style, stroke)?;
        }
        Glyph::MeasureBox { row } => {
            draw_box(root, x, y_row(*row), "M", style, stroke)?;
        }
    }
    Ok(())
}

/// A white box with a black border and a centered glyph letter.
fn draw_box(
    root: &Area<'_>,
    x: f64,
    y: f64,
    text: &str,
    style: &PlotStyle,
    stroke: ShapeStyle,
) -> PlotResult<()> {
    let half = 0.25 * style.pitch_px();
    let corners = [(px(x - half), px(y - half)), (px(x + half), px(y + half))];
    root.draw(&Rectangle::new(corners, WHITE.filled()))
        .map_err(backend_err)?;
    root.draw(&Rectangle::new(corners, stroke))
        .map_err(backend_err)?;

    let pos = Pos::new(HPos::Center, VPos::Center);
    let font = ("sans-serif", style.fontsize).into_font().color(&BLACK);
    root.draw(&Text::new(text.to_string(), (px(x), px(y)), font.pos(pos)))
        .map_err(backend_err)?;
    Ok(())
}

fn draw_line(
    root: &Area<'_>,
    from: (f64, f64),
    to: (f64, f64),
    stroke: ShapeStyle,
) -> PlotResult<()> {
    root.draw(&PathElement::new(
        vec![(px(from.0), px(from.1)), (px(to.0), px(to.1))],
        stroke,
    ))
    .map_err(backend_err)
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn backend_err<E: std::error::Error>(e: E) -> PlotError {
    PlotError::Backend(e.to_string())
}
