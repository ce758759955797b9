//! The horizontal legend row above the plot.

use svg::node::element::{Group, Text};

use crate::{diagram::LegendEntry, geometry::Point, text};

use super::nodes;

const FONT_FAMILY: &str = "Arial";
const FONT_SIZE: f32 = 12.0;
const TEXT_COLOR: &str = "#13343B";

const SWATCH_DIAMETER: f32 = 14.0;
const SWATCH_GAP: f32 = 6.0;
const ITEM_GAP: f32 = 20.0;

/// Vertical center of the legend row, inside the header band.
const LEGEND_CENTER_Y: f32 = 58.0;

/// Renders one swatch-plus-label item per legend entry, laid out as a single
/// row centered horizontally on the canvas.
pub fn render_legend(entries: &[LegendEntry], canvas_width: f32) -> Group {
    let label_widths: Vec<f32> = entries
        .iter()
        .map(|entry| text::measure_text(&entry.label, FONT_SIZE).width())
        .collect();

    let items_width: f32 = label_widths
        .iter()
        .map(|width| SWATCH_DIAMETER + SWATCH_GAP + width)
        .sum();
    let total_width = items_width + ITEM_GAP * (entries.len().saturating_sub(1)) as f32;

    let mut cursor_x = ((canvas_width - total_width) / 2.0).max(SWATCH_DIAMETER);
    let mut group = Group::new();

    for (entry, label_width) in entries.iter().zip(label_widths) {
        group = group.add(nodes::marker_glyph(
            entry.marker,
            Point::new(cursor_x + SWATCH_DIAMETER / 2.0, LEGEND_CENTER_Y),
            SWATCH_DIAMETER,
            &entry.color,
            "white",
            1.0,
        ));

        group = group.add(
            Text::new(entry.label.as_str())
                .set("x", cursor_x + SWATCH_DIAMETER + SWATCH_GAP)
                .set("y", LEGEND_CENTER_Y)
                .set("text-anchor", "start")
                .set("dominant-baseline", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", FONT_SIZE)
                .set("fill", TEXT_COLOR),
        );

        cursor_x += SWATCH_DIAMETER + SWATCH_GAP + label_width + ITEM_GAP;
    }

    group
}
