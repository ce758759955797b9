//! Node rendering: category-colored markers with word-wrapped labels.

use svg::node::element::{Circle, Group, Polygon, Rectangle, Text};

use crate::{
    color::Color,
    diagram::{Entity, MarkerShape},
    geometry::Point,
};

const FONT_FAMILY: &str = "Arial";
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Fixed sizing for one marker shape.
///
/// Markers are sized uniformly large enough that a typical one-or-two-word
/// label fits inside at the paired font size; labels never overflow the
/// marker bounds for the built-in datasets.
struct NodeStyle {
    diameter: f32,
    font_size: f32,
    border: &'static str,
    border_width: f32,
}

fn style_for(marker: MarkerShape) -> NodeStyle {
    match marker {
        MarkerShape::Circle => NodeStyle {
            diameter: 90.0,
            font_size: 12.0,
            border: "white",
            border_width: 3.0,
        },
        MarkerShape::Square => NodeStyle {
            diameter: 62.0,
            font_size: 9.0,
            border: "#13343B",
            border_width: 2.0,
        },
        MarkerShape::Diamond => NodeStyle {
            diameter: 76.0,
            font_size: 8.0,
            border: "#13343B",
            border_width: 2.0,
        },
    }
}

/// Draws a marker glyph of the given shape centered at `center`.
///
/// Shared between full-size nodes and the small legend swatches.
pub fn marker_glyph(
    marker: MarkerShape,
    center: Point,
    diameter: f32,
    fill: &Color,
    stroke: &str,
    stroke_width: f32,
) -> Box<dyn svg::Node> {
    let half = diameter / 2.0;

    match marker {
        MarkerShape::Circle => Box::new(
            Circle::new()
                .set("cx", center.x())
                .set("cy", center.y())
                .set("r", half)
                .set("fill", fill.to_string())
                .set("stroke", stroke)
                .set("stroke-width", stroke_width),
        ),
        MarkerShape::Square => Box::new(
            Rectangle::new()
                .set("x", center.x() - half)
                .set("y", center.y() - half)
                .set("width", diameter)
                .set("height", diameter)
                .set("fill", fill.to_string())
                .set("stroke", stroke)
                .set("stroke-width", stroke_width),
        ),
        MarkerShape::Diamond => Box::new(
            Polygon::new()
                .set(
                    "points",
                    format!(
                        "{},{} {},{} {},{} {},{}",
                        center.x(),
                        center.y() - half,
                        center.x() + half,
                        center.y(),
                        center.x(),
                        center.y() + half,
                        center.x() - half,
                        center.y()
                    ),
                )
                .set("fill", fill.to_string())
                .set("stroke", stroke)
                .set("stroke-width", stroke_width),
        ),
    }
}

/// Breaks an entity name into label lines, one word per line.
///
/// Short names stay on a single line; multi-word names stack so they fit
/// inside the marker.
pub fn wrap_label(name: &str) -> Vec<&str> {
    name.split_whitespace().collect()
}

/// Renders a full entity node: marker glyph plus centered label lines.
pub fn render_node(entity: &Entity, center: Point) -> Group {
    let style = style_for(entity.marker());
    let line_height = style.font_size * LINE_HEIGHT_FACTOR;

    let mut group = Group::new().add(marker_glyph(
        entity.marker(),
        center,
        style.diameter,
        &entity.color(),
        style.border,
        style.border_width,
    ));

    let lines = wrap_label(entity.name());
    let line_count = lines.len() as f32;

    for (index, line) in lines.into_iter().enumerate() {
        let offset = (index as f32 - (line_count - 1.0) / 2.0) * line_height;

        group = group.add(
            Text::new(line)
                .set("x", center.x())
                .set("y", center.y() + offset)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", style.font_size)
                .set("font-weight", "bold")
                .set("fill", "white"),
        );
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_label_splits_on_whitespace() {
        assert_eq!(wrap_label("API Gateway"), vec!["API", "Gateway"]);
        assert_eq!(wrap_label("Database"), vec!["Database"]);
        assert_eq!(wrap_label("Auto-close Check"), vec!["Auto-close", "Check"]);
    }

    #[test]
    fn circle_glyph_renders_as_circle_element() {
        let glyph = marker_glyph(
            MarkerShape::Circle,
            Point::new(100.0, 50.0),
            90.0,
            &Color::new("#1FB8CD").unwrap(),
            "white",
            3.0,
        );
        let rendered = glyph.to_string();
        assert!(rendered.starts_with("<circle"));
        assert!(rendered.contains("r=\"45\""));
    }

    #[test]
    fn square_glyph_is_centered_on_point() {
        let glyph = marker_glyph(
            MarkerShape::Square,
            Point::new(100.0, 50.0),
            60.0,
            &Color::new("#1FB8CD").unwrap(),
            "#13343B",
            2.0,
        );
        let rendered = glyph.to_string();
        assert!(rendered.contains("x=\"70\""));
        assert!(rendered.contains("y=\"20\""));
    }

    #[test]
    fn diamond_glyph_has_four_corners() {
        let glyph = marker_glyph(
            MarkerShape::Diamond,
            Point::new(0.0, 0.0),
            10.0,
            &Color::new("#DB4545").unwrap(),
            "#13343B",
            2.0,
        );
        let rendered = glyph.to_string();
        assert!(rendered.contains("0,-5 5,0 0,5 -5,0"));
    }

    #[test]
    fn node_renders_one_text_line_per_word() {
        let entity = Entity::new(
            "Knowledge Base",
            Point::new(1.0, 1.0),
            "Storage",
            MarkerShape::Circle,
            Color::new("#5D878F").unwrap(),
        );

        let rendered = render_node(&entity, Point::new(200.0, 200.0)).to_string();
        assert_eq!(rendered.matches("<text").count(), 2);
        assert!(rendered.contains(">Knowledge<"));
        assert!(rendered.contains(">Base<"));
    }
}
