//! Edge rendering: midpoint polylines and directional arrowheads.
//!
//! Every connection draws two primitives: a three-point polyline routed
//! through the arithmetic midpoint of its endpoints, and a triangular
//! arrowhead backed off a fixed world-space distance from the target along
//! the edge direction. The midpoint keeps the door open for curved routing
//! later; today the three points are collinear so the path renders straight.

use svg::node::element::{Group, Path, Polygon, Title};

use crate::{canvas::Projection, export::Error, geometry::Point};

/// World-space distance the arrowhead sits back from the target center.
pub const ARROW_BACKOFF: f32 = 0.15;

const EDGE_COLOR: &str = "#666666";
const EDGE_WIDTH: f32 = 2.0;

/// Arrowhead dimensions in pixels (length along the edge, width across it).
const ARROW_LENGTH: f32 = 12.0;
const ARROW_WIDTH: f32 = 9.0;

/// Computes the world-space anchor point of the arrowhead.
///
/// The anchor lies [`ARROW_BACKOFF`] world units before the target, along
/// the unit direction vector from source to target. Returns `None` for a
/// zero-length edge, which has no direction.
pub fn arrow_anchor(source: Point, target: Point) -> Option<Point> {
    let direction = source.direction_to(target)?;
    Some(target.sub_point(direction.scale(ARROW_BACKOFF)))
}

/// Builds the three-point polyline path data through the midpoint.
pub fn polyline_path_data(start: Point, mid: Point, end: Point) -> String {
    format!(
        "M {} {} L {} {} L {} {}",
        start.x(),
        start.y(),
        mid.x(),
        mid.y(),
        end.x(),
        end.y()
    )
}

/// Renders one edge: polyline plus arrowhead, with the label as hover text.
pub fn render_edge(
    projection: &Projection,
    source: Point,
    target: Point,
    label: &str,
) -> Result<Group, Error> {
    let zero_length = || {
        Error::Render(format!(
            "zero-length edge at ({}, {})",
            source.x(),
            source.y()
        ))
    };

    let anchor = arrow_anchor(source, target).ok_or_else(zero_length)?;
    let mid = source.midpoint(target);

    let source_px = projection.project(source);
    let mid_px = projection.project(mid);
    let target_px = projection.project(target);
    let anchor_px = projection.project(anchor);

    // Orientation comes from pixel space so the y-flip is accounted for.
    let direction_px = source_px.direction_to(target_px).ok_or_else(zero_length)?;

    let mut path = Path::new()
        .set("d", polyline_path_data(source_px, mid_px, target_px))
        .set("fill", "none")
        .set("stroke", EDGE_COLOR)
        .set("stroke-width", EDGE_WIDTH);

    if !label.is_empty() {
        path = path.add(Title::new(label));
    }

    Ok(Group::new()
        .add(path)
        .add(arrowhead(anchor_px, direction_px)))
}

/// A solid triangle centered on `anchor`, pointing along `direction`.
fn arrowhead(anchor: Point, direction: Point) -> Polygon {
    let half_length = direction.scale(ARROW_LENGTH / 2.0);
    let half_width = Point::new(-direction.y(), direction.x()).scale(ARROW_WIDTH / 2.0);

    let tip = anchor.add_point(half_length);
    let base_left = anchor.sub_point(half_length).add_point(half_width);
    let base_right = anchor.sub_point(half_length).sub_point(half_width);

    Polygon::new()
        .set(
            "points",
            format!(
                "{},{} {},{} {},{}",
                tip.x(),
                tip.y(),
                base_left.x(),
                base_left.y(),
                base_right.x(),
                base_right.y()
            ),
        )
        .set("fill", EDGE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn arrow_anchor_matches_reference_example() {
        // A at (0,0), B at (2,0): the anchor is 0.15 world units before B.
        let anchor = arrow_anchor(Point::new(0.0, 0.0), Point::new(2.0, 0.0)).unwrap();
        assert!(approx_eq!(f32, anchor.x(), 1.85, epsilon = 1e-6));
        assert!(approx_eq!(f32, anchor.y(), 0.0, epsilon = 1e-6));
    }

    #[test]
    fn arrow_anchor_lies_between_midpoint_and_target() {
        let source = Point::new(1.0, 3.0);
        let target = Point::new(5.5, 0.5);

        let mid = source.midpoint(target);
        let anchor = arrow_anchor(source, target).unwrap();

        let half_length = target.sub_point(mid).hypot();
        let anchor_to_target = target.sub_point(anchor).hypot();

        assert!(approx_eq!(f32, anchor_to_target, ARROW_BACKOFF, epsilon = 1e-5));
        assert!(anchor_to_target > 0.0);
        assert!(anchor_to_target < half_length);
    }

    #[test]
    fn arrow_anchor_rejects_zero_length_edge() {
        let p = Point::new(4.0, 4.0);
        assert!(arrow_anchor(p, p).is_none());
    }

    #[test]
    fn polyline_routes_through_midpoint() {
        let data = polyline_path_data(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.5),
            Point::new(2.0, 1.0),
        );
        assert_eq!(data, "M 0 0 L 1 0.5 L 2 1");
    }

    #[test]
    fn arrowhead_tip_points_along_direction() {
        let polygon = arrowhead(Point::new(10.0, 10.0), Point::new(1.0, 0.0));
        let rendered = polygon.to_string();
        // Tip at anchor + half length along +x.
        assert!(rendered.contains("16,10"));
    }
}
