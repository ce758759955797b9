//! SVG scene assembly.
//!
//! Builds one SVG [`Document`] from a validated [`Diagram`], painting in
//! back-to-front order: background, zone rectangles, edges, nodes, sub-step
//! clusters, branch labels, legend, title. The document is later handed to
//! [`crate::export::raster`] for PNG encoding; it is never written to disk
//! itself.

mod arrows;
mod legend;
mod nodes;

pub use arrows::ARROW_BACKOFF;

use svg::{
    Document,
    node::element::{Circle, Group, Rectangle, Text},
};

use crate::{
    canvas::Projection,
    color::Color,
    diagram::{Annotation, Diagram, SubStep},
    export::Error,
    geometry::{Bounds, Point},
};

/// Shared ink color for titles, labels, and branch callouts.
const TEXT_COLOR: &str = "#13343B";

const TITLE_FONT_SIZE: f32 = 17.0;
const TITLE_BASELINE_Y: f32 = 34.0;

const ZONE_FILL_OPACITY: f32 = 0.1;
const ZONE_STROKE_WIDTH: f32 = 2.0;
const ZONE_DASH: &str = "6,4";

const SUBSTEP_DIAMETER: f32 = 24.0;
const SUBSTEP_OPACITY: f32 = 0.7;
const SUBSTEP_FONT_SIZE: f32 = 8.0;

const BRANCH_FONT_SIZE: f32 = 10.0;
const BRANCH_LINE_HEIGHT: f32 = 12.0;

const FONT_FAMILY: &str = "Arial";

/// SVG exporter for static diagrams.
pub struct Svg {
    background: Color,
}

impl Svg {
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Renders the complete diagram scene.
    ///
    /// The diagram must have passed [`Diagram::validate`]; broken entity
    /// references or zero-length edges encountered here still fail rather
    /// than rendering garbage, they are just reported as render errors.
    pub fn render_diagram(&self, diagram: &Diagram) -> Result<Document, Error> {
        let canvas = diagram.canvas();
        let projection = Projection::new(canvas);

        let width = canvas.width();
        let height = canvas.height();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        doc = doc.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", self.background.to_string()),
        );

        // Zones sit behind everything else.
        for annotation in diagram.annotations() {
            if let Annotation::Zone { min, max, color } = annotation {
                doc = doc.add(self.render_zone(&projection, *min, *max, color));
            }
        }

        for connection in diagram.connections() {
            let (source, target) = diagram
                .endpoints(connection)
                .map_err(|err| Error::Render(err.to_string()))?;

            doc = doc.add(arrows::render_edge(
                &projection,
                source.position(),
                target.position(),
                connection.label(),
            )?);
        }

        for entity in diagram.entities() {
            doc = doc.add(nodes::render_node(
                entity,
                projection.project(entity.position()),
            ));
        }

        for annotation in diagram.annotations() {
            match annotation {
                Annotation::SubSteps { color, steps } => {
                    doc = doc.add(self.render_sub_steps(&projection, color, steps));
                }
                Annotation::BranchLabel { position, lines } => {
                    doc = doc.add(self.render_branch_label(&projection, *position, lines));
                }
                Annotation::Zone { .. } => {} // already painted
            }
        }

        doc = doc.add(legend::render_legend(&diagram.legend(), width as f32));

        doc = doc.add(
            Text::new(diagram.title())
                .set("x", width as f32 / 2.0)
                .set("y", TITLE_BASELINE_Y)
                .set("text-anchor", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", TITLE_FONT_SIZE)
                .set("font-weight", "bold")
                .set("fill", TEXT_COLOR),
        );

        Ok(doc)
    }

    fn render_zone(&self, projection: &Projection, min: Point, max: Point, color: &Color) -> Rectangle {
        let bounds = Bounds::from_corners(min, max);

        // World y grows upwards, so the pixel-space top-left corner is the
        // world (min_x, max_y) corner.
        let top_left = projection.project(Point::new(bounds.min_x(), bounds.max_y()));
        let width = bounds.width() * projection.scale_x();
        let height = bounds.height() * projection.scale_y();

        Rectangle::new()
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", width)
            .set("height", height)
            .set("stroke", color.to_string())
            .set("stroke-width", ZONE_STROKE_WIDTH)
            .set("stroke-dasharray", ZONE_DASH)
            .set("fill", color.to_string())
            .set("fill-opacity", ZONE_FILL_OPACITY)
    }

    fn render_sub_steps(&self, projection: &Projection, color: &Color, steps: &[SubStep]) -> Group {
        let mut group = Group::new();

        for step in steps {
            let center = projection.project(step.position());

            group = group.add(
                Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", SUBSTEP_DIAMETER / 2.0)
                    .set("fill", color.to_string())
                    .set("fill-opacity", SUBSTEP_OPACITY),
            );

            group = group.add(
                Text::new(step.label())
                    .set("x", center.x())
                    .set("y", center.y())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", SUBSTEP_FONT_SIZE)
                    .set("fill", "white"),
            );
        }

        group
    }

    fn render_branch_label(
        &self,
        projection: &Projection,
        position: Point,
        lines: &[String],
    ) -> Group {
        let center = projection.project(position);
        let line_count = lines.len() as f32;
        let mut group = Group::new();

        for (index, line) in lines.iter().enumerate() {
            let offset = (index as f32 - (line_count - 1.0) / 2.0) * BRANCH_LINE_HEIGHT;

            group = group.add(
                Text::new(line.as_str())
                    .set("x", center.x())
                    .set("y", center.y() + offset)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", BRANCH_FONT_SIZE)
                    .set("fill", TEXT_COLOR),
            );
        }

        group
    }
}
