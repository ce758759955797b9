//! The static diagram model.
//!
//! A [`Diagram`] holds the hand-authored entity, connection, and annotation
//! datasets together with a [`CanvasConfig`]. The datasets are literal
//! constants fixed at construction time; nothing mutates them afterwards.
//!
//! [`Diagram::validate`] enforces the structural invariants before any
//! rendering happens: every connection endpoint must name a known entity,
//! every connection must be long enough to carry an arrowhead, and every
//! drawn coordinate must lie strictly inside the canvas ranges.

use std::collections::HashSet;

use thiserror::Error;

use crate::{canvas::CanvasConfig, color::Color, export::svg::ARROW_BACKOFF, geometry::Point};

/// Shortest allowed connection, in world units.
///
/// The arrowhead anchor sits [`ARROW_BACKOFF`] world units before the target
/// and must fall strictly between the edge midpoint and the target, which
/// requires the edge to span more than twice that distance.
pub const MIN_EDGE_LENGTH: f32 = 2.0 * ARROW_BACKOFF;

/// Validation errors raised by [`Diagram::validate`].
///
/// All variants are fatal: a diagram that fails validation is never rendered.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("connection `{source_name}` -> `{target}` references unknown entity `{name}`")]
    UnknownEntity {
        source_name: String,
        target: String,
        name: String,
    },

    #[error("zero-length connection: `{source_name}` and `{target}` share position ({x}, {y})")]
    ZeroLengthEdge {
        source_name: String,
        target: String,
        x: f32,
        y: f32,
    },

    #[error(
        "connection `{source_name}` -> `{target}` spans only {length} world units; \
         edges must be longer than {min} so the arrowhead stays clear of the midpoint"
    )]
    EdgeTooShort {
        source_name: String,
        target: String,
        length: f32,
        min: f32,
    },

    #[error("{what} at ({x}, {y}) lies outside the canvas ranges")]
    OutOfBounds { what: String, x: f32, y: f32 },
}

/// The glyph drawn for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Diamond,
}

/// A named node with a fixed position, category, and display color.
#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    position: Point,
    category: String,
    marker: MarkerShape,
    color: Color,
}

impl Entity {
    pub fn new(
        name: impl Into<String>,
        position: Point,
        category: impl Into<String>,
        marker: MarkerShape,
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            category: category.into(),
            marker,
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn marker(&self) -> MarkerShape {
        self.marker
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A directed edge between two entities, referenced by name.
///
/// The label is carried as hover text on the rendered path; it has no effect
/// on the drawn geometry. Parallel edges between the same pair are allowed.
#[derive(Debug, Clone)]
pub struct Connection {
    source: String,
    target: String,
    label: String,
}

impl Connection {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A labeled point inside a sub-step cluster.
#[derive(Debug, Clone)]
pub struct SubStep {
    position: Point,
    label: String,
}

impl SubStep {
    pub fn new(position: Point, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Purely decorative overlays; none of these participate in edge routing.
#[derive(Debug, Clone)]
pub enum Annotation {
    /// A cluster of small labeled markers illustrating an internal
    /// multi-stage process next to a parent entity.
    SubSteps { color: Color, steps: Vec<SubStep> },

    /// A dashed, semi-transparently filled rectangle grouping related
    /// entities into a zone. Stroke and fill both derive from the zone color.
    Zone { min: Point, max: Point, color: Color },

    /// A text-only callout near a decision point, e.g. a YES/NO branch label
    /// with its threshold. One string per rendered line.
    BranchLabel { position: Point, lines: Vec<String> },
}

impl Annotation {
    /// Every world coordinate this annotation draws at, for bounds checking.
    fn positions(&self) -> Vec<Point> {
        match self {
            Self::SubSteps { steps, .. } => steps.iter().map(|s| s.position()).collect(),
            Self::Zone { min, max, .. } => vec![*min, *max],
            Self::BranchLabel { position, .. } => vec![*position],
        }
    }
}

/// One legend swatch: the first-seen entity of each category contributes
/// its marker shape and color under the category label.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub marker: MarkerShape,
    pub color: Color,
}

/// A complete static diagram: title, datasets, and canvas configuration.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    entities: Vec<Entity>,
    connections: Vec<Connection>,
    annotations: Vec<Annotation>,
    canvas: CanvasConfig,
}

impl Diagram {
    pub fn new(title: impl Into<String>, canvas: CanvasConfig) -> Self {
        Self {
            title: title.into(),
            entities: Vec::new(),
            connections: Vec::new(),
            annotations: Vec::new(),
            canvas,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn connect(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.connections.push(Connection::new(source, target, label));
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Looks up an entity by name in insertion order.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name() == name)
    }

    /// Resolves a connection to its endpoint entities.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownEntity`] when either endpoint name is
    /// absent from the entity set. A broken reference is a hard failure, it
    /// is never silently skipped.
    pub fn endpoints(&self, connection: &Connection) -> Result<(&Entity, &Entity), DiagramError> {
        let missing = |name: &str| DiagramError::UnknownEntity {
            source_name: connection.source().to_string(),
            target: connection.target().to_string(),
            name: name.to_string(),
        };

        let source = self
            .entity(connection.source())
            .ok_or_else(|| missing(connection.source()))?;
        let target = self
            .entity(connection.target())
            .ok_or_else(|| missing(connection.target()))?;

        Ok((source, target))
    }

    /// Computes the legend entries for this diagram.
    ///
    /// Exactly one entry per distinct category, contributed by the first
    /// entity of that category in entity insertion order. Later entities of
    /// the same category suppress their own entry.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for entity in &self.entities {
            if seen.insert(entity.category().to_string()) {
                entries.push(LegendEntry {
                    label: entity.category().to_string(),
                    marker: entity.marker(),
                    color: entity.color(),
                });
            }
        }

        entries
    }

    /// Checks the structural invariants of the diagram.
    ///
    /// # Errors
    ///
    /// - [`DiagramError::UnknownEntity`] for a connection endpoint missing
    ///   from the entity set.
    /// - [`DiagramError::ZeroLengthEdge`] when both endpoints of a connection
    ///   share the same position. The arrow direction would be a division by
    ///   zero, so this fails fast instead of producing NaN coordinates.
    /// - [`DiagramError::EdgeTooShort`] when a connection spans
    ///   [`MIN_EDGE_LENGTH`] world units or fewer, which would push the
    ///   arrowhead anchor back to or past the edge midpoint.
    /// - [`DiagramError::OutOfBounds`] when an entity or annotation
    ///   coordinate does not lie strictly inside the canvas ranges.
    pub fn validate(&self) -> Result<(), DiagramError> {
        let world = self.canvas.world_bounds();

        for entity in &self.entities {
            if !world.contains_strict(entity.position()) {
                return Err(DiagramError::OutOfBounds {
                    what: format!("entity `{}`", entity.name()),
                    x: entity.position().x(),
                    y: entity.position().y(),
                });
            }
        }

        for annotation in &self.annotations {
            for position in annotation.positions() {
                if !world.contains_strict(position) {
                    return Err(DiagramError::OutOfBounds {
                        what: "annotation".to_string(),
                        x: position.x(),
                        y: position.y(),
                    });
                }
            }
        }

        for connection in &self.connections {
            let (source, target) = self.endpoints(connection)?;

            if source.position() == target.position() {
                return Err(DiagramError::ZeroLengthEdge {
                    source_name: source.name().to_string(),
                    target: target.name().to_string(),
                    x: source.position().x(),
                    y: source.position().y(),
                });
            }

            let length = target.position().sub_point(source.position()).hypot();
            if length <= MIN_EDGE_LENGTH {
                return Err(DiagramError::EdgeTooShort {
                    source_name: source.name().to_string(),
                    target: target.name().to_string(),
                    length,
                    min: MIN_EDGE_LENGTH,
                });
            }
        }

        Ok(())
    }
}
