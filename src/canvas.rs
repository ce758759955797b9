//! Canvas configuration and the world-to-pixel projection.
//!
//! Diagram coordinates live in an arbitrary hand-authored world space. The
//! [`CanvasConfig`] fixes the visible ranges of that space, the pixel size of
//! the output image, and the output file name. [`Projection`] maps world
//! coordinates onto the plot area of the pixel canvas, flipping the y-axis so
//! that larger world y values render higher up, and reserving a header band
//! for the title and the horizontal legend.

use crate::geometry::{Bounds, Point};

/// Vertical space reserved above the plot for the title and legend row.
pub const HEADER_HEIGHT: f32 = 84.0;

/// Padding between the plot area and the canvas edges.
pub const PLOT_PADDING: f32 = 24.0;

/// Fixed canvas extents and output location for one diagram.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    x_range: (f32, f32),
    y_range: (f32, f32),
    width: u32,
    height: u32,
    file_name: String,
}

impl CanvasConfig {
    /// Creates a canvas with the given world ranges and pixel dimensions.
    ///
    /// The ranges are authored to comfortably contain every entity and
    /// annotation coordinate with margin; [`crate::diagram::Diagram::validate`]
    /// enforces that.
    pub fn new(
        x_range: (f32, f32),
        y_range: (f32, f32),
        width: u32,
        height: u32,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            x_range,
            y_range,
            width,
            height,
            file_name: file_name.into(),
        }
    }

    pub fn x_range(&self) -> (f32, f32) {
        self.x_range
    }

    pub fn y_range(&self) -> (f32, f32) {
        self.y_range
    }

    /// Output image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Relative file name of the exported PNG.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The visible world region as a bounds rectangle.
    pub fn world_bounds(&self) -> Bounds {
        Bounds::new(self.x_range.0, self.y_range.0, self.x_range.1, self.y_range.1)
    }
}

/// Affine map from world coordinates to pixel coordinates.
///
/// World x grows rightwards like pixel x; world y grows upwards, so the
/// projection flips it against the plot height.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    min_x: f32,
    max_y: f32,
    scale_x: f32,
    scale_y: f32,
    plot_left: f32,
    plot_top: f32,
}

impl Projection {
    pub fn new(canvas: &CanvasConfig) -> Self {
        let plot_width = canvas.width() as f32 - 2.0 * PLOT_PADDING;
        let plot_height = canvas.height() as f32 - HEADER_HEIGHT - PLOT_PADDING;

        let (min_x, max_x) = canvas.x_range();
        let (min_y, max_y) = canvas.y_range();

        Self {
            min_x,
            max_y,
            scale_x: plot_width / (max_x - min_x),
            scale_y: plot_height / (max_y - min_y),
            plot_left: PLOT_PADDING,
            plot_top: HEADER_HEIGHT,
        }
    }

    /// Projects a world point into pixel space.
    pub fn project(&self, point: Point) -> Point {
        Point::new(
            self.plot_left + (point.x() - self.min_x) * self.scale_x,
            self.plot_top + (self.max_y - point.y()) * self.scale_y,
        )
    }

    /// Horizontal pixels per world unit.
    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    /// Vertical pixels per world unit.
    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }
}
