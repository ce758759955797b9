//! Basic geometric types shared by the diagram model and the exporters.

/// A point in either world (diagram) or pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the Euclidean distance of this point from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the unit direction vector pointing from this point towards `other`.
    ///
    /// Returns `None` when the two points coincide, since a zero-length
    /// segment has no direction. Callers must treat that as an error rather
    /// than dividing by zero.
    pub fn direction_to(self, other: Point) -> Option<Point> {
        let delta = other.sub_point(self);
        let length = delta.hypot();
        if length == 0.0 {
            return None;
        }
        Some(delta.scale(1.0 / length))
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// A rectangular region described by its minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Builds bounds from two opposite corner points.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x().min(b.x()),
            min_y: a.y().min(b.y()),
            max_x: a.x().max(b.x()),
            max_y: a.y().max(b.y()),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true when the point lies strictly inside the bounds.
    ///
    /// Points on the boundary do not count as contained. The canvas ranges
    /// must leave a nonzero margin around every drawn coordinate, so boundary
    /// contact is treated the same as an overflow.
    pub fn contains_strict(&self, point: Point) -> bool {
        point.x() > self.min_x
            && point.x() < self.max_x
            && point.y() > self.min_y
            && point.y() < self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.add_point(p2), Point::new(4.0, 6.0));
        assert_eq!(p2.sub_point(p1), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_point_midpoint() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(4.0, 6.0);
        assert_eq!(p1.midpoint(p2), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::default().hypot(), 0.0);
    }

    #[test]
    fn test_point_scale() {
        let scaled = Point::new(2.0, 3.0).scale(2.5);
        assert_eq!(scaled, Point::new(5.0, 7.5));
    }

    #[test]
    fn test_direction_to_unit_length() {
        let dir = Point::new(1.0, 1.0)
            .direction_to(Point::new(4.0, 5.0))
            .unwrap();
        assert!(approx_eq!(f32, dir.hypot(), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, dir.x(), 0.6, epsilon = 1e-6));
        assert!(approx_eq!(f32, dir.y(), 0.8, epsilon = 1e-6));
    }

    #[test]
    fn test_direction_to_coincident_points() {
        let p = Point::new(2.5, -1.0);
        assert!(p.direction_to(p).is_none());
    }

    #[test]
    fn test_bounds_from_corners_normalizes() {
        let bounds = Bounds::from_corners(Point::new(5.0, -0.5), Point::new(0.5, 3.5));
        assert_eq!(bounds.min_x(), 0.5);
        assert_eq!(bounds.min_y(), -0.5);
        assert_eq!(bounds.max_x(), 5.0);
        assert_eq!(bounds.max_y(), 3.5);
    }

    #[test]
    fn test_bounds_dimensions() {
        let bounds = Bounds::new(2.0, 3.0, 7.0, 11.0);
        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 8.0);
    }

    #[test]
    fn test_bounds_contains_strict() {
        let bounds = Bounds::new(0.0, -1.0, 7.0, 5.0);
        assert!(bounds.contains_strict(Point::new(3.5, 2.0)));
        // Boundary contact counts as outside.
        assert!(!bounds.contains_strict(Point::new(0.0, 2.0)));
        assert!(!bounds.contains_strict(Point::new(3.5, 5.0)));
        assert!(!bounds.contains_strict(Point::new(8.0, 2.0)));
    }
}
