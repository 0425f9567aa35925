//! Geometric primitives for rasterization.
//!
//! Every public coordinate is an integer pixel position. Algorithms that need
//! sub-pixel precision convert to `f64` internally and truncate on the way out.

use std::fmt;

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinates as an `[x, y]` pair.
    #[must_use]
    pub const fn to_array(self) -> [i32; 2] {
        [self.x, self.y]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The segment with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Endpoints as a two-element point list.
    #[must_use]
    pub const fn to_points(self) -> [Point; 2] {
        [self.start, self.end]
    }
}

/// Axis-aligned clipping rectangle, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClipWindow {
    /// Left bound.
    pub xmin: i32,
    /// Bottom bound (smallest y).
    pub ymin: i32,
    /// Right bound.
    pub xmax: i32,
    /// Top bound (largest y).
    pub ymax: i32,
}

impl ClipWindow {
    /// Create a window from its bounds.
    #[must_use]
    pub const fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Create a window from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Check if a point lies inside the window (bounds inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.xmin && point.x <= self.xmax && point.y >= self.ymin && point.y <= self.ymax
    }
}

/// Extent of a point list along each axis: `(max_x - min_x, max_y - min_y)`.
///
/// Returns `(0, 0)` for an empty list.
#[must_use]
pub fn extent(points: &[Point]) -> (i64, i64) {
    let Some(first) = points.first() else {
        return (0, 0);
    };
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    (
        i64::from(max_x) - i64::from(min_x),
        i64::from(max_y) - i64::from(min_y),
    )
}

/// Format a point list as `[[x,y],[x,y],...]`.
#[must_use]
pub fn format_points(points: &[Point]) -> String {
    let body: Vec<String> = points.iter().map(ToString::to_string).collect();
    format!("[{}]", body.join(","))
}
