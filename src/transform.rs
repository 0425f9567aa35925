//! Affine transforms of point lists.
//!
//! Every transform returns a fresh list and truncates toward zero. Repeated
//! rotations therefore drift by up to a pixel per application; callers that
//! rotate interactively should transform from the original points each time.

use crate::geometry::Point;

/// An affine transform applicable to a point list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Shift by `(dx, dy)`.
    Translate {
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },
    /// Clockwise rotation about a pivot.
    Rotate {
        /// Rotation center.
        pivot: Point,
        /// Clockwise angle in degrees.
        degrees: f64,
    },
    /// Uniform scaling about a pivot.
    Scale {
        /// Scaling center.
        pivot: Point,
        /// Scale factor.
        factor: f64,
    },
}

impl Transform {
    /// Apply this transform to a point list.
    #[must_use]
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        match *self {
            Self::Translate { dx, dy } => translate(points, dx, dy),
            Self::Rotate { pivot, degrees } => rotate(points, pivot, degrees),
            Self::Scale { pivot, factor } => scale(points, pivot, factor),
        }
    }

    /// Short name of the transform.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Translate { .. } => "translate",
            Self::Rotate { .. } => "rotate",
            Self::Scale { .. } => "scale",
        }
    }
}

/// Translate every point by `(dx, dy)`.
///
/// Coordinates wrap on `i32` overflow.
#[must_use]
pub fn translate(points: &[Point], dx: i32, dy: i32) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x.wrapping_add(dx), p.y.wrapping_add(dy)))
        .collect()
}

/// Rotate every point clockwise by `degrees` about `pivot`.
///
/// In screen coordinates (y down) the matrix below turns clockwise:
/// `x' = cx + (x-cx)cosθ - (y-cy)sinθ`, `y' = cy + (x-cx)sinθ + (y-cy)cosθ`.
///
/// Ellipses stored as bounding boxes cannot be rotated this way; see
/// [`crate::primitive::Primitive::rotate`].
#[must_use]
pub fn rotate(points: &[Point], pivot: Point, degrees: f64) -> Vec<Point> {
    let theta = degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let cx = f64::from(pivot.x);
    let cy = f64::from(pivot.y);

    points
        .iter()
        .map(|p| {
            let rx = f64::from(p.x) - cx;
            let ry = f64::from(p.y) - cy;
            let x = cx + rx * cos - ry * sin;
            let y = cy + rx * sin + ry * cos;
            Point::new(x as i32, y as i32)
        })
        .collect()
}

/// Scale every point by `factor` about `pivot`.
#[must_use]
pub fn scale(points: &[Point], pivot: Point, factor: f64) -> Vec<Point> {
    let cx = f64::from(pivot.x);
    let cy = f64::from(pivot.y);
    let keep = 1.0 - factor;

    points
        .iter()
        .map(|p| {
            let x = f64::from(p.x) * factor + cx * keep;
            let y = f64::from(p.y) * factor + cy * keep;
            Point::new(x as i32, y as i32)
        })
        .collect()
}
