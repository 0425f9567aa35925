//! Primitive descriptors.
//!
//! A [`Primitive`] bundles a point list with the algorithm used to rasterize it,
//! which is what a drawing front end keeps per item. Constructors validate arity;
//! transforms return new primitives and never modify `self`.

use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
use crate::clip::{clip_with, ClipOutcome};
use crate::config::RasterConfig;
use crate::curve::draw_curve_with;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Point, Segment};
use crate::render::{draw_ellipse, draw_line_with, draw_polygon_with};
use crate::transform::Transform;

/// Trait for primitives that scan-convert to pixels.
pub trait Rasterize {
    /// Pixel sequence of this primitive under `config`.
    fn rasterize_with(&self, config: &RasterConfig) -> Result<Vec<Point>>;

    /// Pixel sequence of this primitive with the default configuration.
    fn rasterize(&self) -> Result<Vec<Point>> {
        self.rasterize_with(&RasterConfig::default())
    }
}

impl Rasterize for Segment {
    fn rasterize_with(&self, config: &RasterConfig) -> Result<Vec<Point>> {
        config.validate()?;
        Ok(draw_line_with(self.start, self.end, LineAlgorithm::default(), config))
    }
}

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight segment.
    Line {
        /// Endpoints.
        segment: Segment,
        /// Scan-conversion algorithm.
        algorithm: LineAlgorithm,
    },
    /// Closed polygon outline.
    Polygon {
        /// Vertices in edge order (at least 3).
        vertices: Vec<Point>,
        /// Edge scan-conversion algorithm.
        algorithm: LineAlgorithm,
    },
    /// Axis-aligned ellipse given by two opposite bounding-box corners.
    Ellipse {
        /// Bounding-box corners.
        corners: [Point; 2],
    },
    /// Parametric curve.
    Curve {
        /// Control points.
        controls: Vec<Point>,
        /// Curve algorithm.
        algorithm: CurveAlgorithm,
    },
}

impl Primitive {
    /// Line from a point list of exactly 2 points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `points` has exactly 2 points.
    pub fn line(points: &[Point], algorithm: LineAlgorithm) -> Result<Self> {
        let [start, end] = two_points("line", points)?;
        Ok(Self::Line {
            segment: Segment::new(start, end),
            algorithm,
        })
    }

    /// Polygon from at least 3 vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for fewer than 3 vertices.
    pub fn polygon(vertices: &[Point], algorithm: LineAlgorithm) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::too_few_points("polygon", 3, vertices.len()));
        }
        Ok(Self::Polygon {
            vertices: vertices.to_vec(),
            algorithm,
        })
    }

    /// Ellipse from exactly 2 bounding-box corners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `corners` has exactly 2 points.
    pub fn ellipse(corners: &[Point]) -> Result<Self> {
        Ok(Self::Ellipse {
            corners: two_points("ellipse", corners)?,
        })
    }

    /// Curve from its control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for fewer than 2 control points, or
    /// fewer than 4 for a B-spline.
    pub fn curve(controls: &[Point], algorithm: CurveAlgorithm) -> Result<Self> {
        let required = match algorithm {
            CurveAlgorithm::Bezier => 2,
            CurveAlgorithm::BSpline => crate::config::DEFAULT_BSPLINE_ORDER,
        };
        if controls.len() < required {
            return Err(Error::too_few_points(algorithm.name(), required, controls.len()));
        }
        Ok(Self::Curve {
            controls: controls.to_vec(),
            algorithm,
        })
    }

    /// Lowercase kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Polygon { .. } => "polygon",
            Self::Ellipse { .. } => "ellipse",
            Self::Curve { .. } => "curve",
        }
    }

    /// The defining point list.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Line { segment, .. } => segment.to_points().to_vec(),
            Self::Polygon { vertices, .. } => vertices.clone(),
            Self::Ellipse { corners } => corners.to_vec(),
            Self::Curve { controls, .. } => controls.clone(),
        }
    }

    /// Same primitive with a new point list of equal length.
    fn with_points(&self, points: &[Point]) -> Self {
        match self {
            Self::Line { algorithm, .. } => Self::Line {
                segment: Segment::new(points[0], points[1]),
                algorithm: *algorithm,
            },
            Self::Polygon { algorithm, .. } => Self::Polygon {
                vertices: points.to_vec(),
                algorithm: *algorithm,
            },
            Self::Ellipse { .. } => Self::Ellipse {
                corners: [points[0], points[1]],
            },
            Self::Curve { algorithm, .. } => Self::Curve {
                controls: points.to_vec(),
                algorithm: *algorithm,
            },
        }
    }

    /// Apply a transform to the defining points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedTransform`] when rotating an ellipse: a
    /// bounding box cannot express a rotated ellipse.
    pub fn transform(&self, transform: &Transform) -> Result<Self> {
        if matches!(self, Self::Ellipse { .. }) && matches!(transform, Transform::Rotate { .. }) {
            return Err(Error::UnsupportedTransform {
                primitive: self.kind(),
                transform: transform.name(),
            });
        }
        Ok(self.with_points(&transform.apply(&self.points())))
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        self.with_points(&Transform::Translate { dx, dy }.apply(&self.points()))
    }

    /// Rotate clockwise about `pivot`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedTransform`] for ellipses.
    pub fn rotate(&self, pivot: Point, degrees: f64) -> Result<Self> {
        self.transform(&Transform::Rotate { pivot, degrees })
    }

    /// Scale about `pivot`.
    #[must_use]
    pub fn scale(&self, pivot: Point, factor: f64) -> Self {
        self.with_points(&Transform::Scale { pivot, factor }.apply(&self.points()))
    }

    /// Clip a line to `window`; `Ok(None)` when nothing is visible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedTransform`] for anything but a line.
    pub fn clip(&self, window: ClipWindow, algorithm: ClipAlgorithm) -> Result<Option<Self>> {
        self.clip_with(window, algorithm, &RasterConfig::default())
    }

    /// [`Primitive::clip`] with explicit configuration.
    ///
    /// # Errors
    ///
    /// Also returns [`Error::InvalidArgument`] if `config` fails validation.
    pub fn clip_with(
        &self,
        window: ClipWindow,
        algorithm: ClipAlgorithm,
        config: &RasterConfig,
    ) -> Result<Option<Self>> {
        config.validate()?;
        let Self::Line {
            segment,
            algorithm: line_algorithm,
        } = self
        else {
            return Err(Error::UnsupportedTransform {
                primitive: self.kind(),
                transform: "clip",
            });
        };

        Ok(match clip_with(*segment, window, algorithm, config) {
            ClipOutcome::Visible(seg) | ClipOutcome::Clipped(seg) => Some(Self::Line {
                segment: seg,
                algorithm: *line_algorithm,
            }),
            ClipOutcome::Rejected => None,
        })
    }
}

impl Rasterize for Primitive {
    fn rasterize_with(&self, config: &RasterConfig) -> Result<Vec<Point>> {
        config.validate()?;
        match self {
            Self::Line { segment, algorithm } => {
                Ok(draw_line_with(segment.start, segment.end, *algorithm, config))
            }
            Self::Polygon {
                vertices,
                algorithm,
            } => draw_polygon_with(vertices, *algorithm, config),
            Self::Ellipse { corners } => Ok(draw_ellipse(corners[0], corners[1])),
            Self::Curve {
                controls,
                algorithm,
            } => draw_curve_with(controls, *algorithm, config),
        }
    }
}

fn two_points(kind: &str, points: &[Point]) -> Result<[Point; 2]> {
    match points {
        [a, b] => Ok([*a, *b]),
        _ => Err(Error::InvalidArgument(format!(
            "{kind} requires exactly 2 points, got {}",
            points.len()
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_constructor_arity() {
        assert!(Primitive::line(&pts(&[(0, 0)]), LineAlgorithm::Dda).is_err());
        assert!(Primitive::line(&pts(&[(0, 0), (1, 1), (2, 2)]), LineAlgorithm::Dda).is_err());
        assert!(Primitive::polygon(&pts(&[(0, 0), (1, 1)]), LineAlgorithm::Dda).is_err());
        assert!(Primitive::ellipse(&pts(&[(0, 0)])).is_err());
        assert!(Primitive::curve(&pts(&[(0, 0), (1, 1), (2, 0)]), CurveAlgorithm::BSpline).is_err());
        assert!(Primitive::curve(&pts(&[(0, 0), (1, 1)]), CurveAlgorithm::Bezier).is_ok());
    }

    #[test]
    fn test_rasterize_line_dispatch() {
        let line = Primitive::line(&pts(&[(0, 0), (0, 5)]), LineAlgorithm::Dda).unwrap();
        assert_eq!(line.rasterize().unwrap().len(), 6);
    }

    #[test]
    fn test_rasterize_segment_uses_bresenham() {
        let seg = Segment::from_coords(0, 0, 4, 3);
        let expected = draw_line_with(seg.start, seg.end, LineAlgorithm::Bresenham, &RasterConfig::default());
        assert_eq!(seg.rasterize().unwrap(), expected);
    }

    #[test]
    fn test_rasterize_ellipse_and_curve() {
        let ellipse = Primitive::ellipse(&pts(&[(0, 0), (10, 6)])).unwrap();
        assert_eq!(ellipse.rasterize().unwrap(), draw_ellipse(Point::new(0, 0), Point::new(10, 6)));

        let curve =
            Primitive::curve(&pts(&[(0, 0), (10, 20), (30, 20), (40, 0)]), CurveAlgorithm::BSpline)
                .unwrap();
        assert_eq!(curve.rasterize().unwrap().len(), 143);
    }

    #[test]
    fn test_rotate_ellipse_unsupported() {
        let ellipse = Primitive::ellipse(&pts(&[(0, 0), (10, 6)])).unwrap();
        let err = ellipse.rotate(Point::ORIGIN, 45.0).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedTransform {
                primitive: "ellipse",
                transform: "rotate"
            }
        ));
        // Translation and scaling stay valid for ellipses.
        let moved = ellipse.translate(5, 5);
        assert_eq!(moved.points(), pts(&[(5, 5), (15, 11)]));
        let scaled = ellipse.scale(Point::ORIGIN, 2.0);
        assert_eq!(scaled.points(), pts(&[(0, 0), (20, 12)]));
    }

    #[test]
    fn test_transform_preserves_algorithm() {
        let poly =
            Primitive::polygon(&pts(&[(0, 0), (10, 0), (5, 5)]), LineAlgorithm::Naive).unwrap();
        let rotated = poly.rotate(Point::ORIGIN, 90.0).unwrap();
        match rotated {
            Primitive::Polygon {
                vertices,
                algorithm,
            } => {
                assert_eq!(algorithm, LineAlgorithm::Naive);
                assert_eq!(vertices[1], Point::new(0, 10));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_clip_line() {
        let line = Primitive::line(&pts(&[(5, 5), (15, 5)]), LineAlgorithm::Dda).unwrap();
        let window = ClipWindow::new(0, 0, 10, 10);
        let clipped = line.clip(window, ClipAlgorithm::LiangBarsky).unwrap().unwrap();
        assert_eq!(clipped.points(), pts(&[(5, 5), (10, 5)]));

        let outside = line.translate(100, 0);
        assert_eq!(outside.clip(window, ClipAlgorithm::CohenSutherland).unwrap(), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RasterConfig {
            max_clip_passes: 0,
            ..RasterConfig::default()
        };
        let line = Primitive::line(&pts(&[(5, 5), (15, 5)]), LineAlgorithm::Dda).unwrap();
        assert!(line.rasterize_with(&config).is_err());
        assert!(line
            .clip_with(ClipWindow::new(0, 0, 10, 10), ClipAlgorithm::CohenSutherland, &config)
            .is_err());
        assert!(Segment::from_coords(0, 0, 3, 1).rasterize_with(&config).is_err());
    }

    #[test]
    fn test_clip_non_line_unsupported() {
        let ellipse = Primitive::ellipse(&pts(&[(0, 0), (10, 6)])).unwrap();
        let err = ellipse.clip(ClipWindow::new(0, 0, 5, 5), ClipAlgorithm::LiangBarsky).unwrap_err();
        assert!(matches!(err, Error::UnsupportedTransform { transform: "clip", .. }));
    }
}
