//! Parametric curve evaluation.
//!
//! Curves are sampled densely in parameter space and each sample is truncated to
//! a pixel, so consecutive pixels repeat. Callers that need a unique pixel set
//! deduplicate themselves.
//!
//! # Algorithms
//!
//! - **Bézier**: De Casteljau evaluation over any number of control points
//! - **B-spline**: uniform B-spline, cubic by default, Cox–de Boor basis
//!
//! # References
//!
//! - de Casteljau, P. (1959). "Outillages méthodes calcul." André Citroën.
//! - de Boor, C. (1972). "On calculating with B-splines." J. Approx. Theory 6.

mod bezier;
mod bspline;

use crate::algorithm::CurveAlgorithm;
use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Upper bound on the up-front sample buffer reservation.
const MAX_PREALLOC: usize = 1 << 20;

/// Most samples a single curve may take.
pub const MAX_CURVE_SAMPLES: usize = 1 << 24;

/// Iteration bound for sampling a parameter range of length `range` at `step`.
///
/// Accumulated rounding can add one sample past `range / step + 1`, so the
/// bound leaves room for it.
fn sample_limit(curve: &str, range: f64, step: f64) -> Result<usize> {
    let samples = (range / step).floor();
    if !samples.is_finite() || samples >= MAX_CURVE_SAMPLES as f64 {
        tracing::debug!(curve, range, step, "curve step too small");
        return Err(Error::InvalidArgument(format!(
            "{curve} step {step} needs more than {MAX_CURVE_SAMPLES} samples"
        )));
    }
    Ok(samples as usize + 2)
}

/// Sample a curve through its control points.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for fewer than 2 Bézier control points,
/// fewer control points than the B-spline order (4 by default), or a step so
/// small the curve would need more than [`MAX_CURVE_SAMPLES`] samples.
///
/// # Example
///
/// ```rust
/// use trueno_raster::algorithm::CurveAlgorithm;
/// use trueno_raster::curve::draw_curve;
/// use trueno_raster::geometry::Point;
///
/// let controls = [Point::new(0, 0), Point::new(5, 10), Point::new(10, 0)];
/// let pixels = draw_curve(&controls, CurveAlgorithm::Bezier).unwrap();
/// assert_eq!(pixels[0], Point::new(0, 0));
///
/// assert!(draw_curve(&controls, CurveAlgorithm::BSpline).is_err());
/// ```
pub fn draw_curve(controls: &[Point], algorithm: CurveAlgorithm) -> Result<Vec<Point>> {
    draw_curve_with(controls, algorithm, &RasterConfig::default())
}

/// [`draw_curve`] with explicit configuration.
///
/// # Errors
///
/// Also returns [`Error::InvalidArgument`] if `config` fails validation.
pub fn draw_curve_with(
    controls: &[Point],
    algorithm: CurveAlgorithm,
    config: &RasterConfig,
) -> Result<Vec<Point>> {
    config.validate()?;
    match algorithm {
        CurveAlgorithm::Bezier => {
            if controls.len() < 2 {
                return Err(Error::too_few_points("Bezier curve", 2, controls.len()));
            }
            bezier::bezier(controls, config.bezier_step_scale)
        }
        CurveAlgorithm::BSpline => {
            let order = config.bspline_order;
            if controls.len() < order {
                return Err(Error::too_few_points("B-spline", order, controls.len()));
            }
            bspline::bspline(controls, order, config.bspline_step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> Vec<Point> {
        vec![Point::new(0, 0), Point::new(10, 20), Point::new(30, 20), Point::new(40, 0)]
    }

    #[test]
    fn test_bspline_requires_order_points() {
        let err = draw_curve(&controls()[..3], CurveAlgorithm::BSpline).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(draw_curve(&controls(), CurveAlgorithm::BSpline).is_ok());
    }

    #[test]
    fn test_bezier_requires_two_points() {
        let err = draw_curve(&controls()[..1], CurveAlgorithm::Bezier).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(draw_curve(&[], CurveAlgorithm::Bezier).is_err());
    }

    #[test]
    fn test_quadratic_bspline_via_config() {
        let config = RasterConfig::new().bspline_order(3);
        let pixels = draw_curve_with(&controls()[..3], CurveAlgorithm::BSpline, &config).unwrap();
        assert!(!pixels.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RasterConfig::new().bspline_step(-1.0);
        assert!(draw_curve_with(&controls(), CurveAlgorithm::BSpline, &config).is_err());
    }

    #[test]
    fn test_coarser_step_fewer_samples() {
        let fine = draw_curve(&controls(), CurveAlgorithm::Bezier).unwrap();
        let config = RasterConfig::new().bezier_step_scale(1.0);
        let coarse = draw_curve_with(&controls(), CurveAlgorithm::Bezier, &config).unwrap();
        assert!(coarse.len() < fine.len());
        assert_eq!(coarse[0], fine[0]);
    }

    #[test]
    fn test_tiny_step_rejected() {
        let config = RasterConfig {
            bspline_step: 1e-18,
            ..RasterConfig::default()
        };
        let err = draw_curve_with(&controls(), CurveAlgorithm::BSpline, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let config = RasterConfig::new().bezier_step_scale(1e-18);
        let err = draw_curve_with(&controls(), CurveAlgorithm::Bezier, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_sample_limit() {
        assert_eq!(sample_limit("curve", 1.0, 0.25).unwrap(), 6);
        assert!(sample_limit("curve", 1.0, 1e-18).is_err());
        assert!(sample_limit("curve", 1.0, f64::MIN_POSITIVE).is_err());
    }

    #[test]
    fn test_curve_is_deterministic() {
        let a = draw_curve(&controls(), CurveAlgorithm::BSpline).unwrap();
        let b = draw_curve(&controls(), CurveAlgorithm::BSpline).unwrap();
        assert_eq!(a, b);
    }
}
