//! Bézier evaluation by De Casteljau's algorithm.

use crate::error::Result;
use crate::geometry::{extent, Point};

use super::{sample_limit, MAX_PREALLOC};

/// Sample a Bézier curve over its control polygon.
///
/// The parametric step is `step_scale / max(Δx, Δy)` of the control polygon's
/// bounding box, so consecutive samples are much less than a pixel apart. `u`
/// starts at 0 and accumulates the step while `u <= 1`; accumulated rounding
/// means the last sample can fall just short of `u = 1`.
///
/// Callers guarantee at least two control points.
pub(crate) fn bezier(controls: &[Point], step_scale: f64) -> Result<Vec<Point>> {
    let (ex, ey) = extent(controls);
    let span = ex.max(ey);
    if span == 0 {
        // All control points coincide; the curve is that point.
        return Ok(controls.first().copied().into_iter().collect());
    }

    let du = step_scale / span as f64;
    let limit = sample_limit("Bezier curve", 1.0, du)?;
    let mut work: Vec<(f64, f64)> = Vec::with_capacity(controls.len());
    let mut pixels = Vec::with_capacity(limit.min(MAX_PREALLOC));

    let mut u = 0.0;
    for _ in 0..limit {
        if u > 1.0 {
            break;
        }
        work.clear();
        work.extend(controls.iter().map(|p| (f64::from(p.x), f64::from(p.y))));
        let (x, y) = de_casteljau(&mut work, u);
        pixels.push(Point::new(x as i32, y as i32));
        u += du;
    }

    tracing::trace!(controls = controls.len(), samples = pixels.len(), "bezier sampled");
    Ok(pixels)
}

/// Collapse the control polygon in place and return the point at `u`.
fn de_casteljau(work: &mut [(f64, f64)], u: f64) -> (f64, f64) {
    let n = work.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            let (ax, ay) = work[j];
            let (bx, by) = work[j + 1];
            work[j] = ((1.0 - u) * ax + u * bx, (1.0 - u) * ay + u * by);
        }
    }
    work.first().copied().unwrap_or((0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_de_casteljau_quadratic_midpoint() {
        let mut work = vec![(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)];
        let (x, y) = de_casteljau(&mut work, 0.5);
        assert_relative_eq!(x, 50.0);
        assert_relative_eq!(y, 50.0);
    }

    #[test]
    fn test_de_casteljau_endpoints() {
        let controls = [(3.0, 4.0), (10.0, -2.0), (7.0, 9.0), (1.0, 1.0)];
        let (x, y) = de_casteljau(&mut controls.to_vec(), 0.0);
        assert_relative_eq!(x, 3.0);
        assert_relative_eq!(y, 4.0);
        let (x, y) = de_casteljau(&mut controls.to_vec(), 1.0);
        assert_relative_eq!(x, 1.0);
        assert_relative_eq!(y, 1.0);
    }

    #[test]
    fn test_bezier_quadratic_samples() {
        let controls = [Point::new(0, 0), Point::new(50, 100), Point::new(100, 0)];
        let pixels = bezier(&controls, 0.01).unwrap();
        assert_eq!(pixels.len(), 10001);
        assert_eq!(pixels[0], Point::new(0, 0));
        assert_eq!(pixels[5000], Point::new(49, 50));
        assert_eq!(pixels[10000], Point::new(99, 0));
    }

    #[test]
    fn test_bezier_two_points_is_a_line() {
        let pixels = bezier(&[Point::new(0, 0), Point::new(10, 0)], 0.01).unwrap();
        assert_eq!(pixels.len(), 1000);
        assert!(pixels.iter().all(|p| p.y == 0 && (0..=10).contains(&p.x)));
    }

    #[test]
    fn test_bezier_coincident_controls() {
        let p = Point::new(4, 4);
        assert_eq!(bezier(&[p, p, p], 0.01).unwrap(), vec![p]);
        // No parameter sweep happens, so the step is irrelevant.
        assert_eq!(bezier(&[p, p], 1e-300).unwrap(), vec![p]);
    }

    #[test]
    fn test_bezier_step_that_cannot_advance() {
        let controls = [Point::new(0, 0), Point::new(50, 100), Point::new(100, 0)];
        assert!(bezier(&controls, 1e-18).is_err());
    }
}
