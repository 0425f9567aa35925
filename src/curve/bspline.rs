//! Uniform B-spline evaluation.
//!
//! The Cox–de Boor recursion is evaluated bottom-up: a single buffer holds the
//! order-1 indicator functions and is blended in place up to the requested order,
//! giving linear work per sample instead of exponential recursion. The blend
//! expressions are exactly those of the recursive definition, so results match it
//! bit for bit.

use crate::error::Result;
use crate::geometry::Point;

use super::{sample_limit, MAX_PREALLOC};

/// Sample a uniform B-spline of the given order.
///
/// The knot vector has `n + order` entries spaced `1 / (n + order - 1)` apart and
/// `u` runs over `[knot[order - 1], knot[n]]` in increments of `step`. The curve
/// does not in general pass through the first and last control points.
///
/// Callers guarantee `order >= 2` and at least `order` control points.
pub(crate) fn bspline(controls: &[Point], order: usize, step: f64) -> Result<Vec<Point>> {
    let n = controls.len();
    let knots = uniform_knots(n + order);
    let mut basis = Vec::with_capacity(knots.len());

    let end = knots[n];
    let mut u = knots[order - 1];
    let limit = sample_limit("B-spline", end - u, step)?;
    let mut pixels = Vec::with_capacity(limit.min(MAX_PREALLOC));

    for _ in 0..limit {
        if u > end {
            break;
        }
        basis_functions(&knots, u, order, &mut basis);
        let mut x = 0.0;
        let mut y = 0.0;
        for (p, b) in controls.iter().zip(&basis) {
            x += f64::from(p.x) * b;
            y += f64::from(p.y) * b;
        }
        pixels.push(Point::new(x as i32, y as i32));
        u += step;
    }

    tracing::trace!(controls = n, order, samples = pixels.len(), "b-spline sampled");
    Ok(pixels)
}

/// `count` knots evenly spaced over `[0, 1]`.
fn uniform_knots(count: usize) -> Vec<f64> {
    let du = 1.0 / (count - 1) as f64;
    (0..count).map(|i| du * i as f64).collect()
}

/// Fill `basis` with `N_{i,order}(u)`; entry `i` is the weight of control point `i`.
///
/// Order-1 bases are indicators of `u` in `[knot_i, knot_{i+1})`.
fn basis_functions(knots: &[f64], u: f64, order: usize, basis: &mut Vec<f64>) {
    let spans = knots.len() - 1;
    basis.clear();
    basis.extend((0..spans).map(|i| {
        if knots[i] <= u && u < knots[i + 1] {
            1.0
        } else {
            0.0
        }
    }));

    for r in 2..=order {
        // Ascending i reads basis[i + 1] before it is overwritten.
        for i in 0..knots.len() - r {
            let c1 = ratio(u - knots[i], knots[i + r - 1] - knots[i]);
            let c2 = ratio(knots[i + r] - u, knots[i + r] - knots[i + 1]);
            basis[i] = c1 * basis[i] + c2 * basis[i + 1];
        }
    }
    basis.truncate(knots.len() - order);
}

/// Division with `0 / 0 = 0`.
fn ratio(num: f64, den: f64) -> f64 {
    if num == 0.0 && den == 0.0 {
        0.0
    } else {
        num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Direct Cox–de Boor recursion for cross-checking the table.
    fn recursive_basis(u: f64, i: usize, k: usize, knots: &[f64]) -> f64 {
        if k == 1 {
            return if knots[i] <= u && u < knots[i + 1] { 1.0 } else { 0.0 };
        }
        let c1 = ratio(u - knots[i], knots[i + k - 1] - knots[i]);
        let c2 = ratio(knots[i + k] - u, knots[i + k] - knots[i + 1]);
        c1 * recursive_basis(u, i, k - 1, knots) + c2 * recursive_basis(u, i + 1, k - 1, knots)
    }

    #[test]
    fn test_ratio_zero_over_zero() {
        assert_eq!(ratio(0.0, 0.0), 0.0);
        assert_relative_eq!(ratio(1.0, 4.0), 0.25);
    }

    #[test]
    fn test_uniform_knots() {
        let knots = uniform_knots(5);
        assert_eq!(knots, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_table_matches_recursion_exactly() {
        let n = 7;
        let k = 4;
        let knots = uniform_knots(n + k);
        let mut basis = Vec::new();
        let mut u = knots[k - 1];
        while u <= knots[n] {
            basis_functions(&knots, u, k, &mut basis);
            assert_eq!(basis.len(), n);
            for (i, &b) in basis.iter().enumerate() {
                assert_eq!(b.to_bits(), recursive_basis(u, i, k, &knots).to_bits(), "u={u} i={i}");
            }
            u += 0.01;
        }
    }

    #[test]
    fn test_partition_of_unity_inside_domain() {
        let knots = uniform_knots(9);
        let mut basis = Vec::new();
        for u in [0.4, 0.45, 0.5, 0.55, 0.6] {
            basis_functions(&knots, u, 4, &mut basis);
            assert_relative_eq!(basis.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cubic_bspline_samples() {
        let controls = [Point::new(0, 0), Point::new(10, 20), Point::new(30, 20), Point::new(40, 0)];
        let pixels = bspline(&controls, 4, 0.001).unwrap();
        assert_eq!(pixels.len(), 143);
        assert_eq!(pixels[0], Point::new(11, 16));
        assert_eq!(pixels[71], Point::new(19, 19));
        assert_eq!(pixels[142], Point::new(28, 16));
    }

    #[test]
    fn test_bspline_does_not_interpolate_endpoints() {
        let controls = [Point::new(0, 0), Point::new(10, 20), Point::new(30, 20), Point::new(40, 0)];
        let pixels = bspline(&controls, 4, 0.001).unwrap();
        assert!(!pixels.contains(&controls[0]));
        assert!(!pixels.contains(&controls[3]));
    }

    #[test]
    fn test_bspline_step_that_cannot_advance() {
        let controls = [Point::new(0, 0), Point::new(10, 20), Point::new(30, 20), Point::new(40, 0)];
        assert!(bspline(&controls, 4, 1e-18).is_err());
        assert_eq!(bspline(&controls, 4, 1.0).unwrap(), vec![Point::new(11, 16)]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_partition_of_unity(n in 4usize..12, order in 2usize..5, frac in 0.0f64..1.0) {
            prop_assume!(n >= order);
            let knots = uniform_knots(n + order);
            let (start, end) = (knots[order - 1], knots[n]);
            let u = start + frac * (end - start);
            prop_assume!(u < end);

            let mut basis = Vec::new();
            basis_functions(&knots, u, order, &mut basis);
            prop_assert_eq!(basis.len(), n);
            prop_assert!(basis.iter().all(|&b| b >= 0.0));
            prop_assert!((basis.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }
}
