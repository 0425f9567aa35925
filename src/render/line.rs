//! Line and polygon scan conversion.

use crate::algorithm::LineAlgorithm;
use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::geometry::Point;

// ============================================================================
// Line Drawing
// ============================================================================

/// Rasterize the segment `p0 → p1`.
///
/// Both endpoints are included for every algorithm, with one exception: a
/// zero-length DDA line returns the two input points unchanged.
///
/// # Arguments
///
/// * `p0`, `p1` - Segment endpoints
/// * `algorithm` - Scan-conversion algorithm
pub fn draw_line(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Vec<Point> {
    draw_line_with(p0, p1, algorithm, &RasterConfig::default())
}

/// [`draw_line`] with explicit configuration.
///
/// `config` is not validated here; a zero `max_decision_steps` is treated as 1,
/// which is never reached on a well-formed line.
pub fn draw_line_with(
    p0: Point,
    p1: Point,
    algorithm: LineAlgorithm,
    config: &RasterConfig,
) -> Vec<Point> {
    match algorithm {
        LineAlgorithm::Naive => naive_line(p0, p1),
        LineAlgorithm::Dda => dda_line(p0, p1),
        LineAlgorithm::Bresenham => bresenham_line(p0, p1, config.max_decision_steps.max(1)),
    }
}

/// Reference scan conversion: evaluate the line equation at every column.
///
/// Steep lines leave gaps. Only meant as a correctness baseline.
fn naive_line(p0: Point, p1: Point) -> Vec<Point> {
    if p0.x == p1.x {
        return if p0.y <= p1.y {
            (p0.y..=p1.y).map(|y| Point::new(p0.x, y)).collect()
        } else {
            (p1.y..=p0.y).rev().map(|y| Point::new(p0.x, y)).collect()
        };
    }

    let (a, b) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
    let k = (f64::from(b.y) - f64::from(a.y)) / (f64::from(b.x) - f64::from(a.x));

    (a.x..=b.x)
        .map(|x| {
            let y = f64::from(a.y) + k * (f64::from(x) - f64::from(a.x));
            Point::new(x, y.floor() as i32)
        })
        .collect()
}

/// Digital differential analyzer.
///
/// Starts at the pixel center `(x0 + 0.5, y0 + 0.5)` and truncates toward zero
/// at each emission.
fn dda_line(p0: Point, p1: Point) -> Vec<Point> {
    let dx = i64::from(p1.x) - i64::from(p0.x);
    let dy = i64::from(p1.y) - i64::from(p0.y);
    let length = dx.abs().max(dy.abs());
    if length == 0 {
        return vec![p0, p1];
    }

    let step_x = dx as f64 / length as f64;
    let step_y = dy as f64 / length as f64;
    let mut x = f64::from(p0.x) + 0.5;
    let mut y = f64::from(p0.y) + 0.5;

    let mut pixels = Vec::with_capacity(length as usize + 1);
    for _ in 0..=length {
        pixels.push(Point::new(x as i32, y as i32));
        x += step_x;
        y += step_y;
    }
    pixels
}

/// Bresenham's line algorithm with sign-based stepping.
///
/// Instead of branching per octant, the axes are interchanged when the line is
/// steep so the loop always steps along the major axis.
///
/// # References
///
/// Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
fn bresenham_line(p0: Point, p1: Point, max_decision_steps: usize) -> Vec<Point> {
    let mut x = i64::from(p0.x);
    let mut y = i64::from(p0.y);
    let mut dx = (i64::from(p1.x) - x).abs();
    let mut dy = (i64::from(p1.y) - y).abs();
    let s1 = (i64::from(p1.x) - x).signum();
    let s2 = (i64::from(p1.y) - y).signum();

    let interchange = dy > dx;
    if interchange {
        std::mem::swap(&mut dx, &mut dy);
    }

    let mut e = 2 * dy - dx;
    let mut capped = false;
    let mut pixels = Vec::with_capacity(dx as usize + 1);

    for _ in 0..dx {
        pixels.push(Point::new(x as i32, y as i32));

        let mut steps = 0;
        while e > 0 {
            if steps == max_decision_steps {
                capped = true;
                break;
            }
            if interchange {
                x += s1;
            } else {
                y += s2;
            }
            e -= 2 * dx;
            steps += 1;
        }

        if interchange {
            y += s2;
        } else {
            x += s1;
        }
        e += 2 * dy;
    }
    pixels.push(Point::new(x as i32, y as i32));

    if capped {
        tracing::warn!(?p0, ?p1, max_decision_steps, "bresenham decision loop hit its cap");
    }
    pixels
}

// ============================================================================
// Polygon Drawing
// ============================================================================

/// Rasterize a closed polygon outline.
///
/// Edge `i` runs from `vertices[i - 1]` to `vertices[i]`, so the first edge is the
/// closing edge from the last vertex back to the first. Edge pixels are
/// concatenated in that order; shared vertices appear once per adjacent edge.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for fewer than 3 vertices.
pub fn draw_polygon(vertices: &[Point], algorithm: LineAlgorithm) -> Result<Vec<Point>> {
    draw_polygon_with(vertices, algorithm, &RasterConfig::default())
}

/// [`draw_polygon`] with explicit configuration.
///
/// # Errors
///
/// Also returns [`Error::InvalidArgument`] if `config` fails validation.
pub fn draw_polygon_with(
    vertices: &[Point],
    algorithm: LineAlgorithm,
    config: &RasterConfig,
) -> Result<Vec<Point>> {
    config.validate()?;
    let Some(&last) = vertices.last() else {
        return Err(Error::too_few_points("polygon", 3, 0));
    };
    if vertices.len() < 3 {
        return Err(Error::too_few_points("polygon", 3, vertices.len()));
    }

    let mut pixels = Vec::new();
    let mut prev = last;
    for &vertex in vertices {
        pixels.extend(draw_line_with(prev, vertex, algorithm, config));
        prev = vertex;
    }
    Ok(pixels)
}

// ============================================================================
// Tests
// ============================================================================
