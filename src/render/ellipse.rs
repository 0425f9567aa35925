//! Midpoint ellipse generation.

use crate::geometry::Point;

/// Rasterize the outline of the ellipse inscribed in a bounding box.
///
/// `p0` and `p1` are opposite corners of the box, in any order. The center is
/// computed from the absolute coordinate sums, which is only correct when both
/// corners lie in the nonnegative quadrant (canvas coordinates).
///
/// The quarter arc is generated with the two-region midpoint algorithm and then
/// mirrored: all first-quadrant points come first, followed by three mirrored
/// points `(-x, -y)`, `(-x, y)`, `(x, -y)` for each of them. Finally every point is
/// shifted by the center and truncated toward zero.
///
/// Degenerate boxes never fail: a zero-size box yields the center four times.
pub fn draw_ellipse(p0: Point, p1: Point) -> Vec<Point> {
    let (x0, y0) = (f64::from(p0.x), f64::from(p0.y));
    let (x1, y1) = (f64::from(p1.x), f64::from(p1.y));

    let rx = (x1 - x0).abs() / 2.0;
    let ry = (y1 - y0).abs() / 2.0;
    let cx = (x1 + x0).abs() / 2.0;
    let cy = (y1 + y0).abs() / 2.0;

    let quarter = quarter_arc(rx, ry);
    tracing::trace!(rx, ry, quarter = quarter.len(), "ellipse quarter arc");

    let mut mirrored = Vec::with_capacity(quarter.len() * 4);
    mirrored.extend_from_slice(&quarter);
    for &(x, y) in &quarter {
        mirrored.push((-x, -y));
        mirrored.push((-x, y));
        mirrored.push((x, -y));
    }

    mirrored
        .into_iter()
        .map(|(x, y)| Point::new((x as f64 + cx) as i32, (y as f64 + cy) as i32))
        .collect()
}

/// First-quadrant arc relative to the center, starting at `(0, ry)`.
fn quarter_arc(rx: f64, ry: f64) -> Vec<(i64, i64)> {
    let rx2 = rx * rx;
    let ry2 = ry * ry;

    let mut x: i64 = 0;
    let mut y: i64 = (ry + 0.5) as i64;
    let mut arc = Vec::new();

    // Region 1: slope magnitude below 1, step x.
    let mut p1 = ry2 - rx2 * ry + rx2 / 4.0;
    while ry2 * (x as f64) < rx2 * (y as f64) {
        arc.push((x, y));
        x += 1;
        if p1 > 0.0 {
            y -= 1;
            p1 = p1 - 2.0 * rx2 * (y as f64);
        }
        p1 = p1 + 2.0 * ry2 * (x as f64) + ry2;
    }

    // Region 2: step y down to the major axis.
    let hx = x as f64 + 0.5;
    let ym = (y - 1) as f64;
    let mut p2 = ry2 * (hx * hx) + rx2 * (ym * ym) - rx2 * ry2;
    while y >= 0 {
        arc.push((x, y));
        y -= 1;
        if p2 < 0.0 {
            x += 1;
            p2 = p2 + 2.0 * ry2 * (x as f64);
        }
        p2 = p2 - 2.0 * rx2 * (y as f64) + rx2;
    }

    arc
}
