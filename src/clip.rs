//! Line clipping against an axis-aligned window.
//!
//! Results are a tagged [`ClipOutcome`] rather than a magic segment. The legacy
//! `[(0,0),(0,0)]` rejection shape is still available through
//! [`ClipOutcome::to_sentinel`].
//!
//! Recomputed boundary coordinates use round-half-up: `0.5` is added before
//! truncating toward zero. This is the only place the crate rounds instead of
//! truncating.
//!
//! # References
//!
//! - Liang, Y. D., & Barsky, B. A. (1984). "A New Concept and Method for Line
//!   Clipping." ACM TOG 3(1).

use crate::algorithm::ClipAlgorithm;
use crate::config::RasterConfig;
use crate::geometry::{ClipWindow, Point, Segment};

/// Result of clipping a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipOutcome {
    /// The segment lies entirely inside the window and is returned unchanged.
    Visible(Segment),
    /// Part of the segment is visible; endpoints were moved onto the window.
    Clipped(Segment),
    /// Nothing is visible.
    Rejected,
}

impl ClipOutcome {
    /// The visible segment, if any.
    #[must_use]
    pub const fn segment(&self) -> Option<Segment> {
        match *self {
            Self::Visible(seg) | Self::Clipped(seg) => Some(seg),
            Self::Rejected => None,
        }
    }

    /// Whether the segment was rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Legacy shape: the visible segment, or `[(0,0),(0,0)]` when rejected.
    ///
    /// The sentinel is indistinguishable from a degenerate segment at the origin;
    /// prefer matching on the outcome.
    #[must_use]
    pub fn to_sentinel(&self) -> Segment {
        self.segment().unwrap_or_default()
    }

    fn classify(original: Segment, result: Option<Segment>) -> Self {
        match result {
            Some(seg) if seg == original => Self::Visible(seg),
            Some(seg) => Self::Clipped(seg),
            None => Self::Rejected,
        }
    }
}

/// Clip `segment` to `window`.
///
/// # Example
///
/// ```rust
/// use trueno_raster::algorithm::ClipAlgorithm;
/// use trueno_raster::clip::{clip, ClipOutcome};
/// use trueno_raster::geometry::{ClipWindow, Segment};
///
/// let window = ClipWindow::new(0, 0, 10, 10);
/// let outcome = clip(Segment::from_coords(5, 5, 15, 5), window, ClipAlgorithm::LiangBarsky);
/// assert_eq!(outcome, ClipOutcome::Clipped(Segment::from_coords(5, 5, 10, 5)));
/// ```
pub fn clip(segment: Segment, window: ClipWindow, algorithm: ClipAlgorithm) -> ClipOutcome {
    clip_with(segment, window, algorithm, &RasterConfig::default())
}

/// [`clip`] with explicit configuration.
///
/// `config` is not validated here; a zero `max_clip_passes` is treated as 1.
pub fn clip_with(
    segment: Segment,
    window: ClipWindow,
    algorithm: ClipAlgorithm,
    config: &RasterConfig,
) -> ClipOutcome {
    let result = match algorithm {
        ClipAlgorithm::CohenSutherland => {
            cohen_sutherland(segment, window, config.max_clip_passes.max(1))
        }
        ClipAlgorithm::LiangBarsky => liang_barsky(segment, window),
    };
    let outcome = ClipOutcome::classify(segment, result);
    if outcome.is_rejected() {
        tracing::debug!(?segment, ?window, %algorithm, "segment rejected");
    }
    outcome
}

/// Add one half and truncate toward zero.
fn round_half_up(v: f64) -> i64 {
    (v + 0.5) as i64
}

fn to_point(x: i64, y: i64) -> Point {
    Point::new(x as i32, y as i32)
}

// ============================================================================
// Cohen-Sutherland
// ============================================================================

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// 4-bit region code of a point relative to the window.
fn outcode(x: i64, y: i64, w: &ClipWindow) -> u8 {
    let mut code = 0;
    if x < i64::from(w.xmin) {
        code |= LEFT;
    }
    if x > i64::from(w.xmax) {
        code |= RIGHT;
    }
    if y < i64::from(w.ymin) {
        code |= BOTTOM;
    }
    if y > i64::from(w.ymax) {
        code |= TOP;
    }
    code
}

/// Outcode clipping.
///
/// Each pass moves the outside endpoint onto every boundary flagged in its code,
/// in the order left, right, bottom, top, recomputing from the already-moved
/// point. When the inside endpoint comes first the endpoints are swapped, and the
/// swap carries into the result. Identical outcodes are rejected outright.
fn cohen_sutherland(segment: Segment, w: ClipWindow, max_passes: usize) -> Option<Segment> {
    let (mut x0, mut y0) = (i64::from(segment.start.x), i64::from(segment.start.y));
    let (mut x1, mut y1) = (i64::from(segment.end.x), i64::from(segment.end.y));

    for _ in 0..max_passes {
        let mut code0 = outcode(x0, y0, &w);
        let code1 = outcode(x1, y1, &w);

        if code0 | code1 == 0 {
            return Some(Segment::new(to_point(x0, y0), to_point(x1, y1)));
        }
        if code0 & code1 != 0 || code0 == code1 {
            return None;
        }
        if code0 == 0 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
            code0 = code1;
        }

        // A zero denominator means an earlier boundary in this pass already
        // brought the point level with the inside endpoint; skip the boundary.
        if code0 & LEFT != 0 && x0 != x1 {
            y0 = cross_x(x0, y0, x1, y1, i64::from(w.xmin));
            x0 = i64::from(w.xmin);
        }
        if code0 & RIGHT != 0 && x0 != x1 {
            y0 = cross_x(x0, y0, x1, y1, i64::from(w.xmax));
            x0 = i64::from(w.xmax);
        }
        if code0 & BOTTOM != 0 && y0 != y1 {
            x0 = cross_y(x0, y0, x1, y1, i64::from(w.ymin));
            y0 = i64::from(w.ymin);
        }
        if code0 & TOP != 0 && y0 != y1 {
            x0 = cross_y(x0, y0, x1, y1, i64::from(w.ymax));
            y0 = i64::from(w.ymax);
        }
    }

    tracing::warn!(?segment, ?w, max_passes, "cohen-sutherland pass cap reached");
    None
}

/// y where the line through `(x0,y0)`, `(x1,y1)` meets the vertical `x = bound`.
///
/// Both factors are widened to `f64` first; their product can exceed `i64`
/// for segments spanning the full `i32` range.
fn cross_x(x0: i64, y0: i64, x1: i64, y1: i64, bound: i64) -> i64 {
    let delta = (bound - x0) as f64 * (y0 - y1) as f64 / (x0 - x1) as f64;
    round_half_up(y0 as f64 + delta)
}

/// x where the line meets the horizontal `y = bound`.
fn cross_y(x0: i64, y0: i64, x1: i64, y1: i64, bound: i64) -> i64 {
    let delta = (bound - y0) as f64 * (x0 - x1) as f64 / (y0 - y1) as f64;
    round_half_up(x0 as f64 + delta)
}

// ============================================================================
// Liang-Barsky
// ============================================================================

/// Parametric clipping.
///
/// Rejects as soon as the entry parameter passes the exit parameter, including
/// after the last boundary.
fn liang_barsky(segment: Segment, w: ClipWindow) -> Option<Segment> {
    let x0 = f64::from(segment.start.x);
    let y0 = f64::from(segment.start.y);
    let dx = f64::from(segment.end.x) - x0;
    let dy = f64::from(segment.end.y) - y0;

    let p = [-dx, dx, -dy, dy];
    let q = [
        x0 - f64::from(w.xmin),
        f64::from(w.xmax) - x0,
        y0 - f64::from(w.ymin),
        f64::from(w.ymax) - y0,
    ];

    let mut u0: f64 = 0.0;
    let mut u1: f64 = 1.0;
    for (&pi, &qi) in p.iter().zip(&q) {
        if pi < 0.0 {
            u0 = u0.max(qi / pi);
        } else if pi > 0.0 {
            u1 = u1.min(qi / pi);
        } else if qi < 0.0 {
            // Parallel to this boundary and outside it.
            return None;
        }
        if u0 > u1 {
            return None;
        }
    }

    Some(Segment::new(
        to_point(round_half_up(x0 + u0 * dx), round_half_up(y0 + u0 * dy)),
        to_point(round_half_up(x0 + u1 * dx), round_half_up(y0 + u1 * dy)),
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: ClipWindow = ClipWindow::new(0, 0, 10, 10);

    fn both(seg: Segment, window: ClipWindow) -> (ClipOutcome, ClipOutcome) {
        (
            clip(seg, window, ClipAlgorithm::CohenSutherland),
            clip(seg, window, ClipAlgorithm::LiangBarsky),
        )
    }

    #[test]
    fn test_inside_segment_unchanged() {
        let seg = Segment::from_coords(2, 3, 8, 7);
        let (cs, lb) = both(seg, WINDOW);
        assert_eq!(cs, ClipOutcome::Visible(seg));
        assert_eq!(lb, ClipOutcome::Visible(seg));
    }

    #[test]
    fn test_segment_left_of_window_rejected() {
        let seg = Segment::from_coords(-5, 1, -1, 9);
        let (cs, lb) = both(seg, WINDOW);
        assert!(cs.is_rejected());
        assert!(lb.is_rejected());
        assert_eq!(cs.to_sentinel(), Segment::from_coords(0, 0, 0, 0));
    }

    #[test]
    fn test_diagonal_crossing_one_edge_agrees() {
        let seg = Segment::from_coords(5, 5, 15, 12);
        let (cs, lb) = both(seg, WINDOW);
        assert_eq!(cs, ClipOutcome::Clipped(Segment::from_coords(10, 9, 5, 5)));
        assert_eq!(lb, ClipOutcome::Clipped(Segment::from_coords(5, 5, 10, 9)));
    }

    #[test]
    fn test_cohen_sutherland_swaps_inside_first() {
        let seg = Segment::from_coords(5, 5, 15, 5);
        let cs = clip(seg, WINDOW, ClipAlgorithm::CohenSutherland);
        assert_eq!(cs.segment(), Some(Segment::from_coords(10, 5, 5, 5)));
    }

    #[test]
    fn test_crossing_through_window() {
        let seg = Segment::from_coords(-5, 5, 15, 5);
        let (cs, lb) = both(seg, WINDOW);
        assert_eq!(cs, ClipOutcome::Clipped(Segment::from_coords(10, 5, 0, 5)));
        assert_eq!(lb, ClipOutcome::Clipped(Segment::from_coords(0, 5, 10, 5)));
    }

    #[test]
    fn test_corner_region_sequential_boundaries() {
        // The outside endpoint carries both LEFT and BOTTOM; both are applied in one
        // pass and a second pass pulls it back inside.
        let seg = Segment::from_coords(-5, -1, 10, 10);
        let window = ClipWindow::new(0, 0, 20, 20);
        let cs = clip(seg, window, ClipAlgorithm::CohenSutherland);
        assert_eq!(cs, ClipOutcome::Clipped(Segment::from_coords(0, 2, 10, 10)));
    }

    #[test]
    fn test_corner_level_with_other_endpoint() {
        let seg = Segment::from_coords(-5, -5, 0, 3);
        let cs = clip(seg, WINDOW, ClipAlgorithm::CohenSutherland);
        assert_eq!(cs, ClipOutcome::Clipped(Segment::from_coords(0, 3, 0, 3)));
    }

    #[test]
    fn test_liang_barsky_rejects_after_last_boundary() {
        // Exit through ymax happens before entry through xmin.
        let seg = Segment::from_coords(0, 0, 20, 10);
        let window = ClipWindow::new(10, 0, 20, 4);
        assert!(clip(seg, window, ClipAlgorithm::LiangBarsky).is_rejected());
        assert!(clip(seg, window, ClipAlgorithm::CohenSutherland).is_rejected());
    }

    #[test]
    fn test_liang_barsky_parallel_outside() {
        let seg = Segment::from_coords(2, 12, 8, 12);
        assert!(clip(seg, WINDOW, ClipAlgorithm::LiangBarsky).is_rejected());
    }

    #[test]
    fn test_degenerate_point_segment() {
        let inside = Segment::from_coords(4, 4, 4, 4);
        let (cs, lb) = both(inside, WINDOW);
        assert_eq!(cs, ClipOutcome::Visible(inside));
        assert_eq!(lb, ClipOutcome::Visible(inside));

        let outside = Segment::from_coords(40, 4, 40, 4);
        let (cs, lb) = both(outside, WINDOW);
        assert!(cs.is_rejected() && lb.is_rejected());
    }

    #[test]
    fn test_boundary_points_are_inside() {
        let seg = Segment::from_coords(0, 0, 10, 10);
        let (cs, lb) = both(seg, WINDOW);
        assert_eq!(cs, ClipOutcome::Visible(seg));
        assert_eq!(lb, ClipOutcome::Visible(seg));
    }

    #[test]
    fn test_round_half_up_truncates_toward_zero() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-0.7), 0);
    }

    #[test]
    fn test_outcode_bits() {
        assert_eq!(outcode(-1, 5, &WINDOW), LEFT);
        assert_eq!(outcode(11, 11, &WINDOW), RIGHT | TOP);
        assert_eq!(outcode(5, -3, &WINDOW), BOTTOM);
        assert_eq!(outcode(5, 5, &WINDOW), 0);
    }

    #[test]
    fn test_pass_cap_rejects() {
        let config = RasterConfig {
            max_clip_passes: 1,
            ..RasterConfig::default()
        };
        let seg = Segment::from_coords(-5, 5, 15, 5);
        let outcome = clip_with(seg, WINDOW, ClipAlgorithm::CohenSutherland, &config);
        assert!(outcome.is_rejected());
    }

    #[test]
    fn test_zero_pass_cap_runs_one_pass() {
        let config = RasterConfig {
            max_clip_passes: 0,
            ..RasterConfig::default()
        };
        let seg = Segment::from_coords(5, 5, 15, 5);
        let outcome = clip_with(seg, WINDOW, ClipAlgorithm::CohenSutherland, &config);
        assert!(outcome.is_rejected());
        let inside = Segment::from_coords(2, 3, 8, 7);
        let outcome = clip_with(inside, WINDOW, ClipAlgorithm::CohenSutherland, &config);
        assert_eq!(outcome, ClipOutcome::Visible(inside));
    }

    #[test]
    fn test_full_range_segment_crosses_far_corner() {
        let seg = Segment::from_coords(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        let window = ClipWindow::new(i32::MAX - 2, i32::MIN + 2, i32::MAX - 1, i32::MAX - 1);
        let (cs, lb) = both(seg, window);
        let (a, b) = (i32::MAX - 2, i32::MAX - 1);
        assert_eq!(cs, ClipOutcome::Clipped(Segment::from_coords(b, b, a, a)));
        assert_eq!(lb, ClipOutcome::Clipped(Segment::from_coords(a, a, b, b)));
    }

    #[test]
    fn test_cross_x_wide_factors() {
        let (min, max) = (i64::from(i32::MIN), i64::from(i32::MAX));
        assert_eq!(cross_x(min, min, max, max, 0), 0);
        assert_eq!(cross_y(min, min, max, max, max - 1), max - 1);
    }
}
