//! WebAssembly bindings for trueno-raster.
//!
//! Point lists cross the boundary as flat `Int32Array`s: `[x0, y0, x1, y1, ...]`.
//! Every function returns a flat array in the same layout.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { draw_line, clip } from 'trueno-raster';
//!
//! await init();
//!
//! const pixels = draw_line(new Int32Array([0, 0, 10, 5]), 'Bresenham');
//! for (let i = 0; i < pixels.length; i += 2) {
//!     ctx.fillRect(pixels[i], pixels[i + 1], 1, 1);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
use crate::clip::clip_with;
use crate::command::parse_command;
use crate::config::RasterConfig;
use crate::error::Error;
use crate::geometry::{ClipWindow, Point, Segment};
use crate::primitive::{Primitive, Rasterize};
use crate::transform;

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // WASM module initialized
}

// ============================================================================
// Raster Options
// ============================================================================

/// Sampling options for curve rendering.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct RasterOptions {
    config: RasterConfig,
}

#[wasm_bindgen]
impl RasterOptions {
    /// Create default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Bézier step scale.
    #[wasm_bindgen]
    pub fn bezier_step_scale(mut self, scale: f64) -> Self {
        self.config = self.config.bezier_step_scale(scale);
        self
    }

    /// Set the B-spline parameter step.
    #[wasm_bindgen]
    pub fn bspline_step(mut self, step: f64) -> Self {
        self.config = self.config.bspline_step(step);
        self
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn unflatten(coords: &[i32]) -> crate::Result<Vec<Point>> {
    if coords.len() % 2 != 0 {
        return Err(Error::InvalidArgument(format!(
            "coordinate array length must be even, got {}",
            coords.len()
        )));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect())
}

fn flatten(points: &[Point]) -> Vec<i32> {
    points.iter().flat_map(|p| p.to_array()).collect()
}

fn config_of(options: Option<RasterOptions>) -> RasterConfig {
    options.map(|o| o.config).unwrap_or_default()
}

// ============================================================================
// Drawing Functions
// ============================================================================

/// Rasterize a line between two points.
///
/// # Arguments
///
/// * `coords` - `[x0, y0, x1, y1]`
/// * `algorithm` - `"Naive"`, `"DDA"` or `"Bresenham"`
#[wasm_bindgen]
pub fn draw_line(coords: &[i32], algorithm: &str) -> Result<Vec<i32>, JsValue> {
    let algorithm: LineAlgorithm = algorithm.parse().map_err(to_js)?;
    let points = unflatten(coords).map_err(to_js)?;
    let pixels = Primitive::line(&points, algorithm)
        .and_then(|p| p.rasterize())
        .map_err(to_js)?;
    Ok(flatten(&pixels))
}

/// Rasterize a closed polygon outline.
#[wasm_bindgen]
pub fn draw_polygon(coords: &[i32], algorithm: &str) -> Result<Vec<i32>, JsValue> {
    let algorithm: LineAlgorithm = algorithm.parse().map_err(to_js)?;
    let points = unflatten(coords).map_err(to_js)?;
    let pixels = Primitive::polygon(&points, algorithm)
        .and_then(|p| p.rasterize())
        .map_err(to_js)?;
    Ok(flatten(&pixels))
}

/// Rasterize an ellipse from two bounding-box corners.
#[wasm_bindgen]
pub fn draw_ellipse(coords: &[i32]) -> Result<Vec<i32>, JsValue> {
    let points = unflatten(coords).map_err(to_js)?;
    let pixels = Primitive::ellipse(&points)
        .and_then(|p| p.rasterize())
        .map_err(to_js)?;
    Ok(flatten(&pixels))
}

/// Sample a curve through its control points.
///
/// # Arguments
///
/// * `coords` - control points, flattened
/// * `algorithm` - `"Bezier"` or `"B-spline"`
/// * `options` - sampling options (optional)
#[wasm_bindgen]
pub fn draw_curve(
    coords: &[i32],
    algorithm: &str,
    options: Option<RasterOptions>,
) -> Result<Vec<i32>, JsValue> {
    let algorithm: CurveAlgorithm = algorithm.parse().map_err(to_js)?;
    let points = unflatten(coords).map_err(to_js)?;
    let config = config_of(options);
    let pixels = Primitive::curve(&points, algorithm)
        .and_then(|p| p.rasterize_with(&config))
        .map_err(to_js)?;
    Ok(flatten(&pixels))
}

// ============================================================================
// Transform Functions
// ============================================================================

/// Translate points by `(dx, dy)`.
#[wasm_bindgen]
pub fn translate(coords: &[i32], dx: i32, dy: i32) -> Result<Vec<i32>, JsValue> {
    let points = unflatten(coords).map_err(to_js)?;
    Ok(flatten(&transform::translate(&points, dx, dy)))
}

/// Rotate points clockwise about `(cx, cy)`.
#[wasm_bindgen]
pub fn rotate(coords: &[i32], cx: i32, cy: i32, degrees: f64) -> Result<Vec<i32>, JsValue> {
    let points = unflatten(coords).map_err(to_js)?;
    Ok(flatten(&transform::rotate(&points, Point::new(cx, cy), degrees)))
}

/// Scale points about `(cx, cy)`.
#[wasm_bindgen]
pub fn scale(coords: &[i32], cx: i32, cy: i32, factor: f64) -> Result<Vec<i32>, JsValue> {
    let points = unflatten(coords).map_err(to_js)?;
    Ok(flatten(&transform::scale(&points, Point::new(cx, cy), factor)))
}

/// Clip a segment `[x0, y0, x1, y1]` to a window.
///
/// Returns the visible segment, or `[0, 0, 0, 0]` when nothing is visible.
#[wasm_bindgen]
pub fn clip(
    coords: &[i32],
    xmin: i32,
    ymin: i32,
    xmax: i32,
    ymax: i32,
    algorithm: &str,
) -> Result<Vec<i32>, JsValue> {
    let algorithm: ClipAlgorithm = algorithm.parse().map_err(to_js)?;
    let [x0, y0, x1, y1] = <[i32; 4]>::try_from(coords).map_err(|_| {
        to_js(Error::InvalidArgument(format!(
            "clip requires 4 coordinates, got {}",
            coords.len()
        )))
    })?;
    let outcome = clip_with(
        Segment::from_coords(x0, y0, x1, y1),
        ClipWindow::new(xmin, ymin, xmax, ymax),
        algorithm,
        &RasterConfig::default(),
    );
    Ok(flatten(&outcome.to_sentinel().to_points()))
}

/// Parse and execute one text command.
#[wasm_bindgen]
pub fn run_command(line: &str) -> Result<Vec<i32>, JsValue> {
    let points = parse_command(line)
        .and_then(|cmd| cmd.execute())
        .map_err(to_js)?;
    Ok(flatten(&points))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unflatten() {
        let points = unflatten(&[1, 2, 3, 4]).unwrap();
        assert_eq!(points, vec![Point::new(1, 2), Point::new(3, 4)]);
        assert!(unflatten(&[]).unwrap().is_empty());
        assert!(unflatten(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten(&[Point::new(1, -2), Point::new(0, 5)]), vec![1, -2, 0, 5]);
    }

    #[test]
    fn test_raster_options_default() {
        let opts = RasterOptions::new();
        assert_eq!(opts.config, RasterConfig::default());
    }

    #[test]
    fn test_raster_options_builder() {
        let opts = RasterOptions::new().bezier_step_scale(0.5).bspline_step(0.01);
        assert!((opts.config.bezier_step_scale - 0.5).abs() < 1e-12);
        assert!((opts.config.bspline_step - 0.01).abs() < 1e-12);
        assert_eq!(config_of(Some(opts.clone())), opts.config);
        assert_eq!(config_of(None), RasterConfig::default());
    }

    #[test]
    fn test_translate_ok_path() {
        assert_eq!(translate(&[0, 0, 1, 1], 2, 3).unwrap(), vec![2, 3, 3, 4]);
    }
}
