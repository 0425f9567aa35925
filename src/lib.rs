//! # Trueno-Raster
//!
//! Scan conversion, curve evaluation, affine transforms and line clipping for
//! 2D vector primitives on an integer pixel grid.
//!
//! The library only computes point sequences; displaying them is up to the caller.
//! Every operation is a pure function of its inputs.
//!
//! ## Features
//!
//! - **Lines**: Naive, DDA and Bresenham scan conversion, plus polygon outlines
//! - **Ellipses**: midpoint algorithm with four-way symmetry
//! - **Curves**: Bézier (De Casteljau) and uniform cubic B-spline (Cox–de Boor)
//! - **Transforms**: translate, rotate and scale point lists about a pivot
//! - **Clipping**: Cohen-Sutherland and Liang-Barsky against an axis-aligned window
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let pixels = draw_line(Point::new(0, 0), Point::new(4, 2), LineAlgorithm::Bresenham);
//! assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
//! assert_eq!(pixels.last(), Some(&Point::new(4, 2)));
//!
//! let window = ClipWindow::new(0, 0, 10, 10);
//! let outcome = clip(Segment::from_coords(-5, 5, 5, 5), window, ClipAlgorithm::LiangBarsky);
//! assert_eq!(outcome.segment(), Some(Segment::from_coords(0, 5, 5, 5)));
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML configuration loading
//! - `cli`: the `trueno-raster` script runner
//! - `wasm`: WebAssembly bindings
//! - `full`: `config` and `cli`
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal 4(1).
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a
//!   digital plotter." Computer Journal 10(3).
//! - de Boor, C. (1972). "On calculating with B-splines." J. Approx. Theory 6.
//! - Liang, Y. D., & Barsky, B. A. (1984). "A New Concept and Method for Line
//!   Clipping." ACM TOG 3(1).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Pixel math truncates floats to grid coordinates throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Points, segments and clip windows.
pub mod geometry;

/// Algorithm tags.
pub mod algorithm;

/// Numeric policy and YAML configuration.
pub mod config;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Line, polygon and ellipse scan conversion.
pub mod render;

/// Bézier and B-spline curves.
pub mod curve;

/// Affine transforms.
pub mod transform;

/// Line clipping.
pub mod clip;

// ============================================================================
// Interface Modules
// ============================================================================

/// Primitive descriptors and the [`primitive::Rasterize`] trait.
pub mod primitive;

/// Text command interface.
pub mod command;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
    pub use crate::clip::{clip, ClipOutcome};
    pub use crate::command::{parse_command, parse_script, Command};
    pub use crate::config::RasterConfig;
    pub use crate::curve::draw_curve;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{ClipWindow, Point, Segment};
    pub use crate::primitive::{Primitive, Rasterize};
    pub use crate::render::{draw_ellipse, draw_line, draw_polygon};
    pub use crate::transform::{rotate, scale, translate, Transform};
}
