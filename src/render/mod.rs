//! Scan conversion of lines, polygons and ellipses into pixel sequences.
//!
//! # Algorithms
//!
//! - **Naive**: per-column line equation, correctness baseline only
//! - **DDA**: floating-point digital differential analyzer
//! - **Bresenham's Line**: integer decision-variable line drawing
//! - **Midpoint Ellipse**: two-region outline generation with quadrant mirroring
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

mod ellipse;
mod line;

pub use ellipse::draw_ellipse;
pub use line::{draw_line, draw_line_with, draw_polygon, draw_polygon_with};
