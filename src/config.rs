//! Numeric policy for the rasterization algorithms.
//!
//! The defaults reproduce the reference constants. With the `config` feature the
//! configuration can be loaded from YAML; every field falls back to its default.

use crate::error::{Error, Result};

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "config")]
use std::path::Path;

/// Default Bézier step numerator.
pub const DEFAULT_BEZIER_STEP_SCALE: f64 = 0.01;
/// Default B-spline order (cubic).
pub const DEFAULT_BSPLINE_ORDER: usize = 4;
/// Default B-spline parameter step.
pub const DEFAULT_BSPLINE_STEP: f64 = 0.001;
/// Smallest accepted B-spline parameter step. The parameter range never
/// exceeds 1, so this keeps a curve under ten million samples.
pub const MIN_BSPLINE_STEP: f64 = 1e-7;
/// Default cap on Bresenham inner decision loop iterations per pixel.
pub const DEFAULT_MAX_DECISION_STEPS: usize = 64;
/// Default cap on Cohen-Sutherland passes.
pub const DEFAULT_MAX_CLIP_PASSES: usize = 16;

/// Rasterization configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct RasterConfig {
    /// Numerator of the Bézier parametric step `scale / max(extent)`.
    #[cfg_attr(feature = "config", serde(default = "default_bezier_step_scale"))]
    pub bezier_step_scale: f64,

    /// B-spline order k. A curve needs at least k control points.
    #[cfg_attr(feature = "config", serde(default = "default_bspline_order"))]
    pub bspline_order: usize,

    /// B-spline parameter step.
    #[cfg_attr(feature = "config", serde(default = "default_bspline_step"))]
    pub bspline_step: f64,

    /// Cap on Bresenham inner decision loop iterations per emitted pixel.
    #[cfg_attr(feature = "config", serde(default = "default_max_decision_steps"))]
    pub max_decision_steps: usize,

    /// Cap on Cohen-Sutherland clipping passes.
    #[cfg_attr(feature = "config", serde(default = "default_max_clip_passes"))]
    pub max_clip_passes: usize,
}

#[cfg(feature = "config")]
fn default_bezier_step_scale() -> f64 {
    DEFAULT_BEZIER_STEP_SCALE
}
#[cfg(feature = "config")]
fn default_bspline_order() -> usize {
    DEFAULT_BSPLINE_ORDER
}
#[cfg(feature = "config")]
fn default_bspline_step() -> f64 {
    DEFAULT_BSPLINE_STEP
}
#[cfg(feature = "config")]
fn default_max_decision_steps() -> usize {
    DEFAULT_MAX_DECISION_STEPS
}
#[cfg(feature = "config")]
fn default_max_clip_passes() -> usize {
    DEFAULT_MAX_CLIP_PASSES
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            bezier_step_scale: DEFAULT_BEZIER_STEP_SCALE,
            bspline_order: DEFAULT_BSPLINE_ORDER,
            bspline_step: DEFAULT_BSPLINE_STEP,
            max_decision_steps: DEFAULT_MAX_DECISION_STEPS,
            max_clip_passes: DEFAULT_MAX_CLIP_PASSES,
        }
    }
}

impl RasterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Bézier step numerator.
    #[must_use]
    pub fn bezier_step_scale(mut self, scale: f64) -> Self {
        self.bezier_step_scale = scale;
        self
    }

    /// Set the B-spline order.
    #[must_use]
    pub fn bspline_order(mut self, order: usize) -> Self {
        self.bspline_order = order;
        self
    }

    /// Set the B-spline parameter step.
    #[must_use]
    pub fn bspline_step(mut self, step: f64) -> Self {
        self.bspline_step = step;
        self
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for non-positive or non-finite steps,
    /// a B-spline step below [`MIN_BSPLINE_STEP`], a B-spline order below 2, or
    /// zero iteration caps.
    pub fn validate(&self) -> Result<()> {
        if !(self.bezier_step_scale.is_finite() && self.bezier_step_scale > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "bezier_step_scale must be positive and finite, got {}",
                self.bezier_step_scale
            )));
        }
        if !(self.bspline_step.is_finite() && self.bspline_step > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "bspline_step must be positive and finite, got {}",
                self.bspline_step
            )));
        }
        if self.bspline_step < MIN_BSPLINE_STEP {
            return Err(Error::InvalidArgument(format!(
                "bspline_step must be at least {MIN_BSPLINE_STEP}, got {}",
                self.bspline_step
            )));
        }
        if self.bspline_order < 2 {
            return Err(Error::InvalidArgument(format!(
                "bspline_order must be at least 2, got {}",
                self.bspline_order
            )));
        }
        if self.max_decision_steps == 0 || self.max_clip_passes == 0 {
            return Err(Error::InvalidArgument("iteration caps must be nonzero".into()));
        }
        Ok(())
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[cfg(feature = "config")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or a validation error.
    #[cfg(feature = "config")]
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[cfg(feature = "config")]
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "using default raster config");
                Self::default()
            }
        }
    }
}
