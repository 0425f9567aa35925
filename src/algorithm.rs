//! Algorithm tags.
//!
//! Each operation family has a closed set of algorithms. Tags parse from the
//! names used in command scripts (`"DDA"`, `"B-spline"`, `"Liang-Barsky"`, ...)
//! case-insensitively and display back in canonical form.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Line scan-conversion algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Slope evaluation per column. Reference baseline only.
    Naive,
    /// Digital differential analyzer.
    Dda,
    /// Integer decision-variable algorithm.
    #[default]
    Bresenham,
}

/// Parametric curve algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveAlgorithm {
    /// Bézier curve via De Casteljau evaluation.
    #[default]
    Bezier,
    /// Uniform B-spline via Cox–de Boor basis evaluation.
    BSpline,
}

/// Line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipAlgorithm {
    /// Outcode-based iterative clipping.
    #[default]
    CohenSutherland,
    /// Parametric clipping.
    LiangBarsky,
}

impl LineAlgorithm {
    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "Naive",
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
        }
    }
}

impl CurveAlgorithm {
    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bezier => "Bezier",
            Self::BSpline => "B-spline",
        }
    }
}

impl ClipAlgorithm {
    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CohenSutherland => "Cohen-Sutherland",
            Self::LiangBarsky => "Liang-Barsky",
        }
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "dda" => Ok(Self::Dda),
            "bresenham" => Ok(Self::Bresenham),
            _ => Err(unknown("line", s)),
        }
    }
}

impl FromStr for CurveAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bezier" | "bézier" => Ok(Self::Bezier),
            "b-spline" | "bspline" => Ok(Self::BSpline),
            _ => Err(unknown("curve", s)),
        }
    }
}

impl FromStr for ClipAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cohen-sutherland" | "cohensutherland" => Ok(Self::CohenSutherland),
            "liang-barsky" | "liangbarsky" => Ok(Self::LiangBarsky),
            _ => Err(unknown("clip", s)),
        }
    }
}

fn unknown(family: &'static str, name: &str) -> Error {
    Error::UnknownAlgorithm {
        family,
        name: name.to_string(),
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
