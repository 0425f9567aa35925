//! Text command interface.
//!
//! A small DSL for driving the rasterizer from scripts, one command per line.
//!
//! # Syntax
//!
//! ```text
//! <command> points=[[x,y],...] [options...]
//!
//! Commands: line, polygon, ellipse, curve, translate, rotate, scale, clip
//!
//! Options:
//!   algorithm=Bresenham|DDA|Naive         - line and polygon
//!   algorithm=Bezier|B-spline             - curve
//!   algorithm=Cohen-Sutherland|Liang-Barsky - clip
//!   dx=3 dy=-2                            - translate offsets
//!   pivot=[x,y]                           - rotate/scale center
//!   angle=90                              - rotate, clockwise degrees
//!   factor=0.5                            - scale factor
//!   window=[xmin,ymin,xmax,ymax]          - clip window
//! ```
//!
//! # Example
//!
//! ```rust
//! use trueno_raster::command::parse_command;
//! use trueno_raster::geometry::Point;
//!
//! let cmd = parse_command("line points=[[0,0],[3,0]] algorithm=DDA").unwrap();
//! let pixels = cmd.execute().unwrap();
//! assert_eq!(pixels.last(), Some(&Point::new(3, 0)));
//! ```

use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
use crate::clip::clip_with;
use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Point, Segment};
use crate::primitive::{Primitive, Rasterize};
use crate::transform::Transform;

/// A parsed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Rasterize a primitive.
    Draw(Primitive),
    /// Transform a point list.
    Transform {
        /// Points to transform.
        points: Vec<Point>,
        /// The transform.
        transform: Transform,
    },
    /// Clip a segment.
    Clip {
        /// Segment to clip.
        segment: Segment,
        /// Clip window.
        window: ClipWindow,
        /// Clipping algorithm.
        algorithm: ClipAlgorithm,
    },
}

impl Command {
    /// Execute with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization fails.
    pub fn execute(&self) -> Result<Vec<Point>> {
        self.execute_with(&RasterConfig::default())
    }

    /// Execute with explicit configuration.
    ///
    /// Draw commands yield pixels, transforms yield the moved points and clips
    /// yield the visible segment, or `[[0,0],[0,0]]` when nothing is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization fails or `config` is invalid.
    pub fn execute_with(&self, config: &RasterConfig) -> Result<Vec<Point>> {
        config.validate()?;
        match self {
            Self::Draw(primitive) => primitive.rasterize_with(config),
            Self::Transform { points, transform } => Ok(transform.apply(points)),
            Self::Clip {
                segment,
                window,
                algorithm,
            } => {
                let outcome = clip_with(*segment, *window, *algorithm, config);
                Ok(outcome.to_sentinel().to_points().to_vec())
            }
        }
    }
}

/// Options collected from `key=value` tokens.
#[derive(Debug, Default)]
struct Options {
    points: Option<Vec<Point>>,
    algorithm: Option<String>,
    dx: i32,
    dy: i32,
    pivot: Point,
    angle: Option<f64>,
    factor: Option<f64>,
    window: Option<ClipWindow>,
}

impl Options {
    fn points(&mut self, command: &str) -> Result<Vec<Point>> {
        self.points
            .take()
            .ok_or_else(|| Error::Parse(format!("{command} requires points=[[x,y],...]")))
    }

    fn algorithm<T>(&self) -> Result<T>
    where
        T: std::str::FromStr<Err = Error> + Default,
    {
        self.algorithm.as_deref().map_or_else(|| Ok(T::default()), str::parse)
    }
}

/// Parse a single command line.
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed text, [`Error::UnknownAlgorithm`] for
/// unknown tags and [`Error::InvalidArgument`] for wrong point counts.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Err(Error::Parse("Empty command".into()));
    }

    let tokens = tokenize(line)?;
    let (name, rest) = tokens
        .split_first()
        .ok_or_else(|| Error::Parse("No command specified".into()))?;
    let name = name.to_lowercase();

    let mut opts = Options::default();
    for token in rest {
        let Some((key, value)) = token.split_once('=') else {
            return Err(Error::Parse(format!("Expected key=value, got: {token}")));
        };
        match key.to_lowercase().as_str() {
            "points" => opts.points = Some(parse_points(value)?),
            "algorithm" => opts.algorithm = Some(value.to_string()),
            "dx" => opts.dx = parse_number(key, value)?,
            "dy" => opts.dy = parse_number(key, value)?,
            "pivot" => opts.pivot = parse_pivot(value)?,
            "angle" => opts.angle = Some(parse_finite(key, value)?),
            "factor" => opts.factor = Some(parse_finite(key, value)?),
            "window" => opts.window = Some(parse_window(value)?),
            other => tracing::warn!(option = other, "ignoring unknown option"),
        }
    }

    let command = match name.as_str() {
        "line" => Command::Draw(Primitive::line(&opts.points(&name)?, opts.algorithm()?)?),
        "polygon" => Command::Draw(Primitive::polygon(&opts.points(&name)?, opts.algorithm()?)?),
        "ellipse" => Command::Draw(Primitive::ellipse(&opts.points(&name)?)?),
        "curve" => {
            let algorithm: CurveAlgorithm = opts.algorithm()?;
            Command::Draw(Primitive::curve(&opts.points(&name)?, algorithm)?)
        }
        "translate" => Command::Transform {
            points: opts.points(&name)?,
            transform: Transform::Translate {
                dx: opts.dx,
                dy: opts.dy,
            },
        },
        "rotate" => {
            let degrees = opts
                .angle
                .ok_or_else(|| Error::Parse("rotate requires angle=<degrees>".into()))?;
            Command::Transform {
                points: opts.points(&name)?,
                transform: Transform::Rotate {
                    pivot: opts.pivot,
                    degrees,
                },
            }
        }
        "scale" => {
            let factor = opts
                .factor
                .ok_or_else(|| Error::Parse("scale requires factor=<value>".into()))?;
            Command::Transform {
                points: opts.points(&name)?,
                transform: Transform::Scale {
                    pivot: opts.pivot,
                    factor,
                },
            }
        }
        "clip" => {
            let window = opts
                .window
                .ok_or_else(|| Error::Parse("clip requires window=[xmin,ymin,xmax,ymax]".into()))?;
            let points = opts.points(&name)?;
            let algorithm: ClipAlgorithm = opts.algorithm()?;
            let [start, end] = <[Point; 2]>::try_from(points.as_slice()).map_err(|_| {
                Error::InvalidArgument(format!(
                    "clip requires exactly 2 points, got {}",
                    points.len()
                ))
            })?;
            Command::Clip {
                segment: Segment::new(start, end),
                window,
                algorithm,
            }
        }
        other => return Err(Error::Parse(format!("Unknown command: {other}"))),
    };

    tracing::trace!(?command, "parsed command");
    Ok(command)
}

/// Parse a script: one command per line.
///
/// Blank lines and `#` comments yield `None` so output stays aligned with input
/// line numbers.
///
/// # Errors
///
/// Returns the first parse error, prefixed with its 1-based line number.
pub fn parse_script(script: &str) -> Result<Vec<Option<Command>>> {
    script
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return Ok(None);
            }
            parse_command(line)
                .map(Some)
                .map_err(|e| Error::Parse(format!("line {}: {e}", i + 1)))
        })
        .collect()
}

/// Split on whitespace outside brackets, so `[[0, 0], [1, 1]]` stays one token.
fn tokenize(line: &str) -> Result<Vec<&str>> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in line.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::Parse("Unbalanced ']'".into()))?;
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    tokens.push(&line[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if depth != 0 {
        return Err(Error::Parse("Unbalanced '['".into()));
    }
    if let Some(s) = start {
        tokens.push(&line[s..]);
    }
    Ok(tokens)
}

/// Parse a 1D integer array like "[1,2,3]".
fn parse_array(s: &str) -> Result<Vec<i32>> {
    let s = s.trim();
    let inner = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| Error::Parse(format!("Expected [...], got: {s}")))?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<i32>()
                .map_err(|_| Error::Parse(format!("Invalid integer: {}", v.trim())))
        })
        .collect()
}

/// Parse a 2D matrix like "[[1,2],[3,4]]".
fn parse_matrix(s: &str) -> Result<Vec<Vec<i32>>> {
    let s = s.trim();
    if !s.starts_with('[') || !s.ends_with(']') || s.len() < 2 {
        return Err(Error::Parse("Matrix must be [[...],[...]]".into()));
    }

    let inner = &s[1..s.len() - 1];
    let mut result = Vec::new();
    let mut depth = 0usize;
    let mut current_start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '[' => {
                if depth == 0 {
                    current_start = i;
                }
                depth += 1;
            }
            ']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::Parse("Unbalanced ']'".into()))?;
                if depth == 0 {
                    result.push(parse_array(&inner[current_start..=i])?);
                }
            }
            ',' | ' ' | '\t' => {}
            c if depth == 0 => {
                return Err(Error::Parse(format!("Unexpected '{c}' in matrix")));
            }
            _ => {}
        }
    }

    Ok(result)
}

fn parse_points(s: &str) -> Result<Vec<Point>> {
    parse_matrix(s)?
        .into_iter()
        .map(|row| match row.as_slice() {
            [x, y] => Ok(Point::new(*x, *y)),
            _ => Err(Error::Parse(format!(
                "Point must have 2 coordinates, got {}",
                row.len()
            ))),
        })
        .collect()
}

fn parse_pivot(s: &str) -> Result<Point> {
    match parse_array(s)?.as_slice() {
        [x, y] => Ok(Point::new(*x, *y)),
        _ => Err(Error::Parse("pivot must be [x,y]".into())),
    }
}

fn parse_window(s: &str) -> Result<ClipWindow> {
    match parse_array(s)?.as_slice() {
        [x0, y0, x1, y1] => Ok(ClipWindow::from_corners(
            Point::new(*x0, *y0),
            Point::new(*x1, *y1),
        )),
        _ => Err(Error::Parse("window must be [xmin,ymin,xmax,ymax]".into())),
    }
}

fn parse_number(key: &str, value: &str) -> Result<i32> {
    value
        .parse()
        .map_err(|_| Error::Parse(format!("Invalid {key}: {value}")))
}

fn parse_finite(key: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::Parse(format!("Invalid {key}: {value}")))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geometry::format_points;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_parse_never_panics(line in "[a-z]{0,8}( [a-z]{1,6}=[\\[\\]0-9,\\-]{0,12}){0,3}") {
            let _ = parse_command(&line);
        }

        #[test]
        fn prop_translate_command_matches_library(
            coords in prop::collection::vec((-500i32..500, -500i32..500), 1..10),
            dx in -100i32..100,
            dy in -100i32..100,
        ) {
            let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
            let line = format!("translate points={} dx={dx} dy={dy}", format_points(&points));
            let cmd = parse_command(&line).unwrap();
            prop_assert_eq!(cmd.execute().unwrap(), crate::transform::translate(&points, dx, dy));
        }
    }
}
