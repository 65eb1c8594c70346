//! Planar point type and the tolerances shared by all engines.
//!
//! - `Point`: exact-equality 2D point with lexicographic (x, then y) order.
//! - Constants: vertical-segment nudge, synthetic boundary margin, degenerate angle.
//!
//! Equality is exact floating-point equality. Engines only compare points they copied
//! out of their own input, never recomputed ones.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

/// Shift applied to the first x-coordinate of a vertical segment so that its two
/// endpoints get a strict left/right order.
pub const VERTICAL_NUDGE: f64 = 1e-7;

/// Distance of the synthetic top/bottom trapezoid boundaries from the input's y-extent.
pub const BOUNDARY_MARGIN: f64 = 30.0;

/// Sentinel turn angle for zero-length direction vectors; never a strict minimum.
pub const DEGENERATE_ANGLE: f64 = std::f64::consts::PI;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lexicographic order: by `x`, ties broken by `y`. Incomparable (NaN) coordinates
    /// compare as equal so sorting never panics.
    #[inline]
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        match self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal),
            o => o,
        }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.lex_cmp(other) {
            // lex_cmp folds NaN into Equal; exact equality already handled above.
            Ordering::Equal => None,
            o => Some(o),
        }
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// Decode a flat `(x0, y0, x1, y1, ...)` buffer; an odd trailing coordinate is dropped.
pub fn points_from_flat(coords: &[f64]) -> Vec<Point> {
    coords
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect()
}

/// Encode points back into a flat coordinate buffer.
pub fn flatten_points<'a, I>(points: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut out = Vec::new();
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}
