//! Colored segments with left/right-tagged endpoints.
//!
//! A `Segment` carries two sweep-time fields next to its geometry:
//! - `y_sweep`: ordinate at the sweep position of the last status refresh. Stale between
//!   refreshes; only the owning status list may rely on it.
//! - `x0`: for red segments, the rightmost x up to which crossings have been reported.

use std::fmt;

use super::types::{Point, VERTICAL_NUDGE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Left,
    Right,
}

/// A point tagged with its role in the owning segment. Comparisons ignore the tag.
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    pub point: Point,
    pub kind: EndpointKind,
}

impl Endpoint {
    #[inline]
    pub fn new(point: Point, kind: EndpointKind) -> Self {
        Self { point, kind }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl PartialOrd for Endpoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.point.partial_cmp(&other.point)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.point.fmt(f)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub left: Endpoint,
    pub right: Endpoint,
    pub color: Color,
    pub y_sweep: f64,
    pub x0: f64,
}

impl Segment {
    /// Build from raw coordinates. A vertical segment has its first x nudged by
    /// [`VERTICAL_NUDGE`] before the endpoints are ordered, so `left.x < right.x` holds for
    /// every segment whose coordinates are not too large for the nudge to register.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> Self {
        Self::from_coords_nudged(x1, y1, x2, y2, color, VERTICAL_NUDGE)
    }

    pub fn from_coords_nudged(
        mut x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        nudge: f64,
    ) -> Self {
        if x1 == x2 {
            x1 += nudge;
        }
        let a = Point::new(x1, y1);
        let b = Point::new(x2, y2);
        let (l, r) = if a > b { (b, a) } else { (a, b) };
        Self {
            left: Endpoint::new(l, EndpointKind::Left),
            right: Endpoint::new(r, EndpointKind::Right),
            color,
            y_sweep: 0.0,
            x0: l.x,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.left.x() == self.right.x()
    }

    #[inline]
    pub fn endpoint(&self, kind: EndpointKind) -> Endpoint {
        match kind {
            EndpointKind::Left => self.left,
            EndpointKind::Right => self.right,
        }
    }

    /// Ordinate of the supporting line at `x`, or `None` when it falls outside the
    /// segment's y-span.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        let (l, r) = (self.left.point, self.right.point);
        let y = (l.y - r.y) / (l.x - r.x) * (x - l.x) + l.y;
        let (lo, hi) = if l.y <= r.y { (l.y, r.y) } else { (r.y, l.y) };
        if y >= lo && y <= hi {
            Some(y)
        } else {
            None
        }
    }

    /// Ordinate used for sweep ordering at `x`: the line ordinate, falling back to the
    /// nearer endpoint's y when rounding pushes it outside the span. Vertical segments
    /// report their right endpoint's y.
    pub fn sweep_y(&self, x: f64) -> f64 {
        if self.is_vertical() {
            return self.right.y();
        }
        self.y_at(x).unwrap_or_else(|| {
            if (x - self.left.x()).abs() <= (self.right.x() - x).abs() {
                self.left.y()
            } else {
                self.right.y()
            }
        })
    }

    /// Slope-intercept form `(m, b)`, or `None` for a vertical segment.
    #[inline]
    fn slope_intercept(&self) -> Option<(f64, f64)> {
        if self.is_vertical() {
            return None;
        }
        let m = (self.right.y() - self.left.y()) / (self.right.x() - self.left.x());
        Some((m, self.right.y() - m * self.right.x()))
    }

    /// Geometric equality (endpoints and color); ignores the sweep fields.
    #[inline]
    pub fn same_as(&self, other: &Segment) -> bool {
        self.left == other.left && self.right == other.right && self.color == other.color
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.left, self.right)
    }
}

/// Crossing point of two segments, or `None` for parallel lines and crossings outside
/// either segment's x-span.
///
/// A vertical segment contributes only its x; the ordinate then comes from the other one.
/// Two vertical segments count as parallel.
pub fn intersect(s1: &Segment, s2: &Segment) -> Option<Point> {
    let l1 = s1.slope_intercept();
    let l2 = s2.slope_intercept();
    let x = match (l1, l2) {
        (Some((m1, b1)), Some((m2, b2))) => {
            if m1 == m2 {
                return None;
            }
            (b1 - b2) / (m2 - m1)
        }
        (None, Some((m2, _))) => {
            // Vertical lines are treated as slope zero by the parallel check.
            if m2 == 0.0 {
                return None;
            }
            s1.left.x()
        }
        (Some((m1, _)), None) => {
            if m1 == 0.0 {
                return None;
            }
            s2.left.x()
        }
        (None, None) => return None,
    };
    let y = match (l1, l2) {
        (_, Some((m2, b2))) => m2 * x + b2,
        (Some((m1, b1)), None) => m1 * x + b1,
        (None, None) => return None,
    };
    if x < s1.left.x() || x > s1.right.x() || x < s2.left.x() || x > s2.right.x() {
        return None;
    }
    Some(Point::new(x, y))
}

/// x-coordinate where a red and a blue segment cross, if they do.
#[inline]
pub fn meet(red: &Segment, blue: &Segment) -> Option<f64> {
    intersect(red, blue).map(|p| p.x)
}
