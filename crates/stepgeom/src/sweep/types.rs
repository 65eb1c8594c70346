//! Data types for the trapezoid sweep: arena ids, input, configuration, output shapes.

use crate::geom2::{Point, BOUNDARY_MARGIN, VERTICAL_NUDGE};

/// Index of a segment in the sweep's arena. Both endpoint events of a segment carry the
/// same id, so the segment is shared rather than duplicated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub usize);

/// Two monochromatic segment sets as flat `(x1, y1, x2, y2, ...)` buffers.
/// Incomplete trailing groups are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColoredSegments {
    pub blue: Vec<f64>,
    pub red: Vec<f64>,
}

impl ColoredSegments {
    pub fn new(blue: Vec<f64>, red: Vec<f64>) -> Self {
        Self { blue, red }
    }
}

/// Sweep configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepCfg {
    /// Added to the first x of a vertical segment to give it a left/right order.
    pub vertical_nudge: f64,
    /// Offset of the synthetic top/bottom boundaries beyond the input's y-extent.
    pub boundary_margin: f64,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            vertical_nudge: VERTICAL_NUDGE,
            boundary_margin: BOUNDARY_MARGIN,
        }
    }
}

/// Closed quadrilateral of the decomposition; left and right sides are vertical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoid {
    pub top_left: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub top_right: Point,
}

impl Trapezoid {
    /// Corners as `top_left, bottom_left, bottom_right, top_right` (8 coordinates).
    pub fn to_flat(&self) -> [f64; 8] {
        [
            self.top_left.x,
            self.top_left.y,
            self.bottom_left.x,
            self.bottom_left.y,
            self.bottom_right.x,
            self.bottom_right.y,
            self.top_right.x,
            self.top_right.y,
        ]
    }
}

/// Vertical right wall of an emitted trapezoid, at the sweep position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub top: Point,
    pub bottom: Point,
}

impl Wall {
    pub fn to_flat(&self) -> [f64; 4] {
        [self.top.x, self.top.y, self.bottom.x, self.bottom.y]
    }
}
