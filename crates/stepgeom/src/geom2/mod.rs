//! Planar primitives and predicates shared by the hull and sweep engines.
//!
//! Purpose
//! - `Point` with exact equality and lexicographic order; flat-buffer codecs.
//! - `Endpoint`/`Segment` with the sweep-time fields used by the trapezoid sweep.
//! - Side, distance, and turn-angle predicates in plain `f64` (no exact arithmetic).
//!
//! Degeneracies resolve to documented sentinels (`None`, [`DEGENERATE_ANGLE`]) rather
//! than errors.

mod segment;
mod types;
mod util;

pub use segment::{intersect, meet, Color, Endpoint, EndpointKind, Segment};
pub use types::{
    flatten_points, points_from_flat, Point, BOUNDARY_MARGIN, DEGENERATE_ANGLE, VERTICAL_NUDGE,
};
pub use util::{distance_sq_to_line, side, signed_area, turn_angle};
