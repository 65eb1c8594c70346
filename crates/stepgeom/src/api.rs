//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Not a public API. A convenience surface for the CLI, benches and tests; breaking
//!   changes are allowed.

// Primitives and predicates
pub use crate::geom2::{
    distance_sq_to_line, flatten_points, intersect, meet, points_from_flat, side, signed_area,
    turn_angle, Color, Endpoint, EndpointKind, Point, Segment, BOUNDARY_MARGIN,
    DEGENERATE_ANGLE, VERTICAL_NUDGE,
};
// Engines
pub use crate::hull::{GiftWrap, GiftWrapSnapshot, QuickHull, QuickHullSnapshot};
pub use crate::stepper::Stepper;
pub use crate::sweep::{
    ColoredSegments, SegmentId, SweepCfg, Trapezoid, TrapezoidSweep, TrapezoidSweepSnapshot,
    Wall,
};
// Random inputs
pub use crate::rand2::{
    draw_points, draw_segments, PointsCfg, ReplayToken as InputReplay, SegmentsCfg,
};
