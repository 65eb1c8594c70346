//! Steppable planar geometry engines for visualization and teaching.
//!
//! Three algorithms share one contract ([`stepper::Stepper`]): construct from flat
//! coordinate buffers, advance one logical step at a time, and read the trace buffers a
//! renderer draws between steps.
//!
//! - `hull`: QuickHull and gift wrapping (Jarvis march).
//! - `sweep`: Chan's red/blue segment intersection by trapezoid sweep.
//! - `rand2`: seeded inputs for benches, property tests and the CLI.
//!
//! API Policy
//! - Engines never fail. Degenerate inputs resolve to documented sentinels or `None`.
//! - Breaking changes are fine while the crate is internal; prefer `api` or `prelude`
//!   imports over deep paths.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod rand2;
pub mod stepper;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::Point;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        flatten_points, points_from_flat, signed_area, Color, Endpoint, EndpointKind, Point,
        Segment,
    };
    pub use crate::hull::{GiftWrap, QuickHull};
    pub use crate::rand2::{draw_points, draw_segments, PointsCfg, ReplayToken, SegmentsCfg};
    pub use crate::stepper::Stepper;
    pub use crate::sweep::{ColoredSegments, SweepCfg, Trapezoid, TrapezoidSweep, Wall};
    pub use nalgebra::Vector2 as Vec2;
}
