//! Trapezoid sweep for red/blue segment intersection reporting.
//!
//! Purpose
//! - Report every crossing between a blue and a red segment set, each set free of
//!   internal crossings, with a left-to-right sweep that stops at segment endpoints.
//! - Produce, as a byproduct, the trapezoidal decomposition of the plane bounded by the
//!   blue segments, closed off by synthetic boundaries above and below the input.
//!
//! Layout
//! - `types`: arena ids, input buffers, `SweepCfg`, output shapes.
//! - `status`: the per-color sweep status ordered by `y_sweep`.
//! - `trapezoid`: the steppable engine.

mod status;
mod trapezoid;
mod types;

pub use status::{Direction, StatusList};
pub use trapezoid::{Event, TrapezoidSweep, TrapezoidSweepSnapshot};
pub use types::{ColoredSegments, SegmentId, SweepCfg, Trapezoid, Wall};

#[cfg(test)]
mod tests;
