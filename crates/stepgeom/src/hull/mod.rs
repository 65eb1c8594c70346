//! Steppable convex hull engines.
//!
//! - `QuickHull`: divide and conquer over an explicit frame stack; discovery order is
//!   reordered into boundary order on request.
//! - `GiftWrap`: angular wrapping; discovery order already is boundary order.
//!
//! Colinear points on the hull boundary are not treated exactly: QuickHull drops them,
//! gift wrapping may keep them depending on scan order.

mod gift_wrap;
mod quickhull;

pub use gift_wrap::{GiftWrap, GiftWrapSnapshot};
pub use quickhull::{Frame, QuickHull, QuickHullSnapshot};
