//! Seeded random inputs for the engines (points and colored segment sets).
//!
//! Model
//! - Points are uniform in the square `[-extent, extent]²`.
//! - Blue segments each live in their own horizontal band and red segments in their own
//!   vertical band. Bands of one color are pairwise disjoint, so no two segments of the same
//!   color meet, which the trapezoid sweep requires of its input.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so a draw can
//!   be reproduced from the pair alone.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sweep::ColoredSegments;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointsCfg {
    pub count: usize,
    /// Half side length of the sampling square around the origin.
    pub extent: f64,
}

impl Default for PointsCfg {
    fn default() -> Self {
        Self {
            count: 32,
            extent: 100.0,
        }
    }
}

/// Colored segment sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentsCfg {
    pub blue: usize,
    pub red: usize,
    /// Half side length of the square holding every segment.
    pub extent: f64,
    /// Fraction of each band's width actually used; the rest separates neighbouring bands.
    /// Clamped to [0.05, 0.95].
    pub band_fill: f64,
}

impl Default for SegmentsCfg {
    fn default() -> Self {
        Self {
            blue: 8,
            red: 8,
            extent: 100.0,
            band_fill: 0.8,
        }
    }
}

/// Draw `cfg.count` points as a flat `(x, y, ...)` buffer.
pub fn draw_points(cfg: PointsCfg, tok: ReplayToken) -> Vec<f64> {
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.abs().max(1e-9);
    let mut out = Vec::with_capacity(2 * cfg.count);
    for _ in 0..cfg.count {
        let p = Vector2::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e));
        out.extend_from_slice(&[p.x, p.y]);
    }
    out
}

/// Draw blue segments in horizontal bands and red segments in vertical bands.
pub fn draw_segments(cfg: SegmentsCfg, tok: ReplayToken) -> ColoredSegments {
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.abs().max(1e-9);
    let fill = cfg.band_fill.clamp(0.05, 0.95);
    let blue = banded(&mut rng, cfg.blue, e, fill)
        .flat_map(|(across, band)| [across.x, band.x, across.y, band.y])
        .collect();
    let red = banded(&mut rng, cfg.red, e, fill)
        .flat_map(|(across, band)| [band.x, across.x, band.y, across.y])
        .collect();
    ColoredSegments::new(blue, red)
}

/// `n` segments as `(free coordinates, banded coordinates)`; band `k` owns a disjoint slice
/// of `[-e, e]` on the banded axis, the free axis spans all of it.
fn banded<'r, R: Rng>(
    rng: &'r mut R,
    n: usize,
    e: f64,
    fill: f64,
) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + 'r {
    let width = if n == 0 { 0.0 } else { 2.0 * e / n as f64 };
    let pad = 0.5 * (1.0 - fill) * width;
    (0..n).map(move |k| {
        let lo = -e + k as f64 * width + pad;
        let hi = lo + fill * width;
        let across = Vector2::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e));
        let band = Vector2::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi));
        (across, band)
    })
}
