//! QuickHull as an explicit work stack.
//!
//! The recursion of the textbook algorithm is materialized as a LIFO of frames
//! `(a, b, points)`: points strictly outside chord `a → b` that still need splitting.
//! One `next_step` pops one frame. Frames are pushed so that pops follow the order of the
//! recursive version (`a–c` before `c–b`).

use crate::geom2::{distance_sq_to_line, flatten_points, points_from_flat, side, Point};
use crate::stepper::Stepper;

/// Pending sub-problem: points known to lie strictly outside chord `a → b`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub a: Point,
    pub b: Point,
    pub points: Vec<Point>,
}

/// Trace buffers of a [`QuickHull`] run (flat coordinates).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuickHullSnapshot {
    pub current_points: Vec<f64>,
    pub current_line: Vec<f64>,
    pub processed_lines: Vec<f64>,
    pub processed_triangle: Vec<f64>,
    pub hull: Vec<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct QuickHull {
    points: Vec<Point>,
    l: Point,
    r: Point,
    /// Hull vertices in discovery order: `l`, `r`, then each farthest point.
    discovered: Vec<Point>,
    stack: Vec<Frame>,
    processed: Vec<f64>,
    triangle: Vec<f64>,
}

impl QuickHull {
    /// Build from a flat `(x, y, ...)` buffer. An odd trailing coordinate is ignored.
    pub fn new(coords: &[f64]) -> Self {
        Self::from_points(points_from_flat(coords))
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        let mut qh = QuickHull {
            points,
            ..Default::default()
        };
        let Some(&first) = qh.points.first() else {
            return qh;
        };
        let (mut l, mut r) = (first, first);
        for &p in &qh.points {
            if p.x < l.x {
                l = p;
            }
            if p.x > r.x {
                r = p;
            }
        }
        qh.l = l;
        qh.r = r;
        qh.discovered.push(l);
        tracing::debug!(vertex = %l, "hull vertex found");
        if qh.points.len() <= 1 {
            return qh;
        }
        qh.discovered.push(r);
        tracing::debug!(vertex = %r, "hull vertex found");
        if qh.points.len() <= 2 {
            return qh;
        }

        let mut upper = Vec::new();
        let mut lower = Vec::new();
        for &p in &qh.points {
            let s = side(r, l, p);
            if s > 0.0 {
                upper.push(p);
            } else if s < 0.0 {
                lower.push(p);
            }
        }
        qh.stack.push(Frame {
            a: l,
            b: r,
            points: lower,
        });
        qh.stack.push(Frame {
            a: r,
            b: l,
            points: upper,
        });
        qh
    }

    /// Input points (after odd-coordinate truncation).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The leftmost and rightmost input points; unconditional hull vertices.
    pub fn extremes(&self) -> (Point, Point) {
        (self.l, self.r)
    }

    pub fn discovered(&self) -> &[Point] {
        &self.discovered
    }

    /// Number of frames still waiting on the work stack.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Points of the frame the next step will split.
    pub fn current_points(&self) -> Vec<f64> {
        self.stack
            .last()
            .map(|f| flatten_points(&f.points))
            .unwrap_or_default()
    }

    /// Chord of the frame the next step will split.
    pub fn current_line(&self) -> Vec<f64> {
        self.stack
            .last()
            .map(|f| vec![f.a.x, f.a.y, f.b.x, f.b.y])
            .unwrap_or_default()
    }

    /// Every chord popped so far, four coordinates each.
    pub fn processed_lines(&self) -> Vec<f64> {
        self.processed.clone()
    }

    /// The most recently resolved triangle `a, b, c` (only `a, b` for an empty frame).
    pub fn processed_triangle(&self) -> Vec<f64> {
        self.triangle.clone()
    }

    /// Hull vertices in boundary order: `l`, the upper chain by increasing x, `r`, the
    /// lower chain by decreasing x.
    pub fn hull_points(&self) -> Vec<Point> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let (l, r) = (self.l, self.r);
        let mut upper: Vec<Point> = Vec::new();
        let mut lower: Vec<Point> = Vec::new();
        for &p in &self.discovered {
            let s = side(r, l, p);
            if s > 0.0 {
                upper.push(p);
            } else if s < 0.0 {
                lower.push(p);
            }
        }
        for chain in [&mut upper, &mut lower] {
            chain.sort_by(|a, b| a.lex_cmp(b));
            chain.dedup();
        }

        let mut hull = Vec::with_capacity(upper.len() + lower.len() + 2);
        hull.push(l);
        hull.extend(upper);
        if r != l {
            hull.push(r);
        }
        hull.extend(lower.into_iter().rev());
        hull
    }

    /// Flat form of [`QuickHull::hull_points`].
    pub fn get_convex_hull(&self) -> Vec<f64> {
        flatten_points(&self.hull_points())
    }

    fn farthest_point(a: Point, b: Point, points: &[Point]) -> Option<Point> {
        let mut best: Option<Point> = None;
        let mut best_d = 0.0;
        for &p in points {
            let d = distance_sq_to_line(a, b, p);
            if d > best_d {
                best_d = d;
                best = Some(p);
            }
        }
        best
    }
}

impl Stepper for QuickHull {
    type Input = [f64];
    type Snapshot = QuickHullSnapshot;

    fn construct(input: &[f64]) -> Self {
        QuickHull::new(input)
    }

    fn next_step(&mut self) -> bool {
        let Some(frame) = self.stack.pop() else {
            return true;
        };
        let Frame { a, b, points } = frame;
        self.processed.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        self.triangle.clear();
        self.triangle.extend_from_slice(&[a.x, a.y, b.x, b.y]);

        let Some(c) = Self::farthest_point(a, b, &points) else {
            return self.stack.is_empty();
        };
        self.discovered.push(c);
        self.triangle.extend_from_slice(&[c.x, c.y]);
        tracing::debug!(vertex = %c, "hull vertex found");

        let mut ac = Vec::new();
        let mut cb = Vec::new();
        for &p in &points {
            if side(a, c, p) > 0.0 {
                ac.push(p);
            }
            if side(c, b, p) > 0.0 {
                cb.push(p);
            }
        }
        self.stack.push(Frame { a: c, b, points: cb });
        self.stack.push(Frame { a, b: c, points: ac });
        self.stack.is_empty()
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    fn snapshot(&self) -> QuickHullSnapshot {
        QuickHullSnapshot {
            current_points: self.current_points(),
            current_line: self.current_line(),
            processed_lines: self.processed_lines(),
            processed_triangle: self.processed_triangle(),
            hull: self.get_convex_hull(),
        }
    }
}
