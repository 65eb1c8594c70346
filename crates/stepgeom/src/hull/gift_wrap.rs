//! Gift wrapping (Jarvis march), one candidate per step.
//!
//! Each hull vertex takes `n` scan steps; the step that scans the last candidate also
//! commits the smallest-turn candidate as the next vertex. Tie-breaks follow the
//! established output: the initial vertex is the *last* scanned point with minimal x, and
//! among equal turn angles the later-scanned candidate wins.

use crate::geom2::{flatten_points, points_from_flat, turn_angle, Point, DEGENERATE_ANGLE};
use crate::stepper::Stepper;

/// Trace buffers of a [`GiftWrap`] run (flat coordinates).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GiftWrapSnapshot {
    pub current_line: Vec<f64>,
    pub min_line: Vec<f64>,
    pub processed_lines: Vec<f64>,
    pub hull: Vec<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct GiftWrap {
    points: Vec<Point>,
    hull: Vec<Point>,
    processed: Vec<f64>,
    init: Point,
    /// Hull vertex before `endpoint`; fixes the direction the next turn is measured from.
    previous: Point,
    /// Last committed hull vertex.
    endpoint: Point,
    min_point: Point,
    min_angle: f64,
    position: usize,
    done: bool,
}

impl GiftWrap {
    /// Build from a flat `(x, y, ...)` buffer. An odd trailing coordinate is ignored.
    pub fn new(coords: &[f64]) -> Self {
        Self::from_points(points_from_flat(coords))
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        let mut gw = GiftWrap {
            points,
            min_angle: DEGENERATE_ANGLE,
            ..Default::default()
        };
        let Some(&first) = gw.points.first() else {
            gw.done = true;
            return gw;
        };
        let mut init = first;
        for &p in &gw.points {
            if p.x <= init.x {
                init = p;
            }
        }
        gw.init = init;
        gw.hull.push(init);
        tracing::debug!(vertex = %init, "hull vertex found");
        gw.endpoint = init;
        gw.min_point = init;
        gw.previous = Point::new(init.x, init.y - 1.0);
        gw.done = gw.points.len() < 2;
        gw
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Hull vertices in discovery order; a closed hull ends with the initial vertex again.
    pub fn hull_points(&self) -> &[Point] {
        &self.hull
    }

    pub fn get_convex_hull(&self) -> Vec<f64> {
        flatten_points(&self.hull)
    }

    /// Every (vertex, candidate) edge evaluated so far, four coordinates each.
    pub fn processed_lines(&self) -> Vec<f64> {
        self.processed.clone()
    }

    /// Edge from the current vertex to the candidate the next step evaluates.
    pub fn current_line(&self) -> Vec<f64> {
        if self.points.len() <= 2 {
            return Vec::new();
        }
        let p = self.points[self.position];
        vec![self.endpoint.x, self.endpoint.y, p.x, p.y]
    }

    /// Edge from the current vertex to the best candidate found in this scan.
    pub fn min_line(&self) -> Vec<f64> {
        if self.points.len() <= 2 {
            return Vec::new();
        }
        vec![
            self.endpoint.x,
            self.endpoint.y,
            self.min_point.x,
            self.min_point.y,
        ]
    }

    /// Compute the whole hull at once.
    pub fn wrap(&mut self) -> &[Point] {
        self.run_to_completion();
        &self.hull
    }

    fn scan_one(&mut self) {
        let p = self.points[self.position];
        let angle = turn_angle(self.previous, self.endpoint, p);
        if self.position == 0 || (angle <= self.min_angle && self.endpoint != p) {
            self.min_angle = angle;
            self.min_point = p;
        }
        let e = self.endpoint;
        self.processed.extend_from_slice(&[e.x, e.y, p.x, p.y]);
        self.position += 1;
    }

    fn commit(&mut self) {
        self.position = 0;
        self.previous = self.endpoint;
        self.endpoint = self.min_point;
        self.hull.push(self.endpoint);
        if self.endpoint == self.init {
            self.done = true;
            tracing::debug!(vertices = self.hull.len() - 1, "hull closed");
        } else {
            tracing::debug!(vertex = %self.endpoint, "hull vertex found");
        }
    }
}

impl Stepper for GiftWrap {
    type Input = [f64];
    type Snapshot = GiftWrapSnapshot;

    fn construct(input: &[f64]) -> Self {
        GiftWrap::new(input)
    }

    fn next_step(&mut self) -> bool {
        if self.done {
            return true;
        }
        if self.position < self.points.len() {
            self.scan_one();
        }
        if self.position >= self.points.len() {
            self.commit();
        }
        self.done
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn snapshot(&self) -> GiftWrapSnapshot {
        GiftWrapSnapshot {
            current_line: self.current_line(),
            min_line: self.min_line(),
            processed_lines: self.processed_lines(),
            hull: self.get_convex_hull(),
        }
    }
}
