//! Red/blue segment intersection by trapezoid sweep (Chan), one event per step.
//!
//! Each step handles one endpoint in lexicographic order:
//! 1. move the sweep to the endpoint's x and refresh both status lists;
//! 2. retire the trapezoids emitted by the previous step;
//! 3. emit the trapezoid(s) bounded by the blue neighbors of the event's segment;
//! 4. advance red frontiers past every red/blue crossing left of the sweep;
//! 5. insert (left endpoint) or remove (right endpoint) the segment.
//!
//! Segments of one color are assumed not to cross each other. Crossings are reported at
//! most once per red segment and blue neighbor chain through the red frontier `x0`.

use crate::geom2::{intersect, meet, Color, Endpoint, EndpointKind, Point, Segment};
use crate::stepper::Stepper;

use super::status::{Direction, StatusList};
use super::types::{ColoredSegments, SegmentId, SweepCfg, Trapezoid, Wall};

/// One queue entry: an endpoint and the segment it belongs to.
#[derive(Clone, Copy, Debug)]
pub struct Event {
    pub endpoint: Endpoint,
    pub segment: SegmentId,
}

/// Trace buffers of a [`TrapezoidSweep`] run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrapezoidSweepSnapshot {
    pub sweepline_x: f64,
    pub current_endpoint: Option<Point>,
    pub current_color: Option<Color>,
    pub intersections: Vec<f64>,
    pub current: Vec<f64>,
    pub finished: Vec<f64>,
    pub walls: Vec<f64>,
}

#[derive(Clone, Debug)]
pub struct TrapezoidSweep {
    cfg: SweepCfg,
    segments: Vec<Segment>,
    /// Sorted once at construction and walked by `cursor`; never mutated afterwards.
    queue: Vec<Event>,
    cursor: usize,
    current_event: Option<Event>,
    x_sweep: f64,
    x_red: Option<f64>,
    l_red: StatusList,
    l_blue: StatusList,
    y_min: f64,
    y_max: f64,
    intersections: Vec<Point>,
    current: Vec<Trapezoid>,
    finished: Vec<Trapezoid>,
    walls: Vec<Wall>,
    done: bool,
}

impl TrapezoidSweep {
    /// Build from flat `(x1, y1, x2, y2, ...)` buffers of blue and red segments.
    pub fn new(blue: &[f64], red: &[f64]) -> Self {
        Self::with_cfg(blue, red, SweepCfg::default())
    }

    pub fn with_cfg(blue: &[f64], red: &[f64], cfg: SweepCfg) -> Self {
        let mut sweep = TrapezoidSweep {
            cfg,
            segments: Vec::new(),
            queue: Vec::new(),
            cursor: 0,
            current_event: None,
            x_sweep: 0.0,
            x_red: None,
            l_red: StatusList::new(),
            l_blue: StatusList::new(),
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
            intersections: Vec::new(),
            current: Vec::new(),
            finished: Vec::new(),
            walls: Vec::new(),
            done: false,
        };
        sweep.load(blue, Color::Blue);
        sweep.load(red, Color::Red);
        // Stable: coincident endpoints keep insertion order (blue first, then input order).
        sweep.queue.sort_by(|a, b| a.endpoint.point.lex_cmp(&b.endpoint.point));
        sweep.done = sweep.queue.is_empty();
        tracing::debug!(
            segments = sweep.segments.len(),
            events = sweep.queue.len(),
            "trapezoid sweep initialized"
        );
        sweep
    }

    fn load(&mut self, coords: &[f64], color: Color) {
        for c in coords.chunks_exact(4) {
            let nudge = self.cfg.vertical_nudge;
            let s = Segment::from_coords_nudged(c[0], c[1], c[2], c[3], color, nudge);
            let id = SegmentId(self.segments.len());
            for e in [s.left, s.right] {
                self.y_min = self.y_min.min(e.y());
                self.y_max = self.y_max.max(e.y());
                self.queue.push(Event {
                    endpoint: e,
                    segment: id,
                });
            }
            self.segments.push(s);
        }
    }

    /// Run the whole sweep.
    pub fn sweep(&mut self) -> &[Point] {
        self.run_to_completion();
        &self.intersections
    }

    pub fn cfg(&self) -> SweepCfg {
        self.cfg
    }

    pub fn sweepline_x(&self) -> f64 {
        self.x_sweep
    }

    /// Frontier of the red segment advanced most recently, if any.
    pub fn x_red(&self) -> Option<f64> {
        self.x_red
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }

    /// Events in processing order.
    pub fn events(&self) -> &[Event] {
        &self.queue
    }

    /// Status list of one color, ordered by `y_sweep` at [`TrapezoidSweep::sweepline_x`].
    pub fn status(&self, color: Color) -> &StatusList {
        match color {
            Color::Red => &self.l_red,
            Color::Blue => &self.l_blue,
        }
    }

    /// `(y_min, y_max)` over all input endpoints.
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Endpoint handled by the last step.
    pub fn current_endpoint(&self) -> Option<Endpoint> {
        self.current_event.map(|e| e.endpoint)
    }

    /// x of the last handled endpoint, `+∞` before the first step.
    pub fn current_endpoint_x(&self) -> f64 {
        self.current_endpoint().map_or(f64::INFINITY, |e| e.x())
    }

    /// y of the last handled endpoint, `+∞` before the first step.
    pub fn current_endpoint_y(&self) -> f64 {
        self.current_endpoint().map_or(f64::INFINITY, |e| e.y())
    }

    pub fn current_segment(&self) -> Option<&Segment> {
        self.current_event.map(|e| &self.segments[e.segment.0])
    }

    pub fn current_segment_color(&self) -> Option<Color> {
        self.current_segment().map(|s| s.color)
    }

    pub fn intersection_points(&self) -> &[Point] {
        &self.intersections
    }

    /// Reported crossings as a flat `(x, y, ...)` buffer.
    pub fn intersections(&self) -> Vec<f64> {
        crate::geom2::flatten_points(&self.intersections)
    }

    pub fn current_trapezoids(&self) -> &[Trapezoid] {
        &self.current
    }

    pub fn finished_trapezoids(&self) -> &[Trapezoid] {
        &self.finished
    }

    /// The decomposition so far: finished trapezoids followed by the current ones.
    pub fn trapezoids(&self) -> Vec<Trapezoid> {
        self.finished.iter().chain(&self.current).copied().collect()
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Trapezoids emitted by the last step, 8 coordinates each.
    pub fn current(&self) -> Vec<f64> {
        self.current.iter().flat_map(|t| t.to_flat()).collect()
    }

    /// Trapezoids retired before the last step, 8 coordinates each.
    pub fn finished(&self) -> Vec<f64> {
        self.finished.iter().flat_map(|t| t.to_flat()).collect()
    }

    /// Right walls of every trapezoid emitted so far, 4 coordinates each.
    pub fn trapezoid_walls(&self) -> Vec<f64> {
        self.walls.iter().flat_map(|w| w.to_flat()).collect()
    }

    fn process(&mut self, event: Event) {
        let id = event.segment;
        let p = event.endpoint;
        self.current_event = Some(event);
        self.x_sweep = p.x();

        self.segments[id.0].y_sweep = p.y();
        self.l_red.refresh(&mut self.segments, self.x_sweep);
        self.l_blue.refresh(&mut self.segments, self.x_sweep);

        self.finished.append(&mut self.current);

        let seg = self.segments[id.0];
        tracing::trace!(
            x = p.x(),
            y = p.y(),
            color = ?seg.color,
            kind = ?p.kind,
            "sweep event"
        );
        if seg.color == Color::Blue && p.kind == EndpointKind::Right {
            // The blue segment leaves: the regions above and below it both close here.
            let above = self.l_blue.search(seg.y_sweep, Direction::Up, &self.segments);
            let below = self.l_blue.search(seg.y_sweep, Direction::Down, &self.segments);
            self.add_trapezoid(above, Some(id));
            self.add_trapezoid(Some(id), below);

            let up = self.l_blue.neighbor(id, Direction::Up);
            let down = self.l_blue.neighbor(id, Direction::Down);
            self.advance(up);
            self.advance(Some(id));
            self.advance(down);
        } else {
            let above = self.l_blue.search(seg.y_sweep, Direction::Up, &self.segments);
            let below = self.l_blue.search(seg.y_sweep, Direction::Down, &self.segments);
            self.add_trapezoid(above, below);
            self.advance(above);
            self.advance(below);
        }

        let list = match seg.color {
            Color::Red => &mut self.l_red,
            Color::Blue => &mut self.l_blue,
        };
        match p.kind {
            EndpointKind::Left => list.insert(id, &self.segments),
            EndpointKind::Right => {
                list.remove(id);
            }
        }
    }

    /// Crossing x of `red` and `blue` if it lies strictly between the red frontier and the
    /// sweep line, i.e. it is due for reporting.
    fn due_meet(&self, red: SegmentId, blue: SegmentId) -> Option<f64> {
        let r = &self.segments[red.0];
        let m = meet(r, &self.segments[blue.0])?;
        (r.x0 < m && m < self.x_sweep).then_some(m)
    }

    /// For each red segment reached from blue segment `s` in either direction: report its
    /// crossing with `s` and with the further blue segments it crossed on the way, then move
    /// its frontier to the crossing with `s`.
    fn advance(&mut self, s: Option<SegmentId>) {
        let Some(s) = s else {
            return;
        };
        for dir in [Direction::Up, Direction::Down] {
            let key = self.segments[s.0].y_sweep;
            let mut red = self.l_red.search(key, dir, &self.segments);
            while let Some(r) = red {
                let Some(m) = self.due_meet(r, s) else {
                    break;
                };
                let mut blue = Some(s);
                while let Some(b) = blue {
                    if self.due_meet(r, b).is_none() {
                        break;
                    }
                    self.report(r, b);
                    blue = self.l_blue.neighbor(b, dir.opposite());
                }
                self.segments[r.0].x0 = m;
                self.x_red = Some(m);
                red = self.l_red.neighbor(r, dir);
            }
        }
    }

    fn report(&mut self, red: SegmentId, blue: SegmentId) {
        if let Some(p) = intersect(&self.segments[red.0], &self.segments[blue.0]) {
            tracing::debug!(x = p.x, y = p.y, red = red.0, blue = blue.0, "intersection reported");
            self.intersections.push(p);
        }
    }

    /// Emit the trapezoid between `upper` and `lower` that closes at the sweep line.
    /// A missing bound is replaced by the synthetic boundary `y_max + margin` (top) or
    /// `y_min - margin` (bottom), so the result is always a closed quadrilateral.
    fn add_trapezoid(&mut self, upper: Option<SegmentId>, lower: Option<SegmentId>) {
        let x = self.x_sweep;
        let top = self.y_max + self.cfg.boundary_margin;
        let bottom = self.y_min - self.cfg.boundary_margin;

        let t = match (upper, lower) {
            (Some(u), Some(l)) => {
                let (su, sl) = (&self.segments[u.0], &self.segments[l.0]);
                // The left wall sits where the later of the two bounds entered.
                let (top_left, bottom_left) = if su.left.point > sl.left.point {
                    let lx = su.left.x();
                    (su.left.point, Point::new(lx, sl.sweep_y(lx)))
                } else {
                    let lx = sl.left.x();
                    (Point::new(lx, su.sweep_y(lx)), sl.left.point)
                };
                Trapezoid {
                    top_left,
                    bottom_left,
                    bottom_right: Point::new(x, sl.y_sweep),
                    top_right: Point::new(x, su.y_sweep),
                }
            }
            (None, Some(l)) => {
                let sl = &self.segments[l.0];
                Trapezoid {
                    top_left: Point::new(sl.left.x(), top),
                    bottom_left: sl.left.point,
                    bottom_right: Point::new(x, sl.y_sweep),
                    top_right: Point::new(x, top),
                }
            }
            (Some(u), None) => {
                let su = &self.segments[u.0];
                Trapezoid {
                    top_left: su.left.point,
                    bottom_left: Point::new(su.left.x(), bottom),
                    bottom_right: Point::new(x, bottom),
                    top_right: Point::new(x, su.y_sweep),
                }
            }
            (None, None) => {
                let left_x = match self.current_event {
                    Some(e) if e.endpoint.kind == EndpointKind::Right => {
                        self.segments[e.segment.0].left.x()
                    }
                    _ => self.queue.first().map_or(x, |e| e.endpoint.x()),
                };
                Trapezoid {
                    top_left: Point::new(left_x, top),
                    bottom_left: Point::new(left_x, bottom),
                    bottom_right: Point::new(x, bottom),
                    top_right: Point::new(x, top),
                }
            }
        };
        self.walls.push(Wall {
            top: t.top_right,
            bottom: t.bottom_right,
        });
        self.current.push(t);
    }
}

impl Stepper for TrapezoidSweep {
    type Input = ColoredSegments;
    type Snapshot = TrapezoidSweepSnapshot;

    fn construct(input: &ColoredSegments) -> Self {
        TrapezoidSweep::new(&input.blue, &input.red)
    }

    fn next_step(&mut self) -> bool {
        if self.done {
            return true;
        }
        let event = self.queue[self.cursor];
        self.process(event);
        self.cursor += 1;
        if self.cursor >= self.queue.len() {
            self.done = true;
            tracing::debug!(
                intersections = self.intersections.len(),
                trapezoids = self.finished.len() + self.current.len(),
                "sweep finished"
            );
        }
        self.done
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn snapshot(&self) -> TrapezoidSweepSnapshot {
        TrapezoidSweepSnapshot {
            sweepline_x: self.x_sweep,
            current_endpoint: self.current_endpoint().map(|e| e.point),
            current_color: self.current_segment_color(),
            intersections: self.intersections(),
            current: self.current(),
            finished: self.finished(),
            walls: self.trapezoid_walls(),
        }
    }
}
