//! Drive a steppable engine headlessly and collect its snapshots as JSON frames.

use serde_json::{json, Value};
use stepgeom::api::{
    signed_area, Color, GiftWrap, GiftWrapSnapshot, Point, QuickHull, QuickHullSnapshot,
    Stepper, TrapezoidSweep, TrapezoidSweepSnapshot,
};

/// Engines whose snapshots and final result can be written out.
pub trait Traced: Stepper {
    fn frame(snap: &Self::Snapshot) -> Value;
    fn result(&self) -> Value;
}

/// Recorded run of one engine.
#[derive(Debug)]
pub struct Trace {
    pub steps: usize,
    pub terminal: bool,
    pub frames: Vec<Value>,
    pub result: Value,
}

impl Trace {
    pub fn to_json(&self, algo: &str) -> Value {
        json!({
            "algo": algo,
            "steps": self.steps,
            "terminal": self.terminal,
            "frames": self.frames,
            "result": self.result
        })
    }
}

/// Step `engine` until terminal or until `max_steps` calls, keeping every `every`-th
/// snapshot and always the last one.
pub fn record<E: Traced>(engine: &mut E, every: usize, max_steps: Option<usize>) -> Trace {
    let every = every.max(1);
    let mut frames = Vec::new();
    let mut steps = 0;
    let mut last_recorded = None;
    while !engine.is_done() {
        if max_steps.is_some_and(|m| steps >= m) {
            break;
        }
        engine.next_step();
        steps += 1;
        if steps % every == 0 {
            frames.push(frame_at(engine, steps));
            last_recorded = Some(steps);
        }
    }
    if last_recorded != Some(steps) {
        frames.push(frame_at(engine, steps));
    }
    tracing::debug!(steps, frames = frames.len(), "trace recorded");
    Trace {
        steps,
        terminal: engine.is_done(),
        frames,
        result: engine.result(),
    }
}

fn frame_at<E: Traced>(engine: &E, step: usize) -> Value {
    json!({ "step": step, "state": E::frame(&engine.snapshot()) })
}

fn color_name(c: Color) -> &'static str {
    match c {
        Color::Blue => "blue",
        Color::Red => "red",
    }
}

fn hull_result(hull: &[Point], flat: Vec<f64>) -> Value {
    json!({
        "hull": flat,
        "vertices": hull.len(),
        "signed_area": signed_area(hull)
    })
}

impl Traced for QuickHull {
    fn frame(snap: &QuickHullSnapshot) -> Value {
        json!({
            "current_points": snap.current_points,
            "current_line": snap.current_line,
            "processed_lines": snap.processed_lines,
            "processed_triangle": snap.processed_triangle,
            "hull": snap.hull
        })
    }

    fn result(&self) -> Value {
        hull_result(&self.hull_points(), self.get_convex_hull())
    }
}

impl Traced for GiftWrap {
    fn frame(snap: &GiftWrapSnapshot) -> Value {
        json!({
            "current_line": snap.current_line,
            "min_line": snap.min_line,
            "processed_lines": snap.processed_lines,
            "hull": snap.hull
        })
    }

    fn result(&self) -> Value {
        hull_result(self.hull_points(), self.get_convex_hull())
    }
}

impl Traced for TrapezoidSweep {
    fn frame(snap: &TrapezoidSweepSnapshot) -> Value {
        // No sweep position before the first event.
        let x = snap.current_endpoint.map(|_| snap.sweepline_x);
        json!({
            "sweepline_x": x,
            "current_endpoint": snap.current_endpoint.map(|p| [p.x, p.y]),
            "current_color": snap.current_color.map(color_name),
            "intersections": snap.intersections,
            "current": snap.current,
            "finished": snap.finished,
            "walls": snap.walls
        })
    }

    fn result(&self) -> Value {
        json!({
            "intersections": self.intersections(),
            "count": self.intersection_points().len(),
            "trapezoids": self.trapezoids().len()
        })
    }
}
