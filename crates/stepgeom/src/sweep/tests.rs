use super::*;
use crate::geom2::{Color, EndpointKind, Point};
use crate::stepper::Stepper;

fn close(p: Point, x: f64, y: f64, tol: f64) -> bool {
    (p.x - x).abs() <= tol && (p.y - y).abs() <= tol
}

#[test]
fn single_cross_reports_center_once() {
    let mut sweep = TrapezoidSweep::new(&[0.0, 0.0, 10.0, 10.0], &[0.0, 10.0, 10.0, 0.0]);
    assert_eq!(sweep.current_endpoint_x(), f64::INFINITY);
    assert_eq!(sweep.current_segment_color(), None);
    let steps = sweep.run_to_completion();
    assert_eq!(steps, 4);
    assert_eq!(sweep.intersections(), vec![5.0, 5.0]);
    assert_eq!(sweep.trapezoids().len(), 5);
    assert_eq!(sweep.walls().len(), 5);
}

#[test]
fn single_cross_step_by_step_state() {
    let mut sweep = TrapezoidSweep::new(&[0.0, 0.0, 10.0, 10.0], &[0.0, 10.0, 10.0, 0.0]);
    assert_eq!(sweep.y_bounds(), (0.0, 10.0));

    assert!(!sweep.next_step());
    // No blue segment yet: the whole strip between the synthetic bounds.
    assert_eq!(sweep.current(), vec![0.0, 40.0, 0.0, -30.0, 0.0, -30.0, 0.0, 40.0]);
    assert_eq!(sweep.status(Color::Blue).len(), 1);

    assert!(!sweep.next_step());
    assert_eq!(sweep.current_segment_color(), Some(Color::Red));
    assert_eq!(sweep.finished().len(), 8);
    assert_eq!(sweep.current(), vec![0.0, 40.0, 0.0, 0.0, 0.0, 0.0, 0.0, 40.0]);

    assert!(!sweep.next_step());
    assert_eq!(sweep.sweepline_x(), 10.0);
    assert_eq!(sweep.current_endpoint_y(), 0.0);
    assert_eq!(sweep.current_endpoint().map(|e| e.kind), Some(EndpointKind::Right));
    assert_eq!(sweep.intersection_points(), &[Point::new(5.0, 5.0)]);
    assert_eq!(sweep.x_red(), Some(5.0));
    assert_eq!(sweep.current(), vec![0.0, 0.0, 0.0, -30.0, 10.0, -30.0, 10.0, 10.0]);
    assert!(sweep.status(Color::Red).is_empty());

    // Blue right endpoint closes the regions above and below the segment.
    assert!(sweep.next_step());
    assert_eq!(
        sweep.current(),
        vec![
            0.0, 40.0, 0.0, 0.0, 10.0, 10.0, 10.0, 40.0, //
            0.0, 0.0, 0.0, -30.0, 10.0, -30.0, 10.0, 10.0,
        ]
    );
    assert_eq!(sweep.intersections().len(), 2);
}

#[test]
fn red_crossing_blue_stack_reports_every_crossing() {
    let blue = [
        0.0, 1.0, 10.0, 1.0, //
        0.0, 2.0, 10.0, 2.0, //
        0.0, 3.0, 10.0, 3.0,
    ];
    let red = [4.0, 0.0, 6.0, 4.0];
    let mut sweep = TrapezoidSweep::new(&blue, &red);
    sweep.run_to_completion();
    // All three crossings surface at the red right endpoint, walked from the top blue.
    assert_eq!(
        sweep.intersection_points(),
        &[Point::new(5.5, 3.0), Point::new(5.0, 2.0), Point::new(4.5, 1.0)]
    );
}

#[test]
fn long_red_crossing_two_blues() {
    let blue = [2.0, 0.0, 4.0, 10.0, 8.0, 10.0, 10.0, 0.0];
    let red = [0.0, 5.0, 20.0, 5.0];
    let mut sweep = TrapezoidSweep::new(&blue, &red);
    assert_eq!(sweep.run_to_completion(), 6);
    assert_eq!(
        sweep.intersection_points(),
        &[Point::new(3.0, 5.0), Point::new(9.0, 5.0)]
    );
    assert_eq!(sweep.trapezoids().len(), 8);
    assert_eq!(sweep.finished_trapezoids().len(), 7);
    // Last event is the red right endpoint with no blue left: strip back to red's start.
    assert_eq!(
        sweep.current_trapezoids()[0],
        Trapezoid {
            top_left: Point::new(0.0, 40.0),
            bottom_left: Point::new(0.0, -30.0),
            bottom_right: Point::new(20.0, -30.0),
            top_right: Point::new(20.0, 40.0),
        }
    );
}

#[test]
fn same_color_crossings_are_never_reported() {
    let crossing = [0.0, 0.0, 10.0, 10.0, 0.0, 10.0, 10.0, 0.0];
    let far = [20.0, 0.0, 30.0, 0.0];

    let mut blues = TrapezoidSweep::new(&crossing, &far);
    blues.run_to_completion();
    assert!(blues.intersections().is_empty());

    let mut reds = TrapezoidSweep::new(&far, &crossing);
    reds.run_to_completion();
    assert!(reds.intersections().is_empty());
}

#[test]
fn shared_endpoints_keep_both_segments() {
    let blue = [0.0, 0.0, 10.0, 10.0, 0.0, 0.0, 10.0, -10.0];
    let red = [4.0, -10.0, 6.0, 10.0];
    let mut sweep = TrapezoidSweep::new(&blue, &red);
    assert_eq!(sweep.events().len(), 6);
    sweep.run_to_completion();
    let pts = sweep.intersection_points();
    assert_eq!(pts.len(), 2);
    assert!(close(pts[0], 50.0 / 9.0, 50.0 / 9.0, 1e-9));
    assert!(close(pts[1], 50.0 / 11.0, -50.0 / 11.0, 1e-9));
}

#[test]
fn vertical_blue_segment_is_nudged_and_crossed() {
    let mut sweep = TrapezoidSweep::new(&[5.0, 0.0, 5.0, 10.0], &[0.0, 5.0, 10.0, 5.0]);
    let s = sweep.segment(SegmentId(0));
    assert!(s.left.x() < s.right.x());
    sweep.run_to_completion();
    let pts = sweep.intersection_points();
    assert_eq!(pts.len(), 1);
    assert!(close(pts[0], 5.0, 5.0, 1e-6));
}

#[test]
fn parallel_and_disjoint_pairs_report_nothing() {
    let blue = [0.0, 0.0, 10.0, 10.0];
    let red = [0.0, 2.0, 10.0, 12.0, 20.0, 0.0, 30.0, 5.0];
    let mut sweep = TrapezoidSweep::new(&blue, &red);
    sweep.run_to_completion();
    assert!(sweep.intersections().is_empty());
}

#[test]
fn empty_and_truncated_input() {
    let mut empty = TrapezoidSweep::new(&[], &[]);
    assert!(empty.is_done());
    assert!(empty.next_step());
    assert!(empty.current().is_empty());
    assert!(empty.trapezoid_walls().is_empty());
    assert_eq!(empty.current_endpoint_y(), f64::INFINITY);

    let sweep = TrapezoidSweep::new(&[0.0, 0.0, 10.0, 10.0, 3.0, 4.0, 5.0], &[1.0]);
    assert_eq!(sweep.segments().len(), 1);
    assert_eq!(sweep.events().len(), 2);
}

#[test]
fn events_are_lexicographic_left_before_right() {
    let sweep = TrapezoidSweep::new(&[8.0, 1.0, 2.0, 3.0, 2.0, 0.0, 9.0, 9.0], &[2.0, 3.0, 4.0, 4.0]);
    let xs: Vec<_> = sweep.events().iter().map(|e| e.endpoint.point).collect();
    for w in xs.windows(2) {
        assert!(w[0].lex_cmp(&w[1]) != std::cmp::Ordering::Greater);
    }
    for (k, s) in sweep.segments().iter().enumerate() {
        let pos = |kind: EndpointKind| {
            sweep
                .events()
                .iter()
                .position(|e| e.segment == SegmentId(k) && e.endpoint.kind == kind)
        };
        assert!(pos(EndpointKind::Left) < pos(EndpointKind::Right), "{s}");
    }
}

#[test]
fn buffers_have_whole_records_and_accessors_are_idempotent() {
    let blue = [2.0, 0.0, 4.0, 10.0, 8.0, 10.0, 10.0, 0.0];
    let red = [0.0, 5.0, 20.0, 5.0];
    let mut sweep = TrapezoidSweep::new(&blue, &red);
    while !sweep.next_step() {
        let a = sweep.snapshot();
        assert_eq!(a, sweep.snapshot());
        assert_eq!(a.current.len() % 8, 0);
        assert_eq!(a.finished.len() % 8, 0);
        assert_eq!(a.walls.len() % 4, 0);
        assert_eq!(a.intersections.len() % 2, 0);
    }
    let end = sweep.snapshot();
    assert!(sweep.next_step());
    assert_eq!(sweep.snapshot(), end);
}

#[test]
fn boundary_margin_is_configurable() {
    let cfg = SweepCfg {
        boundary_margin: 0.0,
        ..SweepCfg::default()
    };
    let mut sweep = TrapezoidSweep::with_cfg(&[0.0, 0.0, 10.0, 10.0], &[], cfg);
    sweep.next_step();
    assert_eq!(sweep.current(), vec![0.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0]);
}
