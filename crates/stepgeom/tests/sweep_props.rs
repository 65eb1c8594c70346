//! Property-based tests for the trapezoid sweep using the `proptest` crate.

use proptest::prelude::*;

use stepgeom::geom2::{intersect, Color, Point};
use stepgeom::rand2::{draw_segments, ReplayToken, SegmentsCfg};
use stepgeom::stepper::Stepper;
use stepgeom::sweep::{ColoredSegments, TrapezoidSweep};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Direction angle kept away from vertical.
fn arb_angle() -> impl Strategy<Value = f64> {
    -1.4f64..1.4
}

/// Distance from the crossing to an endpoint.
fn arb_arm() -> impl Strategy<Value = f64> {
    1.0f64..50.0
}

/// Segment through `c` with direction angle `th`, extending `back` to the left and
/// `ahead` to the right.
fn through(c: Point, th: f64, back: f64, ahead: f64) -> Vec<f64> {
    let (s, co) = th.sin_cos();
    vec![
        c.x - back * co,
        c.y - back * s,
        c.x + ahead * co,
        c.y + ahead * s,
    ]
}

fn arb_cfg() -> impl Strategy<Value = SegmentsCfg> {
    (0usize..10, 0usize..10).prop_map(|(blue, red)| SegmentsCfg {
        blue,
        red,
        ..SegmentsCfg::default()
    })
}

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// 1. A single red/blue crossing is reported exactly once, at the crossing
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn single_crossing_reported_once(
        (cx, cy) in (-50.0f64..50.0, -50.0f64..50.0),
        (tb, tr) in (arb_angle(), arb_angle()),
        (b0, b1, r0, r1) in (arb_arm(), arb_arm(), arb_arm(), arb_arm()),
    ) {
        prop_assume!((tb - tr).abs() > 0.1);
        let c = Point::new(cx, cy);
        let mut sweep = TrapezoidSweep::new(&through(c, tb, b0, b1), &through(c, tr, r0, r1));
        prop_assert_eq!(sweep.run_to_completion(), 4);
        let pts = sweep.intersection_points();
        prop_assert_eq!(pts.len(), 1, "reports: {:?}", pts);
        let p = pts[0];
        prop_assert!((p.x - cx).abs() < TOL && (p.y - cy).abs() < TOL, "{} vs {}", p, c);
    }
}

// ---------------------------------------------------------------------------
// 2. Every report lies on one red and one blue input segment
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn reports_are_red_blue_crossings(cfg in arb_cfg(), seed in any::<u64>()) {
        let input = draw_segments(cfg, ReplayToken { seed, index: 0 });
        let mut sweep = TrapezoidSweep::construct(&input);
        sweep.run_to_completion();

        let of = |color: Color| -> Vec<_> {
            sweep.segments().iter().filter(|s| s.color == color).collect()
        };
        let (reds, blues) = (of(Color::Red), of(Color::Blue));
        for p in sweep.intersection_points() {
            let found = reds
                .iter()
                .any(|r| blues.iter().any(|b| intersect(r, b) == Some(*p)));
            prop_assert!(found, "{} is not a red/blue crossing", p);
        }
    }
}

// ---------------------------------------------------------------------------
// 3. One step per endpoint; whole records in every buffer; stable after terminal
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn buffers_and_step_count(cfg in arb_cfg(), seed in any::<u64>()) {
        let input: ColoredSegments = draw_segments(cfg, ReplayToken { seed, index: 1 });
        let mut sweep = TrapezoidSweep::construct(&input);
        let mut steps = 0;
        while !sweep.is_done() {
            sweep.next_step();
            steps += 1;
            let snap = sweep.snapshot();
            prop_assert_eq!(snap.current.len() % 8, 0);
            prop_assert_eq!(snap.finished.len() % 8, 0);
            prop_assert_eq!(snap.walls.len() % 4, 0);
            prop_assert_eq!(snap.intersections.len() % 2, 0);
            prop_assert_eq!(snap.walls.len() / 4, (snap.current.len() + snap.finished.len()) / 8);
        }
        prop_assert_eq!(steps, 2 * (cfg.blue + cfg.red));

        let end = sweep.snapshot();
        prop_assert!(sweep.next_step());
        prop_assert_eq!(sweep.snapshot(), end);
    }
}
