use super::types::{Point, DEGENERATE_ANGLE};

/// Signed-area side test of `p` against the directed chord `a → b`.
///
/// `(a.x-b.x)(p.y-b.y) - (p.x-b.x)(a.y-b.y)`; positive and negative values name the two
/// open half-planes, zero means colinear.
#[inline]
pub fn side(a: Point, b: Point, p: Point) -> f64 {
    (a.x - b.x) * (p.y - b.y) - (p.x - b.x) * (a.y - b.y)
}

/// Squared perpendicular distance of `p` from the line through `a` and `b`, via the
/// projection of `p` onto the line. NaN when `a == b`.
pub fn distance_sq_to_line(a: Point, b: Point, p: Point) -> f64 {
    let ab = b.to_vector() - a.to_vector();
    let ap = p.to_vector() - a.to_vector();
    let u = ap.dot(&ab) / ab.dot(&ab);
    let foot = a.to_vector() + ab * u;
    (foot - p.to_vector()).norm_squared()
}

/// Turn angle at `cur` between the directions `prev → cur` and `cur → next`, in `[0, π]`.
///
/// Zero-length directions yield [`DEGENERATE_ANGLE`].
pub fn turn_angle(prev: Point, cur: Point, next: Point) -> f64 {
    let v1 = cur.to_vector() - prev.to_vector();
    let v2 = next.to_vector() - cur.to_vector();
    let n1 = v1.norm_squared();
    let n2 = v2.norm_squared();
    if n1 == 0.0 || n2 == 0.0 {
        return DEGENERATE_ANGLE;
    }
    let cos = v1.dot(&v2) / (n1.sqrt() * n2.sqrt());
    if cos >= 1.0 {
        0.0
    } else if cos <= -1.0 {
        DEGENERATE_ANGLE
    } else {
        cos.acos()
    }
}

/// Shoelace signed area of a closed polygon (positive for counterclockwise order).
/// A trailing copy of the first vertex is allowed and contributes nothing.
pub fn signed_area(poly: &[Point]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for k in 0..poly.len() {
        let p = poly[k];
        let q = poly[(k + 1) % poly.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}
