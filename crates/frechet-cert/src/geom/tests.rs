use super::*;

#[test]
fn intersection_interval_crossing_segment() {
    // Unit ball around the origin against a horizontal segment through it.
    let a = Point::new(-2.0, 0.0);
    let b = Point::new(2.0, 0.0);
    let iv = intersection_interval(Point::new(0.0, 0.0), 1.0, a, b);
    assert!(!iv.is_empty());
    assert!((iv.begin - 0.25).abs() < 1e-12);
    assert!((iv.end - 0.75).abs() < 1e-12);
}

#[test]
fn intersection_interval_clamps_to_segment() {
    // Ball covers far past the segment end; result clamps at 1.
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);
    let iv = intersection_interval(Point::new(1.0, 0.0), 5.0, a, b);
    assert_eq!(iv.begin, 0.0);
    assert_eq!(iv.end, 1.0);
}

#[test]
fn intersection_interval_disjoint_and_tangent() {
    let a = Point::new(0.0, 2.0);
    let b = Point::new(4.0, 2.0);
    // Too far below: empty.
    assert!(intersection_interval(Point::new(2.0, 0.0), 1.0, a, b).is_empty());
    // Tangent at distance exactly 2: single-point interval at t = 0.5.
    let iv = intersection_interval(Point::new(2.0, 0.0), 2.0, a, b);
    assert!(!iv.is_empty());
    assert!((iv.begin - 0.5).abs() < 1e-7);
    assert!((iv.end - 0.5).abs() < 1e-7);
}

#[test]
fn intersection_interval_degenerate_segment() {
    let p = Point::new(1.0, 1.0);
    let near = intersection_interval(Point::new(1.0, 1.5), 1.0, p, p);
    assert_eq!(near, Interval::new(0.0, 1.0));
    let far = intersection_interval(Point::new(1.0, 3.0), 1.0, p, p);
    assert!(far.is_empty());
}

#[test]
fn intersection_interval_exact_at_vertices() {
    // delta = 0 against the segment's own endpoints must give exact 0/1
    // fractions; the partition logic downstream relies on this.
    let a = Point::new(3.0, 4.0);
    let b = Point::new(7.0, 1.0);
    let at_a = intersection_interval(a, 0.0, a, b);
    assert_eq!((at_a.begin, at_a.end), (0.0, 0.0));
    let at_b = intersection_interval(b, 0.0, a, b);
    assert_eq!((at_b.begin, at_b.end), (1.0, 1.0));
}

#[test]
fn curve_point_normalizes_fraction_one() {
    let p = CurvePoint::new(3, 1.0);
    assert_eq!(p.point(), 4);
    assert_eq!(p.fraction(), 0.0);
    assert!(p.is_vertex());
    assert_eq!(p, CurvePoint::new(4, 0.0));
}

#[test]
fn curve_point_ordering_follows_param() {
    let a = CurvePoint::new(1, 0.75);
    let b = CurvePoint::new(2, 0.0);
    let c = CurvePoint::new(2, 0.25);
    assert!(a < b && b < c);
    assert!((b.param() - 2.0).abs() == 0.0);
}

#[test]
fn curve_interpolation_and_eval() {
    let c = Curve::from_xy(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
    assert_eq!(c.size(), 3);
    let mid = c.interpolate_at(CurvePoint::new(0, 0.5));
    assert_eq!(mid, Point::new(1.0, 0.0));
    assert_eq!(c.interpolate_at(CurvePoint::new(1, 1.0)), c.last());
    assert_eq!(c.eval(1.5), Point::new(2.0, 1.0));
    // Clamped outside the parameter range.
    assert_eq!(c.eval(-1.0), c.first());
    assert_eq!(c.eval(9.0), c.last());
}

#[test]
fn interval_open_meet() {
    let iv = Interval::new(0.25, 0.5);
    assert!(iv.meets_open(0.4, 0.6));
    // Closed touch at the boundary does not count as meeting the open range.
    assert!(!iv.meets_open(0.5, 1.0));
    assert!(!Interval::EMPTY.meets_open(0.0, 1.0));
}

#[test]
fn walk_curve_is_reproducible() {
    use super::rand::{draw_walk_curve, ReplayToken, WalkCfg};
    let tok = ReplayToken { seed: 7, index: 3 };
    let a = draw_walk_curve(WalkCfg::default(), tok);
    let b = draw_walk_curve(WalkCfg::default(), tok);
    assert_eq!(a, b);
    assert_eq!(a.size(), WalkCfg::default().len);
    let other = draw_walk_curve(WalkCfg::default(), ReplayToken { seed: 7, index: 4 });
    assert_ne!(a, other);
}
