use super::*;
use crate::decider::less_than;
use crate::geom::rand::{draw_walk_curve, ReplayToken, WalkCfg};
use crate::geom::{Curve, CurvePoint, GeomCfg};
use proptest::prelude::*;

fn cp(i: usize, f: f64) -> CurvePoint {
    CurvePoint::new(i, f)
}

#[test]
fn parallel_segments_within_one() {
    let c1 = Curve::from_xy(&[(0.0, 0.0), (10.0, 0.0)]);
    let c2 = Curve::from_xy(&[(0.0, 1.0), (10.0, 1.0)]);
    let cert = yes_certificate(&c1, &c2, 1.0, GeomCfg::default());
    assert_eq!(cert.answer(), Some(true));
    assert_eq!(cert.validate(), Ok(()));
    assert_eq!(
        cert.traversal(),
        &[(cp(0, 0.0), cp(0, 0.0)), (cp(1, 0.0), cp(1, 0.0))]
    );
}

#[test]
fn parallel_segments_below_one_is_endpoint_no() {
    let c1 = Curve::from_xy(&[(0.0, 0.0), (10.0, 0.0)]);
    let c2 = Curve::from_xy(&[(0.0, 1.0), (10.0, 1.0)]);
    // Both entry points short-circuit to the same one-point NO witness.
    for cert in [
        yes_certificate(&c1, &c2, 0.5, GeomCfg::default()),
        no_certificate(&c1, &c2, 0.5, GeomCfg::default()),
    ] {
        assert_eq!(cert.answer(), Some(false));
        assert_eq!(cert.validate(), Ok(()));
        assert_eq!(cert.traversal(), &[(cp(0, 0.0), cp(0, 0.0))]);
    }
}

#[test]
fn identical_curves_at_delta_zero() {
    let c = Curve::from_xy(&[(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0), (5.0, 1.0)]);
    let cert = yes_certificate(&c, &c, 0.0, GeomCfg::default());
    assert_eq!(cert.answer(), Some(true));
    assert_eq!(cert.validate(), Ok(()));
    let diagonal: Vec<_> = (0..5).map(|k| (cp(k, 0.0), cp(k, 0.0))).collect();
    assert_eq!(cert.traversal(), &diagonal[..]);
}

#[test]
fn single_point_curve_yields_sentinel() {
    let p = Curve::from_xy(&[(0.0, 0.0)]);
    let c = Curve::from_xy(&[(0.0, 0.0), (1.0, 0.0)]);
    assert!(yes_certificate(&p, &c, 1.0, GeomCfg::default()).is_sentinel());
    assert!(no_certificate(&p, &c, 1.0, GeomCfg::default()).is_sentinel());
    assert!(decide_and_certify(&c, &p, 1.0).is_sentinel());
}

#[test]
fn spike_blocks_row() {
    // curve2 must visit a vertex far above curve1: NO, but not by the
    // endpoint check. The blocking chain runs along the fully blocked
    // horizontal grid line of that vertex.
    let c1 = Curve::from_xy(&[(0.0, 0.0), (10.0, 0.0)]);
    let c2 = Curve::from_xy(&[(0.0, 0.5), (5.0, 9.0), (10.0, 0.5)]);
    assert!(yes_certificate(&c1, &c2, 1.0, GeomCfg::default()).is_sentinel());
    let cert = no_certificate(&c1, &c2, 1.0, GeomCfg::default());
    assert_eq!(cert.answer(), Some(false));
    assert_eq!(cert.validate(), Ok(()));
    assert_eq!(
        cert.traversal(),
        &[(cp(1, 0.0), cp(1, 0.0)), (cp(0, 0.0), cp(1, 0.0))]
    );
    assert_eq!(decide_and_certify(&c1, &c2, 1.0).answer(), Some(false));
}

#[test]
fn spike_blocks_column() {
    // Transposed shape: curve1 owns the spike, the chain climbs the fully
    // blocked vertical grid line.
    let c1 = Curve::from_xy(&[(0.0, 0.5), (5.0, 9.0), (10.0, 0.5)]);
    let c2 = Curve::from_xy(&[(0.0, 0.0), (10.0, 0.0)]);
    let cert = no_certificate(&c1, &c2, 1.0, GeomCfg::default());
    assert_eq!(cert.answer(), Some(false));
    assert_eq!(cert.validate(), Ok(()));
    assert_eq!(
        cert.traversal(),
        &[(cp(1, 0.0), cp(0, 0.0)), (cp(1, 0.0), cp(1, 0.0))]
    );
}

#[test]
fn wrong_orientation_returns_sentinel() {
    let c1 = Curve::from_xy(&[(0.0, 0.0), (10.0, 0.0)]);
    let c2 = Curve::from_xy(&[(0.0, 1.0), (10.0, 1.0)]);
    // NO search on a YES instance.
    assert!(no_certificate(&c1, &c2, 1.0, GeomCfg::default()).is_sentinel());
}

#[test]
fn repeated_queries_are_answer_equivalent() {
    let c1 = Curve::from_xy(&[(0.0, 0.0), (3.0, 1.0), (6.0, 0.0)]);
    let c2 = Curve::from_xy(&[(0.0, 0.5), (3.0, 1.5), (6.0, 0.5)]);
    for &delta in &[0.4, 0.6, 2.0] {
        let a = decide_and_certify(&c1, &c2, delta);
        let b = decide_and_certify(&c1, &c2, delta);
        assert_eq!(a.answer(), b.answer());
        assert_eq!(a.traversal(), b.traversal());
    }
}

#[test]
fn answers_match_plain_decider_on_spike_family() {
    let c1 = Curve::from_xy(&[(0.0, 0.0), (6.0, 0.0)]);
    let c2 = Curve::from_xy(&[(0.0, 0.5), (3.0, 4.0), (6.0, 0.5)]);
    for &delta in &[0.3, 0.6, 1.5, 4.2, 9.0] {
        let cert = decide_and_certify(&c1, &c2, delta);
        assert_eq!(cert.answer(), Some(less_than(&c1, &c2, delta)), "delta {delta}");
        assert_eq!(cert.validate(), Ok(()), "delta {delta}");
    }
}

#[test]
fn zigzag_pair_matches_plain_decider() {
    let c1 = Curve::from_xy(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (6.0, 1.0)]);
    let c2 = Curve::from_xy(&[(0.0, 1.0), (2.0, 0.0), (4.0, 1.0), (6.0, 0.0)]);
    for &delta in &[0.8, 1.0, 1.3, 2.5] {
        let cert = decide_and_certify(&c1, &c2, delta);
        assert_eq!(cert.answer(), Some(less_than(&c1, &c2, delta)), "delta {delta}");
        assert_eq!(cert.validate(), Ok(()), "delta {delta}");
    }
}

fn walk(seed: u64, index: u64, len: usize) -> Curve {
    draw_walk_curve(
        WalkCfg {
            len,
            ..WalkCfg::default()
        },
        ReplayToken { seed, index },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn certified_answer_matches_plain_decider(seed in any::<u64>(), delta in 0.0f64..4.0) {
        let c1 = walk(seed, 0, 5);
        let c2 = walk(seed, 1, 4);
        let cert = decide_and_certify(&c1, &c2, delta);
        prop_assert_eq!(cert.answer(), Some(less_than(&c1, &c2, delta)));
        prop_assert_eq!(cert.validate(), Ok(()));
    }

    #[test]
    fn interior_decisions_match_plain_decider(seed in any::<u64>(), delta in 0.05f64..2.5) {
        // Force equal endpoints so the decision is never settled by the
        // endpoint short-circuit; this drives the interior of both the
        // free and the blocked construction.
        let c1 = walk(seed, 0, 6);
        let mut pts = walk(seed, 1, 6).points().to_vec();
        pts[0] = c1.first();
        let last = pts.len() - 1;
        pts[last] = c1.last();
        let c2 = Curve::new(pts);
        let cert = decide_and_certify(&c1, &c2, delta);
        prop_assert_eq!(cert.answer(), Some(less_than(&c1, &c2, delta)));
        prop_assert_eq!(cert.validate(), Ok(()));
    }
}
