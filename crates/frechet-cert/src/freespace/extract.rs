//! Entry points and certificate extraction.
//!
//! The witness paths produced by the search are edge-indexed: each node is
//! a sub-interval of a cell edge, not a matched point. Extraction anchors
//! every node to concrete positions, normalizes fraction-1 contacts onto
//! the next vertex (which merges the corner shapes the raw chain contains)
//! and drops consecutive duplicates. On the blocked side the anchors are
//! exact corners where the chain passes a grid corner, clamped window
//! midpoints for jumps, and nudged interior points where a piece endpoint
//! lies on the free boundary at distance exactly δ.

use crate::certificate::Certificate;
use crate::geom::{dist, Curve, CurvePoint, GeomCfg, PosPair};

use super::build::{build_blocked_graph, build_free_graph};
use super::search::bfs_witness;
use super::types::{Axis, NodeId, SpanGraph, SpanNode};

/// Decide with a YES orientation: a validated YES certificate, the NO
/// certificate when an endpoint pair is already infeasible, or the
/// sentinel when the instance is NO for non-endpoint reasons.
pub fn yes_certificate<'a>(
    curve1: &'a Curve,
    curve2: &'a Curve,
    delta: f64,
    cfg: GeomCfg,
) -> Certificate<'a> {
    if curve1.size() < 2 || curve2.size() < 2 {
        return Certificate::sentinel(curve1, curve2, delta);
    }
    if let Some(cert) = endpoint_witness(curve1, curve2, delta, cfg) {
        return cert;
    }
    let g = build_free_graph(curve1, curve2, delta);
    let Some(path) = bfs_witness(&g) else {
        return Certificate::sentinel(curve1, curve2, delta);
    };
    let mut cert = Certificate::new(curve1, curve2, delta, cfg);
    for pair in traversal_positions(&g, &path, curve1.size(), curve2.size()) {
        cert.push(pair);
    }
    cert.set_answer(true);
    finish(cert)
}

/// Decide with a NO orientation: a validated NO certificate (endpoint
/// witness or blocking chain), or the sentinel when the instance is YES.
pub fn no_certificate<'a>(
    curve1: &'a Curve,
    curve2: &'a Curve,
    delta: f64,
    cfg: GeomCfg,
) -> Certificate<'a> {
    if curve1.size() < 2 || curve2.size() < 2 {
        return Certificate::sentinel(curve1, curve2, delta);
    }
    if let Some(cert) = endpoint_witness(curve1, curve2, delta, cfg) {
        return cert;
    }
    let g = build_blocked_graph(curve1, curve2, delta);
    if let Some(path) = bfs_witness(&g) {
        let mut cert = Certificate::new(curve1, curve2, delta, cfg);
        for pair in barrier_positions(&g, &path, cfg) {
            cert.push(pair);
        }
        cert.set_answer(false);
        return finish(cert);
    }
    // The jump moves are directional; a chain oriented the other way shows
    // up as a forward chain of the reversed curves. Map it back by
    // mirroring every position.
    let rev1 = curve1.reversed();
    let rev2 = curve2.reversed();
    let g = build_blocked_graph(&rev1, &rev2, delta);
    let Some(path) = bfs_witness(&g) else {
        return Certificate::sentinel(curve1, curve2, delta);
    };
    let mut pairs = barrier_positions(&g, &path, cfg);
    let (xmax, ymax) = ((curve1.size() - 1) as f64, (curve2.size() - 1) as f64);
    for (p, q) in pairs.iter_mut() {
        *p = CurvePoint::from_param(xmax - p.param());
        *q = CurvePoint::from_param(ymax - q.param());
    }
    pairs.reverse();
    let mut cert = Certificate::new(curve1, curve2, delta, cfg);
    for pair in pairs {
        cert.push(pair);
    }
    cert.set_answer(false);
    finish(cert)
}

/// Decide and certify with default tolerances: tries the YES side, falls
/// back to the NO side.
pub fn decide_and_certify<'a>(curve1: &'a Curve, curve2: &'a Curve, delta: f64) -> Certificate<'a> {
    let cfg = GeomCfg::default();
    if curve1.size() < 2 || curve2.size() < 2 {
        return Certificate::sentinel(curve1, curve2, delta);
    }
    let yes = yes_certificate(curve1, curve2, delta, cfg);
    if !yes.is_sentinel() {
        return yes;
    }
    let no = no_certificate(curve1, curve2, delta, cfg);
    if no.is_sentinel() {
        // Both searches failing contradicts the construction invariants.
        panic!("free-space search found neither a traversal nor a blocking chain");
    }
    no
}

/// Endpoint short-circuit shared by both orientations: an infeasible start
/// or end pair is a one-point NO witness, no grid needed.
fn endpoint_witness<'a>(
    curve1: &'a Curve,
    curve2: &'a Curve,
    delta: f64,
    cfg: GeomCfg,
) -> Option<Certificate<'a>> {
    let pair = if dist(curve1.first(), curve2.first()) > delta {
        (CurvePoint::new(0, 0.0), CurvePoint::new(0, 0.0))
    } else if dist(curve1.last(), curve2.last()) > delta {
        (
            CurvePoint::new(curve1.size() - 1, 0.0),
            CurvePoint::new(curve2.size() - 1, 0.0),
        )
    } else {
        return None;
    };
    let mut cert = Certificate::new(curve1, curve2, delta, cfg);
    cert.push(pair);
    cert.set_answer(false);
    Some(finish(cert))
}

fn finish(cert: Certificate<'_>) -> Certificate<'_> {
    if let Err(e) = cert.validate() {
        // A witness that fails its own validation is a construction bug,
        // never a legitimate answer.
        panic!("extracted certificate failed validation: {e}");
    }
    cert
}

/// Anchor every path node at the low end of its piece and close with the
/// final vertex pair. `CurvePoint::new` folds fraction-1 anchors onto the
/// next vertex, after which consecutive duplicates collapse.
fn traversal_positions(g: &SpanGraph, path: &[NodeId], n: usize, m: usize) -> Vec<PosPair> {
    let mut out: Vec<PosPair> = Vec::with_capacity(path.len() + 1);
    for &id in path {
        let node = g.node(id);
        out.push(match node.axis {
            Axis::Horizontal => (
                CurvePoint::new(node.i, node.lo),
                CurvePoint::new(node.j, 0.0),
            ),
            Axis::Vertical => (
                CurvePoint::new(node.i, 0.0),
                CurvePoint::new(node.j, node.lo),
            ),
        });
    }
    out.push((CurvePoint::new(n - 1, 0.0), CurvePoint::new(m - 1, 0.0)));
    dedup_consecutive(&mut out);
    out
}

/// How two consecutive blocking-chain nodes connect.
enum Link {
    /// Exact shared grid corner.
    Corner(usize, usize),
    /// Jump between parallel pieces: one strictly blocked fraction per
    /// piece, anti-monotone in chain order.
    Jump(f64, f64),
    /// Line jump through fully blocked edges: leave at `a`'s far corner,
    /// land at `b`'s near corner.
    Line((usize, usize), (usize, usize)),
}

fn barrier_positions(g: &SpanGraph, path: &[NodeId], cfg: GeomCfg) -> Vec<PosPair> {
    let mut out: Vec<PosPair> = Vec::new();
    let first = g.node(path[0]);
    out.push(entry_anchor(first, cfg));
    for w in path.windows(2) {
        let (a, b) = (g.node(w[0]), g.node(w[1]));
        match classify_link(a, b, cfg) {
            Link::Corner(ci, cj) => out.push(corner_pair(ci, cj)),
            Link::Jump(fa, fb) => {
                out.push(at_fraction(a, fa));
                out.push(at_fraction(b, fb));
            }
            Link::Line(ca, cb) => {
                out.push(corner_pair(ca.0, ca.1));
                out.push(corner_pair(cb.0, cb.1));
            }
        }
    }
    let last = g.node(path[path.len() - 1]);
    out.push(exit_anchor(last, cfg));
    dedup_consecutive(&mut out);
    out
}

fn classify_link(a: &SpanNode, b: &SpanNode, cfg: GeomCfg) -> Link {
    // Shared corner first: every cross-axis link and every single-step
    // same-axis link passes through one.
    for ca in [a.corner_at_lo(), a.corner_at_hi()].into_iter().flatten() {
        for cb in [b.corner_at_lo(), b.corner_at_hi()].into_iter().flatten() {
            if ca == cb {
                return Link::Corner(ca.0, ca.1);
            }
        }
    }
    match (a.axis, b.axis) {
        (Axis::Vertical, Axis::Vertical) if a.i != b.i => {
            // Rightward jump: anchor on `a` stays at or above the one on
            // `b` in absolute coordinates.
            debug_assert!(b.i > a.i && b.along_lo() < a.along_hi());
            let (fa, fb) = jump_fractions(a, b, b.along_lo(), a.along_hi(), cfg);
            Link::Jump(fa, fb)
        }
        (Axis::Horizontal, Axis::Horizontal) if a.j != b.j => {
            // Downward jump: anchor on `b` stays at or beyond the one on
            // `a`.
            debug_assert!(b.j < a.j && b.along_hi() > a.along_lo());
            let (fa, fb) = jump_fractions(a, b, a.along_lo(), b.along_hi(), cfg);
            Link::Jump(fa, fb)
        }
        (Axis::Vertical, Axis::Vertical) => {
            // Upward line jump; both corners exist by construction.
            debug_assert!(a.j < b.j && a.hi == 1.0 && b.lo == 0.0);
            Link::Line((a.i, a.j + 1), (b.i, b.j))
        }
        (Axis::Horizontal, Axis::Horizontal) => {
            debug_assert!(b.i < a.i && a.lo == 0.0 && b.hi == 1.0);
            Link::Line((a.i, a.j), (b.i + 1, b.j))
        }
        _ => unreachable!("blocking chain nodes share no link"),
    }
}

/// Anchor fractions for an overlap jump. `(wlo, whi)` is the open window
/// guaranteed non-empty by the jump edge; clamping its midpoint into each
/// piece keeps the step anti-monotone. The midpoint is shifted off exact
/// integers so no anchor pair lands on a shared grid line.
fn jump_fractions(a: &SpanNode, b: &SpanNode, wlo: f64, whi: f64, cfg: GeomCfg) -> (f64, f64) {
    debug_assert!(wlo < whi);
    let mut cross = (wlo + whi) / 2.0;
    if cross.fract() == 0.0 {
        cross -= cfg.eps_nudge;
    }
    (clamp_blocked(a, cross, cfg), clamp_blocked(b, cross, cfg))
}

/// Strictly blocked fraction of a piece closest to the absolute along-edge
/// coordinate `v`.
fn clamp_blocked(node: &SpanNode, v: f64, cfg: GeomCfg) -> f64 {
    if v <= node.along_lo() {
        inset(node, true, cfg)
    } else if v >= node.along_hi() {
        inset(node, false, cfg)
    } else {
        v - node.along_base()
    }
}

/// Position of a span node at a given fraction of its edge.
fn at_fraction(node: &SpanNode, f: f64) -> PosPair {
    match node.axis {
        Axis::Horizontal => (CurvePoint::new(node.i, f), CurvePoint::new(node.j, 0.0)),
        Axis::Vertical => (CurvePoint::new(node.i, 0.0), CurvePoint::new(node.j, f)),
    }
}

fn corner_pair(ci: usize, cj: usize) -> PosPair {
    (CurvePoint::new(ci, 0.0), CurvePoint::new(cj, 0.0))
}

/// Strictly blocked fraction near the given end of a piece: exact when the
/// piece owns that end (a grid corner), nudged inward when the end lies on
/// the free boundary.
fn inset(node: &SpanNode, toward_lo: bool, cfg: GeomCfg) -> f64 {
    let eps = cfg.eps_nudge.min((node.hi - node.lo) / 2.0);
    if toward_lo {
        if node.closure.at_lo() {
            node.lo
        } else {
            node.lo + eps
        }
    } else if node.closure.at_hi() {
        node.hi
    } else {
        node.hi - eps
    }
}

/// Where the chain starts: the bottom end of vertical pieces, the right
/// end of horizontal ones.
fn entry_anchor(node: &SpanNode, cfg: GeomCfg) -> PosPair {
    match node.axis {
        Axis::Vertical => at_fraction(node, inset(node, true, cfg)),
        Axis::Horizontal => at_fraction(node, inset(node, false, cfg)),
    }
}

/// Where the chain ends: the top end of vertical pieces, the left end of
/// horizontal ones.
fn exit_anchor(node: &SpanNode, cfg: GeomCfg) -> PosPair {
    match node.axis {
        Axis::Vertical => at_fraction(node, inset(node, false, cfg)),
        Axis::Horizontal => at_fraction(node, inset(node, true, cfg)),
    }
}

fn dedup_consecutive(pairs: &mut Vec<PosPair>) {
    pairs.dedup();
}
