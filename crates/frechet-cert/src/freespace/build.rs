//! Graph construction for both sides of the free-space diagram.
//!
//! The free side partitions every maximal run of non-empty edges at the
//! union of the free-interval endpoints occurring in the run, so slot `k`
//! names the same fraction range on every edge of the run. Zero-length
//! pieces at the breakpoints keep exact corner contacts representable
//! without tolerances. The blocked side stores the complement of each
//! edge's free interval as one or two pieces and wires the barrier moves:
//! corner links, line jumps through fully blocked edges, and anti-monotone
//! overlap jumps between parallel pieces.

use crate::geom::{intersection_interval, Curve, Interval};

use super::types::{Axis, Closure, NodeId, SpanGraph, SpanNode};

type Slots = Vec<Option<NodeId>>;

/// Reachability graph of the free region. Requires curves of length >= 2
/// with both endpoint pairs within `delta` (callers short-circuit first).
pub fn build_free_graph(curve1: &Curve, curve2: &Curve, delta: f64) -> SpanGraph {
    let n = curve1.size();
    let m = curve2.size();
    debug_assert!(n >= 2 && m >= 2);

    let free_v: Vec<Vec<Interval>> = (0..m - 1)
        .map(|j| {
            (0..n)
                .map(|i| intersection_interval(curve1[i], delta, curve2[j], curve2[j + 1]))
                .collect()
        })
        .collect();
    let free_h: Vec<Vec<Interval>> = (0..n - 1)
        .map(|i| {
            (0..m)
                .map(|j| intersection_interval(curve2[j], delta, curve1[i], curve1[i + 1]))
                .collect()
        })
        .collect();

    let mut g = SpanGraph::default();

    // vertical[j][i]: slots on the edge at curve1 vertex i, curve2 segment j.
    let mut vertical: Vec<Vec<Slots>> = vec![vec![Vec::new(); n]; m - 1];
    for (j, row) in free_v.iter().enumerate() {
        for (start, end) in runs(row) {
            let pieces = run_pieces(&row[start..end]);
            for i in start..end {
                vertical[j][i] = cover_slots(&mut g, &pieces, row[i], Axis::Vertical, i, j);
            }
        }
    }
    // horizontal[i][j]: slots on the edge at curve1 segment i, curve2 vertex j.
    let mut horizontal: Vec<Vec<Slots>> = vec![vec![Vec::new(); m]; n - 1];
    for (i, col) in free_h.iter().enumerate() {
        for (start, end) in runs(col) {
            let pieces = run_pieces(&col[start..end]);
            for j in start..end {
                horizontal[i][j] = cover_slots(&mut g, &pieces, col[j], Axis::Horizontal, i, j);
            }
        }
    }

    // Vertical spans: through-cell moves, run propagation, line travel.
    for j in 0..m - 1 {
        for i in 0..n {
            for k in 0..vertical[j][i].len() {
                let Some(v) = vertical[j][i][k] else { continue };
                if i + 1 < n {
                    // Right edge of cell (i, j), strictly higher slots
                    // (the equal slot is the first run-propagation step).
                    for k2 in k + 1..vertical[j][i + 1].len() {
                        if let Some(w) = vertical[j][i + 1][k2] {
                            g.add_edge(v, w);
                        }
                    }
                    // Top edge of cell (i, j), any slot.
                    for w in horizontal[i][j + 1].iter().flatten() {
                        g.add_edge(v, *w);
                    }
                }
                // Same-slot propagation along the row's run; a missing slot
                // is a gap and ends the run walk.
                let mut i2 = i + 1;
                while i2 < n {
                    match vertical[j][i2].get(k) {
                        Some(&Some(w)) => {
                            g.add_edge(v, w);
                            i2 += 1;
                        }
                        _ => break,
                    }
                }
                // Travel up the grid line of curve1 vertex i through
                // consecutive covered slots.
                let mut jj = j;
                let mut kk = k + 1;
                'up: while jj < m - 1 {
                    let slots = &vertical[jj][i];
                    if slots.is_empty() {
                        break;
                    }
                    while kk < slots.len() {
                        match slots[kk] {
                            Some(w) => {
                                g.add_edge(v, w);
                                kk += 1;
                            }
                            None => break 'up,
                        }
                    }
                    jj += 1;
                    kk = 0;
                }
            }
        }
    }

    // Horizontal spans, symmetric.
    for i in 0..n - 1 {
        for j in 0..m {
            for k in 0..horizontal[i][j].len() {
                let Some(h) = horizontal[i][j][k] else { continue };
                if j + 1 < m {
                    for k2 in k + 1..horizontal[i][j + 1].len() {
                        if let Some(w) = horizontal[i][j + 1][k2] {
                            g.add_edge(h, w);
                        }
                    }
                    for w in vertical[j][i + 1].iter().flatten() {
                        g.add_edge(h, *w);
                    }
                }
                let mut j2 = j + 1;
                while j2 < m {
                    match horizontal[i][j2].get(k) {
                        Some(&Some(w)) => {
                            g.add_edge(h, w);
                            j2 += 1;
                        }
                        _ => break,
                    }
                }
                let mut ii = i;
                let mut kk = k + 1;
                'right: while ii < n - 1 {
                    let slots = &horizontal[ii][j];
                    if slots.is_empty() {
                        break;
                    }
                    while kk < slots.len() {
                        match slots[kk] {
                            Some(w) => {
                                g.add_edge(h, w);
                                kk += 1;
                            }
                            None => break 'right,
                        }
                    }
                    ii += 1;
                    kk = 0;
                }
            }
        }
    }

    // The bottom-left corner is free (endpoint pre-check), so slot 0 of
    // both origin edges exists and starts at fraction 0.
    if let Some(&Some(v0)) = vertical[0][0].first() {
        g.sources.push(v0);
    }
    if let Some(&Some(h0)) = horizontal[0][0].first() {
        g.sources.push(h0);
    }
    for idx in 0..g.nodes.len() {
        let node = g.nodes[idx];
        let sink = match node.axis {
            Axis::Vertical => node.i == n - 1 && node.j == m - 2 && node.hi == 1.0,
            Axis::Horizontal => node.j == m - 1 && node.i == n - 2 && node.hi == 1.0,
        };
        if sink {
            g.sinks[idx] = true;
        }
    }

    #[cfg(debug_assertions)]
    if std::env::var_os("FRECHET_CERT_DEBUG_FSD").is_some() {
        eprintln!(
            "free graph: {} nodes, {} sources, {} sinks",
            g.len(),
            g.sources.len(),
            g.sinks.iter().filter(|&&s| s).count()
        );
    }
    g
}

/// Maximal runs of non-empty intervals, as half-open index ranges.
fn runs(frees: &[Interval]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < frees.len() {
        if frees[i].is_empty() {
            i += 1;
            continue;
        }
        let start = i;
        while i < frees.len() && !frees[i].is_empty() {
            i += 1;
        }
        out.push((start, i));
    }
    out
}

/// Partition pieces shared by all edges of a run: zero-length pieces at
/// every breakpoint interleaved with the open ranges between them.
fn run_pieces(frees: &[Interval]) -> Vec<(f64, f64)> {
    let mut bps = vec![0.0, 1.0];
    for f in frees {
        bps.push(f.begin);
        bps.push(f.end);
    }
    bps.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    bps.dedup();
    let mut pieces = Vec::with_capacity(2 * bps.len() - 1);
    for (k, &b) in bps.iter().enumerate() {
        pieces.push((b, b));
        if k + 1 < bps.len() {
            pieces.push((b, bps[k + 1]));
        }
    }
    pieces
}

/// Allocate one node per piece covered by this edge's free interval.
fn cover_slots(
    g: &mut SpanGraph,
    pieces: &[(f64, f64)],
    free: Interval,
    axis: Axis,
    i: usize,
    j: usize,
) -> Slots {
    pieces
        .iter()
        .enumerate()
        .map(|(slot, &(lo, hi))| {
            if free.covers(lo, hi) {
                Some(g.push_node(SpanNode {
                    axis,
                    i,
                    j,
                    slot,
                    lo,
                    hi,
                    closure: Closure::ClosedBoth,
                }))
            } else {
                None
            }
        })
        .collect()
}

/// Blocking graph over the complement of the free region. Same
/// preconditions as `build_free_graph`.
pub fn build_blocked_graph(curve1: &Curve, curve2: &Curve, delta: f64) -> SpanGraph {
    let n = curve1.size();
    let m = curve2.size();
    debug_assert!(n >= 2 && m >= 2);

    let mut g = SpanGraph::default();
    let mut vertical: Vec<Vec<Vec<NodeId>>> = vec![vec![Vec::new(); n]; m - 1];
    let mut horizontal: Vec<Vec<Vec<NodeId>>> = vec![vec![Vec::new(); m]; n - 1];

    for j in 0..m - 1 {
        for i in 0..n {
            let free = intersection_interval(curve1[i], delta, curve2[j], curve2[j + 1]);
            for (slot, (lo, hi, closure)) in blocked_pieces(free).into_iter().enumerate() {
                let id = g.push_node(SpanNode {
                    axis: Axis::Vertical,
                    i,
                    j,
                    slot,
                    lo,
                    hi,
                    closure,
                });
                vertical[j][i].push(id);
            }
        }
    }
    for i in 0..n - 1 {
        for j in 0..m {
            let free = intersection_interval(curve2[j], delta, curve1[i], curve1[i + 1]);
            for (slot, (lo, hi, closure)) in blocked_pieces(free).into_iter().enumerate() {
                let id = g.push_node(SpanNode {
                    axis: Axis::Horizontal,
                    i,
                    j,
                    slot,
                    lo,
                    hi,
                    closure,
                });
                horizontal[i][j].push(id);
            }
        }
    }

    // Corner links: every pair of pieces owning an endpoint on the same
    // grid corner connects. An owned endpoint at a corner means the
    // corner itself is strictly blocked, so the chain passes through it.
    for ci in 0..n {
        for cj in 0..m {
            let corner = (ci, cj);
            let mut at: Vec<NodeId> = Vec::new();
            if cj + 1 < m {
                at.extend(
                    vertical[cj][ci]
                        .iter()
                        .filter(|&&p| g.node(p).corner_at_lo() == Some(corner)),
                );
            }
            if cj >= 1 {
                at.extend(
                    vertical[cj - 1][ci]
                        .iter()
                        .filter(|&&p| g.node(p).corner_at_hi() == Some(corner)),
                );
            }
            if ci + 1 < n {
                at.extend(
                    horizontal[ci][cj]
                        .iter()
                        .filter(|&&p| g.node(p).corner_at_lo() == Some(corner)),
                );
            }
            if ci >= 1 {
                at.extend(
                    horizontal[ci - 1][cj]
                        .iter()
                        .filter(|&&p| g.node(p).corner_at_hi() == Some(corner)),
                );
            }
            for &a in &at {
                for &b in &at {
                    if a != b {
                        g.add_edge(a, b);
                    }
                }
            }
        }
    }

    // Line jumps through consecutive fully blocked edges (the first
    // neighbor is already corner-linked).
    for j in 0..m - 1 {
        for i in 0..n {
            for &p in &vertical[j][i] {
                if g.node(p).corner_at_hi().is_none() {
                    continue;
                }
                let mut jj = j + 1;
                while jj < m - 1 {
                    let Some(&q) = vertical[jj][i]
                        .iter()
                        .find(|&&q| g.node(q).corner_at_lo().is_some())
                    else {
                        break;
                    };
                    if jj > j + 1 {
                        g.add_edge(p, q);
                    }
                    if g.node(q).corner_at_hi().is_some() {
                        jj += 1;
                    } else {
                        break;
                    }
                }
            }
        }
    }
    for i in 0..n - 1 {
        for j in 0..m {
            for &p in &horizontal[i][j] {
                if g.node(p).corner_at_lo().is_none() {
                    continue;
                }
                let mut ii = i;
                while ii >= 1 {
                    let Some(&q) = horizontal[ii - 1][j]
                        .iter()
                        .find(|&&q| g.node(q).corner_at_hi().is_some())
                    else {
                        break;
                    };
                    if ii < i {
                        g.add_edge(p, q);
                    }
                    if g.node(q).corner_at_lo().is_some() {
                        ii -= 1;
                    } else {
                        break;
                    }
                }
            }
        }
    }

    // Anti-monotone overlap jumps between parallel pieces. The chain
    // climbs vertical pieces and jumps rightward: every surviving
    // traversal crosses the current line above the piece, so a piece
    // beyond whose span starts below that level leaves no monotone
    // passage in between. The horizontal dual travels leftward and jumps
    // downward. Jumps are directional; the reverse orientation is covered
    // by the mirrored search in `no_certificate`.
    let mut verts: Vec<NodeId> = Vec::new();
    for row in &vertical {
        for cell in row {
            verts.extend(cell.iter().copied());
        }
    }
    for &a in &verts {
        for &b in &verts {
            let (na, nb) = (*g.node(a), *g.node(b));
            if nb.i > na.i && nb.along_lo() < na.along_hi() {
                g.add_edge(a, b);
            }
        }
    }
    let mut horis: Vec<NodeId> = Vec::new();
    for col in &horizontal {
        for cell in col {
            horis.extend(cell.iter().copied());
        }
    }
    for &a in &horis {
        for &b in &horis {
            let (na, nb) = (*g.node(a), *g.node(b));
            if nb.j < na.j && nb.along_hi() > na.along_lo() {
                g.add_edge(a, b);
            }
        }
    }

    // Seeds touch the bottom/right boundary through an owned endpoint or
    // lie on a boundary edge outright; sinks mirror them on the top/left.
    for idx in 0..g.nodes.len() {
        let node = g.nodes[idx];
        let (src, sink) = match node.axis {
            Axis::Vertical => (
                (node.j == 0 && node.corner_at_lo().is_some()) || node.i == n - 1,
                (node.j == m - 2 && node.corner_at_hi().is_some()) || node.i == 0,
            ),
            Axis::Horizontal => (
                node.j == 0 || (node.i == n - 2 && node.corner_at_hi().is_some()),
                node.j == m - 1 || (node.i == 0 && node.corner_at_lo().is_some()),
            ),
        };
        if src {
            g.sources.push(NodeId(idx));
        }
        if sink {
            g.sinks[idx] = true;
        }
    }

    #[cfg(debug_assertions)]
    if std::env::var_os("FRECHET_CERT_DEBUG_FSD").is_some() {
        eprintln!(
            "blocked graph: {} nodes, {} sources, {} sinks",
            g.len(),
            g.sources.len(),
            g.sinks.iter().filter(|&&s| s).count()
        );
    }
    g
}

/// Complement of a free interval within [0, 1]: exactly one of the four
/// cases fully blocked / blocked prefix / blocked suffix / split applies,
/// a fully free edge yields no piece. Piece ends on the free boundary are
/// open (the distance there is exactly delta).
fn blocked_pieces(free: Interval) -> Vec<(f64, f64, Closure)> {
    if free.is_empty() {
        return vec![(0.0, 1.0, Closure::ClosedBoth)];
    }
    let mut out = Vec::with_capacity(2);
    if free.begin > 0.0 {
        out.push((0.0, free.begin, Closure::ClosedLo));
    }
    if free.end < 1.0 {
        out.push((free.end, 1.0, Closure::ClosedHi));
    }
    out
}
