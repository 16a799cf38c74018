//! Plain continuous Fréchet decision (no certificate).
//!
//! Classic reachable-interval dynamic program over the free-space diagram,
//! O(nm). Used only to cross-check the certifying core, never as part of
//! its decision logic.

use crate::geom::{dist, intersection_interval, Curve, Interval};

/// Is the continuous Fréchet distance between the curves at most `delta`?
pub fn less_than(curve1: &Curve, curve2: &Curve, delta: f64) -> bool {
    let n = curve1.size();
    let m = curve2.size();
    if n == 0 || m == 0 {
        return n == m;
    }
    if dist(curve1.first(), curve2.first()) > delta
        || dist(curve1.last(), curve2.last()) > delta
    {
        return false;
    }
    if n == 1 {
        return within_all(curve1.first(), curve2, delta);
    }
    if m == 1 {
        return within_all(curve2.first(), curve1, delta);
    }

    let free_v = |i: usize, j: usize| {
        intersection_interval(curve1[i], delta, curve2[j], curve2[j + 1])
    };
    let free_h = |i: usize, j: usize| {
        intersection_interval(curve2[j], delta, curve1[i], curve1[i + 1])
    };

    // Reachable sub-intervals of the vertical edges on the current column
    // boundary, seeded by propagation up the left diagram boundary.
    let mut lefts: Vec<Interval> = Vec::with_capacity(m - 1);
    let mut open = true;
    for j in 0..m - 1 {
        let free = free_v(0, j);
        let reach = if open && free.begin == 0.0 {
            free
        } else {
            Interval::EMPTY
        };
        open = reach.end == 1.0;
        lefts.push(reach);
    }

    // Reachable sub-intervals of the horizontal edges on the bottom
    // boundary.
    let mut bottoms: Vec<Interval> = Vec::with_capacity(n - 1);
    open = true;
    for i in 0..n - 1 {
        let free = free_h(i, 0);
        let reach = if open && free.begin == 0.0 {
            free
        } else {
            Interval::EMPTY
        };
        open = reach.end == 1.0;
        bottoms.push(reach);
    }

    for i in 0..n - 1 {
        let mut bottom = bottoms[i];
        for j in 0..m - 1 {
            let left = lefts[j];
            // Right edge of cell (i, j).
            let free_r = free_v(i + 1, j);
            let right = if !bottom.is_empty() {
                free_r
            } else if !left.is_empty() {
                clip_from(free_r, left.begin)
            } else {
                Interval::EMPTY
            };
            // Top edge of cell (i, j).
            let free_t = free_h(i, j + 1);
            let top = if !left.is_empty() {
                free_t
            } else if !bottom.is_empty() {
                clip_from(free_t, bottom.begin)
            } else {
                Interval::EMPTY
            };
            lefts[j] = right;
            bottom = top;
        }
        bottoms[i] = bottom;
    }

    // The top-right corner is reachable through the last cell's right or
    // top edge.
    lefts[m - 2].end == 1.0 || bottoms[n - 2].end == 1.0
}

#[inline]
fn clip_from(free: Interval, lo: f64) -> Interval {
    if free.is_empty() || free.end < lo {
        Interval::EMPTY
    } else {
        Interval::new(free.begin.max(lo), free.end)
    }
}

fn within_all(p: crate::geom::Point, curve: &Curve, delta: f64) -> bool {
    curve.points().iter().all(|&q| dist(p, q) <= delta)
}
