//! Certificates: independently verifiable witnesses for both answers.
//!
//! A certificate owns an ordered sequence of matched positions plus the
//! answer flag. `validate` re-checks the witness against the curves and δ
//! without trusting anything the search did:
//! - YES: endpoint pairs, double monotonicity, and δ-feasibility of every
//!   straight step, evaluated at all unit-cell crossings of the step (the
//!   distance along a step is convex per crossed cell, so the crossings and
//!   endpoints carry the maximum).
//! - NO: every point blocked, boundary start/end, and each step either runs
//!   along a grid line whose open span avoids all free intervals, passes
//!   through a blocked grid corner, or is an anti-monotone jump.
//!
//! A validation failure signals a construction bug, never a legitimate
//! answer.

use crate::geom::{dist, intersection_interval, Curve, CurvePoint, GeomCfg, PosPair};

/// Validation failure. Indicates an implementation defect in whatever built
/// the certificate.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidateError {
    /// No answer flag set (sentinel certificates cannot validate).
    MissingAnswer,
    /// Traversal is empty.
    EmptyTraversal,
    /// YES traversal does not start at the first vertices or end at the
    /// last.
    TraversalEndpoints,
    /// A parameter decreased between consecutive YES pairs.
    Backtrack { index: usize },
    /// A YES step leaves the δ ball.
    StepTooFar { index: usize, dist: f64 },
    /// A NO witness point is within δ.
    PairWithinDelta { index: usize, dist: f64 },
    /// A single-point NO witness is not the start or end pair.
    BadWitnessPoint,
    /// A NO witness point lies on no grid line.
    OffGrid { index: usize },
    /// Blocking chain does not start on the bottom/right boundary or end on
    /// the top/left boundary.
    BarrierEndpoints,
    /// A blocking-chain step is not a valid barrier move.
    BarrierStep { index: usize },
}

impl std::fmt::Display for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAnswer => write!(f, "certificate has no answer"),
            Self::EmptyTraversal => write!(f, "certificate traversal is empty"),
            Self::TraversalEndpoints => write!(f, "traversal does not span both curves"),
            Self::Backtrack { index } => write!(f, "traversal backtracks at step {index}"),
            Self::StepTooFar { index, dist } => {
                write!(f, "traversal step {index} reaches distance {dist}")
            }
            Self::PairWithinDelta { index, dist } => {
                write!(f, "witness point {index} is within delta ({dist})")
            }
            Self::BadWitnessPoint => write!(f, "witness point is not an endpoint pair"),
            Self::OffGrid { index } => write!(f, "witness point {index} lies on no grid line"),
            Self::BarrierEndpoints => write!(f, "blocking chain misses a diagram boundary"),
            Self::BarrierStep { index } => write!(f, "invalid blocking step {index}"),
        }
    }
}

impl std::error::Error for ValidateError {}

/// Witness for one decision query. Borrows the curves for its lifetime.
#[derive(Clone, Debug)]
pub struct Certificate<'a> {
    curve1: &'a Curve,
    curve2: &'a Curve,
    delta: f64,
    cfg: GeomCfg,
    traversal: Vec<PosPair>,
    answer: Option<bool>,
}

impl<'a> Certificate<'a> {
    pub fn new(curve1: &'a Curve, curve2: &'a Curve, delta: f64, cfg: GeomCfg) -> Self {
        Self {
            curve1,
            curve2,
            delta,
            cfg,
            traversal: Vec::new(),
            answer: None,
        }
    }

    /// Sentinel: no witness for the requested orientation.
    pub fn sentinel(curve1: &'a Curve, curve2: &'a Curve, delta: f64) -> Self {
        Self::new(curve1, curve2, delta, GeomCfg::default())
    }

    #[inline]
    pub fn push(&mut self, pair: PosPair) {
        self.traversal.push(pair);
    }

    #[inline]
    pub fn set_answer(&mut self, answer: bool) {
        self.answer = Some(answer);
    }

    #[inline]
    pub fn answer(&self) -> Option<bool> {
        self.answer
    }

    #[inline]
    pub fn traversal(&self) -> &[PosPair] {
        &self.traversal
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.traversal.len()
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.answer.is_none() && self.traversal.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidateError> {
        match self.answer {
            None => Err(ValidateError::MissingAnswer),
            Some(true) => self.validate_yes(),
            Some(false) => self.validate_no(),
        }
    }

    /// Text serialization for external reporting.
    pub fn dump(&self) -> String {
        use std::fmt::Write as _;
        let mut out = String::new();
        let answer = match self.answer {
            Some(true) => "YES",
            Some(false) => "NO",
            None => "UNKNOWN",
        };
        let _ = writeln!(out, "{answer} delta={} size={}", self.delta, self.size());
        for (p, q) in &self.traversal {
            let _ = writeln!(
                out,
                "{} {} | {} {}",
                p.point(),
                p.fraction(),
                q.point(),
                q.fraction()
            );
        }
        out
    }

    fn validate_yes(&self) -> Result<(), ValidateError> {
        if self.traversal.is_empty() {
            return Err(ValidateError::EmptyTraversal);
        }
        let n = self.curve1.size();
        let m = self.curve2.size();
        let first = self.traversal[0];
        let last = self.traversal[self.traversal.len() - 1];
        let at_start = first.0 == CurvePoint::new(0, 0.0) && first.1 == CurvePoint::new(0, 0.0);
        let at_end =
            last.0 == CurvePoint::new(n - 1, 0.0) && last.1 == CurvePoint::new(m - 1, 0.0);
        if !at_start || !at_end {
            return Err(ValidateError::TraversalEndpoints);
        }
        let limit = self.delta + self.cfg.eps_feas;
        let d0 = dist(
            self.curve1.interpolate_at(first.0),
            self.curve2.interpolate_at(first.1),
        );
        if d0 > limit {
            return Err(ValidateError::StepTooFar { index: 0, dist: d0 });
        }
        for i in 1..self.traversal.len() {
            let a = self.traversal[i - 1];
            let b = self.traversal[i];
            if b.0 < a.0 || b.1 < a.1 {
                return Err(ValidateError::Backtrack { index: i });
            }
            let d = self.max_step_distance(a, b);
            if d > limit {
                return Err(ValidateError::StepTooFar { index: i, dist: d });
            }
        }
        Ok(())
    }

    /// Maximum matched distance along the straight parameter-space step
    /// `a -> b`, evaluated at the step endpoints and every unit-cell
    /// crossing.
    fn max_step_distance(&self, a: PosPair, b: PosPair) -> f64 {
        let (x1, y1) = (a.0.param(), a.1.param());
        let (x2, y2) = (b.0.param(), b.1.param());
        let dx = x2 - x1;
        let dy = y2 - y1;
        let mut ts = vec![0.0, 1.0];
        push_crossings(&mut ts, x1, dx);
        push_crossings(&mut ts, y1, dy);
        ts.iter()
            .map(|&t| {
                dist(
                    self.curve1.eval(x1 + t * dx),
                    self.curve2.eval(y1 + t * dy),
                )
            })
            .fold(0.0, f64::max)
    }

    fn validate_no(&self) -> Result<(), ValidateError> {
        if self.traversal.is_empty() {
            return Err(ValidateError::EmptyTraversal);
        }
        let n = self.curve1.size();
        let m = self.curve2.size();
        for (i, (p, q)) in self.traversal.iter().enumerate() {
            let d = dist(
                self.curve1.interpolate_at(*p),
                self.curve2.interpolate_at(*q),
            );
            if d <= self.delta {
                return Err(ValidateError::PairWithinDelta { index: i, dist: d });
            }
        }
        if self.traversal.len() == 1 {
            let (p, q) = self.traversal[0];
            let at_start = p == CurvePoint::new(0, 0.0) && q == CurvePoint::new(0, 0.0);
            let at_end =
                p == CurvePoint::new(n - 1, 0.0) && q == CurvePoint::new(m - 1, 0.0);
            return if at_start || at_end {
                Ok(())
            } else {
                Err(ValidateError::BadWitnessPoint)
            };
        }
        // Blocking chain: every point on a grid line, boundary to boundary.
        for (i, (p, q)) in self.traversal.iter().enumerate() {
            if !p.is_vertex() && !q.is_vertex() {
                return Err(ValidateError::OffGrid { index: i });
            }
        }
        let (fx, fy) = pair_params(self.traversal[0]);
        let (lx, ly) = pair_params(self.traversal[self.traversal.len() - 1]);
        let starts = fy == 0.0 || fx == (n - 1) as f64;
        let ends = ly == (m - 1) as f64 || lx == 0.0;
        if !starts || !ends {
            return Err(ValidateError::BarrierEndpoints);
        }
        for i in 1..self.traversal.len() {
            self.check_barrier_step(i, self.traversal[i - 1], self.traversal[i])?;
        }
        Ok(())
    }

    fn check_barrier_step(&self, index: usize, a: PosPair, b: PosPair) -> Result<(), ValidateError> {
        let (x1, y1) = pair_params(a);
        let (x2, y2) = pair_params(b);
        let err = Err(ValidateError::BarrierStep { index });
        if x1 == x2 && a.0.is_vertex() {
            // Along the vertical line of curve1 vertex x1.
            return if self.vline_blocked(a.0.point(), y1, y2) {
                Ok(())
            } else {
                err
            };
        }
        if y1 == y2 && a.1.is_vertex() {
            return if self.hline_blocked(a.1.point(), x1, x2) {
                Ok(())
            } else {
                err
            };
        }
        // Step through a blocked grid corner.
        if a.0.is_vertex() && b.1.is_vertex() {
            let (ci, cj) = (a.0.point(), b.1.point());
            if dist(self.curve1[ci], self.curve2[cj]) > self.delta
                && self.vline_blocked(ci, y1, cj as f64)
                && self.hline_blocked(cj, ci as f64, x2)
            {
                return Ok(());
            }
        }
        if b.0.is_vertex() && a.1.is_vertex() {
            let (ci, cj) = (b.0.point(), a.1.point());
            if dist(self.curve1[ci], self.curve2[cj]) > self.delta
                && self.hline_blocked(cj, x1, ci as f64)
                && self.vline_blocked(ci, cj as f64, y2)
            {
                return Ok(());
            }
        }
        // Anti-monotone jump between blocked points on distinct lines.
        let dx = x2 - x1;
        let dy = y2 - y1;
        let monotone = (dx > 0.0 && dy > 0.0) || (dx < 0.0 && dy < 0.0);
        if !monotone && (dx != 0.0 || dy != 0.0) {
            return Ok(());
        }
        err
    }

    /// The open span between `ya` and `yb` on the vertical grid line of
    /// curve1 vertex `i` avoids every free interval it crosses.
    fn vline_blocked(&self, i: usize, ya: f64, yb: f64) -> bool {
        let (lo, hi) = if ya <= yb { (ya, yb) } else { (yb, ya) };
        let first = lo.floor() as usize;
        let mut j = first;
        while (j as f64) < hi && j + 1 < self.curve2.size() {
            let free =
                intersection_interval(self.curve1[i], self.delta, self.curve2[j], self.curve2[j + 1]);
            let seg_lo = (lo - j as f64).max(0.0);
            let seg_hi = (hi - j as f64).min(1.0);
            if free.meets_open(seg_lo, seg_hi) {
                return false;
            }
            j += 1;
        }
        true
    }

    fn hline_blocked(&self, j: usize, xa: f64, xb: f64) -> bool {
        let (lo, hi) = if xa <= xb { (xa, xb) } else { (xb, xa) };
        let first = lo.floor() as usize;
        let mut i = first;
        while (i as f64) < hi && i + 1 < self.curve1.size() {
            let free =
                intersection_interval(self.curve2[j], self.delta, self.curve1[i], self.curve1[i + 1]);
            let seg_lo = (lo - i as f64).max(0.0);
            let seg_hi = (hi - i as f64).min(1.0);
            if free.meets_open(seg_lo, seg_hi) {
                return false;
            }
            i += 1;
        }
        true
    }
}

#[inline]
fn pair_params(p: PosPair) -> (f64, f64) {
    (p.0.param(), p.1.param())
}

/// Collect step parameters where `x0 + t * dx` crosses an integer,
/// 0 < t < 1.
fn push_crossings(ts: &mut Vec<f64>, x0: f64, dx: f64) {
    if dx == 0.0 {
        return;
    }
    let (a, b) = if dx > 0.0 { (x0, x0 + dx) } else { (x0 + dx, x0) };
    let mut k = a.ceil();
    while k < b {
        if k > a {
            ts.push((k - x0) / dx);
        }
        k += 1.0;
    }
}
