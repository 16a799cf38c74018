//! Fraction intervals and the ball–segment intersection primitive.

use super::types::Point;

/// Closed sub-range of a segment's [0, 1] parameterization.
///
/// `begin > end` encodes the empty interval; `Interval::EMPTY` is the
/// canonical representative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub begin: f64,
    pub end: f64,
}

impl Interval {
    pub const EMPTY: Interval = Interval {
        begin: 1.0,
        end: 0.0,
    };

    #[inline]
    pub fn new(begin: f64, end: f64) -> Self {
        Self { begin, end }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin > self.end
    }

    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.begin <= t && t <= self.end
    }

    /// Does this interval contain the whole closed range [lo, hi]?
    #[inline]
    pub fn covers(&self, lo: f64, hi: f64) -> bool {
        self.begin <= lo && hi <= self.end
    }

    /// Does the open range (lo, hi) meet this interval?
    #[inline]
    pub fn meets_open(&self, lo: f64, hi: f64) -> bool {
        !self.is_empty() && self.begin < hi && lo < self.end
    }
}

/// Sub-interval of the segment `a -> b` (parameterized in [0, 1]) whose
/// points lie within `delta` of `center`.
///
/// Solves `|a + t (b - a) - center|^2 <= delta^2` and clamps the root range
/// to [0, 1]. A zero-length segment degenerates to a point check yielding
/// the full interval or the empty one.
pub fn intersection_interval(center: Point, delta: f64, a: Point, b: Point) -> Interval {
    let d = b - a;
    let f = a - center;
    let qa = d.dot(&d);
    let qb = 2.0 * d.dot(&f);
    let qc = f.dot(&f) - delta * delta;

    if qa == 0.0 {
        // Degenerate segment: within range iff the single point is.
        return if qc <= 0.0 {
            Interval::new(0.0, 1.0)
        } else {
            Interval::EMPTY
        };
    }

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return Interval::EMPTY;
    }
    let sq = disc.sqrt();
    let t0 = (-qb - sq) / (2.0 * qa);
    let t1 = (-qb + sq) / (2.0 * qa);
    if t1 < 0.0 || t0 > 1.0 {
        return Interval::EMPTY;
    }
    Interval::new(t0.max(0.0), t1.min(1.0))
}
