//! Basic 2D types and tolerances shared by the free-space machinery.
//!
//! - `Point`: 2D point, `nalgebra::Vector2<f64>`.
//! - `GeomCfg`: centralizes the two tolerances used by certificate
//!   extraction and validation.

use nalgebra::Vector2;

/// 2D point on a curve.
pub type Point = Vector2<f64>;

/// Tolerance configuration.
///
/// Corner contacts are decided by exact fraction equality, so no tolerance
/// participates in graph construction. The two constants here only shape
/// certificates and their validation:
/// - `eps_feas`: slack added to δ when re-checking feasibility of a YES
///   traversal (absorbs round-off between the quadratic roots used during
///   construction and the re-evaluated distances).
/// - `eps_nudge`: how far a NO-side anchor is moved off a free-boundary
///   endpoint into the interior of its blocked piece (clamped to the piece's
///   half-width).
///
/// Both are absolute and therefore scale-sensitive; inputs far from unit
/// scale may need adjusted values.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps_feas: f64,
    pub eps_nudge: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_feas: 1e-7,
            eps_nudge: 1e-7,
        }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn dist(a: Point, b: Point) -> f64 {
    (a - b).norm()
}
