//! Random polygonal curves (bounded random walk + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic curve sampler for property tests and
//!   benches. The generator is parameterizable, reproducible, and returns a
//!   plain `Curve` ready for the deciders.
//!
//! Model
//! - Start at a configurable origin, then take `len - 1` steps whose length
//!   and heading are jittered inside configured bounds.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::curve::Curve;
use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Walk sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    /// Number of vertices (clamped to >= 1).
    pub len: usize,
    /// Mean step length.
    pub step: f64,
    /// Relative step-length jitter in [0, 1).
    pub step_jitter: f64,
    /// Maximum heading change per step, radians.
    pub turn: f64,
    /// Walk origin.
    pub origin: (f64, f64),
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            len: 8,
            step: 1.0,
            step_jitter: 0.5,
            turn: 1.2,
            origin: (0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random polygonal curve via a jittered walk.
pub fn draw_walk_curve(cfg: WalkCfg, tok: ReplayToken) -> Curve {
    let mut rng = tok.to_std_rng();
    let len = cfg.len.max(1);
    let jitter = cfg.step_jitter.clamp(0.0, 0.99);
    let mut pts = Vec::with_capacity(len);
    let mut pos = Point::new(cfg.origin.0, cfg.origin.1);
    let mut heading: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    pts.push(pos);
    for _ in 1..len {
        heading += (rng.gen::<f64>() * 2.0 - 1.0) * cfg.turn;
        let step = cfg.step * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * jitter);
        pos += Point::new(heading.cos(), heading.sin()) * step;
        pts.push(pos);
    }
    Curve::new(pts)
}
