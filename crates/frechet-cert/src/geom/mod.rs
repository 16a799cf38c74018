//! Curve geometry (points, positions, fraction intervals).
//!
//! Purpose
//! - Provide the small geometric substrate the free-space machinery builds
//!   on: polygonal curves, exact positions on them, and the ball–segment
//!   intersection primitive returning fraction intervals.
//! - Keep the API minimal and numerically explicit: all corner decisions are
//!   exact equality on `CurvePoint` fields, tolerances live in `GeomCfg`
//!   only.

pub mod curve;
pub mod interval;
pub mod rand;
mod types;

pub use curve::{Curve, CurvePoint, PosPair};
pub use interval::{intersection_interval, Interval};
pub use types::{dist, GeomCfg, Point};

#[cfg(test)]
mod tests;
