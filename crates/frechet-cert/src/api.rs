//! Curated re-export surface for callers and experiment drivers.
//!
//! Prefer these re-exports for clarity and consistency; the module paths
//! underneath may shift as the crate evolves.

// Curves and positions
pub use crate::geom::{
    dist, intersection_interval, Curve, CurvePoint, GeomCfg, Interval, Point, PosPair,
};
// Random curve sampling
pub use crate::geom::rand::{draw_walk_curve, ReplayToken, WalkCfg};
// Certificates
pub use crate::certificate::{Certificate, ValidateError};
// Certifying decision
pub use crate::freespace::{
    bfs_witness, build_blocked_graph, build_free_graph, decide_and_certify, no_certificate,
    yes_certificate, Axis, NodeId, SpanGraph, SpanNode,
};
// Plain decision (cross-validation only)
pub use crate::decider::less_than;
