//! Free-space diagram, reachability graphs and certificate extraction.
//!
//! Purpose
//! - Construct, per decision query, the free-space diagram of two curves at
//!   threshold δ, assemble a directed graph over its edge sub-intervals
//!   (the free ones for a YES witness, the blocked complement for a NO
//!   witness), search it breadth-first, and convert the parent chain into a
//!   validated certificate.
//!
//! Why this design
//! - Nodes live in an arena addressed by stable ids; adjacency lists store
//!   ids. The grid tables, the graph and the search state are owned by one
//!   query and dropped after extraction.
//! - All corner decisions are exact: run partitions carry zero-length
//!   pieces at their breakpoints and `CurvePoint` folds fraction 1 onto the
//!   next vertex, so no epsilon comparison participates in reachability.
//!
//! Code cross-refs: `geom::{Curve,CurvePoint,Interval,intersection_interval,
//! GeomCfg}`, `certificate::Certificate`.

mod build;
mod extract;
mod search;
mod types;

pub use build::{build_blocked_graph, build_free_graph};
pub use extract::{decide_and_certify, no_certificate, yes_certificate};
pub use search::bfs_witness;
pub use types::{Axis, Closure, NodeId, SpanGraph, SpanNode};

#[cfg(test)]
mod tests;
