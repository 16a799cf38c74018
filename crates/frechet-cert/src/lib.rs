//! Certifying decider for the continuous Fréchet distance.
//!
//! Given two polygonal curves and a threshold δ, the crate answers whether
//! the Fréchet distance is at most δ and, unlike a plain decider, returns a
//! compact certificate that can be re-checked independently: a monotone
//! sequence of matched positions for YES, an endpoint pair or blocking
//! chain for NO.
//!
//! The core pipeline is `freespace`: diagram construction, reachability
//! graph assembly, BFS, certificate extraction. `decider` holds the plain
//! reachable-interval decision used only for cross-validation, `geom` the
//! curve/interval substrate, and `certificate` the witness type with its
//! validation logic.

pub mod certificate;
pub mod decider;
pub mod freespace;
pub mod geom;

pub mod api;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports for the common entry points.
pub use certificate::{Certificate, ValidateError};
pub use freespace::{decide_and_certify, no_certificate, yes_certificate};
pub use geom::{Curve, CurvePoint, GeomCfg, Point, PosPair};
