//! Data types for the free-space graphs and search state.
//!
//! Kept small and explicit to make the `build`, `search` and `extract`
//! modules easy to read. Nodes live in an arena and are addressed by
//! `NodeId`; adjacency lists store ids, never references.

/// Arena index of a span node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Which cell edge a span lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Along a segment of curve 1, against a vertex of curve 2.
    Horizontal,
    /// Along a segment of curve 2, against a vertex of curve 1.
    Vertical,
}

/// Which endpoints of a span belong to the span itself.
///
/// Free intervals are closed, so their complement is open wherever it
/// meets a free boundary (the distance there is exactly δ): a blocked
/// prefix owns its start, a blocked suffix its end, a fully blocked edge
/// both. Corner contact is only real through an owned endpoint; nothing
/// here compares fractions with a tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Closure {
    Open,
    ClosedLo,
    ClosedHi,
    ClosedBoth,
}

impl Closure {
    #[inline]
    pub fn at_lo(self) -> bool {
        matches!(self, Closure::ClosedLo | Closure::ClosedBoth)
    }

    #[inline]
    pub fn at_hi(self) -> bool {
        matches!(self, Closure::ClosedHi | Closure::ClosedBoth)
    }
}

/// One sub-interval attached to a grid-cell edge, used as a graph vertex.
///
/// On the free side `lo == hi` marks a zero-length piece at an exact
/// partition breakpoint (corner contacts and tangencies) and spans are
/// always closed. On the blocked side pieces have positive length and
/// carry the closure of their endpoints.
#[derive(Clone, Copy, Debug)]
pub struct SpanNode {
    pub axis: Axis,
    /// Index on curve 1: segment index for horizontal spans, vertex index
    /// for vertical ones.
    pub i: usize,
    /// Index on curve 2: vertex index for horizontal spans, segment index
    /// for vertical ones.
    pub j: usize,
    /// Slot within the edge's partition (free side) or piece index
    /// (blocked side).
    pub slot: usize,
    /// Piece fractions, `lo <= hi`.
    pub lo: f64,
    pub hi: f64,
    pub closure: Closure,
}

impl SpanNode {
    /// Absolute along-edge coordinate of the piece's low end (curve2
    /// parameter for vertical spans, curve1 parameter for horizontal
    /// ones).
    #[inline]
    pub fn along_lo(&self) -> f64 {
        self.along_base() + self.lo
    }

    #[inline]
    pub fn along_hi(&self) -> f64 {
        self.along_base() + self.hi
    }

    #[inline]
    pub fn along_base(&self) -> f64 {
        match self.axis {
            Axis::Horizontal => self.i as f64,
            Axis::Vertical => self.j as f64,
        }
    }

    /// Grid corner this piece owns at its low end, as
    /// (curve1 vertex, curve2 vertex). Owning requires exact fraction 0
    /// and a closed endpoint.
    pub fn corner_at_lo(&self) -> Option<(usize, usize)> {
        if self.lo != 0.0 || !self.closure.at_lo() {
            return None;
        }
        Some((self.i, self.j))
    }

    pub fn corner_at_hi(&self) -> Option<(usize, usize)> {
        if self.hi != 1.0 || !self.closure.at_hi() {
            return None;
        }
        Some(match self.axis {
            Axis::Horizontal => (self.i + 1, self.j),
            Axis::Vertical => (self.i, self.j + 1),
        })
    }
}

/// Directed reachability (or blocking) graph over span nodes.
///
/// The synthetic source and sink of the search are implicit: `sources`
/// seeds the BFS and `sinks` marks accepting nodes. Both exist only for the
/// one query that owns the graph.
#[derive(Debug, Default)]
pub struct SpanGraph {
    pub nodes: Vec<SpanNode>,
    pub adj: Vec<Vec<NodeId>>,
    pub sources: Vec<NodeId>,
    pub sinks: Vec<bool>,
}

impl SpanGraph {
    #[inline]
    pub fn push_node(&mut self, node: SpanNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.adj.push(Vec::new());
        self.sinks.push(false);
        id
    }

    #[inline]
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.adj[from.0].push(to);
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &SpanNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
