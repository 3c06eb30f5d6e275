//! Type-level markers of edge direction.
//!
//! Graph storages are parameterized by [`Directed`] or [`Undirected`]. Flow
//! algorithms turn a directed edge into one residual arc with capacity and
//! an empty reverse arc, an undirected edge into two arcs with capacity.

/// Orientation of an edge relative to the vertex it is looked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The vertex is the tail of the edge.
    Outgoing,
    /// The vertex is the head of the edge.
    Incoming,
}

pub use Direction::*;

impl Direction {
    /// Position of the per-vertex edge list for this direction.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Outgoing => 0,
            Incoming => 1,
        }
    }
}

/// Edges can carry flow both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

/// Edges carry flow only from tail to head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

/// Implemented only by [`Directed`] and [`Undirected`]. Gomory–Hu trees
/// require the latter.
pub trait EdgeType: sealed::Sealed + 'static {
    fn is_directed() -> bool;

    /// Edge lists a storage keeps per vertex. Undirected edges are kept in a
    /// single list, so visiting all neighbors of a vertex means walking the
    /// lists for all returned directions.
    fn directions() -> &'static [Direction];
}

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }

    fn directions() -> &'static [Direction] {
        &[Outgoing, Incoming]
    }
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }

    fn directions() -> &'static [Direction] {
        &[Outgoing]
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_match_edge_lists() {
        assert_eq!(Directed::directions(), &[Outgoing, Incoming]);
        assert_eq!(Undirected::directions(), &[Outgoing]);
        assert!(Directed::is_directed());
        assert!(!Undirected::is_directed());
        assert_eq!(Incoming.index(), 1);
    }
}
