//! Graph traits the algorithms are written against.
//!
//! The flow algorithms count vertices, iterate over edges with their
//! endpoints and read edge attributes. Anything that implements [`GraphRef`]
//! can be fed to them.

pub mod capacity;
pub mod error;
pub mod id;
pub mod marker;

use std::ops::Range;

use self::{
    error::AddEdgeError,
    id::{EdgeId, IdType, VertexId},
    marker::{Direction, EdgeType},
};

/// An edge together with its endpoints and attribute.
#[derive(Debug)]
pub struct EdgeRef<'a, E> {
    pub id: EdgeId,
    pub attr: &'a E,
    pub from: VertexId,
    pub to: VertexId,
}

/// A neighbor of a vertex reached through an edge.
///
/// `pred` is the vertex the neighbor was asked for and `dir` is the direction
/// of the edge relative to `pred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborRef {
    pub id: VertexId,
    pub edge: EdgeId,
    pub pred: VertexId,
    pub dir: Direction,
}

pub trait GraphBase {
    type EdgeType: EdgeType;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }
}

pub trait VertexSet: GraphBase {
    fn vertex_count(&self) -> usize;

    /// Vertices are always numbered contiguously from zero.
    fn vertices_by_id(&self) -> VertexIds {
        VertexIds(0..self.vertex_count())
    }

    fn contains_vertex(&self, id: &VertexId) -> bool {
        id.as_usize() < self.vertex_count()
    }
}

pub trait EdgeSet: GraphBase {
    fn edge_count(&self) -> usize;

    fn endpoints(&self, id: &EdgeId) -> Option<(VertexId, VertexId)>;

    fn contains_edge(&self, id: &EdgeId) -> bool {
        id.as_usize() < self.edge_count()
    }
}

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = NeighborRef>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &VertexId) -> Self::NeighborsIter<'_>;
    fn neighbors_directed(&self, from: &VertexId, dir: Direction) -> Self::NeighborsIter<'_>;

    fn degree_undirected(&self, id: &VertexId) -> usize {
        self.neighbors_undirected(id).count()
    }
}

pub trait GraphRef<V, E>: VertexSet + EdgeSet {
    type EdgesIter<'a>: Iterator<Item = EdgeRef<'a, E>>
    where
        Self: 'a,
        E: 'a;

    fn vertex(&self, id: &VertexId) -> Option<&V>;
    fn edge(&self, id: &EdgeId) -> Option<&E>;
    fn edges(&self) -> Self::EdgesIter<'_>;
}

pub trait GraphAdd<V, E>: VertexSet + EdgeSet {
    fn add_vertex(&mut self, vertex: V) -> VertexId;

    fn try_add_edge(
        &mut self,
        from: &VertexId,
        to: &VertexId,
        edge: E,
    ) -> Result<EdgeId, AddEdgeError<E>>;

    fn add_edge(&mut self, from: &VertexId, to: &VertexId, edge: E) -> EdgeId {
        match self.try_add_edge(from, to, edge) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    fn extend_with_edges<T, I>(&mut self, iter: I)
    where
        T: IntoEdge<E>,
        I: IntoIterator<Item = T>,
        V: Default,
    {
        for edge in iter {
            let (from, to, edge) = edge.unpack();
            let vertex_bound = from.as_usize().max(to.as_usize());

            while self.vertex_count() <= vertex_bound {
                self.add_vertex(V::default());
            }

            self.add_edge(&from, &to, edge);
        }
    }
}

/// Conversion into an `(from, to, attribute)` triple used by
/// [`GraphAdd::extend_with_edges`].
pub trait IntoEdge<E> {
    fn unpack(self) -> (VertexId, VertexId, E);
}

impl<E, I: Into<VertexId>> IntoEdge<E> for (I, I, E) {
    fn unpack(self) -> (VertexId, VertexId, E) {
        (self.0.into(), self.1.into(), self.2)
    }
}

impl<E: Default, I: Into<VertexId>> IntoEdge<E> for (I, I) {
    fn unpack(self) -> (VertexId, VertexId, E) {
        (self.0.into(), self.1.into(), E::default())
    }
}

/// Iterator over all vertex IDs of a graph.
#[derive(Debug, Clone)]
pub struct VertexIds(Range<usize>);

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(VertexId::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for VertexIds {}
