use std::{marker::PhantomData, ops::Index, slice};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    id::{EdgeId, IdType, VertexId},
    marker::{Direction, EdgeType},
    EdgeRef, EdgeSet, GraphAdd, GraphBase, GraphRef, NeighborRef, Neighbors, VertexSet,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex<V> {
    data: V,
    // Outgoing and incoming edges. Undirected graphs use only the first list.
    edges: [Vec<EdgeId>; 2],
}

impl<V> Vertex<V> {
    fn new(data: V) -> Self {
        Self {
            data,
            edges: [Vec::new(), Vec::new()],
        }
    }
}

/// Adjacency list storage. Vertices and edges are only ever added, so their
/// IDs stay contiguous from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<V, E, Ty> {
    vertices: Vec<Vertex<V>>,
    edges: Vec<E>,
    endpoints: Vec<[VertexId; 2]>,
    ty: PhantomData<fn() -> Ty>,
}

impl<V, E, Ty: EdgeType> AdjList<V, E, Ty> {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            endpoints: Vec::with_capacity(edge_capacity),
            ty: PhantomData,
        }
    }

    pub fn vertex_attrs(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (VertexId::from_usize(index), &vertex.data))
    }

    fn neighbors_iter(&self, from: &VertexId, directions: &[Direction]) -> NeighborsIter<'_> {
        let vertex = &self.vertices[from.as_usize()];
        let mut lists: [(slice::Iter<'_, EdgeId>, Direction); 2] = [
            ([].iter(), Direction::Outgoing),
            ([].iter(), Direction::Incoming),
        ];

        for (slot, dir) in lists.iter_mut().zip(directions) {
            // Undirected graphs keep all their edges in the outgoing list.
            let index = if Ty::is_directed() { dir.index() } else { 0 };
            *slot = (vertex.edges[index].iter(), *dir);
        }

        NeighborsIter {
            from: *from,
            lists,
            current: 0,
            endpoints: &self.endpoints,
        }
    }
}

impl<V, E, Ty: EdgeType> Default for AdjList<V, E, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, Ty: EdgeType> GraphBase for AdjList<V, E, Ty> {
    type EdgeType = Ty;
}

impl<V, E, Ty: EdgeType> VertexSet for AdjList<V, E, Ty> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, E, Ty: EdgeType> EdgeSet for AdjList<V, E, Ty> {
    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn endpoints(&self, id: &EdgeId) -> Option<(VertexId, VertexId)> {
        self.endpoints
            .get(id.as_usize())
            .map(|endpoints| (endpoints[0], endpoints[1]))
    }
}

impl<V, E, Ty: EdgeType> Neighbors for AdjList<V, E, Ty> {
    type NeighborsIter<'a> = NeighborsIter<'a>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &VertexId) -> Self::NeighborsIter<'_> {
        self.neighbors_iter(from, Ty::directions())
    }

    fn neighbors_directed(&self, from: &VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        self.neighbors_iter(from, &[dir])
    }
}

impl<V, E, Ty: EdgeType> GraphRef<V, E> for AdjList<V, E, Ty> {
    type EdgesIter<'a> = EdgesIter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn vertex(&self, id: &VertexId) -> Option<&V> {
        self.vertices.get(id.as_usize()).map(|vertex| &vertex.data)
    }

    fn edge(&self, id: &EdgeId) -> Option<&E> {
        self.edges.get(id.as_usize())
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            inner: self.edges.iter().zip(self.endpoints.iter()).enumerate(),
        }
    }
}

impl<V, E, Ty: EdgeType> GraphAdd<V, E> for AdjList<V, E, Ty> {
    fn add_vertex(&mut self, vertex: V) -> VertexId {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new(vertex));
        VertexId::from_usize(index)
    }

    fn try_add_edge(
        &mut self,
        from: &VertexId,
        to: &VertexId,
        edge: E,
    ) -> Result<EdgeId, AddEdgeError<E>> {
        if !self.contains_vertex(from) {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        }

        if !self.contains_vertex(to) {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::DestinationAbsent));
        }

        let id = EdgeId::from_usize(self.edges.len());
        self.edges.push(edge);
        self.endpoints.push([*from, *to]);

        if Ty::is_directed() {
            self.vertices[from.as_usize()].edges[Direction::Outgoing.index()].push(id);
            self.vertices[to.as_usize()].edges[Direction::Incoming.index()].push(id);
        } else {
            self.vertices[from.as_usize()].edges[0].push(id);

            // Self-loop is stored just once.
            if from != to {
                self.vertices[to.as_usize()].edges[0].push(id);
            }
        }

        Ok(id)
    }
}

impl<V, E, Ty: EdgeType> Index<VertexId> for AdjList<V, E, Ty> {
    type Output = V;

    fn index(&self, index: VertexId) -> &Self::Output {
        &self.vertices[index.as_usize()].data
    }
}

impl<V, E, Ty: EdgeType> Index<EdgeId> for AdjList<V, E, Ty> {
    type Output = E;

    fn index(&self, index: EdgeId) -> &Self::Output {
        &self.edges[index.as_usize()]
    }
}

pub struct NeighborsIter<'a> {
    from: VertexId,
    lists: [(slice::Iter<'a, EdgeId>, Direction); 2],
    current: usize,
    endpoints: &'a [[VertexId; 2]],
}

impl Iterator for NeighborsIter<'_> {
    type Item = NeighborRef;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (list, dir) = self.lists.get_mut(self.current)?;

            match list.next() {
                Some(edge) => {
                    let [u, v] = self.endpoints[edge.as_usize()];
                    let id = if u == self.from { v } else { u };

                    return Some(NeighborRef {
                        id,
                        edge: *edge,
                        pred: self.from,
                        dir: *dir,
                    });
                }
                None => self.current += 1,
            }
        }
    }
}

pub struct EdgesIter<'a, E> {
    inner: std::iter::Enumerate<std::iter::Zip<slice::Iter<'a, E>, slice::Iter<'a, [VertexId; 2]>>>,
}

impl<'a, E> Iterator for EdgesIter<'a, E> {
    type Item = EdgeRef<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, (attr, endpoints))| EdgeRef {
            id: EdgeId::from_usize(index),
            attr,
            from: endpoints[0],
            to: endpoints[1],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::marker::{Directed, Undirected};

    use super::*;

    #[test]
    fn add_and_read() {
        let mut graph = AdjList::<&str, u32, Directed>::new();

        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        let e = graph.add_edge(&a, &b, 7);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph[b], "b");
        assert_eq!(graph[e], 7);
        assert_eq!(graph.endpoints(&e), Some((a, b)));
    }

    #[test]
    fn add_edge_missing_vertex() {
        let mut graph = AdjList::<(), u32, Directed>::new();
        let a = graph.add_vertex(());

        assert_matches!(
            graph.try_add_edge(&a, &VertexId::from_usize(3), 1),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::DestinationAbsent,
                attr: 1
            })
        );
        assert_matches!(
            graph.try_add_edge(&VertexId::from_usize(3), &a, 1),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::SourceAbsent,
                ..
            })
        );
    }

    #[test]
    fn neighbors_directed() {
        let mut graph = AdjList::<(), (), Directed>::new();
        graph.extend_with_edges([(0usize, 1usize), (2, 0), (1, 2)]);

        let v0 = VertexId::from_usize(0);
        let out = graph
            .neighbors_directed(&v0, Direction::Outgoing)
            .map(|n| n.id.as_usize())
            .collect::<Vec<_>>();
        let inc = graph
            .neighbors_directed(&v0, Direction::Incoming)
            .map(|n| n.id.as_usize())
            .collect::<Vec<_>>();

        assert_eq!(out, vec![1]);
        assert_eq!(inc, vec![2]);
        assert_eq!(graph.degree_undirected(&v0), 2);
    }

    #[test]
    fn neighbors_undirected_self_loop() {
        let mut graph = AdjList::<(), (), Undirected>::new();
        graph.extend_with_edges([(0usize, 1usize), (1, 1), (2, 1)]);

        let v1 = VertexId::from_usize(1);
        let mut neighbors = graph
            .neighbors_undirected(&v1)
            .map(|n| n.id.as_usize())
            .collect::<Vec<_>>();
        neighbors.sort();

        assert_eq!(neighbors, vec![0, 1, 2]);
    }

    #[test]
    fn edges_iteration() {
        let mut graph = AdjList::<(), i32, Undirected>::new();
        graph.extend_with_edges([(0usize, 1usize, 3), (1, 2, -1)]);

        let edges = graph
            .edges()
            .map(|e| (e.from.as_usize(), e.to.as_usize(), *e.attr))
            .collect::<Vec<_>>();

        assert_eq!(edges, vec![(0, 1, 3), (1, 2, -1)]);
    }
}
