use std::fmt;

use proptest::{collection::vec, prelude::*};

use crate::{
    core::{
        id::{IdType, VertexId},
        marker::{Directed, EdgeType, Undirected},
        GraphAdd, GraphRef,
    },
    storage::AdjList,
};

/// A graph with a designated source and sink, which are always distinct.
#[derive(Clone)]
pub struct FlowNetwork<E, Ty: EdgeType> {
    pub graph: AdjList<(), E, Ty>,
    pub source: VertexId,
    pub sink: VertexId,
}

// Printing the edge list is more readable in the failure output than the
// adjacency list internals.
impl<E: fmt::Debug, Ty: EdgeType> fmt::Debug for FlowNetwork<E, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = self
            .graph
            .edges()
            .map(|edge| (edge.from.as_bits(), edge.to.as_bits(), edge.attr))
            .collect::<Vec<_>>();

        f.debug_struct("FlowNetwork")
            .field("directed", &Ty::is_directed())
            .field("source", &self.source)
            .field("sink", &self.sink)
            .field("edges", &edges)
            .finish()
    }
}

pub fn flow_network<E, Ty>(
    capacity: E,
    max_vertices: usize,
) -> impl Strategy<Value = FlowNetwork<E::Value, Ty>>
where
    E: Strategy + Clone,
    Ty: EdgeType,
{
    let max_vertices = max_vertices.max(2);

    (2..=max_vertices)
        .prop_flat_map(move |n| {
            let edge = (0..n, 0..n, capacity.clone());
            (Just(n), vec(edge, 0..=3 * n), 0..n, 1..n)
        })
        .prop_map(|(n, edges, source, offset)| {
            let mut graph = AdjList::with_capacity(n, edges.len());

            for _ in 0..n {
                graph.add_vertex(());
            }

            for (from, to, capacity) in edges {
                graph.add_edge(&VertexId::from(from), &VertexId::from(to), capacity);
            }

            FlowNetwork {
                graph,
                source: VertexId::from(source),
                sink: VertexId::from((source + offset) % n),
            }
        })
}

pub fn flow_network_directed<E>(
    capacity: E,
    max_vertices: usize,
) -> impl Strategy<Value = FlowNetwork<E::Value, Directed>>
where
    E: Strategy + Clone,
{
    flow_network(capacity, max_vertices)
}

pub fn flow_network_undirected<E>(
    capacity: E,
    max_vertices: usize,
) -> impl Strategy<Value = FlowNetwork<E::Value, Undirected>>
where
    E: Strategy + Clone,
{
    flow_network(capacity, max_vertices)
}
