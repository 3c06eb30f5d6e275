//! Find a [maximum flow] between two vertices and the corresponding minimum
//! cut.
//!
//! See available parameters [here](MaxFlowBuilder#implementations).
//!
//! All four algorithms produce the same flow value. They differ in running
//! time, which is what the `flowlab-bench` harness measures. The capacity is
//! the edge attribute by default, but can be read by a custom
//! [accessor](crate::core::capacity::GetCapacity). For undirected graphs, every
//! edge can carry flow in either direction up to its capacity.
//!
//! [maximum flow]: https://en.wikipedia.org/wiki/Maximum_flow_problem
//!
//! # Examples
//!
//! ```
//! use flowlab::{
//!     algo::{max_flow::Algo, MaxFlow},
//!     core::{id::VertexId, GraphAdd},
//!     storage::DiGraph,
//! };
//!
//! let mut graph = DiGraph::<(), u32>::new();
//!
//! graph.extend_with_edges([
//!     (0usize, 1usize, 16),
//!     (0, 2, 13),
//!     (1, 2, 10),
//!     (1, 3, 12),
//!     (2, 4, 14),
//!     (3, 2, 9),
//!     (3, 5, 20),
//!     (4, 3, 7),
//!     (4, 5, 4),
//! ]);
//!
//! let source = VertexId::from(0usize);
//! let sink = VertexId::from(5usize);
//!
//! let flow = MaxFlow::on(&graph)
//!     .using(Algo::Dinitz)
//!     .run(source, sink)
//!     .unwrap();
//!
//! assert_eq!(flow.value(), 23);
//! assert_eq!(flow.min_cut().value(), 23);
//! ```

use std::fmt;

use bitvec::vec::BitVec;
use thiserror::Error;

use crate::core::{
    capacity::{Capacity, Identity},
    id::{EdgeId, IdType, VertexId},
    GraphRef,
};

mod builder;
mod dinitz;
mod edmonds_karp;
mod preflow_push;
pub(crate) mod residual;
mod shortest_augmenting_path;

pub use builder::MaxFlowBuilder;

use residual::ResidualNetwork;

/// Maximum flow between two vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct MaxFlow<C> {
    source: VertexId,
    sink: VertexId,
    value: C,
    algo: Algo,
    network: ResidualNetwork<C>,
}

impl<C: Capacity> MaxFlow<C> {
    /// Value of the maximum flow.
    pub fn value(&self) -> C {
        self.value
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn sink(&self) -> VertexId {
        self.sink
    }

    /// Algorithm that computed the flow.
    pub fn algo(&self) -> Algo {
        self.algo
    }

    /// Returns the flow on the given edge, or `None` if the edge does not
    /// exist.
    ///
    /// The reported direction is the direction in which the flow goes. For
    /// directed graphs, it is always the direction of the edge. Edges with no
    /// flow are reported in the direction of the edge.
    pub fn flow(&self, edge: &EdgeId) -> Option<EdgeFlow<C>> {
        if edge.as_usize() >= self.network.edge_count() {
            return None;
        }

        let (from, to, amount) = self.network.edge_flow(edge.as_usize());

        Some(EdgeFlow {
            from: VertexId::from_usize(from),
            to: VertexId::from_usize(to),
            amount,
        })
    }

    /// Iterates over flows of all edges of the graph.
    pub fn flows(&self) -> impl Iterator<Item = (EdgeId, EdgeFlow<C>)> + '_ {
        (0..self.network.edge_count()).filter_map(|index| {
            let edge = EdgeId::from_usize(index);
            self.flow(&edge).map(|flow| (edge, flow))
        })
    }

    /// Minimum cut separating the source and the sink.
    ///
    /// The source side consists of the vertices reachable from the source in
    /// the residual network.
    pub fn min_cut(&self) -> MinCut<C> {
        MinCut::from_network(&self.network, self.source.as_usize(), self.value)
    }
}

/// Flow on a single edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFlow<C> {
    pub from: VertexId,
    pub to: VertexId,
    pub amount: C,
}

/// Minimum cut between two vertices.
#[derive(Debug, Clone)]
pub struct MinCut<C> {
    value: C,
    source_side: BitVec,
    cut_edges: Vec<EdgeId>,
}

impl<C: Capacity> MinCut<C> {
    pub(crate) fn from_network(network: &ResidualNetwork<C>, source: usize, value: C) -> Self {
        let source_side = network.reachable_from(source);
        let cut_edges = (0..network.edge_count())
            .filter(|&edge| {
                let (u, v) = network.edge_ends(edge);
                // In undirected graphs, an edge in the other direction also
                // separates the sides.
                source_side[u] != source_side[v]
                    && (source_side[u] || !network.is_directed())
            })
            .map(EdgeId::from_usize)
            .collect();

        Self {
            value,
            source_side,
            cut_edges,
        }
    }

    /// Capacity of the cut, equal to the value of the maximum flow.
    pub fn value(&self) -> C {
        self.value
    }

    /// Returns `true` if the vertex is on the side of the source.
    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.source_side
            .get(vertex.as_usize())
            .map(|bit| *bit)
            .unwrap_or(false)
    }

    pub fn source_side(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.source_side.iter_ones().map(VertexId::from_usize)
    }

    pub fn sink_side(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.source_side.iter_zeros().map(VertexId::from_usize)
    }

    /// Edges going from the source side to the sink side.
    pub fn cut_edges(&self) -> &[EdgeId] {
        &self.cut_edges
    }
}

/// Algorithm for [`MaxFlow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algo {
    /// [Edmonds–Karp
    /// algorithm](https://en.wikipedia.org/wiki/Edmonds%E2%80%93Karp_algorithm).
    ///
    /// Repeatedly augments along a shortest path found by breadth-first
    /// search. Simple, but every augmentation explores the graph from
    /// scratch, which makes it slow on dense graphs.
    EdmondsKarp,

    /// Shortest augmenting path algorithm with distance labels.
    ///
    /// Maintains exact distances to the sink and advances along admissible
    /// arcs, relabeling on dead ends. The gap heuristic stops the search as
    /// soon as the sink becomes unreachable.
    ShortestAugmentingPath,

    /// [Dinitz's algorithm](https://en.wikipedia.org/wiki/Dinic%27s_algorithm).
    ///
    /// Works in phases, each saturating the level graph with a blocking flow.
    Dinitz,

    /// [Push–relabel
    /// algorithm](https://en.wikipedia.org/wiki/Push%E2%80%93relabel_maximum_flow_algorithm)
    /// with highest-label selection.
    ///
    /// Instead of augmenting paths, it pushes excess flow locally. Usually the
    /// fastest on large graphs.
    PreflowPush,
}

impl Algo {
    /// All algorithms, in the order of declaration.
    pub const ALL: [Algo; 4] = [
        Algo::EdmondsKarp,
        Algo::ShortestAugmentingPath,
        Algo::Dinitz,
        Algo::PreflowPush,
    ];

    /// Human readable name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algo::EdmondsKarp => "Edmonds Karp",
            Algo::ShortestAugmentingPath => "Shortest augmenting path",
            Algo::Dinitz => "Dinitz",
            Algo::PreflowPush => "Preflow push",
        }
    }

    /// Runs the algorithm on a network without flow and returns the flow
    /// value.
    pub(crate) fn augment<C: Capacity>(
        self,
        network: &mut ResidualNetwork<C>,
        source: usize,
        sink: usize,
    ) -> Result<C, Error> {
        let value = match self {
            Algo::EdmondsKarp => edmonds_karp::edmonds_karp(network, source, sink),
            Algo::ShortestAugmentingPath => {
                shortest_augmenting_path::shortest_augmenting_path(network, source, sink)
            }
            Algo::Dinitz => dinitz::dinitz(network, source, sink),
            Algo::PreflowPush => preflow_push::preflow_push(network, source, sink),
        };

        if network.is_unbounded(value) {
            return Err(Error::Unbounded);
        }

        C::narrow(value).ok_or(Error::Overflow)
    }
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[doc(hidden)]
pub mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);

    #[derive(Debug)]
    pub struct EdmondsKarp;

    #[derive(Debug)]
    pub struct ShortestAugmentingPath;

    #[derive(Debug)]
    pub struct Dinitz;

    #[derive(Debug)]
    pub struct PreflowPush;

    pub trait ChooseAlgo {
        fn choose(&self) -> Algo;
    }

    impl ChooseAlgo for AnyAlgo {
        fn choose(&self) -> Algo {
            Algo::PreflowPush
        }
    }

    impl ChooseAlgo for SpecificAlgo {
        fn choose(&self) -> Algo {
            self.0.unwrap_or_else(|| AnyAlgo.choose())
        }
    }

    impl ChooseAlgo for EdmondsKarp {
        fn choose(&self) -> Algo {
            Algo::EdmondsKarp
        }
    }

    impl ChooseAlgo for ShortestAugmentingPath {
        fn choose(&self) -> Algo {
            Algo::ShortestAugmentingPath
        }
    }

    impl ChooseAlgo for Dinitz {
        fn choose(&self) -> Algo {
            Algo::Dinitz
        }
    }

    impl ChooseAlgo for PreflowPush {
        fn choose(&self) -> Algo {
            Algo::PreflowPush
        }
    }
}

/// The error encountered during a [`MaxFlow`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source and the sink are the same vertex.
    #[error("source and sink are the same vertex")]
    SourceIsSink,

    /// The source or the sink is not in the graph.
    #[error("vertex not found")]
    VertexNotFound,

    /// An edge with negative capacity encountered.
    #[error("edge with negative capacity encountered")]
    NegativeCapacity,

    /// There is a path of edges with infinite capacity between the source and
    /// the sink.
    #[error("infinite capacity path, flow unbounded above")]
    Unbounded,

    /// The flow value does not fit into the capacity type.
    #[error("flow value overflows the capacity type")]
    Overflow,
}

/// Returns the value of the maximum flow with the edge attribute as the
/// capacity, using the default algorithm.
pub fn max_flow_value<V, E, G>(
    graph: &G,
    source: VertexId,
    sink: VertexId,
) -> Result<E, Error>
where
    G: GraphRef<V, E>,
    E: Capacity,
{
    MaxFlow::on(graph)
        .capacity::<Identity, V, E>(Identity)
        .run(source, sink)
        .map(|flow| flow.value())
}

/// Returns the minimum cut with the edge attribute as the capacity, using the
/// default algorithm.
pub fn minimum_cut<V, E, G>(
    graph: &G,
    source: VertexId,
    sink: VertexId,
) -> Result<MinCut<E>, Error>
where
    G: GraphRef<V, E>,
    E: Capacity,
{
    MaxFlow::on(graph)
        .capacity::<Identity, V, E>(Identity)
        .run(source, sink)
        .map(|flow| flow.min_cut())
}
