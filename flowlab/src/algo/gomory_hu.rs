//! Compute a [Gomory–Hu tree] of an undirected graph.
//!
//! The tree has the same vertices as the graph and for every pair of vertices,
//! the minimum weight on the tree path between them equals the value of the
//! minimum cut separating them in the graph. It is built by Gusfield's
//! algorithm, which needs `n - 1` maximum flow computations and no graph
//! contractions. Any [maximum flow algorithm](Algo) can be used for them.
//!
//! [Gomory–Hu tree]: https://en.wikipedia.org/wiki/Gomory%E2%80%93Hu_tree
//!
//! # Examples
//!
//! ```
//! use flowlab::{
//!     algo::{is_tree, max_flow::Algo, GomoryHu},
//!     core::{id::VertexId, GraphAdd},
//!     storage::UnGraph,
//! };
//!
//! let mut graph = UnGraph::<(), u32>::new();
//! graph.extend_with_edges([(0usize, 1usize, 3), (1, 2, 2), (2, 0, 4), (2, 3, 1)]);
//!
//! let tree = GomoryHu::on(&graph).using(Algo::Dinitz).run().unwrap();
//!
//! assert!(is_tree(&tree.to_graph()));
//! assert_eq!(tree.min_cut_value(VertexId::from(0usize), VertexId::from(1usize)), Some(5));
//! assert_eq!(tree.min_cut_value(VertexId::from(0usize), VertexId::from(3usize)), Some(1));
//! ```

use thiserror::Error;

use crate::{
    core::{
        capacity::Capacity,
        id::{IdType, VertexId},
        GraphAdd,
    },
    storage::UnGraph,
};

use super::max_flow::{self, residual::ResidualNetwork, Algo};

mod builder;

pub use builder::GomoryHuBuilder;

/// Gomory–Hu tree stored as parent pointers towards vertex zero.
#[derive(Debug, Clone)]
pub struct GomoryHu<C> {
    parent: Vec<usize>,
    weight: Vec<C>,
    algo: Algo,
}

impl<C: Capacity> GomoryHu<C> {
    pub fn vertex_count(&self) -> usize {
        self.parent.len()
    }

    /// Maximum flow algorithm used for the construction.
    pub fn algo(&self) -> Algo {
        self.algo
    }

    /// Iterates over the `n - 1` tree edges as `(vertex, parent, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, C)> + '_ {
        (1..self.parent.len()).map(|v| {
            (
                VertexId::from_usize(v),
                VertexId::from_usize(self.parent[v]),
                self.weight[v],
            )
        })
    }

    /// Value of the minimum cut between two vertices, that is the minimum
    /// weight on the tree path between them.
    ///
    /// Returns `None` if the vertices are the same or any of them is not in
    /// the tree.
    pub fn min_cut_value(&self, u: VertexId, v: VertexId) -> Option<C> {
        let n = self.vertex_count();
        let (u, v) = (u.as_usize(), v.as_usize());

        if u == v || u >= n || v >= n {
            return None;
        }

        // The tree is small compared to the graph it came from, so a search
        // over the adjacency built on demand is fine.
        let mut adjacency = vec![Vec::new(); n];
        for w in 1..n {
            adjacency[w].push((self.parent[w], self.weight[w]));
            adjacency[self.parent[w]].push((w, self.weight[w]));
        }

        let mut visited = vec![false; n];
        let mut stack = vec![(u, None::<C>)];

        while let Some((w, bottleneck)) = stack.pop() {
            if w == v {
                return bottleneck;
            }

            if std::mem::replace(&mut visited[w], true) {
                continue;
            }

            for &(next, weight) in adjacency[w].iter() {
                if !visited[next] {
                    let bottleneck = match bottleneck {
                        Some(current) => max_flow::residual::min(current, weight),
                        None => weight,
                    };
                    stack.push((next, Some(bottleneck)));
                }
            }
        }

        None
    }

    /// Builds the tree as a standalone graph with weights as edge attributes.
    pub fn to_graph(&self) -> UnGraph<(), C> {
        let n = self.vertex_count();
        let mut graph = UnGraph::with_capacity(n, n.saturating_sub(1));

        for _ in 0..n {
            graph.add_vertex(());
        }

        for (u, v, weight) in self.edges() {
            graph.add_edge(&u, &v, weight);
        }

        graph
    }
}

/// The error encountered during a [`GomoryHu`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree of a graph without vertices is not defined.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// One of the maximum flow computations failed.
    #[error(transparent)]
    Flow(#[from] max_flow::Error),
}

fn gusfield<C: Capacity>(
    network: &mut ResidualNetwork<C>,
    algo: Algo,
) -> Result<(Vec<usize>, Vec<C>), Error> {
    let n = network.vertex_count();
    let mut parent = vec![0; n];
    let mut weight = vec![C::zero(); n];

    for s in 1..n {
        let t = parent[s];

        network.reset();
        let value = algo.augment(network, s, t)?;

        let side = network.reachable_from(s);
        weight[s] = value;

        for v in 1..n {
            if v != s && side[v] && parent[v] == t {
                parent[v] = s;
            }
        }

        // Keep the tree edge weights equal to the cuts they represent.
        if side[parent[t]] {
            parent[s] = parent[t];
            parent[t] = s;
            weight[s] = weight[t];
            weight[t] = value;
        }
    }

    Ok((parent, weight))
}
