use fixedbitset::FixedBitSet;

use crate::core::{id::IdType, EdgeSet, Neighbors, VertexSet};

/// Returns `true` if the graph, ignoring the direction of edges, is a tree.
///
/// A tree is non-empty, connected and has exactly one edge less than
/// vertices.
pub fn is_tree<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet + EdgeSet,
{
    let n = graph.vertex_count();
    n > 0 && graph.edge_count() == n - 1 && is_connected_undirected(graph)
}

/// Returns `true` if every vertex is reachable from every other when the
/// direction of edges is ignored. An empty graph is connected.
pub fn is_connected_undirected<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    let Some(start) = graph.vertices_by_id().next() else {
        return true;
    };

    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut stack = vec![start];
    let mut count = 0;

    while let Some(u) = stack.pop() {
        if visited.put(u.as_usize()) {
            continue;
        }

        count += 1;

        for neighbor in graph.neighbors_undirected(&u) {
            if !visited.contains(neighbor.id.as_usize()) {
                stack.push(neighbor.id);
            }
        }
    }

    count == graph.vertex_count()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::GraphAdd,
        infra::proptest::flow_network_undirected,
        storage::{DiGraph, UnGraph},
    };

    use super::*;

    #[test]
    fn path_is_tree() {
        let mut graph = UnGraph::<(), ()>::new();
        graph.extend_with_edges([(0usize, 1usize), (1, 2), (2, 3)]);

        assert!(is_tree(&graph));
    }

    #[test]
    fn directed_star_is_tree() {
        let mut graph = DiGraph::<(), ()>::new();
        graph.extend_with_edges([(1usize, 0usize), (2, 0), (0, 3)]);

        assert!(is_tree(&graph));
    }

    #[test]
    fn single_vertex_is_tree() {
        let mut graph = UnGraph::<(), ()>::new();
        graph.add_vertex(());

        assert!(is_tree(&graph));
    }

    #[test]
    fn empty_is_not_tree() {
        let graph = UnGraph::<(), ()>::new();

        assert!(!is_tree(&graph));
        assert!(is_connected_undirected(&graph));
    }

    #[test]
    fn cycle_is_not_tree() {
        let mut graph = UnGraph::<(), ()>::new();
        graph.extend_with_edges([(0usize, 1usize), (1, 2), (2, 0)]);

        assert!(!is_tree(&graph));
    }

    #[test]
    fn forest_is_not_tree() {
        // Right number of edges thanks to the cycle, but disconnected.
        let mut graph = UnGraph::<(), ()>::new();
        graph.extend_with_edges([(0usize, 1usize), (1, 2), (2, 0)]);
        graph.add_vertex(());

        assert!(!is_tree(&graph));
        assert!(!is_connected_undirected(&graph));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_tree_edge_count(network in flow_network_undirected(Just(()), 16)) {
            let graph = &network.graph;

            if is_tree(graph) {
                prop_assert_eq!(graph.edge_count() + 1, graph.vertex_count());
                prop_assert!(is_connected_undirected(graph));
            }
        }
    }
}
