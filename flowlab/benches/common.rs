#![allow(dead_code)]

use fastrand::Rng;
use flowlab::{
    core::{id::IdType, GraphRef, VertexSet},
    infra::generate::SparseMatrix,
    storage::DiGraph,
};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub fn flowlab_random(vertex_count: usize, density: f64, rng: &mut Rng) -> DiGraph<(), u32> {
    SparseMatrix::random(vertex_count, density, rng).to_digraph()
}

// Same vertices and edges in the same order, so that both libraries solve the
// identical instance.
pub fn petgraph_from(graph: &DiGraph<(), u32>) -> petgraph::Graph<(), u32, petgraph::Directed> {
    let mut converted = petgraph::Graph::with_capacity(graph.vertex_count(), 0);

    for _ in 0..graph.vertex_count() {
        converted.add_node(());
    }

    for edge in graph.edges() {
        converted.add_edge(
            NodeIndex::new(edge.from.as_usize()),
            NodeIndex::new(edge.to.as_usize()),
            *edge.attr,
        );
    }

    converted
}
