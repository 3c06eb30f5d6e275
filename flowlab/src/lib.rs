//! Maximum flow, minimum cut and Gomory–Hu tree algorithms over a small
//! adjacency list storage, together with the generators and fixtures used to
//! benchmark them.

pub mod algo;
pub mod core;
pub mod infra;
pub mod storage;

pub mod prelude {
    pub use crate::{
        algo::{
            gomory_hu::GomoryHu,
            is_tree,
            max_flow::{Algo, MaxFlow},
        },
        core::{
            capacity::{Capacity, GetCapacity},
            id::{EdgeId, VertexId},
            EdgeSet, GraphAdd, GraphRef, Neighbors, VertexSet,
        },
        storage::{DiGraph, UnGraph},
    };
}
