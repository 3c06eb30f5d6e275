pub mod adj_list;

pub use adj_list::AdjList;

use crate::core::marker::{Directed, Undirected};

/// Directed graph stored in an adjacency list.
pub type DiGraph<V, E> = AdjList<V, E, Directed>;

/// Undirected graph stored in an adjacency list.
pub type UnGraph<V, E> = AdjList<V, E, Undirected>;
