//! Errors of graph construction.

use thiserror::Error;

/// An edge could not be inserted because an endpoint is not in the graph.
///
/// The rejected edge attribute is handed back in `attr`.
#[derive(Debug, Error, PartialEq)]
#[error("cannot add edge: {kind}")]
pub struct AddEdgeError<E> {
    pub attr: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(attr: E, kind: AddEdgeErrorKind) -> Self {
        Self { attr, kind }
    }
}

/// Which endpoint of the edge is missing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    #[error("tail vertex is not in the graph")]
    SourceAbsent,

    #[error("head vertex is not in the graph")]
    DestinationAbsent,
}
