//! Types used for identifying vertices and edges in graphs.
//!
//! Every storage in this crate numbers its vertices and edges contiguously
//! from zero, so the identifiers are plain integers that algorithms can use
//! for indexing into arrays.

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex or edge in a graph.
///
/// All integer values below the vertex (edge) count of a graph are valid IDs
/// and there is no discontinuity. The maximum value of the backing integer is
/// reserved for the "[sentinel](https://en.wikipedia.org/wiki/Sentinel_value)"
/// value, so we don't introduce the overhead of `Option<int>` and can use 0 as
/// the first index as is natural.
pub trait IdType: Copy + Ord + Hash + Debug + From<usize> + Into<usize> {
    /// Conceptually `None` in `Option<ID>`, but without using `Option`.
    fn sentinel() -> Self;

    /// Converts an ID into the corresponding `u64`.
    fn as_bits(&self) -> u64;

    /// Converts an `u64` into the corresponding ID.
    fn from_bits(bits: u64) -> Self;

    /// Converts an ID into the corresponding `usize`.
    fn as_usize(&self) -> usize {
        self.as_bits() as usize
    }

    /// Converts an `usize` into the corresponding ID.
    fn from_usize(id: usize) -> Self {
        Self::from_bits(id as u64)
    }

    /// Returns `true` if the value represents the sentinel value.
    fn is_sentinel(&self) -> bool {
        self == &Self::sentinel()
    }
}

/// The representation of a vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u64);

/// The representation of an edge index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(u64);

macro_rules! impl_id_type {
    ($id_ty:ident) => {
        impl IdType for $id_ty {
            fn sentinel() -> Self {
                Self(u64::MAX)
            }

            fn as_bits(&self) -> u64 {
                self.0
            }

            fn from_bits(bits: u64) -> Self {
                Self(bits)
            }
        }

        impl From<usize> for $id_ty {
            fn from(id: usize) -> Self {
                Self::from_usize(id)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.as_usize()
            }
        }

        impl From<u64> for $id_ty {
            fn from(bits: u64) -> Self {
                Self::from_bits(bits)
            }
        }

        impl From<$id_ty> for u64 {
            fn from(id: $id_ty) -> Self {
                id.as_bits()
            }
        }

        impl std::fmt::Display for $id_ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_id_type!(VertexId);
impl_id_type!(EdgeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        let v = VertexId::from_usize(3);
        assert_eq!(v.as_usize(), 3);
        assert_eq!(usize::from(v), 3);
        assert_eq!(VertexId::from(3usize), v);
        assert_eq!(v.to_string(), "3");
    }

    #[test]
    fn sentinel() {
        assert!(EdgeId::sentinel().is_sentinel());
        assert!(!EdgeId::from_usize(0).is_sentinel());
    }
}
