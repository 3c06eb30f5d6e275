//! Graph generators, built-in fixtures and instance readers for benchmarks
//! and tests.

pub mod dimacs;
pub mod fixtures;
pub mod generate;

#[cfg(feature = "proptest")]
pub mod proptest;
