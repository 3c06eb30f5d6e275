//! Generators of the benchmark graphs.
//!
//! Randomized generators take an explicit [`fastrand::Rng`], so that a seed
//! fully determines the generated graph.

use fastrand::Rng;
use rustc_hash::FxHashSet;

use crate::{
    core::{capacity::Capacity, id::VertexId, GraphAdd},
    storage::{DiGraph, UnGraph},
};

/// A directed graph with the vertices between which the flow is measured.
#[derive(Debug, Clone)]
pub struct Instance<E> {
    pub graph: DiGraph<(), E>,
    pub source: VertexId,
    pub sink: VertexId,
}

/// Square matrix in coordinate format, interpreted as a weighted adjacency
/// matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    size: usize,
    // Sorted by row, then by column. Positions are distinct.
    entries: Vec<(usize, usize, u32)>,
}

impl SparseMatrix {
    /// Random `size × size` matrix with `round(density · size²)` stored
    /// entries at distinct uniformly chosen positions.
    ///
    /// Values are `⌊100 · x⌋` for `x` uniform in `[0, 1)`, so some stored
    /// entries are zero and do not become edges.
    pub fn random(size: usize, density: f64, rng: &mut Rng) -> Self {
        let cells = size * size;
        let target = ((density.clamp(0.0, 1.0) * cells as f64).round() as usize).min(cells);

        // For dense matrices, it is cheaper to choose the positions that are
        // left out.
        let invert = 2 * target > cells;
        let count = if invert { cells - target } else { target };

        let mut chosen = FxHashSet::default();
        chosen.reserve(count);
        while chosen.len() < count {
            chosen.insert(rng.usize(..cells));
        }

        let positions = if invert {
            (0..cells).filter(|p| !chosen.contains(p)).collect::<Vec<_>>()
        } else {
            let mut positions = chosen.into_iter().collect::<Vec<_>>();
            positions.sort_unstable();
            positions
        };

        let entries = positions
            .into_iter()
            .map(|p| (p / size, p % size, (rng.f64() * 100.0) as u32))
            .collect();

        Self { size, entries }
    }

    /// Banded matrix with values in `[1, 1000)`.
    ///
    /// Every row except the last gets entries at column offsets
    /// `-half_width..half_width` (excluding the diagonal) that fall inside the
    /// matrix.
    pub fn banded(size: usize, half_width: usize, rng: &mut Rng) -> Self {
        let mut entries = Vec::new();
        let width = half_width as isize;

        for row in 0..size.saturating_sub(1) {
            for offset in -width..width {
                let col = row as isize + offset;
                if offset != 0 && col >= 0 && (col as usize) < size {
                    entries.push((row, col as usize, rng.u32(1..1000)));
                }
            }
        }

        Self { size, entries }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored entries, including zeros.
    pub fn stored(&self) -> usize {
        self.entries.len()
    }

    pub fn nonzeros(&self) -> usize {
        self.entries.iter().filter(|(_, _, value)| *value != 0).count()
    }

    pub fn entries(&self) -> &[(usize, usize, u32)] {
        &self.entries
    }

    /// Directed graph with an edge `i -> j` for each nonzero entry `(i, j)`.
    pub fn to_digraph(&self) -> DiGraph<(), u32> {
        let mut graph = DiGraph::with_capacity(self.size, self.nonzeros());

        for _ in 0..self.size {
            graph.add_vertex(());
        }

        for &(row, col, value) in self.entries.iter() {
            if value != 0 {
                graph.add_edge(&VertexId::from(row), &VertexId::from(col), value);
            }
        }

        graph
    }
}

/// Undirected complete graph on `n` vertices, every edge with the same
/// capacity.
pub fn complete<C: Capacity>(n: usize, capacity: C) -> UnGraph<(), C> {
    let mut graph = UnGraph::with_capacity(n, n * n.saturating_sub(1) / 2);

    for _ in 0..n {
        graph.add_vertex(());
    }

    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(&VertexId::from(u), &VertexId::from(v), capacity);
        }
    }

    graph
}

/// Pyramid with `n` rows and an extra sink below the last row.
///
/// Vertex `j` of row `i` has ID `i (i + 1) / 2 + j` and sends its flow to
/// vertices `j` and `j + 1` of the next row. The capacities are chosen such
/// that the maximum flow from the apex is one and every arc is saturated,
/// except the arcs into the sink, whose capacity is infinite.
pub fn pyramid(n: usize) -> Instance<f64> {
    let n = n.max(1);
    let id = |row: usize, col: usize| VertexId::from(row * (row + 1) / 2 + col);
    let sink_index = n * (n + 1) / 2;

    let mut graph = DiGraph::with_capacity(sink_index + 1, n * (n - 1) + n);

    for _ in 0..=sink_index {
        graph.add_vertex(());
    }

    for row in 0..n - 1 {
        let mut cap = 1.0 / (row + 2) as f64;
        for col in 0..=row {
            graph.add_edge(&id(row, col), &id(row + 1, col), cap);
            cap = 1.0 / (row + 1) as f64 - cap;
            graph.add_edge(&id(row, col), &id(row + 1, col + 1), cap);
            cap = 1.0 / (row + 2) as f64 - cap;
        }
    }

    let sink = VertexId::from(sink_index);
    for col in 0..n {
        graph.add_edge(&id(n - 1, col), &sink, f64::inf());
    }

    Instance {
        graph,
        source: id(0, 0),
        sink,
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{EdgeSet, GraphRef, VertexSet};

    use super::*;

    #[test]
    fn random_matrix_entry_count() {
        for density in [0.0, 0.1, 0.3, 0.5, 0.8, 1.0] {
            let matrix = SparseMatrix::random(40, density, &mut Rng::with_seed(42));
            let expected = (density * 1600.0f64).round() as usize;

            assert_eq!(matrix.stored(), expected);

            let distinct = matrix
                .entries()
                .iter()
                .map(|&(row, col, _)| (row, col))
                .collect::<FxHashSet<_>>();
            assert_eq!(distinct.len(), expected);
        }
    }

    #[test]
    fn random_matrix_values() {
        let matrix = SparseMatrix::random(100, 0.3, &mut Rng::with_seed(7));

        assert!(matrix
            .entries()
            .iter()
            .all(|&(row, col, value)| row < 100 && col < 100 && value < 100));
        assert_eq!(matrix.to_digraph().edge_count(), matrix.nonzeros());
        assert!(matrix.nonzeros() < matrix.stored());
    }

    #[test]
    fn random_matrix_deterministic() {
        let a = SparseMatrix::random(50, 0.2, &mut Rng::with_seed(3));
        let b = SparseMatrix::random(50, 0.2, &mut Rng::with_seed(3));
        let c = SparseMatrix::random(50, 0.2, &mut Rng::with_seed(4));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn banded_matrix_shape() {
        let matrix = SparseMatrix::banded(10, 3, &mut Rng::with_seed(42));

        assert!(matrix.entries().iter().all(|&(row, col, value)| {
            let offset = col as isize - row as isize;
            row < 9 && offset != 0 && (-3..3).contains(&offset) && (1..1000).contains(&value)
        }));

        // Row 0 only has columns 1 and 2, an inner row has all five.
        assert_eq!(matrix.entries().iter().filter(|e| e.0 == 0).count(), 2);
        assert_eq!(matrix.entries().iter().filter(|e| e.0 == 5).count(), 5);
        assert_eq!(matrix.to_digraph().vertex_count(), 10);
    }

    #[test]
    fn complete_graph() {
        let graph = complete(6, 5u32);

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 15);
        assert!(graph.edges().all(|edge| *edge.attr == 5));
    }

    #[test]
    fn pyramid_capacities() {
        let instance = pyramid(4);

        assert_eq!(instance.graph.vertex_count(), 11);
        assert_eq!(instance.sink, VertexId::from(10usize));
        assert_eq!(instance.graph.edge_count(), 4 * 3 + 4);

        // Outflow of every row sums up to one.
        let row_out = instance
            .graph
            .edges()
            .filter(|edge| edge.to != instance.sink)
            .map(|edge| *edge.attr)
            .sum::<f64>();
        assert!((row_out - 3.0).abs() < 1e-9);
    }
}
