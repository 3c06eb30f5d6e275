use std::{collections::VecDeque, ops::Range};

use bitvec::prelude::*;

use crate::core::{
    capacity::{Capacity, GetCapacity},
    id::IdType,
    GraphRef,
};

use super::Error;

const NO_ARC: usize = usize::MAX;

pub fn min<C: Capacity>(a: C, b: C) -> C {
    if b < a {
        b
    } else {
        a
    }
}

/// Residual network in compressed sparse row layout.
///
/// Arcs of vertex `v` occupy the range `first[v]..first[v + 1]`. Every edge of
/// the original graph produces a pair of arcs that point to each other via
/// `reverse`. A directed edge with capacity `c` gives the arcs `u -> v` with
/// capacity `c` and `v -> u` with capacity zero. An undirected edge gives two
/// arcs with capacity `c` each, so the flow can go both ways.
///
/// The network stores the flow on each arc rather than its residual
/// capacity. At most one arc of a pair carries flow, the residual capacity of
/// an arc is its free capacity plus the flow on its pair. This way no stored
/// value ever exceeds the capacity of its edge.
#[derive(Debug, Clone)]
pub struct ResidualNetwork<C> {
    first: Vec<usize>,
    head: Vec<usize>,
    reverse: Vec<usize>,
    capacity: Vec<C>,
    flow: Vec<C>,
    // Forward arc of each original edge, `NO_ARC` for self-loops.
    edge_arc: Vec<usize>,
    edge_ends: Vec<(usize, usize)>,
    directed: bool,
    // Replacement of infinite capacities, if there are any.
    inf_substitute: Option<C>,
}

impl<C: Capacity> ResidualNetwork<C> {
    pub fn build<V, E, G, F>(graph: &G, capacity: &F) -> Result<Self, Error>
    where
        G: GraphRef<V, E>,
        F: GetCapacity<E, C>,
    {
        let n = graph.vertex_count();
        let m = graph.edge_count();

        let mut edge_capacity = vec![C::zero(); m];
        let mut edge_ends = vec![(0, 0); m];
        let mut finite_total = C::zero();
        let mut has_inf = false;
        let mut first = vec![0usize; n + 1];

        for edge in graph.edges() {
            let cap = capacity.get(edge.attr);

            // The check for unsignedness should eliminate the negativity check
            // for unsigned types entirely.
            if !C::is_unsigned() && cap < C::zero() {
                return Err(Error::NegativeCapacity);
            }

            let (u, v) = (edge.from.as_usize(), edge.to.as_usize());
            let index = edge.id.as_usize();
            edge_ends[index] = (u, v);
            edge_capacity[index] = cap;

            if u == v {
                continue;
            }

            if cap.is_inf() {
                has_inf = true;
            } else {
                finite_total = finite_total.saturating_add(cap);
            }

            first[u + 1] += 1;
            first[v + 1] += 1;
        }

        let inf_substitute = has_inf.then(|| {
            let substitute = finite_total
                .saturating_add(finite_total)
                .saturating_add(finite_total);

            if substitute == C::zero() {
                C::one()
            } else {
                substitute
            }
        });

        for v in 0..n {
            first[v + 1] += first[v];
        }

        let arc_count = first[n];
        let mut next = first.clone();
        let mut head = vec![0; arc_count];
        let mut reverse = vec![0; arc_count];
        let mut arc_capacity = vec![C::zero(); arc_count];
        let mut edge_arc = vec![NO_ARC; m];
        let directed = graph.is_directed();

        for (index, &(u, v)) in edge_ends.iter().enumerate() {
            if u == v {
                continue;
            }

            let cap = match inf_substitute {
                Some(substitute) if edge_capacity[index].is_inf() => substitute,
                _ => edge_capacity[index],
            };

            let a = next[u];
            next[u] += 1;
            let b = next[v];
            next[v] += 1;

            head[a] = v;
            head[b] = u;
            reverse[a] = b;
            reverse[b] = a;
            arc_capacity[a] = cap;
            arc_capacity[b] = if directed { C::zero() } else { cap };
            edge_arc[index] = a;
        }

        Ok(Self {
            first,
            head,
            reverse,
            flow: vec![C::zero(); arc_count],
            capacity: arc_capacity,
            edge_arc,
            edge_ends,
            directed,
            inf_substitute,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.first.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_arc.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn arcs(&self, v: usize) -> Range<usize> {
        self.first[v]..self.first[v + 1]
    }

    #[inline]
    pub fn first_arc(&self, v: usize) -> usize {
        self.first[v]
    }

    #[inline]
    pub fn end_arc(&self, v: usize) -> usize {
        self.first[v + 1]
    }

    #[inline]
    pub fn head(&self, arc: usize) -> usize {
        self.head[arc]
    }

    #[inline]
    pub fn tail(&self, arc: usize) -> usize {
        self.head[self.reverse[arc]]
    }

    /// Residual capacity of the arc. It saturates at the maximum of the type
    /// when an undirected edge has flow going the other way, so it can be
    /// less than the true residual, but a push of the returned amount is
    /// always valid.
    #[inline]
    pub fn residual(&self, arc: usize) -> C {
        let free = self.capacity[arc] - self.flow[arc];
        free.saturating_add(self.flow[self.reverse[arc]])
    }

    #[inline]
    pub fn has_residual(&self, arc: usize) -> bool {
        self.flow[arc] < self.capacity[arc] || self.flow[self.reverse[arc]] > C::zero()
    }

    /// Sends `delta` units of flow along the arc, at most its residual
    /// capacity. Flow on the paired arc is cancelled first.
    #[inline]
    pub fn push(&mut self, arc: usize, delta: C) {
        let reverse = self.reverse[arc];
        let cancel = min(self.flow[reverse], delta);

        self.flow[reverse] = self.flow[reverse] - cancel;
        self.flow[arc] = self.flow[arc] + (delta - cancel);
    }

    /// Removes any flow, so that the network can be used for another run.
    pub fn reset(&mut self) {
        self.flow.fill(C::zero());
    }

    /// A flow value this large can only come from a path of edges with
    /// infinite capacity.
    pub fn is_unbounded(&self, value: C::Sum) -> bool {
        match self.inf_substitute {
            Some(substitute) => value.saturating_add(value) > substitute.widen(),
            None => false,
        }
    }

    /// Vertices reachable from `source` through arcs with positive residual
    /// capacity.
    pub fn reachable_from(&self, source: usize) -> BitVec {
        let mut visited = bitvec![0; self.vertex_count()];
        let mut queue = VecDeque::new();

        visited.set(source, true);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for arc in self.arcs(u) {
                let v = self.head[arc];
                if !visited[v] && self.has_residual(arc) {
                    visited.set(v, true);
                    queue.push_back(v);
                }
            }
        }

        visited
    }

    /// BFS distances to `target` following arcs with positive residual
    /// capacity backwards. Unreachable vertices and the `blocked` vertex get
    /// distance `unreachable`.
    pub fn distances_to(
        &self,
        target: usize,
        blocked: Option<usize>,
        unreachable: usize,
    ) -> Vec<usize> {
        let mut dist = vec![unreachable; self.vertex_count()];
        let mut queue = VecDeque::new();

        dist[target] = 0;
        queue.push_back(target);

        while let Some(v) = queue.pop_front() {
            for arc in self.arcs(v) {
                // Arc `u -> v` is the reverse of the `v -> u` arc we iterate.
                let u = self.head[arc];
                let into_v = self.reverse[arc];

                if dist[u] == unreachable && Some(u) != blocked && self.has_residual(into_v) {
                    dist[u] = dist[v] + 1;
                    queue.push_back(u);
                }
            }
        }

        dist
    }

    pub fn edge_ends(&self, edge: usize) -> (usize, usize) {
        self.edge_ends[edge]
    }

    /// The flow on an original edge as `(from, to, amount)` in the direction
    /// the flow actually goes.
    pub fn edge_flow(&self, edge: usize) -> (usize, usize, C) {
        let (u, v) = self.edge_ends[edge];
        let arc = self.edge_arc[edge];

        if arc == NO_ARC {
            return (u, v, C::zero());
        }

        let backward = self.flow[self.reverse[arc]];

        if backward > C::zero() {
            (v, u, backward)
        } else {
            (u, v, self.flow[arc])
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{capacity::Identity, GraphAdd},
        storage::{DiGraph, UnGraph},
    };

    use super::*;

    #[test]
    fn build_directed() {
        let mut graph = DiGraph::<(), u32>::new();
        graph.extend_with_edges([(0usize, 1usize, 5), (1, 2, 3), (1, 1, 9)]);

        let network = ResidualNetwork::build(&graph, &Identity).unwrap();

        assert_eq!(network.vertex_count(), 3);
        // The self-loop has no arcs.
        assert_eq!((0..3).map(|v| network.arcs(v).len()).sum::<usize>(), 4);

        let arc = network.arcs(0).start;
        assert_eq!(network.head(arc), 1);
        assert_eq!(network.residual(arc), 5);
        assert_eq!(network.residual(network.reverse[arc]), 0);
        assert_eq!(network.tail(arc), 0);
        assert_eq!(network.edge_flow(2), (1, 1, 0));
    }

    #[test]
    fn build_undirected() {
        let mut graph = UnGraph::<(), u32>::new();
        graph.extend_with_edges([(0usize, 1usize, 5)]);

        let mut network = ResidualNetwork::build(&graph, &Identity).unwrap();
        let arc = network.arcs(1).start;

        assert_eq!(network.residual(arc), 5);
        assert_eq!(network.residual(network.reverse[arc]), 5);

        // Flow from 1 to 0 is backwards with respect to the stored edge.
        network.push(arc, 2);
        assert_eq!(network.edge_flow(0), (1, 0, 2));
        assert_eq!(network.residual(arc), 3);
        assert_eq!(network.residual(network.reverse[arc]), 7);

        // Pushing back cancels the flow before using the capacity.
        network.push(network.reverse[arc], 4);
        assert_eq!(network.edge_flow(0), (0, 1, 2));

        network.reset();
        assert_eq!(network.edge_flow(0), (0, 1, 0));
    }

    #[test]
    fn negative_capacity() {
        let mut graph = DiGraph::<(), i32>::new();
        graph.extend_with_edges([(0usize, 1usize, -5)]);

        assert_eq!(
            ResidualNetwork::build(&graph, &Identity).unwrap_err(),
            Error::NegativeCapacity
        );
    }

    #[test]
    fn infinity_substitute() {
        let mut graph = DiGraph::<(), f64>::new();
        graph.extend_with_edges([(0usize, 1usize, 2.0), (1, 2, f64::INFINITY)]);

        let network = ResidualNetwork::build(&graph, &Identity).unwrap();

        let arc = network.arcs(1).find(|&arc| network.head(arc) == 2).unwrap();
        assert_eq!(network.residual(arc), 6.0);
        assert!(!network.is_unbounded(2.0));
        assert!(network.is_unbounded(4.0));
    }

    #[test]
    fn undirected_residual_saturates() {
        // Full flow in one direction doubles the residual capacity in the
        // other, which does not fit into `u8`.
        let mut graph = UnGraph::<(), u8>::new();
        graph.extend_with_edges([(0usize, 1usize, 200)]);

        let mut network = ResidualNetwork::build(&graph, &Identity).unwrap();
        let arc = network.arcs(0).start;
        let back = network.reverse[arc];

        network.push(arc, 200);
        assert!(!network.has_residual(arc));
        assert_eq!(network.residual(back), u8::MAX);

        network.push(back, u8::MAX);
        assert_eq!(network.edge_flow(0), (1, 0, 55));
        assert_eq!(network.residual(back), 145);
    }

    #[test]
    fn reachability_and_distances() {
        let mut graph = DiGraph::<(), u32>::new();
        graph.extend_with_edges([(0usize, 1usize, 1), (1, 2, 1), (3, 2, 1)]);

        let network = ResidualNetwork::build(&graph, &Identity).unwrap();

        let reachable = network.reachable_from(0);
        assert!(reachable[0] && reachable[1] && reachable[2]);
        assert!(!reachable[3]);

        let dist = network.distances_to(2, None, 4);
        assert_eq!(dist, vec![2, 1, 0, 1]);

        let dist = network.distances_to(2, Some(1), 4);
        assert_eq!(dist, vec![4, 4, 0, 1]);
    }
}
