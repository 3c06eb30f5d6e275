use crate::core::capacity::Capacity;

use super::residual::{min, ResidualNetwork};

/// Highest-label preflow-push with the gap heuristic and periodic global
/// relabeling.
///
/// The first phase computes a maximum preflow, which is enough for the flow
/// value. The second phase returns the excess that got stuck in the network
/// back to the source, so that the residual network describes a valid flow
/// and can be used for per-edge flows and minimum cuts like with the other
/// algorithms.
pub fn preflow_push<C: Capacity>(
    network: &mut ResidualNetwork<C>,
    source: usize,
    sink: usize,
) -> C::Sum {
    let n = network.vertex_count();
    let mut excess = vec![C::Sum::zero(); n];

    for arc in network.arcs(source) {
        let delta = network.residual(arc);
        if delta > C::zero() {
            network.push(arc, delta);
            let v = network.head(arc);
            excess[v] = excess[v] + delta.widen();
        }
    }

    // Vertices that cannot reach the sink have their label raised to `n` and
    // are left alone until the second phase.
    Discharge::new(network, &mut excess, sink, source, n).run();
    let value = excess[sink];

    // In the second phase, the source acts as the sink and the original sink
    // must not receive any more flow.
    Discharge::new(network, &mut excess, source, sink, 2 * n).run();

    value
}

struct Discharge<'a, C: Capacity> {
    network: &'a mut ResidualNetwork<C>,
    excess: &'a mut [C::Sum],
    target: usize,
    frozen: usize,
    limit: usize,
    label: Vec<usize>,
    count: Vec<usize>,
    current: Vec<usize>,
    buckets: Vec<Vec<usize>>,
    highest: usize,
    relabels_since_global: usize,
}

impl<'a, C: Capacity> Discharge<'a, C> {
    /// Pushes excess towards `target`. Only vertices with label below `limit`
    /// are active. The `frozen` vertex neither receives flow nor is
    /// discharged.
    fn new(
        network: &'a mut ResidualNetwork<C>,
        excess: &'a mut [C::Sum],
        target: usize,
        frozen: usize,
        limit: usize,
    ) -> Self {
        let n = network.vertex_count();
        let current = (0..n).map(|v| network.first_arc(v)).collect();

        let mut this = Self {
            network,
            excess,
            target,
            frozen,
            limit,
            label: Vec::new(),
            count: vec![0; limit + 1],
            current,
            buckets: vec![Vec::new(); limit],
            highest: 0,
            relabels_since_global: 0,
        };

        this.global_relabel();
        this
    }

    fn is_active(&self, v: usize) -> bool {
        v != self.target
            && v != self.frozen
            && self.label[v] < self.limit
            && self.excess[v] > C::Sum::zero()
    }

    fn activate(&mut self, v: usize) {
        let label = self.label[v];
        self.buckets[label].push(v);
        self.highest = self.highest.max(label);
    }

    /// Recomputes exact distance labels and rebuilds the buckets of active
    /// vertices. Current arcs start over, since arcs skipped under the old
    /// labels may be admissible under the new ones.
    fn global_relabel(&mut self) {
        self.label = self
            .network
            .distances_to(self.target, Some(self.frozen), self.limit);
        self.label[self.frozen] = self.limit;

        for (v, arc) in self.current.iter_mut().enumerate() {
            *arc = self.network.first_arc(v);
        }

        self.count.fill(0);
        for &label in self.label.iter() {
            self.count[label] += 1;
        }

        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.highest = 0;

        for v in 0..self.label.len() {
            if self.is_active(v) {
                self.activate(v);
            }
        }

        self.relabels_since_global = 0;
    }

    fn run(mut self) {
        let n = self.network.vertex_count();

        loop {
            while self.highest > 0 && self.buckets[self.highest].is_empty() {
                self.highest -= 1;
            }

            let Some(u) = self.buckets[self.highest].pop() else {
                break;
            };

            // Entries become stale when a label changes by a gap or global
            // relabel.
            if self.label[u] != self.highest || !self.is_active(u) {
                continue;
            }

            self.discharge(u);

            if self.relabels_since_global >= n {
                self.global_relabel();
            }
        }
    }

    fn discharge(&mut self, u: usize) {
        while self.excess[u] > C::Sum::zero() {
            if self.current[u] == self.network.end_arc(u) {
                self.relabel(u);
                if self.label[u] >= self.limit {
                    return;
                }
                continue;
            }

            let arc = self.current[u];
            let v = self.network.head(arc);

            if self.network.has_residual(arc) && self.label[u] == self.label[v] + 1 {
                // An excess that does not fit into `C` exceeds any residual.
                let residual = self.network.residual(arc);
                let delta = match C::narrow(self.excess[u]) {
                    Some(excess) => min(excess, residual),
                    None => residual,
                };
                let was_inactive = self.excess[v] <= C::Sum::zero();

                self.network.push(arc, delta);
                self.excess[u] = self.excess[u] - delta.widen();
                self.excess[v] = self.excess[v] + delta.widen();

                if was_inactive && self.is_active(v) {
                    self.activate(v);
                }

                if !self.network.has_residual(arc) {
                    self.current[u] += 1;
                }
            } else {
                self.current[u] += 1;
            }
        }
    }

    fn relabel(&mut self, u: usize) {
        let old = self.label[u];

        let new = self
            .network
            .arcs(u)
            .filter(|&arc| self.network.has_residual(arc))
            .map(|arc| self.label[self.network.head(arc)] + 1)
            .min()
            .unwrap_or(self.limit)
            .min(self.limit);

        self.count[old] -= 1;
        self.current[u] = self.network.first_arc(u);
        self.relabels_since_global += 1;

        if new > old && self.count[old] == 0 {
            // Gap: vertices above the empty label cannot reach the target.
            for v in 0..self.label.len() {
                if self.label[v] > old && self.label[v] < self.limit && v != self.frozen {
                    self.count[self.label[v]] -= 1;
                    self.label[v] = self.limit;
                    self.count[self.limit] += 1;
                }
            }

            self.label[u] = self.limit;
            self.count[self.limit] += 1;
        } else {
            self.label[u] = new;
            self.count[new] += 1;

            if new < self.limit {
                self.highest = self.highest.max(new);
            }
        }
    }
}
