use crate::core::capacity::Capacity;

use super::residual::{min, ResidualNetwork};

/// Augments along shortest paths using exact distance labels to the sink,
/// advancing and retreating over admissible arcs instead of searching the
/// whole graph for every path.
pub fn shortest_augmenting_path<C: Capacity>(
    network: &mut ResidualNetwork<C>,
    source: usize,
    sink: usize,
) -> C::Sum {
    let n = network.vertex_count();

    let mut dist = network.distances_to(sink, None, n);
    if dist[source] >= n {
        return C::Sum::zero();
    }

    // Number of vertices with given distance label, for the gap heuristic.
    let mut count = vec![0usize; n + 1];
    for &d in dist.iter() {
        count[d] += 1;
    }

    let mut current = (0..n).map(|v| network.first_arc(v)).collect::<Vec<_>>();
    let mut path = Vec::new();
    let mut value = C::Sum::zero();
    let mut u = source;

    while dist[source] < n {
        let mut advanced = false;

        while current[u] < network.end_arc(u) {
            let arc = current[u];
            let v = network.head(arc);

            if network.has_residual(arc) && dist[u] == dist[v] + 1 {
                path.push(arc);
                u = v;
                advanced = true;
                break;
            }

            current[u] += 1;
        }

        if advanced {
            if u == sink {
                value = value + augment(network, &mut path).widen();
                u = path.last().map_or(source, |&arc| network.head(arc));
            }
            continue;
        }

        // Retreat: relabel `u` to one more than its lowest neighbor.
        let relabeled = network
            .arcs(u)
            .filter(|&arc| network.has_residual(arc))
            .map(|arc| dist[network.head(arc)] + 1)
            .min()
            .unwrap_or(n)
            .min(n);

        count[dist[u]] -= 1;
        if count[dist[u]] == 0 {
            // Gap: no vertex at this distance means that nothing above it can
            // reach the sink anymore.
            break;
        }

        dist[u] = relabeled;
        count[relabeled] += 1;
        current[u] = network.first_arc(u);

        // Only the source is not reached through an arc on the path.
        if let Some(arc) = path.pop() {
            u = network.tail(arc);
        }
    }

    value
}

/// Pushes the bottleneck amount along the path and truncates the path just
/// before the first saturated arc.
pub(super) fn augment<C: Capacity>(network: &mut ResidualNetwork<C>, path: &mut Vec<usize>) -> C {
    let bottleneck = path
        .iter()
        .map(|&arc| network.residual(arc))
        .reduce(min)
        .unwrap_or_else(C::zero);

    for &arc in path.iter() {
        network.push(arc, bottleneck);
    }

    if let Some(saturated) = path.iter().position(|&arc| !network.has_residual(arc)) {
        path.truncate(saturated);
    }

    bottleneck
}
