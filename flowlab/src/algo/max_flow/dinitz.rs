use std::collections::VecDeque;

use crate::core::capacity::Capacity;

use super::{residual::ResidualNetwork, shortest_augmenting_path::augment};

const UNLEVELED: usize = usize::MAX;

/// Dinitz's algorithm. Each phase builds the level graph by a BFS from the
/// source and then saturates it with a blocking flow found by depth-first
/// advancing over the current arcs.
pub fn dinitz<C: Capacity>(
    network: &mut ResidualNetwork<C>,
    source: usize,
    sink: usize,
) -> C::Sum {
    let n = network.vertex_count();

    let mut level = vec![UNLEVELED; n];
    let mut current = vec![0; n];
    let mut queue = VecDeque::with_capacity(n);
    let mut path = Vec::new();
    let mut value = C::Sum::zero();

    while build_levels(network, source, sink, &mut level, &mut queue) {
        for (v, arc) in current.iter_mut().enumerate() {
            *arc = network.first_arc(v);
        }

        path.clear();
        let mut u = source;

        loop {
            if u == sink {
                value = value + augment(network, &mut path).widen();
                u = path.last().map_or(source, |&arc| network.head(arc));
                continue;
            }

            let mut advanced = false;

            while current[u] < network.end_arc(u) {
                let arc = current[u];
                let v = network.head(arc);

                if network.has_residual(arc) && level[v] == level[u] + 1 {
                    path.push(arc);
                    u = v;
                    advanced = true;
                    break;
                }

                current[u] += 1;
            }

            if advanced {
                continue;
            }

            // Dead end. The arc that led here is useless for the rest of the
            // phase.
            match path.pop() {
                Some(arc) => {
                    u = network.tail(arc);
                    current[u] += 1;
                }
                None => break,
            }
        }
    }

    value
}

fn build_levels<C: Capacity>(
    network: &ResidualNetwork<C>,
    source: usize,
    sink: usize,
    level: &mut [usize],
    queue: &mut VecDeque<usize>,
) -> bool {
    level.fill(UNLEVELED);
    queue.clear();

    level[source] = 0;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for arc in network.arcs(u) {
            let v = network.head(arc);

            if level[v] == UNLEVELED && network.has_residual(arc) {
                level[v] = level[u] + 1;

                // Vertices farther than the sink cannot lie on a shortest
                // path, there is no need to label them.
                if v != sink {
                    queue.push_back(v);
                }
            }
        }
    }

    level[sink] != UNLEVELED
}
