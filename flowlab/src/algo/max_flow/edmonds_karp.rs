use std::collections::VecDeque;

use crate::core::capacity::Capacity;

use super::residual::{min, ResidualNetwork};

const NO_ARC: usize = usize::MAX;

pub fn edmonds_karp<C: Capacity>(
    network: &mut ResidualNetwork<C>,
    source: usize,
    sink: usize,
) -> C::Sum {
    let n = network.vertex_count();

    // Arc through which each vertex was discovered in the current search.
    let mut pred = vec![NO_ARC; n];
    let mut queue = VecDeque::with_capacity(n);
    let mut value = C::Sum::zero();

    loop {
        pred.fill(NO_ARC);
        queue.clear();
        queue.push_back(source);

        let mut found = false;

        'search: while let Some(u) = queue.pop_front() {
            for arc in network.arcs(u) {
                let v = network.head(arc);

                if v == source || pred[v] != NO_ARC || !network.has_residual(arc) {
                    continue;
                }

                pred[v] = arc;

                if v == sink {
                    found = true;
                    break 'search;
                }

                queue.push_back(v);
            }
        }

        if !found {
            break;
        }

        // Bottleneck of the shortest augmenting path.
        let mut bottleneck = network.residual(pred[sink]);
        let mut v = network.tail(pred[sink]);
        while v != source {
            bottleneck = min(bottleneck, network.residual(pred[v]));
            v = network.tail(pred[v]);
        }

        let mut v = sink;
        while v != source {
            let arc = pred[v];
            network.push(arc, bottleneck);
            v = network.tail(arc);
        }

        value = value + bottleneck.widen();
    }

    value
}
