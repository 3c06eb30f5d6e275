//! The benchmark procedures. Each of them builds its graphs once and then
//! measures every selected algorithm on them.

use std::{io::Write, path::Path};

use anyhow::{bail, ensure, Context, Result};
use fastrand::Rng;
use flowlab::{
    algo::{is_tree, max_flow::Algo, GomoryHu, MaxFlow},
    core::{
        capacity::{Capacity, GetCapacity, Identity, Unit},
        id::VertexId,
        marker::Undirected,
        EdgeSet, GraphRef, VertexSet,
    },
    infra::{
        dimacs,
        fixtures,
        generate::{complete, pyramid, SparseMatrix},
    },
    storage::AdjList,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    report::{Measurement, Outcome, Reporter},
    timing::time_average,
};

pub struct Bench<'a, W> {
    pub settings: &'a Settings,
    pub reporter: &'a mut Reporter<W>,
}

impl<W: Write> Bench<'_, W> {
    /// Times the maximum flow between `source` and `sink` for every selected
    /// algorithm and returns the flow values in the same order.
    fn measure_max_flow<V, E, G>(
        &mut self,
        scenario: &str,
        graph: &G,
        source: VertexId,
        sink: VertexId,
    ) -> Result<Vec<E>>
    where
        G: GraphRef<V, E>,
        E: Capacity + Serialize,
    {
        info!(
            scenario,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "measuring maximum flow"
        );
        self.reporter.section(scenario)?;

        let mut values = Vec::with_capacity(self.settings.algos.len());

        for &algo in self.settings.algos.iter() {
            let timed = time_average(self.settings.repeats, || {
                MaxFlow::on(graph)
                    .using(algo)
                    .run(source, sink)
                    .map(|flow| flow.value())
            })
            .with_context(|| format!("{algo} failed in scenario `{scenario}`"))?;

            debug!(%algo, value = ?timed.last, seconds = timed.seconds(), "flow computed");

            self.reporter.record(&Measurement {
                scenario: scenario.to_owned(),
                algorithm: algo.name(),
                repeats: self.settings.repeats.get(),
                seconds: timed.seconds(),
                outcome: Outcome::FlowValue(serde_json::to_value(timed.last)?),
            })?;

            values.push(timed.last);
        }

        Ok(values)
    }

    fn measure_gomory_hu<V, E, F>(
        &mut self,
        scenario: &str,
        graph: &AdjList<V, E, Undirected>,
        capacity: F,
    ) -> Result<()>
    where
        F: GetCapacity<E, u32> + Copy,
    {
        info!(
            scenario,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "measuring Gomory-Hu tree"
        );
        self.reporter.section(scenario)?;

        for &algo in self.settings.algos.iter() {
            let timed = time_average(self.settings.repeats, || {
                GomoryHu::<u32>::on(graph)
                    .capacity(capacity)
                    .using(algo)
                    .run()
            })
            .with_context(|| format!("{algo} failed in scenario `{scenario}`"))?;

            let tree = timed.last.to_graph();
            let valid = is_tree(&tree);

            self.reporter.record(&Measurement {
                scenario: scenario.to_owned(),
                algorithm: algo.name(),
                repeats: self.settings.repeats.get(),
                seconds: timed.average.as_secs_f64(),
                outcome: Outcome::IsTree(valid),
            })?;

            ensure!(valid, "{algo} did not produce a tree for `{scenario}`");
        }

        Ok(())
    }
}

/// Maximum flow from the first to the last vertex of random matrices with
/// the given densities.
pub fn random<W: Write>(bench: &mut Bench<'_, W>, size: usize, densities: &[f64]) -> Result<()> {
    ensure!(size >= 2, "random graph needs at least two vertices");

    for &density in densities {
        ensure!(
            (0.0..=1.0).contains(&density),
            "density {density} is not in [0, 1]"
        );

        let matrix = SparseMatrix::random(size, density, &mut Rng::with_seed(bench.settings.seed));
        let graph = matrix.to_digraph();

        bench.measure_max_flow(
            &format!("random size={size} density={density}"),
            &graph,
            VertexId::from(0usize),
            VertexId::from(size - 1),
        )?;
    }

    Ok(())
}

/// Maximum flow from the first to the last vertex of a banded matrix.
pub fn banded<W: Write>(bench: &mut Bench<'_, W>, size: usize, half_width: usize) -> Result<()> {
    ensure!(size >= 2, "banded graph needs at least two vertices");

    let matrix = SparseMatrix::banded(size, half_width, &mut Rng::with_seed(bench.settings.seed));
    let graph = matrix.to_digraph();

    bench.measure_max_flow(
        &format!("banded size={size} half_width={half_width}"),
        &graph,
        VertexId::from(0usize),
        VertexId::from(size - 1),
    )?;

    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct Agreement {
    pub size: usize,
    pub density: f64,
    pub seeds: u64,
    pub first: Algo,
    pub second: Algo,
}

/// Checks that two algorithms compute the same flow value on random graphs
/// generated from seeds `0..seeds`. Stops at the first disagreement.
pub fn agree<W: Write>(bench: &mut Bench<'_, W>, params: Agreement) -> Result<()> {
    let Agreement {
        size,
        density,
        seeds,
        first,
        second,
    } = params;

    ensure!(size >= 2, "random graph needs at least two vertices");
    info!(size, density, seeds, %first, %second, "checking agreement");

    let (source, sink) = (VertexId::from(0usize), VertexId::from(size - 1));

    for seed in 0..seeds {
        let graph = SparseMatrix::random(size, density, &mut Rng::with_seed(seed)).to_digraph();

        let a = MaxFlow::on(&graph).using(first).run(source, sink)?.value();
        let b = MaxFlow::on(&graph).using(second).run(source, sink)?.value();

        debug!(seed, a, b, "compared");

        if a != b {
            bail!("{first} computed {a} but {second} computed {b} for seed {seed}");
        }
    }

    bench
        .reporter
        .section(&format!("{first} and {second} agree on {seeds} graphs"))?;

    Ok(())
}

#[derive(Debug, Clone)]
pub struct Large<'a> {
    pub complete: usize,
    pub pyramid: usize,
    pub instances: &'a [std::path::PathBuf],
}

/// Complete graph, pyramid and DIMACS instances.
pub fn large<W: Write>(bench: &mut Bench<'_, W>, params: Large<'_>) -> Result<()> {
    let n = params.complete;
    ensure!(n >= 3, "complete graph needs at least three vertices");

    let graph = complete(n, 5u32);
    let values = bench.measure_max_flow(
        &format!("complete n={n}"),
        &graph,
        VertexId::from(1usize),
        VertexId::from(2usize),
    )?;

    let expected = 5 * (n as u32 - 1);
    for (algo, value) in bench.settings.algos.iter().zip(values) {
        ensure!(
            value == expected,
            "Assertion failed in function: {algo} (expected {expected}, got {value})"
        );
    }

    let instance = pyramid(params.pyramid);
    let values = bench.measure_max_flow(
        &format!("pyramid n={}", params.pyramid),
        &instance.graph,
        instance.source,
        instance.sink,
    )?;

    for (algo, value) in bench.settings.algos.iter().zip(values) {
        if (value - 1.0).abs() > 1e-6 {
            warn!(%algo, value, "pyramid flow deviates from one");
        }
    }

    for path in params.instances {
        measure_dimacs(bench, path)?;
    }

    Ok(())
}

fn measure_dimacs<W: Write>(bench: &mut Bench<'_, W>, path: &Path) -> Result<()> {
    let instance = dimacs::read_file(path)
        .with_context(|| format!("failed to load instance `{}`", path.display()))?;

    bench.measure_max_flow(
        &path.display().to_string(),
        &instance.graph,
        instance.source,
        instance.sink,
    )?;

    Ok(())
}

/// Gomory–Hu trees of the built-in fixtures.
pub fn gomory_hu<W: Write>(bench: &mut Bench<'_, W>) -> Result<()> {
    bench.measure_gomory_hu("karate club", &fixtures::karate_club(), Unit)?;
    bench.measure_gomory_hu("florentine families", &fixtures::florentine_families(), Unit)?;
    bench.measure_gomory_hu("davis southern women", &fixtures::davis_southern_women(), Unit)?;
    bench.measure_gomory_hu("les miserables", &fixtures::les_miserables(), Unit)?;
    bench.measure_gomory_hu("wikipedia example", &fixtures::wikipedia_example(), Identity)?;

    Ok(())
}
