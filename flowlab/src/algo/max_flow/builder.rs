use std::marker::PhantomData;

use crate::core::{
    capacity::{self, Capacity, GetCapacity},
    id::{IdType, VertexId},
    GraphRef,
};

use super::{
    algo::{self, ChooseAlgo},
    residual::ResidualNetwork,
    Algo, Error, MaxFlow,
};

pub struct MaxFlowBuilder<'a, C, G, F, A> {
    graph: &'a G,
    edge_capacity: F,
    algo: A,
    ty: PhantomData<fn() -> C>,
}

impl<C> MaxFlow<C> {
    pub fn on<G>(graph: &G) -> MaxFlowBuilder<'_, C, G, capacity::Identity, algo::AnyAlgo> {
        MaxFlowBuilder {
            graph,
            edge_capacity: capacity::Identity,
            algo: algo::AnyAlgo,
            ty: PhantomData,
        }
    }
}

impl<'a, C, G, F, A> MaxFlowBuilder<'a, C, G, F, A> {
    pub fn capacity<F2, V, E>(self, edge_capacity: F2) -> MaxFlowBuilder<'a, C, G, F2, A>
    where
        G: GraphRef<V, E>,
        F2: GetCapacity<E, C>,
        C: Capacity,
    {
        MaxFlowBuilder {
            edge_capacity,
            graph: self.graph,
            algo: self.algo,
            ty: PhantomData,
        }
    }

    // Closures passed to `capacity` need type annotations for their argument.
    // The explicit `Fn` bound here lets the compiler infer it.
    pub fn capacity_fn<F2, V, E>(self, edge_capacity: F2) -> MaxFlowBuilder<'a, C, G, F2, A>
    where
        G: GraphRef<V, E>,
        F2: Fn(&E) -> C,
        C: Capacity,
    {
        self.capacity(edge_capacity)
    }

    /// Every edge gets capacity one, so that the flow value counts
    /// edge-disjoint paths.
    pub fn unit_capacity(self) -> MaxFlowBuilder<'a, C, G, capacity::Unit, A> {
        MaxFlowBuilder {
            edge_capacity: capacity::Unit,
            graph: self.graph,
            algo: self.algo,
            ty: PhantomData,
        }
    }

    pub fn edmonds_karp(self) -> MaxFlowBuilder<'a, C, G, F, algo::EdmondsKarp> {
        self.with_algo(algo::EdmondsKarp)
    }

    pub fn shortest_augmenting_path(
        self,
    ) -> MaxFlowBuilder<'a, C, G, F, algo::ShortestAugmentingPath> {
        self.with_algo(algo::ShortestAugmentingPath)
    }

    pub fn dinitz(self) -> MaxFlowBuilder<'a, C, G, F, algo::Dinitz> {
        self.with_algo(algo::Dinitz)
    }

    pub fn preflow_push(self) -> MaxFlowBuilder<'a, C, G, F, algo::PreflowPush> {
        self.with_algo(algo::PreflowPush)
    }

    pub fn using(self, algo: Algo) -> MaxFlowBuilder<'a, C, G, F, algo::SpecificAlgo> {
        self.with_algo(algo::SpecificAlgo(Some(algo)))
    }

    /// Like [`using`](Self::using), but `None` falls back to the default
    /// algorithm.
    pub fn using_opt(
        self,
        algo: Option<Algo>,
    ) -> MaxFlowBuilder<'a, C, G, F, algo::SpecificAlgo> {
        self.with_algo(algo::SpecificAlgo(algo))
    }

    fn with_algo<A2>(self, algo: A2) -> MaxFlowBuilder<'a, C, G, F, A2> {
        MaxFlowBuilder {
            graph: self.graph,
            edge_capacity: self.edge_capacity,
            algo,
            ty: PhantomData,
        }
    }
}

impl<'a, C, G, F, A> MaxFlowBuilder<'a, C, G, F, A>
where
    A: ChooseAlgo,
{
    pub fn run<V, E>(self, source: VertexId, sink: VertexId) -> Result<MaxFlow<C>, Error>
    where
        G: GraphRef<V, E>,
        F: GetCapacity<E, C>,
        C: Capacity,
    {
        let MaxFlowBuilder {
            graph,
            edge_capacity,
            algo,
            ..
        } = self;

        if source == sink {
            return Err(Error::SourceIsSink);
        }

        if !graph.contains_vertex(&source) || !graph.contains_vertex(&sink) {
            return Err(Error::VertexNotFound);
        }

        let algo = algo.choose();
        let mut network = ResidualNetwork::build(graph, &edge_capacity)?;
        let value = algo.augment(&mut network, source.as_usize(), sink.as_usize())?;

        Ok(MaxFlow {
            source,
            sink,
            value,
            algo,
            network,
        })
    }
}
