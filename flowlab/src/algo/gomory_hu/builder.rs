use std::marker::PhantomData;

use crate::{
    algo::max_flow::{
        algo::{ChooseAlgo, SpecificAlgo},
        residual::ResidualNetwork,
        Algo,
    },
    core::{
        capacity::{self, Capacity, GetCapacity},
        marker::Undirected,
        GraphBase, GraphRef,
    },
};

use super::{gusfield, Error, GomoryHu};

pub struct GomoryHuBuilder<'a, C, G, F> {
    graph: &'a G,
    edge_capacity: F,
    algo: Option<Algo>,
    ty: PhantomData<fn() -> C>,
}

impl<C> GomoryHu<C> {
    pub fn on<G>(graph: &G) -> GomoryHuBuilder<'_, C, G, capacity::Identity>
    where
        G: GraphBase<EdgeType = Undirected>,
    {
        GomoryHuBuilder {
            graph,
            edge_capacity: capacity::Identity,
            algo: None,
            ty: PhantomData,
        }
    }
}

impl<'a, C, G, F> GomoryHuBuilder<'a, C, G, F>
where
    G: GraphBase<EdgeType = Undirected>,
{
    pub fn capacity<F2, V, E>(self, edge_capacity: F2) -> GomoryHuBuilder<'a, C, G, F2>
    where
        G: GraphRef<V, E>,
        F2: GetCapacity<E, C>,
        C: Capacity,
    {
        GomoryHuBuilder {
            edge_capacity,
            graph: self.graph,
            algo: self.algo,
            ty: PhantomData,
        }
    }

    pub fn capacity_fn<F2, V, E>(self, edge_capacity: F2) -> GomoryHuBuilder<'a, C, G, F2>
    where
        G: GraphRef<V, E>,
        F2: Fn(&E) -> C,
        C: Capacity,
    {
        self.capacity(edge_capacity)
    }

    pub fn unit_capacity(self) -> GomoryHuBuilder<'a, C, G, capacity::Unit> {
        GomoryHuBuilder {
            edge_capacity: capacity::Unit,
            graph: self.graph,
            algo: self.algo,
            ty: PhantomData,
        }
    }

    /// Maximum flow algorithm used for the individual cuts.
    pub fn using(self, algo: Algo) -> Self {
        Self {
            algo: Some(algo),
            ..self
        }
    }

    pub fn using_opt(self, algo: Option<Algo>) -> Self {
        Self { algo, ..self }
    }

    pub fn run<V, E>(self) -> Result<GomoryHu<C>, Error>
    where
        G: GraphRef<V, E>,
        F: GetCapacity<E, C>,
        C: Capacity,
    {
        let GomoryHuBuilder {
            graph,
            edge_capacity,
            algo,
            ..
        } = self;

        if graph.vertex_count() == 0 {
            return Err(Error::EmptyGraph);
        }

        let algo = SpecificAlgo(algo).choose();
        let mut network = ResidualNetwork::build(graph, &edge_capacity)?;
        let (parent, weight) = gusfield(&mut network, algo)?;

        Ok(GomoryHu {
            parent,
            weight,
            algo,
        })
    }
}
