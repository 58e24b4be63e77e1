use crate::{ops::*, *};

/// A borrowed view of a graph with all edge directions swapped.
///
/// No data is copied: out-neighbors of the view are the in-neighbors of the underlying graph
/// and vice versa. For undirected graphs the view is indistinguishable from the graph itself.
///
/// # Examples
/// ```
/// use graphcheck::prelude::*;
///
/// let g = Graph::build(3, true, [(0, 1), (1, 2)]).unwrap();
/// let r = g.reversed();
///
/// assert!(r.has_edge(1, 0));
/// assert!(!r.has_edge(0, 1));
/// assert_eq!(r.neighbors_of(2).collect::<Vec<_>>(), vec![1]);
/// ```
#[derive(Debug)]
pub struct Reversed<'a, G> {
    graph: &'a G,
}

impl<G> Clone for Reversed<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Reversed<'_, G> {}

impl<'a, G> Reversed<'a, G> {
    /// Creates the reversed view of `graph`
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Returns the underlying graph
    pub fn inner(&self) -> &'a G {
        self.graph
    }
}

/// Provides [`Reversed`] views on directed adjacency structures
pub trait Reverse: DirectedAdjacencyList {
    /// Returns a view of the graph with all edges reversed
    fn reversed(&self) -> Reversed<'_, Self> {
        Reversed::new(self)
    }
}

impl<G: DirectedAdjacencyList> Reverse for G {}

impl<G: GraphNodeOrder> GraphNodeOrder for Reversed<'_, G> {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

impl<G: GraphEdgeOrder> GraphEdgeOrder for Reversed<'_, G> {
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}

impl<G: GraphType> GraphType for Reversed<'_, G> {
    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }
}

impl<'a, G: DirectedAdjacencyList> AdjacencyList for Reversed<'a, G> {
    type NeighborIter<'b>
        = G::NeighborIter<'b>
    where
        Self: 'b;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.graph.in_neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.graph.degree_of(u)
    }
}

impl<'a, G: DirectedAdjacencyList> DirectedAdjacencyList for Reversed<'a, G> {
    fn in_neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.graph.out_neighbors_of(u)
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.graph.in_degree_of(u)
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.graph.out_degree_of(u)
    }
}

impl<G: AdjacencyTest> AdjacencyTest for Reversed<'_, G> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(v, u)
    }
}

impl<G: WeightedAdjacency> WeightedAdjacency for Reversed<'_, G> {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.graph.weight_of(v, u)
    }

    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.graph.weighted_edges().map(|e| WeightedEdge {
            edge: e.edge.reverse(),
            weight: e.weight,
        })
    }
}
