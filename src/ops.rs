/*!
# Graph Operations

Query traits shared by all graph types of this crate.
Algorithms in [`algo`](crate::algo) are blanket-implemented over these traits, so they work
on a [`Graph`](crate::repr::Graph) as well as on views such as
[`Reversed`](crate::repr::Reversed).

All queries are pure: no trait in this module offers mutation.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{utils::NodeBitSet, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all vertices. In contrast to [`GraphNodeOrder::vertices`]
    /// the returned range is meant to be stored, e.g. in an iterator that also borrows the graph.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge `{u, v}` is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Runtime information on the kind of graph
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if `(u, v)` and `(v, u)` denote the same edge
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    type NeighborIter<'a>: Iterator<Item = Node> + Clone + 'a
    where
        Self: 'a;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// For directed graphs, these are the out-neighbors.
    /// A self-loop at `u` lists `u` once.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of edge endpoints at `u`.
    ///
    /// - Undirected: the number of incident edges, where a self-loop counts twice.
    /// - Directed: in-degree plus out-degree, where a self-loop counts once for each.
    ///
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns the number of nodes with non-zero degree
    fn number_of_nodes_with_neighbors(&self) -> NumNodes {
        self.vertices_with_neighbors().count() as NumNodes
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns *true* if `u` has no incident edges
    /// ** Panics if `u >= n` **
    fn is_isolated(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns a sorted list of all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.vertices()
            .flat_map(|u| self.edges_of(u, only_normalized))
            .sorted()
            .collect()
    }
}

/// Adjacency getters that distinguish between incoming and outgoing edges.
///
/// Undirected graphs implement this trait as well: there, in- and out-neighborhoods coincide.
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over nodes `v` with edges `(u, v)`
    /// ** Panics if `u >= n` **
    #[inline]
    fn out_neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.neighbors_of(u)
    }

    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of incoming edges of `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the in-degrees of all vertices
    fn in_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.in_degree_of(u))
    }

    /// Returns an iterator over the out-degrees of all vertices
    fn out_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.out_degree_of(u))
    }

    /// Returns an iterator over all vertices with in-degree 0
    fn vertices_without_in_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.in_degree_of(u) == 0)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// Note that for undirected graphs with edge {u,v} this function always returns *true*.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Access to edge weights
pub trait WeightedAdjacency: GraphEdgeOrder {
    /// Returns the weight of edge `(u, v)` or `None` if the edge does not exist
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns all edges with their weights in insertion order.
    /// An undirected edge is reported once, in the orientation it was inserted with.
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_;

    /// Sum of all edge weights
    fn total_weight(&self) -> Weight {
        self.weighted_edges().map(|e| e.weight).sum()
    }
}
