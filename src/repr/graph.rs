/*!
# The Graph Model

[`Graph`] is the single canonical representation every analysis of this crate runs on.
It is built once, through [`Graph::build`] or a configured [`GraphBuilder`], and never changes
afterwards.

## Storage

- `out_nbs[u]`: neighbors of `u` (out-neighbors for directed graphs) in edge-insertion order,
- `in_nbs[u]`: in-neighbors of `u` (directed graphs only),
- `matrix[u]`: [`NodeBitSet`] row of the adjacency matrix for `O(1)` edge queries,
- `edges`: all weighted edges in insertion order, and an index from edge to position.

An undirected edge `{u, v}` is stored once in `edges` but appears in both `out_nbs[u]` and
`out_nbs[v]` (a self-loop `{u, u}` appears once in `out_nbs[u]`).
*/

use fxhash::FxHashMap;
use tracing::debug;

use crate::{error::*, ops::*, utils::NodeBitSet, *};

/// An immutable, optionally directed, weighted graph over the vertices `0..n`.
///
/// Duplicate edges are collapsed during construction: the first occurrence (and its weight)
/// wins. For undirected graphs, `(u, v)` and `(v, u)` are duplicates of each other.
///
/// # Examples
/// ```
/// use graphcheck::prelude::*;
///
/// let g = Graph::build(3, false, [(0, 1), (1, 2)]).unwrap();
/// assert!(g.has_edge(1, 0));
/// assert_eq!(g.degree_of(1), 2);
/// assert_eq!(g.number_of_edges(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    directed: bool,
    out_nbs: Vec<Vec<Node>>,
    in_nbs: Vec<Vec<Node>>,
    matrix: Vec<NodeBitSet>,
    edges: Vec<WeightedEdge>,
    edge_index: FxHashMap<Edge, NumEdges>,
}

impl Graph {
    /// Builds a graph with `n` vertices from a list of edges.
    /// Edges may be given as `(u, v)`, `(u, v, weight)`, [`Edge`] or [`WeightedEdge`].
    ///
    /// Fails with [`GraphError::InvalidEdge`] if an endpoint lies outside of `0..n`.
    pub fn build<I>(n: NumNodes, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        GraphBuilder::new(n).directed(directed).edges(edges).build()
    }

    /// Returns all edges with their weights in insertion order
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Returns a graph of the same kind on the same vertices containing only the given edges.
    /// Used to materialize derived structures such as spanning trees and arborescences.
    pub(crate) fn derived<I>(n: NumNodes, directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = WeightedEdge>,
    {
        let mut graph = Self::empty(n, directed);
        for e in edges {
            graph.insert_edge(e);
        }
        graph
    }

    fn empty(n: NumNodes, directed: bool) -> Self {
        Self {
            directed,
            out_nbs: vec![Vec::new(); n as usize],
            in_nbs: if directed {
                vec![Vec::new(); n as usize]
            } else {
                Vec::new()
            },
            matrix: vec![NodeBitSet::new(n); n as usize],
            edges: Vec::new(),
            edge_index: FxHashMap::default(),
        }
    }

    fn key_of(&self, u: Node, v: Node) -> Edge {
        if self.directed {
            Edge(u, v)
        } else {
            Edge(u, v).normalized()
        }
    }

    /// Inserts an edge whose endpoints are known to be valid.
    /// Returns *false* if the edge was already present.
    fn insert_edge(&mut self, e: WeightedEdge) -> bool {
        let Edge(u, v) = e.edge;
        if self.matrix[u as usize].set_bit(v) {
            return false;
        }

        self.out_nbs[u as usize].push(v);
        if self.directed {
            self.in_nbs[v as usize].push(u);
        } else if u != v {
            self.matrix[v as usize].set_bit(u);
            self.out_nbs[v as usize].push(u);
        }

        let key = self.key_of(u, v);
        self.edge_index.insert(key, self.edges.len() as NumEdges);
        self.edges.push(e);
        true
    }
}

/// Builder for a [`Graph`].
///
/// By default, the graph is undirected and self-loops are permitted.
///
/// # Examples
/// ```
/// use graphcheck::prelude::*;
///
/// let g = GraphBuilder::new(3)
///     .directed(true)
///     .edges([(0, 1, 2.0), (1, 2, 0.5)])
///     .build()
///     .unwrap();
///
/// assert!(g.is_directed());
/// assert_eq!(g.weight_of(0, 1), Some(2.0));
/// assert_eq!(g.weight_of(1, 0), None);
///
/// let err = GraphBuilder::new(2).allow_self_loops(false).edges([(1, 1)]).build();
/// assert_eq!(err.unwrap_err(), GraphError::SelfLoop { vertex: 1 });
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    n: NumNodes,
    directed: bool,
    allow_self_loops: bool,
    edges: Vec<WeightedEdge>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `n` vertices and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            directed: false,
            allow_self_loops: true,
            edges: Vec::new(),
        }
    }

    /// Sets whether the graph is directed
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Sets whether the graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.set_directed(directed);
        self
    }

    /// Sets whether self-loops are accepted. If not, [`GraphBuilder::build`] fails with
    /// [`GraphError::SelfLoop`] on the first self-loop.
    pub fn set_allow_self_loops(&mut self, allow: bool) {
        self.allow_self_loops = allow;
    }

    /// Sets whether self-loops are accepted. If not, [`GraphBuilder::build`] fails with
    /// [`GraphError::SelfLoop`] on the first self-loop.
    pub fn allow_self_loops(mut self, allow: bool) -> Self {
        self.set_allow_self_loops(allow);
        self
    }

    /// Appends a single edge
    pub fn add_edge(&mut self, edge: impl Into<WeightedEdge>) {
        self.edges.push(edge.into());
    }

    /// Appends a single edge
    pub fn edge(mut self, edge: impl Into<WeightedEdge>) -> Self {
        self.add_edge(edge);
        self
    }

    /// Appends all edges of the collection
    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
    }

    /// Appends all edges of the collection
    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        self.add_edges(edges);
        self
    }

    /// Validates all edges and builds the graph.
    pub fn build(self) -> Result<Graph> {
        let n = self.n;
        let mut graph = Graph::empty(n, self.directed);

        for e in self.edges {
            let Edge(u, v) = e.edge;
            if u >= n || v >= n {
                return Err(GraphError::InvalidEdge { u, v, n });
            }
            if !self.allow_self_loops && u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            if !graph.insert_edge(e) {
                debug!(edge = %e, "collapsed duplicate edge");
            }
        }

        debug!(
            n,
            m = graph.edges.len(),
            directed = graph.directed,
            "built graph"
        );

        Ok(graph)
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl GraphType for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl AdjacencyList for Graph {
    type NeighborIter<'a>
        = std::iter::Copied<std::slice::Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.out_nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        if self.directed {
            (self.out_nbs[u as usize].len() + self.in_nbs[u as usize].len()) as NumNodes
        } else {
            // a self-loop contributes both of its endpoints
            self.out_nbs[u as usize].len() as NumNodes + self.has_self_loop(u) as NumNodes
        }
    }
}

impl DirectedAdjacencyList for Graph {
    fn in_neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        if self.directed {
            self.in_nbs[u as usize].iter().copied()
        } else {
            self.neighbors_of(u)
        }
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        if self.directed {
            self.out_nbs[u as usize].len() as NumNodes
        } else {
            self.degree_of(u)
        }
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        if self.directed {
            self.in_nbs[u as usize].len() as NumNodes
        } else {
            self.degree_of(u)
        }
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.matrix[u as usize].get_bit(v)
    }
}

impl WeightedAdjacency for Graph {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        if !self.has_edge(u, v) {
            return None;
        }

        self.edge_index
            .get(&self.key_of(u, v))
            .map(|&i| self.edges[i as usize].weight)
    }

    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn graph_new() {
        for n in 0..20 {
            let graph = Graph::build(n, false, Vec::<Edge>::new()).unwrap();

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert_eq!(graph.is_empty(), n == 0);
        }
    }

    #[test]
    fn invalid_edge() {
        assert_eq!(
            Graph::build(3, true, [(0, 1), (1, 3)]).unwrap_err(),
            GraphError::InvalidEdge { u: 1, v: 3, n: 3 }
        );
        assert_eq!(
            Graph::build(0, false, [(0, 0)]).unwrap_err(),
            GraphError::InvalidEdge { u: 0, v: 0, n: 0 }
        );
    }

    #[test]
    fn undirected_queries() {
        let graph = Graph::build(4, false, [(0, 1, 2.0), (2, 1, 3.0), (1, 0, 7.0), (3, 3, 1.0)])
            .unwrap();

        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.has_edge(0, 1) && graph.has_edge(1, 0));
        assert!(graph.has_edge(1, 2) && graph.has_edge(2, 1));
        assert!(!graph.has_edge(0, 2));

        // first occurrence wins
        assert_eq!(graph.weight_of(1, 0), Some(2.0));
        assert_eq!(graph.weight_of(1, 2), Some(3.0));
        assert_eq!(graph.weight_of(0, 3), None);

        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(graph.degrees().collect_vec(), vec![1, 2, 1, 2]);
        assert_eq!(graph.in_degree_of(3), 2);
        assert_eq!(graph.out_degree_of(3), 2);
        assert!(graph.has_self_loop(3));

        assert_eq!(
            graph.edges().iter().map(|e| e.edge).collect_vec(),
            vec![Edge(0, 1), Edge(2, 1), Edge(3, 3)]
        );
        assert_eq!(graph.ordered_edges(true), vec![Edge(0, 1), Edge(1, 2), Edge(3, 3)]);
    }

    #[test]
    fn directed_queries() {
        let graph = Graph::build(3, true, [(0, 1), (1, 0), (1, 2), (2, 2)]).unwrap();

        assert_eq!(graph.number_of_edges(), 4);
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert!(graph.has_bidirected_edge(0, 1));

        assert_eq!(graph.out_degree_of(1), 2);
        assert_eq!(graph.in_degree_of(1), 1);
        assert_eq!(graph.degree_of(1), 3);
        assert_eq!(graph.in_neighbors_of(2).collect_vec(), vec![1, 2]);
        assert_eq!(graph.degree_of(2), 3);
        assert_eq!(graph.vertices_without_in_neighbors().count(), 0);
    }

    #[test]
    fn random_against_matrix() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for n in [5 as NumNodes, 20, 50] {
                let mut adj = vec![vec![false; n as usize]; n as usize];
                let edges = (0..3 * n)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec();

                for &Edge(u, v) in &edges {
                    adj[u as usize][v as usize] = true;
                    if !directed {
                        adj[v as usize][u as usize] = true;
                    }
                }

                let graph = Graph::build(n, directed, edges.iter()).unwrap();

                let mut m = 0;
                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(graph.has_edge(u, v), adj[u as usize][v as usize]);
                        m += (adj[u as usize][v as usize] && (directed || u <= v)) as NumEdges;
                    }

                    let mut nbs = graph.neighbors_of(u).collect_vec();
                    nbs.sort_unstable();
                    assert_eq!(
                        nbs,
                        (0..n).filter(|&v| adj[u as usize][v as usize]).collect_vec()
                    );
                }
                assert_eq!(graph.number_of_edges(), m);

                let degree_sum: NumNodes = graph.degrees().sum();
                assert_eq!(degree_sum, 2 * m);
            }
        }
    }

    #[test]
    fn graph_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph>();
    }
}
