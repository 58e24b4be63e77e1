/*!
Eulerian graphs: closed walks that traverse every edge exactly once.

A graph is Eulerian iff every vertex has balanced degree (even degree if undirected,
`in == out` if directed) and all vertices with at least one incident edge lie in a single
(strongly) connected component. Isolated vertices are ignored. A graph without edges is
Eulerian; its circuit is empty.

Circuits are constructed with Hierholzer's algorithm in `O(n + m)`.
*/

use tracing::debug;

use super::*;

/// Eulerian tests and circuits, implemented for all adjacency structures.
pub trait Eulerian: DirectedAdjacencyList + WeightedAdjacency + Sized {
    /// Returns *true* if the graph has a closed walk using every edge exactly once.
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let square = Graph::build(5, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// assert!(square.is_eulerian());
    ///
    /// let path = Graph::build(3, false, [(0, 1), (1, 2)]).unwrap();
    /// assert!(!path.is_eulerian());
    /// ```
    fn is_eulerian(&self) -> bool {
        if let Some(reason) = non_eulerian_reason(self) {
            debug!(reason, "graph is not Eulerian");
            return false;
        }

        true
    }

    /// Returns an Eulerian circuit as a closed sequence of vertices (first equals last) that
    /// traverses every edge exactly once, starting at the smallest non-isolated vertex.
    /// Returns an empty sequence if the graph has no edges and `None` if it is not Eulerian.
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(3, true, [(0, 1), (1, 2), (2, 0)]).unwrap();
    /// assert_eq!(g.find_eulerian_circuit(), Some(vec![0, 1, 2, 0]));
    /// ```
    fn find_eulerian_circuit(&self) -> Option<Vec<Node>> {
        if !self.is_eulerian() {
            return None;
        }

        Some(hierholzer(self))
    }
}

impl<G> Eulerian for G where G: DirectedAdjacencyList + WeightedAdjacency + Sized {}

fn non_eulerian_reason<G>(graph: &G) -> Option<&'static str>
where
    G: DirectedAdjacencyList,
{
    if graph.is_directed() {
        if graph
            .vertices()
            .any(|u| graph.in_degree_of(u) != graph.out_degree_of(u))
        {
            return Some("in-degree differs from out-degree");
        }
    } else if graph.degrees().any(|d| d % 2 == 1) {
        return Some("vertex of odd degree");
    }

    let start = graph.vertices_with_neighbors().next()?;
    let active = graph.number_of_nodes_with_neighbors() as usize;

    // isolated vertices are unreachable from `start` and thus never counted
    let connected = graph.bfs_nodes(start).count() == active
        && (graph.is_undirected() || graph.reversed().bfs_nodes(start).count() == active);

    if !connected {
        return Some("edges span more than one component");
    }

    None
}

/// Hierholzer's algorithm; assumes the graph is Eulerian
fn hierholzer<G>(graph: &G) -> Vec<Node>
where
    G: DirectedAdjacencyList + WeightedAdjacency,
{
    let m = graph.number_of_edges() as usize;
    let Some(start) = graph.vertices_with_neighbors().next() else {
        return Vec::new();
    };

    // incident edges with their indices, so that an undirected edge is used only once
    let mut incident: Vec<Vec<(Node, usize)>> = vec![Vec::new(); graph.len()];
    for (i, e) in graph.weighted_edges().enumerate() {
        let Edge(u, v) = e.edge;
        incident[u as usize].push((v, i));
        if graph.is_undirected() && u != v {
            incident[v as usize].push((u, i));
        }
    }

    let mut used = vec![false; m];
    let mut next_edge = vec![0usize; graph.len()];
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(m + 1);

    while let Some(&u) = stack.last() {
        let edges = &incident[u as usize];
        let pos = &mut next_edge[u as usize];
        while *pos < edges.len() && used[edges[*pos].1] {
            *pos += 1;
        }

        if let Some(&(v, i)) = edges.get(*pos) {
            used[i] = true;
            stack.push(v);
        } else {
            circuit.push(u);
            stack.pop();
        }
    }

    circuit.reverse();
    debug_assert_eq!(circuit.len(), m + 1);

    circuit
}
