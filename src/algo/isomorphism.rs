/*!
Graph isomorphism via backtracking.

Two graphs are compared by cheap invariants first (kind, order, size, sorted degree
signatures). Only if all of them agree, a backtracking search assigns images to the vertices
of the first graph in order of decreasing degree, pruning any partial assignment that
contradicts an adjacency between already assigned vertices.

The search is exponential in the worst case: no polynomial algorithm for graph isomorphism is
known. Callers that need bounded latency have to impose a deadline around the call.
*/

use std::cmp::Reverse;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// A bijection between the vertices of two graphs that preserves adjacency:
/// `(u, v)` is an edge of the first graph iff `(image_of(u), image_of(v))` is an edge of the second.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsomorphismMapping {
    mapping: Vec<Node>,
}

impl IsomorphismMapping {
    /// Returns the image of `u`
    /// ** Panics if `u >= n` **
    pub fn image_of(&self, u: Node) -> Node {
        self.mapping[u as usize]
    }

    /// Returns the images of all vertices
    pub fn as_slice(&self) -> &[Node] {
        &self.mapping
    }

    /// Returns the inverse bijection, i.e. `inverse[image_of(u)] = u`
    pub fn inverse(&self) -> IsomorphismMapping {
        let mut inverse = vec![INVALID_NODE; self.mapping.len()];
        for (u, &v) in self.mapping.iter().enumerate() {
            inverse[v as usize] = u as Node;
        }
        IsomorphismMapping { mapping: inverse }
    }

    /// Returns *true* if the mapping is a bijection between the vertices of `g1` and `g2`
    /// that maps edges onto edges and non-edges onto non-edges
    pub fn is_valid_for<G1, G2>(&self, g1: &G1, g2: &G2) -> bool
    where
        G1: AdjacencyTest + GraphEdgeOrder,
        G2: AdjacencyTest + GraphEdgeOrder,
    {
        let n = g1.number_of_nodes();
        if g2.number_of_nodes() != n
            || self.mapping.len() != n as usize
            || g1.number_of_edges() != g2.number_of_edges()
        {
            return false;
        }

        let mut images = NodeBitSet::new(n);
        if self.mapping.iter().any(|&v| v >= n || images.set_bit(v)) {
            return false;
        }

        g1.vertices().all(|u| {
            g1.vertices()
                .all(|v| g1.has_edge(u, v) == g2.has_edge(self.image_of(u), self.image_of(v)))
        })
    }

    /// Consumes the mapping and returns the images of all vertices
    pub fn into_vec(self) -> Vec<Node> {
        self.mapping
    }
}

/// Degree signature used to prune candidates: `(in-degree, out-degree, has self-loop)` for
/// directed graphs and `(degree, degree, has self-loop)` for undirected graphs
type Signature = (NumNodes, NumNodes, bool);

fn signature<G>(graph: &G, u: Node) -> Signature
where
    G: DirectedAdjacencyList + AdjacencyTest,
{
    (
        graph.in_degree_of(u),
        graph.out_degree_of(u),
        graph.has_self_loop(u),
    )
}

/// Backtracking isomorphism search between two graphs.
///
/// The search is deterministic: the vertices of the first graph are assigned in order of
/// decreasing degree (ties by index) and candidate images are tried in increasing order, so
/// the first consistent mapping in this order is returned.
pub struct IsomorphismMatcher<'a, G1, G2> {
    g1: &'a G1,
    g2: &'a G2,
    states_explored: u64,
}

impl<'a, G1, G2> IsomorphismMatcher<'a, G1, G2>
where
    G1: DirectedAdjacencyList + AdjacencyTest + GraphEdgeOrder,
    G2: DirectedAdjacencyList + AdjacencyTest + GraphEdgeOrder,
{
    /// Creates a matcher for the given pair of graphs
    pub fn new(g1: &'a G1, g2: &'a G2) -> Self {
        Self {
            g1,
            g2,
            states_explored: 0,
        }
    }

    /// Number of partial assignments the last call to [`IsomorphismMatcher::find`] extended
    pub fn states_explored(&self) -> u64 {
        self.states_explored
    }

    /// Searches for an isomorphism from the first to the second graph
    pub fn find(&mut self) -> Option<IsomorphismMapping> {
        self.states_explored = 0;

        if let Some(reason) = self.precheck_failure() {
            debug!(reason, "isomorphism rejected by invariants");
            return None;
        }

        let result = self.search();
        debug!(
            n = self.g1.number_of_nodes(),
            states = self.states_explored,
            found = result.is_some(),
            "isomorphism search finished"
        );

        result
    }

    fn precheck_failure(&self) -> Option<&'static str> {
        let (g1, g2) = (self.g1, self.g2);

        if g1.is_directed() != g2.is_directed() {
            return Some("graph kinds differ");
        }
        if g1.number_of_nodes() != g2.number_of_nodes() {
            return Some("number of vertices differs");
        }
        if g1.number_of_edges() != g2.number_of_edges() {
            return Some("number of edges differs");
        }

        let sig1 = g1.vertices().map(|u| signature(g1, u)).sorted().collect_vec();
        let sig2 = g2.vertices().map(|u| signature(g2, u)).sorted().collect_vec();
        if sig1 != sig2 {
            return Some("degree sequences differ");
        }

        None
    }

    /// Checks that mapping `u` onto `v` agrees with all assignments of `order[..depth]`
    fn is_consistent(&self, mapping: &[Node], assigned: &[Node], u: Node, v: Node) -> bool {
        assigned.iter().all(|&w| {
            let x = mapping[w as usize];
            self.g1.has_edge(u, w) == self.g2.has_edge(v, x)
                && self.g1.has_edge(w, u) == self.g2.has_edge(x, v)
        })
    }

    fn search(&mut self) -> Option<IsomorphismMapping> {
        let (g1, g2) = (self.g1, self.g2);
        let n = g1.number_of_nodes();

        let order = g1
            .vertices()
            .sorted_by_key(|&u| (Reverse(g1.degree_of(u)), u))
            .collect_vec();

        let candidates = order
            .iter()
            .map(|&u| {
                let sig = signature(g1, u);
                g2.vertices()
                    .filter(|&v| signature(g2, v) == sig)
                    .collect_vec()
            })
            .collect_vec();

        let mut mapping = vec![INVALID_NODE; n as usize];
        let mut used = NodeBitSet::new(n);

        // cursor[d]: next candidate index to try for `order[d]`
        let mut cursor = vec![0usize; n as usize + 1];
        let mut depth = 0;

        while depth < n as usize {
            let u = order[depth];

            let next = candidates[depth][cursor[depth]..]
                .iter()
                .position(|&v| {
                    !used.get_bit(v) && self.is_consistent(&mapping, &order[..depth], u, v)
                })
                .map(|offset| cursor[depth] + offset);

            match next {
                Some(i) => {
                    let v = candidates[depth][i];
                    mapping[u as usize] = v;
                    used.set_bit(v);
                    self.states_explored += 1;

                    cursor[depth] = i + 1;
                    depth += 1;
                    cursor[depth] = 0;
                }
                None => {
                    cursor[depth] = 0;
                    if depth == 0 {
                        return None;
                    }

                    depth -= 1;
                    let w = order[depth];
                    used.clear_bit(mapping[w as usize]);
                    mapping[w as usize] = INVALID_NODE;
                }
            }
        }

        Some(IsomorphismMapping { mapping })
    }
}

/// Returns an isomorphism from `g1` to `g2` if one exists, see [`IsomorphismMatcher`]
///
/// # Examples
/// ```
/// use graphcheck::{prelude::*, algo::*};
///
/// let g1 = Graph::build(3, true, [(0, 1), (1, 2)]).unwrap();
/// let g2 = Graph::build(3, true, [(2, 0), (1, 2)]).unwrap();
///
/// let mapping = are_isomorphic(&g1, &g2).unwrap();
/// assert_eq!(mapping.as_slice(), &[1, 2, 0]);
///
/// let g3 = Graph::build(3, true, [(0, 1), (2, 1)]).unwrap();
/// assert!(!is_isomorphic(&g1, &g3));
/// ```
pub fn are_isomorphic<G1, G2>(g1: &G1, g2: &G2) -> Option<IsomorphismMapping>
where
    G1: DirectedAdjacencyList + AdjacencyTest + GraphEdgeOrder,
    G2: DirectedAdjacencyList + AdjacencyTest + GraphEdgeOrder,
{
    IsomorphismMatcher::new(g1, g2).find()
}

/// Returns *true* if `g1` and `g2` are isomorphic
pub fn is_isomorphic<G1, G2>(g1: &G1, g2: &G2) -> bool
where
    G1: DirectedAdjacencyList + AdjacencyTest + GraphEdgeOrder,
    G2: DirectedAdjacencyList + AdjacencyTest + GraphEdgeOrder,
{
    are_isomorphic(g1, g2).is_some()
}
