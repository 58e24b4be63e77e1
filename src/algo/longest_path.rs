/*!
Single-source longest paths in directed acyclic graphs.

Vertices are processed in topological order and every edge `(u, v)` is relaxed via
`dist[v] = max(dist[v], dist[u] + w(u, v))`. Longest paths in graphs with cycles are NP-hard,
so cyclic inputs are rejected; contract them with [`Connectivity::condensation`] first
(see [`Condensation::longest_paths_from`]).
*/

use tracing::trace;

use super::*;

/// Longest distances and predecessors from a single start vertex.
///
/// Unreached vertices have distance `-∞` and no predecessor.
/// Among several longest paths to a vertex, the one whose last edge was relaxed first wins.
#[derive(Debug, Clone)]
pub struct LongestPaths {
    start: Node,
    dist: Vec<Weight>,
    pred: Vec<Option<OptionalNode>>,
    incoming: Vec<Weight>,
}

impl LongestPaths {
    /// Runs the solver, see [`LongestPath::longest_paths`]
    pub fn compute<G>(graph: &G, start: Node) -> Result<Self>
    where
        G: DirectedAdjacencyList + WeightedAdjacency,
    {
        if graph.is_undirected() {
            return Err(GraphError::NotDirected);
        }

        let n = graph.number_of_nodes();
        if start >= n {
            return Err(GraphError::InvalidVertex { vertex: start, n });
        }

        let order = graph.topological_order()?;

        let mut dist = vec![Weight::NEG_INFINITY; n as usize];
        let mut pred = vec![None; n as usize];
        let mut incoming = vec![0.0; n as usize];
        dist[start as usize] = 0.0;

        for u in order {
            let du = dist[u as usize];
            if du == Weight::NEG_INFINITY {
                continue;
            }

            for v in graph.out_neighbors_of(u) {
                let w = graph.weight_of(u, v).unwrap_or(DEFAULT_WEIGHT);
                if du + w > dist[v as usize] {
                    dist[v as usize] = du + w;
                    pred[v as usize] = OptionalNode::new(u);
                    incoming[v as usize] = w;
                }
            }
        }

        trace!(start, n, "computed longest paths");

        Ok(Self {
            start,
            dist,
            pred,
            incoming,
        })
    }

    /// The vertex all paths start at
    pub fn start(&self) -> Node {
        self.start
    }

    /// All distances, `-∞` for unreached vertices
    pub fn distances(&self) -> &[Weight] {
        &self.dist
    }

    /// Returns *true* if `v` is reachable from the start vertex
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.dist[v as usize] != Weight::NEG_INFINITY
    }

    /// Length of a longest path from the start to `v` or `None` if `v` is unreachable
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<Weight> {
        self.is_reachable(v).then(|| self.dist[v as usize])
    }

    /// Predecessor of `v` on a longest path; `None` for the start and unreachable vertices
    /// ** Panics if `v >= n` **
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.pred[v as usize].map(|p| p.get())
    }

    /// Vertices of a longest path from the start to `v` (both included), or `None` if
    /// `v` is unreachable
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while let Some(p) = self.predecessor_of(u) {
            path.push(p);
            u = p;
        }
        path.reverse();

        debug_assert_eq!(path.first(), Some(&self.start));
        Some(path)
    }

    /// A reachable vertex of maximum distance together with that distance.
    /// Ties are broken towards the smaller vertex.
    pub fn farthest(&self) -> (Node, Weight) {
        // the start is reachable, so the first strict improvement over `-∞` always happens
        let mut best = (self.start, Weight::NEG_INFINITY);
        for (v, &d) in self.dist.iter().enumerate() {
            if d > best.1 {
                best = (v as Node, d);
            }
        }
        best
    }

    /// The arborescence formed by all predecessor edges: a directed tree rooted at the start
    /// that contains a longest path to every reachable vertex. Edges keep their weights;
    /// unreachable vertices are isolated.
    pub fn arborescence(&self) -> Graph {
        let edges = self
            .pred
            .iter()
            .zip(&self.incoming)
            .enumerate()
            .filter_map(|(v, (p, &w))| p.map(|p| WeightedEdge::new(p.get(), v as Node, w)));

        Graph::derived(self.dist.len() as NumNodes, true, edges)
    }
}

/// Longest path queries on directed acyclic graphs
pub trait LongestPath: DirectedAdjacencyList + WeightedAdjacency + Sized {
    /// Computes longest paths from `start` to all vertices.
    ///
    /// Fails with
    /// - [`GraphError::NotDirected`] for undirected graphs,
    /// - [`GraphError::InvalidVertex`] if `start >= n`,
    /// - [`GraphError::CyclicGraph`] if the graph has a cycle.
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(4, true, [(0, 1, 1.0), (0, 2, 5.0), (1, 3, 1.0), (2, 3, 1.0)]).unwrap();
    /// let paths = g.longest_paths(0).unwrap();
    ///
    /// assert_eq!(paths.distance_to(3), Some(6.0));
    /// assert_eq!(paths.path_to(3), Some(vec![0, 2, 3]));
    /// ```
    fn longest_paths(&self, start: Node) -> Result<LongestPaths> {
        LongestPaths::compute(self, start)
    }
}

impl<G> LongestPath for G where G: DirectedAdjacencyList + WeightedAdjacency + Sized {}

impl Condensation {
    /// Longest paths in the condensation, starting at the component that contains vertex `u`
    /// of the original graph. Distances and predecessors refer to components.
    ///
    /// Fails with [`GraphError::InvalidVertex`] if `u` is not a vertex of the original graph.
    pub fn longest_paths_from(&self, u: Node) -> Result<LongestPaths> {
        let n = self.number_of_original_nodes();
        if u >= n {
            return Err(GraphError::InvalidVertex { vertex: u, n });
        }

        self.graph().longest_paths(self.component_of(u))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn weighted_diamond() {
        let graph = Graph::build(
            5,
            true,
            [(0, 1, 1.0), (0, 2, 5.0), (1, 3, 1.0), (2, 3, 1.0), (4, 0, 2.0)],
        )
        .unwrap();

        let paths = graph.longest_paths(0).unwrap();
        assert_eq!(paths.start(), 0);
        assert_eq!(paths.distance_to(0), Some(0.0));
        assert_eq!(paths.distance_to(1), Some(1.0));
        assert_eq!(paths.distance_to(3), Some(6.0));
        assert_eq!(paths.predecessor_of(3), Some(2));
        assert_eq!(paths.predecessor_of(0), None);
        assert_eq!(paths.path_to(3), Some(vec![0, 2, 3]));
        assert_eq!(paths.path_to(0), Some(vec![0]));
        assert_eq!(paths.farthest(), (3, 6.0));

        assert!(!paths.is_reachable(4));
        assert_eq!(paths.distance_to(4), None);
        assert_eq!(paths.distances()[4], Weight::NEG_INFINITY);
        assert_eq!(paths.path_to(4), None);
        assert_eq!(paths.predecessor_of(4), None);

        let tree = paths.arborescence();
        assert!(tree.is_directed());
        assert_eq!(
            tree.ordered_edges(false),
            vec![Edge(0, 1), Edge(0, 2), Edge(2, 3)]
        );
        assert_eq!(tree.weight_of(0, 2), Some(5.0));
        assert_eq!(tree.root_vertices(), vec![0, 4]);
    }

    #[test]
    fn ties_keep_first_predecessor() {
        let graph = Graph::build(4, true, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();

        let paths = graph.longest_paths(0).unwrap();
        assert_eq!(paths.distance_to(3), Some(2.0));
        assert_eq!(paths.predecessor_of(3), Some(1));
    }

    #[test]
    fn farthest_prefers_smaller_vertex() {
        let graph = Graph::build(3, true, [(2, 0, 0.0), (2, 1, 0.0)]).unwrap();

        let paths = graph.longest_paths(2).unwrap();
        assert_eq!(paths.farthest(), (0, 0.0));

        let single = Graph::build(3, true, Vec::<Edge>::new()).unwrap();
        assert_eq!(single.longest_paths(1).unwrap().farthest(), (1, 0.0));
    }

    #[test]
    fn errors() {
        let undirected = Graph::build(2, false, [(0, 1)]).unwrap();
        assert_eq!(
            undirected.longest_paths(0).unwrap_err(),
            GraphError::NotDirected
        );

        let graph = Graph::build(2, true, [(0, 1)]).unwrap();
        assert_eq!(
            graph.longest_paths(2).unwrap_err(),
            GraphError::InvalidVertex { vertex: 2, n: 2 }
        );

        let cyclic = Graph::build(3, true, [(0, 1), (1, 2), (2, 1)]).unwrap();
        assert_eq!(cyclic.longest_paths(0).unwrap_err(), GraphError::CyclicGraph);
    }

    #[test]
    fn via_condensation() {
        // {1, 2} form a cycle; 0 -> {1, 2} -> 3 -> 4 and 0 -> 4
        let graph = Graph::build(5, true, [(0, 1), (1, 2), (2, 1), (2, 3), (3, 4), (0, 4)]).unwrap();
        let cond = graph.condensation().unwrap();

        let paths = cond.longest_paths_from(0).unwrap();
        let target = cond.component_of(4);
        assert_eq!(paths.distance_to(target), Some(3.0));

        let path = paths.path_to(target).unwrap();
        assert_eq!(
            path.iter().map(|&c| cond.vertices_of(c).to_vec()).collect_vec(),
            vec![vec![0], vec![1, 2], vec![3], vec![4]]
        );

        assert_eq!(
            cond.longest_paths_from(5).unwrap_err(),
            GraphError::InvalidVertex { vertex: 5, n: 5 }
        );
    }

    fn brute_force_longest(graph: &Graph, u: Node, depth: NumNodes, best: &mut [Option<NumNodes>]) {
        let entry = &mut best[u as usize];
        *entry = Some(entry.map_or(depth, |d| d.max(depth)));

        for v in graph.neighbors_of(u) {
            brute_force_longest(graph, v, depth + 1, best);
        }
    }

    #[test]
    fn unit_weights_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(77);

        for i in 0..100 {
            let n = 2 + i % 7;
            let graph = Gnp::new()
                .nodes(n)
                .prob(0.4)
                .directed(true)
                .acyclic(true)
                .generate(rng);

            let mut best = vec![None; n as usize];
            brute_force_longest(&graph, 0, 0, &mut best);

            let paths = graph.longest_paths(0).unwrap();
            for v in graph.vertices() {
                assert_eq!(
                    paths.distance_to(v),
                    best[v as usize].map(|d| d as Weight)
                );

                if let Some(path) = paths.path_to(v) {
                    assert_eq!(path.len() as Weight, paths.distance_to(v).unwrap() + 1.0);
                    for (&a, &b) in path.iter().tuple_windows() {
                        assert!(graph.has_edge(a, b));
                    }
                }
            }

            let tree = paths.arborescence();
            let reachable = graph.vertices().filter(|&v| paths.is_reachable(v)).count();
            assert_eq!(tree.number_of_edges() as usize, reachable - 1);
        }
    }
}
