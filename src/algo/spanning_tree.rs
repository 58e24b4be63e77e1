/*!
Minimum and maximum spanning trees of connected undirected graphs via Kruskal's algorithm.

Edges are sorted stably by weight, so among edges of equal weight the one inserted into the
graph first is preferred. This makes the returned tree deterministic even if several optimal
trees exist. Disconnected graphs are rejected rather than answered with a spanning forest.
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Whether the total weight of the spanning tree is minimized or maximized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Objective {
    #[default]
    Minimize,
    Maximize,
}

/// Configurable Kruskal's algorithm.
///
/// # Examples
/// ```
/// use graphcheck::{prelude::*, algo::*};
///
/// let g = Graph::build(3, false, [(0, 1, 1.0), (1, 2, 5.0), (0, 2, 2.0)]).unwrap();
///
/// let tree = Kruskal::new(Objective::Maximize).run(&g).unwrap();
/// assert_eq!(tree.total_weight(), 7.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal {
    objective: Objective,
}

impl Kruskal {
    /// Creates the algorithm for a given objective
    pub fn new(objective: Objective) -> Self {
        Self { objective }
    }

    /// Updates the objective
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = objective;
    }

    /// Updates the objective
    pub fn objective(mut self, objective: Objective) -> Self {
        self.set_objective(objective);
        self
    }

    /// Computes an optimal spanning tree of `graph`.
    ///
    /// Fails with [`GraphError::NotUndirected`] for directed graphs and with
    /// [`GraphError::Disconnected`] if the graph has more than one connected component.
    /// Self-loops never enter the tree. A graph without vertices has an empty spanning tree.
    pub fn run<G>(&self, graph: &G) -> Result<SpanningTree>
    where
        G: AdjacencyList + WeightedAdjacency,
    {
        if graph.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        let n = graph.number_of_nodes();
        let mut candidates = graph
            .weighted_edges()
            .filter(|e| !e.edge.is_loop())
            .collect_vec();

        // `sort_by` is stable, keeping equal-weight edges in insertion order
        match self.objective {
            Objective::Minimize => candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight)),
            Objective::Maximize => candidates.sort_by(|a, b| b.weight.total_cmp(&a.weight)),
        }

        let mut uf = UnionFind::new(n);
        let mut edges = Vec::with_capacity(n.saturating_sub(1) as usize);
        for e in candidates {
            if uf.num_components() <= 1 {
                break;
            }
            if uf.union(e.source(), e.target()) {
                edges.push(e);
            }
        }

        if uf.num_components() > 1 {
            debug!(
                components = uf.num_components(),
                "no spanning tree in disconnected graph"
            );
            return Err(GraphError::Disconnected);
        }

        let tree = SpanningTree::new(n, edges);
        debug!(
            objective = ?self.objective,
            weight = tree.total_weight(),
            "computed spanning tree"
        );

        Ok(tree)
    }
}

/// Edges of a spanning tree together with their total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    n: NumNodes,
    edges: Vec<WeightedEdge>,
    total_weight: Weight,
}

impl SpanningTree {
    fn new(n: NumNodes, edges: Vec<WeightedEdge>) -> Self {
        debug_assert_eq!(edges.len(), n.saturating_sub(1) as usize);
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            n,
            edges,
            total_weight,
        }
    }

    /// Tree edges in the order they were selected
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Sum of the weights of all tree edges
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Number of tree edges, i.e. `n - 1` for `n > 0`
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Materializes the tree as an undirected graph on the original vertices
    pub fn into_graph(self) -> Graph {
        Graph::derived(self.n, false, self.edges)
    }
}

/// Spanning tree shortcuts with the default configuration of [`Kruskal`]
pub trait SpanningTrees: AdjacencyList + WeightedAdjacency + Sized {
    /// Spanning tree of minimum total weight, see [`Kruskal::run`]
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(4, false, [(0, 1, 2.0), (1, 2, 3.0), (2, 3, 1.0), (0, 3, 4.0)]).unwrap();
    ///
    /// let tree = g.minimum_spanning_tree().unwrap();
    /// assert_eq!(tree.number_of_edges(), 3);
    /// assert_eq!(tree.total_weight(), 6.0);
    /// ```
    fn minimum_spanning_tree(&self) -> Result<SpanningTree> {
        Kruskal::new(Objective::Minimize).run(self)
    }

    /// Spanning tree of maximum total weight, see [`Kruskal::run`]
    fn maximum_spanning_tree(&self) -> Result<SpanningTree> {
        Kruskal::new(Objective::Maximize).run(self)
    }
}

impl<G> SpanningTrees for G where G: AdjacencyList + WeightedAdjacency + Sized {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    fn scenario() -> Graph {
        Graph::build(
            4,
            false,
            [(0, 1, 2.0), (1, 2, 3.0), (2, 3, 1.0), (0, 3, 4.0)],
        )
        .unwrap()
    }

    #[test]
    fn minimum_scenario() {
        let tree = scenario().minimum_spanning_tree().unwrap();
        assert_eq!(
            tree.edges(),
            &[
                WeightedEdge::new(2, 3, 1.0),
                WeightedEdge::new(0, 1, 2.0),
                WeightedEdge::new(1, 2, 3.0)
            ]
        );
        assert_eq!(tree.total_weight(), 6.0);
    }

    #[test]
    fn maximum_scenario() {
        let tree = scenario().maximum_spanning_tree().unwrap();
        assert_eq!(
            tree.edges(),
            &[
                WeightedEdge::new(0, 3, 4.0),
                WeightedEdge::new(1, 2, 3.0),
                WeightedEdge::new(0, 1, 2.0)
            ]
        );
        assert_eq!(tree.total_weight(), 9.0);

        let graph = tree.into_graph();
        assert!(graph.is_undirected());
        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.is_connected(), Ok(true));
        assert_eq!(graph.weight_of(3, 0), Some(4.0));
    }

    #[test]
    fn ties_by_insertion_order() {
        let graph = Graph::build(3, false, [(1, 2), (0, 1), (0, 2), (2, 2)]).unwrap();

        for objective in [Objective::Minimize, Objective::Maximize] {
            let tree = Kruskal::new(objective).run(&graph).unwrap();
            assert_eq!(
                tree.edges().iter().map(|e| e.edge).collect_vec(),
                vec![Edge(1, 2), Edge(0, 1)]
            );
        }
    }

    #[test]
    fn errors_and_trivial() {
        let directed = Graph::build(2, true, [(0, 1)]).unwrap();
        assert_eq!(
            directed.minimum_spanning_tree(),
            Err(GraphError::NotUndirected)
        );

        let disconnected = Graph::build(4, false, [(0, 1), (2, 3)]).unwrap();
        assert_eq!(
            disconnected.maximum_spanning_tree(),
            Err(GraphError::Disconnected)
        );

        let empty = Graph::build(0, false, Vec::<Edge>::new()).unwrap();
        let tree = empty.minimum_spanning_tree().unwrap();
        assert_eq!(tree.number_of_edges(), 0);
        assert_eq!(tree.total_weight(), 0.0);

        let single = Graph::build(1, false, [(0, 0, 5.0)]).unwrap();
        assert_eq!(single.minimum_spanning_tree().unwrap().number_of_edges(), 0);
    }

    #[test]
    fn bounds_against_all_spanning_trees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        let mut tested = 0;
        while tested < 30 {
            let n = 6;
            let graph = Gnp::new()
                .nodes(n)
                .prob(0.5)
                .weights(1.0, 10.0)
                .generate(rng);

            if graph.is_connected() != Ok(true) {
                assert_eq!(
                    graph.minimum_spanning_tree(),
                    Err(GraphError::Disconnected)
                );
                continue;
            }
            tested += 1;

            let min = graph.minimum_spanning_tree().unwrap();
            let max = graph.maximum_spanning_tree().unwrap();
            assert_eq!(min.number_of_edges(), n - 1);
            assert_eq!(max.number_of_edges(), n - 1);

            let mut trees = 0;
            for subset in graph.edges().iter().combinations(n as usize - 1) {
                let mut uf = UnionFind::new(n);
                if !subset.iter().all(|e| uf.union(e.source(), e.target())) {
                    continue;
                }
                trees += 1;

                let weight: Weight = subset.iter().map(|e| e.weight).sum();
                assert!(min.total_weight() <= weight + 1e-9);
                assert!(weight <= max.total_weight() + 1e-9);
            }
            assert!(trees > 0);
        }
    }
}
