/*!
Connectivity of undirected graphs and strong connectivity of directed graphs.

Strongly connected components are computed with Kosaraju's algorithm on top of the traversal
primitives: a depth-first search over all vertices yields a finish order, and searches on the
[`Reversed`] view, started in decreasing finish order, peel off one component at a time.
This also lists the components in a topological order of the [`Condensation`].
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Connectivity queries, implemented for all adjacency structures.
pub trait Connectivity: Traversal + DirectedAdjacencyList + Sized {
    /// Returns *true* if a breadth-first search from vertex `0` reaches all vertices.
    /// A graph without vertices is connected.
    ///
    /// Fails with [`GraphError::NotUndirected`] for directed graphs.
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(3, false, [(0, 1), (2, 1)]).unwrap();
    /// assert_eq!(g.is_connected(), Ok(true));
    ///
    /// let g = Graph::build(3, false, [(0, 1)]).unwrap();
    /// assert_eq!(g.is_connected(), Ok(false));
    /// ```
    fn is_connected(&self) -> Result<bool> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        Ok(self.is_empty() || self.bfs_nodes(0).count() == self.len())
    }

    /// Returns an iterator over the connected components of an undirected graph.
    /// Each component is emitted in BFS order from its smallest vertex; components are
    /// ordered by their smallest vertex.
    ///
    /// Fails with [`GraphError::NotUndirected`] for directed graphs.
    fn connected_components(&self) -> Result<ConnectedComponents<'_, Self>> {
        self.connected_components_exclude_nodes(std::iter::empty())
    }

    /// Like [`Connectivity::connected_components`], but the given vertices are removed from the
    /// graph beforehand: they belong to no component and edges through them are not taken.
    fn connected_components_exclude_nodes<I>(
        &self,
        ignore: I,
    ) -> Result<ConnectedComponents<'_, Self>>
    where
        I: IntoIterator<Item = Node>,
    {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        Ok(ConnectedComponents::new(self, ignore))
    }

    /// Returns *true* if every vertex can reach every other vertex: breadth-first searches
    /// from vertex `0` in the graph and in its [`Reversed`] view must each reach all vertices.
    /// A graph without vertices is strongly connected.
    ///
    /// Fails with [`GraphError::NotDirected`] for undirected graphs.
    fn is_strongly_connected(&self) -> Result<bool> {
        if self.is_undirected() {
            return Err(GraphError::NotDirected);
        }

        if self.is_empty() {
            return Ok(true);
        }

        Ok(self.bfs_nodes(0).count() == self.len()
            && self.reversed().bfs_nodes(0).count() == self.len())
    }

    /// Returns the strongly connected components of a directed graph.
    ///
    /// Every vertex is contained in exactly one component. The vertices of each component are
    /// sorted increasingly; the components are listed in a topological order of the
    /// condensation, i.e. no edge leads from a later component to an earlier one.
    /// Runs in `O(n + m)`.
    ///
    /// Fails with [`GraphError::NotDirected`] for undirected graphs.
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(4, true, [(3, 2), (2, 3), (2, 0), (0, 1), (1, 0)]).unwrap();
    /// assert_eq!(
    ///     g.strongly_connected_components(),
    ///     Ok(vec![vec![2, 3], vec![0, 1]])
    /// );
    /// ```
    fn strongly_connected_components(&self) -> Result<Vec<Vec<Node>>> {
        if self.is_undirected() {
            return Err(GraphError::NotDirected);
        }

        let finish = self.finish_order();
        let reversed = self.reversed();
        let mut components = Vec::new();

        if let Some(&last) = finish.last() {
            let mut search = StackSearch::new(&reversed, last);
            components.push(search.by_ref().collect_vec());

            for &u in finish.iter().rev() {
                if search.try_restart_at(u) {
                    components.push(search.by_ref().collect_vec());
                }
            }
        }

        for comp in &mut components {
            comp.sort_unstable();
        }

        debug!(
            n = self.number_of_nodes(),
            components = components.len(),
            "computed strongly connected components"
        );

        Ok(components)
    }

    /// Contracts every strongly connected component into a single vertex.
    /// The result is always acyclic.
    ///
    /// Fails with [`GraphError::NotDirected`] for undirected graphs.
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(3, true, [(0, 1), (1, 0), (1, 2)]).unwrap();
    /// let cond = g.condensation().unwrap();
    ///
    /// assert_eq!(cond.components(), &[vec![0, 1], vec![2]]);
    /// assert_eq!(cond.graph().ordered_edges(false), vec![Edge(0, 1)]);
    /// ```
    fn condensation(&self) -> Result<Condensation> {
        let components = self.strongly_connected_components()?;

        let mut component_of = vec![INVALID_NODE; self.len()];
        for (i, comp) in components.iter().enumerate() {
            for &u in comp {
                component_of[u as usize] = i as Node;
            }
        }

        let edges = self
            .vertices()
            .flat_map(|u| self.out_neighbors_of(u).map(move |v| (u, v)))
            .map(|(u, v)| Edge(component_of[u as usize], component_of[v as usize]))
            .filter(|e| !e.is_loop())
            .map(WeightedEdge::from)
            .collect_vec();

        let graph = Graph::derived(components.len() as NumNodes, true, edges);
        debug_assert!(graph.is_acyclic());

        Ok(Condensation {
            graph,
            components,
            component_of,
        })
    }

    /// Returns all vertices without incoming edges in increasing order.
    /// For undirected graphs these are the isolated vertices.
    fn root_vertices(&self) -> Vec<Node> {
        self.vertices_without_in_neighbors().collect()
    }
}

impl<G> Connectivity for G where G: DirectedAdjacencyList + Sized {}

/// Iterator over the connected components of an undirected graph.
///
/// Returned by [`Connectivity::connected_components`].
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    fn new<I>(graph: &'a G, ignore: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut excluded = graph.vertex_bitset_unset();
        excluded.set_bits(ignore);

        let bfs = graph
            .vertices()
            .find(|&u| !excluded.get_bit(u))
            .map(|start| BFS::new(graph, start).with_nodes_excluded(excluded.iter_set_bits()));

        Self { bfs }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

/// The condensation of a directed graph: every strongly connected component is contracted
/// into a single vertex, and component `A` has an edge to component `B != A` iff some edge of
/// the original graph leads from `A` to `B`.
///
/// Components are numbered in a topological order of the condensation, so every edge `(a, b)`
/// of [`Condensation::graph`] satisfies `a < b`.
#[derive(Debug, Clone)]
pub struct Condensation {
    graph: Graph,
    components: Vec<Vec<Node>>,
    component_of: Vec<Node>,
}

impl Condensation {
    /// The directed acyclic graph on the components
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The vertices of every component, sorted increasingly
    pub fn components(&self) -> &[Vec<Node>] {
        &self.components
    }

    /// Number of strongly connected components
    pub fn number_of_components(&self) -> NumNodes {
        self.components.len() as NumNodes
    }

    /// Number of vertices of the original graph
    pub fn number_of_original_nodes(&self) -> NumNodes {
        self.component_of.len() as NumNodes
    }

    /// Returns the component containing vertex `u` of the original graph
    /// ** Panics if `u >= n` **
    pub fn component_of(&self, u: Node) -> Node {
        self.component_of[u as usize]
    }

    /// Returns the vertices of component `c`
    /// ** Panics if `c` is not a component **
    pub fn vertices_of(&self, c: Node) -> &[Node] {
        &self.components[c as usize]
    }

    /// Consumes the condensation and returns the graph on the components
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}
