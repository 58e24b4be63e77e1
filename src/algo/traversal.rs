/*!
Graph traversal primitives.

This module provides:
- A generic, lazy traversal iterator ([`TraversalSearch`]) parameterized by its frontier
  (queue or stack) and by the item it yields (plain vertex, `(predecessor, vertex)` pair, or
  vertex with its BFS distance).
- An iterative depth-first search ([`DepthFirstSearch`]) yielding discovery and finish events.
- Topological ordering via Kahn's algorithm ([`TopoSearch`]).
- The [`Traversal`] trait that exposes all of the above as methods on any adjacency structure.

Higher-level algorithms of this crate (connectivity, SCCs, longest paths, Eulerian checks)
express reachability and ordering in terms of these primitives.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a [`TraversalSearch`].
///
/// An item always knows the vertex it represents and, depending on the implementation,
/// how it was reached. Implementations:
/// - [`Node`]: only the vertex,
/// - [`PredecessorOfNode`]: `(predecessor, vertex)`,
/// - [`NodeAtDistance`]: the vertex and its hop-distance from the start.
pub trait SequencedItem: Clone + Copy {
    /// Item for a vertex at which a search starts
    fn root(u: Node) -> Self;

    /// Item for vertex `v` discovered through the edge from `self.item()` to `v`
    fn successor(&self, v: Node) -> Self;

    /// Returns the vertex represented by this item
    fn item(&self) -> Node;

    /// Returns the vertex through which this item was discovered, if tracked
    fn predecessor(&self) -> Option<Node>;

    /// Returns `(predecessor, item)`
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn root(u: Node) -> Self {
        u
    }
    fn successor(&self, v: Node) -> Self {
        v
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; a root is encoded as its own predecessor.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn root(u: Node) -> Self {
        (u, u)
    }
    fn successor(&self, v: Node) -> Self {
        (self.1, v)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// A vertex together with its distance (number of edges) from the start of the search.
/// In a breadth-first search this is the length of a shortest path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeAtDistance {
    pub node: Node,
    pub distance: NumNodes,
}

impl SequencedItem for NodeAtDistance {
    fn root(u: Node) -> Self {
        Self {
            node: u,
            distance: 0,
        }
    }
    fn successor(&self, v: Node) -> Self {
        Self {
            node: v,
            distance: self.distance + 1,
        }
    }
    fn item(&self) -> Node {
        self.node
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

impl From<NodeAtDistance> for (Node, NumNodes) {
    fn from(value: NodeAtDistance) -> Self {
        (value.node, value.distance)
    }
}

/// The frontier of a [`TraversalSearch`].
///
/// - [`VecDeque`]: queue semantics, i.e. breadth-first
/// - [`Vec`]: stack semantics, i.e. the order is irrelevant and only reachability matters
pub trait NodeSequencer<T> {
    /// Creates a new sequencer containing a single item
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier
    fn push(&mut self, item: T);

    /// Removes and returns the next item of the frontier
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from([u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator.
///
/// Every vertex is yielded at most once: it is marked visited when it enters the frontier.
/// Neighbors are expanded in the order given by [`AdjacencyList::neighbors_of`].
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    // all vertices below are visited
    restart_cursor: Node,
    _item: PhantomData<I>,
}

/// Breadth-first search yielding vertices
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// Breadth-first search yielding `(predecessor, vertex)` pairs
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// Breadth-first search yielding vertices with their distance from the start
pub type BFSWithDistance<'a, G> = TraversalSearch<'a, G, VecDeque<NodeAtDistance>, NodeAtDistance>;

/// Search with a stack as frontier; use it when only the set of reached vertices matters
pub type StackSearch<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::root(start)),
            restart_cursor: 0,
            _item: PhantomData,
        }
    }

    /// Returns the set of vertices that have been reached (or excluded) so far
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Returns *true* if all vertices have been reached (or excluded)
    pub fn did_visit_all(&self) -> bool {
        self.visited.are_all_set()
    }

    /// Tries to restart the search at the smallest yet unvisited vertex and returns
    /// *true* iff successful. Requires that the search came to a halt earlier,
    /// i.e. `self.next()` returned `None`.
    /// Over the lifetime of the search, all calls together take `O(n)` time.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        match next_unvisited(&self.visited, &mut self.restart_cursor) {
            None => false,
            Some(u) => {
                self.visited.set_bit(u);
                self.sequencer.push(I::root(u));
                true
            }
        }
    }

    /// Restarts a halted search at `u` if it has not been visited yet and returns
    /// *true* iff successful. Items yielded afterwards are reachable from `u` without passing
    /// through previously visited vertices.
    /// ** Panics if `u >= n` **
    pub fn try_restart_at(&mut self, u: Node) -> bool {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        if self.visited.set_bit(u) {
            return false;
        }

        self.sequencer.push(I::root(u));
        true
    }

    /// Excludes a vertex from the search. It is treated as if it was already visited,
    /// i.e. no edges to or from it will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the vertex is already in the frontier.
    /// Call it directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_bit(u);
    }

    /// Builder variant of [`TraversalSearch::exclude_node`]
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Excludes multiple vertices, see [`TraversalSearch::exclude_node`]
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder variant of [`TraversalSearch::exclude_nodes`]
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }
}

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(popped.item()) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(popped.successor(v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.sequencer.cardinality() + self.graph.len() - self.visited.cardinality() as usize),
        )
    }
}

/// Advances `cursor` to the smallest unvisited vertex and returns it.
/// Visited vertices never become unvisited again, so the cursor only moves forward.
fn next_unvisited(visited: &NodeBitSet, cursor: &mut Node) -> Option<Node> {
    while *cursor < visited.number_of_bits() {
        if !visited.get_bit(*cursor) {
            return Some(*cursor);
        }
        *cursor += 1;
    }
    None
}

/// Event reported by a [`DepthFirstSearch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DfsEvent {
    /// The vertex is entered for the first time
    Discover(Node),
    /// All vertices reachable from the vertex through unvisited vertices are done
    Finish(Node),
}

/// Iterative depth-first search.
///
/// Yields a [`DfsEvent::Discover`] when a vertex is entered and a [`DfsEvent::Finish`]
/// once all of its neighbors have been explored. Neighbors are explored in the order of
/// [`AdjacencyList::neighbors_of`]. The recursion is replaced by an explicit stack of
/// neighbor iterators, so arbitrarily deep graphs do not overflow the call stack.
pub struct DepthFirstSearch<'a, G>
where
    G: AdjacencyList + 'a,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<(Node, G::NeighborIter<'a>)>,
    pending_root: Option<OptionalNode>,
    // all vertices below are visited
    restart_cursor: Node,
}

impl<'a, G> DepthFirstSearch<'a, G>
where
    G: AdjacencyList + 'a,
{
    /// Creates a depth-first search starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            stack: Vec::new(),
            pending_root: OptionalNode::new(start),
            restart_cursor: 0,
        }
    }

    /// Returns the set of vertices that have been discovered so far
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Tries to restart the search at the smallest yet undiscovered vertex and returns
    /// *true* iff successful. Requires that the search came to a halt earlier.
    /// Over the lifetime of the search, all calls together take `O(n)` time.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.stack.is_empty() && self.pending_root.is_none());
        match next_unvisited(&self.visited, &mut self.restart_cursor) {
            None => false,
            Some(u) => self.try_restart_at(u),
        }
    }

    /// Restarts a halted search at `u` if it has not been discovered yet and returns
    /// *true* iff successful.
    /// ** Panics if `u >= n` **
    pub fn try_restart_at(&mut self, u: Node) -> bool {
        debug_assert!(self.stack.is_empty() && self.pending_root.is_none());
        if self.visited.set_bit(u) {
            return false;
        }

        self.pending_root = OptionalNode::new(u);
        true
    }
}

impl<'a, G> Iterator for DepthFirstSearch<'a, G>
where
    G: AdjacencyList + 'a,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        if let Some(root) = self.pending_root.take() {
            let root = root.get();
            self.stack.push((root, graph.neighbors_of(root)));
            return Some(DfsEvent::Discover(root));
        }

        let (u, neighbors) = self.stack.last_mut()?;
        let u = *u;
        let visited = &mut self.visited;

        match neighbors.find(|&v| !visited.get_bit(v)) {
            Some(v) => {
                visited.set_bit(v);
                self.stack.push((v, graph.neighbors_of(v)));
                Some(DfsEvent::Discover(v))
            }
            None => {
                self.stack.pop();
                Some(DfsEvent::Finish(u))
            }
        }
    }
}

/// Discovery and finish sequences of a depth-first search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthFirstOrder {
    /// Vertices in the order they were entered (preorder)
    pub discovery: Vec<Node>,
    /// Vertices in the order they were completed (postorder)
    pub finish: Vec<Node>,
}

impl FromIterator<DfsEvent> for DepthFirstOrder {
    fn from_iter<T: IntoIterator<Item = DfsEvent>>(iter: T) -> Self {
        let mut order = Self::default();
        for event in iter {
            match event {
                DfsEvent::Discover(u) => order.discovery.push(u),
                DfsEvent::Finish(u) => order.finish.push(u),
            }
        }
        order
    }
}

/// Iterator over the vertices of a directed graph in topological order.
///
/// Uses Kahn's algorithm: vertices without remaining in-edges are kept in a queue, initially
/// in increasing order; emitting a vertex removes its out-edges. If the graph has a cycle, the
/// iterator stops before all vertices were emitted.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let in_degs: Vec<NumNodes> = graph.in_degrees().collect();
        let queue = graph
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.out_neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

/// Provides traversal methods (BFS, DFS, topological order) on adjacency structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator over the vertices reachable from `start` in breadth-first order,
    /// each paired with its distance (number of edges) from `start`.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(4, false, [(0, 1), (1, 2), (0, 3)]).unwrap();
    ///
    /// let order: Vec<(Node, NumNodes)> = g.bfs(0).map(Into::into).collect();
    /// assert_eq!(order, vec![(0, 0), (1, 1), (3, 1), (2, 2)]);
    /// ```
    fn bfs(&self, start: Node) -> BFSWithDistance<'_, Self> {
        BFSWithDistance::new(self, start)
    }

    /// Returns an iterator over the vertices reachable from `start` in breadth-first order.
    /// ** Panics if `start >= n` **
    fn bfs_nodes(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally yields the
    /// predecessor of each vertex in the search tree.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(2, false, [(0, 1)]).unwrap();
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().predecessor_with_item(), (None, 0));
    /// assert_eq!(it.next().unwrap().predecessor_with_item(), (Some(0), 1));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns an iterator over the discovery and finish events of a depth-first search
    /// from `start`. Call [`DepthFirstSearch::try_restart_at_unvisited`] to continue at
    /// vertices not reachable from `start`.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DepthFirstSearch<'_, Self> {
        DepthFirstSearch::new(self, start)
    }

    /// Collects the discovery and finish sequences of a depth-first search from `start`.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(4, true, [(0, 1), (1, 2), (0, 3)]).unwrap();
    ///
    /// let order = g.depth_first_order(0);
    /// assert_eq!(order.discovery, vec![0, 1, 2, 3]);
    /// assert_eq!(order.finish, vec![2, 1, 3, 0]);
    /// ```
    fn depth_first_order(&self, start: Node) -> DepthFirstOrder {
        self.dfs(start).collect()
    }

    /// Returns the finish sequence of a depth-first search that covers all vertices,
    /// starting at vertex `0` and restarting at the smallest undiscovered vertex.
    fn finish_order(&self) -> Vec<Node> {
        let mut finish = Vec::with_capacity(self.len());
        if self.is_empty() {
            return finish;
        }

        let mut dfs = self.dfs(0);
        for u in self.vertices() {
            if u > 0 && !dfs.try_restart_at(u) {
                continue;
            }

            finish.extend(dfs.by_ref().filter_map(|event| match event {
                DfsEvent::Finish(u) => Some(u),
                DfsEvent::Discover(_) => None,
            }));
        }

        finish
    }

    /// Returns an iterator yielding vertices in topological order.
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        TopoSearch::new(self)
    }

    /// Returns all vertices in a topological order, i.e. every edge `(u, v)` has `u` before `v`.
    ///
    /// Fails with [`GraphError::NotDirected`] for undirected graphs and with
    /// [`GraphError::CyclicGraph`] if the graph contains a cycle (including self-loops).
    ///
    /// # Examples
    /// ```
    /// use graphcheck::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(3, true, [(2, 0), (0, 1)]).unwrap();
    /// assert_eq!(g.topological_order(), Ok(vec![2, 0, 1]));
    ///
    /// let g = Graph::build(2, true, [(0, 1), (1, 0)]).unwrap();
    /// assert_eq!(g.topological_order(), Err(GraphError::CyclicGraph));
    /// ```
    fn topological_order(&self) -> Result<Vec<Node>>
    where
        Self: DirectedAdjacencyList,
    {
        if !self.is_directed() {
            return Err(GraphError::NotDirected);
        }

        let order: Vec<Node> = self.topo_search().collect();
        if order.len() == self.len() {
            Ok(order)
        } else {
            Err(GraphError::CyclicGraph)
        }
    }

    /// Returns *true* if the graph is directed and has no cycle.
    /// Always *false* for undirected graphs.
    fn is_acyclic(&self) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        self.topological_order().is_ok()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::gens::*;

    //  / 2 --- \
    // 1         4 - 3
    //  \ 0 - 5 /
    fn diamond() -> Graph {
        Graph::build(6, false, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]).unwrap()
    }

    #[test]
    fn bfs_order() {
        let graph = diamond();

        let order = graph.bfs(1).map(<(Node, NumNodes)>::from).collect_vec();
        assert_eq!(order, vec![(1, 0), (2, 1), (0, 1), (4, 2), (5, 2), (3, 3)]);

        assert_eq!(graph.bfs_nodes(5).collect_vec(), vec![5, 0, 4, 1, 3, 2]);
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = diamond();

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn bfs_exclusion_and_restart() {
        let graph = Graph::build(5, false, [(0, 1), (1, 2), (3, 4)]).unwrap();

        let mut bfs = graph.bfs_nodes(0).with_node_excluded(1);
        assert_eq!(bfs.by_ref().collect_vec(), vec![0]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![2]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![3, 4]);
        assert!(!bfs.try_restart_at_unvisited());
        assert!(bfs.did_visit_all());
    }

    #[test]
    fn bfs_distances_are_shortest() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for _ in 0..20 {
            let graph = Gnp::new().nodes(30).prob(0.08).directed(true).generate(rng);

            // Bellman-Ford style reference with unit weights
            let mut dist = vec![NumNodes::MAX; 30];
            dist[0] = 0;
            for _ in 0..30 {
                for &WeightedEdge { edge: Edge(u, v), .. } in graph.edges() {
                    if dist[u as usize] != NumNodes::MAX {
                        dist[v as usize] = dist[v as usize].min(dist[u as usize] + 1);
                    }
                }
            }

            let mut reached = 0;
            for NodeAtDistance { node, distance } in graph.bfs(0) {
                assert_eq!(dist[node as usize], distance);
                reached += 1;
            }
            assert_eq!(reached, dist.iter().filter(|&&d| d != NumNodes::MAX).count());
        }
    }

    #[test]
    fn dfs_events() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = Graph::build(6, false, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]).unwrap();

        let events = graph.dfs(1).collect_vec();
        use DfsEvent::*;
        assert_eq!(
            events,
            vec![
                Discover(1),
                Discover(2),
                Finish(2),
                Discover(0),
                Discover(5),
                Discover(4),
                Discover(3),
                Finish(3),
                Finish(4),
                Finish(5),
                Finish(0),
                Finish(1)
            ]
        );

        let order = graph.depth_first_order(5);
        assert_eq!(order.discovery, vec![5, 0, 1, 2, 4, 3]);
        assert_eq!(order.finish, vec![2, 1, 0, 3, 4, 5]);
    }

    #[test]
    fn dfs_restart_covers_all() {
        let graph = Graph::build(5, true, [(1, 0), (3, 2), (2, 3)]).unwrap();

        assert_eq!(graph.finish_order(), vec![0, 1, 3, 2, 4]);
        assert!(Graph::build(0, true, Vec::<Edge>::new()).unwrap().finish_order().is_empty());
    }

    #[test]
    fn dfs_restart_at() {
        let graph = Graph::build(4, true, [(0, 1), (2, 3)]).unwrap();

        let mut dfs = graph.dfs(0);
        assert_eq!(dfs.by_ref().count(), 4);
        assert!(!dfs.try_restart_at(1));
        assert!(dfs.try_restart_at(3));
        assert_eq!(
            dfs.by_ref().collect_vec(),
            vec![DfsEvent::Discover(3), DfsEvent::Finish(3)]
        );
        assert!(dfs.try_restart_at_unvisited());
        assert_eq!(dfs.by_ref().count(), 2);
        assert!(!dfs.try_restart_at_unvisited());
        assert!(!dfs.try_restart_at(2));
    }

    #[test]
    fn dfs_deep_path() {
        let n = 10_000;
        let graph = Graph::build(n, true, path(n)).unwrap();

        let order = graph.depth_first_order(0);
        assert_eq!(order.discovery, (0..n).collect_vec());
        assert_eq!(order.finish, (0..n).rev().collect_vec());
    }

    #[test]
    fn topology_rank() {
        let graph = Graph::build(7, true, [(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)]).unwrap();

        let order = graph.topological_order().unwrap();
        assert_eq!(order.len(), 7);

        let mut ranks = vec![0; 7];
        for (i, &u) in order.iter().enumerate() {
            ranks[u as usize] = i;
        }
        for e in graph.edges() {
            assert!(ranks[e.source() as usize] < ranks[e.target() as usize]);
        }
        assert!(graph.is_acyclic());
    }

    #[test]
    fn topology_errors() {
        let cyclic = Graph::build(3, true, [(0, 1), (1, 2), (2, 1)]).unwrap();
        assert_eq!(cyclic.topological_order(), Err(GraphError::CyclicGraph));
        assert!(!cyclic.is_acyclic());
        assert_eq!(cyclic.topo_search().collect_vec(), vec![0]);

        let self_loop = Graph::build(2, true, [(0, 1), (1, 1)]).unwrap();
        assert_eq!(self_loop.topological_order(), Err(GraphError::CyclicGraph));

        let undirected = Graph::build(2, false, [(0, 1)]).unwrap();
        assert_eq!(undirected.topological_order(), Err(GraphError::NotDirected));
        assert!(!undirected.is_acyclic());

        let empty = Graph::build(0, true, Vec::<Edge>::new()).unwrap();
        assert_eq!(empty.topological_order(), Ok(vec![]));
    }

    #[test]
    fn topology_random_dags() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for _ in 0..50 {
            let graph = Gnp::new().nodes(25).prob(0.1).directed(true).generate(rng);

            // orienting every edge from the smaller to the larger endpoint yields a DAG
            let dag = Graph::build(
                25,
                true,
                graph.edges().iter().filter(|e| !e.edge.is_loop()).map(|e| e.edge.normalized()),
            )
            .unwrap();

            let order = dag.topological_order().unwrap();
            let mut seen = dag.vertex_bitset_unset();
            for &u in &order {
                assert!(dag.in_neighbors_of(u).all(|v| seen.get_bit(v)));
                seen.set_bit(u);
            }
            assert!(seen.are_all_set());

            // a directed graph is acyclic iff no edge points to a vertex finished later
            let finish = graph.finish_order();
            let mut pos = vec![0; 25];
            for (i, &u) in finish.iter().enumerate() {
                pos[u as usize] = i;
            }
            let has_back_edge = graph
                .edges()
                .iter()
                .any(|e| pos[e.source() as usize] <= pos[e.target() as usize]);
            assert_eq!(graph.is_acyclic(), !has_back_edge);
        }
    }
}
