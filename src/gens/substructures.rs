/*!
# Substructure Generators

Edge lists of common motifs:

- **Paths**
- **Cycles**
- **Cliques**

They are meant to be fed into [`Graph::build`] or [`GraphBuilder::edges`], possibly chained
with other edge lists to compose graphs with known components.

# Example

```rust
use graphcheck::{prelude::*, gens::*};

let g = GraphBuilder::new(5)
    .directed(true)
    .edges(path_through([0, 1, 2]))
    .edges(cycle_through([2, 3, 4]))
    .build()
    .unwrap();

assert_eq!(
    g.ordered_edges(false),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;
use crate::utils::NodeBitSet;

/// Connects the given nodes in order with a **simple path**.
/// Each consecutive pair of nodes yields one edge.
pub fn path_through<P>(nodes_on_path: P) -> Vec<Edge>
where
    P: IntoIterator<Item = Node>,
{
    nodes_on_path
        .into_iter()
        .tuple_windows()
        .map(|(u, v)| Edge(u, v))
        .collect()
}

/// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
/// node is connected back to the first. A single node yields a self-loop.
pub fn cycle_through<C>(nodes_in_cycle: C) -> Vec<Edge>
where
    C: IntoIterator<Item = Node>,
{
    let mut iter = nodes_in_cycle.into_iter();
    let mut edges = Vec::new();

    if let Some(first) = iter.next() {
        let mut prev = first;
        for cur in iter {
            edges.push(Edge(prev, cur));
            prev = cur;
        }

        edges.push(Edge(prev, first));
    }

    edges
}

/// Connects all nodes of the set into a **clique**.
///
/// - For undirected graphs, only normalized edges `(u, v)` with `u <= v` are produced.
/// - If `with_loops` is `true`, each node also gets a self-loop.
pub fn clique_on(nodes: &NodeBitSet, directed: bool, with_loops: bool) -> Vec<Edge> {
    nodes
        .iter_set_bits()
        .cartesian_product(nodes.iter_set_bits())
        .map(|(u, v)| Edge(u, v))
        .filter(|e| (with_loops || !e.is_loop()) && (directed || e.is_normalized()))
        .collect()
}

/// Path `0 - 1 - ... - (n-1)`
pub fn path(n: NumNodes) -> Vec<Edge> {
    path_through(0..n)
}

/// Cycle `0 - 1 - ... - (n-1) - 0`
pub fn cycle(n: NumNodes) -> Vec<Edge> {
    cycle_through(0..n)
}

/// Complete graph on `0..n` without self-loops
pub fn clique(n: NumNodes, directed: bool) -> Vec<Edge> {
    clique_on(&NodeBitSet::new_all_set(n), directed, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        assert!(path_through([]).is_empty());
        assert!(path_through([1]).is_empty());
        assert_eq!(path_through([2, 1]), vec![Edge(2, 1)]);
        assert_eq!(
            path_through([0, 3, 1, 4]),
            vec![Edge(0, 3), Edge(3, 1), Edge(1, 4)]
        );
        assert_eq!(path(3), vec![Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn test_cycle() {
        assert!(cycle_through([]).is_empty());
        assert_eq!(cycle_through([1]), vec![Edge(1, 1)]);
        assert_eq!(
            cycle_through([0, 3, 1, 4]),
            vec![Edge(0, 3), Edge(3, 1), Edge(1, 4), Edge(4, 0)]
        );

        let g = Graph::build(5, false, cycle(5)).unwrap();
        assert_eq!(g.number_of_edges(), 5);
        assert!(g.degrees().all(|d| d == 2));
    }

    #[test]
    fn test_clique() {
        assert!(clique_on(&NodeBitSet::new(6), false, true).is_empty());
        assert!(clique_on(&NodeBitSet::new_with_bits_set(6, [1]), false, false).is_empty());
        assert_eq!(
            clique_on(&NodeBitSet::new_with_bits_set(6, [1]), false, true),
            vec![Edge(1, 1)]
        );

        let set = NodeBitSet::new_with_bits_set(6, [1, 2, 4]);
        assert_eq!(clique_on(&set, false, false).len(), 3);
        assert_eq!(clique_on(&set, false, true).len(), 6);
        assert_eq!(clique_on(&set, true, false).len(), 6);
        assert_eq!(clique_on(&set, true, true).len(), 9);

        assert_eq!(clique(5, false).len(), 10);
        assert_eq!(clique(5, true).len(), 20);
    }
}
