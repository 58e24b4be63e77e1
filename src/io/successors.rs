//! # Successor List
//!
//! Each entry `(u, [v1, v2, ...])` contributes the edges `(u, v1), (u, v2), ...`.
//! Vertices may be listed in any order, several times, or not at all.

use super::*;

/// Builds a graph from `(vertex, successors)` pairs.
///
/// Fails with [`GraphError::InvalidEdge`] if a vertex or one of its successors lies outside
/// of `0..n`.
///
/// # Examples
/// ```
/// use graphcheck::{prelude::*, io::*};
///
/// let g = from_successor_list(3, false, [(0, vec![1]), (2, vec![1, 0])]).unwrap();
/// assert_eq!(g.degree_of(0), 2);
/// ```
pub fn from_successor_list<I, S>(n: NumNodes, directed: bool, entries: I) -> Result<Graph>
where
    I: IntoIterator<Item = (Node, S)>,
    S: IntoIterator<Item = Node>,
{
    let mut builder = GraphBuilder::new(n).directed(directed);
    for (u, successors) in entries {
        if u >= n {
            return Err(GraphError::InvalidEdge { u, v: u, n });
        }

        builder.add_edges(successors.into_iter().map(|v| Edge(u, v)));
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_list() {
        let graph =
            from_successor_list(4, true, [(3, vec![0]), (0, vec![1, 2]), (1, vec![])]).unwrap();

        assert_eq!(
            graph.edges().iter().map(|e| e.edge).collect::<Vec<_>>(),
            vec![Edge(3, 0), Edge(0, 1), Edge(0, 2)]
        );
        assert_eq!(graph.vertices_without_in_neighbors().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn undirected_duplicates() {
        let graph = from_successor_list(2, false, [(0, vec![1]), (1, vec![0])]).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            from_successor_list(2, true, [(2, Vec::new())]).unwrap_err(),
            GraphError::InvalidEdge { u: 2, v: 2, n: 2 }
        );
        assert_eq!(
            from_successor_list(2, true, [(0, vec![1, 5])]).unwrap_err(),
            GraphError::InvalidEdge { u: 0, v: 5, n: 2 }
        );
    }
}
