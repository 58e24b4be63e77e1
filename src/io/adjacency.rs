//! # Adjacency Matrix
//!
//! Row `u` of the matrix lists the weights of all edges leaving `u`; an entry of `0` denotes
//! a missing edge. Diagonal entries are self-loops.

use super::*;

/// Builds a graph from an `n × n` adjacency matrix.
///
/// For undirected graphs, entries `(i, j)` and `(j, i)` describe the same edge: if only one of
/// them is nonzero it still creates the edge, if both are nonzero they must be equal.
///
/// Fails with
/// - [`GraphError::DimensionMismatch`] if the matrix is not `n × n`,
/// - [`GraphError::AsymmetricMatrix`] if an undirected matrix disagrees with itself.
///
/// # Examples
/// ```
/// use graphcheck::{prelude::*, io::*};
///
/// let rows = vec![vec![0.0, 2.0], vec![0.0, 0.0]];
/// let g = from_adjacency_matrix(2, false, &rows).unwrap();
///
/// assert_eq!(g.weight_of(1, 0), Some(2.0));
/// ```
pub fn from_adjacency_matrix<R>(n: NumNodes, directed: bool, rows: &[R]) -> Result<Graph>
where
    R: AsRef<[Weight]>,
{
    let rows = rows.iter().map(AsRef::as_ref).collect::<Vec<_>>();
    check_dimensions!(rows, n as usize, n as usize);

    let mut builder = GraphBuilder::new(n).directed(directed);
    for (i, row) in rows.iter().enumerate() {
        for (j, &w) in row.iter().enumerate() {
            if directed {
                if w != 0.0 {
                    builder.add_edge((i as Node, j as Node, w));
                }
                continue;
            }

            // every undirected pair is handled once, from its upper-triangle position
            if j < i {
                continue;
            }

            let mirrored = rows[j][i];
            if w != 0.0 && mirrored != 0.0 && w != mirrored {
                return Err(GraphError::AsymmetricMatrix { row: i, col: j });
            }

            let weight = if w != 0.0 { w } else { mirrored };
            if weight != 0.0 {
                builder.add_edge((i as Node, j as Node, weight));
            }
        }
    }

    builder.build()
}
